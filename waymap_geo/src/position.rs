// Copyright 2026 the Waymap Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::Point;

/// Largest representable absolute latitude, in degrees.
pub const MAX_ABS_LATITUDE: f64 = 90.0;

/// Largest representable absolute longitude, in degrees.
pub const MAX_ABS_LONGITUDE: f64 = 180.0;

/// Returns `true` if `position` is a usable geographic position.
///
/// A position is valid when both coordinates are finite, its latitude
/// (`y`) lies within ±[`MAX_ABS_LATITUDE`] and its longitude (`x`) lies
/// within ±[`MAX_ABS_LONGITUDE`]. Positions failing this test are excluded
/// from bounds aggregation by [`bounds_of`](crate::bounds_of) and
/// [`extend_bounds`](crate::extend_bounds) and must never be handed to a
/// map backend.
#[must_use]
pub fn is_valid_position(position: Point) -> bool {
    position.x.is_finite()
        && position.y.is_finite()
        && position.y.abs() <= MAX_ABS_LATITUDE
        && position.x.abs() <= MAX_ABS_LONGITUDE
}

#[cfg(test)]
mod tests {
    use kurbo::Point;

    use super::is_valid_position;

    #[test]
    fn ordinary_positions_are_valid() {
        assert!(is_valid_position(Point::new(-122.33, 47.61)));
        assert!(is_valid_position(Point::new(0.0, 0.0)));
        assert!(is_valid_position(Point::new(179.99, -89.99)));
    }

    #[test]
    fn boundary_positions_are_valid() {
        assert!(is_valid_position(Point::new(180.0, 90.0)));
        assert!(is_valid_position(Point::new(-180.0, -90.0)));
    }

    #[test]
    fn out_of_range_positions_are_invalid() {
        assert!(!is_valid_position(Point::new(180.01, 0.0)));
        assert!(!is_valid_position(Point::new(0.0, 90.01)));
        assert!(!is_valid_position(Point::new(-500.0, 0.0)));
    }

    #[test]
    fn non_finite_positions_are_invalid() {
        assert!(!is_valid_position(Point::new(f64::NAN, 0.0)));
        assert!(!is_valid_position(Point::new(0.0, f64::NAN)));
        assert!(!is_valid_position(Point::new(f64::INFINITY, 0.0)));
        assert!(!is_valid_position(Point::new(0.0, f64::NEG_INFINITY)));
    }
}
