// Copyright 2026 the Waymap Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Point, Rect};

use crate::position::is_valid_position;

/// Returns the tight bounding rectangle of all valid positions in `points`.
///
/// Invalid positions (see [`is_valid_position`]) are skipped. Returns
/// [`None`] when no valid position remains, so callers never observe a
/// sentinel "empty" rectangle. A single valid position yields a degenerate
/// rectangle with zero width and height.
#[must_use]
pub fn bounds_of(points: impl IntoIterator<Item = Point>) -> Option<Rect> {
    let mut bounds: Option<Rect> = None;
    for point in points {
        if !is_valid_position(point) {
            continue;
        }
        bounds = Some(match bounds {
            None => Rect::from_points(point, point),
            Some(rect) => rect.union_pt(point),
        });
    }
    bounds
}

/// Returns `bounds` grown to include each valid position in `points`.
///
/// Invalid positions are skipped; with no valid positions the input
/// rectangle is returned unchanged. The input rectangle is taken as-is,
/// so a backend-reported display region keeps its framing.
#[must_use]
pub fn extend_bounds(bounds: Rect, points: impl IntoIterator<Item = Point>) -> Rect {
    points
        .into_iter()
        .filter(|point| is_valid_position(*point))
        .fold(bounds, |rect, point| rect.union_pt(point))
}

#[cfg(test)]
mod tests {
    use kurbo::{Point, Rect};

    use super::{bounds_of, extend_bounds};

    #[test]
    fn bounds_of_no_points_is_none() {
        assert_eq!(bounds_of([]), None);
    }

    #[test]
    fn bounds_of_single_point_is_degenerate() {
        let p = Point::new(-122.33, 47.61);
        let bounds = bounds_of([p]).unwrap();
        assert_eq!(bounds, Rect::new(-122.33, 47.61, -122.33, 47.61));
        assert_eq!(bounds.area(), 0.0);
    }

    #[test]
    fn bounds_of_orders_corners() {
        // Points given north-west before south-east; corners still come out
        // as (min, min) .. (max, max).
        let bounds = bounds_of([Point::new(-122.0, 48.0), Point::new(-121.0, 47.0)]).unwrap();
        assert_eq!(bounds, Rect::new(-122.0, 47.0, -121.0, 48.0));
    }

    #[test]
    fn bounds_of_skips_invalid_points() {
        let bounds = bounds_of([
            Point::new(f64::NAN, 47.0),
            Point::new(-122.0, 47.0),
            Point::new(0.0, 91.0),
            Point::new(-121.0, 48.0),
        ])
        .unwrap();
        assert_eq!(bounds, Rect::new(-122.0, 47.0, -121.0, 48.0));
    }

    #[test]
    fn bounds_of_all_invalid_is_none() {
        assert_eq!(
            bounds_of([Point::new(f64::NAN, 0.0), Point::new(200.0, 0.0)]),
            None
        );
    }

    #[test]
    fn extend_bounds_grows_in_each_direction() {
        let base = Rect::new(-122.0, 47.0, -121.0, 48.0);
        let grown = extend_bounds(base, [Point::new(-123.0, 46.5), Point::new(-120.5, 48.5)]);
        assert_eq!(grown, Rect::new(-123.0, 46.5, -120.5, 48.5));
    }

    #[test]
    fn extend_bounds_ignores_interior_and_invalid_points() {
        let base = Rect::new(-122.0, 47.0, -121.0, 48.0);
        let grown = extend_bounds(
            base,
            [Point::new(-121.5, 47.5), Point::new(f64::INFINITY, 47.5)],
        );
        assert_eq!(grown, base);
    }

    #[test]
    fn extend_bounds_with_no_points_is_identity() {
        let base = Rect::new(-1.0, -1.0, 1.0, 1.0);
        assert_eq!(extend_bounds(base, []), base);
    }
}
