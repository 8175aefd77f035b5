// Copyright 2026 the Waymap Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::vec::Vec;

use kurbo::{Point, Rect};

use waymap_geo::bounds_of;

/// One maneuver point within a leg.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TripStep {
    /// Geographic position of the maneuver (x = longitude, y = latitude).
    pub position: Point,
}

impl TripStep {
    /// Creates a step at the given position.
    #[must_use]
    pub fn new(position: Point) -> Self {
        Self { position }
    }
}

/// One leg of an itinerary: an ordered sequence of steps.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TripLeg {
    /// Ordered maneuver steps of this leg.
    pub steps: Vec<TripStep>,
}

impl TripLeg {
    /// Creates a leg from its ordered steps.
    #[must_use]
    pub fn new(steps: Vec<TripStep>) -> Self {
        Self { steps }
    }

    /// Returns the bounding rectangle of this leg's valid step positions.
    ///
    /// `None` when the leg has no step with a valid position.
    #[must_use]
    pub fn bounds(&self) -> Option<Rect> {
        bounds_of(self.steps.iter().map(|step| step.position))
    }
}

/// A computed route: an ordered sequence of legs.
///
/// Itineraries are immutable once produced; a new search result replaces
/// the whole value rather than mutating it in place.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Itinerary {
    /// Ordered legs of the route.
    pub legs: Vec<TripLeg>,
}

impl Itinerary {
    /// Creates an itinerary from its ordered legs.
    #[must_use]
    pub fn new(legs: Vec<TripLeg>) -> Self {
        Self { legs }
    }

    /// Returns the leg at `index`, if present.
    #[must_use]
    pub fn leg(&self, index: usize) -> Option<&TripLeg> {
        self.legs.get(index)
    }

    /// Returns the bounding rectangle over all legs' valid step positions.
    ///
    /// `None` when no leg contributes a valid position.
    #[must_use]
    pub fn bounds(&self) -> Option<Rect> {
        bounds_of(
            self.legs
                .iter()
                .flat_map(|leg| leg.steps.iter().map(|step| step.position)),
        )
    }
}

#[cfg(test)]
mod tests {
    use alloc::vec;

    use kurbo::{Point, Rect};

    use super::{Itinerary, TripLeg, TripStep};

    fn leg(points: &[(f64, f64)]) -> TripLeg {
        TripLeg::new(
            points
                .iter()
                .map(|&(x, y)| TripStep::new(Point::new(x, y)))
                .collect(),
        )
    }

    #[test]
    fn empty_leg_has_no_bounds() {
        assert_eq!(TripLeg::default().bounds(), None);
    }

    #[test]
    fn leg_bounds_covers_all_steps() {
        let leg = leg(&[(-122.0, 47.0), (-121.5, 47.5), (-121.0, 46.8)]);
        assert_eq!(leg.bounds(), Some(Rect::new(-122.0, 46.8, -121.0, 47.5)));
    }

    #[test]
    fn leg_bounds_skips_invalid_steps() {
        let leg = leg(&[(-122.0, 47.0), (f64::NAN, 47.5)]);
        assert_eq!(leg.bounds(), Some(Rect::new(-122.0, 47.0, -122.0, 47.0)));
    }

    #[test]
    fn itinerary_bounds_spans_legs() {
        let itinerary = Itinerary::new(vec![
            leg(&[(-122.0, 47.0), (-121.5, 47.2)]),
            leg(&[(-121.5, 47.2), (-120.0, 48.0)]),
        ]);
        assert_eq!(
            itinerary.bounds(),
            Some(Rect::new(-122.0, 47.0, -120.0, 48.0))
        );
    }

    #[test]
    fn itinerary_with_only_invalid_geometry_has_no_bounds() {
        let itinerary = Itinerary::new(vec![leg(&[(f64::NAN, 0.0)]), leg(&[])]);
        assert_eq!(itinerary.bounds(), None);
    }

    #[test]
    fn leg_lookup_is_bounds_checked() {
        let itinerary = Itinerary::new(vec![leg(&[(-122.0, 47.0)])]);
        assert!(itinerary.leg(0).is_some());
        assert!(itinerary.leg(1).is_none());
    }
}
