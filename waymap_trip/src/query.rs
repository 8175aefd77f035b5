// Copyright 2026 the Waymap Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::vec::Vec;

use kurbo::Point;

/// The user's search endpoints and intermediate via points.
///
/// Either endpoint may be absent while the user is still editing the
/// search. The host replaces the whole query per edit; the engine never
/// mutates it. Comparison is structural and order-sensitive for `via`,
/// so reordering via points counts as a change.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TripQuery {
    /// Origin position, if one has been chosen.
    pub from: Option<Point>,
    /// Destination position, if one has been chosen.
    pub to: Option<Point>,
    /// Ordered intermediate places routed through between the endpoints.
    pub via: Vec<Point>,
}

#[cfg(test)]
mod tests {
    use alloc::vec;

    use kurbo::Point;

    use super::TripQuery;

    #[test]
    fn default_query_is_empty() {
        let query = TripQuery::default();
        assert_eq!(query.from, None);
        assert_eq!(query.to, None);
        assert!(query.via.is_empty());
    }

    #[test]
    fn via_comparison_is_order_sensitive() {
        let a = TripQuery {
            via: vec![Point::new(1.0, 1.0), Point::new(2.0, 2.0)],
            ..TripQuery::default()
        };
        let b = TripQuery {
            via: vec![Point::new(2.0, 2.0), Point::new(1.0, 1.0)],
            ..TripQuery::default()
        };
        assert_ne!(a, b);
    }

    #[test]
    fn endpoint_comparison_is_exact() {
        let a = TripQuery {
            from: Some(Point::new(-122.33, 47.61)),
            ..TripQuery::default()
        };
        let b = TripQuery {
            from: Some(Point::new(-122.33, 47.610001)),
            ..TripQuery::default()
        };
        assert_ne!(a, b);
        assert_eq!(a, a.clone());
    }
}
