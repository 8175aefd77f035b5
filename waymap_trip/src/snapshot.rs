// Copyright 2026 the Waymap Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Point, Rect};

use waymap_geo::is_valid_position;

use crate::itinerary::Itinerary;
use crate::query::TripQuery;
use crate::view::TripViewState;

/// The ambient trip-search state, as delivered by the host's state
/// container on every change.
///
/// The viewport engine never holds onto a `TripState`; it derives a
/// [`Snapshot`] from it and forgets the rest.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TripState {
    /// Current search query.
    pub query: TripQuery,
    /// Computed itinerary of the current search result, if any.
    pub itinerary: Option<Itinerary>,
    /// Current view state of the results UI.
    pub view: TripViewState,
}

/// Point-in-time capture of the trip-search state used for transition
/// comparison.
///
/// Snapshots are value types: each capture produces a fresh value and two
/// snapshots compare structurally, field by field. The engine retains
/// exactly one previous snapshot; [`Snapshot::default`] is the empty
/// baseline it compares against on the first observation.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Snapshot {
    /// Search query at capture time.
    pub query: TripQuery,
    /// Itinerary at capture time, if a search result existed.
    pub itinerary: Option<Itinerary>,
    /// View state at capture time.
    pub view: TripViewState,
}

impl Snapshot {
    /// Captures a snapshot of `state`.
    ///
    /// Deterministic and side-effect free; absence flows through (no
    /// search result gives `itinerary = None`, unset endpoints stay
    /// `None`).
    #[must_use]
    pub fn capture(state: &TripState) -> Self {
        Self {
            query: state.query.clone(),
            itinerary: state.itinerary.clone(),
            view: state.view,
        }
    }

    /// Returns the bounding rectangle of the whole itinerary, if the
    /// snapshot has an itinerary with any valid geometry.
    #[must_use]
    pub fn itinerary_bounds(&self) -> Option<Rect> {
        self.itinerary.as_ref().and_then(Itinerary::bounds)
    }

    /// Returns the bounding rectangle of the leg at `index`, if that leg
    /// exists and has any valid geometry.
    #[must_use]
    pub fn leg_bounds(&self, index: usize) -> Option<Rect> {
        self.itinerary
            .as_ref()
            .and_then(|itinerary| itinerary.leg(index))
            .and_then(|leg| leg.bounds())
    }

    /// Returns the position of step `step` of leg `leg`, if both indices
    /// are in range and the position is valid.
    #[must_use]
    pub fn step_position(&self, leg: usize, step: usize) -> Option<Point> {
        self.itinerary
            .as_ref()
            .and_then(|itinerary| itinerary.leg(leg))
            .and_then(|leg| leg.steps.get(step))
            .map(|step| step.position)
            .filter(|position| is_valid_position(*position))
    }
}
