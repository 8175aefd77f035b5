// Copyright 2026 the Waymap Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=waymap_trip --heading-base-level=0

//! Waymap Trip: the trip-search model and snapshot extraction.
//!
//! This crate defines the value types describing a trip search as the
//! viewport engine sees it, and the [`Snapshot`] comparison unit derived
//! from them:
//!
//! - [`TripQuery`]: the user's endpoints and intermediate via points.
//! - [`Itinerary`], [`TripLeg`], [`TripStep`]: the computed route,
//!   replaced wholesale whenever a new search result arrives.
//! - [`TripViewState`]: which leg/step is active, the presentation mode,
//!   and whether a popup is open.
//! - [`TripState`]: the ambient state a host's state container delivers on
//!   every change.
//! - [`Snapshot`]: the point-in-time capture of all of the above that the
//!   viewport engine compares pairwise.
//!
//! Everything here is a plain value type: comparison is structural
//! (field-by-field, order-sensitive for sequences), there is no shared
//! mutable ownership, and capturing a snapshot has no side effects. How
//! the itinerary is computed or the query edited is a host concern; this
//! crate only models the result.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::Point;
//! use waymap_trip::{Snapshot, TripQuery, TripState};
//!
//! let mut state = TripState::default();
//! state.query = TripQuery {
//!     from: Some(Point::new(-122.33, 47.61)),
//!     to: None,
//!     via: Vec::new(),
//! };
//!
//! let snapshot = Snapshot::capture(&state);
//! assert_eq!(snapshot.query.from, state.query.from);
//! assert_eq!(snapshot.itinerary_bounds(), None);
//! ```
//!
//! This crate is `no_std` compatible (with `alloc`).

#![no_std]

extern crate alloc;

mod itinerary;
mod query;
mod snapshot;
mod view;

pub use itinerary::{Itinerary, TripLeg, TripStep};
pub use query::TripQuery;
pub use snapshot::{Snapshot, TripState};
pub use view::{TripViewState, ViewMode};
