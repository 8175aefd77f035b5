// Copyright 2026 the Waymap Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=waymap_geo --heading-base-level=0

//! Waymap Geo: geographic coordinate conventions and bounds aggregation.
//!
//! This crate fixes the coordinate vocabulary shared by the Waymap crates and
//! provides the small set of pure bounds helpers the viewport engine needs:
//! - A validity rule for geographic positions.
//! - Tight axis-aligned bounding rectangles over collections of positions.
//! - Extension of an existing rectangle by further positions.
//!
//! ## Conventions
//!
//! Positions are [`kurbo::Point`] values with `x` holding the longitude in
//! degrees and `y` the latitude in degrees. Regions are [`kurbo::Rect`]
//! values whose `(x0, y0)` corner is the south-west extreme and whose
//! `(x1, y1)` corner is the north-east extreme. Equality on both is exact
//! value equality of the coordinates.
//!
//! There is no "empty rectangle" encoding: an aggregation over zero valid
//! positions yields [`None`], and callers branch on that rather than on a
//! sentinel `Rect`. A rectangle built from a single position is degenerate
//! (zero width and height) but is a legal region.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::Point;
//! use waymap_geo::{bounds_of, extend_bounds, is_valid_position};
//!
//! // Seattle and Portland, as (longitude, latitude).
//! let seattle = Point::new(-122.33, 47.61);
//! let portland = Point::new(-122.68, 45.52);
//! assert!(is_valid_position(seattle));
//!
//! let bounds = bounds_of([seattle, portland]).unwrap();
//! assert_eq!(bounds.y0, 45.52);
//! assert_eq!(bounds.y1, 47.61);
//!
//! // Grow the rectangle to include a via point further east.
//! let spokane = Point::new(-117.42, 47.66);
//! let grown = extend_bounds(bounds, [spokane]);
//! assert_eq!(grown.x1, -117.42);
//! ```
//!
//! Invalid positions (non-finite coordinates, latitudes beyond ±90°,
//! longitudes beyond ±180°) are excluded from aggregation rather than
//! reported as errors; see [`is_valid_position`].
//!
//! This crate is `no_std`.

#![no_std]

mod bounds;
mod position;

pub use bounds::{bounds_of, extend_bounds};
pub use position::{MAX_ABS_LATITUDE, MAX_ABS_LONGITUDE, is_valid_position};
