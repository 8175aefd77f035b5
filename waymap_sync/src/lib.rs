// Copyright 2026 the Waymap Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=waymap_sync --heading-base-level=0

//! Waymap Sync: the viewport synchronization engine.
//!
//! This crate decides whether and how a map viewport should move when the
//! trip-search state changes. It observes a sequence of state snapshots
//! and, on each transition, selects exactly one [`ViewportCommand`]: fit a
//! region, pan to a position, or leave the viewport alone.
//!
//! Three pieces cooperate:
//!
//! - **Snapshot comparison** ([`waymap_trip::Snapshot`]): each
//!   observation captures the ambient state; the engine retains exactly
//!   one previous snapshot and nothing older.
//! - **The classifier** ([`RULES`], [`classify`]): an ordered decision
//!   list evaluated to the first match. The order is the contract:
//!   a popup pins the viewport outright; a view-mode switch defers a fit
//!   past the layout settle; a replaced itinerary dominates a leg click,
//!   which dominates endpoint edits, which dominate step navigation.
//! - **The executor** ([`ViewportSync`]): applies the chosen command to a
//!   host-lent [`MapHandle`], immediately for pans and plain fits, after
//!   a cancellable settle delay for the view-mode fit.
//!
//! The engine is headless and host-driven, in the same spirit as the
//! event-state managers it composes with: no clock is read (hosts pass
//! monotonic milliseconds), no map is owned (hosts lend a handle per
//! call, and every command degrades to a silent no-op without one), and
//! no subscription machinery is imposed (hosts call
//! [`ViewportSync::observe`] from whatever change notification they
//! already have).
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::{Point, Rect};
//! use waymap_sync::{FitPadding, MapHandle, ViewportCommand, ViewportSync};
//! use waymap_trip::TripState;
//!
//! struct LoggingMap;
//! impl MapHandle for LoggingMap {
//!     fn fit_bounds(&mut self, bounds: Rect, _padding: FitPadding) {
//!         println!("fit {bounds:?}");
//!     }
//!     fn pan_to(&mut self, center: Point) {
//!         println!("pan {center:?}");
//!     }
//!     fn bounds(&self) -> Rect {
//!         Rect::new(-123.0, 45.0, -121.0, 48.0)
//!     }
//!     fn invalidate_size(&mut self, _force: bool) {}
//! }
//!
//! let mut engine = ViewportSync::new();
//! let mut map = LoggingMap;
//!
//! // Host delivers state changes and clock ticks:
//! let mut state = TripState::default();
//! state.query.from = Some(Point::new(-122.33, 47.61));
//! let command = engine.observe(1_000, &state, Some(&mut map));
//! assert_eq!(command, ViewportCommand::PanTo(Point::new(-122.33, 47.61)));
//!
//! // Deferred fits (after a view-mode change) fire on a later tick.
//! engine.tick(1_300, Some(&mut map));
//! ```
//!
//! This crate is `no_std` compatible (with `alloc`).

#![no_std]

extern crate alloc;

mod command;
mod engine;
mod map;
mod rules;

pub use command::{DEFAULT_FIT_PADDING, FitPadding, ViewportCommand};
pub use engine::{SETTLE_DELAY_MS, SyncConfig, SyncDebugInfo, ViewportSync};
pub use map::MapHandle;
pub use rules::{RULES, Rule, RuleContext, classify};
