// Copyright 2026 the Waymap Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::Rect;

use waymap_timing::{TimerQueue, TimerToken};
use waymap_trip::{Snapshot, TripState};

use crate::command::{FitPadding, ViewportCommand};
use crate::map::MapHandle;
use crate::rules::{RuleContext, classify};

/// Delay before a deferred fit executes, in milliseconds. Long enough for
/// a view-mode layout change to finish resizing the map container.
pub const SETTLE_DELAY_MS: u64 = 250;

/// Engine configuration, fixed at construction.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SyncConfig {
    /// Constrained-input platform flag (touch-primary, space-constrained).
    /// Consulted only by the both-endpoints fit rule.
    pub constrained_platform: bool,
    /// Margin for every fit except the via-points extension.
    pub padding: FitPadding,
    /// Settle delay for deferred fits, in milliseconds.
    pub settle_delay_ms: u64,
}

impl Default for SyncConfig {
    fn default() -> Self {
        Self {
            constrained_platform: false,
            padding: FitPadding::default(),
            settle_delay_ms: SETTLE_DELAY_MS,
        }
    }
}

/// A deferred fit waiting out its settle delay.
#[derive(Clone, Copy, Debug)]
struct PendingFit {
    bounds: Rect,
    padding: FitPadding,
}

/// Keeps a map viewport synchronized with a mutable trip-search state.
///
/// Hosts call [`ViewportSync::observe`] with a fresh [`TripState`] on
/// every relevant change and [`ViewportSync::tick`] as their clock
/// advances. Each observation is classified against the previous snapshot
/// into exactly one [`ViewportCommand`], which is applied to the lent map
/// handle. Only the latest transition matters; intermediate states that
/// were never observed are never replayed.
///
/// The engine retains exactly one previous snapshot and at most one
/// pending deferred fit. A newer deferred fit supersedes (cancels) an
/// older one, [`ViewportSync::reset`] cancels on teardown, and dropping
/// the engine drops its timer queue, so no scheduled fit can outlive it.
///
/// ## Minimal example
///
/// ```rust
/// use kurbo::{Point, Rect};
/// use waymap_sync::{FitPadding, MapHandle, ViewportCommand, ViewportSync};
/// use waymap_trip::TripState;
///
/// struct NullMap;
/// impl MapHandle for NullMap {
///     fn fit_bounds(&mut self, _bounds: Rect, _padding: FitPadding) {}
///     fn pan_to(&mut self, _center: Point) {}
///     fn bounds(&self) -> Rect {
///         Rect::new(-123.0, 45.0, -121.0, 48.0)
///     }
///     fn invalidate_size(&mut self, _force: bool) {}
/// }
///
/// let mut engine = ViewportSync::new();
/// let mut map = NullMap;
///
/// let mut state = TripState::default();
/// state.query.from = Some(Point::new(-122.33, 47.61));
///
/// // Choosing the first endpoint pans the map to it.
/// let command = engine.observe(1000, &state, Some(&mut map));
/// assert_eq!(command, ViewportCommand::PanTo(Point::new(-122.33, 47.61)));
///
/// // Observing the same state again is a no-op.
/// let command = engine.observe(1100, &state, Some(&mut map));
/// assert!(command.is_noop());
/// ```
#[derive(Debug)]
pub struct ViewportSync {
    config: SyncConfig,
    prev: Option<Snapshot>,
    timers: TimerQueue<PendingFit>,
    pending_fit: Option<TimerToken>,
}

impl Default for ViewportSync {
    fn default() -> Self {
        Self::new()
    }
}

impl ViewportSync {
    /// Creates an engine with the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(SyncConfig::default())
    }

    /// Creates an engine with the given configuration.
    #[must_use]
    pub fn with_config(config: SyncConfig) -> Self {
        Self {
            config,
            prev: None,
            timers: TimerQueue::new(),
            pending_fit: None,
        }
    }

    /// Returns the configuration this engine was built with.
    #[must_use]
    pub fn config(&self) -> SyncConfig {
        self.config
    }

    /// Processes one state-change notification.
    ///
    /// Captures a snapshot of `state`, classifies it against the previous
    /// snapshot, applies the resulting command, and retains the snapshot
    /// for the next comparison. The command is returned so hosts can
    /// observe the decision.
    ///
    /// `map` may be `None` while no map is mounted: classification still
    /// runs (it is cheap and keeps the snapshot history correct), and
    /// immediate commands are silently dropped. A deferred fit is still
    /// scheduled, so a map mounting within the settle delay receives it.
    pub fn observe<M: MapHandle>(
        &mut self,
        now_ms: u64,
        state: &TripState,
        map: Option<&mut M>,
    ) -> ViewportCommand {
        let curr = Snapshot::capture(state);
        let baseline = Snapshot::default();
        let ctx = RuleContext {
            prev: self.prev.as_ref().unwrap_or(&baseline),
            curr: &curr,
            displayed_bounds: map.as_ref().map(|map| map.bounds()),
            constrained_platform: self.config.constrained_platform,
            padding: self.config.padding,
        };
        let command = classify(&ctx);
        self.execute(now_ms, command, map);
        self.prev = Some(curr);
        command
    }

    /// Fires any deferred fit whose settle delay has elapsed by `now_ms`.
    ///
    /// Firing issues a forced container-resize notification before the
    /// fit, since the deferral exists to ride out a layout change. With no
    /// map mounted the fire is dropped; it is not rescheduled.
    pub fn tick<M: MapHandle>(&mut self, now_ms: u64, mut map: Option<&mut M>) {
        for (token, fit) in self.timers.fire_due(now_ms) {
            if self.pending_fit == Some(token) {
                self.pending_fit = None;
            }
            if let Some(map) = map.as_deref_mut() {
                map.invalidate_size(true);
                map.fit_bounds(fit.bounds, fit.padding);
            }
        }
    }

    /// Returns `true` while a deferred fit is waiting out its settle
    /// delay.
    #[must_use]
    pub fn has_pending_fit(&self) -> bool {
        self.pending_fit
            .is_some_and(|token| self.timers.is_pending(token))
    }

    /// Forgets the previous snapshot and cancels any pending deferred
    /// fit.
    ///
    /// Hosts call this on teardown before releasing the engine (dropping
    /// the engine has the same effect on the pending fit). The next
    /// observation is classified against the empty baseline again.
    pub fn reset(&mut self) {
        self.prev = None;
        self.pending_fit = None;
        self.timers.clear();
    }

    /// Snapshot of the engine state for debugging and inspection.
    #[must_use]
    pub fn debug_info(&self) -> SyncDebugInfo {
        SyncDebugInfo {
            config: self.config,
            has_previous_snapshot: self.prev.is_some(),
            has_pending_fit: self.has_pending_fit(),
        }
    }

    fn execute<M: MapHandle>(
        &mut self,
        now_ms: u64,
        command: ViewportCommand,
        map: Option<&mut M>,
    ) {
        match command {
            ViewportCommand::NoOp => {}
            ViewportCommand::PanTo(center) => {
                if let Some(map) = map {
                    map.pan_to(center);
                }
            }
            ViewportCommand::FitBounds {
                bounds,
                padding,
                deferred: false,
            } => {
                if let Some(map) = map {
                    map.fit_bounds(bounds, padding);
                }
            }
            ViewportCommand::FitBounds {
                bounds,
                padding,
                deferred: true,
            } => {
                // Only the most recent deferred fit may ever fire.
                if let Some(token) = self.pending_fit.take() {
                    let _ = self.timers.cancel(token);
                }
                let fit = PendingFit { bounds, padding };
                let token = self
                    .timers
                    .schedule(now_ms, self.config.settle_delay_ms, fit);
                self.pending_fit = Some(token);
            }
        }
    }
}

/// Debug snapshot of a [`ViewportSync`] state.
#[derive(Clone, Copy, Debug)]
pub struct SyncDebugInfo {
    /// Configuration the engine was built with.
    pub config: SyncConfig,
    /// Whether a previous snapshot is retained.
    pub has_previous_snapshot: bool,
    /// Whether a deferred fit is waiting out its settle delay.
    pub has_pending_fit: bool,
}
