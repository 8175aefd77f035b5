// Copyright 2026 the Waymap Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Point, Rect};

/// Margin applied around a fitted region.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum FitPadding {
    /// Uniform margin in view units on every side.
    Uniform(f64),
    /// No margin: the region is framed exactly as given. Used when the
    /// fitted region already carries its framing, such as when extending
    /// the currently displayed bounds.
    None,
}

/// Default uniform fit margin, in view units.
pub const DEFAULT_FIT_PADDING: f64 = 64.0;

impl Default for FitPadding {
    fn default() -> Self {
        Self::Uniform(DEFAULT_FIT_PADDING)
    }
}

/// What the viewport should do in response to one state transition.
///
/// Commands are ephemeral: the classifier produces exactly one per
/// transition and the executor consumes it immediately. They are exposed
/// publicly so hosts and tests can observe the engine's decision.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ViewportCommand {
    /// Move and zoom the viewport so `bounds` is fully visible.
    FitBounds {
        /// Region to bring into view. Never empty by construction: rules
        /// that cannot produce a real region fall through instead.
        bounds: Rect,
        /// Margin around the fitted region.
        padding: FitPadding,
        /// When set, execution waits for a layout settle delay and is
        /// preceded by a forced container-resize notification. Only the
        /// view-mode rule defers.
        deferred: bool,
    },
    /// Pan the viewport center to the given position without zooming.
    PanTo(Point),
    /// Leave the viewport untouched.
    NoOp,
}

impl ViewportCommand {
    /// Convenience constructor for an immediate fit.
    #[must_use]
    pub fn fit(bounds: Rect, padding: FitPadding) -> Self {
        Self::FitBounds {
            bounds,
            padding,
            deferred: false,
        }
    }

    /// Convenience constructor for a deferred fit.
    #[must_use]
    pub fn deferred_fit(bounds: Rect, padding: FitPadding) -> Self {
        Self::FitBounds {
            bounds,
            padding,
            deferred: true,
        }
    }

    /// Returns `true` for [`ViewportCommand::NoOp`].
    #[must_use]
    pub fn is_noop(&self) -> bool {
        matches!(self, Self::NoOp)
    }
}
