// Copyright 2026 the Waymap Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Point, Rect};

use crate::command::FitPadding;

/// Capability interface to the externally owned map widget.
///
/// The engine never owns the map: hosts lend it per call (as
/// `Option<&mut M>`), and every command degrades to a silent no-op while
/// no map is mounted. Implementations translate these calls onto the
/// actual map-drawing backend.
///
/// Callers uphold one contract: `fit_bounds` is only ever invoked with a
/// real region. The engine guarantees this by construction; rules that
/// cannot assemble a region with valid geometry fall through instead of
/// emitting a fit.
pub trait MapHandle {
    /// Move and zoom so `bounds` is fully visible with the given margin.
    fn fit_bounds(&mut self, bounds: Rect, padding: FitPadding);

    /// Pan the viewport center to `center` without changing zoom.
    fn pan_to(&mut self, center: Point);

    /// Currently displayed region.
    fn bounds(&self) -> Rect;

    /// Notify the map that its container may have been resized. `force`
    /// requests an immediate re-measure even if no resize was observed.
    fn invalidate_size(&mut self, force: bool);
}
