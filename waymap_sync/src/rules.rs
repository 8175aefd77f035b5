// Copyright 2026 the Waymap Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The transition classifier: an ordered decision list mapping one
//! snapshot transition to exactly one viewport command.
//!
//! Rules live in [`RULES`] in priority order and are evaluated in
//! sequence; the first rule returning a command wins and nothing after it
//! runs. The order encodes "most structurally significant change wins": a
//! replaced itinerary dominates a leg click, which dominates an endpoint
//! edit, which dominates step navigation. Ties never fall to recency.
//!
//! A rule can conclude three ways:
//!
//! - `Some(command)`: the rule matched; classification stops.
//! - `Some(NoOp)`: the rule matched and pins the viewport; classification
//!   stops (popup suppression works this way).
//! - `None`: the rule does not apply, or it matched but could not
//!   assemble a region with any valid geometry; the next rule runs.

use kurbo::{Point, Rect};
use smallvec::SmallVec;

use waymap_geo::{bounds_of, extend_bounds, is_valid_position};
use waymap_trip::Snapshot;

use crate::command::{FitPadding, ViewportCommand};

/// Everything a rule may consult when classifying one transition.
#[derive(Clone, Debug)]
pub struct RuleContext<'a> {
    /// Snapshot before the transition. On the engine's first observation
    /// this is the empty [`Snapshot::default`] baseline.
    pub prev: &'a Snapshot,
    /// Snapshot after the transition.
    pub curr: &'a Snapshot,
    /// Region the map currently displays, when a map is mounted. Read
    /// from the map handle at classification time; only the via-points
    /// rule consults it.
    pub displayed_bounds: Option<Rect>,
    /// Constrained-input platform flag. Suppresses the both-endpoints
    /// fit, whose abrupt zoom-out fights touch-driven map use on small
    /// screens.
    pub constrained_platform: bool,
    /// Margin attached to every fit except the via-points extension.
    pub padding: FitPadding,
}

/// One entry of the decision list.
#[derive(Clone, Copy, Debug)]
pub struct Rule {
    /// Stable name, for inspection and tests.
    pub name: &'static str,
    /// Evaluates the rule against a transition.
    pub eval: fn(&RuleContext<'_>) -> Option<ViewportCommand>,
}

/// The decision list, in priority order.
pub const RULES: &[Rule] = &[
    Rule {
        name: "popup-suppression",
        eval: popup_suppression,
    },
    Rule {
        name: "view-mode-change",
        eval: view_mode_change,
    },
    Rule {
        name: "itinerary-bounds-change",
        eval: itinerary_bounds_change,
    },
    Rule {
        name: "active-leg-change",
        eval: active_leg_change,
    },
    Rule {
        name: "both-endpoints-fit",
        eval: both_endpoints_fit,
    },
    Rule {
        name: "single-endpoint-pan",
        eval: single_endpoint_pan,
    },
    Rule {
        name: "via-points-extend",
        eval: via_points_extend,
    },
    Rule {
        name: "active-step-pan",
        eval: active_step_pan,
    },
];

/// Classifies one transition into exactly one command.
///
/// Walks [`RULES`] in order and returns the first match, or
/// [`ViewportCommand::NoOp`] when no rule applies.
#[must_use]
pub fn classify(ctx: &RuleContext<'_>) -> ViewportCommand {
    RULES
        .iter()
        .find_map(|rule| (rule.eval)(ctx))
        .unwrap_or(ViewportCommand::NoOp)
}

/// A user-opened popup pins the viewport on both sides of the transition.
fn popup_suppression(ctx: &RuleContext<'_>) -> Option<ViewportCommand> {
    (ctx.prev.view.popup_open || ctx.curr.view.popup_open).then_some(ViewportCommand::NoOp)
}

/// A presentation-mode switch resizes the map container, so the follow-up
/// fit is deferred until layout settles. Targets the active leg when one
/// is selected, the whole itinerary otherwise.
fn view_mode_change(ctx: &RuleContext<'_>) -> Option<ViewportCommand> {
    if ctx.prev.view.view_mode == ctx.curr.view.view_mode {
        return None;
    }
    if ctx.curr.itinerary.is_none() {
        return Some(ViewportCommand::NoOp);
    }
    let bounds = match ctx.curr.view.active_leg {
        Some(leg) => ctx.curr.leg_bounds(leg),
        None => ctx.curr.itinerary_bounds(),
    };
    bounds.map(|bounds| ViewportCommand::deferred_fit(bounds, ctx.padding))
}

/// A new search result replaces the itinerary wholesale; refit to it.
/// Bounds compare by corner values, since they are recomputed per capture.
fn itinerary_bounds_change(ctx: &RuleContext<'_>) -> Option<ViewportCommand> {
    let curr_bounds = ctx.curr.itinerary_bounds();
    if ctx.prev.itinerary_bounds() == curr_bounds {
        return None;
    }
    curr_bounds.map(|bounds| ViewportCommand::fit(bounds, ctx.padding))
}

/// Selecting a different leg refits to that leg.
fn active_leg_change(ctx: &RuleContext<'_>) -> Option<ViewportCommand> {
    let leg = ctx.curr.view.active_leg?;
    if ctx.prev.view.active_leg == Some(leg) {
        return None;
    }
    ctx.curr.itinerary.as_ref()?;
    ctx.curr
        .leg_bounds(leg)
        .map(|bounds| ViewportCommand::fit(bounds, ctx.padding))
}

/// With both endpoints chosen, an endpoint edit refits to the whole
/// query: endpoints plus via points. Suppressed on constrained-input
/// platforms.
fn both_endpoints_fit(ctx: &RuleContext<'_>) -> Option<ViewportCommand> {
    if ctx.constrained_platform {
        return None;
    }
    let from = ctx.curr.query.from?;
    let to = ctx.curr.query.to?;
    if ctx.prev.query.from == ctx.curr.query.from && ctx.prev.query.to == ctx.curr.query.to {
        return None;
    }
    let mut points: SmallVec<[Point; 8]> = SmallVec::new();
    points.push(from);
    points.push(to);
    points.extend(ctx.curr.query.via.iter().copied());
    bounds_of(points).map(|bounds| ViewportCommand::fit(bounds, ctx.padding))
}

/// With exactly one endpoint edited, pan to it without changing zoom.
fn single_endpoint_pan(ctx: &RuleContext<'_>) -> Option<ViewportCommand> {
    let from_changed = ctx.prev.query.from != ctx.curr.query.from;
    let to_changed = ctx.prev.query.to != ctx.curr.query.to;
    let target = if from_changed && !to_changed {
        ctx.curr.query.from
    } else if to_changed && !from_changed {
        ctx.curr.query.to
    } else {
        None
    };
    target
        .filter(|position| is_valid_position(*position))
        .map(ViewportCommand::PanTo)
}

/// An edited via list widens the currently displayed region to include
/// each via point, keeping the existing framing (no extra margin).
fn via_points_extend(ctx: &RuleContext<'_>) -> Option<ViewportCommand> {
    if ctx.prev.query.via == ctx.curr.query.via {
        return None;
    }
    let displayed = ctx.displayed_bounds?;
    let bounds = extend_bounds(displayed, ctx.curr.query.via.iter().copied());
    Some(ViewportCommand::fit(bounds, FitPadding::None))
}

/// Stepping through a leg's maneuvers pans to the selected step.
fn active_step_pan(ctx: &RuleContext<'_>) -> Option<ViewportCommand> {
    ctx.curr.itinerary.as_ref()?;
    let leg = ctx.curr.view.active_leg?;
    let step = ctx.curr.view.active_step?;
    if ctx.prev.view.active_step == Some(step) {
        return None;
    }
    ctx.curr
        .step_position(leg, step)
        .map(ViewportCommand::PanTo)
}
