// Copyright 2026 the Waymap Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

/// Presentation mode of the trip results UI.
///
/// The viewport engine treats this as an opaque tag: it only ever asks
/// whether the mode changed between two snapshots, because a mode switch
/// resizes the map container and the follow-up fit must wait for layout
/// to settle.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ViewMode {
    /// Summary list of itinerary alternatives.
    List,
    /// Expanded detail view of one itinerary.
    Detail,
}

/// Which parts of the results the user is currently inspecting.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TripViewState {
    /// Index of the highlighted leg, if any.
    pub active_leg: Option<usize>,
    /// Index of the highlighted step within the active leg, if any.
    pub active_step: Option<usize>,
    /// Current presentation mode, absent before the first result renders.
    pub view_mode: Option<ViewMode>,
    /// `true` while a map popup opened by the user is showing.
    pub popup_open: bool,
}

#[cfg(test)]
mod tests {
    use super::{TripViewState, ViewMode};

    #[test]
    fn default_view_state_is_inactive() {
        let view = TripViewState::default();
        assert_eq!(view.active_leg, None);
        assert_eq!(view.active_step, None);
        assert_eq!(view.view_mode, None);
        assert!(!view.popup_open);
    }

    #[test]
    fn view_state_comparison_is_field_wise() {
        let base = TripViewState::default();
        let detail = TripViewState {
            view_mode: Some(ViewMode::Detail),
            ..base
        };
        assert_ne!(base, detail);
        assert_eq!(detail, detail);
    }
}
