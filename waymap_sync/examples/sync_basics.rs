// Copyright 2026 the Waymap Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Viewport synchronization basics.
//!
//! Drive the engine through a small trip-planning session with a map
//! double that prints every viewport command it receives.
//!
//! Run:
//! - `cargo run -p waymap_sync --example sync_basics`

use kurbo::{Point, Rect};
use waymap_sync::{FitPadding, MapHandle, SETTLE_DELAY_MS, ViewportSync};
use waymap_trip::{Itinerary, TripLeg, TripState, TripStep, ViewMode};

struct PrintingMap {
    displayed: Rect,
}

impl MapHandle for PrintingMap {
    fn fit_bounds(&mut self, bounds: Rect, padding: FitPadding) {
        println!("map: fit {bounds:?} ({padding:?})");
        self.displayed = bounds;
    }

    fn pan_to(&mut self, center: Point) {
        println!("map: pan to {center:?}");
    }

    fn bounds(&self) -> Rect {
        self.displayed
    }

    fn invalidate_size(&mut self, force: bool) {
        println!("map: invalidate size (force: {force})");
    }
}

fn main() {
    let mut engine = ViewportSync::new();
    let mut map = PrintingMap {
        displayed: Rect::new(-123.0, 45.0, -121.0, 48.0),
    };

    let mut state = TripState::default();
    let mut now = 0;

    // The user picks an origin: the map pans to it.
    state.query.from = Some(Point::new(-122.33, 47.61));
    engine.observe(now, &state, Some(&mut map));

    // A destination completes the pair: the map fits both endpoints.
    now += 1_000;
    state.query.to = Some(Point::new(-122.68, 45.52));
    engine.observe(now, &state, Some(&mut map));

    // A search result arrives: the map fits the whole route.
    now += 1_000;
    state.itinerary = Some(Itinerary::new(vec![
        TripLeg::new(vec![
            TripStep::new(Point::new(-122.33, 47.61)),
            TripStep::new(Point::new(-122.44, 47.3)),
        ]),
        TripLeg::new(vec![
            TripStep::new(Point::new(-122.44, 47.3)),
            TripStep::new(Point::new(-122.68, 45.52)),
        ]),
    ]));
    engine.observe(now, &state, Some(&mut map));

    // Opening the detail view defers its fit past the layout settle.
    now += 1_000;
    state.view.view_mode = Some(ViewMode::Detail);
    state.view.active_leg = Some(1);
    engine.observe(now, &state, Some(&mut map));
    println!("deferred fit pending: {}", engine.has_pending_fit());

    // The host clock reaches the settle deadline and the fit fires.
    engine.tick(now + SETTLE_DELAY_MS, Some(&mut map));
}
