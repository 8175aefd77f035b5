// Copyright 2026 the Waymap Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use kurbo::{Point, Rect};
use waymap_sync::{FitPadding, RuleContext, classify};
use waymap_trip::{Itinerary, Snapshot, TripLeg, TripStep};

fn route(legs: usize, steps_per_leg: usize) -> Itinerary {
    Itinerary::new(
        (0..legs)
            .map(|leg| {
                TripLeg::new(
                    (0..steps_per_leg)
                        .map(|step| {
                            let t = (leg * steps_per_leg + step) as f64;
                            TripStep::new(Point::new(-122.0 - t * 0.001, 47.0 + t * 0.001))
                        })
                        .collect(),
                )
            })
            .collect(),
    )
}

fn ctx<'a>(prev: &'a Snapshot, curr: &'a Snapshot) -> RuleContext<'a> {
    RuleContext {
        prev,
        curr,
        displayed_bounds: Some(Rect::new(-123.0, 45.0, -121.0, 48.0)),
        constrained_platform: false,
        padding: FitPadding::default(),
    }
}

fn bench_classify(c: &mut Criterion) {
    let mut group = c.benchmark_group("sync/classify");

    // Worst case: itinerary replacement forces a full bounds aggregation
    // on both sides of the comparison.
    for legs in [1usize, 4, 16] {
        let steps = 64;
        group.throughput(Throughput::Elements((legs * steps) as u64));

        let prev = Snapshot {
            itinerary: Some(route(legs, steps)),
            ..Snapshot::default()
        };
        let mut shifted = route(legs, steps);
        shifted.legs[0].steps[0] = TripStep::new(Point::new(-125.0, 44.0));
        let curr = Snapshot {
            itinerary: Some(shifted),
            ..Snapshot::default()
        };

        group.bench_with_input(
            BenchmarkId::new("itinerary_replaced", legs),
            &(prev, curr),
            |b, (prev, curr)| {
                b.iter(|| black_box(classify(&ctx(prev, curr))));
            },
        );
    }

    // Steady state: nothing changed, every rule falls through.
    let settled = Snapshot {
        itinerary: Some(route(4, 64)),
        ..Snapshot::default()
    };
    group.bench_function("no_change", |b| {
        b.iter(|| black_box(classify(&ctx(&settled, &settled))));
    });

    group.finish();
}

criterion_group!(benches, bench_classify);
criterion_main!(benches);
