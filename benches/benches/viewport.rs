// Copyright 2025 the Stratmap Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use kurbo::{Point, Rect, Size};
use stratmap_viewport::{MapViewport, PanGesture, RegionOfInterest};

fn viewport() -> MapViewport {
    let mut vp = MapViewport::new(
        Rect::new(0.0, 0.0, 1280.0, 720.0),
        Size::new(4096.0, 4096.0),
    );
    vp.set_initial_region(Some(RegionOfInterest::new(20.0, 15.0, 80.0, 85.0)));
    vp.refit();
    vp
}

fn bench_fit(c: &mut Criterion) {
    let mut group = c.benchmark_group("viewport/fit");
    let region = RegionOfInterest::new(25.0, 25.0, 75.0, 75.0);
    let mut vp = viewport();

    group.bench_function("region", |b| {
        b.iter(|| black_box(vp.fit_to_view(black_box(Some(region)))));
    });
    group.bench_function("whole_map", |b| {
        b.iter(|| black_box(vp.fit_to_view(black_box(None))));
    });
    group.finish();
}

fn bench_wheel_zoom(c: &mut Criterion) {
    let mut group = c.benchmark_group("viewport/wheel_zoom");

    // Alternating directions keeps the scale away from the limits so every step
    // does the full anchor computation.
    for steps in [16usize, 256, 4_096] {
        group.throughput(Throughput::Elements(steps as u64));
        group.bench_with_input(BenchmarkId::from_parameter(steps), &steps, |b, &steps| {
            b.iter(|| {
                let mut vp = viewport();
                for i in 0..steps {
                    let cursor = Point::new((i % 1280) as f64, (i % 720) as f64);
                    let delta = if i % 2 == 0 { -1.0 } else { 1.0 };
                    vp.zoom_with_wheel(cursor, delta);
                }
                black_box(vp.state())
            });
        });
    }
    group.finish();
}

fn bench_drag_and_readout(c: &mut Criterion) {
    let mut group = c.benchmark_group("viewport/pointer");
    let moves: Vec<Point> = (0..1_024)
        .map(|i| Point::new(200.0 + (i % 400) as f64, 100.0 + (i % 300) as f64))
        .collect();
    group.throughput(Throughput::Elements(moves.len() as u64));

    group.bench_function("drag", |b| {
        b.iter(|| {
            let mut vp = viewport();
            let mut pan = PanGesture::new();
            pan.begin(Point::new(200.0, 100.0), &vp);
            for &p in &moves {
                pan.update(p, &mut vp);
            }
            pan.end();
            black_box(vp.state())
        });
    });

    let vp = viewport();
    group.bench_function("inverse_map", |b| {
        b.iter(|| {
            for &p in &moves {
                black_box(vp.inverse_map(p));
            }
        });
    });
    group.finish();
}

criterion_group!(benches, bench_fit, bench_wheel_zoom, bench_drag_and_readout);
criterion_main!(benches);
