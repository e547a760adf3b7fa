// Copyright 2025 the Undersheet Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use undersheet_snap::{Resolver, SnapPoints, Variant};

fn bench_build(c: &mut Criterion) {
    let mut group = c.benchmark_group("snap/build");

    for len in [2usize, 4, 16, 64] {
        let heights: Vec<f64> = (0..len).map(|i| (i as f64 + 1.0) * 10.0).collect();
        group.throughput(Throughput::Elements(len as u64));

        group.bench_with_input(BenchmarkId::new("new", len), &heights, |b, heights| {
            b.iter(|| black_box(SnapPoints::new(heights.iter().copied(), 1000.0)));
        });

        group.bench_with_input(BenchmarkId::new("try_new", len), &heights, |b, heights| {
            b.iter(|| black_box(SnapPoints::try_new(heights.iter().copied(), 1000.0)));
        });
    }

    group.finish();
}

fn bench_nearest(c: &mut Criterion) {
    let mut group = c.benchmark_group("snap/nearest");

    // Real sheets carry a handful of points; the larger sizes only show the
    // linear scan's slope.
    for len in [2usize, 4, 16, 64] {
        let points = SnapPoints::new((0..len).map(|i| (i as f64 + 1.0) * 10.0), 1000.0);
        let offsets: Vec<f64> = (0..256).map(|i| f64::from(i) * 3.7).collect();
        group.throughput(Throughput::Elements(offsets.len() as u64));

        group.bench_with_input(BenchmarkId::from_parameter(len), &points, |b, points| {
            b.iter(|| {
                for &offset in &offsets {
                    black_box(points.nearest(offset));
                }
            });
        });
    }

    group.finish();
}

fn bench_release(c: &mut Criterion) {
    let resolver = Resolver::new(
        Variant::snap(|cx| cx.max_height * 0.5, |cx| {
            vec![cx.max_height * 0.25, cx.max_height * 0.5, cx.max_height * 0.9]
        }),
        800.0,
    );

    c.bench_function("snap/release_sweep", |b| {
        b.iter(|| {
            for offset in 0..=800 {
                black_box(resolver.on_release(f64::from(offset)));
            }
        });
    });
}

criterion_group!(benches, bench_build, bench_nearest, bench_release);
criterion_main!(benches);
