// Copyright 2025 the Undersheet Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BatchSize, Criterion, black_box, criterion_group, criterion_main};
use kurbo::Point;
use undersheet::{BottomSheet, ResizeSubscription, SheetConfig, SheetHost, SheetView};
use undersheet_gesture::TouchSession;

/// Host that only counts renders.
#[derive(Default)]
struct NullHost {
    renders: u64,
}

impl SheetHost for NullHost {
    fn viewport_height(&self) -> f64 {
        800.0
    }

    fn add_body_class(&mut self, _: &'static str) {}

    fn remove_body_class(&mut self, _: &'static str) {}

    fn subscribe_resize(&mut self) -> ResizeSubscription {
        ResizeSubscription(0)
    }

    fn unsubscribe_resize(&mut self, _: ResizeSubscription) {}

    fn render(&mut self, view: &SheetView) {
        self.renders += 1;
        black_box(view);
    }
}

fn finger_path(len: usize) -> Vec<Point> {
    // Down, then back up, with a little jitter.
    (0..len)
        .map(|i| {
            let t = i as f64 / len as f64;
            let y = 300.0 + 400.0 * (t * core::f64::consts::PI).sin() + (i % 3) as f64;
            Point::new(0.0, y)
        })
        .collect()
}

fn bench_touch_session(c: &mut Criterion) {
    let path = finger_path(1_024);

    c.bench_function("gesture/touch_session_1024", |b| {
        b.iter(|| {
            let mut touch = TouchSession::default();
            touch.start(path[0]);
            for &pos in &path[1..] {
                black_box(touch.update(pos));
            }
            black_box(touch.end())
        });
    });
}

fn bench_sheet_drag(c: &mut Criterion) {
    let path = finger_path(1_024);

    c.bench_function("gesture/plain_sheet_drag_1024", |b| {
        b.iter_batched(
            || BottomSheet::mount(NullHost::default(), SheetConfig::plain(), || {}),
            |mut sheet| {
                sheet.on_touch_start(path[0]);
                for &pos in &path[1..] {
                    sheet.on_touch_move(pos);
                }
                sheet.on_touch_end();
                black_box(sheet.unmount().renders)
            },
            BatchSize::SmallInput,
        );
    });

    c.bench_function("gesture/snap_sheet_drag_1024", |b| {
        b.iter_batched(
            || {
                BottomSheet::mount(
                    NullHost::default(),
                    SheetConfig::snap(|_| 400.0, |_| vec![100.0, 400.0, 700.0]),
                    || {},
                )
            },
            |mut sheet| {
                sheet.on_touch_start(path[0]);
                for &pos in &path[1..] {
                    sheet.on_touch_move(pos);
                }
                sheet.on_touch_end();
                black_box(sheet.unmount().renders)
            },
            BatchSize::SmallInput,
        );
    });
}

criterion_group!(benches, bench_touch_session, bench_sheet_drag);
criterion_main!(benches);
