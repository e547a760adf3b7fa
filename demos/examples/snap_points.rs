// Copyright 2025 the Undersheet Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Snapping sheet.
//!
//! Open a sheet with snap points at a quarter and a half of the viewport,
//! drag it between them, resize the viewport, and dismiss it by clicking
//! the backdrop.
//!
//! Run:
//! - `cargo run -p undersheet_demos --example snap_points`

use kurbo::Point;
use undersheet::{BottomSheet, PointerTarget, SheetConfig};
use undersheet_demos::{ConsoleHost, init_logging};

fn main() {
    init_logging();

    let config = SheetConfig::snap(
        |cx| cx.max_height * 0.5,
        |cx| vec![cx.max_height * 0.25, cx.max_height * 0.5],
    );

    println!("== Mount in an 800px viewport ==");
    let mut sheet = BottomSheet::mount(ConsoleHost::new(800.0), config, || {
        println!("  on_close called");
    });
    println!("  snap points: {:?}", sheet.snap_points().as_slice());

    println!("== Drag down 220px and release ==");
    sheet.on_touch_start(Point::new(0.0, 400.0));
    for y in [450.0, 520.0, 620.0] {
        sheet.on_touch_move(Point::new(0.0, y));
    }
    sheet.on_touch_end();
    assert!(sheet.is_snapping());
    assert_eq!(sheet.offset(), 600.0);
    sheet.on_transition_end();

    println!("== Viewport shrinks to 600px ==");
    sheet.on_viewport_resize(600.0);
    println!("  snap points: {:?}", sheet.snap_points().as_slice());

    println!("== Click the backdrop ==");
    sheet.on_overlay_click(PointerTarget::Sheet);
    sheet.on_overlay_click(PointerTarget::Overlay);
    assert!(sheet.is_closing());
    sheet.on_animation_end();

    println!("== Drop ==");
    drop(sheet);
}
