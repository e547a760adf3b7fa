// Copyright 2025 the Undersheet Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Plain drag-to-close.
//!
//! Drag a plain sheet a little (it bounces back), then far enough to close,
//! and watch the close callback wait for the animation to finish.
//!
//! Run:
//! - `cargo run -p undersheet_demos --example plain_drag`

use std::cell::Cell;
use std::rc::Rc;

use kurbo::Point;
use undersheet::{BottomSheet, SheetConfig};
use undersheet_demos::{ConsoleHost, init_logging};

fn main() {
    init_logging();

    let closed = Rc::new(Cell::new(false));
    let on_close = {
        let closed = Rc::clone(&closed);
        move || {
            println!("  on_close called");
            closed.set(true);
        }
    };

    println!("== Mount ==");
    let mut sheet = BottomSheet::mount(ConsoleHost::new(800.0), SheetConfig::plain(), on_close);

    println!("== Drag down 30px and release ==");
    sheet.on_touch_start(Point::new(120.0, 400.0));
    sheet.on_touch_move(Point::new(120.0, 415.0));
    sheet.on_touch_move(Point::new(120.0, 430.0));
    sheet.on_touch_end();
    assert_eq!(sheet.offset(), 0.0);

    println!("== Drag down 60px and release ==");
    sheet.on_touch_start(Point::new(120.0, 400.0));
    sheet.on_touch_move(Point::new(120.0, 460.0));
    sheet.on_touch_end();
    assert!(sheet.is_closing());
    assert!(!closed.get());

    println!("== Close animation ends ==");
    sheet.on_animation_end();
    assert!(closed.get());

    println!("== Unmount ==");
    let host = sheet.unmount();
    assert!(host.body.is_empty());
}
