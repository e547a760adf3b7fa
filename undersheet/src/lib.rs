// Copyright 2025 the Undersheet Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Undersheet: a headless, draggable bottom sheet.
//!
//! A bottom sheet is a panel that slides up from the bottom of the viewport.
//! The user drags it by its handle; on release it either closes or comes to
//! rest, depending on how far it travelled and which [`Variant`] it uses.
//!
//! This crate owns the interaction state and nothing else. A UI layer
//! implements [`SheetHost`] to supply the viewport height, the body scroll
//! lock, resize notifications, and rendering, then forwards touch, click,
//! and animation events to a mounted [`BottomSheet`]. After every change the
//! sheet hands the host a [`SheetView`] describing the classes and inline
//! style to apply.
//!
//! ## Lifecycle
//!
//! 1) [`BottomSheet::mount`] adds the [`classes::SCROLL_LOCK`] class to the
//!    body and, for snapping sheets, subscribes to viewport resizes.
//! 2) Touch events on the handle drag the sheet
//!    ([`on_touch_start`](BottomSheet::on_touch_start),
//!    [`on_touch_move`](BottomSheet::on_touch_move),
//!    [`on_touch_end`](BottomSheet::on_touch_end)).
//! 3) Releasing far enough, snapping to `0`, or clicking the backdrop starts
//!    closing. The overlay picks up [`classes::IS_CLOSING`] so the host can
//!    play an exit animation.
//! 4) When that animation ends, [`on_animation_end`](BottomSheet::on_animation_end)
//!    runs the owner's close callback, exactly once.
//! 5) [`BottomSheet::unmount`] (or dropping the sheet) removes the scroll
//!    lock and the resize subscription.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::Point;
//! use undersheet::{BottomSheet, SheetConfig, SheetHost, SheetView, ResizeSubscription};
//!
//! #[derive(Default)]
//! struct Host {
//!     body: Vec<&'static str>,
//!     style: String,
//! }
//!
//! impl SheetHost for Host {
//!     fn viewport_height(&self) -> f64 { 800.0 }
//!     fn add_body_class(&mut self, class: &'static str) { self.body.push(class); }
//!     fn remove_body_class(&mut self, class: &'static str) { self.body.retain(|c| *c != class); }
//!     fn subscribe_resize(&mut self) -> ResizeSubscription { ResizeSubscription(1) }
//!     fn unsubscribe_resize(&mut self, _: ResizeSubscription) {}
//!     fn render(&mut self, view: &SheetView) { self.style = view.style(); }
//! }
//!
//! let mut sheet = BottomSheet::mount(Host::default(), SheetConfig::plain(), || {});
//! assert_eq!(sheet.host().body, ["sb-overflow-hidden"]);
//!
//! sheet.on_touch_start(Point::new(0.0, 400.0));
//! sheet.on_touch_move(Point::new(0.0, 430.0));
//! assert_eq!(sheet.host().style, "transform: translateY(30px)");
//!
//! // Short of the 50px threshold: bounce back.
//! sheet.on_touch_end();
//! assert_eq!(sheet.offset(), 0.0);
//!
//! let host = sheet.unmount();
//! assert!(host.body.is_empty());
//! ```
//!
//! ## Logging
//!
//! Phase transitions and lifecycle steps are reported through the `log`
//! facade at `debug`, per-move offsets at `trace`, and sanitized
//! configuration at `warn`. No logger is installed.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

pub mod classes;
mod config;
mod host;
mod phase;
mod sheet;
mod view;

pub use config::SheetConfig;
pub use host::{PointerTarget, ResizeSubscription, SheetHost};
pub use phase::Phase;
pub use sheet::BottomSheet;
pub use view::SheetView;

pub use undersheet_snap::{
    DEFAULT_CLOSE_THRESHOLD, Release, SnapConfig, SnapContext, SnapPointError, SnapPoints,
    Variant,
};
