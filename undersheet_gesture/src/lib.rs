// Copyright 2025 the Undersheet Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Undersheet Gesture: touch tracking for draggable sheets.
//!
//! A bottom sheet only cares about one thing while a finger is down: how far
//! the finger has travelled vertically. This crate keeps that bookkeeping in a
//! single small type, [`TouchSession`], which records where a gesture started
//! and where it was last seen, and reports both the movement since the last
//! event and the net movement since the gesture began.
//!
//! ## Coordinate space
//!
//! Every position handed to a [`TouchSession`] must come from the same
//! coordinate space. Hosts should use screen-relative (or consistently
//! viewport-relative) Y for touch start, move, and end alike. Mixing spaces
//! across events shifts the drag distance by the scroll offset.
//!
//! Only the first touch point is meaningful; multi-touch input should be
//! reduced to its first point by the host before it reaches this crate.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::Point;
//! use undersheet_gesture::TouchSession;
//!
//! let mut touch = TouchSession::default();
//! touch.start(Point::new(40.0, 300.0));
//!
//! // Finger moves down by 25px.
//! let step = touch.update(Point::new(40.0, 325.0)).unwrap();
//! assert_eq!(step.delta, 25.0);
//! assert_eq!(step.total, 25.0);
//!
//! // Then back up by 10px: the delta is relative to the last event,
//! // the total is relative to the start.
//! let step = touch.update(Point::new(40.0, 315.0)).unwrap();
//! assert_eq!(step.delta, -10.0);
//! assert_eq!(step.total, 15.0);
//!
//! assert_eq!(touch.end(), Some(15.0));
//! assert!(!touch.is_active());
//! ```
//!
//! This crate is `no_std`.

#![no_std]

mod touch;

pub use touch::{TouchMove, TouchSession};
