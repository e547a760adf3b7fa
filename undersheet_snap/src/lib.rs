// Copyright 2025 the Undersheet Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Undersheet Snap: position resolution for draggable bottom sheets.
//!
//! Given a drag in progress and the sheet's interaction mode, this crate
//! decides where the sheet should be and, when the finger lifts, whether it
//! should close, settle, or animate to a snap point.
//!
//! Two modes are supported through [`Variant`]:
//!
//! - **Plain**: the sheet follows the net downward drag and never moves
//!   above its resting position. Releasing past the close threshold
//!   (50px by default) closes it; anything less bounces back to `0`.
//! - **Snap**: the sheet moves freely in both directions, one move delta at
//!   a time, and is kept within `[0, max_height]`. Releasing picks the
//!   nearest [`SnapPoints`] entry; the closed point `0` closes the sheet.
//!
//! ## Minimal example
//!
//! ```rust
//! use undersheet_snap::{Release, Resolver, Variant};
//!
//! // Opens at 400px tall, may rest at 100px or 400px.
//! let resolver = Resolver::new(
//!     Variant::snap(|_| 400.0, |_| vec![100.0, 400.0]),
//!     800.0,
//! );
//! assert_eq!(resolver.snap_points().as_slice(), &[400.0, 100.0, 0.0]);
//!
//! let mut offset = resolver.initial_offset();
//! assert_eq!(offset, 400.0);
//!
//! // Drag down 350px.
//! offset = resolver.on_move(offset, 350.0, 350.0);
//! assert_eq!(offset, 750.0);
//!
//! // 50px of sheet is visible; the nearest point is 100px.
//! assert_eq!(
//!     resolver.on_release(offset),
//!     Release::Snap { point: 100.0, offset: 700.0 },
//! );
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod points;
mod resolver;
mod variant;

pub use points::{SnapPointError, SnapPoints};
pub use resolver::{Release, Resolver};
pub use variant::{DEFAULT_CLOSE_THRESHOLD, SnapConfig, SnapContext, Variant};
