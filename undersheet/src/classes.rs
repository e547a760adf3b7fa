// Copyright 2025 the Undersheet Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Class names applied to the rendered sheet.
//!
//! These names are the styling contract with consumers: stylesheets target
//! them to lay out the overlay and sheet and to drive the open, close, and
//! snap animations.

/// The full-screen backdrop behind the sheet.
pub const OVERLAY: &str = "sb-overlay";

/// The sheet panel itself.
pub const CONTENT: &str = "sb-content";

/// Added to the overlay while the closing animation runs.
pub const IS_CLOSING: &str = "sb-is-closing";

/// Added to the overlay while the sheet animates to a snap point.
pub const IS_SNAPPING: &str = "sb-is-snapping";

/// The touch target at the top of the sheet.
pub const HANDLE_CONTAINER: &str = "sb-handle-container";

/// The visible grab bar inside the handle container.
pub const HANDLE: &str = "sb-handle";

/// Added to the document body while a sheet is mounted to stop page scroll.
pub const SCROLL_LOCK: &str = "sb-overflow-hidden";
