// Copyright 2025 the Undersheet Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The seam between a sheet and the UI layer that displays it.

use crate::view::SheetView;

/// Handle for a viewport resize listener registered with a host.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ResizeSubscription(pub u64);

/// Which element a click landed on.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PointerTarget {
    /// The backdrop itself, outside the sheet.
    Overlay,
    /// The sheet or anything inside it.
    Sheet,
}

/// Services a host UI layer provides to a mounted sheet.
///
/// The sheet never renders. It tells the host which classes and styles to
/// apply through [`render`](Self::render), and the host is expected to
/// place the sheet in a top-level overlay layer, outside normal layout
/// containment, so it floats above page content.
///
/// Hosts forward resize notifications for a live subscription to
/// [`BottomSheet::on_viewport_resize`](crate::BottomSheet::on_viewport_resize).
pub trait SheetHost {
    /// Current height of the visible viewport, in pixels.
    fn viewport_height(&self) -> f64;

    /// Adds `class` to the document body.
    fn add_body_class(&mut self, class: &'static str);

    /// Removes `class` from the document body.
    fn remove_body_class(&mut self, class: &'static str);

    /// Starts delivering viewport resize notifications for this sheet.
    fn subscribe_resize(&mut self) -> ResizeSubscription;

    /// Stops delivering notifications for `subscription`.
    fn unsubscribe_resize(&mut self, subscription: ResizeSubscription);

    /// Applies the sheet's current presentation.
    fn render(&mut self, view: &SheetView);
}
