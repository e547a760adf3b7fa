// Copyright 2025 the Undersheet Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::format;
use alloc::string::String;

use crate::classes;
use crate::phase::Phase;

/// A snapshot of how the sheet should look right now.
///
/// Produced by [`BottomSheet::view`](crate::BottomSheet::view) and passed to
/// [`SheetHost::render`](crate::SheetHost::render) after every change.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SheetView {
    /// Current phase.
    pub phase: Phase,
    /// Downward translation of the sheet, in pixels.
    pub translate_y: f64,
    /// Fixed sheet height for snapping sheets; `None` for plain sheets.
    pub max_height: Option<f64>,
    /// Bumped on every change; hosts may skip renders they already applied.
    pub revision: u64,
}

impl SheetView {
    /// Class list for the overlay element.
    #[must_use]
    pub fn overlay_classes(&self) -> String {
        let mut out = String::from(classes::OVERLAY);
        if self.phase.is_closing() {
            out.push(' ');
            out.push_str(classes::IS_CLOSING);
        }
        if self.phase.is_snapping() {
            out.push(' ');
            out.push_str(classes::IS_SNAPPING);
        }
        out
    }

    /// Class list for the sheet element.
    #[must_use]
    pub fn content_classes(&self) -> &'static str {
        classes::CONTENT
    }

    /// Class list for the touch target at the top of the sheet.
    #[must_use]
    pub fn handle_container_classes(&self) -> &'static str {
        classes::HANDLE_CONTAINER
    }

    /// Class list for the grab bar inside the handle container.
    #[must_use]
    pub fn handle_classes(&self) -> &'static str {
        classes::HANDLE
    }

    /// Inline style for the sheet element.
    #[must_use]
    pub fn style(&self) -> String {
        match self.max_height {
            Some(height) => format!(
                "transform: translateY({}px); height: {height}px",
                self.translate_y
            ),
            None => format!("transform: translateY({}px)", self.translate_y),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn view(phase: Phase, translate_y: f64, max_height: Option<f64>) -> SheetView {
        SheetView {
            phase,
            translate_y,
            max_height,
            revision: 0,
        }
    }

    #[test]
    fn resting_overlay_has_base_class_only() {
        assert_eq!(view(Phase::Resting, 0.0, None).overlay_classes(), "sb-overlay");
        assert_eq!(view(Phase::Dragging, 12.0, None).overlay_classes(), "sb-overlay");
    }

    #[test]
    fn phase_modifiers_are_appended() {
        assert_eq!(
            view(Phase::Closing, 60.0, None).overlay_classes(),
            "sb-overlay sb-is-closing"
        );
        assert_eq!(
            view(Phase::Snapping, 400.0, Some(800.0)).overlay_classes(),
            "sb-overlay sb-is-snapping"
        );
    }

    #[test]
    fn handle_classes_are_stable() {
        let v = view(Phase::Dragging, 0.0, None);
        assert_eq!(v.handle_container_classes(), "sb-handle-container");
        assert_eq!(v.handle_classes(), "sb-handle");
        // Phase modifiers live on the overlay only.
        let closing = view(Phase::Closing, 0.0, None);
        assert_eq!(closing.handle_container_classes(), "sb-handle-container");
        assert_eq!(closing.handle_classes(), "sb-handle");
    }

    #[test]
    fn plain_style_only_translates() {
        assert_eq!(
            view(Phase::Dragging, 32.5, None).style(),
            "transform: translateY(32.5px)"
        );
    }

    #[test]
    fn snap_style_fixes_height() {
        let v = view(Phase::Resting, 400.0, Some(800.0));
        assert_eq!(v.content_classes(), "sb-content");
        assert_eq!(
            v.style(),
            "transform: translateY(400px); height: 800px"
        );
    }
}
