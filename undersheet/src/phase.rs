// Copyright 2025 the Undersheet Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

/// What a mounted sheet is doing.
///
/// Exactly one phase holds at a time. [`Phase::Closing`] is terminal: once a
/// sheet starts closing, no event brings it back.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Phase {
    /// At rest, waiting for input.
    #[default]
    Resting,
    /// A finger is down and moving the sheet.
    Dragging,
    /// Animating to a snap point after release.
    Snapping,
    /// Animating out; the close callback runs when the animation ends.
    Closing,
}

impl Phase {
    /// Returns `true` while a touch gesture owns the sheet.
    #[must_use]
    pub fn is_dragging(self) -> bool {
        self == Self::Dragging
    }

    /// Returns `true` while the sheet animates to a snap point.
    #[must_use]
    pub fn is_snapping(self) -> bool {
        self == Self::Snapping
    }

    /// Returns `true` once the sheet has started closing.
    #[must_use]
    pub fn is_closing(self) -> bool {
        self == Self::Closing
    }
}
