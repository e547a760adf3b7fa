// Copyright 2025 the Undersheet Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::boxed::Box;
use alloc::vec::Vec;
use core::fmt;

/// Net downward drag, in pixels, past which a plain sheet closes on release.
pub const DEFAULT_CLOSE_THRESHOLD: f64 = 50.0;

/// Viewport facts handed to the owner's snap functions.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SnapContext {
    /// Height of the visible viewport, in pixels.
    pub max_height: f64,
}

/// Owner-supplied snap configuration.
///
/// Both functions are pure functions of the viewport and are called again
/// whenever the viewport height changes.
pub struct SnapConfig {
    default_snap_point: Box<dyn Fn(SnapContext) -> f64>,
    snap_points: Box<dyn Fn(SnapContext) -> Vec<f64>>,
}

impl SnapConfig {
    /// Creates a snap configuration from the owner's two functions.
    ///
    /// `default_snap_point` gives the height the sheet opens at;
    /// `snap_points` gives the heights it may rest at. The closed height `0`
    /// is added automatically and need not be listed.
    pub fn new<D, P>(default_snap_point: D, snap_points: P) -> Self
    where
        D: Fn(SnapContext) -> f64 + 'static,
        P: Fn(SnapContext) -> Vec<f64> + 'static,
    {
        Self {
            default_snap_point: Box::new(default_snap_point),
            snap_points: Box::new(snap_points),
        }
    }

    /// Height the sheet opens at for this viewport.
    #[must_use]
    pub fn default_snap_point(&self, cx: SnapContext) -> f64 {
        (self.default_snap_point)(cx)
    }

    /// Configured resting heights for this viewport.
    #[must_use]
    pub fn snap_points(&self, cx: SnapContext) -> Vec<f64> {
        (self.snap_points)(cx)
    }
}

impl fmt::Debug for SnapConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SnapConfig").finish_non_exhaustive()
    }
}

/// Interaction mode of a sheet.
#[derive(Debug)]
pub enum Variant {
    /// Drag down to close; anything short of the threshold bounces back.
    Plain {
        /// Net downward drag, in pixels, past which release closes the sheet.
        close_threshold: f64,
    },
    /// Free vertical drag that settles on the nearest snap point.
    Snap(SnapConfig),
}

impl Variant {
    /// Plain drag-to-close with [`DEFAULT_CLOSE_THRESHOLD`].
    #[must_use]
    pub fn plain() -> Self {
        Self::Plain {
            close_threshold: DEFAULT_CLOSE_THRESHOLD,
        }
    }

    /// Snapping mode with the given owner functions.
    pub fn snap<D, P>(default_snap_point: D, snap_points: P) -> Self
    where
        D: Fn(SnapContext) -> f64 + 'static,
        P: Fn(SnapContext) -> Vec<f64> + 'static,
    {
        Self::Snap(SnapConfig::new(default_snap_point, snap_points))
    }

    /// Returns `true` if this mode depends on the viewport height and needs
    /// resize notifications.
    #[must_use]
    pub fn is_viewport_aware(&self) -> bool {
        matches!(self, Self::Snap(_))
    }
}

impl Default for Variant {
    fn default() -> Self {
        Self::plain()
    }
}
