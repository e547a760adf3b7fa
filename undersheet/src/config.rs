// Copyright 2025 the Undersheet Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::vec::Vec;

use log::warn;
use undersheet_snap::{SnapContext, Variant};

/// Owner configuration for a [`BottomSheet`](crate::BottomSheet).
///
/// ```rust
/// use undersheet::SheetConfig;
///
/// let plain = SheetConfig::plain().close_threshold(80.0);
/// assert!(!plain.variant().is_viewport_aware());
///
/// let snap = SheetConfig::snap(
///     |cx| cx.max_height * 0.5,
///     |cx| vec![cx.max_height * 0.25, cx.max_height * 0.5],
/// );
/// assert!(snap.variant().is_viewport_aware());
/// ```
#[derive(Debug, Default)]
pub struct SheetConfig {
    variant: Variant,
}

impl SheetConfig {
    /// Drag-to-close sheet with the default close threshold.
    #[must_use]
    pub fn plain() -> Self {
        Self {
            variant: Variant::plain(),
        }
    }

    /// Snapping sheet.
    ///
    /// `default_snap_point` gives the height the sheet opens at and
    /// `snap_points` the heights it may rest at, both as functions of the
    /// viewport height.
    pub fn snap<D, P>(default_snap_point: D, snap_points: P) -> Self
    where
        D: Fn(SnapContext) -> f64 + 'static,
        P: Fn(SnapContext) -> Vec<f64> + 'static,
    {
        Self {
            variant: Variant::snap(default_snap_point, snap_points),
        }
    }

    /// Configuration for an explicit [`Variant`].
    #[must_use]
    pub fn with_variant(variant: Variant) -> Self {
        Self { variant }
    }

    /// Sets the net downward drag, in pixels, past which a plain sheet closes.
    ///
    /// Snapping sheets close by snapping to `0` and ignore this setting.
    #[must_use]
    pub fn close_threshold(mut self, threshold: f64) -> Self {
        match &mut self.variant {
            Variant::Plain { close_threshold } => *close_threshold = threshold,
            Variant::Snap(_) => warn!("close threshold ignored for snapping sheet"),
        }
        self
    }

    /// The configured interaction mode.
    #[must_use]
    pub fn variant(&self) -> &Variant {
        &self.variant
    }

    pub(crate) fn into_variant(self) -> Variant {
        self.variant
    }
}

impl From<Variant> for SheetConfig {
    fn from(variant: Variant) -> Self {
        Self::with_variant(variant)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;

    #[test]
    fn default_is_plain_with_standard_threshold() {
        let config = SheetConfig::default();
        assert!(matches!(
            config.variant(),
            Variant::Plain { close_threshold } if *close_threshold == 50.0
        ));
    }

    #[test]
    fn threshold_applies_to_plain() {
        let config = SheetConfig::plain().close_threshold(75.0);
        assert!(matches!(
            config.variant(),
            Variant::Plain { close_threshold } if *close_threshold == 75.0
        ));
    }

    #[test]
    fn threshold_leaves_snap_untouched() {
        let config = SheetConfig::snap(|_| 300.0, |_| vec![300.0]).close_threshold(75.0);
        assert!(matches!(config.variant(), Variant::Snap(_)));
    }
}
