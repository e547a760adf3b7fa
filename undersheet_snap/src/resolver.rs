// Copyright 2025 the Undersheet Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use log::{debug, trace};

use crate::points::{SnapPoints, sanitize_max_height};
use crate::variant::{SnapContext, Variant};

/// What a sheet should do when the finger lifts.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Release {
    /// Start the closing transition.
    Close,
    /// Come to rest at this offset without a snap animation.
    Settle(f64),
    /// Animate to a snap point.
    Snap {
        /// The chosen snap height, measured from the bottom of the viewport.
        point: f64,
        /// The offset that places the sheet at `point`.
        offset: f64,
    },
}

/// Turns drag movement into sheet offsets and release decisions.
///
/// Offsets are the sheet's downward translation in pixels: `0` is the
/// sheet's natural position and larger values push it towards the bottom
/// edge. Snap heights are measured the other way, from the bottom of the
/// viewport, so a sheet at offset `o` shows `max_height - o` pixels.
#[derive(Debug)]
pub struct Resolver {
    variant: Variant,
    max_height: f64,
    snap_points: SnapPoints,
}

impl Resolver {
    /// Creates a resolver for `variant` in a viewport `max_height` pixels tall.
    pub fn new(variant: Variant, max_height: f64) -> Self {
        let max_height = sanitize_max_height(max_height);
        let snap_points = compute_snap_points(&variant, max_height);
        Self {
            variant,
            max_height,
            snap_points,
        }
    }

    /// The interaction mode.
    #[must_use]
    pub fn variant(&self) -> &Variant {
        &self.variant
    }

    /// Current viewport height.
    #[must_use]
    pub fn max_height(&self) -> f64 {
        self.max_height
    }

    /// Current snap list. Plain sheets only have the closed point.
    #[must_use]
    pub fn snap_points(&self) -> &SnapPoints {
        &self.snap_points
    }

    /// Offset a freshly mounted sheet starts at.
    #[must_use]
    pub fn initial_offset(&self) -> f64 {
        match &self.variant {
            Variant::Plain { .. } => 0.0,
            Variant::Snap(config) => {
                let point = config.default_snap_point(self.context());
                self.clamp_offset(self.max_height - point)
            }
        }
    }

    /// Offset after one move event.
    ///
    /// `delta` is the movement since the previous event and `total` the net
    /// movement since the gesture started, both positive downwards.
    #[must_use]
    pub fn on_move(&self, offset: f64, delta: f64, total: f64) -> f64 {
        let next = match self.variant {
            Variant::Plain { .. } => total.max(0.0),
            Variant::Snap(_) => self.clamp_offset(offset + delta),
        };
        trace!("sheet offset {offset} -> {next}");
        next
    }

    /// Decides what a release at `offset` does.
    #[must_use]
    pub fn on_release(&self, offset: f64) -> Release {
        let release = match self.variant {
            Variant::Plain { close_threshold } => {
                if offset > close_threshold {
                    Release::Close
                } else {
                    Release::Settle(0.0)
                }
            }
            Variant::Snap(_) => {
                let point = self.snap_points.nearest(self.max_height - offset);
                if point == 0.0 {
                    Release::Close
                } else {
                    Release::Snap {
                        point,
                        offset: self.max_height - point,
                    }
                }
            }
        };
        debug!("sheet released at offset {offset}: {release:?}");
        release
    }

    /// Adopts a new viewport height and returns `offset` adjusted to it.
    ///
    /// Snap sheets recompute their snap list from the owner's function and
    /// keep the offset within the new viewport. Plain sheets keep their
    /// offset.
    pub fn resize(&mut self, max_height: f64, offset: f64) -> f64 {
        let max_height = sanitize_max_height(max_height);
        if max_height == self.max_height {
            return offset;
        }
        debug!(
            "sheet viewport resized {} -> {max_height}",
            self.max_height
        );
        self.max_height = max_height;
        self.snap_points = compute_snap_points(&self.variant, max_height);
        match self.variant {
            Variant::Plain { .. } => offset,
            Variant::Snap(_) => self.clamp_offset(offset),
        }
    }

    fn context(&self) -> SnapContext {
        SnapContext {
            max_height: self.max_height,
        }
    }

    fn clamp_offset(&self, offset: f64) -> f64 {
        if offset.is_nan() {
            return 0.0;
        }
        offset.clamp(0.0, self.max_height)
    }
}

fn compute_snap_points(variant: &Variant, max_height: f64) -> SnapPoints {
    match variant {
        Variant::Plain { .. } => SnapPoints::closed_only(),
        Variant::Snap(config) => {
            SnapPoints::new(config.snap_points(SnapContext { max_height }), max_height)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;

    fn snap_resolver(max_height: f64) -> Resolver {
        Resolver::new(
            Variant::snap(|cx| cx.max_height / 2.0, |_| vec![100.0, 400.0]),
            max_height,
        )
    }

    #[test]
    fn plain_starts_at_rest() {
        let resolver = Resolver::new(Variant::plain(), 800.0);
        assert_eq!(resolver.initial_offset(), 0.0);
        assert_eq!(resolver.snap_points().as_slice(), &[0.0]);
    }

    #[test]
    fn plain_move_tracks_downward_distance_only() {
        let resolver = Resolver::new(Variant::plain(), 800.0);
        assert_eq!(resolver.on_move(0.0, 30.0, 30.0), 30.0);
        assert_eq!(resolver.on_move(30.0, -50.0, -20.0), 0.0);
        assert_eq!(resolver.on_move(0.0, 5.0, 2000.0), 2000.0);
    }

    #[test]
    fn plain_release_closes_only_past_threshold() {
        let resolver = Resolver::new(Variant::plain(), 800.0);
        assert_eq!(resolver.on_release(30.0), Release::Settle(0.0));
        assert_eq!(resolver.on_release(50.0), Release::Settle(0.0));
        assert_eq!(resolver.on_release(60.0), Release::Close);
    }

    #[test]
    fn custom_threshold_is_honored() {
        let resolver = Resolver::new(
            Variant::Plain {
                close_threshold: 120.0,
            },
            800.0,
        );
        assert_eq!(resolver.on_release(100.0), Release::Settle(0.0));
        assert_eq!(resolver.on_release(121.0), Release::Close);
    }

    #[test]
    fn snap_starts_at_default_point() {
        let resolver = snap_resolver(800.0);
        assert_eq!(resolver.initial_offset(), 400.0);
        assert_eq!(resolver.snap_points().as_slice(), &[400.0, 100.0, 0.0]);
    }

    #[test]
    fn snap_default_point_is_clamped() {
        let resolver = Resolver::new(Variant::snap(|_| 5000.0, |_| vec![]), 800.0);
        assert_eq!(resolver.initial_offset(), 0.0);
        let resolver = Resolver::new(Variant::snap(|_| -10.0, |_| vec![]), 800.0);
        assert_eq!(resolver.initial_offset(), 800.0);
    }

    #[test]
    fn snap_move_is_incremental_and_clamped() {
        let resolver = snap_resolver(800.0);
        assert_eq!(resolver.on_move(400.0, -30.0, -30.0), 370.0);
        assert_eq!(resolver.on_move(370.0, 1000.0, 970.0), 800.0);
        assert_eq!(resolver.on_move(10.0, -50.0, -1000.0), 0.0);
    }

    #[test]
    fn snap_release_picks_nearest_point() {
        let resolver = snap_resolver(800.0);
        assert_eq!(
            resolver.on_release(750.0),
            Release::Snap {
                point: 100.0,
                offset: 700.0
            }
        );
        assert_eq!(
            resolver.on_release(300.0),
            Release::Snap {
                point: 400.0,
                offset: 400.0
            }
        );
        assert_eq!(resolver.on_release(790.0), Release::Close);
    }

    #[test]
    fn snap_without_points_closes_on_any_release() {
        let resolver = Resolver::new(Variant::snap(|cx| cx.max_height, |_| vec![]), 800.0);
        assert_eq!(resolver.on_release(0.0), Release::Close);
    }

    #[test]
    fn resize_recomputes_snap_points_and_clamps() {
        let mut resolver = Resolver::new(
            Variant::snap(|_| 200.0, |cx| vec![cx.max_height * 0.5]),
            800.0,
        );
        assert_eq!(resolver.snap_points().as_slice(), &[400.0, 0.0]);

        let offset = resolver.resize(600.0, 750.0);

        assert_eq!(resolver.max_height(), 600.0);
        assert_eq!(resolver.snap_points().as_slice(), &[300.0, 0.0]);
        assert_eq!(offset, 600.0);
    }

    #[test]
    fn plain_resize_keeps_offset() {
        let mut resolver = Resolver::new(Variant::plain(), 800.0);
        assert_eq!(resolver.resize(300.0, 420.0), 420.0);
        assert_eq!(resolver.max_height(), 300.0);
    }
}
