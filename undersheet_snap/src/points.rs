// Copyright 2025 the Undersheet Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Snap-point lists and nearest-point search.

use core::fmt;

use log::warn;
use smallvec::SmallVec;

/// Error returned by [`SnapPoints::try_new`] for a height it cannot place.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum SnapPointError {
    /// The height was NaN or infinite.
    NonFinite {
        /// The rejected height.
        point: f64,
    },
    /// The height was negative or taller than the viewport.
    OutOfRange {
        /// The rejected height.
        point: f64,
        /// The viewport height the point was checked against.
        max_height: f64,
    },
}

impl fmt::Display for SnapPointError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NonFinite { point } => write!(f, "snap point {point} is not finite"),
            Self::OutOfRange { point, max_height } => write!(
                f,
                "snap point {point} is outside the viewport range [0, {max_height}]"
            ),
        }
    }
}

impl core::error::Error for SnapPointError {}

/// Candidate resting heights for a snapping sheet, tallest first.
///
/// Heights are measured from the bottom of the viewport: `0` is fully closed
/// and `max_height` is fully open. The closed point `0` is always present, so
/// the list is never empty and a release always resolves to something.
#[derive(Clone, Debug, PartialEq)]
pub struct SnapPoints {
    points: SmallVec<[f64; 4]>,
}

impl SnapPoints {
    /// Builds a snap list from configured heights, sanitizing bad input.
    ///
    /// Non-finite heights are dropped and the rest are clamped into
    /// `[0, max_height]`. Each correction is reported with `log::warn!`.
    /// Use [`try_new`](Self::try_new) to reject such input instead.
    pub fn new<I>(heights: I, max_height: f64) -> Self
    where
        I: IntoIterator<Item = f64>,
    {
        let max_height = sanitize_max_height(max_height);
        let mut points = SmallVec::new();
        for point in heights {
            if !point.is_finite() {
                warn!("dropping non-finite snap point {point}");
                continue;
            }
            let clamped = point.clamp(0.0, max_height);
            if clamped != point {
                warn!("clamping snap point {point} into [0, {max_height}]");
            }
            points.push(clamped);
        }
        Self::from_heights(points)
    }

    /// Builds a snap list, rejecting heights that are non-finite or outside
    /// `[0, max_height]`.
    pub fn try_new<I>(heights: I, max_height: f64) -> Result<Self, SnapPointError>
    where
        I: IntoIterator<Item = f64>,
    {
        let max_height = sanitize_max_height(max_height);
        let mut points = SmallVec::new();
        for point in heights {
            if !point.is_finite() {
                return Err(SnapPointError::NonFinite { point });
            }
            if !(0.0..=max_height).contains(&point) {
                return Err(SnapPointError::OutOfRange { point, max_height });
            }
            points.push(point);
        }
        Ok(Self::from_heights(points))
    }

    /// The list holding only the closed point.
    #[must_use]
    pub fn closed_only() -> Self {
        Self::from_heights(SmallVec::new())
    }

    fn from_heights(mut points: SmallVec<[f64; 4]>) -> Self {
        points.push(0.0);
        // Stable, so equal heights keep their configured order.
        points.sort_by(|a, b| b.total_cmp(a));
        Self { points }
    }

    /// Returns the point closest to `height`.
    ///
    /// On an exact tie the point that comes first in the list wins.
    #[must_use]
    pub fn nearest(&self, height: f64) -> f64 {
        let mut best = self.points[0];
        for &point in &self.points[1..] {
            if (point - height).abs() < (best - height).abs() {
                best = point;
            }
        }
        best
    }

    /// The tallest point in the list.
    #[must_use]
    pub fn highest(&self) -> f64 {
        self.points[0]
    }

    /// Returns the points, tallest first, ending with `0`.
    #[must_use]
    pub fn as_slice(&self) -> &[f64] {
        &self.points
    }

    /// Iterates over the points, tallest first.
    pub fn iter(&self) -> core::slice::Iter<'_, f64> {
        self.points.iter()
    }
}

impl Default for SnapPoints {
    fn default() -> Self {
        Self::closed_only()
    }
}

impl<'a> IntoIterator for &'a SnapPoints {
    type Item = &'a f64;
    type IntoIter = core::slice::Iter<'a, f64>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Viewport heights below zero or NaN collapse to zero.
pub(crate) fn sanitize_max_height(max_height: f64) -> f64 {
    if max_height.is_nan() {
        0.0
    } else {
        max_height.max(0.0)
    }
}
