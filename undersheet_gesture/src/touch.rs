// Copyright 2025 the Undersheet Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::Point;

/// Vertical movement reported for one touch-move event.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TouchMove {
    /// Movement since the previous event, positive downwards.
    pub delta: f64,
    /// Net movement since the gesture started, positive downwards.
    pub total: f64,
}

/// Tracks one single-finger gesture from touch start to touch end.
///
/// A session is inert until [`start`](Self::start) is called, and returns to
/// inert after [`end`](Self::end). Nothing carries over between gestures.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct TouchSession {
    /// Position where the active gesture started.
    pub start_pos: Option<Point>,
    /// Last position seen by the active gesture.
    pub last_pos: Option<Point>,
}

impl TouchSession {
    /// Begins a new gesture at `pos`, discarding any previous one.
    pub fn start(&mut self, pos: Point) {
        self.start_pos = Some(pos);
        self.last_pos = Some(pos);
    }

    /// Records a move to `pos`.
    ///
    /// Returns `None` when no gesture is active.
    pub fn update(&mut self, pos: Point) -> Option<TouchMove> {
        let start = self.start_pos?;
        let last = self.last_pos.replace(pos).unwrap_or(start);
        Some(TouchMove {
            delta: pos.y - last.y,
            total: pos.y - start.y,
        })
    }

    /// Net vertical movement from the gesture start to `pos`.
    #[must_use]
    pub fn total_offset(&self, pos: Point) -> Option<f64> {
        self.start_pos.map(|start| pos.y - start.y)
    }

    /// Net vertical movement from the gesture start to the last seen position.
    #[must_use]
    pub fn distance(&self) -> Option<f64> {
        let start = self.start_pos?;
        self.last_pos.map(|last| last.y - start.y)
    }

    /// Ends the active gesture and returns its net vertical movement.
    pub fn end(&mut self) -> Option<f64> {
        let distance = self.distance();
        self.start_pos = None;
        self.last_pos = None;
        distance
    }

    /// Returns `true` while a gesture is active.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.start_pos.is_some()
    }
}
