// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pinch tracking: turn two pointer positions into a focal point and a scale factor.

use kurbo::Point;

/// Tracks a two-pointer pinch.
///
/// The focal point is fixed at the midpoint of the two pointers when the
/// pinch starts. The scale factor is the ratio of the current pointer
/// distance to the starting distance.
#[derive(Debug, Clone, Default, Copy)]
pub struct PinchTracker {
    initial_distance: Option<f64>,
    focal: Option<Point>,
}

impl PinchTracker {
    /// Start tracking a pinch, returning its focal point.
    pub fn start(&mut self, a: Point, b: Point) -> Point {
        let focal = a.midpoint(b);
        self.initial_distance = Some(a.distance(b));
        self.focal = Some(focal);
        focal
    }

    /// Scale factor for the current pointer positions.
    ///
    /// Returns `None` when no pinch is tracked, and `1.0` if the pinch started
    /// with both pointers at the same spot.
    pub fn update(&self, a: Point, b: Point) -> Option<f64> {
        let initial = self.initial_distance?;
        if initial <= 0.0 {
            return Some(1.0);
        }
        Some(a.distance(b) / initial)
    }

    /// Focal point fixed at the start of the pinch.
    pub fn focal(&self) -> Option<Point> {
        self.focal
    }

    /// Stop tracking and reset state.
    pub fn end(&mut self) {
        self.initial_distance = None;
        self.focal = None;
    }

    /// Returns `true` while a pinch is being tracked.
    pub fn is_pinching(&self) -> bool {
        self.initial_distance.is_some()
    }
}
