// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pan tracking: turn pointer positions into a translation since the pan began.
//!
//! ## Usage
//!
//! 1) Start tracking with [`PanTracker::start`] at the pointer-down position.
//! 2) On each move, call [`PanTracker::update`] to get the cumulative
//!    translation from the start position.
//! 3) Call [`PanTracker::end`] when the pointer lifts or the pan is abandoned.
//!
//! ## Minimal example
//!
//! ```
//! use kurbo::{Point, Vec2};
//! use understory_map_gestures::pan::PanTracker;
//!
//! let mut pan = PanTracker::default();
//! pan.start(Point::new(10.0, 20.0));
//! assert!(pan.is_panning());
//!
//! pan.update(Point::new(15.0, 25.0));
//! let translation = pan.update(Point::new(30.0, 20.0)).unwrap();
//! assert_eq!(translation, Vec2::new(20.0, 0.0));
//! ```

use kurbo::{Point, Vec2};

/// Tracks a single-pointer pan.
#[derive(Debug, Clone, Default, Copy)]
pub struct PanTracker {
    /// Pointer position where the pan started.
    pub start_pos: Option<Point>,
    /// Last pointer position seen during the pan.
    pub last_pos: Option<Point>,
}

impl PanTracker {
    /// Start tracking a new pan from the given position.
    pub fn start(&mut self, pos: Point) {
        self.start_pos = Some(pos);
        self.last_pos = Some(pos);
    }

    /// Record a new pointer position, returning the translation since the start.
    pub fn update(&mut self, pos: Point) -> Option<Vec2> {
        let start = self.start_pos?;
        self.last_pos = Some(pos);
        Some(pos - start)
    }

    /// Translation between the start and the last recorded position.
    pub fn translation(&self) -> Option<Vec2> {
        Some(self.last_pos? - self.start_pos?)
    }

    /// Stop tracking and reset state.
    pub fn end(&mut self) {
        self.start_pos = None;
        self.last_pos = None;
    }

    /// Returns `true` while a pan is being tracked.
    pub fn is_panning(&self) -> bool {
        self.start_pos.is_some()
    }
}
