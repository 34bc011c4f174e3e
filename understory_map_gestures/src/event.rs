// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::Point;

/// Raw gesture input, as delivered by a platform gesture recognizer.
///
/// Positions are display pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum GestureInput {
    /// A single pointer went down and started moving.
    PanBegin(Point),
    /// The panning pointer moved.
    PanMove(Point),
    /// The panning pointer lifted.
    PanEnd,
    /// Two pointers started a pinch.
    PinchBegin(Point, Point),
    /// The pinching pointers moved.
    PinchMove(Point, Point),
    /// The pinch ended.
    PinchEnd,
    /// A single pointer was pressed and released without moving.
    Tap(Point),
    /// The platform cancelled whatever gesture is in flight.
    Cancel,
}

/// Notification emitted towards the host.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum MapEvent {
    /// The zoom factor changed during a pinch.
    ///
    /// Emitted at most once per distinct value.
    ZoomChanged(f64),
    /// A tap landed on the map.
    Tapped {
        /// Tap position in display pixels.
        display: Point,
        /// Content point under the tap.
        content: Point,
    },
}

/// A mutation request for a [`crate::MapController`].
///
/// Gesture input and programmatic zoom share this one entry point so that a
/// single owner applies them in order.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum MapCommand {
    /// Feed gesture input to the interpreter.
    Gesture(GestureInput),
    /// Zoom to `scale` keeping content point `(x, y)` fixed, and commit.
    ZoomToHotspot {
        /// Target zoom factor.
        scale: f64,
        /// Content x coordinate of the focal point.
        x: f64,
        /// Content y coordinate of the focal point.
        y: f64,
    },
}

impl From<GestureInput> for MapCommand {
    fn from(input: GestureInput) -> Self {
        Self::Gesture(input)
    }
}
