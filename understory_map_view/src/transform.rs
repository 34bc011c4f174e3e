// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Affine, Point, Vec2};

/// A pan offset and uniform zoom factor, always read and written as a pair.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Transform {
    /// Offset of the content within the view, in content units.
    ///
    /// Non-positive on both axes once clamped.
    pub position: Vec2,
    /// Uniform zoom factor.
    pub scale: f64,
}

impl Transform {
    /// Unzoomed, unpanned transform.
    pub const IDENTITY: Self = Self {
        position: Vec2::ZERO,
        scale: 1.0,
    };

    /// Creates a transform from a position and scale.
    #[must_use]
    pub const fn new(position: Vec2, scale: f64) -> Self {
        Self { position, scale }
    }

    /// Returns the affine applied to the content when rendering.
    ///
    /// Translation by `position` followed by scaling by `scale`.
    #[must_use]
    pub fn to_affine(&self) -> Affine {
        Affine::translate(self.position) * Affine::scale(self.scale)
    }
}

impl Default for Transform {
    fn default() -> Self {
        Self::IDENTITY
    }
}

/// Live and committed transforms plus the focal origin of the current zoom.
///
/// The live transform changes continuously while a gesture is in flight; the
/// saved transform is the baseline every gesture computes relative to. The
/// two are equal whenever no interaction is in progress.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TransformState {
    live: Transform,
    saved: Transform,
    origin: Point,
}

impl Default for TransformState {
    fn default() -> Self {
        Self::new(Transform::IDENTITY)
    }
}

impl TransformState {
    /// Creates a state at rest on `initial`.
    #[must_use]
    pub fn new(initial: Transform) -> Self {
        Self {
            live: initial,
            saved: initial,
            origin: Point::ZERO,
        }
    }

    /// Returns the live transform.
    #[must_use]
    pub fn live(&self) -> Transform {
        self.live
    }

    /// Returns the committed baseline.
    #[must_use]
    pub fn saved(&self) -> Transform {
        self.saved
    }

    /// Returns the focal origin of the current zoom, in content units.
    #[must_use]
    pub fn origin(&self) -> Point {
        self.origin
    }

    /// Sets the focal origin of the next zoom, in content units.
    pub fn set_origin(&mut self, origin: Point) {
        self.origin = origin;
    }

    /// Replaces the live transform without touching the baseline.
    pub fn set_live(&mut self, live: Transform) {
        self.live = live;
    }

    /// Commits the live transform as the new baseline.
    ///
    /// Committing again without an intervening change leaves the state as is.
    pub fn commit(&mut self) {
        self.saved = self.live;
    }

    /// Drops any uncommitted change, returning the live transform to the
    /// baseline.
    pub fn revert(&mut self) {
        self.live = self.saved;
    }

    /// Sets live and saved transforms to `transform` in one step.
    pub fn reset_to(&mut self, transform: Transform) {
        self.live = transform;
        self.saved = transform;
    }

    /// Returns `true` when the live transform equals the baseline.
    #[must_use]
    pub fn is_at_rest(&self) -> bool {
        self.live == self.saved
    }
}
