// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Point, Rect, Vec2};

use crate::config::ZoomConfig;
use crate::space::CoordinateSpace;
use crate::transform::Transform;

/// Axis‑aligned bounding box over a set of points of interest, in content units.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    /// Smallest x coordinate.
    pub left: f64,
    /// Smallest y coordinate.
    pub top: f64,
    /// Largest x coordinate.
    pub right: f64,
    /// Largest y coordinate.
    pub bottom: f64,
    /// `right - left`.
    pub width: f64,
    /// `bottom - top`.
    pub height: f64,
    /// Midpoint of the box.
    pub center: Point,
}

impl Viewport {
    /// Computes the bounding box of `points`.
    ///
    /// Returns `None` when `points` is empty.
    pub fn from_points<I>(points: I) -> Option<Self>
    where
        I: IntoIterator<Item = Point>,
    {
        let mut points = points.into_iter();
        let first = points.next()?;
        let (mut left, mut top, mut right, mut bottom) = (first.x, first.y, first.x, first.y);
        for p in points {
            left = left.min(p.x);
            right = right.max(p.x);
            top = top.min(p.y);
            bottom = bottom.max(p.y);
        }
        Some(Self::from_rect(Rect::new(left, top, right, bottom)))
    }

    /// Builds a viewport covering `rect`.
    #[must_use]
    pub fn from_rect(rect: Rect) -> Self {
        let rect = rect.abs();
        let width = rect.width();
        let height = rect.height();
        Self {
            left: rect.x0,
            top: rect.y0,
            right: rect.x1,
            bottom: rect.y1,
            width,
            height,
            center: Point::new(rect.x0 + width / 2.0, rect.y0 + height / 2.0),
        }
    }

    /// Returns the viewport as a [`Rect`].
    #[must_use]
    pub fn to_rect(&self) -> Rect {
        Rect::new(self.left, self.top, self.right, self.bottom)
    }
}

/// Computes the transform that frames `viewport` when the view first appears.
///
/// The scale is [`ZoomConfig::fit_zoom`], held within the zoom limits. The
/// position moves the viewport's top-left corner to the view origin, padded
/// by [`ZoomConfig::hotspot_offset`], and is clamped to the range allowed at
/// that scale. At the default fit zoom of 1.5 that range is half the content
/// size on each axis.
#[must_use]
pub fn fit_transform(
    space: &CoordinateSpace,
    config: &ZoomConfig,
    viewport: &Viewport,
) -> Transform {
    let scale = config.clamp_zoom(config.fit_zoom());
    let offset = config.hotspot_offset();
    let raw = Vec2::new(-viewport.left + offset, -viewport.top + offset);
    Transform::new(space.clamp_position(raw, scale), scale)
}
