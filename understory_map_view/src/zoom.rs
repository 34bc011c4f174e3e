// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::Point;

use crate::space::CoordinateSpace;
use crate::transform::Transform;

/// Zooms from `saved` to `new_scale`, keeping content point `origin` under
/// the zoom focus.
///
/// The translation is linear in the scale delta:
/// `saved.position + origin * (saved.scale - new_scale)`, then clamped into
/// `space` at `new_scale`. `new_scale` is used as given; callers clamp it to
/// their zoom limits first.
#[must_use]
pub fn zoom_about_origin(
    space: &CoordinateSpace,
    saved: Transform,
    origin: Point,
    new_scale: f64,
) -> Transform {
    let scale_offset = saved.scale - new_scale;
    let raw = saved.position + origin.to_vec2() * scale_offset;
    Transform::new(space.clamp_position(raw, new_scale), new_scale)
}
