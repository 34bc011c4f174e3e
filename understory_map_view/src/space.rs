// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::fmt;

use kurbo::{Point, Size, Vec2};

/// Constrains `value` to the closed interval `[min, max]`.
///
/// Unlike [`f64::clamp`] this never panics: when `min > max` the result is
/// `max`.
#[must_use]
pub fn clamp(value: f64, min: f64, max: f64) -> f64 {
    value.max(min).min(max)
}

/// Error returned when a content space or display is constructed with
/// unusable dimensions.
#[derive(Clone, Copy, PartialEq, Debug)]
pub enum SpaceError {
    /// A dimension was NaN or infinite.
    NotFinite {
        /// The rejected width.
        width: f64,
        /// The rejected height.
        height: f64,
    },
    /// A dimension was zero or negative.
    NotPositive {
        /// The rejected width.
        width: f64,
        /// The rejected height.
        height: f64,
    },
}

impl fmt::Display for SpaceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotFinite { width, height } => {
                write!(f, "dimensions {width} x {height} must be finite")
            }
            Self::NotPositive { width, height } => {
                write!(f, "dimensions {width} x {height} must be strictly positive")
            }
        }
    }
}

impl core::error::Error for SpaceError {}

fn validate(width: f64, height: f64) -> Result<Size, SpaceError> {
    if !width.is_finite() || !height.is_finite() {
        return Err(SpaceError::NotFinite { width, height });
    }
    if width <= 0.0 || height <= 0.0 {
        return Err(SpaceError::NotPositive { width, height });
    }
    Ok(Size::new(width, height))
}

/// Fixed dimensions of the content (map) coordinate system.
///
/// Positions produced by [`CoordinateSpace::clamp_position`] keep the
/// visible region inside `[0, size_x] x [0, size_y]` at the given scale.
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct CoordinateSpace {
    size: Size,
}

impl CoordinateSpace {
    /// Creates a content space of `size_x` by `size_y` units.
    ///
    /// Both dimensions must be finite and strictly positive; a degenerate
    /// space would silently disable panning.
    pub fn new(size_x: f64, size_y: f64) -> Result<Self, SpaceError> {
        let size = validate(size_x, size_y).inspect_err(|err| {
            log::debug!("rejected content space: {err}");
        })?;
        Ok(Self { size })
    }

    /// Returns the content width.
    #[must_use]
    pub fn size_x(&self) -> f64 {
        self.size.width
    }

    /// Returns the content height.
    #[must_use]
    pub fn size_y(&self) -> f64 {
        self.size.height
    }

    /// Returns the content dimensions as a [`Size`].
    #[must_use]
    pub fn size(&self) -> Size {
        self.size
    }

    /// Returns the most negative position allowed at `scale`.
    ///
    /// The upper bound is always the zero offset. At `scale == 1` the range
    /// collapses to a single point, so panning is impossible at minimum zoom.
    #[must_use]
    pub fn min_position(&self, scale: f64) -> Vec2 {
        Vec2::new(
            -(self.size.width * scale - self.size.width),
            -(self.size.height * scale - self.size.height),
        )
    }

    /// Bounds a candidate position so the content stays on screen at `scale`.
    #[must_use]
    pub fn clamp_position(&self, position: Vec2, scale: f64) -> Vec2 {
        let min = self.min_position(scale);
        Vec2::new(clamp(position.x, min.x, 0.0), clamp(position.y, min.y, 0.0))
    }
}

/// Pixel dimensions of the surface the map is displayed on.
///
/// Only used to convert gesture focal points from pixels into content units.
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct DisplaySize {
    size: Size,
}

impl DisplaySize {
    /// Creates a display of `width` by `height` pixels.
    pub fn new(width: f64, height: f64) -> Result<Self, SpaceError> {
        let size = validate(width, height).inspect_err(|err| {
            log::debug!("rejected display size: {err}");
        })?;
        Ok(Self { size })
    }

    /// Returns the display width in pixels.
    #[must_use]
    pub fn width(&self) -> f64 {
        self.size.width
    }

    /// Returns the display height in pixels.
    #[must_use]
    pub fn height(&self) -> f64 {
        self.size.height
    }

    /// Maps a pixel position on the display proportionally into `space`.
    ///
    /// This ignores the current pan and zoom: the point is scaled by
    /// `space.size / display.size` on each axis.
    #[must_use]
    pub fn to_content(&self, space: &CoordinateSpace, pixel: Point) -> Point {
        Point::new(
            pixel.x / self.size.width * space.size_x(),
            pixel.y / self.size.height * space.size_y(),
        )
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use std::format;

    use kurbo::{Point, Vec2};

    use super::{CoordinateSpace, DisplaySize, SpaceError, clamp};

    #[test]
    fn clamp_is_total() {
        assert_eq!(clamp(5.0, 0.0, 10.0), 5.0);
        assert_eq!(clamp(-5.0, 0.0, 10.0), 0.0);
        assert_eq!(clamp(15.0, 0.0, 10.0), 10.0);
        // Inverted interval resolves to the upper bound instead of panicking.
        assert_eq!(clamp(3.0, 10.0, 0.0), 0.0);
    }

    #[test]
    fn rejects_degenerate_spaces() {
        assert_eq!(
            CoordinateSpace::new(0.0, 10.0),
            Err(SpaceError::NotPositive {
                width: 0.0,
                height: 10.0
            })
        );
        assert!(matches!(
            CoordinateSpace::new(10.0, -1.0),
            Err(SpaceError::NotPositive { .. })
        ));
        assert!(matches!(
            CoordinateSpace::new(f64::NAN, 10.0),
            Err(SpaceError::NotFinite { .. })
        ));
        assert!(matches!(
            DisplaySize::new(320.0, f64::INFINITY),
            Err(SpaceError::NotFinite { .. })
        ));
    }

    #[test]
    fn min_zoom_locks_panning() {
        let space = CoordinateSpace::new(1000.0, 1000.0).unwrap();
        let clamped = space.clamp_position(Vec2::new(100.0, 100.0), 1.0);
        assert_eq!(clamped, Vec2::ZERO);
        let clamped = space.clamp_position(Vec2::new(-100.0, -100.0), 1.0);
        assert_eq!(clamped, Vec2::ZERO);
    }

    #[test]
    fn clamp_position_bounds_each_axis() {
        let space = CoordinateSpace::new(1000.0, 500.0).unwrap();
        assert_eq!(space.min_position(2.0), Vec2::new(-1000.0, -500.0));

        let clamped = space.clamp_position(Vec2::new(-1500.0, 20.0), 2.0);
        assert_eq!(clamped, Vec2::new(-1000.0, 0.0));

        let inside = Vec2::new(-300.0, -200.0);
        assert_eq!(space.clamp_position(inside, 2.0), inside);
    }

    #[test]
    fn display_maps_pixels_proportionally() {
        let space = CoordinateSpace::new(4000.0, 2000.0).unwrap();
        let display = DisplaySize::new(400.0, 200.0).unwrap();
        let content = display.to_content(&space, Point::new(100.0, 50.0));
        assert_eq!(content, Point::new(1000.0, 500.0));
    }

    #[test]
    fn error_messages_name_the_dimensions() {
        let err = CoordinateSpace::new(0.0, 3.0).unwrap_err();
        assert_eq!(
            format!("{err}"),
            "dimensions 0 x 3 must be strictly positive"
        );
    }
}
