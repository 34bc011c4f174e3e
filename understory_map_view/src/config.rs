// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use crate::space::clamp;

/// Lowest zoom factor reachable by gestures.
pub const MIN_ZOOM: f64 = 1.0;

/// Highest zoom factor reachable by gestures.
pub const MAX_ZOOM: f64 = 5.0;

/// Zoom factor applied when framing an initial [`crate::Viewport`].
pub const FIT_ZOOM: f64 = 1.5;

/// Padding, in content units, left between the view edge and a framed viewport.
pub const HOTSPOT_OFFSET: f64 = 50.0;

/// Base multiplier for pan translation.
pub const PAN_SPEED: f64 = 1.0;

/// Bounds applied to `max_zoom - saved_scale` before it scales pan speed.
pub const PAN_SPEED_FACTOR_MIN: f64 = 2.0;

/// See [`PAN_SPEED_FACTOR_MIN`].
pub const PAN_SPEED_FACTOR_MAX: f64 = 5.0;

/// Zoom factor at which point-of-interest markers give way to detail content.
///
/// This is also the conventional target scale for zooming onto a hotspot.
pub const HOTSPOT_ZOOM_LIMIT: f64 = 3.0;

/// Tunable constants for zooming, panning and initial framing.
///
/// The defaults match the exported constants. Setters normalize ranges so
/// that their lower bound never exceeds the upper bound.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ZoomConfig {
    min_zoom: f64,
    max_zoom: f64,
    fit_zoom: f64,
    hotspot_offset: f64,
    pan_speed: f64,
    pan_speed_factor_min: f64,
    pan_speed_factor_max: f64,
    hotspot_zoom_limit: f64,
}

impl Default for ZoomConfig {
    fn default() -> Self {
        Self {
            min_zoom: MIN_ZOOM,
            max_zoom: MAX_ZOOM,
            fit_zoom: FIT_ZOOM,
            hotspot_offset: HOTSPOT_OFFSET,
            pan_speed: PAN_SPEED,
            pan_speed_factor_min: PAN_SPEED_FACTOR_MIN,
            pan_speed_factor_max: PAN_SPEED_FACTOR_MAX,
            hotspot_zoom_limit: HOTSPOT_ZOOM_LIMIT,
        }
    }
}

impl ZoomConfig {
    /// Returns the minimum zoom factor.
    #[must_use]
    pub fn min_zoom(&self) -> f64 {
        self.min_zoom
    }

    /// Returns the maximum zoom factor.
    #[must_use]
    pub fn max_zoom(&self) -> f64 {
        self.max_zoom
    }

    /// Sets the minimum and maximum zoom factors.
    ///
    /// The provided range is normalized so that `min_zoom <= max_zoom`.
    pub fn set_zoom_limits(&mut self, min_zoom: f64, max_zoom: f64) {
        let (min_zoom, max_zoom) = if min_zoom <= max_zoom {
            (min_zoom, max_zoom)
        } else {
            (max_zoom, min_zoom)
        };
        self.min_zoom = min_zoom;
        self.max_zoom = max_zoom;
    }

    /// Returns the zoom factor used for initial framing.
    #[must_use]
    pub fn fit_zoom(&self) -> f64 {
        self.fit_zoom
    }

    /// Sets the zoom factor used for initial framing.
    pub fn set_fit_zoom(&mut self, zoom: f64) {
        self.fit_zoom = zoom;
    }

    /// Returns the framing padding in content units.
    #[must_use]
    pub fn hotspot_offset(&self) -> f64 {
        self.hotspot_offset
    }

    /// Sets the framing padding in content units.
    pub fn set_hotspot_offset(&mut self, offset: f64) {
        self.hotspot_offset = offset;
    }

    /// Returns the base pan speed multiplier.
    #[must_use]
    pub fn base_pan_speed(&self) -> f64 {
        self.pan_speed
    }

    /// Sets the base pan speed multiplier.
    pub fn set_pan_speed(&mut self, speed: f64) {
        self.pan_speed = speed;
    }

    /// Returns the `(min, max)` bounds of the pan speed factor.
    #[must_use]
    pub fn pan_speed_factor_range(&self) -> (f64, f64) {
        (self.pan_speed_factor_min, self.pan_speed_factor_max)
    }

    /// Sets the bounds of the pan speed factor, normalized so that `min <= max`.
    pub fn set_pan_speed_factor_range(&mut self, min: f64, max: f64) {
        let (min, max) = if min <= max { (min, max) } else { (max, min) };
        self.pan_speed_factor_min = min;
        self.pan_speed_factor_max = max;
    }

    /// Returns the hotspot zoom limit.
    #[must_use]
    pub fn hotspot_zoom_limit(&self) -> f64 {
        self.hotspot_zoom_limit
    }

    /// Sets the hotspot zoom limit.
    pub fn set_hotspot_zoom_limit(&mut self, limit: f64) {
        self.hotspot_zoom_limit = limit;
    }

    /// Clamps `scale` into `[min_zoom, max_zoom]`.
    #[must_use]
    pub fn clamp_zoom(&self, scale: f64) -> f64 {
        clamp(scale, self.min_zoom, self.max_zoom)
    }

    /// Pan translation multiplier for a gesture starting at `saved_scale`.
    ///
    /// Higher zoom yields a finer pan: the factor is `max_zoom - saved_scale`
    /// clamped into the pan speed factor range, times the base pan speed.
    #[must_use]
    pub fn pan_speed(&self, saved_scale: f64) -> f64 {
        clamp(
            self.max_zoom - saved_scale,
            self.pan_speed_factor_min,
            self.pan_speed_factor_max,
        ) * self.pan_speed
    }

    /// Returns `true` when point-of-interest markers should be shown at `scale`.
    #[must_use]
    pub fn shows_hotspots(&self, scale: f64) -> bool {
        scale < self.hotspot_zoom_limit
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_constants() {
        let config = ZoomConfig::default();
        assert_eq!(config.min_zoom(), MIN_ZOOM);
        assert_eq!(config.max_zoom(), MAX_ZOOM);
        assert_eq!(config.fit_zoom(), FIT_ZOOM);
        assert_eq!(config.hotspot_offset(), HOTSPOT_OFFSET);
        assert_eq!(config.base_pan_speed(), PAN_SPEED);
        assert_eq!(
            config.pan_speed_factor_range(),
            (PAN_SPEED_FACTOR_MIN, PAN_SPEED_FACTOR_MAX)
        );
        assert_eq!(config.hotspot_zoom_limit(), HOTSPOT_ZOOM_LIMIT);
    }

    #[test]
    fn limits_are_normalized() {
        let mut config = ZoomConfig::default();
        config.set_zoom_limits(8.0, 2.0);
        assert_eq!((config.min_zoom(), config.max_zoom()), (2.0, 8.0));

        config.set_pan_speed_factor_range(4.0, 1.0);
        assert_eq!(config.pan_speed_factor_range(), (1.0, 4.0));
    }

    #[test]
    fn pan_speed_gets_finer_as_zoom_grows() {
        let config = ZoomConfig::default();
        // 5 - 1 = 4, inside [2, 5].
        assert_eq!(config.pan_speed(1.0), 4.0);
        // 5 - 4 = 1, raised to the lower bound.
        assert_eq!(config.pan_speed(4.0), 2.0);
        assert_eq!(config.pan_speed(5.0), 2.0);
        assert!(config.pan_speed(1.0) >= config.pan_speed(3.0));

        let mut config = config;
        config.set_pan_speed(0.5);
        assert_eq!(config.pan_speed(1.0), 2.0);
    }

    #[test]
    fn hotspots_hidden_from_limit_upward() {
        let config = ZoomConfig::default();
        assert!(config.shows_hotspots(1.0));
        assert!(config.shows_hotspots(2.99));
        assert!(!config.shows_hotspots(3.0));
        assert!(!config.shows_hotspots(5.0));
    }

    #[test]
    fn clamp_zoom_respects_limits() {
        let config = ZoomConfig::default();
        assert_eq!(config.clamp_zoom(0.2), 1.0);
        assert_eq!(config.clamp_zoom(2.5), 2.5);
        assert_eq!(config.clamp_zoom(9.0), 5.0);
    }
}
