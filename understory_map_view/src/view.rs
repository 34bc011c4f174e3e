// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Affine, Point, Rect, Vec2};

use crate::config::ZoomConfig;
use crate::fit::{Viewport, fit_transform};
use crate::space::{CoordinateSpace, DisplaySize};
use crate::transform::{Transform, TransformState};
use crate::zoom::zoom_about_origin;

/// Pan/zoom model over a fixed-size content space.
///
/// `MapView` owns the [`TransformState`] for one displayed map and exposes the
/// operations that mutate it:
/// - Live previews while a gesture is in flight
///   ([`MapView::pan_preview`], [`MapView::update_scale_and_position`]).
/// - Committing or abandoning those previews ([`MapView::commit`],
///   [`MapView::revert`]).
/// - Programmatic zoom onto a content point ([`MapView::zoom_to_hotspot`]).
///
/// Every mutation takes `&mut self`, so a single owner serializes gestures and
/// programmatic zooms. Readers get position and scale together through
/// [`MapView::transform`].
#[derive(Clone, Debug)]
pub struct MapView {
    space: CoordinateSpace,
    display: DisplaySize,
    config: ZoomConfig,
    state: TransformState,
}

impl MapView {
    /// Creates a view over `space` shown on `display`.
    ///
    /// With an `initial_viewport` the view starts framed on it (see
    /// [`MapView::apply_initial_viewport`]); otherwise it starts at the
    /// identity transform.
    #[must_use]
    pub fn new(
        space: CoordinateSpace,
        display: DisplaySize,
        config: ZoomConfig,
        initial_viewport: Option<Viewport>,
    ) -> Self {
        let mut view = Self {
            space,
            display,
            config,
            state: TransformState::default(),
        };
        if let Some(viewport) = initial_viewport {
            view.apply_initial_viewport(&viewport);
        }
        view
    }

    /// Creates a view framed on the bounding box of `points`.
    ///
    /// An empty set of points leaves the view at the identity transform.
    #[must_use]
    pub fn with_points<I>(
        space: CoordinateSpace,
        display: DisplaySize,
        config: ZoomConfig,
        points: I,
    ) -> Self
    where
        I: IntoIterator<Item = Point>,
    {
        let viewport = Viewport::from_points(points);
        if viewport.is_none() {
            log::debug!("no points of interest; keeping identity transform");
        }
        Self::new(space, display, config, viewport)
    }

    /// Returns the content space.
    #[must_use]
    pub fn space(&self) -> &CoordinateSpace {
        &self.space
    }

    /// Returns the display dimensions.
    #[must_use]
    pub fn display(&self) -> &DisplaySize {
        &self.display
    }

    /// Returns the zoom configuration.
    #[must_use]
    pub fn config(&self) -> &ZoomConfig {
        &self.config
    }

    /// Returns the full transform state.
    #[must_use]
    pub fn state(&self) -> &TransformState {
        &self.state
    }

    /// Returns the live transform.
    #[must_use]
    pub fn transform(&self) -> Transform {
        self.state.live()
    }

    /// Returns the committed baseline.
    #[must_use]
    pub fn saved(&self) -> Transform {
        self.state.saved()
    }

    /// Returns the live zoom factor.
    #[must_use]
    pub fn scale(&self) -> f64 {
        self.state.live().scale
    }

    /// Returns the live position.
    #[must_use]
    pub fn position(&self) -> Vec2 {
        self.state.live().position
    }

    /// Returns the focal origin of the current or last zoom.
    #[must_use]
    pub fn origin(&self) -> Point {
        self.state.origin()
    }

    /// Returns the affine to apply to the content each frame.
    #[must_use]
    pub fn render_transform(&self) -> Affine {
        self.state.live().to_affine()
    }

    /// Returns `true` if point-of-interest markers should be drawn at the
    /// live zoom factor.
    #[must_use]
    pub fn shows_hotspots(&self) -> bool {
        self.config.shows_hotspots(self.scale())
    }

    /// Returns `true` when no uncommitted change is pending.
    #[must_use]
    pub fn is_at_rest(&self) -> bool {
        self.state.is_at_rest()
    }

    /// Frames `viewport`, replacing both live and saved transforms.
    ///
    /// Intended to run once before any gesture starts.
    pub fn apply_initial_viewport(&mut self, viewport: &Viewport) {
        let framed = fit_transform(&self.space, &self.config, viewport);
        log::debug!(
            "framing viewport {:?} at scale {} position {:?}",
            viewport.to_rect(),
            framed.scale,
            framed.position
        );
        self.state.reset_to(framed);
    }

    /// Sets the focal origin for the next zoom, in content units.
    pub fn set_origin(&mut self, origin: Point) {
        self.state.set_origin(origin);
    }

    /// Sets the focal origin from a pixel position on the display.
    ///
    /// Returns the origin in content units.
    pub fn set_origin_from_display(&mut self, pixel: Point) -> Point {
        let origin = self.display.to_content(&self.space, pixel);
        self.state.set_origin(origin);
        origin
    }

    /// Zooms from the committed baseline to `new_scale` about the current
    /// origin and writes the result to the live transform.
    ///
    /// `new_scale` is used as given; gesture code clamps it to the zoom
    /// limits first.
    pub fn update_scale_and_position(&mut self, new_scale: f64) -> Transform {
        let next = zoom_about_origin(
            &self.space,
            self.state.saved(),
            self.state.origin(),
            new_scale,
        );
        self.state.set_live(next);
        next
    }

    /// Zooms to `scale` keeping content point `(x, y)` fixed, and commits.
    ///
    /// `scale` is clamped to the configured zoom limits. The whole update
    /// happens under `&mut self`, so no intermediate state is observable.
    pub fn zoom_to_hotspot(&mut self, scale: f64, x: f64, y: f64) -> Transform {
        self.state.set_origin(Point::new(x, y));
        let next = self.update_scale_and_position(self.config.clamp_zoom(scale));
        self.state.commit();
        log::debug!("zoomed to hotspot ({x}, {y}) at scale {}", next.scale);
        next
    }

    /// Previews a pan of `translation` pixels from the committed baseline.
    ///
    /// The translation is scaled by [`ZoomConfig::pan_speed`] and the result
    /// clamped at the committed scale. The scale itself never changes.
    pub fn pan_preview(&mut self, translation: Vec2) -> Transform {
        let saved = self.state.saved();
        let speed = self.config.pan_speed(saved.scale);
        let candidate = saved.position + translation * speed;
        let next = Transform::new(
            self.space.clamp_position(candidate, saved.scale),
            saved.scale,
        );
        self.state.set_live(next);
        next
    }

    /// Commits the live transform as the new baseline.
    pub fn commit(&mut self) {
        self.state.commit();
    }

    /// Abandons any uncommitted change.
    pub fn revert(&mut self) {
        self.state.revert();
    }

    /// Returns the content region currently visible, in content units.
    ///
    /// With a clamped transform this always lies inside the content space.
    #[must_use]
    pub fn visible_content_rect(&self) -> Rect {
        let frame = Rect::from_origin_size(Point::ORIGIN, self.space.size());
        self.view_to_content_rect(frame)
    }

    /// Converts a content point into the unzoomed view frame.
    #[must_use]
    pub fn content_to_view_point(&self, pt: Point) -> Point {
        self.render_transform() * pt
    }

    /// Converts a point in the unzoomed view frame into content units.
    #[must_use]
    pub fn view_to_content_point(&self, pt: Point) -> Point {
        self.render_transform().inverse() * pt
    }

    /// Converts a view-frame rectangle into content units.
    #[must_use]
    pub fn view_to_content_rect(&self, rect: Rect) -> Rect {
        // Axis-aligned uniform scale: mapping the two corners is enough.
        let inverse = self.render_transform().inverse();
        Rect::from_points(inverse * rect.origin(), inverse * Point::new(rect.x1, rect.y1))
    }

    /// Snapshot of the current view state for debugging and inspection.
    #[must_use]
    pub fn debug_info(&self) -> MapViewDebugInfo {
        MapViewDebugInfo {
            space: self.space,
            display: self.display,
            live: self.state.live(),
            saved: self.state.saved(),
            origin: self.state.origin(),
            visible_content_rect: self.visible_content_rect(),
            min_zoom: self.config.min_zoom(),
            max_zoom: self.config.max_zoom(),
        }
    }
}

/// Debug snapshot of a [`MapView`] state.
#[derive(Clone, Copy, Debug)]
pub struct MapViewDebugInfo {
    /// Content space dimensions.
    pub space: CoordinateSpace,
    /// Display dimensions in pixels.
    pub display: DisplaySize,
    /// Live transform.
    pub live: Transform,
    /// Committed baseline.
    pub saved: Transform,
    /// Focal origin of the current or last zoom.
    pub origin: Point,
    /// Content region currently visible.
    pub visible_content_rect: Rect,
    /// Minimum zoom factor.
    pub min_zoom: f64,
    /// Maximum zoom factor.
    pub max_zoom: f64,
}

#[cfg(test)]
mod tests {
    use kurbo::{Point, Rect, Vec2};

    use super::MapView;
    use crate::config::{FIT_ZOOM, ZoomConfig};
    use crate::fit::Viewport;
    use crate::space::{CoordinateSpace, DisplaySize};
    use crate::transform::Transform;

    fn view() -> MapView {
        MapView::new(
            CoordinateSpace::new(1000.0, 1000.0).unwrap(),
            DisplaySize::new(500.0, 250.0).unwrap(),
            ZoomConfig::default(),
            None,
        )
    }

    #[test]
    fn starts_at_identity() {
        let v = view();
        assert_eq!(v.transform(), Transform::IDENTITY);
        assert_eq!(v.saved(), Transform::IDENTITY);
        assert!(v.is_at_rest());
        assert!(v.shows_hotspots());
    }

    #[test]
    fn initial_viewport_sets_both_transforms() {
        let v = MapView::new(
            CoordinateSpace::new(1000.0, 1000.0).unwrap(),
            DisplaySize::new(500.0, 250.0).unwrap(),
            ZoomConfig::default(),
            Some(Viewport::from_rect(Rect::new(200.0, 300.0, 400.0, 500.0))),
        );
        let expected = Transform::new(Vec2::new(-150.0, -250.0), FIT_ZOOM);
        assert_eq!(v.transform(), expected);
        assert_eq!(v.saved(), expected);
    }

    #[test]
    fn empty_points_keep_identity() {
        let v = MapView::with_points(
            CoordinateSpace::new(1000.0, 1000.0).unwrap(),
            DisplaySize::new(500.0, 250.0).unwrap(),
            ZoomConfig::default(),
            [],
        );
        assert_eq!(v.transform(), Transform::IDENTITY);
    }

    #[test]
    fn pan_is_locked_at_min_zoom() {
        let mut v = view();
        let t = v.pan_preview(Vec2::new(100.0, 100.0));
        assert_eq!(t.position, Vec2::ZERO);
        assert_eq!(t.scale, 1.0);
    }

    #[test]
    fn pan_uses_saved_scale_and_speed() {
        let mut v = view();
        v.zoom_to_hotspot(3.0, 0.0, 0.0);
        assert_eq!(v.saved(), Transform::new(Vec2::ZERO, 3.0));

        // speed = clamp(5 - 3, 2, 5) * 1.0 = 2.
        let t = v.pan_preview(Vec2::new(-100.0, -30.0));
        assert_eq!(t, Transform::new(Vec2::new(-200.0, -60.0), 3.0));
        assert!(!v.is_at_rest());

        // Translation is cumulative from the baseline, not incremental.
        let t = v.pan_preview(Vec2::new(-150.0, -30.0));
        assert_eq!(t.position, Vec2::new(-300.0, -60.0));

        v.revert();
        assert_eq!(v.transform(), v.saved());
    }

    #[test]
    fn zoom_to_hotspot_commits_and_is_deterministic() {
        let mut a = view();
        let mut b = view();
        let ta = a.zoom_to_hotspot(3.0, 800.0, 900.0);
        let tb = b.zoom_to_hotspot(3.0, 800.0, 900.0);
        assert_eq!(ta, tb);
        assert_eq!(ta, Transform::new(Vec2::new(-1600.0, -1800.0), 3.0));
        assert_eq!(a.saved(), ta);
        assert_eq!(a.origin(), Point::new(800.0, 900.0));
        assert!(!a.shows_hotspots());
    }

    #[test]
    fn zoom_to_hotspot_clamps_scale() {
        let mut v = view();
        let t = v.zoom_to_hotspot(50.0, 0.0, 0.0);
        assert_eq!(t.scale, 5.0);
    }

    #[test]
    fn display_origin_is_proportional() {
        let mut v = view();
        let origin = v.set_origin_from_display(Point::new(250.0, 125.0));
        assert_eq!(origin, Point::new(500.0, 500.0));
        let t = v.update_scale_and_position(2.0);
        assert_eq!(t.position, Vec2::new(-500.0, -500.0));
        // Live only; the baseline still holds the identity.
        assert_eq!(v.saved(), Transform::IDENTITY);
    }

    #[test]
    fn visible_rect_follows_transform() {
        let mut v = view();
        assert_eq!(v.visible_content_rect(), Rect::new(0.0, 0.0, 1000.0, 1000.0));

        v.set_origin(Point::new(500.0, 500.0));
        v.update_scale_and_position(2.0);
        let visible = v.visible_content_rect();
        assert!((visible.x0 - 250.0).abs() < 1e-9);
        assert!((visible.y0 - 250.0).abs() < 1e-9);
        assert!((visible.x1 - 750.0).abs() < 1e-9);
        assert!((visible.y1 - 750.0).abs() < 1e-9);

        let p = Point::new(300.0, 600.0);
        let back = v.view_to_content_point(v.content_to_view_point(p));
        assert!((back.x - p.x).abs() < 1e-9);
        assert!((back.y - p.y).abs() < 1e-9);
    }

    #[test]
    fn debug_info_reports_state() {
        let mut v = view();
        v.zoom_to_hotspot(2.0, 100.0, 100.0);
        let info = v.debug_info();
        assert_eq!(info.live, info.saved);
        assert_eq!(info.origin, Point::new(100.0, 100.0));
        assert!(info.min_zoom <= info.max_zoom);
    }
}
