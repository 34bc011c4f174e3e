// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tests for the `understory_map_view` crate.
//!
//! These pin down the worked scenarios for clamping, focal zoom and framing,
//! and check the clamping bounds as properties over arbitrary input.

use kurbo::{Point, Rect, Vec2};
use quickcheck::TestResult;
use quickcheck_macros::quickcheck;
use understory_map_view::{
    CoordinateSpace, DisplaySize, MAX_ZOOM, MIN_ZOOM, MapView, Transform, Viewport, ZoomConfig,
};

fn square_view() -> MapView {
    MapView::new(
        CoordinateSpace::new(1000.0, 1000.0).unwrap(),
        DisplaySize::new(1000.0, 1000.0).unwrap(),
        ZoomConfig::default(),
        None,
    )
}

#[test]
fn pan_lockout_at_min_zoom() {
    let mut view = square_view();
    view.pan_preview(Vec2::new(100.0, 100.0));
    view.commit();
    assert_eq!(view.saved(), Transform::IDENTITY);
}

#[test]
fn centered_pinch_zoom() {
    let mut view = square_view();
    view.set_origin(Point::new(500.0, 500.0));
    let t = view.update_scale_and_position(2.0);
    assert_eq!(t, Transform::new(Vec2::new(-500.0, -500.0), 2.0));
}

#[test]
fn initial_fit() {
    let mut view = square_view();
    let viewport = Viewport::from_rect(Rect::new(200.0, 300.0, 800.0, 700.0));
    view.apply_initial_viewport(&viewport);
    assert_eq!(view.position(), Vec2::new(-150.0, -250.0));
    assert_eq!(view.saved(), view.transform());
}

#[test]
fn programmatic_zoom_interior_result() {
    let mut view = square_view();
    let t = view.zoom_to_hotspot(3.0, 800.0, 900.0);
    assert_eq!(t, Transform::new(Vec2::new(-1600.0, -1800.0), 3.0));
    assert!(view.is_at_rest());
}

#[test]
fn commit_twice_is_unchanged() {
    let mut view = square_view();
    view.set_origin(Point::new(120.0, 40.0));
    view.update_scale_and_position(2.5);
    view.commit();
    let once = *view.state();
    view.commit();
    assert_eq!(*view.state(), once);
}

#[quickcheck]
fn clamped_position_stays_in_bounds(scale: f64, x: f64, y: f64) -> TestResult {
    if !(scale.is_finite() && x.is_finite() && y.is_finite()) {
        return TestResult::discard();
    }
    let scale = MIN_ZOOM + scale.abs() % (MAX_ZOOM - MIN_ZOOM);
    let space = CoordinateSpace::new(1000.0, 600.0).unwrap();
    let p = space.clamp_position(Vec2::new(x, y), scale);
    let min = space.min_position(scale);
    TestResult::from_bool(p.x <= 0.0 && p.y <= 0.0 && p.x >= min.x && p.y >= min.y)
}

#[quickcheck]
fn zoom_to_hotspot_is_deterministic(scale: f64, x: f64, y: f64) -> TestResult {
    if !(scale.is_finite() && x.is_finite() && y.is_finite()) {
        return TestResult::discard();
    }
    let (x, y) = (x % 1000.0, y % 1000.0);
    let mut a = square_view();
    let mut b = square_view();
    TestResult::from_bool(a.zoom_to_hotspot(scale, x, y) == b.zoom_to_hotspot(scale, x, y))
}

#[quickcheck]
fn visible_region_stays_inside_content(scale: f64, x: f64, y: f64) -> TestResult {
    if !(scale.is_finite() && x.is_finite() && y.is_finite()) {
        return TestResult::discard();
    }
    let (x, y) = ((x % 1000.0).abs(), (y % 1000.0).abs());
    let mut view = square_view();
    view.zoom_to_hotspot(scale, x, y);
    let visible = view.visible_content_rect();
    let eps = 1e-6;
    TestResult::from_bool(
        visible.x0 >= -eps
            && visible.y0 >= -eps
            && visible.x1 <= 1000.0 + eps
            && visible.y1 <= 1000.0 + eps,
    )
}
