// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_map_view --heading-base-level=0

//! Understory Map View: pan/zoom transform model for fixed-size 2D maps.
//!
//! This crate provides a small, headless model of a map (or any fixed-size
//! vector graphic) that the user can pan and pinch-zoom, and that a host can
//! zoom programmatically. It focuses on:
//! - Transform state: a live `(position, scale)` pair plus a committed
//!   baseline that each gesture computes relative to.
//! - Clamping positions so the content never leaves the screen.
//! - Zooming about a focal content point.
//! - Framing a bounding box over points of interest when the view appears.
//!
//! It does **not** render anything or interpret pointer events. Callers are
//! expected to:
//! - Apply [`MapView::render_transform`] to the content each frame.
//! - Drive [`MapView`] from gesture recognizers (see
//!   `understory_map_gestures`) or from host commands such as
//!   [`MapView::zoom_to_hotspot`].
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::{Point, Vec2};
//! use understory_map_view::{CoordinateSpace, DisplaySize, MapView, ZoomConfig};
//!
//! let space = CoordinateSpace::new(1000.0, 1000.0).unwrap();
//! let display = DisplaySize::new(400.0, 400.0).unwrap();
//! let mut view = MapView::new(space, display, ZoomConfig::default(), None);
//!
//! // Zoom onto a point of interest, in content units.
//! let t = view.zoom_to_hotspot(3.0, 800.0, 900.0);
//! assert_eq!(t.scale, 3.0);
//! assert_eq!(t.position, Vec2::new(-1600.0, -1800.0));
//!
//! // Content points map through translate-then-scale.
//! let on_screen = view.content_to_view_point(Point::new(800.0, 900.0));
//! assert_eq!(on_screen, Point::new(800.0, 900.0));
//! ```
//!
//! ## Framing points of interest
//!
//! ```rust
//! use kurbo::{Point, Vec2};
//! use understory_map_view::{CoordinateSpace, DisplaySize, FIT_ZOOM, MapView, ZoomConfig};
//!
//! let space = CoordinateSpace::new(1000.0, 1000.0).unwrap();
//! let display = DisplaySize::new(400.0, 400.0).unwrap();
//! let hotspots = [Point::new(200.0, 300.0), Point::new(600.0, 450.0)];
//! let view = MapView::with_points(space, display, ZoomConfig::default(), hotspots);
//!
//! assert_eq!(view.scale(), FIT_ZOOM);
//! assert_eq!(view.position(), Vec2::new(-150.0, -250.0));
//! ```
//!
//! ## Design notes
//!
//! - Zoom is uniform and there is no rotation.
//! - Zooming translates linearly in the scale delta, which keeps the focal
//!   point fixed under the content's own coordinates.
//! - At the minimum zoom of `1.0` the clamp range collapses and panning is
//!   impossible.
//!
//! This crate is `no_std`.

#![no_std]

mod config;
mod fit;
mod space;
mod transform;
mod view;
mod view_box;
mod zoom;

pub use config::{
    FIT_ZOOM, HOTSPOT_OFFSET, HOTSPOT_ZOOM_LIMIT, MAX_ZOOM, MIN_ZOOM, PAN_SPEED,
    PAN_SPEED_FACTOR_MAX, PAN_SPEED_FACTOR_MIN, ZoomConfig,
};
pub use fit::{Viewport, fit_transform};
pub use space::{CoordinateSpace, DisplaySize, SpaceError, clamp};
pub use transform::{Transform, TransformState};
pub use view::{MapView, MapViewDebugInfo};
pub use view_box::{ViewBoxError, parse_view_box};
pub use zoom::zoom_about_origin;
