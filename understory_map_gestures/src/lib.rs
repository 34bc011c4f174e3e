// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_map_gestures --heading-base-level=0

//! Understory Map Gestures: pan, pinch and tap interpretation for map views.
//!
//! This crate sits on top of `understory_map_view` and turns gesture input
//! into transform updates:
//!
//! - [`pan`]: cumulative translation for a single-pointer pan
//! - [`pinch`]: focal point and scale factor for a two-pointer pinch
//! - [`GestureInterpreter`]: arbitration between pan, pinch and tap, commits
//!   on gesture end, and deduplicated zoom notifications
//! - [`MapController`]: single owner of a view, accepting gesture input and
//!   programmatic zoom through one [`MapCommand`] entry point
//! - `SharedMapController` and `ZoomHandle` (feature `std`): the same
//!   controller behind a mutex for hosts with several input threads
//!
//! ## Usage
//!
//! ```rust
//! use kurbo::Point;
//! use understory_map_gestures::{GestureInput, MapCommand, MapController, MapEvent};
//! use understory_map_view::{CoordinateSpace, DisplaySize, MapView, ZoomConfig};
//!
//! let view = MapView::new(
//!     CoordinateSpace::new(1000.0, 1000.0).unwrap(),
//!     DisplaySize::new(500.0, 500.0).unwrap(),
//!     ZoomConfig::default(),
//!     None,
//! );
//! let mut map = MapController::new(view);
//!
//! // Spread two fingers to twice their distance around the display center.
//! map.apply(GestureInput::PinchBegin(Point::new(200.0, 250.0), Point::new(300.0, 250.0)));
//! map.apply(GestureInput::PinchMove(Point::new(150.0, 250.0), Point::new(350.0, 250.0)));
//! map.apply(GestureInput::PinchEnd);
//! assert_eq!(map.transform().scale, 2.0);
//!
//! let events: Vec<_> = map.drain_events().collect();
//! assert_eq!(events, [MapEvent::ZoomChanged(2.0)]);
//!
//! // Host-driven zoom goes through the same entry point.
//! map.apply(MapCommand::ZoomToHotspot { scale: 3.0, x: 800.0, y: 900.0 });
//! assert_eq!(map.transform().scale, 3.0);
//! ```
//!
//! Raw input with pointer positions goes through [`GestureInterpreter::handle`];
//! hosts whose recognizers already report translation and scale can call
//! [`GestureInterpreter::pan_update`] and [`GestureInterpreter::pinch_update`]
//! directly.
//!
//! This crate is `no_std` compatible (with `alloc`) unless the `std` feature
//! is enabled.

#![no_std]

extern crate alloc;

#[cfg(feature = "std")]
extern crate std;

mod controller;
mod event;
mod interpreter;
pub mod pan;
pub mod pinch;
#[cfg(feature = "std")]
mod shared;

pub use controller::MapController;
pub use event::{GestureInput, MapCommand, MapEvent};
pub use interpreter::{ActiveGesture, GestureInterpreter};
#[cfg(feature = "std")]
pub use shared::{SharedMapController, ZoomHandle};
