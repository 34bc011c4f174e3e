// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use understory_map_view::{MapView, Transform};

use crate::event::{MapCommand, MapEvent};
use crate::interpreter::{ActiveGesture, GestureInterpreter};

/// Sole owner of a [`MapView`] and its gesture interpreter.
///
/// All mutations, from gestures and from the host, go through
/// [`MapController::apply`].
#[derive(Clone, Debug)]
pub struct MapController {
    view: MapView,
    gestures: GestureInterpreter,
}

impl MapController {
    /// Takes ownership of `view`.
    #[must_use]
    pub fn new(view: MapView) -> Self {
        Self {
            view,
            gestures: GestureInterpreter::new(),
        }
    }

    /// Returns the owned view for reading.
    #[must_use]
    pub fn view(&self) -> &MapView {
        &self.view
    }

    /// Returns the live transform.
    #[must_use]
    pub fn transform(&self) -> Transform {
        self.view.transform()
    }

    /// Returns the gesture currently in flight.
    #[must_use]
    pub fn active_gesture(&self) -> ActiveGesture {
        self.gestures.active()
    }

    /// Applies one command, returning the live transform if it changed.
    ///
    /// A programmatic zoom abandons any gesture in flight before it runs, so
    /// the gesture's uncommitted preview never mixes with the new baseline.
    pub fn apply(&mut self, command: impl Into<MapCommand>) -> Option<Transform> {
        match command.into() {
            MapCommand::Gesture(input) => self.gestures.handle(&mut self.view, input),
            MapCommand::ZoomToHotspot { scale, x, y } => Some(self.zoom_to_hotspot(scale, x, y)),
        }
    }

    /// Abandons any gesture in flight, then zooms to `scale` keeping content
    /// point `(x, y)` fixed, and commits.
    ///
    /// The host asked for this scale, so no [`MapEvent::ZoomChanged`] is
    /// queued for it; later pinches are compared against it.
    pub fn zoom_to_hotspot(&mut self, scale: f64, x: f64, y: f64) -> Transform {
        self.gestures.cancel(&mut self.view);
        let t = self.view.zoom_to_hotspot(scale, x, y);
        self.gestures.sync_zoom(t.scale);
        t
    }

    /// Takes the queued notifications, oldest first.
    pub fn drain_events(&mut self) -> impl Iterator<Item = MapEvent> + '_ {
        self.gestures.drain_events()
    }

    /// Consumes the controller, returning the view.
    #[must_use]
    pub fn into_view(self) -> MapView {
        self.view
    }
}
