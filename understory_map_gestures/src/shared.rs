// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Lock-backed controller for hosts that deliver input on several threads.

use alloc::vec::Vec;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use understory_map_view::{MapView, Transform};

use crate::controller::MapController;
use crate::event::{MapCommand, MapEvent};

/// A [`MapController`] behind a mutex, shareable across threads.
///
/// Gesture callbacks and the host's [`ZoomHandle`] funnel through the same
/// lock, so exactly one writer touches the transform at any instant.
/// Renderers read with [`SharedMapController::snapshot`], which copies
/// position and scale together.
#[derive(Clone, Debug)]
pub struct SharedMapController {
    inner: Arc<Mutex<MapController>>,
}

impl SharedMapController {
    /// Wraps a new controller around `view`.
    #[must_use]
    pub fn new(view: MapView) -> Self {
        Self {
            inner: Arc::new(Mutex::new(MapController::new(view))),
        }
    }

    /// Applies one command under the lock.
    pub fn apply(&self, command: impl Into<MapCommand>) -> Option<Transform> {
        self.lock().apply(command)
    }

    /// Returns the live transform.
    #[must_use]
    pub fn snapshot(&self) -> Transform {
        self.lock().transform()
    }

    /// Takes the queued notifications, oldest first.
    #[must_use]
    pub fn drain_events(&self) -> Vec<MapEvent> {
        self.lock().drain_events().collect()
    }

    /// Runs `f` with shared access to the view.
    pub fn with_view<R>(&self, f: impl FnOnce(&MapView) -> R) -> R {
        f(self.lock().view())
    }

    /// Returns a handle the host can use to zoom programmatically.
    #[must_use]
    pub fn zoom_handle(&self) -> ZoomHandle {
        ZoomHandle {
            inner: Arc::clone(&self.inner),
        }
    }

    fn lock(&self) -> MutexGuard<'_, MapController> {
        // Every mutation leaves the controller consistent, so a panic in
        // another holder does not invalidate it.
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

/// Host-side handle for programmatic zoom.
///
/// Cloning the handle shares the same controller.
#[derive(Clone, Debug)]
pub struct ZoomHandle {
    inner: Arc<Mutex<MapController>>,
}

impl ZoomHandle {
    /// Zooms to `scale` keeping content point `(x, y)` fixed, and commits.
    ///
    /// `x` and `y` are content coordinates, not display pixels.
    pub fn zoom_to_hotspot(&self, scale: f64, x: f64, y: f64) -> Transform {
        self.inner
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .zoom_to_hotspot(scale, x, y)
    }
}
