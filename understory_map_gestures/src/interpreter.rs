// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::vec::Vec;

use kurbo::{Point, Vec2};
use understory_map_view::{MapView, Transform};

use crate::event::{GestureInput, MapEvent};
use crate::pan::PanTracker;
use crate::pinch::PinchTracker;

/// The gesture currently driving the transform.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum ActiveGesture {
    /// Nothing in flight; live and saved transforms agree.
    #[default]
    Idle,
    /// A single-pointer pan.
    Pan,
    /// A two-pointer pinch.
    Pinch,
}

/// Interprets pan, pinch and tap gestures against a [`MapView`].
///
/// At most one of pan and pinch drives the view at a time. Beginning one
/// abandons the other without committing it, and updates for a gesture that
/// is not active are ignored. Pan and pinch commit on their end event.
///
/// Notifications are queued and handed out by
/// [`GestureInterpreter::drain_events`] in emission order.
#[derive(Clone, Debug, Default)]
pub struct GestureInterpreter {
    active: ActiveGesture,
    pan: PanTracker,
    pinch: PinchTracker,
    last_zoom_emitted: Option<f64>,
    events: Vec<MapEvent>,
}

impl GestureInterpreter {
    /// Creates an idle interpreter.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the gesture currently in flight.
    #[must_use]
    pub fn active(&self) -> ActiveGesture {
        self.active
    }

    /// Feeds raw pointer input, returning the live transform if it changed.
    pub fn handle(&mut self, view: &mut MapView, input: GestureInput) -> Option<Transform> {
        match input {
            GestureInput::PanBegin(pos) => {
                self.pan_begin(view);
                self.pan.start(pos);
                None
            }
            GestureInput::PanMove(pos) => {
                if self.active != ActiveGesture::Pan {
                    return None;
                }
                let translation = self.pan.update(pos)?;
                self.pan_update(view, translation)
            }
            GestureInput::PanEnd => self.pan_end(view),
            GestureInput::PinchBegin(a, b) => {
                // Abandoning resets the trackers, so start tracking afterwards.
                self.pinch_begin(view, a.midpoint(b));
                self.pinch.start(a, b);
                None
            }
            GestureInput::PinchMove(a, b) => {
                if self.active != ActiveGesture::Pinch {
                    return None;
                }
                let factor = self.pinch.update(a, b)?;
                self.pinch_update(view, factor)
            }
            GestureInput::PinchEnd => self.pinch_end(view),
            GestureInput::Tap(pos) => {
                self.tap(view, pos);
                None
            }
            GestureInput::Cancel => {
                self.cancel(view);
                None
            }
        }
    }

    /// Starts a pan, abandoning any gesture already in flight.
    pub fn pan_begin(&mut self, view: &mut MapView) {
        self.abandon(view);
        self.active = ActiveGesture::Pan;
    }

    /// Previews a pan by `translation` pixels since the pan began.
    ///
    /// Returns `None` if no pan is active.
    pub fn pan_update(&mut self, view: &mut MapView, translation: Vec2) -> Option<Transform> {
        if self.active != ActiveGesture::Pan {
            log::trace!("ignoring pan update while {:?}", self.active);
            return None;
        }
        Some(view.pan_preview(translation))
    }

    /// Ends the active pan and commits its position.
    ///
    /// Returns the committed transform, or `None` if no pan was active.
    pub fn pan_end(&mut self, view: &mut MapView) -> Option<Transform> {
        if self.active != ActiveGesture::Pan {
            return None;
        }
        view.commit();
        self.pan.end();
        self.active = ActiveGesture::Idle;
        log::debug!("pan committed at {:?}", view.position());
        Some(view.transform())
    }

    /// Starts a pinch around `focal`, in display pixels, abandoning any
    /// gesture already in flight.
    pub fn pinch_begin(&mut self, view: &mut MapView, focal: Point) {
        self.abandon(view);
        let origin = view.set_origin_from_display(focal);
        self.active = ActiveGesture::Pinch;
        log::trace!("pinch origin {origin:?}");
    }

    /// Zooms to the committed scale times `factor`, clamped to the zoom limits.
    ///
    /// Queues [`MapEvent::ZoomChanged`] unless the resulting scale equals the
    /// last one reported. Returns `None` if no pinch is active.
    pub fn pinch_update(&mut self, view: &mut MapView, factor: f64) -> Option<Transform> {
        if self.active != ActiveGesture::Pinch {
            log::trace!("ignoring pinch update while {:?}", self.active);
            return None;
        }
        let new_scale = view.config().clamp_zoom(view.saved().scale * factor);
        let next = view.update_scale_and_position(new_scale);
        self.notify_zoom(next.scale);
        Some(next)
    }

    /// Ends the active pinch and commits its transform.
    ///
    /// Returns the committed transform, or `None` if no pinch was active.
    pub fn pinch_end(&mut self, view: &mut MapView) -> Option<Transform> {
        if self.active != ActiveGesture::Pinch {
            return None;
        }
        view.commit();
        self.pinch.end();
        self.active = ActiveGesture::Idle;
        log::debug!("pinch committed at scale {}", view.scale());
        Some(view.transform())
    }

    /// Reports a tap at `pos`, in display pixels.
    ///
    /// Taps never change the transform. They are ignored while a pan or pinch
    /// is in flight.
    pub fn tap(&mut self, view: &MapView, pos: Point) {
        if self.active != ActiveGesture::Idle {
            return;
        }
        let frame = view.display().to_content(view.space(), pos);
        let content = view.view_to_content_point(frame);
        log::debug!("tap at {pos:?} (content {content:?})");
        self.events.push(MapEvent::Tapped {
            display: pos,
            content,
        });
    }

    /// Abandons whatever gesture is in flight without committing it.
    pub fn cancel(&mut self, view: &mut MapView) {
        self.abandon(view);
    }

    /// Records a scale the host already knows about, such as one it set by
    /// programmatic zoom.
    ///
    /// Later pinch updates are compared against `scale`, so a pinch back to a
    /// previously reported value still notifies.
    pub fn sync_zoom(&mut self, scale: f64) {
        self.last_zoom_emitted = Some(scale);
    }

    /// Takes the queued notifications, oldest first.
    pub fn drain_events(&mut self) -> alloc::vec::Drain<'_, MapEvent> {
        self.events.drain(..)
    }

    /// Returns `true` if notifications are waiting to be drained.
    #[must_use]
    pub fn has_events(&self) -> bool {
        !self.events.is_empty()
    }

    fn notify_zoom(&mut self, scale: f64) {
        if self.last_zoom_emitted == Some(scale) {
            return;
        }
        self.last_zoom_emitted = Some(scale);
        self.events.push(MapEvent::ZoomChanged(scale));
    }

    fn abandon(&mut self, view: &mut MapView) {
        if self.active == ActiveGesture::Idle {
            return;
        }
        log::debug!("abandoning {:?} without commit", self.active);
        view.revert();
        self.pan.end();
        self.pinch.end();
        self.active = ActiveGesture::Idle;
        // Only a host that has heard a scale needs to hear it undone.
        if self.last_zoom_emitted.is_some() {
            self.notify_zoom(view.scale());
        }
    }
}
