//! DraggableElement: one widget bound to a pointer tracker.

use erzy_common::{Point, Size, Viewport, WidgetId};
use erzy_platform::storage::KeyValueStore;
use erzy_platform::PointerEvent;
use tracing::{debug, warn};

use crate::tracker::PointerTracker;

use super::position::{load_position, save_position};
use super::types::{Anchor, DragMove, GestureEnd};

/// Callback run when a gesture on the element is classified as a tap.
pub type TapHandler = Box<dyn FnMut() + Send>;

pub struct DraggableElement {
    /// Widget identity and position storage key.
    id: WidgetId,
    /// Hit-test id that starts a gesture on this element.
    hit_target: String,
    size: Size,
    /// Layout position. Becomes `Absolute` once a gesture starts.
    anchor: Anchor,
    tracker: PointerTracker,
    /// Absolute left/top captured when the current gesture began.
    drag_origin: Point,
    /// Set once the current gesture becomes a drag.
    suppress_default: bool,
    on_tap: Option<TapHandler>,
}

impl std::fmt::Debug for DraggableElement {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DraggableElement")
            .field("id", &self.id)
            .field("hit_target", &self.hit_target)
            .field("size", &self.size)
            .field("anchor", &self.anchor)
            .field("tracking", &self.tracker.is_active())
            .field("on_tap", &self.on_tap.is_some())
            .finish()
    }
}

impl DraggableElement {
    pub fn new(
        id: WidgetId,
        hit_target: impl Into<String>,
        size: Size,
        default_anchor: Anchor,
    ) -> Self {
        Self {
            id,
            hit_target: hit_target.into(),
            size,
            anchor: default_anchor,
            tracker: PointerTracker::new(),
            drag_origin: Point::default(),
            suppress_default: false,
            on_tap: None,
        }
    }

    /// Build the element at its saved position, or at `default_anchor`
    /// when nothing usable is stored.
    pub fn restore(
        id: WidgetId,
        hit_target: impl Into<String>,
        size: Size,
        default_anchor: Anchor,
        store: &dyn KeyValueStore,
    ) -> Self {
        let anchor = match load_position(store, &id) {
            Some(saved) => {
                debug!(widget = %id, left = saved.left, top = saved.top, "restored position");
                Anchor::Absolute(saved.into())
            }
            None => default_anchor,
        };
        Self::new(id, hit_target, size, anchor)
    }

    pub fn with_tracker(mut self, tracker: PointerTracker) -> Self {
        self.tracker = tracker;
        self
    }

    pub fn with_tap_handler(mut self, handler: TapHandler) -> Self {
        self.on_tap = Some(handler);
        self
    }

    // -- Accessors --

    pub fn id(&self) -> &WidgetId {
        &self.id
    }

    pub fn hit_target(&self) -> &str {
        &self.hit_target
    }

    pub fn size(&self) -> Size {
        self.size
    }

    pub fn anchor(&self) -> Anchor {
        self.anchor
    }

    pub fn tracker(&self) -> &PointerTracker {
        &self.tracker
    }

    pub fn is_tracking(&self) -> bool {
        self.tracker.is_active()
    }

    /// Absolute left/top the element renders at.
    pub fn position(&self, viewport: Viewport) -> Point {
        self.anchor.resolve(viewport, self.size)
    }

    // -- Gesture handling --

    /// `mousedown` / `touchstart` on the element.
    ///
    /// Returns `false` (and stays idle) when the event carries no coordinate.
    pub fn on_gesture_start(&mut self, event: &PointerEvent, viewport: Viewport) -> bool {
        let Some(point) = event.primary_point() else {
            debug!(widget = %self.id, "gesture start without coordinates ignored");
            return false;
        };

        self.tracker.begin(point.x, point.y, event.time_ms);

        // Edge-relative anchoring is dropped for good here; every later
        // update works in absolute left/top.
        self.drag_origin = self.anchor.resolve(viewport, self.size);
        self.anchor = Anchor::Absolute(self.drag_origin);
        self.suppress_default = false;
        true
    }

    /// Document-level `mousemove` / `touchmove`.
    ///
    /// Returns `None` when the element is not tracking or the event has no
    /// coordinate. The element only follows the pointer once the gesture is
    /// a drag, so sub-threshold jitter on a tap never shifts it.
    pub fn on_gesture_move(
        &mut self,
        event: &PointerEvent,
        viewport: Viewport,
    ) -> Option<DragMove> {
        if !self.tracker.is_active() {
            return None;
        }
        let point = event.primary_point()?;
        let update = self.tracker.update(point.x, point.y)?;

        if update.moved {
            let target = self.drag_origin.translate(update.offset);
            self.anchor = Anchor::Absolute(viewport.clamp(target, self.size));
            self.suppress_default = true;
        }

        Some(DragMove {
            position: self.anchor.resolve(viewport, self.size),
            suppress_default: self.suppress_default,
            started_drag: update.crossed_threshold,
        })
    }

    /// Document-level `mouseup` / `touchend` / `touchcancel`.
    ///
    /// Coordinates are not needed, so an end event with an empty touch list
    /// still finishes the gesture.
    pub fn on_gesture_end(
        &mut self,
        event: &PointerEvent,
        store: &dyn KeyValueStore,
    ) -> Option<GestureEnd> {
        let outcome = self.tracker.end(event.time_ms)?;
        self.suppress_default = false;

        if outcome.was_drag {
            let position = match self.anchor {
                Anchor::Absolute(p) => p,
                _ => self.drag_origin,
            };
            if let Err(e) = save_position(store, &self.id, position.into()) {
                warn!(widget = %self.id, error = %e, "failed to persist position");
            }
            debug!(widget = %self.id, x = position.x, y = position.y, elapsed_ms = outcome.elapsed_ms, "drag ended");
            return Some(GestureEnd::Drag(position));
        }

        if outcome.was_tap {
            debug!(widget = %self.id, elapsed_ms = outcome.elapsed_ms, "tap");
            if let Some(handler) = self.on_tap.as_mut() {
                handler();
            }
            return Some(GestureEnd::Tap);
        }

        debug!(widget = %self.id, elapsed_ms = outcome.elapsed_ms, "press outlasted tap cutoff");
        Some(GestureEnd::Ignored)
    }
}
