//! Pointer event routing across draggable widgets.
//!
//! Start events go to the widget whose hit target was pressed. Move and end
//! events are observed at the document level, so they are offered to every
//! widget that currently has a gesture in flight and to no other. This is
//! what keeps two draggable widgets from dragging each other.

use erzy_common::Viewport;
use erzy_platform::storage::KeyValueStore;
use erzy_platform::{PointerEvent, PointerPhase};

use crate::draggable::{DragMove, DraggableElement, GestureEnd};

/// Shared inputs every observer needs to handle an event.
pub struct GestureContext<'a> {
    pub viewport: Viewport,
    pub store: &'a dyn KeyValueStore,
}

/// What an observer did with an event.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GestureSignal {
    Started,
    Moved(DragMove),
    Ended(GestureEnd),
}

pub trait PointerObserver {
    fn hit_target(&self) -> &str;

    fn is_tracking(&self) -> bool;

    fn handle(&mut self, event: &PointerEvent, ctx: &GestureContext<'_>) -> Option<GestureSignal>;
}

impl PointerObserver for DraggableElement {
    fn hit_target(&self) -> &str {
        DraggableElement::hit_target(self)
    }

    fn is_tracking(&self) -> bool {
        DraggableElement::is_tracking(self)
    }

    fn handle(&mut self, event: &PointerEvent, ctx: &GestureContext<'_>) -> Option<GestureSignal> {
        match event.phase {
            PointerPhase::Start => self
                .on_gesture_start(event, ctx.viewport)
                .then_some(GestureSignal::Started),
            PointerPhase::Move => self
                .on_gesture_move(event, ctx.viewport)
                .map(GestureSignal::Moved),
            PointerPhase::End | PointerPhase::Cancel => self
                .on_gesture_end(event, ctx.store)
                .map(GestureSignal::Ended),
        }
    }
}

/// Offer `event` to the observers that should see it.
///
/// Returns `(observer index, signal)` for every observer that acted.
pub fn dispatch(
    observers: &mut [&mut dyn PointerObserver],
    event: &PointerEvent,
    ctx: &GestureContext<'_>,
) -> Vec<(usize, GestureSignal)> {
    let mut signals = Vec::new();

    for (index, observer) in observers.iter_mut().enumerate() {
        let interested = match event.phase {
            PointerPhase::Start => event.target.as_deref() == Some(observer.hit_target()),
            PointerPhase::Move | PointerPhase::End | PointerPhase::Cancel => {
                observer.is_tracking()
            }
        };
        if !interested {
            continue;
        }
        if let Some(signal) = observer.handle(event, ctx) {
            signals.push((index, signal));
        }
    }

    signals
}
