//! Pointer routing: launcher taps toggle the tool panel, drags reposition.

use erzy_common::OverlayEvent;
use erzy_gesture::{dispatch, GestureContext, GestureEnd, GestureSignal};
use erzy_platform::PointerEvent;
use tracing::debug;

use super::core::OverlayShell;
use super::types::PointerResponse;

const LAUNCHER: usize = 0;
const CHAT_WINDOW: usize = 1;

impl OverlayShell {
    /// Feed one pointer event from the host surface.
    pub fn handle_pointer(&mut self, event: &PointerEvent) -> PointerResponse {
        let ctx = GestureContext {
            viewport: self.viewport,
            store: self.store.as_ref(),
        };
        let signals = dispatch(
            &mut [&mut self.launcher, &mut self.chat_window],
            event,
            &ctx,
        );

        let mut response = PointerResponse {
            prevent_default: false,
            handled: !signals.is_empty(),
        };

        for (index, signal) in signals {
            match signal {
                GestureSignal::Started => {}
                GestureSignal::Moved(mv) => {
                    response.prevent_default |= mv.suppress_default;
                }
                GestureSignal::Ended(GestureEnd::Tap) if index == LAUNCHER => {
                    self.toggle_tools_panel();
                }
                GestureSignal::Ended(GestureEnd::Tap) => {
                    debug!(index, "tap on a drag handle");
                }
                GestureSignal::Ended(GestureEnd::Drag(position)) => {
                    let widget = if index == CHAT_WINDOW {
                        self.chat_window.id().to_string()
                    } else {
                        self.launcher.id().to_string()
                    };
                    self.event_bus
                        .publish(OverlayEvent::PositionSaved { widget, position });
                }
                GestureSignal::Ended(GestureEnd::Ignored) => {}
            }
        }

        response
    }
}
