//! Snapshot types and host-surface constants.

use erzy_common::{HostCommand, NotificationLevel, OverlayEvent, Point, Size, Viewport};
use erzy_gesture::{PanelState, SlideTransform};
use serde::Serialize;

/// Stacking priority of the overlay root: the largest 32-bit z-index.
pub const HOST_Z_INDEX: i64 = 2_147_483_647;

/// Hit-test ids of the overlay's interactive regions.
pub const LAUNCHER_TARGET: &str = "gear";
pub const TOOLS_PANEL_TARGET: &str = "tools-panel";
pub const CHAT_HEADER_TARGET: &str = "chat-header";
pub const CHAT_CLOSE_TARGET: &str = "chat-close";

/// Chat window body; not a drag handle.
const CHAT_BODY_TARGET: &str = "chat-body";

/// Whether the overlay captures pointer input over `target`. Everywhere
/// else the root passes pointer events through to the host.
pub fn is_interactive_target(target: &str) -> bool {
    matches!(
        target,
        LAUNCHER_TARGET
            | TOOLS_PANEL_TARGET
            | CHAT_HEADER_TARGET
            | CHAT_CLOSE_TARGET
            | CHAT_BODY_TARGET
    )
}

/// What the host should do with the pointer event it just forwarded.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PointerResponse {
    /// Cancel the platform default (scrolling, text selection).
    pub prevent_default: bool,
    /// Some widget acted on the event.
    pub handled: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct WidgetSnapshot {
    pub position: Point,
    pub size: Size,
    pub dragging: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct PanelSnapshot {
    pub state: PanelState,
    pub transform: SlideTransform,
}

#[derive(Debug, Clone, Serialize)]
pub struct ToastSnapshot {
    pub level: NotificationLevel,
    pub message: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct ChatMessageSnapshot {
    pub text: String,
    pub is_user: bool,
    pub is_notice: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct ChatSnapshot {
    pub window: WidgetSnapshot,
    pub panel: PanelSnapshot,
    pub model: String,
    pub input: String,
    pub input_enabled: bool,
    pub outstanding: usize,
    pub messages: Vec<ChatMessageSnapshot>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ToolEntrySnapshot {
    pub action: erzy_common::ToolAction,
    pub label: &'static str,
    pub icon: &'static str,
    pub enabled: bool,
}

/// Everything a presentation layer needs to draw the overlay.
#[derive(Debug, Clone, Serialize)]
pub struct ShellSnapshot {
    pub viewport: Viewport,
    pub z_index: i64,
    pub launcher: WidgetSnapshot,
    pub tools_panel: PanelSnapshot,
    pub tools: Vec<ToolEntrySnapshot>,
    pub chat: ChatSnapshot,
    pub dark_mode: bool,
    pub notifications: Vec<ToastSnapshot>,
    pub host_commands: Vec<HostCommand>,
    /// Events published during the run, when collected by the caller.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub events: Vec<OverlayEvent>,
}
