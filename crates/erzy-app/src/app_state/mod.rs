//! Overlay state.
//!
//! `OverlayShell` owns the launcher, the tool panel, the chat window and the
//! chat controller by composition. The embedding layer feeds it pointer
//! events and tool activations and drains the host commands it emits.

mod assistant;
mod core;
mod dispatch;
mod mount;
mod pointer;
mod settings;
mod snapshot;
mod types;


pub use core::OverlayShell;
pub use mount::HostMount;
pub use settings::OverlaySettings;
pub use types::{
    is_interactive_target, ChatSnapshot, PanelSnapshot, PointerResponse, ShellSnapshot,
    WidgetSnapshot, CHAT_CLOSE_TARGET, CHAT_HEADER_TARGET, HOST_Z_INDEX, LAUNCHER_TARGET,
    TOOLS_PANEL_TARGET,
};
