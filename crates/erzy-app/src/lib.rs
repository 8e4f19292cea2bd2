//! Erzy tools overlay: the composed overlay shell, its tool panel, and a
//! scripted replay driver.

pub mod app_state;
pub mod eval;
pub mod replay;

pub use app_state::{HostMount, OverlaySettings, OverlayShell, PointerResponse, ShellSnapshot};
