//! Scripted replay of overlay interactions.
//!
//! Drives an [`OverlayShell`](crate::app_state::OverlayShell) from a JSON
//! script so gesture and chat behaviour can be exercised without a host
//! surface.

mod runner;
mod script;

pub use runner::run;
pub use script::{load_script, Script, Step};
