//! Draggable widgets with persisted positions.
//!
//! A `DraggableElement` converts its layout anchor into absolute left/top
//! the moment a gesture starts, follows the pointer once the gesture is a
//! drag, clamps to the viewport, and writes the final position to storage
//! when the drag ends. Taps never move or persist anything.

mod element;
mod position;
mod types;

#[cfg(test)]
mod tests;

pub use element::{DraggableElement, TapHandler};
pub use position::{load_position, save_position};
pub use types::*;
