//! Unified pointer input.
//!
//! Mouse and touch events from the host surface are folded into a single
//! `PointerEvent` shape so gesture logic never branches on the input kind.
//! An event whose touch lists are both empty has no coordinate.

mod types;

pub use types::*;
