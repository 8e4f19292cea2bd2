//! Tap-versus-drag gesture handling for floating overlay widgets.
//!
//! A [`PointerTracker`] classifies one gesture; a [`DraggableElement`]
//! binds a tracker to a widget position that is clamped to the viewport
//! and persisted between sessions; a [`PanelToggle`] holds the open state a
//! tap drives. [`dispatch`] routes shared move/end events to whichever
//! element is currently tracking.

pub mod dispatch;
pub mod draggable;
pub mod panel;
pub mod tracker;

pub use dispatch::{dispatch, GestureContext, GestureSignal, PointerObserver};
pub use draggable::{Anchor, DragMove, DraggableElement, ElementPosition, GestureEnd};
pub use panel::{PanelState, PanelToggle, SlideTransform};
pub use tracker::{GestureOutcome, PointerState, PointerTracker, TrackerUpdate, DRAG_THRESHOLD};
