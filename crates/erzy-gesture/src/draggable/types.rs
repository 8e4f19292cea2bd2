//! Draggable element types.

use erzy_common::{Point, Size, Viewport};
use serde::{Deserialize, Serialize};

/// Where a widget sits before the user has dragged it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Anchor {
    /// Distance from the right and bottom viewport edges.
    BottomRight { right: f64, bottom: f64 },
    /// Centred in the viewport.
    Centered,
    /// Absolute left/top.
    Absolute(Point),
}

impl Anchor {
    /// Resolve to an absolute left/top for an element of `size`, kept
    /// inside `[0, viewport - size]` on both axes.
    pub fn resolve(&self, viewport: Viewport, size: Size) -> Point {
        let origin = match *self {
            Anchor::BottomRight { right, bottom } => Point::new(
                viewport.width - right - size.width,
                viewport.height - bottom - size.height,
            ),
            Anchor::Centered => Point::new(
                (viewport.width - size.width) / 2.0,
                (viewport.height - size.height) / 2.0,
            ),
            Anchor::Absolute(origin) => origin,
        };
        viewport.clamp(origin, size)
    }

    pub fn is_edge_relative(&self) -> bool {
        !matches!(self, Anchor::Absolute(_))
    }
}

/// Persisted widget position, stored as `{"x": left, "y": top}`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ElementPosition {
    #[serde(rename = "x")]
    pub left: f64,
    #[serde(rename = "y")]
    pub top: f64,
}

impl ElementPosition {
    pub fn new(left: f64, top: f64) -> Self {
        Self { left, top }
    }

    pub fn is_finite(&self) -> bool {
        self.left.is_finite() && self.top.is_finite()
    }
}

impl From<Point> for ElementPosition {
    fn from(p: Point) -> Self {
        Self::new(p.x, p.y)
    }
}

impl From<ElementPosition> for Point {
    fn from(p: ElementPosition) -> Self {
        Point::new(p.left, p.top)
    }
}

/// Result of a move event on a tracking element.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragMove {
    /// Current absolute left/top of the element.
    pub position: Point,
    /// The host must cancel the platform default (scroll, text selection)
    /// for this event. Stays true for the rest of the gesture once set,
    /// because browsers only honour the request when it is made eagerly.
    pub suppress_default: bool,
    /// This move is the one that turned the gesture into a drag.
    pub started_drag: bool,
}

/// How a gesture on an element ended.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GestureEnd {
    /// Activation. The tap handler has run; no position was written.
    Tap,
    /// Reposition. The final position has been handed to storage.
    Drag(Point),
    /// A stationary press that outlasted the configured tap cutoff.
    Ignored,
}
