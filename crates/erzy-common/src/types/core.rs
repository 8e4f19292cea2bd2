use serde::{Deserialize, Serialize};
use std::fmt;

/// A position in viewport pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Displacement from `self` to `other`.
    pub fn offset_to(self, other: Point) -> Offset {
        Offset {
            dx: other.x - self.x,
            dy: other.y - self.y,
        }
    }

    pub fn translate(self, offset: Offset) -> Point {
        Point::new(self.x + offset.dx, self.y + offset.dy)
    }
}

/// Displacement since a gesture started.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Offset {
    pub dx: f64,
    pub dy: f64,
}

impl Offset {
    /// True when either axis is strictly beyond `threshold`.
    pub fn exceeds(&self, threshold: f64) -> bool {
        self.dx.abs() > threshold || self.dy.abs() > threshold
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl Size {
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    pub const fn square(side: f64) -> Self {
        Self::new(side, side)
    }
}

/// The visible area of the host surface.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

impl Viewport {
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Largest left/top an element of `size` may take while staying visible.
    pub fn max_origin(&self, size: Size) -> Point {
        Point::new(
            (self.width - size.width).max(0.0),
            (self.height - size.height).max(0.0),
        )
    }

    /// Clamp an element origin into `[0, viewport - element]` on both axes.
    pub fn clamp(&self, origin: Point, size: Size) -> Point {
        let max = self.max_origin(size);
        Point::new(origin.x.clamp(0.0, max.x), origin.y.clamp(0.0, max.y))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PanelKind {
    Tools,
    Chat,
}

impl fmt::Display for PanelKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PanelKind::Tools => write!(f, "tools"),
            PanelKind::Chat => write!(f, "chat"),
        }
    }
}
