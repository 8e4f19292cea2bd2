use erzy_common::Point;
use serde::{Deserialize, Serialize};

/// Where a gesture is in its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PointerPhase {
    /// `mousedown` / `touchstart`.
    Start,
    /// `mousemove` / `touchmove`.
    Move,
    /// `mouseup` / `touchend`.
    End,
    /// `touchcancel`. Handled exactly like `End`.
    Cancel,
}

impl PointerPhase {
    pub fn is_terminal(self) -> bool {
        matches!(self, PointerPhase::End | PointerPhase::Cancel)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PointerSource {
    Mouse,
    Touch,
}

/// One pointer event from the host surface.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PointerEvent {
    pub phase: PointerPhase,
    pub source: PointerSource,
    /// Hit-test id of the element under the pointer at dispatch time.
    #[serde(default)]
    pub target: Option<String>,
    /// Mouse client position.
    #[serde(default)]
    pub client: Option<Point>,
    /// Touch points still on the surface.
    #[serde(default)]
    pub touches: Vec<Point>,
    /// Touch points that changed in this event.
    #[serde(default)]
    pub changed_touches: Vec<Point>,
    /// Event timestamp in milliseconds.
    pub time_ms: u64,
}

impl PointerEvent {
    pub fn mouse(phase: PointerPhase, x: f64, y: f64, time_ms: u64) -> Self {
        Self {
            phase,
            source: PointerSource::Mouse,
            target: None,
            client: Some(Point::new(x, y)),
            touches: Vec::new(),
            changed_touches: Vec::new(),
            time_ms,
        }
    }

    pub fn touch(phase: PointerPhase, touches: Vec<Point>, time_ms: u64) -> Self {
        Self {
            phase,
            source: PointerSource::Touch,
            target: None,
            client: None,
            touches,
            changed_touches: Vec::new(),
            time_ms,
        }
    }

    pub fn with_changed_touches(mut self, changed: Vec<Point>) -> Self {
        self.changed_touches = changed;
        self
    }

    pub fn with_target(mut self, target: impl Into<String>) -> Self {
        self.target = Some(target.into());
        self
    }

    /// Coordinate of the primary pointer, if the payload carries one.
    ///
    /// Touch: first active touch, else first changed touch, else `None`.
    /// Mouse: the client position.
    pub fn primary_point(&self) -> Option<Point> {
        match self.source {
            PointerSource::Touch => self
                .touches
                .first()
                .or_else(|| self.changed_touches.first())
                .copied(),
            PointerSource::Mouse => self.client,
        }
    }
}
