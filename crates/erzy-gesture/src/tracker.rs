//! Pointer tracking and tap/drag classification.
//!
//! Tracks one gesture at a time. The `moved` flag is sticky: once the
//! displacement has exceeded the threshold on either axis, the gesture is a
//! drag even if the pointer comes back to where it started.

use erzy_common::{Offset, Point};

/// Displacement, in device-independent pixels, past which a gesture is a drag.
pub const DRAG_THRESHOLD: f64 = 5.0;

// =============================================================================
// TYPES
// =============================================================================

/// Per-gesture state. Only meaningful while `active` is true.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PointerState {
    pub active: bool,
    pub start_position: Point,
    pub start_time: u64,
    pub current_offset: Offset,
    pub moved: bool,
}

/// Result of feeding one coordinate to an active tracker.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrackerUpdate {
    pub offset: Offset,
    /// Whether the gesture has crossed the threshold at any point so far.
    pub moved: bool,
    /// True only for the update that first crossed the threshold.
    pub crossed_threshold: bool,
}

/// How a finished gesture was classified.
///
/// With the default settings exactly one of `was_tap` / `was_drag` is set.
/// When a tap cutoff is configured, a long stationary press sets neither.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GestureOutcome {
    pub was_tap: bool,
    pub was_drag: bool,
    pub elapsed_ms: u64,
}

// =============================================================================
// TRACKER
// =============================================================================

#[derive(Debug, Clone)]
pub struct PointerTracker {
    state: PointerState,
    threshold: f64,
    tap_max_ms: Option<u64>,
}

impl PointerTracker {
    pub fn new() -> Self {
        Self {
            state: PointerState::default(),
            threshold: DRAG_THRESHOLD,
            tap_max_ms: None,
        }
    }

    pub fn with_threshold(mut self, threshold: f64) -> Self {
        self.threshold = threshold;
        self
    }

    /// Require taps to finish within `ms`. Off by default.
    pub fn with_tap_max_ms(mut self, ms: Option<u64>) -> Self {
        self.tap_max_ms = ms;
        self
    }

    pub fn state(&self) -> &PointerState {
        &self.state
    }

    pub fn is_active(&self) -> bool {
        self.state.active
    }

    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    /// Start a new gesture, discarding any gesture still in flight.
    pub fn begin(&mut self, x: f64, y: f64, time: u64) {
        self.state = PointerState {
            active: true,
            start_position: Point::new(x, y),
            start_time: time,
            current_offset: Offset::default(),
            moved: false,
        };
    }

    /// Feed the latest pointer coordinate.
    ///
    /// Returns `None` without touching any state when no gesture is active;
    /// move events for unrelated pointers arrive here routinely.
    pub fn update(&mut self, x: f64, y: f64) -> Option<TrackerUpdate> {
        if !self.state.active {
            return None;
        }

        let offset = self.state.start_position.offset_to(Point::new(x, y));
        self.state.current_offset = offset;

        let crossed_threshold = !self.state.moved && offset.exceeds(self.threshold);
        if crossed_threshold {
            self.state.moved = true;
        }

        Some(TrackerUpdate {
            offset,
            moved: self.state.moved,
            crossed_threshold,
        })
    }

    /// Finish the gesture and classify it.
    ///
    /// Returns `None` when no gesture is active.
    pub fn end(&mut self, time: u64) -> Option<GestureOutcome> {
        if !self.state.active {
            return None;
        }
        self.state.active = false;

        let elapsed_ms = time.saturating_sub(self.state.start_time);
        let moved = self.state.moved;
        let within_cutoff = self.tap_max_ms.map_or(true, |max| elapsed_ms < max);

        Some(GestureOutcome {
            was_tap: !moved && within_cutoff,
            was_drag: moved,
            elapsed_ms,
        })
    }

    /// `touchcancel`: identical to `end`, `moved` keeps its last value.
    pub fn cancel(&mut self, time: u64) -> Option<GestureOutcome> {
        self.end(time)
    }
}

impl Default for PointerTracker {
    fn default() -> Self {
        Self::new()
    }
}

// =============================================================================
// TESTS
// =============================================================================
