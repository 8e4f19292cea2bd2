//! Gesture and launcher configuration types.

use serde::{Deserialize, Serialize};

/// Tap/drag classification settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GestureConfig {
    /// Displacement in pixels past which a gesture is a drag (valid range: 1-50).
    pub drag_threshold: f64,
    /// Optional upper bound on tap duration. Unset means taps are
    /// classified by displacement alone.
    pub tap_max_ms: Option<u64>,
}

impl Default for GestureConfig {
    fn default() -> Self {
        Self {
            drag_threshold: 5.0,
            tap_max_ms: None,
        }
    }
}

/// Floating launcher icon geometry.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LauncherConfig {
    /// Icon edge length in pixels (valid range: 24-128).
    pub size: f64,
    /// Default distance from the right viewport edge.
    pub margin_right: f64,
    /// Default distance from the bottom viewport edge.
    pub margin_bottom: f64,
}

impl Default for LauncherConfig {
    fn default() -> Self {
        Self {
            size: 56.0,
            margin_right: 30.0,
            margin_bottom: 30.0,
        }
    }
}
