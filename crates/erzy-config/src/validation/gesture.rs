//! Gesture and launcher validation.

use crate::schema::ErzyConfig;

use super::helpers::{validate_range, validate_range_f64};

pub(crate) fn validate_gesture(errors: &mut Vec<String>, config: &ErzyConfig) {
    validate_range_f64(
        errors,
        "gesture.drag_threshold",
        config.gesture.drag_threshold,
        1.0,
        50.0,
    );
    if let Some(ms) = config.gesture.tap_max_ms {
        validate_range(errors, "gesture.tap_max_ms", ms, 50, 5000);
    }
}

pub(crate) fn validate_launcher(errors: &mut Vec<String>, config: &ErzyConfig) {
    validate_range_f64(errors, "launcher.size", config.launcher.size, 24.0, 128.0);
    validate_range_f64(
        errors,
        "launcher.margin_right",
        config.launcher.margin_right,
        0.0,
        500.0,
    );
    validate_range_f64(
        errors,
        "launcher.margin_bottom",
        config.launcher.margin_bottom,
        0.0,
        500.0,
    );
}
