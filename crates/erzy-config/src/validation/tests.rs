//! Validation tests.

use super::*;
use crate::schema::ErzyConfig;

#[test]
fn default_config_is_valid() {
    assert!(validate(&ErzyConfig::default()).is_ok());
}

#[test]
fn threshold_out_of_range() {
    let mut config = ErzyConfig::default();
    config.gesture.drag_threshold = 0.0;
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("gesture.drag_threshold"));
}

#[test]
fn nan_threshold_is_rejected() {
    let mut config = ErzyConfig::default();
    config.gesture.drag_threshold = f64::NAN;
    assert!(validate(&config).is_err());
}

#[test]
fn tap_cutoff_checked_only_when_set() {
    let mut config = ErzyConfig::default();
    config.gesture.tap_max_ms = Some(300);
    assert!(validate(&config).is_ok());

    config.gesture.tap_max_ms = Some(10);
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("gesture.tap_max_ms"));
}

#[test]
fn errors_are_collected() {
    let mut config = ErzyConfig::default();
    config.launcher.size = 4.0;
    config.chat.temperature = 5.0;
    config.chat.history_limit = 0;
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("launcher.size"));
    assert!(err.contains("chat.temperature"));
    assert!(err.contains("chat.history_limit"));
}

#[test]
fn model_id_pattern() {
    use super::chat::is_valid_model_id;
    assert!(is_valid_model_id("gemini-2.0-flash"));
    assert!(is_valid_model_id("gemini-1.5-pro-latest"));
    assert!(!is_valid_model_id(""));
    assert!(!is_valid_model_id("../secrets"));
    assert!(!is_valid_model_id("model with spaces"));
}

#[test]
fn invalid_model_is_reported() {
    let mut config = ErzyConfig::default();
    config.chat.model = "gemini/flash".into();
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("chat.model"));
}
