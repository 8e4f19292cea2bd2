//! Tests for TOML config loading and default file creation.

use super::*;
use super::template::default_config_toml;
use crate::schema::ErzyConfig;
use std::path::Path;

#[test]
fn load_from_nonexistent_returns_file_not_found() {
    let result = load_from_path(Path::new("/tmp/nonexistent_erzy_config.toml"));
    assert!(matches!(
        result,
        Err(erzy_common::ConfigError::FileNotFound(_))
    ));
}

#[test]
fn load_valid_partial_toml() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(
        &path,
        r#"
[launcher]
size = 64.0

[chat]
model = "gemini-1.5-flash"
"#,
    )
    .unwrap();

    let config = load_from_path(&path).unwrap();
    assert!((config.launcher.size - 64.0).abs() < f64::EPSILON);
    assert_eq!(config.chat.model, "gemini-1.5-flash");
    // Defaults preserved
    assert!((config.launcher.margin_right - 30.0).abs() < f64::EPSILON);
    assert!(config.tools.eval_enabled);
}

#[test]
fn load_invalid_toml_returns_parse_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "this is not valid toml {{{").unwrap();

    let result = load_from_path(&path);
    assert!(matches!(
        result,
        Err(erzy_common::ConfigError::ParseError(_))
    ));
}

#[test]
fn out_of_range_values_still_load() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "[gesture]\ndrag_threshold = 500.0\n").unwrap();

    let config = load_from_path(&path).unwrap();
    assert!((config.gesture.drag_threshold - 500.0).abs() < f64::EPSILON);
}

#[test]
fn default_template_parses_to_defaults() {
    let config: ErzyConfig = toml::from_str(&default_config_toml()).unwrap();
    assert!((config.gesture.drag_threshold - 5.0).abs() < f64::EPSILON);
    assert_eq!(config.chat.model, "gemini-2.0-flash");
}

#[test]
fn create_default_config_writes_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nested").join("config.toml");
    create_default_config(&path).unwrap();

    let content = std::fs::read_to_string(&path).unwrap();
    assert!(content.contains("[gesture]"));
    assert!(load_from_path(&path).is_ok());
}

#[test]
fn default_config_path_ends_with_erzy_config() {
    let path = default_config_path().unwrap();
    assert!(path.ends_with("erzy/config.toml"));
}
