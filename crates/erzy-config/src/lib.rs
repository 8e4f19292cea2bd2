//! Erzy overlay configuration.
//!
//! TOML-based configuration with full validation. Every section uses serde
//! defaults so partial configs work out of the box.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use erzy_config::{load_config, config_to_json};
//!
//! let config = load_config().expect("failed to load config");
//! let json = config_to_json(&config);
//! println!("{json}");
//! ```

pub mod schema;
pub mod toml_loader;
pub mod validation;

pub use schema::{ErzyConfig, CONFIG_SCHEMA_VERSION};

use erzy_common::ConfigError;

/// Load config from the platform default path and validate it.
///
/// Creates a commented default file if none exists.
pub fn load_config() -> Result<ErzyConfig, ConfigError> {
    let config = toml_loader::load_default()?;
    validation::validate(&config)?;
    Ok(config)
}

/// Serialize a config to a pretty-printed JSON string.
pub fn config_to_json(config: &ErzyConfig) -> String {
    serde_json::to_string_pretty(config)
        .unwrap_or_else(|e| format!("{{\"error\": \"failed to serialize config: {e}\"}}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_to_json_contains_all_sections() {
        let json = config_to_json(&ErzyConfig::default());
        assert!(json.contains("\"gesture\""));
        assert!(json.contains("\"launcher\""));
        assert!(json.contains("\"chat\""));
        assert!(json.contains("\"tools\""));
        assert!(json.contains("\"storage\""));
        assert!(json.contains("\"logging\""));
    }

    #[test]
    fn config_schema_version_is_1() {
        assert_eq!(CONFIG_SCHEMA_VERSION, 1);
    }

    #[test]
    fn default_config_round_trips_through_json() {
        let json = config_to_json(&ErzyConfig::default());
        let parsed: ErzyConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.chat.model, "gemini-2.0-flash");
        assert!((parsed.gesture.drag_threshold - 5.0).abs() < f64::EPSILON);
        assert_eq!(parsed.gesture.tap_max_ms, None);
    }
}
