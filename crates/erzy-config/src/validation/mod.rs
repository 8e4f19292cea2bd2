//! Full configuration validation.
//!
//! Each domain has its own submodule; this orchestrator calls them all
//! and collects errors into a single `ConfigError`.

mod chat;
mod gesture;
mod helpers;

#[cfg(test)]
mod tests;

use crate::schema::ErzyConfig;
use erzy_common::ConfigError;

pub use chat::is_valid_model_id;

/// Run all validations on a config, collecting all errors.
pub fn validate(config: &ErzyConfig) -> Result<(), ConfigError> {
    let mut errors: Vec<String> = Vec::new();

    gesture::validate_gesture(&mut errors, config);
    gesture::validate_launcher(&mut errors, config);
    chat::validate_chat(&mut errors, config);

    if errors.is_empty() {
        Ok(())
    } else {
        Err(ConfigError::ValidationError(errors.join("; ")))
    }
}
