//! User settings persisted in the key-value store.

use std::sync::Arc;

use erzy_common::{ConfigError, ErzyError, PlatformError};
use erzy_config::validation::is_valid_model_id;
use erzy_platform::storage::{keys, KeyValueStore};
use tracing::{debug, info};

/// Credential, model choice and dark-mode flag.
///
/// Reads always go to the store so that changes made by another view of
/// the same store are picked up.
#[derive(Clone)]
pub struct OverlaySettings {
    store: Arc<dyn KeyValueStore>,
    default_model: String,
}

impl std::fmt::Debug for OverlaySettings {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OverlaySettings")
            .field("default_model", &self.default_model)
            .field("has_api_key", &self.api_key().is_some())
            .finish()
    }
}

impl OverlaySettings {
    pub fn new(store: Arc<dyn KeyValueStore>, default_model: impl Into<String>) -> Self {
        Self {
            store,
            default_model: default_model.into(),
        }
    }

    /// Stored credential, if it is non-blank.
    pub fn api_key(&self) -> Option<String> {
        self.store
            .get(keys::API_KEY)
            .map(|k| k.trim().to_string())
            .filter(|k| !k.is_empty())
    }

    /// Store the credential. A blank key removes it.
    pub fn set_api_key(&self, key: &str) -> Result<(), PlatformError> {
        let key = key.trim();
        if key.is_empty() {
            info!("API key cleared");
            return self.store.remove(keys::API_KEY);
        }
        info!("API key saved");
        self.store.set(keys::API_KEY, key)
    }

    /// Selected model. Falls back to the configured default when nothing
    /// valid is stored.
    pub fn model(&self) -> String {
        match self.store.get(keys::MODEL) {
            Some(model) if is_valid_model_id(&model) => model,
            Some(model) => {
                debug!(model = %model, "ignoring invalid stored model");
                self.default_model.clone()
            }
            None => self.default_model.clone(),
        }
    }

    pub fn set_model(&self, model: &str) -> Result<(), ErzyError> {
        if !is_valid_model_id(model) {
            return Err(ConfigError::ValidationError(format!("invalid model id '{model}'")).into());
        }
        self.store.set(keys::MODEL, model)?;
        Ok(())
    }

    pub fn dark_mode(&self) -> bool {
        self.store.get(keys::DARK_MODE).as_deref() == Some("true")
    }

    pub fn set_dark_mode(&self, enabled: bool) -> Result<(), PlatformError> {
        self.store
            .set(keys::DARK_MODE, if enabled { "true" } else { "false" })
    }
}
