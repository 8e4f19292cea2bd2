//! Persistent key-value storage.
//!
//! The overlay treats storage as an opaque string-to-string map, the same
//! contract a browser's `localStorage` offers. Structured values are JSON
//! encoded by the caller via [`read_json`] / [`write_json`].

mod file;
pub mod keys;
mod memory;


pub use file::JsonFileStore;
pub use memory::MemoryStore;

use erzy_common::PlatformError;
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::debug;

/// Opaque string key-value store.
pub trait KeyValueStore: Send + Sync {
    fn get(&self, key: &str) -> Option<String>;

    fn set(&self, key: &str, value: &str) -> Result<(), PlatformError>;

    fn remove(&self, key: &str) -> Result<(), PlatformError>;
}

/// Read and decode a JSON value.
///
/// Missing keys and undecodable values both yield `None`; the latter is
/// logged at debug level and otherwise ignored.
pub fn read_json<T: DeserializeOwned>(store: &dyn KeyValueStore, key: &str) -> Option<T> {
    let raw = store.get(key)?;
    match serde_json::from_str(&raw) {
        Ok(value) => Some(value),
        Err(e) => {
            debug!(key, error = %e, "ignoring malformed stored value");
            None
        }
    }
}

/// Encode a value as JSON and store it.
pub fn write_json<T: Serialize + ?Sized>(
    store: &dyn KeyValueStore,
    key: &str,
    value: &T,
) -> Result<(), PlatformError> {
    let raw = serde_json::to_string(value)
        .map_err(|e| PlatformError::StorageError(format!("failed to encode {key}: {e}")))?;
    store.set(key, &raw)
}
