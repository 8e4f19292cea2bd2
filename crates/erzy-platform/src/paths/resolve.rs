use std::path::PathBuf;

use erzy_common::PlatformError;

pub(super) const APP_NAME: &str = "erzy";

/// Returns the platform-specific configuration directory.
///
/// - macOS: `~/Library/Application Support/erzy`
/// - Linux: `$XDG_CONFIG_HOME/erzy` (defaults to `~/.config/erzy`)
/// - Windows: `%APPDATA%\erzy`
pub fn config_dir() -> Result<PathBuf, PlatformError> {
    Ok(dirs::config_dir()
        .ok_or_else(|| PlatformError::PathError("could not determine config directory".into()))?
        .join(APP_NAME))
}

/// Returns the platform-specific data directory.
///
/// - macOS: `~/Library/Application Support/erzy`
/// - Linux: `$XDG_DATA_HOME/erzy` (defaults to `~/.local/share/erzy`)
/// - Windows: `%APPDATA%\erzy`
pub fn data_dir() -> Result<PathBuf, PlatformError> {
    Ok(dirs::data_dir()
        .ok_or_else(|| PlatformError::PathError("could not determine data directory".into()))?
        .join(APP_NAME))
}

/// Returns the path to the main configuration file.
pub fn config_file() -> Result<PathBuf, PlatformError> {
    Ok(config_dir()?.join("config.toml"))
}

/// Returns the path to the key-value store file.
///
/// Located at `data_dir()/storage.json`.
pub fn storage_file() -> Result<PathBuf, PlatformError> {
    Ok(data_dir()?.join("storage.json"))
}
