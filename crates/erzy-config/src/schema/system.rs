//! System configuration types: tools, storage, and logging.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Tool panel capabilities.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ToolsConfig {
    /// Allow the expression evaluator tool.
    pub eval_enabled: bool,
}

impl Default for ToolsConfig {
    fn default() -> Self {
        Self { eval_enabled: true }
    }
}

/// Key-value store location.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct StorageConfig {
    /// Override for the JSON store file. Defaults to the platform data dir.
    pub path: Option<PathBuf>,
}

/// Log level.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
#[derive(Default)]
pub enum LogLevel {
    Debug,
    #[default]
    Info,
    Warn,
    Error,
}

impl LogLevel {
    /// `tracing_subscriber` filter directive for the erzy crates.
    pub fn as_directive(&self) -> &'static str {
        match self {
            LogLevel::Debug => "erzy=debug",
            LogLevel::Info => "erzy=info",
            LogLevel::Warn => "erzy=warn",
            LogLevel::Error => "erzy=error",
        }
    }
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: LogLevel,
}
