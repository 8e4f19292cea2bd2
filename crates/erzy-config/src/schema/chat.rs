//! Chat window configuration types.

use serde::{Deserialize, Serialize};

/// Chat window and model settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ChatConfig {
    pub width: f64,
    pub height: f64,
    /// Model used when none is stored by the user.
    pub model: String,
    pub max_tokens: u32,
    pub temperature: f64,
    /// Characters of host page text sent along with each question.
    pub context_chars: usize,
    /// Most recent messages kept in the persisted transcript.
    pub history_limit: usize,
}

impl Default for ChatConfig {
    fn default() -> Self {
        Self {
            width: 350.0,
            height: 500.0,
            model: "gemini-2.0-flash".into(),
            max_tokens: 2048,
            temperature: 0.7,
            context_chars: 2000,
            history_limit: 100,
        }
    }
}
