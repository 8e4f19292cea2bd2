//! Chat message and request types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::Message;

/// Marks a transcript entry as a transient notice rather than a reply.
pub const NOTICE_PREFIX: &str = "\u{26a0}\u{fe0f} ";

/// One transcript entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub text: String,
    #[serde(rename = "isUser")]
    pub is_user: bool,
    pub timestamp: DateTime<Utc>,
}

impl ChatMessage {
    pub fn user(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            is_user: true,
            timestamp: Utc::now(),
        }
    }

    pub fn model(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            is_user: false,
            timestamp: Utc::now(),
        }
    }

    pub fn notice(reason: impl std::fmt::Display) -> Self {
        Self::model(format!("{NOTICE_PREFIX}{reason}"))
    }

    pub fn is_notice(&self) -> bool {
        !self.is_user && self.text.starts_with(NOTICE_PREFIX)
    }

    pub(crate) fn to_turn(&self) -> Message {
        if self.is_user {
            Message::user(self.text.clone())
        } else {
            Message::assistant(self.text.clone())
        }
    }
}

/// An outbound request produced by a submission.
#[derive(Debug, Clone)]
pub struct ChatRequest {
    /// Correlates the request with its resolution and log lines.
    pub id: String,
    /// Turns to send, ending with the new user turn.
    pub turns: Vec<Message>,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ChatError {
    #[error("message is empty")]
    EmptyInput,
    #[error("no outstanding request with id {0}")]
    UnknownRequest(String),
}
