//! Persisted chat transcript.

use erzy_platform::storage::{keys, read_json, write_json, KeyValueStore};
use tracing::{debug, warn};

use crate::Message;

use super::types::ChatMessage;

/// Ordered chat history, mirrored to storage on every non-notice append.
#[derive(Debug, Clone)]
pub struct Transcript {
    messages: Vec<ChatMessage>,
    history_limit: usize,
}

impl Transcript {
    pub fn new(history_limit: usize) -> Self {
        Self {
            messages: Vec::new(),
            history_limit,
        }
    }

    /// Load the stored history. Absent or malformed data yields an empty
    /// transcript.
    pub fn load(store: &dyn KeyValueStore, history_limit: usize) -> Self {
        let mut messages: Vec<ChatMessage> =
            read_json(store, keys::CHAT_HISTORY).unwrap_or_default();
        messages.retain(|m| !m.is_notice());
        if messages.len() > history_limit {
            messages.drain(..messages.len() - history_limit);
        }
        debug!(count = messages.len(), "chat history loaded");
        Self {
            messages,
            history_limit,
        }
    }

    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    pub fn last(&self) -> Option<&ChatMessage> {
        self.messages.last()
    }

    /// Append and, unless it is a notice, persist.
    pub fn append(&mut self, message: ChatMessage, store: &dyn KeyValueStore) {
        let persist = !message.is_notice();
        self.messages.push(message);
        if persist {
            self.persist(store);
        }
    }

    /// Drop every message, in memory and in storage.
    pub fn clear(&mut self, store: &dyn KeyValueStore) {
        self.messages.clear();
        if let Err(e) = store.remove(keys::CHAT_HISTORY) {
            warn!(error = %e, "failed to clear chat history");
        }
    }

    /// Turns for the next request, notices excluded.
    pub fn turns(&self) -> Vec<Message> {
        self.messages
            .iter()
            .filter(|m| !m.is_notice())
            .map(ChatMessage::to_turn)
            .collect()
    }

    fn persist(&self, store: &dyn KeyValueStore) {
        let kept: Vec<&ChatMessage> = self.messages.iter().filter(|m| !m.is_notice()).collect();
        let start = kept.len().saturating_sub(self.history_limit);
        if let Err(e) = write_json(store, keys::CHAT_HISTORY, &kept[start..]) {
            warn!(error = %e, "failed to persist chat history");
        }
    }
}
