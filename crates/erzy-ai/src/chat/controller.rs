//! Chat input and request lifecycle.

use std::collections::HashSet;

use erzy_common::new_correlation_id;
use erzy_platform::storage::KeyValueStore;
use tracing::{debug, info, warn};

use crate::{AiClient, AiError, AiResponse, Message};

use super::context::{compose_question, page_excerpt};
use super::transcript::Transcript;
use super::types::{ChatError, ChatMessage, ChatRequest};

pub struct ChatController {
    transcript: Transcript,
    input: String,
    pending: HashSet<String>,
    context_chars: usize,
    system_prompt: Option<String>,
}

impl ChatController {
    pub fn new(transcript: Transcript, context_chars: usize) -> Self {
        Self {
            transcript,
            input: String::new(),
            pending: HashSet::new(),
            context_chars,
            system_prompt: None,
        }
    }

    /// Build a controller around the stored history.
    pub fn restore(store: &dyn KeyValueStore, history_limit: usize, context_chars: usize) -> Self {
        Self::new(Transcript::load(store, history_limit), context_chars)
    }

    pub fn with_system_prompt(mut self, prompt: impl Into<String>) -> Self {
        self.system_prompt = Some(prompt.into());
        self
    }

    pub fn transcript(&self) -> &Transcript {
        &self.transcript
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn set_input(&mut self, text: impl Into<String>) {
        self.input = text.into();
    }

    /// Number of requests submitted but not yet resolved.
    pub fn outstanding(&self) -> usize {
        self.pending.len()
    }

    /// The input field is disabled while any request is outstanding.
    pub fn is_input_enabled(&self) -> bool {
        self.pending.is_empty()
    }

    /// Submit the current input.
    ///
    /// Empty (after trimming) input is rejected and nothing changes.
    /// Otherwise the message is appended and persisted, the input cleared,
    /// and the request to send is returned.
    pub fn submit(
        &mut self,
        store: &dyn KeyValueStore,
        page_text: &str,
    ) -> Result<ChatRequest, ChatError> {
        let question = self.input.trim();
        if question.is_empty() {
            return Err(ChatError::EmptyInput);
        }
        let question = question.to_string();

        let mut turns = Vec::new();
        if let Some(ref system) = self.system_prompt {
            turns.push(Message::system(system.clone()));
        }
        turns.extend(self.transcript.turns());
        let excerpt = page_excerpt(page_text, self.context_chars);
        turns.push(Message::user(compose_question(&question, &excerpt)));

        self.transcript.append(ChatMessage::user(question), store);
        self.input.clear();

        let id = new_correlation_id();
        self.pending.insert(id.clone());
        debug!(request = %id, turns = turns.len(), "chat request prepared");

        Ok(ChatRequest { id, turns })
    }

    /// Fold a request's result into the transcript and return the entry
    /// that was appended: the reply, or a notice on failure.
    pub fn resolve(
        &mut self,
        request_id: &str,
        result: Result<AiResponse, AiError>,
        store: &dyn KeyValueStore,
    ) -> Result<ChatMessage, ChatError> {
        if !self.pending.remove(request_id) {
            return Err(ChatError::UnknownRequest(request_id.to_string()));
        }

        let entry = match result {
            Ok(response) if response.content.trim().is_empty() => {
                warn!(request = %request_id, "empty chat reply");
                ChatMessage::notice("No response from the model")
            }
            Ok(response) => {
                info!(
                    request = %request_id,
                    tokens = response.usage.total_tokens(),
                    "chat reply received"
                );
                ChatMessage::model(response.content)
            }
            Err(e) => {
                warn!(request = %request_id, error = %e, "chat request failed");
                ChatMessage::notice(e)
            }
        };

        self.transcript.append(entry.clone(), store);
        Ok(entry)
    }

    /// Submit, send, and resolve in one step.
    pub async fn send(
        &mut self,
        client: &dyn AiClient,
        store: &dyn KeyValueStore,
        page_text: &str,
    ) -> Result<ChatMessage, ChatError> {
        let request = self.submit(store, page_text)?;
        debug!(request = %request.id, model = %client.model(), "sending chat request");
        let result = client.send_message(&request.turns).await;
        self.resolve(&request.id, result, store)
    }

    /// Clear the transcript, in memory and in storage.
    pub fn clear(&mut self, store: &dyn KeyValueStore) {
        self.transcript.clear(store);
    }
}
