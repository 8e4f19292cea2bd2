//! Chat window operations.

use erzy_ai::{
    AiClient, AiError, AiResponse, ChatError, ChatMessage, ChatRequest, GeminiClient, GeminiConfig,
};
use erzy_common::OverlayEvent;

use super::core::OverlayShell;

impl OverlayShell {
    pub fn set_chat_input(&mut self, text: impl Into<String>) {
        self.chat.set_input(text);
    }

    /// Submit the chat input. The caller sends the returned request and
    /// hands the result to [`resolve_chat`](Self::resolve_chat).
    pub fn submit_chat(&mut self, page_text: &str) -> Result<ChatRequest, ChatError> {
        self.chat.submit(self.store.as_ref(), page_text)
    }

    pub fn resolve_chat(
        &mut self,
        request_id: &str,
        result: Result<AiResponse, AiError>,
    ) -> Result<ChatMessage, ChatError> {
        let entry = self.chat.resolve(request_id, result, self.store.as_ref())?;
        self.publish_chat_entry(&entry);
        Ok(entry)
    }

    /// Submit, send and resolve in one step.
    pub async fn send_chat(
        &mut self,
        client: &dyn AiClient,
        page_text: &str,
    ) -> Result<ChatMessage, ChatError> {
        let entry = self
            .chat
            .send(client, self.store.as_ref(), page_text)
            .await?;
        self.publish_chat_entry(&entry);
        Ok(entry)
    }

    pub fn clear_chat(&mut self) {
        self.chat.clear(self.store.as_ref());
    }

    /// Build a Gemini client from the stored settings.
    ///
    /// `api_key_override` wins over the stored credential. A missing
    /// credential still yields a client; its requests fail with
    /// [`AiError::MissingCredential`] without touching the network.
    pub fn gemini_client(&self, api_key_override: Option<&str>) -> Result<GeminiClient, AiError> {
        let api_key = api_key_override
            .map(str::to_string)
            .or_else(|| self.settings.api_key())
            .unwrap_or_default();
        let config = GeminiConfig::new(api_key)
            .with_model(self.settings.model())
            .with_max_tokens(self.config.chat.max_tokens)
            .with_temperature(self.config.chat.temperature);
        GeminiClient::new(config)
    }

    fn publish_chat_entry(&self, entry: &ChatMessage) {
        let event = if entry.is_notice() {
            OverlayEvent::ChatNotice {
                text: entry.text.clone(),
            }
        } else {
            OverlayEvent::ChatReply {
                text: entry.text.clone(),
            }
        };
        self.event_bus.publish(event);
    }
}
