//! Gemini API client struct, request building, and response parsing.

use std::time::Duration;

use crate::{AiError, AiResponse, Message, Role, TokenUsage};

use super::config::GeminiConfig;

/// Gemini API client.
pub struct GeminiClient {
    pub(crate) config: GeminiConfig,
    pub(crate) http: reqwest::Client,
}

impl GeminiClient {
    pub fn new(config: GeminiConfig) -> Result<Self, AiError> {
        let http = reqwest::Client::builder()
            .connect_timeout(Duration::from_secs(10))
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| AiError::NetworkError(e.to_string()))?;
        Ok(Self { config, http })
    }

    pub fn config(&self) -> &GeminiConfig {
        &self.config
    }

    pub(crate) fn api_url(&self) -> String {
        format!(
            "{}/{}:generateContent",
            self.config.base_url.trim_end_matches('/'),
            self.config.model
        )
    }

    /// Build the JSON request body for the Gemini API.
    pub(crate) fn build_request_body(&self, messages: &[Message]) -> serde_json::Value {
        let mut contents = Vec::new();

        for msg in messages {
            let role = match msg.role {
                Role::User => "user",
                Role::Assistant => "model",
                Role::System => continue, // handled via systemInstruction
            };
            contents.push(serde_json::json!({
                "role": role,
                "parts": [{ "text": msg.content }]
            }));
        }

        let mut body = serde_json::json!({
            "contents": contents,
            "generationConfig": {
                "maxOutputTokens": self.config.max_tokens,
                "temperature": self.config.temperature,
            }
        });

        if let Some(system) = messages.iter().find(|m| m.role == Role::System) {
            body["systemInstruction"] = serde_json::json!({
                "parts": [{ "text": system.content }]
            });
        }

        body
    }

    /// Parse a Gemini response.
    pub(crate) fn parse_response(&self, json: serde_json::Value) -> Result<AiResponse, AiError> {
        let candidates = json["candidates"]
            .as_array()
            .ok_or_else(|| AiError::ParseError("no candidates in response".to_string()))?;

        let first = candidates
            .first()
            .ok_or_else(|| AiError::ParseError("empty candidates".to_string()))?;

        let parts = first["content"]["parts"]
            .as_array()
            .ok_or_else(|| AiError::ParseError("candidate has no content parts".to_string()))?;

        let content: String = parts.iter().filter_map(|p| p["text"].as_str()).collect();

        let usage = TokenUsage {
            input_tokens: json["usageMetadata"]["promptTokenCount"]
                .as_u64()
                .unwrap_or(0),
            output_tokens: json["usageMetadata"]["candidatesTokenCount"]
                .as_u64()
                .unwrap_or(0),
        };

        Ok(AiResponse { content, usage })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client() -> GeminiClient {
        GeminiClient::new(
            GeminiConfig::new("k")
                .with_model("gemini-2.0-flash")
                .with_max_tokens(2048),
        )
        .unwrap()
    }

    #[test]
    fn url_targets_generate_content() {
        let config = GeminiConfig::new("k").with_base_url("http://localhost:9/models/");
        let c = GeminiClient::new(config).unwrap();
        assert_eq!(
            c.api_url(),
            "http://localhost:9/models/gemini-2.0-flash:generateContent"
        );
    }

    #[test]
    fn body_maps_roles() {
        let body = client().build_request_body(&[
            Message::system("be brief"),
            Message::user("hi"),
            Message::assistant("hello"),
            Message::user("again"),
        ]);

        let contents = body["contents"].as_array().unwrap();
        assert_eq!(contents.len(), 3);
        assert_eq!(contents[0]["role"], "user");
        assert_eq!(contents[1]["role"], "model");
        assert_eq!(contents[1]["parts"][0]["text"], "hello");
        assert_eq!(contents[2]["parts"][0]["text"], "again");
        assert_eq!(body["systemInstruction"]["parts"][0]["text"], "be brief");
        assert_eq!(body["generationConfig"]["maxOutputTokens"], 2048);
    }

    #[test]
    fn body_without_system_has_no_instruction() {
        let body = client().build_request_body(&[Message::user("hi")]);
        assert!(body.get("systemInstruction").is_none());
    }

    #[test]
    fn parses_text_and_usage() {
        let json = serde_json::json!({
            "candidates": [{
                "content": { "parts": [{ "text": "Hello" }, { "text": ", world" }] }
            }],
            "usageMetadata": { "promptTokenCount": 12, "candidatesTokenCount": 3 }
        });
        let response = client().parse_response(json).unwrap();
        assert_eq!(response.content, "Hello, world");
        assert_eq!(response.usage.total_tokens(), 15);
    }

    #[test]
    fn missing_candidates_is_a_parse_error() {
        let err = client()
            .parse_response(serde_json::json!({ "error": "nope" }))
            .unwrap_err();
        assert!(matches!(err, AiError::ParseError(_)));

        let err = client()
            .parse_response(serde_json::json!({ "candidates": [] }))
            .unwrap_err();
        assert!(matches!(err, AiError::ParseError(_)));
    }

    #[test]
    fn candidate_without_parts_is_a_parse_error() {
        let err = client()
            .parse_response(serde_json::json!({ "candidates": [{ "finishReason": "SAFETY" }] }))
            .unwrap_err();
        assert!(matches!(err, AiError::ParseError(_)));
    }
}
