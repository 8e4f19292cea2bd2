//! Chat window and model validation.

use std::sync::OnceLock;

use regex::Regex;

use crate::schema::ErzyConfig;

use super::helpers::{validate_range, validate_range_f64};

fn model_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"^[A-Za-z0-9][A-Za-z0-9._-]*$").expect("model pattern is a valid regex")
    })
}

/// True if `model` is usable as a path segment of the generate endpoint.
pub fn is_valid_model_id(model: &str) -> bool {
    model_pattern().is_match(model)
}

pub(crate) fn validate_chat(errors: &mut Vec<String>, config: &ErzyConfig) {
    let chat = &config.chat;
    validate_range_f64(errors, "chat.width", chat.width, 200.0, 1200.0);
    validate_range_f64(errors, "chat.height", chat.height, 200.0, 1200.0);
    validate_range(errors, "chat.max_tokens", chat.max_tokens.into(), 1, 8192);
    validate_range_f64(errors, "chat.temperature", chat.temperature, 0.0, 2.0);
    validate_range(
        errors,
        "chat.context_chars",
        chat.context_chars as u64,
        0,
        20_000,
    );
    validate_range(
        errors,
        "chat.history_limit",
        chat.history_limit as u64,
        1,
        1000,
    );

    if !is_valid_model_id(&chat.model) {
        errors.push(format!("chat.model = {:?} is not a valid model id", chat.model));
    }
}
