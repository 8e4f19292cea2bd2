//! Chat transcript and request cycle.
//!
//! A submission appends the user's message, and the reply (or a notice
//! describing the failure) is appended when the request resolves. Requests
//! are two-phase: [`ChatController::submit`] produces a [`ChatRequest`] and
//! [`ChatController::resolve`] folds its result back in, so several requests
//! may be in flight and replies land in completion order.
//!
//! Notices carry [`NOTICE_PREFIX`]. They are shown but never persisted and
//! never sent back to the model.

mod context;
mod controller;
mod transcript;
mod types;


pub use context::{compose_question, page_excerpt};
pub use controller::ChatController;
pub use transcript::Transcript;
pub use types::{ChatError, ChatMessage, ChatRequest, NOTICE_PREFIX};
