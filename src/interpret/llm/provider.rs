//! LLM provider trait definition.

use super::types::{CompletionResponse, Message};
use async_trait::async_trait;
use std::time::Duration;
use thiserror::Error;

/// Knobs for a single completion request.
///
/// The defaults match what the interpretation prompt was tuned with: a
/// fairly creative temperature and a generous timeout, since full-song
/// analyses routinely take tens of seconds to generate.
#[derive(Debug, Clone)]
pub struct CompletionOptions {
    pub temperature: f32,
    pub max_tokens: Option<u32>,
    pub timeout: Duration,
}

impl Default for CompletionOptions {
    fn default() -> Self {
        Self {
            temperature: 0.7,
            max_tokens: None,
            timeout: Duration::from_secs(120),
        }
    }
}

/// Failures surfaced by a completion backend.
#[derive(Debug, Error)]
pub enum LlmError {
    #[error("Request timeout")]
    Timeout,

    #[error("Rate limited")]
    RateLimited,

    #[error("Connection error: {0}")]
    Connection(String),

    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("Invalid response: {0}")]
    InvalidResponse(String),
}

/// A chat-completion backend.
///
/// The interpreter only needs one capability: turn a short conversation
/// into a completed assistant message, in a single attempt.
#[async_trait]
pub trait LlmProvider: Send + Sync {
    /// Provider name, for logging (e.g., "openai").
    fn name(&self) -> &str;

    /// Model identifier requests are issued against.
    fn model(&self) -> &str;

    async fn complete(
        &self,
        messages: &[Message],
        options: &CompletionOptions,
    ) -> Result<CompletionResponse, LlmError>;
}
