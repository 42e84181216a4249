//! AI interpretation of song lyrics.
//!
//! Builds an engineered prompt from (lyrics, title, artist), sends it to a
//! completion provider, and recovers a structured interpretation object
//! from the model's raw text output.

pub mod llm;
mod parser;
mod prompt;

pub use parser::{parse_interpretation, ParseFailure};

use llm::{CompletionOptions, LlmError, LlmProvider, Message};
use serde_json::Value;
use std::sync::Arc;
use thiserror::Error;
use tracing::debug;

/// Errors that can occur while producing an interpretation.
#[derive(Debug, Error)]
pub enum InterpretError {
    #[error(transparent)]
    Llm(#[from] LlmError),

    #[error("Model did not return any response")]
    EmptyResponse,

    #[error("Interpretation was not returned in valid JSON format")]
    Malformed { raw: String },
}

/// Produces structured lyric interpretations through an LLM provider.
pub struct Interpreter {
    provider: Arc<dyn LlmProvider>,
    options: CompletionOptions,
}

impl Interpreter {
    pub fn new(provider: Arc<dyn LlmProvider>, options: CompletionOptions) -> Self {
        Self { provider, options }
    }

    /// Interpret a song. One completion call, no retries; the parsed value
    /// is a JSON object whose fields are not individually validated.
    pub async fn interpret(
        &self,
        lyrics: &str,
        title: &str,
        artist: &str,
    ) -> Result<Value, InterpretError> {
        let messages = [
            Message::system(prompt::system_prompt()),
            Message::user(prompt::user_prompt(title, artist, lyrics)),
        ];

        debug!(
            model = %self.provider.model(),
            title = %title,
            artist = %artist,
            "Requesting interpretation"
        );

        let response = self.provider.complete(&messages, &self.options).await?;

        let text = response.message.content.trim().to_string();
        if text.is_empty() {
            return Err(InterpretError::EmptyResponse);
        }

        parse_interpretation(&text).map_err(|failure| InterpretError::Malformed { raw: failure.raw })
    }
}
