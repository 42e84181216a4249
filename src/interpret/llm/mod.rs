//! LLM provider abstraction layer.
//!
//! Trait-based abstraction over chat-completion backends so the
//! interpreter can work with any OpenAI-compatible service.

mod openai;
mod provider;
mod types;

pub use openai::OpenAIProvider;
pub use provider::{CompletionOptions, LlmError, LlmProvider};
pub use types::{CompletionResponse, FinishReason, Message, MessageRole, TokenUsage};
