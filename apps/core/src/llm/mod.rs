//! Model-backed path.
//!
//! The assistant service only talks to a [`ModelBackend`]; the HTTP client
//! is one implementation, test mocks are others.

pub mod client;
pub mod prompts;

use async_trait::async_trait;

use crate::error::AppError;
use crate::models::ChatMessage;

pub use client::OpenAiCompatibleClient;

/// Defines the public interface for a JSON-answering language model.
///
/// Implementations return the raw text of the model reply; parsing and
/// contract checks happen in the caller.
#[async_trait]
pub trait ModelBackend: Send + Sync + 'static {
    /// Short name used in logs (e.g. the model id).
    fn name(&self) -> &str;

    /// Sends a system prompt plus conversation and returns the reply content.
    async fn complete_json(
        &self,
        system_prompt: String,
        messages: Vec<ChatMessage>,
    ) -> Result<String, AppError>;
}
