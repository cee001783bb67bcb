use async_trait::async_trait;

use crate::error::LLMError;

use super::message::ChatMessage;

/// A remote service that produces the next assistant message for a history.
///
/// Implementations receive the complete, ordered history (system message
/// first) and return only the text of the reply.
#[async_trait]
pub trait CompletionProvider: Send + Sync {
    async fn complete(&self, model: &str, messages: &[ChatMessage]) -> Result<String, LLMError>;
}
