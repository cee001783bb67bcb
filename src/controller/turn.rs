use std::fmt;
use std::sync::Arc;

use crate::chat::{ChatMessage, CompletionProvider};
use crate::error::LLMError;

/// One pending remote call, captured when a turn begins.
///
/// The request owns everything it needs so it can run on another task while
/// the controller keeps handling input.
#[derive(Clone)]
pub struct TurnRequest {
    index: usize,
    model: String,
    messages: Vec<ChatMessage>,
    provider: Arc<dyn CompletionProvider>,
}

impl TurnRequest {
    pub(crate) fn new(
        index: usize,
        model: String,
        messages: Vec<ChatMessage>,
        provider: Arc<dyn CompletionProvider>,
    ) -> Self {
        Self {
            index,
            model,
            messages,
            provider,
        }
    }

    /// Conversation the reply belongs to.
    pub fn index(&self) -> usize {
        self.index
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    pub async fn run(&self) -> Result<String, LLMError> {
        self.provider.complete(&self.model, &self.messages).await
    }
}

impl fmt::Debug for TurnRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TurnRequest")
            .field("index", &self.index)
            .field("model", &self.model)
            .field("messages", &self.messages.len())
            .finish()
    }
}
