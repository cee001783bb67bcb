use serde::{Deserialize, Serialize};

use super::message::{Message, Role};

/// Seed content of every new conversation.
pub const SYSTEM_PROMPT: &str = "You are a helpful assistant.";

#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct Conversation {
    pub title: String,
    pub messages: Vec<Message>,
}

impl Conversation {
    /// Builds the `n`-th conversation of a store (1-based) with the system seed.
    pub fn new_numbered(n: usize) -> Self {
        Self {
            title: format!("Conversation {n}"),
            messages: vec![Message::system(SYSTEM_PROMPT)],
        }
    }

    pub fn push_message(&mut self, message: Message) {
        self.messages.push(message);
    }

    /// Messages the user sees; the system seed is left out.
    pub fn visible_messages(&self) -> impl Iterator<Item = &Message> {
        self.messages.iter().filter(|msg| msg.role != Role::System)
    }

    pub fn last(&self) -> Option<&Message> {
        self.messages.last()
    }
}
