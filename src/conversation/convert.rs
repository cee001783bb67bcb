use crate::chat::ChatMessage;

use super::message::{Message, Role};

/// Full history in request order, system seed included.
pub fn to_chat_messages(messages: &[Message]) -> Vec<ChatMessage> {
    messages.iter().map(to_chat_message).collect()
}

fn to_chat_message(message: &Message) -> ChatMessage {
    let builder = match message.role {
        Role::System => ChatMessage::system(),
        Role::User => ChatMessage::user(),
        Role::Assistant => ChatMessage::assistant(),
    };
    builder.content(message.content.as_str()).build()
}
