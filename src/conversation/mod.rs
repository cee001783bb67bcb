mod convert;
mod error;
mod message;
mod state;
mod store;

pub use convert::to_chat_messages;
pub use error::StoreError;
pub use message::{Message, Role};
pub use state::{Conversation, SYSTEM_PROMPT};
pub use store::ConversationStore;
