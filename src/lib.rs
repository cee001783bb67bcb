//! Core of a terminal chat client for OpenAI-compatible completion services.
//!
//! Conversations live in a [`conversation::ConversationStore`], are written to
//! a single JSON file through [`persistence::ConversationFile`] and advance one
//! turn at a time under a [`controller::ConversationController`], which talks
//! to any [`chat::CompletionProvider`] and draws through a
//! [`controller::View`].

#[cfg(feature = "openai")]
pub mod backends;
pub mod chat;
pub mod controller;
pub mod conversation;
pub mod error;
pub mod persistence;

pub use chat::{ChatMessage, ChatRole, CompletionProvider};
pub use controller::{ConversationController, Intent, Selection, TurnRequest, View};
pub use conversation::{Conversation, ConversationStore, Message, Role};
pub use error::{ClientError, LLMError};
pub use persistence::ConversationFile;
