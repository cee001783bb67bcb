//! Coordinates the conversation store, the conversation file, the completion
//! provider and a [`View`].

mod intent;
mod state;
mod turn;
mod view;

pub use intent::Intent;
pub use state::{ConversationController, Selection};
pub use turn::TurnRequest;
pub use view::View;
