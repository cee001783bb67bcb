mod error;
mod json_file;

pub use error::PersistenceError;
pub use json_file::{ConversationFile, DEFAULT_FILE_NAME};
