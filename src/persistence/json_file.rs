use std::fs::{self, File, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::conversation::Conversation;

use super::error::PersistenceError;

pub const DEFAULT_FILE_NAME: &str = "conversations.json";

/// Single JSON file holding every conversation as one array.
#[derive(Debug, Clone)]
pub struct ConversationFile {
    path: PathBuf,
}

impl ConversationFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Reads all conversations. A missing file is an empty list.
    ///
    /// On any parse or validation failure the file is left as-is so it can be
    /// repaired by hand.
    pub fn load(&self) -> Result<Vec<Conversation>, PersistenceError> {
        if !self.path.exists() {
            log::debug!("no conversation file at {}", self.path.display());
            return Ok(Vec::new());
        }
        let data = fs::read(&self.path).map_err(|err| PersistenceError::io(&self.path, err))?;
        let conversations: Vec<Conversation> = serde_json::from_slice(&data)
            .map_err(|err| PersistenceError::corrupt(&self.path, err.to_string()))?;

        if let Some(position) = conversations
            .iter()
            .position(|conversation| conversation.messages.is_empty())
        {
            return Err(PersistenceError::corrupt(
                &self.path,
                format!("conversation {position} has no messages"),
            ));
        }

        log::info!(
            "loaded {} conversations from {}",
            conversations.len(),
            self.path.display()
        );
        Ok(conversations)
    }

    /// Replaces the file with `conversations`.
    ///
    /// The payload goes to a sibling temporary file which is synced and then
    /// renamed over the target, so readers see either the old or new array.
    pub fn save(&self, conversations: &[Conversation]) -> Result<(), PersistenceError> {
        let payload = serde_json::to_vec_pretty(conversations)
            .map_err(|err| PersistenceError::io(&self.path, err.into()))?;

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|err| PersistenceError::io(parent, err))?;
        }

        let tmp_path = self.tmp_path();
        if let Err(err) = write_synced(&tmp_path, &payload) {
            let _ = fs::remove_file(&tmp_path);
            return Err(PersistenceError::io(&tmp_path, err));
        }
        if let Err(err) = fs::rename(&tmp_path, &self.path) {
            let _ = fs::remove_file(&tmp_path);
            return Err(PersistenceError::io(&self.path, err));
        }

        log::debug!(
            "saved {} conversations to {}",
            conversations.len(),
            self.path.display()
        );
        Ok(())
    }

    fn tmp_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(|name| name.to_os_string())
            .unwrap_or_else(|| DEFAULT_FILE_NAME.into());
        name.push(".tmp");
        self.path.with_file_name(name)
    }
}

fn write_synced(path: &Path, payload: &[u8]) -> std::io::Result<()> {
    let mut file: File = OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .open(path)?;
    file.write_all(payload)?;
    file.sync_all()
}
