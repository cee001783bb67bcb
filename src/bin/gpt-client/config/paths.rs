use std::path::{Path, PathBuf};

use gpt_client::persistence::DEFAULT_FILE_NAME;

use super::error::ConfigError;
use super::types::StorageConfig;

const APP_DIR: &str = "gpt-client";

#[derive(Debug, Clone)]
pub struct ConfigPaths {
    pub config_file: PathBuf,
    pub data_dir: PathBuf,
    pub logs_dir: PathBuf,
}

impl ConfigPaths {
    pub fn resolve(config_override: Option<PathBuf>) -> Result<Self, ConfigError> {
        let data_dir = default_data_dir()?;
        let logs_dir = data_dir.join("logs");
        let config_file = match config_override {
            Some(path) => path,
            None => default_config_dir()?.join("config.toml"),
        };
        Ok(Self::from_dirs(data_dir, logs_dir, config_file))
    }

    fn from_dirs(data_dir: PathBuf, logs_dir: PathBuf, config_file: PathBuf) -> Self {
        Self {
            config_file,
            data_dir,
            logs_dir,
        }
    }

    /// Conversations file: `--file`, then `storage.conversations_file`, then
    /// the data directory default.
    pub fn conversations_file(&self, storage: &StorageConfig, cli: Option<&Path>) -> PathBuf {
        if let Some(path) = cli {
            return path.to_path_buf();
        }
        storage
            .conversations_file
            .as_deref()
            .map(expand_home)
            .unwrap_or_else(|| self.data_dir.join(DEFAULT_FILE_NAME))
    }
}

fn expand_home(raw: &str) -> PathBuf {
    match (raw.strip_prefix("~/"), dirs::home_dir()) {
        (Some(rest), Some(home)) => home.join(rest),
        _ => PathBuf::from(raw),
    }
}

fn default_config_dir() -> Result<PathBuf, ConfigError> {
    let home = dirs::home_dir().ok_or(ConfigError::MissingHome)?;
    Ok(home.join(".config").join(APP_DIR))
}

fn default_data_dir() -> Result<PathBuf, ConfigError> {
    let home = dirs::home_dir().ok_or(ConfigError::MissingHome)?;
    Ok(home.join(".local").join("share").join(APP_DIR))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn paths() -> ConfigPaths {
        ConfigPaths::from_dirs(
            PathBuf::from("/data"),
            PathBuf::from("/data/logs"),
            PathBuf::from("/cfg/config.toml"),
        )
    }

    #[test]
    fn conversations_file_defaults_to_data_dir() {
        let file = paths().conversations_file(&StorageConfig::default(), None);
        assert_eq!(file, PathBuf::from("/data/conversations.json"));
    }

    #[test]
    fn cli_file_wins_over_config() {
        let storage = StorageConfig {
            conversations_file: Some("/elsewhere/chats.json".to_string()),
        };
        let from_config = paths().conversations_file(&storage, None);
        assert_eq!(from_config, PathBuf::from("/elsewhere/chats.json"));
        let from_cli = paths().conversations_file(&storage, Some(Path::new("./mine.json")));
        assert_eq!(from_cli, PathBuf::from("./mine.json"));
    }

    #[test]
    fn config_override_is_used_as_is() {
        let resolved = ConfigPaths::resolve(Some(PathBuf::from("/tmp/custom/gpt.toml")));
        if let Ok(paths) = resolved {
            assert_eq!(paths.config_file, PathBuf::from("/tmp/custom/gpt.toml"));
            assert!(paths.logs_dir.ends_with("gpt-client/logs"));
        }
    }
}
