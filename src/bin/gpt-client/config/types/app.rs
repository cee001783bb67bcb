use serde::{Deserialize, Serialize};

use super::{LoggingConfig, ProviderConfig, StorageConfig, UiConfig};

const DEFAULT_MODELS: &[&str] = &[
    "gpt-4o-mini-2024-07-18",
    "gpt-4o-mini",
    "gpt-4o-2024-05-13",
    "gpt-4o",
    "gpt-4-turbo-preview",
    "gpt-4-turbo-2024-04-09",
    "gpt-4-turbo",
    "gpt-4-1106-preview",
    "gpt-4-0613",
    "gpt-4-0125-preview",
    "gpt-4",
    "gpt-3.5-turbo-16k",
    "gpt-3.5-turbo-1106",
    "gpt-3.5-turbo-0125",
    "gpt-3.5-turbo",
];

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct AppConfig {
    pub default_model: Option<String>,
    /// Models offered by the picker, in display order.
    pub models: Vec<String>,
    pub provider: ProviderConfig,
    pub ui: UiConfig,
    pub storage: StorageConfig,
    pub logging: LoggingConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            default_model: None,
            models: DEFAULT_MODELS.iter().map(|m| m.to_string()).collect(),
            provider: ProviderConfig::default(),
            ui: UiConfig::default(),
            storage: StorageConfig::default(),
            logging: LoggingConfig::default(),
        }
    }
}

impl AppConfig {
    /// `cli`, then `default_model`, then the first listed model.
    pub fn initial_model(&self, cli: Option<&str>) -> Option<String> {
        cli.map(str::to_string)
            .or_else(|| self.default_model.clone())
            .or_else(|| self.models.first().cloned())
    }
}
