use serde::{Deserialize, Serialize};

use super::DEFAULT_API_KEY_ENV;

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ProviderConfig {
    pub api_key: Option<String>,
    /// Environment variable consulted before `OPENAI_API_KEY`.
    pub api_key_env: String,
    pub base_url: Option<String>,
    pub timeout_seconds: Option<u64>,
}

impl Default for ProviderConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            api_key_env: DEFAULT_API_KEY_ENV.to_string(),
            base_url: None,
            timeout_seconds: None,
        }
    }
}
