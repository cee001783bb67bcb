use serde::{Deserialize, Serialize};

use super::DEFAULT_SIDEBAR_WIDTH;

/// UI configuration for the TUI
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct UiConfig {
    /// Theme name: "warm" (default) or "mono"
    pub theme: String,
    /// Width of the conversation list in columns
    pub sidebar_width: u16,
    /// Show the system message at the top of each transcript
    pub show_system: bool,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            theme: "warm".to_string(),
            sidebar_width: DEFAULT_SIDEBAR_WIDTH,
            show_system: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn system_message_hidden_by_default() {
        assert!(!UiConfig::default().show_system);
    }

    #[test]
    fn deserialize_sidebar_width() {
        let config: UiConfig = toml::from_str("sidebar_width = 40").unwrap();
        assert_eq!(config.sidebar_width, 40);
        assert!(!config.show_system);
    }
}
