mod app;
mod logging;
mod provider;
mod storage;
mod ui;

const DEFAULT_LOG_ROTATE_SIZE: u64 = 10 * 1024 * 1024;
const DEFAULT_LOG_ROTATE_KEEP: usize = 5;
const DEFAULT_API_KEY_ENV: &str = "API_KEY";
const DEFAULT_SIDEBAR_WIDTH: u16 = 28;

pub use app::AppConfig;
pub use logging::LoggingConfig;
pub use provider::ProviderConfig;
pub use storage::StorageConfig;
pub use ui::UiConfig;
