use std::sync::Arc;

use gpt_client::backends::OpenAI;
use gpt_client::CompletionProvider;

use crate::args::CliArgs;
use crate::config::AppConfig;

use super::credentials::resolve_api_key;

/// Provider and starting model for this run.
pub struct Session {
    pub provider: Arc<dyn CompletionProvider>,
    pub model: String,
}

impl Session {
    pub fn resolve(args: &CliArgs, config: &AppConfig) -> anyhow::Result<Self> {
        let api_key = resolve_api_key(args.api_key.as_deref(), &config.provider)?;
        let base_url = args
            .base_url
            .clone()
            .or_else(|| config.provider.base_url.clone());
        let client = OpenAI::new(api_key, base_url, config.provider.timeout_seconds)?;
        log::info!("completion endpoint {}", client.base_url());
        let model = config
            .initial_model(args.model.as_deref())
            .ok_or_else(|| anyhow::anyhow!("no model configured; pass --model or set default_model"))?;
        Ok(Self {
            provider: Arc::new(client),
            model,
        })
    }
}
