use secrecy::SecretString;

use crate::config::ProviderConfig;

pub const FALLBACK_KEY_ENV: &str = "OPENAI_API_KEY";

/// Finds the API key: `--api-key`, the configured variable, `OPENAI_API_KEY`,
/// then `provider.api_key` from the config file.
pub fn resolve_api_key(cli: Option<&str>, provider: &ProviderConfig) -> anyhow::Result<SecretString> {
    resolve_with(cli, provider, |name| std::env::var(name).ok())
}

fn resolve_with(
    cli: Option<&str>,
    provider: &ProviderConfig,
    env: impl Fn(&str) -> Option<String>,
) -> anyhow::Result<SecretString> {
    let found = non_empty(cli.map(str::to_string))
        .map(|key| ("--api-key", key))
        .or_else(|| non_empty(env(&provider.api_key_env)).map(|key| (provider.api_key_env.as_str(), key)))
        .or_else(|| non_empty(env(FALLBACK_KEY_ENV)).map(|key| (FALLBACK_KEY_ENV, key)))
        .or_else(|| non_empty(provider.api_key.clone()).map(|key| ("config file", key)));
    match found {
        Some((source, key)) => {
            log::info!("using API key from {source}");
            Ok(SecretString::new(key))
        }
        None => Err(anyhow::anyhow!(
            "API key not found. Set the {} environment variable (or {}), add it to .env, or pass --api-key.",
            provider.api_key_env,
            FALLBACK_KEY_ENV
        )),
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use secrecy::ExposeSecret;

    use super::*;

    fn env_of(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name| map.get(name).cloned()
    }

    #[test]
    fn cli_key_wins() {
        let key = resolve_with(
            Some("from-cli"),
            &ProviderConfig::default(),
            env_of(&[("API_KEY", "from-env")]),
        )
        .unwrap();
        assert_eq!(key.expose_secret(), "from-cli");
    }

    #[test]
    fn configured_variable_before_openai_fallback() {
        let env = env_of(&[("API_KEY", "primary"), ("OPENAI_API_KEY", "fallback")]);
        let key = resolve_with(None, &ProviderConfig::default(), env).unwrap();
        assert_eq!(key.expose_secret(), "primary");

        let env = env_of(&[("OPENAI_API_KEY", "fallback")]);
        let key = resolve_with(None, &ProviderConfig::default(), env).unwrap();
        assert_eq!(key.expose_secret(), "fallback");
    }

    #[test]
    fn custom_variable_name_and_config_key() {
        let provider = ProviderConfig {
            api_key_env: "MY_KEY".to_string(),
            api_key: Some("in-config".to_string()),
            ..ProviderConfig::default()
        };
        let key = resolve_with(None, &provider, env_of(&[("MY_KEY", "custom")])).unwrap();
        assert_eq!(key.expose_secret(), "custom");
        let key = resolve_with(None, &provider, env_of(&[])).unwrap();
        assert_eq!(key.expose_secret(), "in-config");
    }

    #[test]
    fn missing_or_blank_key_is_fatal() {
        let err = resolve_with(Some("  "), &ProviderConfig::default(), env_of(&[("API_KEY", "")]))
            .unwrap_err();
        assert!(err.to_string().contains("API key not found"));
    }
}
