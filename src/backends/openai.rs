//! OpenAI chat-completions client.
//!
//! Speaks the `/chat/completions` endpoint, so any OpenAI-compatible server
//! can be targeted by overriding the base URL.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};

use crate::chat::{ChatMessage, CompletionProvider};
use crate::error::LLMError;

pub const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";

/// Configuration for the OpenAI client.
#[derive(Debug)]
pub struct OpenAIConfig {
    /// API key for authentication with OpenAI.
    pub api_key: SecretString,
    /// Base URL without the trailing `/chat/completions`.
    pub base_url: String,
    /// Request timeout in seconds.
    pub timeout_seconds: Option<u64>,
}

/// Client for interacting with OpenAI's API.
///
/// The client uses `Arc` internally for configuration, making cloning cheap.
#[derive(Debug, Clone)]
pub struct OpenAI {
    /// Shared configuration wrapped in Arc for cheap cloning.
    pub config: Arc<OpenAIConfig>,
    /// HTTP client for making requests.
    pub client: Client,
}

#[derive(Serialize)]
struct OpenAIChatRequest<'a> {
    model: &'a str,
    messages: &'a [ChatMessage],
    stream: bool,
}

#[derive(Deserialize, Debug)]
struct OpenAIChatResponse {
    choices: Vec<OpenAIChatChoice>,
}

#[derive(Deserialize, Debug)]
struct OpenAIChatChoice {
    message: OpenAIChatMsg,
}

#[derive(Deserialize, Debug)]
struct OpenAIChatMsg {
    content: Option<String>,
}

#[derive(Deserialize, Debug)]
struct OpenAIErrorBody {
    error: OpenAIErrorDetail,
}

#[derive(Deserialize, Debug)]
struct OpenAIErrorDetail {
    message: String,
}

impl OpenAI {
    pub fn new(
        api_key: SecretString,
        base_url: Option<String>,
        timeout_seconds: Option<u64>,
    ) -> Result<Self, LLMError> {
        let mut builder = Client::builder();
        if let Some(sec) = timeout_seconds {
            builder = builder.timeout(Duration::from_secs(sec));
        }
        let client = builder
            .build()
            .map_err(|err| LLMError::HttpError(format!("failed to build HTTP client: {err}")))?;
        Ok(Self::with_client(client, api_key, base_url, timeout_seconds))
    }

    /// Creates a new OpenAI client with a custom HTTP client.
    pub fn with_client(
        client: Client,
        api_key: SecretString,
        base_url: Option<String>,
        timeout_seconds: Option<u64>,
    ) -> Self {
        let base_url = base_url
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string())
            .trim_end_matches('/')
            .to_string();
        Self {
            config: Arc::new(OpenAIConfig {
                api_key,
                base_url,
                timeout_seconds,
            }),
            client,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.config.base_url
    }

    fn endpoint(&self) -> String {
        format!("{}/chat/completions", self.config.base_url)
    }
}

#[async_trait]
impl CompletionProvider for OpenAI {
    async fn complete(&self, model: &str, messages: &[ChatMessage]) -> Result<String, LLMError> {
        if self.config.api_key.expose_secret().is_empty() {
            return Err(LLMError::AuthError("Missing OpenAI API key".to_string()));
        }
        if model.trim().is_empty() {
            return Err(LLMError::InvalidRequest("no model selected".to_string()));
        }

        let body = OpenAIChatRequest {
            model,
            messages,
            stream: false,
        };

        if log::log_enabled!(log::Level::Trace) {
            if let Ok(json) = serde_json::to_string(&body) {
                log::trace!("OpenAI request payload: {}", json);
            }
        }

        let mut request = self
            .client
            .post(self.endpoint())
            .bearer_auth(self.config.api_key.expose_secret())
            .json(&body);

        if let Some(timeout) = self.config.timeout_seconds {
            request = request.timeout(Duration::from_secs(timeout));
        }

        let resp = request.send().await?;
        let status = resp.status();
        log::debug!("OpenAI HTTP status: {}", status);

        let raw = resp.text().await?;
        if !status.is_success() {
            return Err(status_error(status, &raw));
        }
        parse_reply(&raw)
    }
}

fn status_error(status: StatusCode, raw: &str) -> LLMError {
    let detail = serde_json::from_str::<OpenAIErrorBody>(raw)
        .map(|body| body.error.message)
        .unwrap_or_else(|_| raw.trim().to_string());
    let message = if detail.is_empty() {
        status.to_string()
    } else {
        format!("{status}: {detail}")
    };
    match status {
        StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => LLMError::AuthError(message),
        _ => LLMError::ProviderError(message),
    }
}

fn parse_reply(raw: &str) -> Result<String, LLMError> {
    let parsed: OpenAIChatResponse =
        serde_json::from_str(raw).map_err(|err| LLMError::ResponseFormatError {
            message: err.to_string(),
            raw_response: raw.to_string(),
        })?;
    parsed
        .choices
        .into_iter()
        .next()
        .and_then(|choice| choice.message.content)
        .ok_or_else(|| LLMError::ResponseFormatError {
            message: "response has no message content".to_string(),
            raw_response: raw.to_string(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_reply_takes_first_choice() {
        let raw = r#"{"choices":[{"message":{"role":"assistant","content":"hello"}},
                      {"message":{"role":"assistant","content":"other"}}]}"#;
        assert_eq!(parse_reply(raw).unwrap(), "hello");
    }

    #[test]
    fn parse_reply_rejects_empty_choices() {
        let err = parse_reply(r#"{"choices":[]}"#).unwrap_err();
        assert!(matches!(err, LLMError::ResponseFormatError { .. }));
    }

    #[test]
    fn parse_reply_rejects_null_content() {
        let err = parse_reply(r#"{"choices":[{"message":{"content":null}}]}"#).unwrap_err();
        assert!(matches!(err, LLMError::ResponseFormatError { .. }));
    }

    #[test]
    fn status_error_uses_api_message() {
        let raw = r#"{"error":{"message":"Incorrect API key provided","type":"invalid_request_error"}}"#;
        let err = status_error(StatusCode::UNAUTHORIZED, raw);
        match err {
            LLMError::AuthError(msg) => assert!(msg.contains("Incorrect API key provided")),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn status_error_falls_back_to_body() {
        let err = status_error(StatusCode::TOO_MANY_REQUESTS, "slow down");
        match err {
            LLMError::ProviderError(msg) => {
                assert!(msg.contains("429"));
                assert!(msg.contains("slow down"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn base_url_trailing_slash_is_trimmed() {
        let client = OpenAI::with_client(
            Client::new(),
            SecretString::new("key".to_string()),
            Some("http://localhost:1234/v1/".to_string()),
            None,
        );
        assert_eq!(client.endpoint(), "http://localhost:1234/v1/chat/completions");
    }
}
