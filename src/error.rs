use std::io;
use std::path::PathBuf;

use thiserror::Error;

use crate::conversation::StoreError;
use crate::persistence::PersistenceError;

/// Error types that can occur when talking to a completion provider.
#[derive(Debug, Error)]
pub enum LLMError {
    /// Transport-level failures (connection refused, timeout, TLS, ...)
    #[error("HTTP error: {0}")]
    HttpError(String),
    /// Authentication and authorization errors
    #[error("Auth error: {0}")]
    AuthError(String),
    /// Invalid request parameters or format
    #[error("Invalid request: {0}")]
    InvalidRequest(String),
    /// Errors returned by the provider itself (non-2xx status)
    #[error("Provider error: {0}")]
    ProviderError(String),
    /// API response parsing or format error
    #[error("Response format error: {message}. Raw response: {raw_response}")]
    ResponseFormatError {
        message: String,
        raw_response: String,
    },
    /// JSON serialization/deserialization errors
    #[error("JSON parse error: {0}")]
    JsonError(String),
    /// The request was abandoned before a reply arrived
    #[error("request cancelled")]
    Cancelled,
}

/// Converts reqwest HTTP errors into LLMErrors
impl From<reqwest::Error> for LLMError {
    fn from(err: reqwest::Error) -> Self {
        LLMError::HttpError(err.to_string())
    }
}

impl From<serde_json::Error> for LLMError {
    fn from(err: serde_json::Error) -> Self {
        LLMError::JsonError(format!(
            "{} at line {} column {}",
            err,
            err.line(),
            err.column()
        ))
    }
}

/// Failures surfaced to whoever drives a [`ConversationController`].
///
/// [`ConversationController`]: crate::controller::ConversationController
#[derive(Debug, Error)]
pub enum ClientError {
    #[error("conversation index {index} out of range ({len} conversations)")]
    OutOfRange { index: usize, len: usize },
    #[error("conversation file {} is corrupt: {reason}", path.display())]
    CorruptState { path: PathBuf, reason: String },
    #[error("failed to write {}: {source}", path.display())]
    IoFailure {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error(transparent)]
    Provider(#[from] LLMError),
    #[error("a reply is still pending")]
    Busy,
}

impl From<StoreError> for ClientError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::OutOfRange { index, len } => ClientError::OutOfRange { index, len },
        }
    }
}

impl From<PersistenceError> for ClientError {
    fn from(err: PersistenceError) -> Self {
        match err {
            PersistenceError::CorruptState { path, reason } => {
                ClientError::CorruptState { path, reason }
            }
            PersistenceError::Io { path, source } => ClientError::IoFailure { path, source },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn json_error_reports_position() {
        let err = serde_json::from_str::<serde_json::Value>("{\"a\":").unwrap_err();
        let converted = LLMError::from(err);
        let text = converted.to_string();
        assert!(text.starts_with("JSON parse error:"));
        assert!(text.contains("line 1"));
    }

    #[test]
    fn persistence_errors_map_to_client_kinds() {
        let corrupt = PersistenceError::CorruptState {
            path: PathBuf::from("c.json"),
            reason: "bad".into(),
        };
        assert!(matches!(
            ClientError::from(corrupt),
            ClientError::CorruptState { .. }
        ));
        let io = PersistenceError::Io {
            path: PathBuf::from("c.json"),
            source: io::Error::new(io::ErrorKind::PermissionDenied, "denied"),
        };
        assert!(matches!(ClientError::from(io), ClientError::IoFailure { .. }));
    }

    #[test]
    fn provider_error_keeps_description() {
        let err = ClientError::from(LLMError::ProviderError("boom".into()));
        assert_eq!(err.to_string(), "Provider error: boom");
    }

    #[test]
    fn cancelled_has_plain_description() {
        assert_eq!(LLMError::Cancelled.to_string(), "request cancelled");
    }
}
