//! Failures of the remote interpretation path. None of these reach callers
//! of `Interpreter::interpret`; they select the local fallback.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum InterpretError {
    /// No usable credential; the remote endpoint is never contacted
    #[error("remote interpreter is not configured")]
    NotConfigured,

    /// Connection failure, timeout or an unreadable body
    #[error("completion request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("completion endpoint returned status {0}")]
    Status(reqwest::StatusCode),

    #[error("completion response carried no content")]
    EmptyCompletion,

    #[error("malformed completion payload: {0}")]
    MalformedPayload(String),
}

impl From<serde_json::Error> for InterpretError {
    fn from(err: serde_json::Error) -> Self {
        InterpretError::MalformedPayload(err.to_string())
    }
}
