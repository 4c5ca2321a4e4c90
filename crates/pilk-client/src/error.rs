//! Failure taxonomy for calls against the game API.
//!
//! Every call is a single attempt. Nothing in this crate retries; the
//! caller decides whether a failure is shown to the user or just logged.

use serde::Deserialize;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    /// The request never produced a usable HTTP answer, or the server
    /// failed without saying why.
    #[error("{0}")]
    Transport(String),

    /// The server understood the request and refused it.
    #[error("{detail}")]
    TradeRejected { detail: String },

    /// A success response whose body is not what we expected.
    #[error("malformed response: {0}")]
    Decode(String),
}

impl ApiError {
    /// Best message to put in front of the user: the server's `detail`
    /// when there is one, otherwise the transport or decode text.
    pub fn user_message(&self) -> String {
        match self {
            ApiError::TradeRejected { detail } => detail.clone(),
            other => other.to_string(),
        }
    }

    pub fn is_rejection(&self) -> bool {
        matches!(self, ApiError::TradeRejected { .. })
    }

    /// Classify a non-2xx response from its status and raw body.
    pub fn from_error_response(status: u16, body: &[u8]) -> Self {
        #[derive(Deserialize)]
        struct ErrorBody {
            #[serde(default)]
            detail: serde_json::Value,
        }

        match serde_json::from_slice::<ErrorBody>(body).map(|b| b.detail) {
            Ok(serde_json::Value::String(detail)) => ApiError::TradeRejected { detail },
            Ok(serde_json::Value::Null) | Err(_) => {
                ApiError::Transport(format!("Request failed with status code {}", status))
            }
            // e.g. a list of field validation errors
            Ok(other) => ApiError::TradeRejected {
                detail: other.to_string(),
            },
        }
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        ApiError::Transport(err.to_string())
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        ApiError::Decode(err.to_string())
    }
}
