//! Client error types

use shared::ApiEnvelope;
use thiserror::Error;

/// Client error type
#[derive(Debug, Error)]
pub enum ClientError {
    /// HTTP request failed before a response arrived
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Authentication required or token rejected (HTTP 401)
    #[error("Authentication required: {}", .message.as_deref().unwrap_or("no message"))]
    Unauthorized { message: Option<String> },

    /// Non-success HTTP status other than 401
    #[error("API error ({status}): {}", .message.as_deref().unwrap_or("no message"))]
    Api { status: u16, message: Option<String> },

    /// Envelope returned `success: false`
    #[error("Request rejected: {}", .message.as_deref().unwrap_or("no message"))]
    Rejected { message: Option<String> },

    /// Input refused before any request was sent
    #[error("Validation error: {0}")]
    Validation(String),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl ClientError {
    /// Map a non-success HTTP status and its body to an error.
    ///
    /// The body is inspected for a `{success, message}` envelope so the
    /// server's own wording reaches the user.
    pub fn from_status(status: u16, body: &str) -> Self {
        let message = serde_json::from_str::<ApiEnvelope<serde_json::Value>>(body)
            .ok()
            .and_then(|env| env.message().map(str::to_string));
        if status == 401 {
            return Self::Unauthorized { message };
        }
        Self::Api { status, message }
    }

    /// Message supplied by the server, if any
    pub fn server_message(&self) -> Option<&str> {
        match self {
            Self::Api { message, .. }
            | Self::Rejected { message }
            | Self::Unauthorized { message } => message.as_deref(),
            _ => None,
        }
    }

    pub fn is_unauthorized(&self) -> bool {
        matches!(self, Self::Unauthorized { .. })
    }
}

/// Result type for client operations
pub type ClientResult<T> = Result<T, ClientError>;
