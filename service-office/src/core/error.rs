//! Page-level error classification
//!
//! Every page operation converts a [`ClientError`] into one of these and
//! stores it as display text. Nothing escapes the page.

use service_client::ClientError;
use thiserror::Error;

pub const SESSION_EXPIRED_MESSAGE: &str = "Session expired. Please login again.";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PageError {
    /// HTTP 401 on a page load
    #[error("Session expired. Please login again.")]
    SessionExpired,

    /// Anything else: server message or the page's fallback text
    #[error("{0}")]
    Failed(String),
}

impl PageError {
    /// Classify a client error, preferring the server's own message.
    pub fn from_client(err: &ClientError, fallback: &str) -> Self {
        if err.is_unauthorized() {
            return Self::SessionExpired;
        }
        Self::Failed(err.server_message().unwrap_or(fallback).to_string())
    }

    /// Same as [`from_client`](Self::from_client) but never reports an
    /// expired session. Used for mutations, which alert instead of
    /// redirecting.
    pub fn from_mutation(err: &ClientError, fallback: &str) -> Self {
        Self::Failed(err.server_message().unwrap_or(fallback).to_string())
    }

    pub fn is_session_expired(&self) -> bool {
        matches!(self, Self::SessionExpired)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unauthorized_is_session_expired() {
        let err = PageError::from_client(
            &ClientError::Unauthorized {
                message: Some("jwt expired".into()),
            },
            "Failed to load services",
        );
        assert!(err.is_session_expired());
        assert_eq!(err.to_string(), SESSION_EXPIRED_MESSAGE);
    }

    #[test]
    fn test_server_message_wins_over_fallback() {
        let err = ClientError::Rejected {
            message: Some("Branch closed".into()),
        };
        assert_eq!(
            PageError::from_client(&err, "Failed to load services"),
            PageError::Failed("Branch closed".into())
        );
    }

    #[test]
    fn test_fallback_without_server_message() {
        let err = ClientError::Internal("connection refused".into());
        assert_eq!(
            PageError::from_client(&err, "Failed to load services").to_string(),
            "Failed to load services"
        );
    }

    #[test]
    fn test_mutation_never_expires_session() {
        let err = PageError::from_mutation(
            &ClientError::Unauthorized { message: None },
            "Failed to update service",
        );
        assert_eq!(err, PageError::Failed("Failed to update service".into()));
    }

    #[test]
    fn test_mutation_shows_server_message_on_401() {
        let err = ClientError::Unauthorized {
            message: Some("Token expired, please re-login".into()),
        };
        assert_eq!(
            PageError::from_mutation(&err, "Failed to update service"),
            PageError::Failed("Token expired, please re-login".into())
        );
    }
}
