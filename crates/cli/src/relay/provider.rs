//! Model provider abstraction.
//!
//! Defines the `ModelProvider` trait the relay calls, so the HTTP layer and
//! the CLI never talk to a specific vendor API directly.

use async_trait::async_trait;

/// Error type for provider calls. Messages are surfaced to the end user
/// as-is.
#[derive(Debug, thiserror::Error)]
pub enum ProviderError {
    /// The provider answered with an error status.
    #[error("{message}")]
    Api { status: u16, message: String },
    /// The request never got an answer (DNS, TLS, connection reset).
    #[error("API request failed: {0}")]
    Transport(String),
    /// The response body could not be understood.
    #[error("failed to parse API response: {0}")]
    Parse(String),
    /// The provider answered but produced no text (e.g. a blocked prompt).
    #[error("{0}")]
    Empty(String),
    /// An internal error occurred.
    #[error("internal error: {0}")]
    Internal(String),
}

impl ProviderError {
    /// HTTP status the provider answered with, when it answered at all.
    pub fn status(&self) -> Option<u16> {
        match self {
            ProviderError::Api { status, .. } => Some(*status),
            _ => None,
        }
    }
}

/// A hosted model that turns an instruction into text.
#[async_trait]
pub trait ModelProvider: Send + Sync {
    /// Identifier of the model actually called, reported back as `modelUsed`.
    fn model(&self) -> &str;

    /// Send one instruction and return the model's text unmodified.
    async fn generate(&self, instruction: &str) -> Result<String, ProviderError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn api_error_displays_provider_message_verbatim() {
        let err = ProviderError::Api {
            status: 400,
            message: "API key not valid. Please pass a valid API key.".to_string(),
        };
        assert_eq!(err.to_string(), "API key not valid. Please pass a valid API key.");
    }

    #[test]
    fn only_api_errors_have_status() {
        let api = ProviderError::Api {
            status: 429,
            message: "quota".to_string(),
        };
        assert_eq!(api.status(), Some(429));
        assert_eq!(ProviderError::Transport("reset".to_string()).status(), None);
    }

    #[test]
    fn transport_error_is_prefixed() {
        let err = ProviderError::Transport("connection refused".to_string());
        assert_eq!(err.to_string(), "API request failed: connection refused");
    }
}
