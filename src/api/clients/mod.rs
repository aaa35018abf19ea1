use crate::models::ChatRequest;

#[cfg(test)]
pub mod dummy;
pub mod ollama;

pub use ollama::OllamaClient;

/// Failure of one chat round-trip.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CompletionError {
    /// The server answered with a non-success status; holds the raw body.
    #[error("{0}")]
    Status(String),
    /// The request never produced a usable response (connect, DNS, decode).
    #[error("{0}")]
    Transport(String),
}

impl From<reqwest::Error> for CompletionError {
    fn from(err: reqwest::Error) -> Self {
        CompletionError::Transport(err.to_string())
    }
}

impl From<serde_json::Error> for CompletionError {
    fn from(err: serde_json::Error) -> Self {
        CompletionError::Transport(err.to_string())
    }
}

pub trait ChatClient {
    async fn list_models(&self) -> anyhow::Result<Vec<String>>;

    /// Sends one chat request and returns the assistant's reply text.
    async fn complete_message(&self, request: ChatRequest) -> Result<String, CompletionError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_completion_error_display_is_raw() {
        let status = CompletionError::Status(r#"{"error":"model not found"}"#.to_string());
        assert_eq!(status.to_string(), r#"{"error":"model not found"}"#);

        let transport = CompletionError::Transport("connection refused".to_string());
        assert_eq!(transport.to_string(), "connection refused");
    }

    #[test]
    fn test_completion_error_from_json_error() {
        let err = serde_json::from_str::<serde_json::Value>("{not json").unwrap_err();
        assert!(matches!(
            CompletionError::from(err),
            CompletionError::Transport(_)
        ));
    }
}
