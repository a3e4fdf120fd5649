//! Error types for cmdr-core.

use thiserror::Error;

/// Result type alias using cmdr-core Error
pub type Result<T> = std::result::Result<T, Error>;

/// Core error types for cmdr operations
#[derive(Error, Debug)]
pub enum Error {
    // LLM provider errors
    #[error("LLM API key not configured. Set GOOGLE_API_KEY before starting the server.")]
    MissingApiKey,

    #[error("LLM provider error: {0}")]
    Provider(String),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    // Command execution errors
    #[error("Failed to launch command: {cmd}: {source}")]
    Spawn {
        cmd: String,
        #[source]
        source: std::io::Error,
    },

    // IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // Serialization errors
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    // Generic errors
    #[error("{0}")]
    Other(String),
}

impl Error {
    /// Create an error from a provider response
    pub fn provider(message: impl Into<String>) -> Self {
        Self::Provider(message.into())
    }

    /// Create an error from a command that could not be started
    pub fn spawn(cmd: impl Into<String>, source: std::io::Error) -> Self {
        Self::Spawn {
            cmd: cmd.into(),
            source,
        }
    }
}
