//! Error types for vk-album-backup
//!
//! Remote API rejections that the pipeline recovers from (a structured VK
//! error body, the storage backend's `UnauthorizedError`) are NOT error
//! variants — they are explicit outcome values on the client methods so
//! callers have to branch on them. Everything here is fatal to the run.

use thiserror::Error;

/// Result type alias for vk-album-backup operations
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for vk-album-backup
#[derive(Debug, Error)]
pub enum Error {
    /// Configuration error with context about which setting is invalid
    #[error("configuration error: {message}")]
    Config {
        /// Human-readable error message describing the configuration issue
        message: String,
        /// The configuration key that caused the error (e.g., "vk.access_token")
        key: Option<String>,
    },

    /// Network or transport error (connect failure, timeout, bad status
    /// handling inside reqwest, undecodable body)
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    /// Serialization error
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// I/O error (manifest file writes)
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// An endpoint base URL in the configuration could not be parsed
    #[error("invalid endpoint URL: {0}")]
    InvalidUrl(#[from] url::ParseError),
}

impl Error {
    /// Shorthand for a [`Error::Config`] with a key
    pub fn config(message: impl Into<String>, key: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
            key: Some(key.into()),
        }
    }
}
