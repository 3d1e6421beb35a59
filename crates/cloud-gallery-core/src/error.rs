//! Error types for cloud-gallery-core

use thiserror::Error;

/// Result type alias using cloud-gallery-core's Error
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in gallery operations
#[derive(Error, Debug)]
pub enum Error {
    /// Local validation failure; never reaches the network
    #[error("Invalid input: {0}")]
    Validation(String),

    /// Listing files failed (transport, status, or payload)
    #[error("Network error: {0}")]
    Network(String),

    /// Upload request failed
    #[error("Upload failed: {0}")]
    Upload(String),

    /// Delete request failed
    #[error("Delete failed: {0}")]
    Delete(String),

    /// Pre-signed view URL is missing or could not be fetched
    #[error("Link unavailable: {0}")]
    LinkExpired(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
