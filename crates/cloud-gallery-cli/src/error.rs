use std::io;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Core(#[from] cloud_gallery_core::Error),
    /// Gallery failure already shown to the user as a notice
    #[error(transparent)]
    Reported(cloud_gallery_core::Error),
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error(transparent)]
    Serialization(#[from] serde_json::Error),
    #[error("No file found with key: {0}")]
    FileNotFound(String),
    #[error("File key cannot be empty")]
    EmptyKey,
    #[error("Path has no file name: {0}")]
    MissingFileName(String),
    #[error("Refusing to overwrite existing file: {0} (pass --output to choose another path)")]
    FileExists(String),
    #[error("Stored file name is not a plain file name: {0}")]
    UnsafeFileName(String),
}

impl CliError {
    /// Whether the message was already printed through the notifier.
    pub const fn is_reported(&self) -> bool {
        matches!(self, Self::Reported(_))
    }
}
