//! Store error types.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Errors from the record stores.
#[derive(Debug, Error)]
pub enum StoreError {
    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// JSON serialization/deserialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// A stored file could not be decoded.
    #[error("Corrupt store file {path}: {message}")]
    Corrupt {
        /// File path.
        path: PathBuf,
        /// Decoder message.
        message: String,
    },

    /// Import content could not be parsed.
    #[error("Import parse error: {0}")]
    Parse(String),

    /// The backing store cannot be reached.
    #[error("Store unavailable: {0}")]
    Unavailable(String),
}

impl StoreError {
    /// Create an unavailable error.
    pub fn unavailable(message: impl Into<String>) -> Self {
        Self::Unavailable(message.into())
    }
}
