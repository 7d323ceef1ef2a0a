//! Channel error types.

use thiserror::Error;

/// Errors raised while building a transport.
///
/// Sending never fails with these; a failed send is a [`TransportResult`]
/// carrying a diagnostic.
///
/// [`TransportResult`]: crate::TransportResult
#[derive(Debug, Error)]
pub enum ChannelError {
    /// Channel configuration error.
    #[error("Configuration error: {0}")]
    Config(String),

    /// HTTP client could not be built.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
}

impl ChannelError {
    /// Create a configuration error.
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }
}
