//! Outbound message transport for KidConnect.
//!
//! This crate defines the [`MessageTransport`] contract the dispatch engine
//! sends through, and the WhatsApp implementation backed by the Vonage
//! Messages API.

pub mod error;
pub mod traits;
pub mod vonage;

pub use error::ChannelError;
pub use traits::{MessageTransport, TransportResult, ACCEPTED};
pub use vonage::VonageTransport;

/// Result type for channel operations.
pub type Result<T> = std::result::Result<T, ChannelError>;
