//! # kidconnect-core
//!
//! Core types, configuration, and utilities for KidConnect.
//!
//! This crate provides shared functionality used across all KidConnect crates:
//!
//! - **Types**: recipients, the sending whitelist, scheduled items and delivery records
//! - **Configuration**: loading, validation, and persistence of the JSON5 config file
//! - **Utilities**: path resolution, environment overrides, and secret handling

pub mod config;
pub mod env;
pub mod error;
pub mod paths;
pub mod secret;
pub mod types;

// Re-exports for convenience
pub use config::Config;
pub use error::{ConfigError, Result};
pub use secret::SecretString;
pub use types::*;
