//! Environment variable handling.

use std::env;

/// Environment variable names recognised by KidConnect.
pub mod vars {
    /// Path to the config file.
    pub const CONFIG: &str = "KIDCONNECT_CONFIG";
    /// Messaging API key.
    pub const VONAGE_API_KEY: &str = "VONAGE_API_KEY";
    /// Messaging API secret.
    pub const VONAGE_API_SECRET: &str = "VONAGE_API_SECRET";
    /// Sender number.
    pub const VONAGE_FROM_NUMBER: &str = "VONAGE_FROM_NUMBER";
    /// Comma-separated whitelist.
    pub const WHITELIST: &str = "KIDCONNECT_WHITELIST";
    /// Data directory for the file-backed stores.
    pub const DATA_DIR: &str = "KIDCONNECT_DATA_DIR";
}

/// Get an environment variable, returning None if not set or empty.
pub fn get_var(name: &str) -> Option<String> {
    env::var(name).ok().filter(|v| !v.is_empty())
}

/// Get a comma-separated environment variable as a list of trimmed,
/// non-empty entries.
pub fn get_list(name: &str) -> Option<Vec<String>> {
    get_var(name).map(|v| split_list(&v))
}

/// Split a comma-separated list, dropping blank entries.
pub fn split_list(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}
