//! Configuration schema definitions.

use crate::secret::SecretString;
use crate::types::Whitelist;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

/// Messages API sandbox endpoint.
pub const DEFAULT_ENDPOINT: &str = "https://messages-sandbox.nexmo.com/v1/messages";

/// Sentinel class value meaning "every class".
pub const ALL_CLASSES: &str = "All Classes";

/// Sign-off appended to daily campaign messages.
pub const DEFAULT_CLOSING_LINE: &str = "Thank you, have a lovely day - Speelkas Admin";

/// Main KidConnect configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Messaging provider credentials and whitelist.
    #[serde(default)]
    pub vonage: VonageConfig,

    /// Dispatch behaviour.
    #[serde(default)]
    pub dispatch: DispatchConfig,

    /// Where the stores keep their files.
    #[serde(default)]
    pub storage: StorageConfig,

    /// Logging settings.
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Vonage Messages API settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VonageConfig {
    /// API key.
    #[serde(default)]
    pub api_key: SecretString,

    /// API secret.
    #[serde(default)]
    pub api_secret: SecretString,

    /// Sender identity (the WhatsApp number messages come from).
    #[serde(default)]
    pub from_number: String,

    /// Messages endpoint.
    #[serde(default = "default_endpoint")]
    pub endpoint: String,

    /// Request timeout in seconds.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// Numbers allowed to receive messages.
    #[serde(default)]
    pub whitelist: Vec<String>,
}

fn default_endpoint() -> String {
    DEFAULT_ENDPOINT.to_string()
}

fn default_timeout_secs() -> u64 {
    30
}

impl Default for VonageConfig {
    fn default() -> Self {
        Self {
            api_key: SecretString::default(),
            api_secret: SecretString::default(),
            from_number: String::new(),
            endpoint: default_endpoint(),
            timeout_secs: default_timeout_secs(),
            whitelist: Vec::new(),
        }
    }
}

impl VonageConfig {
    /// Build the immutable whitelist value.
    pub fn whitelist(&self) -> Whitelist {
        Whitelist::new(&self.whitelist)
    }

    /// Request timeout.
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

/// Dispatch settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DispatchConfig {
    /// Pause after each successful send, in milliseconds.
    #[serde(default = "default_send_interval_ms")]
    pub send_interval_ms: u64,

    /// Class filter value meaning "every class".
    #[serde(default = "default_all_classes_label")]
    pub all_classes_label: String,

    /// Sign-off line for daily campaign messages.
    #[serde(default = "default_closing_line")]
    pub closing_line: String,

    /// Skip recipients who already got the campaign for the same date.
    #[serde(default = "default_true")]
    pub skip_already_delivered: bool,
}

fn default_send_interval_ms() -> u64 {
    1000
}

fn default_all_classes_label() -> String {
    ALL_CLASSES.to_string()
}

fn default_closing_line() -> String {
    DEFAULT_CLOSING_LINE.to_string()
}

fn default_true() -> bool {
    true
}

impl Default for DispatchConfig {
    fn default() -> Self {
        Self {
            send_interval_ms: default_send_interval_ms(),
            all_classes_label: default_all_classes_label(),
            closing_line: default_closing_line(),
            skip_already_delivered: true,
        }
    }
}

impl DispatchConfig {
    /// Pause between successful sends.
    pub fn send_interval(&self) -> Duration {
        Duration::from_millis(self.send_interval_ms)
    }
}

/// Storage configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StorageConfig {
    /// Data directory; defaults to `~/.kidconnect/data`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data_dir: Option<PathBuf>,
}

/// Logging configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level.
    #[serde(default)]
    pub level: LogLevel,

    /// Emit JSON lines instead of human-readable output.
    #[serde(default)]
    pub json: bool,
}

/// Log level.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Trace,
    Debug,
    #[default]
    Info,
    Warn,
    Error,
}

impl LogLevel {
    /// Directive string for an env filter.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Trace => "trace",
            Self::Debug => "debug",
            Self::Info => "info",
            Self::Warn => "warn",
            Self::Error => "error",
        }
    }
}
