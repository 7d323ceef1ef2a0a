//! Configuration loading and persistence.

use super::Config;
use crate::env::{self, vars};
use crate::error::ConfigError;
use crate::paths;
use crate::secret::SecretString;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

impl Config {
    /// Load configuration from the default path.
    pub fn load_default() -> Result<Self, ConfigError> {
        let path = paths::config_file()?;
        Self::load(&path)
    }

    /// Load configuration from a file path.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Err(ConfigError::NotFound(path.to_path_buf()));
        }

        let content = fs::read_to_string(path)?;
        Self::parse(&content)
    }

    /// Parse configuration from a string.
    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        json5::from_str(content).map_err(|e| ConfigError::Json5(e.to_string()))
    }

    /// Resolve configuration for a run.
    ///
    /// An explicit path must exist. Without one, the default file is used if
    /// present and defaults otherwise. Environment overrides apply last.
    pub fn resolve(path: Option<&Path>) -> Result<Self, ConfigError> {
        let mut config = match path {
            Some(path) => Self::load(path)?,
            None => match Self::load_default() {
                Ok(config) => config,
                Err(ConfigError::NotFound(path)) => {
                    debug!(path = %path.display(), "No config file, using defaults");
                    Self::default()
                }
                Err(e) => return Err(e),
            },
        };
        config.apply_env_overrides();
        Ok(config)
    }

    /// Overlay credentials, whitelist, and data directory from the environment.
    pub fn apply_env_overrides(&mut self) {
        if let Some(key) = env::get_var(vars::VONAGE_API_KEY) {
            self.vonage.api_key = SecretString::new(key);
        }
        if let Some(secret) = env::get_var(vars::VONAGE_API_SECRET) {
            self.vonage.api_secret = SecretString::new(secret);
        }
        if let Some(from) = env::get_var(vars::VONAGE_FROM_NUMBER) {
            self.vonage.from_number = from;
        }
        if let Some(list) = env::get_list(vars::WHITELIST) {
            self.vonage.whitelist = list;
        }
        if let Some(dir) = env::get_var(vars::DATA_DIR) {
            self.storage.data_dir = Some(PathBuf::from(dir));
        }
    }

    /// Save configuration to the default path.
    pub fn save_default(&self) -> Result<(), ConfigError> {
        let path = paths::config_file()?;
        self.save(&path)
    }

    /// Save configuration to a file path.
    pub fn save(&self, path: &Path) -> Result<(), ConfigError> {
        let content = self.to_json5()?;

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        // Write atomically
        let temp_path = path.with_extension("tmp");
        fs::write(&temp_path, &content)?;
        fs::rename(&temp_path, path)?;

        Ok(())
    }

    /// Serialize to JSON5 string.
    pub fn to_json5(&self) -> Result<String, ConfigError> {
        // json5 has no serializer; JSON is valid JSON5
        serde_json::to_string_pretty(self).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    /// Resolved data directory for the file-backed stores.
    pub fn data_dir(&self) -> Result<PathBuf, ConfigError> {
        match &self.storage.data_dir {
            Some(dir) => paths::expand_home(dir),
            None => paths::data_dir(),
        }
    }

    /// Validate the configuration, collecting all errors before returning.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let mut errors = Vec::new();

        // 1. Credentials
        if self.vonage.api_key.is_blank() {
            errors.push("vonage.api_key is not set".to_string());
        }
        if self.vonage.api_secret.is_blank() {
            errors.push("vonage.api_secret is not set".to_string());
        }
        if self.vonage.from_number.trim().is_empty() {
            errors.push("vonage.from_number is not set".to_string());
        }

        // 2. Endpoint must be an http(s) URL
        match url::Url::parse(&self.vonage.endpoint) {
            Ok(url) if matches!(url.scheme(), "http" | "https") => {}
            Ok(url) => errors.push(format!(
                "vonage.endpoint must use http or https, got '{}'",
                url.scheme()
            )),
            Err(e) => errors.push(format!(
                "vonage.endpoint '{}' is not a valid URL: {}",
                self.vonage.endpoint, e
            )),
        }

        if self.vonage.timeout_secs == 0 {
            errors.push("vonage.timeout_secs must be greater than 0".to_string());
        }

        // 3. Whitelist entries
        for (i, number) in self.vonage.whitelist.iter().enumerate() {
            if number.trim().is_empty() {
                errors.push(format!("vonage.whitelist[{}] is blank", i));
            }
        }

        // 4. Dispatch wording
        if self.dispatch.closing_line.trim().is_empty() {
            errors.push("dispatch.closing_line must not be empty".to_string());
        }
        if self.dispatch.all_classes_label.trim().is_empty() {
            errors.push("dispatch.all_classes_label must not be empty".to_string());
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(ConfigError::Validation(errors.join("; ")))
        }
    }
}
