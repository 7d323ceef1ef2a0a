//! Path resolution utilities.

use crate::error::ConfigError;
use std::path::PathBuf;

/// File holding the recipient directory snapshot.
pub const RECIPIENTS_FILE: &str = "recipients.json";

/// File holding the scheduled content snapshot.
pub const SCHEDULE_FILE: &str = "schedule.json";

/// Append-only delivery log.
pub const MESSAGE_LOG_FILE: &str = "message-log.jsonl";

/// Get the KidConnect base directory (~/.kidconnect).
pub fn base_dir() -> Result<PathBuf, ConfigError> {
    let home = dirs::home_dir().ok_or_else(|| {
        ConfigError::Validation("Could not determine home directory".to_string())
    })?;
    Ok(home.join(".kidconnect"))
}

/// Get the main config file path (~/.kidconnect/kidconnect.json5).
pub fn config_file() -> Result<PathBuf, ConfigError> {
    Ok(base_dir()?.join("kidconnect.json5"))
}

/// Get the default data directory (~/.kidconnect/data).
pub fn data_dir() -> Result<PathBuf, ConfigError> {
    Ok(base_dir()?.join("data"))
}

/// Expand a leading `~/` to the home directory.
pub fn expand_home(path: &std::path::Path) -> Result<PathBuf, ConfigError> {
    match path.strip_prefix("~") {
        Ok(rest) => {
            let home = dirs::home_dir().ok_or_else(|| {
                ConfigError::Validation("Could not determine home directory".to_string())
            })?;
            Ok(home.join(rest))
        }
        Err(_) => Ok(path.to_path_buf()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    #[test]
    fn test_config_file_under_base_dir() {
        let base = base_dir().unwrap();
        let config = config_file().unwrap();
        assert!(config.starts_with(&base));
        assert!(config.ends_with("kidconnect.json5"));
    }

    #[test]
    fn test_expand_home_leaves_absolute_paths() {
        let p = expand_home(Path::new("/var/lib/kidconnect")).unwrap();
        assert_eq!(p, PathBuf::from("/var/lib/kidconnect"));
    }

    #[test]
    fn test_expand_home_tilde() {
        let p = expand_home(Path::new("~/school")).unwrap();
        assert!(p.ends_with("school"));
        assert!(!p.starts_with("~"));
    }
}
