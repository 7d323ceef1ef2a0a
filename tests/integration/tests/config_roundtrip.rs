//! Config save/load roundtrip integration tests.

use kidconnect_core::config::Config;
use std::path::Path;
use tempfile::TempDir;

#[test]
fn test_config_save_and_load() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("kidconnect.json5");

    let config = Config::default();
    config.save(&path).unwrap();

    let loaded = Config::load(&path).unwrap();
    assert_eq!(loaded.vonage.endpoint, config.vonage.endpoint);
    assert_eq!(loaded.dispatch.send_interval_ms, config.dispatch.send_interval_ms);
    assert_eq!(loaded.dispatch.closing_line, config.dispatch.closing_line);
}

#[test]
fn test_config_modify_and_reload() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("kidconnect.json5");

    let mut config = Config::default();
    config.vonage.api_key = "key".into();
    config.vonage.whitelist = vec!["27831112222".into()];
    config.dispatch.send_interval_ms = 250;
    config.save(&path).unwrap();

    let loaded = Config::load(&path).unwrap();
    assert_eq!(loaded.vonage.api_key.expose_secret(), "key");
    assert!(loaded.vonage.whitelist().contains("27831112222"));
    assert_eq!(loaded.dispatch.send_interval_ms, 250);
}

#[test]
fn test_config_load_nonexistent() {
    let result = Config::load(Path::new("/nonexistent/kidconnect.json5"));
    assert!(result.is_err());
}

#[test]
fn test_config_parse_invalid() {
    let result = Config::parse("not valid json");
    assert!(result.is_err());
}
