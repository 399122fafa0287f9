use printpanel_settings::{Config, SettingsError, SettingsManager, SettingsSource};
use tempfile::tempdir;

#[test]
fn test_toml_round_trip() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("config.toml");

    let mut config = Config::new();
    config.printer.base_url = "http://octopi.local".to_string();
    config.printer.api_key = "0123456789ABCDEF".to_string();
    config.panel.dry_run = true;
    config.save_to_file(&path).unwrap();

    let loaded = Config::load_from_file(&path).unwrap();
    assert_eq!(loaded, config);
}

#[test]
fn test_json_round_trip() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("config.json");

    let mut config = Config::new();
    config.printer.timeout_ms = 1500;
    config.save_to_file(&path).unwrap();

    let loaded = Config::load_from_file(&path).unwrap();
    assert_eq!(loaded.printer.timeout_ms, 1500);
}

#[test]
fn test_unsupported_extension() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("config.yaml");

    let err = Config::new().save_to_file(&path).unwrap_err();
    assert!(matches!(err, SettingsError::UnsupportedFormat(ext) if ext == "yaml"));
}

#[test]
fn test_invalid_file_is_rejected_on_load() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "[printer]\ntimeout_ms = 0\n").unwrap();

    let err = Config::load_from_file(&path).unwrap_err();
    assert!(matches!(
        err,
        SettingsError::InvalidSetting { ref key, .. } if key == "printer.timeout_ms"
    ));
}

#[test]
fn test_manager_uses_defaults_then_saves() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("nested").join("config.toml");

    let mut manager = SettingsManager::load(&path).unwrap();
    assert_eq!(manager.config(), &Config::default());
    assert_eq!(manager.source(), SettingsSource::Defaults);

    manager.config_mut().printer.api_key = "KEY".to_string();
    manager.save().unwrap();
    assert!(path.exists());

    let reloaded = SettingsManager::load(&path).unwrap();
    assert_eq!(reloaded.config().printer.api_key, "KEY");
    assert_eq!(reloaded.path(), path.as_path());
    assert_eq!(reloaded.source(), SettingsSource::File);
}
