use rpassmate::configtool::ConfigFile;
use rpassmate::passgen::DEFAULT_LENGTH;
use tempfile::tempdir;

#[test]
fn test_new_config_uses_default_length() {
    let config = ConfigFile::new();
    assert_eq!(config.default_length, DEFAULT_LENGTH);
}

#[test]
fn test_config_roundtrip() {
    let dir = tempdir().expect("Failed to create temp directory");
    let path = dir.path().join("config.json");

    let mut config = ConfigFile::new();
    config.default_length = 20;
    config.save_to(&path).expect("Failed to save config");

    let loaded = ConfigFile::load_from(&path).expect("Failed to load config");
    assert_eq!(loaded.default_length, 20);
    assert_eq!(loaded.created_at, config.created_at);
}

#[test]
fn test_save_creates_missing_directories() {
    let dir = tempdir().expect("Failed to create temp directory");
    let path = dir.path().join("nested").join("config.json");

    let mut config = ConfigFile::new();
    config.save_to(&path).expect("Failed to save config");
    assert!(path.exists());
}

#[test]
fn test_load_missing_config_fails() {
    let dir = tempdir().expect("Failed to create temp directory");
    let result = ConfigFile::load_from(&dir.path().join("missing.json"));
    assert!(result.is_err());
}
