/*!
 * Tests for application configuration functionality
 */

use std::path::PathBuf;

use decemvirate::app_config::{Config, LogLevel, OutputFormat};
use decemvirate::SchemaVersion;
use tempfile::TempDir;

/// Test loading a configuration file that doesn't exist
#[test]
fn test_load_withMissingFile_shouldReturnDefaults() {
    let dir = TempDir::new().unwrap();
    let config = Config::load(dir.path().join("missing.json")).expect("Defaults expected");

    assert_eq!(config.required_version(), SchemaVersion::required(0, 8));
    assert_eq!(config.output, OutputFormat::Text);
    assert_eq!(config.log_level, LogLevel::Info);
}

/// Test loading a full configuration file
#[test]
fn test_load_withFullFile_shouldUseAllValues() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("decemvirate.json");
    std::fs::write(
        &path,
        r#"{
            "database_path": "/srv/pathfinder.sqlite",
            "required_major_version": 1,
            "min_minor_version": 2,
            "output": "json",
            "log_level": "debug"
        }"#,
    )
    .unwrap();

    let config = Config::load(&path).expect("Failed to load config");

    assert_eq!(config.database_path, PathBuf::from("/srv/pathfinder.sqlite"));
    assert_eq!(config.required_version(), SchemaVersion::new(1, 2, 0));
    assert_eq!(config.output, OutputFormat::Json);
    assert_eq!(config.log_level, LogLevel::Debug);
    assert!(config.validate().is_ok());
}

/// Test loading a malformed configuration file
#[test]
fn test_load_withInvalidJson_shouldFail() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("decemvirate.json");
    std::fs::write(&path, "{ not json").unwrap();

    let error = Config::load(&path).unwrap_err();
    assert!(format!("{:#}", error).contains("Failed to parse config file"));
}

/// Test configuration validation
#[test]
fn test_validate_withBlankDatabasePath_shouldFail() {
    let mut config = Config::default();
    config.database_path = PathBuf::from("   ");
    assert!(config.validate().is_err());
}
