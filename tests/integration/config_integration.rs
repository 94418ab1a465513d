//! Integration tests for Configuration System

use super::test_utils::with_env;
use appmerge::config::ConfigLoader;
use appmerge::error::ApiError;
use appmerge::patch::TagDuplicatePolicy;
use std::path::PathBuf;
use tempfile::TempDir;

#[test]
fn test_load_from_file() {
    let temp_dir = TempDir::new().unwrap();
    let config_file = temp_dir.path().join("appmerge.toml");
    std::fs::write(
        &config_file,
        r#"
[patch]
tag_duplicates = "preserve"

[storage]
store_path = "/var/lib/appmerge"

[logging]
level = "debug"
format = "json"
"#,
    )
    .unwrap();

    let config = with_env(&[], || ConfigLoader::load_from_file(&config_file)).unwrap();
    assert_eq!(config.patch.tag_duplicates, TagDuplicatePolicy::Preserve);
    assert_eq!(config.storage.store_path, PathBuf::from("/var/lib/appmerge"));
    assert_eq!(config.logging.level, "debug");
    assert_eq!(config.logging.format, "json");
}

#[test]
fn test_workspace_without_config_uses_defaults() {
    let temp_dir = TempDir::new().unwrap();
    let config = with_env(&[], || ConfigLoader::load(temp_dir.path())).unwrap();
    assert_eq!(config.patch.tag_duplicates, TagDuplicatePolicy::Dedupe);
    assert_eq!(config.storage.store_path, PathBuf::from(".appmerge/store"));
}

#[test]
fn test_workspace_env_file_overrides_base() {
    let temp_dir = TempDir::new().unwrap();
    let config_dir = temp_dir.path().join("config");
    std::fs::create_dir_all(&config_dir).unwrap();
    std::fs::write(
        config_dir.join("config.toml"),
        "[storage]\nstore_path = \"base-store\"\n",
    )
    .unwrap();
    std::fs::write(
        config_dir.join("staging.toml"),
        "[patch]\ntag_duplicates = \"preserve\"\n",
    )
    .unwrap();

    let config = with_env(&[("APPMERGE_ENV", "staging")], || {
        ConfigLoader::load(temp_dir.path())
    })
    .unwrap();
    assert_eq!(config.storage.store_path, PathBuf::from("base-store"));
    assert_eq!(config.patch.tag_duplicates, TagDuplicatePolicy::Preserve);
}

#[test]
fn test_environment_overrides_file() {
    let temp_dir = TempDir::new().unwrap();
    let config_file = temp_dir.path().join("appmerge.toml");
    std::fs::write(&config_file, "[patch]\ntag_duplicates = \"dedupe\"\n").unwrap();

    let config = with_env(&[("APPMERGE__PATCH__TAG_DUPLICATES", "preserve")], || {
        ConfigLoader::load_from_file(&config_file)
    })
    .unwrap();
    assert_eq!(config.patch.tag_duplicates, TagDuplicatePolicy::Preserve);
}

#[test]
fn test_invalid_logging_section_is_rejected() {
    let temp_dir = TempDir::new().unwrap();
    let config_file = temp_dir.path().join("appmerge.toml");
    std::fs::write(&config_file, "[logging]\noutput = \"syslog\"\n").unwrap();

    let err = with_env(&[], || ConfigLoader::load_from_file(&config_file)).unwrap_err();
    match err {
        ApiError::ConfigError(msg) => assert!(msg.contains("Invalid log output"), "{}", msg),
        other => panic!("expected config error, got {}", other),
    }
}

#[test]
fn test_missing_file_is_config_error() {
    let err = ConfigLoader::load_from_file(&PathBuf::from("/nonexistent/appmerge.toml")).unwrap_err();
    assert!(matches!(err, ApiError::ConfigError(_)));
}
