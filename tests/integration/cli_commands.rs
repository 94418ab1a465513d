//! Integration tests for CLI command routing

use super::test_utils::sample_application;
use appmerge::application::Application;
use appmerge::cli::{Commands, RunContext};
use appmerge::config::AppmergeConfig;
use appmerge::error::ApiError;
use appmerge::patch::TagDuplicatePolicy;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

fn write_json(dir: &Path, name: &str, value: &impl serde::Serialize) -> PathBuf {
    let path = dir.join(name);
    std::fs::write(&path, serde_json::to_string(value).unwrap()).unwrap();
    path
}

fn context(workspace: &Path) -> RunContext {
    RunContext::with_config(workspace.to_path_buf(), AppmergeConfig::default())
}

#[test]
fn test_apply_does_not_open_store() {
    let workspace = TempDir::new().unwrap();
    let app_file = write_json(workspace.path(), "app.json", &sample_application());
    let patch_file = workspace.path().join("patch.json");
    std::fs::write(
        &patch_file,
        r#"{"name": "Patched", "tags": [{"operation": "REMOVE", "tags": ["admin"]}]}"#,
    )
    .unwrap();

    let output = context(workspace.path())
        .execute(&Commands::Apply {
            application: app_file,
            patch: patch_file,
        })
        .unwrap();

    let patched: Application = serde_json::from_str(&output).unwrap();
    assert_eq!(patched.name, "Patched");
    assert_eq!(patched.tag_ids(), vec!["internal"]);
    assert!(!workspace.path().join(".appmerge").exists());
}

#[test]
fn test_import_patch_show_round_trip() {
    let workspace = TempDir::new().unwrap();
    let ctx = context(workspace.path());
    assert_eq!(ctx.config().patch.tag_duplicates, TagDuplicatePolicy::Dedupe);
    let app_file = write_json(workspace.path(), "app.json", &sample_application());

    let out = ctx
        .execute(&Commands::Import {
            application: app_file,
        })
        .unwrap();
    assert_eq!(out, "Imported application console");

    let patch_file = workspace.path().join("patch.toml");
    std::fs::write(
        &patch_file,
        r#"
templateId = "spa"

[[tags]]
operation = "ADD"
tags = ["ops"]
"#,
    )
    .unwrap();
    ctx.execute(&Commands::Patch {
        id: "console".to_string(),
        patch: patch_file,
    })
    .unwrap();

    let shown: Application = serde_json::from_str(
        &ctx.execute(&Commands::Show {
            id: "console".to_string(),
        })
        .unwrap(),
    )
    .unwrap();
    assert_eq!(shown.template_id.as_deref(), Some("spa"));
    assert_eq!(shown.tag_ids(), vec!["internal", "admin", "ops"]);

    let listing = ctx
        .execute(&Commands::List {
            format: "text".to_string(),
        })
        .unwrap();
    assert!(listing.contains("console"));
}

#[test]
fn test_show_missing_application() {
    let workspace = TempDir::new().unwrap();
    let err = context(workspace.path())
        .execute(&Commands::Show {
            id: "ghost".to_string(),
        })
        .unwrap_err();
    assert!(matches!(err, ApiError::ApplicationNotFound(id) if id == "ghost"));
}

#[test]
fn test_delete_command() {
    let workspace = TempDir::new().unwrap();
    let ctx = context(workspace.path());
    let app_file = write_json(workspace.path(), "app.json", &sample_application());
    ctx.execute(&Commands::Import {
        application: app_file,
    })
    .unwrap();

    let out = ctx
        .execute(&Commands::Delete {
            id: "console".to_string(),
        })
        .unwrap();
    assert_eq!(out, "Deleted application console");

    let listing = ctx
        .execute(&Commands::List {
            format: "json".to_string(),
        })
        .unwrap();
    assert_eq!(listing.trim(), "[]");
}
