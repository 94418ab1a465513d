//! Configuration System
//!
//! Layered configuration for the patch engine, the application store, and logging.
//! Sources, lowest to highest precedence: built-in defaults, the global config file,
//! workspace config files, then `APPMERGE__*` environment variables.

use crate::logging::LoggingConfig;
use crate::patch::TagDuplicatePolicy;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

mod facade;
mod merge_policy;
mod sources;

pub use facade::ConfigLoader;

/// Root configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppmergeConfig {
    /// Patch engine settings
    #[serde(default)]
    pub patch: PatchConfig,

    /// Application store settings
    #[serde(default)]
    pub storage: StorageConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Patch engine settings
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PatchConfig {
    /// How repeated tag identifiers are handled: "dedupe" or "preserve"
    #[serde(default)]
    pub tag_duplicates: TagDuplicatePolicy,
}

/// Application store settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorageConfig {
    /// Sled database directory; relative paths resolve against the workspace root
    #[serde(default = "default_store_path")]
    pub store_path: PathBuf,
}

fn default_store_path() -> PathBuf {
    PathBuf::from(".appmerge/store")
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            store_path: default_store_path(),
        }
    }
}

impl StorageConfig {
    /// Resolve the store path against `workspace_root`
    pub fn resolve_store_path(&self, workspace_root: &Path) -> PathBuf {
        if self.store_path.is_absolute() {
            self.store_path.clone()
        } else {
            workspace_root.join(&self.store_path)
        }
    }
}

/// Configuration validation errors
#[derive(Debug, Clone)]
pub enum ConfigValidationError {
    Storage(String),
    Logging(String),
}

impl std::fmt::Display for ConfigValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigValidationError::Storage(msg) => write!(f, "Storage: {}", msg),
            ConfigValidationError::Logging(msg) => write!(f, "Logging: {}", msg),
        }
    }
}

impl std::error::Error for ConfigValidationError {}

impl AppmergeConfig {
    /// Validate the entire configuration, reporting every problem found
    pub fn validate(&self) -> Result<(), Vec<ConfigValidationError>> {
        let mut errors = Vec::new();

        if self.storage.store_path.as_os_str().is_empty() {
            errors.push(ConfigValidationError::Storage(
                "Store path cannot be empty".to_string(),
            ));
        }

        if let Err(e) = self.logging.validate() {
            errors.push(ConfigValidationError::Logging(e));
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}
