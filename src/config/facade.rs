//! Configuration loader facade.

use crate::config::merge_policy::builder_with_defaults;
use crate::config::sources::{self, global_file, workspace_file};
use crate::config::AppmergeConfig;
use crate::error::ApiError;
use config::File;
use std::path::Path;

/// Loads [`AppmergeConfig`] from layered sources
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration for a workspace: defaults, global file, workspace files, environment.
    pub fn load(workspace_root: &Path) -> Result<AppmergeConfig, ApiError> {
        let builder = builder_with_defaults()?;
        let builder = global_file::add_to_builder(builder);
        let builder = workspace_file::add_to_builder(builder, workspace_root);
        let builder = sources::add_environment(builder);
        Self::finish(builder.build()?.try_deserialize()?)
    }

    /// Load configuration from an explicit file; environment overrides still apply.
    pub fn load_from_file(path: &Path) -> Result<AppmergeConfig, ApiError> {
        if !path.exists() {
            return Err(ApiError::ConfigError(format!(
                "Configuration file not found: {}",
                path.display()
            )));
        }
        let builder = builder_with_defaults()?.add_source(File::from(path));
        let builder = sources::add_environment(builder);
        Self::finish(builder.build()?.try_deserialize()?)
    }

    fn finish(config: AppmergeConfig) -> Result<AppmergeConfig, ApiError> {
        config.validate().map_err(|errors| {
            let error_msgs: Vec<String> = errors.iter().map(|e| e.to_string()).collect();
            ApiError::ConfigError(format!(
                "Configuration validation failed:\n{}",
                error_msgs.join("\n")
            ))
        })?;
        Ok(config)
    }
}
