//! Global config file source: $XDG_CONFIG_HOME/appmerge/config.toml

use config::builder::DefaultState;
use config::ConfigBuilder;
use config::File;
use std::path::PathBuf;
use tracing::debug;

/// Path to global config file.
pub fn global_config_path() -> Option<PathBuf> {
    directories::BaseDirs::new()
        .map(|dirs| dirs.config_dir().join("appmerge").join("config.toml"))
}

/// Add global config file source to builder if it exists.
pub fn add_to_builder(builder: ConfigBuilder<DefaultState>) -> ConfigBuilder<DefaultState> {
    match global_config_path() {
        Some(path) if path.exists() => {
            debug!(config_path = %path.display(), "Using global configuration file");
            builder.add_source(File::from(path).required(false))
        }
        _ => builder,
    }
}
