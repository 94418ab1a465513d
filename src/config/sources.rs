//! Configuration sources, in precedence order.

pub mod global_file;
pub mod workspace_file;

use config::builder::DefaultState;
use config::{ConfigBuilder, Environment};

/// Add `APPMERGE__SECTION__KEY` environment overrides (highest precedence).
pub fn add_environment(builder: ConfigBuilder<DefaultState>) -> ConfigBuilder<DefaultState> {
    builder.add_source(
        Environment::with_prefix("APPMERGE")
            .prefix_separator("__")
            .separator("__"),
    )
}
