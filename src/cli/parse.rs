//! CLI parse: clap types for appmerge. No behavior; definitions only.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// appmerge CLI - sparse patch merging for application records
#[derive(Parser)]
#[command(name = "appmerge")]
#[command(about = "Merge sparse patches into application records")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Workspace root directory
    #[arg(long, default_value = ".")]
    pub workspace: PathBuf,

    /// Configuration file path (overrides default config loading)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(long, default_value = "false")]
    pub verbose: bool,

    /// Disable logging entirely
    #[arg(long, default_value = "false")]
    pub quiet: bool,

    /// Log level (trace, debug, info, warn, error, off)
    #[arg(long)]
    pub log_level: Option<String>,

    /// Log format (json, text)
    #[arg(long)]
    pub log_format: Option<String>,

    /// Log output (stdout, stderr, file)
    #[arg(long)]
    pub log_output: Option<String>,

    /// Log file path (if output is "file")
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Merge a patch into an application file without touching the store
    Apply {
        /// Application file (JSON or TOML)
        #[arg(long)]
        application: PathBuf,
        /// Patch file (JSON or TOML)
        #[arg(long)]
        patch: PathBuf,
    },
    /// Store an application read from a file
    Import {
        /// Application file (JSON or TOML)
        #[arg(long)]
        application: PathBuf,
    },
    /// Show a stored application
    Show {
        /// Application identifier
        id: String,
    },
    /// List stored applications
    List {
        /// Output format (text or json)
        #[arg(long, default_value = "text")]
        format: String,
    },
    /// Merge a patch into a stored application and persist it
    Patch {
        /// Application identifier
        id: String,
        /// Patch file (JSON or TOML)
        #[arg(long)]
        patch: PathBuf,
    },
    /// Delete a stored application
    Delete {
        /// Application identifier
        id: String,
    },
}
