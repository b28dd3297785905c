//! CLI command implementations

use anyhow::{Context, Result};
use std::path::PathBuf;
use vitrine::config::AppConfig;

pub mod check;
pub mod serve;

// Re-export command functions for convenience
pub use check::check;
pub use serve::serve;

/// Load configuration from a file when given, otherwise from the environment
pub(crate) fn load_config(path: Option<PathBuf>) -> Result<AppConfig> {
    match path {
        Some(path) => AppConfig::from_file(&path)
            .with_context(|| format!("failed to load config from {}", path.display())),
        None => AppConfig::from_env().context("failed to load config from environment"),
    }
}
