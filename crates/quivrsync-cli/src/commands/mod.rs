//! CLI command implementations

pub mod config;
pub mod sync;

use std::path::PathBuf;

use quivrsync_core::config::Config;

/// Resolves the config file path: `--config` override or the platform default.
pub fn resolve_config_path(override_path: Option<&str>) -> PathBuf {
    override_path
        .map(PathBuf::from)
        .unwrap_or_else(Config::default_path)
}
