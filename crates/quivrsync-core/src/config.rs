//! Configuration module for quivrsync.
//!
//! Provides typed configuration structs that map to the YAML configuration
//! file, with loading, validation, and defaults. The API key can be supplied
//! through the file or via the `QUIVRSYNC_API_KEY` environment variable
//! (the environment wins).

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// Environment variable that overrides `api.key` from the config file.
pub const API_KEY_ENV: &str = "QUIVRSYNC_API_KEY";

/// Top-level configuration for quivrsync.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    pub api: ApiConfig,
    pub vault: VaultConfig,
    pub sync: SyncConfig,
    pub logging: LoggingConfig,
}

/// Remote knowledge-service settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Bearer token for the knowledge service. `None` until configured.
    pub key: Option<String>,
    /// Base URL of the knowledge service REST API.
    pub base_url: String,
}

/// Local vault settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VaultConfig {
    /// Root directory of the markdown vault to synchronize.
    pub root: PathBuf,
}

/// Synchronization settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SyncConfig {
    /// Name of the destination folder in the knowledge base.
    pub folder_name: String,
}

/// Logging / tracing settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level: `trace`, `debug`, `info`, `warn`, or `error`.
    pub level: String,
}

impl Config {
    /// Load configuration from a YAML file at `path`, then apply
    /// environment overrides.
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let mut config: Config = serde_yaml::from_str(&content)?;
        config.apply_env();
        Ok(config)
    }

    /// Try to load from `path`; fall back to defaults (plus environment
    /// overrides) on any error.
    pub fn load_or_default(path: &Path) -> Self {
        Self::load(path).unwrap_or_else(|_| {
            let mut config = Config::default();
            config.apply_env();
            config
        })
    }

    /// Platform-appropriate default path for the configuration file.
    ///
    /// Typically `$XDG_CONFIG_HOME/quivrsync/config.yaml` on Linux.
    pub fn default_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("~/.config"))
            .join("quivrsync")
            .join("config.yaml")
    }

    /// Applies environment variable overrides to the loaded configuration.
    fn apply_env(&mut self) {
        if let Ok(key) = std::env::var(API_KEY_ENV) {
            if !key.is_empty() {
                self.api.key = Some(key);
            }
        }
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            key: None,
            base_url: "https://api.quivr.app".to_string(),
        }
    }
}

impl Default for VaultConfig {
    fn default() -> Self {
        Self {
            root: dirs::home_dir()
                .unwrap_or_else(|| PathBuf::from("~"))
                .join("vault"),
        }
    }
}

impl Default for SyncConfig {
    fn default() -> Self {
        Self {
            folder_name: "obsidian-sync".to_string(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
        }
    }
}

// ---------------------------------------------------------------------------
// Validation
// ---------------------------------------------------------------------------

/// A single validation error found in the configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    /// Dotted path to the offending field, e.g. `"sync.folder_name"`.
    pub field: String,
    /// Human-readable explanation.
    pub message: String,
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// Valid values for `logging.level`.
const VALID_LOG_LEVELS: &[&str] = &["trace", "debug", "info", "warn", "error"];

impl Config {
    /// Validate the configuration and return all errors found.
    ///
    /// An empty vector means the configuration is valid.
    pub fn validate(&self) -> Vec<ValidationError> {
        let mut errors = Vec::new();

        match &self.api.key {
            None => errors.push(ValidationError {
                field: "api.key".into(),
                message: format!("must be set (or export {API_KEY_ENV})"),
            }),
            Some(key) if key.trim().is_empty() => errors.push(ValidationError {
                field: "api.key".into(),
                message: "must not be empty".into(),
            }),
            Some(_) => {}
        }

        if self.api.base_url.is_empty() {
            errors.push(ValidationError {
                field: "api.base_url".into(),
                message: "must not be empty".into(),
            });
        } else if !self.api.base_url.starts_with("http://")
            && !self.api.base_url.starts_with("https://")
        {
            errors.push(ValidationError {
                field: "api.base_url".into(),
                message: "must start with http:// or https://".into(),
            });
        }

        if self.vault.root.as_os_str().is_empty() {
            errors.push(ValidationError {
                field: "vault.root".into(),
                message: "must not be empty".into(),
            });
        }

        if self.sync.folder_name.trim().is_empty() {
            errors.push(ValidationError {
                field: "sync.folder_name".into(),
                message: "must not be empty".into(),
            });
        }

        if !VALID_LOG_LEVELS.contains(&self.logging.level.as_str()) {
            errors.push(ValidationError {
                field: "logging.level".into(),
                message: format!("must be one of {VALID_LOG_LEVELS:?}"),
            });
        }

        errors
    }
}
