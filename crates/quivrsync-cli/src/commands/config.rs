//! Config command - View and manage quivrsync configuration
//!
//! Provides the `quivrsync config` CLI command which:
//! 1. Shows the current configuration (YAML or JSON)
//! 2. Sets individual configuration values via dot-notation keys,
//!    persisting the file on every change
//! 3. Validates the configuration file and reports errors
//! 4. Prints the configuration file path

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Subcommand;
use quivrsync_core::domain::errors::DomainError;
use tracing::info;

use crate::commands::resolve_config_path;
use crate::output::{get_formatter, OutputFormat};

/// Config subcommands
#[derive(Debug, Subcommand)]
pub enum ConfigCommand {
    /// Display current configuration
    Show,
    /// Set a configuration value
    Set {
        /// Configuration key (e.g., "api.key")
        key: String,
        /// New value
        value: String,
    },
    /// Validate configuration file
    Validate,
    /// Print the configuration file path
    Path,
}

impl ConfigCommand {
    /// Execute the config command
    pub async fn execute(&self, config_path: Option<&str>, format: OutputFormat) -> Result<()> {
        let config_path = resolve_config_path(config_path);
        match self {
            ConfigCommand::Show => self.execute_show(&config_path, format),
            ConfigCommand::Set { key, value } => {
                self.execute_set(&config_path, key, value, format)
            }
            ConfigCommand::Validate => self.execute_validate(&config_path, format),
            ConfigCommand::Path => {
                let formatter = get_formatter(format.is_json());
                if format.is_json() {
                    formatter.print_json(&serde_json::json!({
                        "config_path": config_path.display().to_string(),
                    }));
                } else {
                    println!("{}", config_path.display());
                }
                Ok(())
            }
        }
    }

    /// Show current configuration
    fn execute_show(&self, config_path: &PathBuf, format: OutputFormat) -> Result<()> {
        use quivrsync_core::config::Config;

        let formatter = get_formatter(format.is_json());
        let config = Config::load_or_default(config_path);

        info!(config_path = %config_path.display(), "Showing configuration");

        if format.is_json() {
            let mut json =
                serde_json::to_value(&config).context("Failed to serialize configuration")?;
            redact_key(&mut json);
            formatter.print_json(&json);
        } else {
            formatter.success(&format!("Configuration ({})", config_path.display()));
            formatter.info("");

            let mut display = config.clone();
            if display.api.key.is_some() {
                display.api.key = Some("<redacted>".to_string());
            }
            let yaml =
                serde_yaml::to_string(&display).context("Failed to serialize configuration")?;
            for line in yaml.lines() {
                formatter.info(line);
            }
        }

        Ok(())
    }

    /// Set a configuration value using dot-notation, then persist the file.
    fn execute_set(
        &self,
        config_path: &PathBuf,
        key: &str,
        value: &str,
        format: OutputFormat,
    ) -> Result<()> {
        use quivrsync_core::config::Config;

        let formatter = get_formatter(format.is_json());
        let mut config = Config::load_or_default(config_path);

        info!(key = %key, "Setting configuration value");

        if let Err(e) = apply_config_value(&mut config, key, value) {
            formatter.error(&format!("Failed to set '{}': {}", key, e));
            formatter.info("");
            formatter.info("Supported keys:");
            formatter.info("  api.key           - Knowledge service API key");
            formatter.info("  api.base_url      - Knowledge service base URL");
            formatter.info("  vault.root        - Vault root directory");
            formatter.info("  sync.folder_name  - Destination folder name");
            formatter.info("  logging.level     - trace|debug|info|warn|error");
            return Err(e);
        }

        // Reject values that would leave the file invalid. A missing API key
        // is tolerated here: it may legitimately stay unset in the file and
        // come from the environment instead.
        let errors: Vec<_> = config
            .validate()
            .into_iter()
            .filter(|e| e.field != "api.key")
            .collect();
        if !errors.is_empty() {
            let messages: Vec<String> = errors.iter().map(|e| e.to_string()).collect();
            formatter.error(&format!(
                "Invalid value for '{}': {}",
                key,
                messages.join("; ")
            ));
            return Err(DomainError::ValidationFailed(messages.join("; ")).into());
        }

        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent).context("Failed to create configuration directory")?;
        }
        let yaml = serde_yaml::to_string(&config).context("Failed to serialize configuration")?;
        std::fs::write(config_path, &yaml).context("Failed to write configuration file")?;

        if format.is_json() {
            formatter.print_json(&serde_json::json!({
                "success": true,
                "key": key,
                "config_path": config_path.display().to_string(),
            }));
        } else {
            formatter.success(&format!("Set {}", key));
            formatter.info(&format!("Saved to {}", config_path.display()));
        }

        Ok(())
    }

    /// Validate configuration file
    fn execute_validate(&self, config_path: &PathBuf, format: OutputFormat) -> Result<()> {
        use quivrsync_core::config::Config;

        let formatter = get_formatter(format.is_json());

        let config = match Config::load(config_path) {
            Ok(cfg) => cfg,
            Err(e) => {
                if !config_path.exists() {
                    formatter.info(&format!(
                        "Configuration file not found at {}",
                        config_path.display()
                    ));
                    formatter.info(
                        "Using defaults. Run 'quivrsync config set <key> <value>' to create one.",
                    );
                } else {
                    formatter.error(&format!("Failed to parse configuration: {}", e));
                }
                return Ok(());
            }
        };

        let errors = config.validate();

        if format.is_json() {
            let messages: Vec<String> = errors.iter().map(|e| e.to_string()).collect();
            formatter.print_json(&serde_json::json!({
                "valid": errors.is_empty(),
                "config_path": config_path.display().to_string(),
                "errors": messages,
            }));
        } else if errors.is_empty() {
            formatter.success("Configuration is valid");
        } else {
            formatter.error(&format!(
                "Configuration has {} error{}:",
                errors.len(),
                if errors.len() == 1 { "" } else { "s" }
            ));
            for error in &errors {
                formatter.detail(&error.field, &error.message);
            }
        }

        Ok(())
    }
}

/// Replaces the API key with a placeholder in serialized JSON output.
fn redact_key(json: &mut serde_json::Value) {
    if let Some(key) = json.pointer_mut("/api/key") {
        if !key.is_null() {
            *key = serde_json::Value::String("<redacted>".to_string());
        }
    }
}

/// Apply a dot-notation key/value pair to a Config struct
///
/// Supported keys: api.key, api.base_url, vault.root, sync.folder_name,
/// logging.level.
fn apply_config_value(
    config: &mut quivrsync_core::config::Config,
    key: &str,
    value: &str,
) -> Result<()> {
    match key {
        "api.key" => {
            config.api.key = if value.is_empty() {
                None
            } else {
                Some(value.to_string())
            };
        }
        "api.base_url" => {
            config.api.base_url = value.to_string();
        }
        "vault.root" => {
            config.vault.root = PathBuf::from(value);
        }
        "sync.folder_name" => {
            config.sync.folder_name = value.to_string();
        }
        "logging.level" => {
            config.logging.level = value.to_string();
        }
        _ => {
            anyhow::bail!("Unknown configuration key: '{}'", key);
        }
    }

    Ok(())
}
