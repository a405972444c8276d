//! Sync command - one-shot vault synchronization
//!
//! Provides the `quivrsync sync` CLI command which:
//! 1. Loads and validates configuration
//! 2. Creates the adapters (Quivr API client, vault filesystem)
//! 3. Runs the SyncEngine and displays results

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Result;
use clap::Args;
use tracing::info;

use crate::commands::resolve_config_path;
use crate::output::{get_formatter, OutputFormat};

/// Sync command with clap options
#[derive(Debug, Args)]
pub struct SyncCommand {
    /// Vault directory to sync (overrides vault.root from the config)
    #[arg(long)]
    pub vault: Option<PathBuf>,

    /// List what would be uploaded without contacting the service
    #[arg(long)]
    pub dry_run: bool,
}

impl SyncCommand {
    /// Execute the sync command
    ///
    /// Wires up the adapters, creates the SyncEngine, runs sync(), and
    /// displays the result summary.
    pub async fn execute(&self, config_path: Option<&str>, format: OutputFormat) -> Result<()> {
        use quivrsync_api::client::QuivrClient;
        use quivrsync_api::store::QuivrKnowledgeStore;
        use quivrsync_core::config::{Config, API_KEY_ENV};
        use quivrsync_core::domain::errors::DomainError;
        use quivrsync_core::ports::local_vault::LocalVault;
        use quivrsync_sync::engine::SyncEngine;
        use quivrsync_sync::vault::VaultAdapter;

        let formatter = get_formatter(format.is_json());

        // Step 1: Load config
        let config_path = resolve_config_path(config_path);
        let config = Config::load_or_default(&config_path);
        info!(config_path = %config_path.display(), "Loaded configuration");

        let vault_root = self
            .vault
            .clone()
            .unwrap_or_else(|| config.vault.root.clone());
        let vault = Arc::new(VaultAdapter::new(vault_root.clone()));

        // Step 2: Handle --dry-run (no credentials or network needed)
        if self.dry_run {
            let documents = vault.list_documents().await?;

            if format.is_json() {
                let names: Vec<&str> = documents.iter().map(|d| d.file_name.as_str()).collect();
                formatter.print_json(&serde_json::json!({
                    "dry_run": true,
                    "vault": vault_root.display().to_string(),
                    "folder": config.sync.folder_name,
                    "documents": names,
                }));
            } else {
                formatter.success(&format!(
                    "Dry run: {} document{} would upload to '{}'",
                    documents.len(),
                    if documents.len() == 1 { "" } else { "s" },
                    config.sync.folder_name
                ));
                for document in &documents {
                    formatter.info(&document.file_name);
                }
            }
            return Ok(());
        }

        // Step 3: Validate configuration (the API key must be present)
        let errors = config.validate();
        if !errors.is_empty() {
            formatter.error("Configuration is incomplete:");
            for error in &errors {
                formatter.detail(&error.field, &error.message);
            }
            formatter.info("Run 'quivrsync config set api.key <key>' first.");
            let messages: Vec<String> = errors.iter().map(|e| e.to_string()).collect();
            let err = if errors.iter().all(|e| e.field == "api.key") {
                DomainError::MissingApiKey(format!("set api.key or export {}", API_KEY_ENV))
            } else {
                DomainError::ValidationFailed(messages.join("; "))
            };
            return Err(err.into());
        }
        let api_key = config.api.key.as_deref().unwrap_or_default();

        // Step 4: Create adapters and engine
        let client = QuivrClient::with_base_url(api_key, &config.api.base_url);
        let store = Arc::new(QuivrKnowledgeStore::new(client));
        let engine = SyncEngine::new(store, vault, config.sync.folder_name.clone());

        // Step 5: Run one sync invocation
        formatter.info("Starting synchronization...");
        let result = engine.sync().await?;

        // Step 6: Display results
        if format.is_json() {
            formatter.print_json(&serde_json::json!({
                "files_uploaded": result.files_uploaded,
                "errors": result.errors,
                "duration_ms": result.duration_ms,
            }));
        } else {
            let duration_display = if result.duration_ms >= 1000 {
                format!("{:.1}s", result.duration_ms as f64 / 1000.0)
            } else {
                format!("{}ms", result.duration_ms)
            };

            if result.files_uploaded == 0 && result.errors.is_empty() {
                formatter.success("Nothing to upload");
            } else {
                formatter.success(&format!("Sync completed in {}", duration_display));
            }

            if result.files_uploaded > 0 {
                formatter.detail("Uploaded", &result.files_uploaded.to_string());
            }

            if !result.errors.is_empty() {
                formatter.error(&format!(
                    "{} error{} occurred:",
                    result.errors.len(),
                    if result.errors.len() == 1 { "" } else { "s" }
                ));
                for err in &result.errors {
                    formatter.info(&format!("  - {}", err));
                }
            }
        }

        Ok(())
    }
}
