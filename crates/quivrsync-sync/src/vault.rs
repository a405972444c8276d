//! Local vault adapter (secondary/driven adapter)
//!
//! Implements [`LocalVault`] over the real filesystem with `tokio::fs`.
//!
//! ## Design Decisions
//!
//! - **Flattening**: the walk is recursive but the result carries only bare
//!   file names; the destination folder has no tree structure.
//! - **Deterministic order**: documents are sorted by path so repeated
//!   invocations upload in the same order.
//! - **Hidden directories**: dot-directories (e.g. `.obsidian`) hold editor
//!   configuration, not documents, and are skipped.

use std::path::{Path, PathBuf};

use anyhow::Context;
use quivrsync_core::domain::errors::DomainError;
use quivrsync_core::ports::local_vault::{LocalVault, VaultDocument};
use tracing::{debug, instrument};

/// Adapter that bridges the [`LocalVault`] port to a directory of markdown
/// files.
#[derive(Debug, Clone)]
pub struct VaultAdapter {
    /// Root directory of the vault
    root: PathBuf,
}

impl VaultAdapter {
    /// Create a new adapter rooted at the given directory.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Returns the vault root.
    pub fn root(&self) -> &Path {
        &self.root
    }
}

/// Returns true for paths with a (case-insensitive) `.md` extension.
fn is_markdown(path: &Path) -> bool {
    path.extension()
        .map(|ext| ext.eq_ignore_ascii_case("md"))
        .unwrap_or(false)
}

#[async_trait::async_trait]
impl LocalVault for VaultAdapter {
    #[instrument(skip(self), fields(root = %self.root.display()))]
    async fn list_documents(&self) -> anyhow::Result<Vec<VaultDocument>> {
        let metadata = tokio::fs::metadata(&self.root)
            .await
            .map_err(|_| DomainError::InvalidVaultRoot(self.root.display().to_string()))?;
        if !metadata.is_dir() {
            return Err(DomainError::InvalidVaultRoot(format!(
                "{} is not a directory",
                self.root.display()
            ))
            .into());
        }

        let mut documents = Vec::new();
        let mut pending = vec![self.root.clone()];

        while let Some(dir) = pending.pop() {
            let mut entries = tokio::fs::read_dir(&dir)
                .await
                .with_context(|| format!("Failed to read directory {}", dir.display()))?;

            while let Some(entry) = entries
                .next_entry()
                .await
                .with_context(|| format!("Failed to walk directory {}", dir.display()))?
            {
                let path = entry.path();
                let name = entry.file_name().to_string_lossy().into_owned();
                let file_type = entry
                    .file_type()
                    .await
                    .with_context(|| format!("Failed to stat {}", path.display()))?;

                if file_type.is_dir() {
                    if !name.starts_with('.') {
                        pending.push(path);
                    }
                } else if file_type.is_file() && is_markdown(&path) {
                    documents.push(VaultDocument {
                        file_name: name,
                        path,
                    });
                }
            }
        }

        documents.sort_by(|a, b| a.path.cmp(&b.path));
        debug!(count = documents.len(), "vault enumeration complete");
        Ok(documents)
    }

    #[instrument(skip(self, document), fields(file = %document.file_name))]
    async fn read_document(&self, document: &VaultDocument) -> anyhow::Result<Vec<u8>> {
        let bytes = tokio::fs::read(&document.path)
            .await
            .with_context(|| format!("Failed to read {}", document.path.display()))?;
        debug!(bytes = bytes.len(), "document read complete");
        Ok(bytes)
    }
}
