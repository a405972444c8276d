//! One-shot synchronization engine
//!
//! The [`SyncEngine`] sequences a single sync invocation:
//!
//! 1. **Enumerate** - local documents from the vault, items from the store
//! 2. **Reconcile** - reuse the destination folder or create it
//! 3. **Upload loop** - one file at a time, in enumeration order, each
//!    attempt isolated so one failure does not abort the batch
//! 4. **Terminal** - return a [`SyncResult`] summary
//!
//! ## Failure semantics
//!
//! Vault enumeration, remote listing, and folder resolution failures are
//! fatal to the invocation and return [`SyncError`]; no uploads are attempted
//! after a fatal step. Per-file failures are collected in
//! [`SyncResult::errors`]. Overlapping invocations are rejected with
//! [`SyncError::AlreadyRunning`].

use std::sync::Arc;
use std::time::Instant;

use tokio::sync::Mutex;
use tracing::{debug, info, warn};

use quivrsync_core::domain::knowledge::{RemoteItem, UploadRequest};
use quivrsync_core::ports::knowledge_store::KnowledgeStore;
use quivrsync_core::ports::local_vault::{LocalVault, VaultDocument};

use crate::reconcile::find_folder;
use crate::SyncError;

/// Summary of a completed synchronization invocation
#[derive(Debug, Clone)]
pub struct SyncResult {
    /// Number of documents uploaded successfully
    pub files_uploaded: u32,
    /// Per-file errors encountered during the upload loop (non-fatal)
    pub errors: Vec<String>,
    /// Wall-clock duration of the invocation in milliseconds
    pub duration_ms: u64,
}

/// One-shot vault-to-knowledge-base synchronization engine
///
/// ## Dependencies
///
/// - `store`: remote operations (list, create folder, upload)
/// - `vault`: local document enumeration and reading
/// - `folder_name`: destination folder in the knowledge base
///
/// Uploads are issued strictly one at a time; there is deliberately no
/// concurrent upload and no retry policy.
pub struct SyncEngine {
    /// Remote knowledge store
    store: Arc<dyn KnowledgeStore>,
    /// Local vault
    vault: Arc<dyn LocalVault>,
    /// Destination folder name
    folder_name: String,
    /// Reentrancy guard: overlapping invocations are rejected, not queued
    guard: Mutex<()>,
}

impl SyncEngine {
    /// Creates a new `SyncEngine` with the given dependencies
    ///
    /// # Arguments
    /// * `store` - Remote knowledge-base operations
    /// * `vault` - Local document source
    /// * `folder_name` - Name of the destination folder
    pub fn new(
        store: Arc<dyn KnowledgeStore>,
        vault: Arc<dyn LocalVault>,
        folder_name: impl Into<String>,
    ) -> Self {
        Self {
            store,
            vault,
            folder_name: folder_name.into(),
            guard: Mutex::new(()),
        }
    }

    /// Runs one sync invocation
    ///
    /// # Returns
    /// A [`SyncResult`] summary on completion, or a [`SyncError`] when a
    /// fatal step (guard, enumeration, listing, folder resolution) fails.
    pub async fn sync(&self) -> Result<SyncResult, SyncError> {
        let _guard = self
            .guard
            .try_lock()
            .map_err(|_| SyncError::AlreadyRunning)?;

        let started = Instant::now();
        info!(folder = %self.folder_name, "starting sync");

        let documents = self
            .vault
            .list_documents()
            .await
            .map_err(SyncError::Vault)?;
        let items = self.store.list_items().await.map_err(SyncError::Listing)?;

        let folder_id = self.resolve_folder(&items).await?;
        info!(
            folder_id = %folder_id,
            documents = documents.len(),
            "destination folder resolved"
        );

        let mut result = SyncResult {
            files_uploaded: 0,
            errors: Vec::new(),
            duration_ms: 0,
        };

        for document in &documents {
            match self.upload_document(&folder_id, document).await {
                Ok(item) => {
                    debug!(file = %document.file_name, id = %item.id, "uploaded");
                    result.files_uploaded += 1;
                }
                Err(err) => {
                    warn!(
                        file = %document.file_name,
                        error = %err,
                        "upload failed, continuing with remaining files"
                    );
                    result.errors.push(format!("{}: {err:#}", document.file_name));
                }
            }
        }

        result.duration_ms = started.elapsed().as_millis() as u64;
        info!(
            uploaded = result.files_uploaded,
            errors = result.errors.len(),
            duration_ms = result.duration_ms,
            "sync complete"
        );
        Ok(result)
    }

    /// Resolves the destination folder id: reuse an existing folder with the
    /// configured name, or create one at the top level.
    async fn resolve_folder(&self, items: &[RemoteItem]) -> Result<String, SyncError> {
        if let Some(existing) = find_folder(items, &self.folder_name) {
            debug!(id = %existing.id, "reusing existing folder");
            return Ok(existing.id.clone());
        }

        debug!(name = %self.folder_name, "folder not found, creating");
        self.store
            .create_folder(&self.folder_name)
            .await
            .map_err(SyncError::FolderResolution)
    }

    /// Reads one document and uploads it into the resolved folder.
    ///
    /// Any error here is a per-file failure; the caller records it and moves
    /// on to the next document.
    async fn upload_document(
        &self,
        folder_id: &str,
        document: &VaultDocument,
    ) -> anyhow::Result<RemoteItem> {
        let bytes = self.vault.read_document(document).await?;
        let request = UploadRequest::new(folder_id, document.file_name.clone(), bytes);
        self.store.upload_file(&request).await
    }
}
