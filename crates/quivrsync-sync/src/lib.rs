//! quivrsync sync - Vault synchronization engine
//!
//! Provides:
//! - Folder reconciliation (reuse-or-create for the destination folder)
//! - Local vault enumeration (flattened markdown documents)
//! - The one-shot sync orchestrator with per-file error isolation
//!
//! ## Modules
//!
//! - [`engine`] - Sync engine sequencing enumeration, reconciliation, uploads
//! - [`reconcile`] - Destination folder lookup
//! - [`vault`] - Local filesystem adapter for the vault port

pub mod engine;
pub mod reconcile;
pub mod vault;

use thiserror::Error;

/// Errors that are fatal to a single sync invocation
///
/// Per-file upload failures are not represented here; they are collected in
/// [`engine::SyncResult::errors`] and never abort the batch.
#[derive(Debug, Error)]
pub enum SyncError {
    /// Another sync invocation currently holds the engine
    #[error("A sync invocation is already running")]
    AlreadyRunning,

    /// Enumerating the local vault failed
    #[error("Vault enumeration failed: {0:#}")]
    Vault(anyhow::Error),

    /// Listing the remote knowledge base failed
    ///
    /// A failed listing aborts the invocation instead of being treated as an
    /// empty knowledge base; proceeding would create duplicate folders.
    #[error("Remote listing failed: {0:#}")]
    Listing(anyhow::Error),

    /// The destination folder could not be created
    #[error("Folder resolution failed: {0:#}")]
    FolderResolution(anyhow::Error),
}
