//! Local vault port (driven/secondary port)
//!
//! Interface for enumerating and reading the local documents eligible for
//! synchronization. Eligibility is "markdown document anywhere under the
//! vault root"; the folder structure of the source tree is not preserved,
//! all matched documents flatten into one destination folder.

use std::path::PathBuf;

/// A local document eligible for synchronization.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VaultDocument {
    /// Bare file name, e.g. `notes.md` (what the remote item will be called)
    pub file_name: String,
    /// Full path on the local filesystem
    pub path: PathBuf,
}

/// Port trait for local vault access
#[async_trait::async_trait]
pub trait LocalVault: Send + Sync {
    /// Enumerates the documents eligible for sync.
    ///
    /// The result is a finite, restartable sequence in a deterministic
    /// (path-sorted) order.
    async fn list_documents(&self) -> anyhow::Result<Vec<VaultDocument>>;

    /// Reads the raw bytes of a previously enumerated document.
    async fn read_document(&self, document: &VaultDocument) -> anyhow::Result<Vec<u8>>;
}
