//! Knowledge store port (driven/secondary port)
//!
//! Interface for the remote knowledge-management service. The primary
//! implementation targets the Quivr REST API, but the trait is
//! provider-agnostic.
//!
//! ## Design Notes
//!
//! - Uses `anyhow::Result` because errors at port boundaries are
//!   adapter-specific and don't need domain-level classification; the sync
//!   engine only decides continue-or-halt per call.
//! - Uses `#[async_trait]` for async trait methods.
//! - Every operation is an explicit `Result`: a failed listing is an `Err`,
//!   never an empty list, so callers can tell "no items" from "call failed".

use crate::domain::knowledge::{RemoteItem, UploadRequest};

/// Port trait for remote knowledge-base operations
///
/// Implementations handle the provider-specific API calls, authentication
/// headers, and error mapping. No retry logic is expected: every failure is
/// terminal to the single operation that raised it.
#[async_trait::async_trait]
pub trait KnowledgeStore: Send + Sync {
    /// Lists all items known to the knowledge base.
    ///
    /// # Returns
    /// Every file and folder record, in service order (not guaranteed stable).
    async fn list_items(&self) -> anyhow::Result<Vec<RemoteItem>>;

    /// Creates a top-level folder with the given name.
    ///
    /// # Arguments
    /// * `name` - The folder name
    ///
    /// # Returns
    /// The service-assigned id of the created folder.
    async fn create_folder(&self, name: &str) -> anyhow::Result<String>;

    /// Uploads a single file.
    ///
    /// # Arguments
    /// * `request` - Metadata, raw bytes, and content type for the upload
    ///
    /// # Returns
    /// The created item as reported by the service.
    async fn upload_file(&self, request: &UploadRequest) -> anyhow::Result<RemoteItem>;
}
