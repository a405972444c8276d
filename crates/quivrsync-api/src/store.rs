//! QuivrKnowledgeStore - KnowledgeStore implementation for the Quivr API
//!
//! Wraps the [`QuivrClient`] and delegates to it to fulfil the
//! [`KnowledgeStore`] port contract. Errors are converted into `anyhow`
//! with context naming the failed operation; the sync engine decides per
//! call whether to continue or halt.

use anyhow::{Context, Result};

use quivrsync_core::domain::knowledge::{RemoteItem, UploadRequest};
use quivrsync_core::ports::knowledge_store::KnowledgeStore;

use crate::client::QuivrClient;

/// Adapter that bridges the [`KnowledgeStore`] port to the Quivr REST API.
pub struct QuivrKnowledgeStore {
    /// The underlying API client
    client: QuivrClient,
}

impl QuivrKnowledgeStore {
    /// Creates a new store adapter over the given client.
    pub fn new(client: QuivrClient) -> Self {
        Self { client }
    }

    /// Returns a reference to the underlying client.
    pub fn client(&self) -> &QuivrClient {
        &self.client
    }
}

#[async_trait::async_trait]
impl KnowledgeStore for QuivrKnowledgeStore {
    async fn list_items(&self) -> Result<Vec<RemoteItem>> {
        self.client
            .list_items()
            .await
            .context("Failed to list knowledge items")
    }

    async fn create_folder(&self, name: &str) -> Result<String> {
        self.client
            .create_folder(name)
            .await
            .with_context(|| format!("Failed to create folder '{name}'"))
    }

    async fn upload_file(&self, request: &UploadRequest) -> Result<RemoteItem> {
        self.client
            .upload_file(request)
            .await
            .with_context(|| format!("Failed to upload '{}'", request.data.file_name))
    }
}
