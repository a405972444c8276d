//! Domain error types
//!
//! Validation failures for domain values, independent of any adapter.
//! Adapters and the CLI surface these through `anyhow` so callers can
//! downcast when they need the classification.

use thiserror::Error;

/// Errors that can occur in domain operations
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// The configured API key is missing or empty
    #[error("Missing API key: {0}")]
    MissingApiKey(String),

    /// The vault root does not exist or is not a directory
    #[error("Invalid vault root: {0}")]
    InvalidVaultRoot(String),

    /// Configuration validation failed
    #[error("Validation failed: {0}")]
    ValidationFailed(String),
}
