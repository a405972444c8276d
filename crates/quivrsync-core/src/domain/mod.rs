//! Domain types for vault-to-knowledge-base synchronization.

pub mod errors;
pub mod knowledge;
