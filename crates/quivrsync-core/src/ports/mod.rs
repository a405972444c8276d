//! Port definitions (trait interfaces) for adapter crates.

pub mod knowledge_store;
pub mod local_vault;
