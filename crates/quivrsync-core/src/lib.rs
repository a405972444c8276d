//! quivrsync core - Domain logic and business rules
//!
//! This crate contains the hexagonal architecture core with:
//! - **Domain entities** - `RemoteItem`, `KnowledgeData`, `UploadRequest`
//! - **Port definitions** - Traits for adapters: `KnowledgeStore`, `LocalVault`
//! - **Configuration** - Typed config with loading, defaults, and validation
//!
//! # Architecture
//!
//! This crate follows the hexagonal (ports & adapters) architecture pattern.
//! The domain module contains pure data types with no external dependencies.
//! Ports define trait interfaces that the adapter crates (`quivrsync-api`,
//! `quivrsync-sync`) implement.

pub mod config;
pub mod domain;
pub mod ports;
