//! Persist request-scoped attributes in a document store.
//!
//! This crate provides:
//! - `DocumentPersistenceAdapter`, the persistence contract over any `DocumentStore`
//! - Document store backends (in-memory, SQLite, DynamoDB via feature flags)
//! - Configuration and CLI definitions for the `attrstore` binary

pub mod adapter;
pub mod cli;
pub mod config;
pub mod storage;

pub use adapter::DocumentPersistenceAdapter;
pub use config::{AdapterConfig, StorageConfig};
