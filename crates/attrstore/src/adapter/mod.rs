//! Persistence adapter over a document store.
//!
//! `DocumentPersistenceAdapter` implements the `PersistenceAdapter` contract
//! from `attrstore_core::persistence` on top of any `DocumentStore`. Each call
//! derives a partition key from the request envelope and issues exactly one
//! document operation against the configured collection.
//!
//! # Example
//!
//! ```ignore
//! use std::sync::Arc;
//!
//! let store = Arc::new(SqliteDocumentStore::new("attrstore.db").await?);
//! let adapter = DocumentPersistenceAdapter::new(store, "sessions")
//!     .with_key_strategy(KeyStrategy::DeviceId);
//!
//! let attributes = adapter.get_attributes(&envelope).await?;
//! ```

mod document;

pub use document::{DocumentPersistenceAdapter, DEFAULT_PARTITION_KEY_NAME};
