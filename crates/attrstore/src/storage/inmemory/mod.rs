//! In-memory document store for testing.
//!
//! Stores documents in nested HashMaps wrapped in `Arc<RwLock<_>>`. Useful
//! for tests and development where persistence is not required.
//!
//! # Example
//!
//! ```rust,ignore
//! use attrstore::storage::inmemory::InMemoryDocumentStore;
//!
//! let store = InMemoryDocumentStore::new();
//! // Use store for testing...
//! ```

mod store;

pub use store::InMemoryDocumentStore;
