//! SQLite document store.
//!
//! Stores each document as JSON text in a single `documents` table keyed by
//! collection and id, using `rusqlite` for synchronous operations and
//! `tokio-rusqlite` for async wrapping.

mod conversions;
mod error;
mod schema;
mod store;

pub use store::SqliteDocumentStore;
