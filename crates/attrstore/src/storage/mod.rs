//! Document store implementations.
//!
//! This module provides concrete implementations of the `DocumentStore` trait
//! defined in `attrstore_core::store`. Each backend is selected at compile
//! time via a feature flag; several may be enabled together and the binary
//! picks one at runtime.
//!
//! # Feature Flags
//!
//! - `inmemory` (default): process-local store, used for tests and development
//! - `sqlite` (default): SQLite store using `rusqlite` and `tokio-rusqlite`
//! - `dynamodb`: AWS DynamoDB store using `aws-sdk-dynamodb`
//!
//! # Examples
//!
//! Build with DynamoDB only:
//! ```bash
//! cargo build -p attrstore --no-default-features --features dynamodb
//! ```

#[cfg(not(any(feature = "sqlite", feature = "dynamodb")))]
compile_error!(
    "No persistent document store selected. Enable 'sqlite' or 'dynamodb' feature. \
    Example: cargo build -p attrstore --features sqlite"
);

#[cfg(feature = "inmemory")]
pub mod inmemory;

#[cfg(feature = "sqlite")]
pub mod sqlite;

#[cfg(feature = "dynamodb")]
pub mod dynamodb;

#[cfg(feature = "inmemory")]
pub use inmemory::InMemoryDocumentStore;

#[cfg(feature = "sqlite")]
pub use sqlite::SqliteDocumentStore;

#[cfg(feature = "dynamodb")]
pub use dynamodb::DynamoDbDocumentStore;
