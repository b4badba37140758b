//! SQLite document store implementation.
//!
//! Implements `DocumentStore` from `attrstore_core::store` using SQLite.

use async_trait::async_trait;
use chrono::Utc;
use tokio_rusqlite::Connection;

use attrstore_core::persistence::Attributes;
use attrstore_core::store::{DocumentStore, Result, StoreError};

use super::conversions::{decode_document, encode_document, format_datetime};
use super::error::map_tokio_rusqlite_error;
use super::schema;

/// Helper to wrap rusqlite errors for tokio_rusqlite closures.
fn wrap_err(e: rusqlite::Error) -> tokio_rusqlite::Error {
    tokio_rusqlite::Error::Rusqlite(e)
}

/// SQLite-based document store.
///
/// All statements run on `tokio-rusqlite`'s connection thread, so no call
/// blocks the async runtime.
pub struct SqliteDocumentStore {
    conn: Connection,
}

impl SqliteDocumentStore {
    /// Creates a store backed by a database file.
    ///
    /// The database file will be created if it doesn't exist.
    /// Schema tables are created automatically.
    pub async fn new(path: &str) -> Result<Self> {
        let conn = Connection::open(path)
            .await
            .map_err(|e| StoreError::ConnectionFailed(e.to_string()))?;

        Self::init_schema(&conn).await?;
        tracing::info!(path, "Opened SQLite document store");

        Ok(Self { conn })
    }

    /// Creates a store with an in-memory database.
    ///
    /// Useful for testing - data is lost when the connection is dropped.
    pub async fn new_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()
            .await
            .map_err(|e| StoreError::ConnectionFailed(e.to_string()))?;

        Self::init_schema(&conn).await?;

        Ok(Self { conn })
    }

    async fn init_schema(conn: &Connection) -> Result<()> {
        conn.call(|conn| {
            conn.execute_batch(schema::CREATE_TABLES).map_err(wrap_err)?;
            Ok(())
        })
        .await
        .map_err(map_tokio_rusqlite_error)
    }
}

#[async_trait]
impl DocumentStore for SqliteDocumentStore {
    async fn get(&self, collection: &str, id: &str) -> Result<Option<Attributes>> {
        let collection = collection.to_string();
        let id = id.to_string();

        let data = self
            .conn
            .call(move |conn| {
                let mut stmt = conn.prepare(schema::SELECT_DOCUMENT).map_err(wrap_err)?;
                match stmt.query_row([&collection, &id], |row| row.get::<_, String>(0)) {
                    Ok(data) => Ok(Some(data)),
                    Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
                    Err(e) => Err(wrap_err(e)),
                }
            })
            .await
            .map_err(map_tokio_rusqlite_error)?;

        data.as_deref().map(decode_document).transpose()
    }

    async fn set(&self, collection: &str, id: &str, document: &Attributes) -> Result<()> {
        let collection = collection.to_string();
        let id = id.to_string();
        let data = encode_document(document)?;
        let updated_at = format_datetime(&Utc::now());

        self.conn
            .call(move |conn| {
                conn.execute(
                    schema::UPSERT_DOCUMENT,
                    rusqlite::params![collection, id, data, updated_at],
                )
                .map_err(wrap_err)?;
                Ok(())
            })
            .await
            .map_err(map_tokio_rusqlite_error)
    }

    async fn delete(&self, collection: &str, id: &str) -> Result<()> {
        let collection = collection.to_string();
        let id = id.to_string();

        self.conn
            .call(move |conn| {
                conn.execute(schema::DELETE_DOCUMENT, [&collection, &id])
                    .map_err(wrap_err)?;
                Ok(())
            })
            .await
            .map_err(map_tokio_rusqlite_error)
    }
}
