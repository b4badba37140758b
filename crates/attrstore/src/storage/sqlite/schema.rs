//! SQLite schema definitions and SQL query constants.

/// SQL statement to create all tables.
pub const CREATE_TABLES: &str = r#"
-- Attribute documents, one row per (collection, id)
CREATE TABLE IF NOT EXISTS documents (
    collection TEXT NOT NULL,
    id TEXT NOT NULL,
    data TEXT NOT NULL,
    updated_at TEXT NOT NULL,
    PRIMARY KEY (collection, id)
);
"#;

pub const SELECT_DOCUMENT: &str = "SELECT data FROM documents WHERE collection = ?1 AND id = ?2";

/// Replaces the whole document; no field-level merge.
pub const UPSERT_DOCUMENT: &str = r#"
INSERT INTO documents (collection, id, data, updated_at) VALUES (?1, ?2, ?3, ?4)
ON CONFLICT (collection, id) DO UPDATE SET data = excluded.data, updated_at = excluded.updated_at
"#;

pub const DELETE_DOCUMENT: &str = "DELETE FROM documents WHERE collection = ?1 AND id = ?2";
