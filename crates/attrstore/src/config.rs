use std::env;

use attrstore_core::persistence::KeyStrategy;

use crate::adapter::DEFAULT_PARTITION_KEY_NAME;

/// Adapter configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdapterConfig {
    /// Collection holding the attributes documents.
    pub collection_name: String,
    /// Partition key field name (default: "id").
    pub partition_key_name: String,
    /// Built-in key generator to use (default: user id).
    pub key_strategy: KeyStrategy,
}

impl AdapterConfig {
    pub fn new(collection_name: impl Into<String>) -> Self {
        Self {
            collection_name: collection_name.into(),
            partition_key_name: DEFAULT_PARTITION_KEY_NAME.to_string(),
            key_strategy: KeyStrategy::default(),
        }
    }
}

/// Document store backend settings loaded from environment variables.
#[derive(Debug, Clone)]
pub struct StorageConfig {
    /// Path to SQLite database file (default: "attrstore.db")
    pub sqlite_path: String,
    /// Custom DynamoDB endpoint, for local DynamoDB (default: none)
    pub dynamodb_endpoint_url: Option<String>,
    /// AWS region (default: "us-east-1")
    pub aws_region: String,
    /// Item attribute holding the document id (default: "id")
    pub dynamodb_key_attribute: String,
    /// Item attribute holding the document map (default: "attributes")
    pub dynamodb_attributes_attribute: String,
}

impl StorageConfig {
    /// Load configuration from environment variables.
    ///
    /// Environment variables:
    /// - `SQLITE_PATH` - SQLite database path (default: "attrstore.db")
    /// - `AWS_ENDPOINT_URL` - DynamoDB endpoint override (default: unset)
    /// - `AWS_REGION` - AWS region (default: "us-east-1")
    /// - `DYNAMODB_KEY_ATTRIBUTE` - key attribute name (default: "id")
    /// - `DYNAMODB_ATTRIBUTES_ATTRIBUTE` - attributes attribute name (default: "attributes")
    pub fn from_env() -> Self {
        Self {
            sqlite_path: env::var("SQLITE_PATH").unwrap_or_else(|_| "attrstore.db".to_string()),
            dynamodb_endpoint_url: env::var("AWS_ENDPOINT_URL").ok(),
            aws_region: env::var("AWS_REGION").unwrap_or_else(|_| "us-east-1".to_string()),
            dynamodb_key_attribute: env::var("DYNAMODB_KEY_ATTRIBUTE")
                .unwrap_or_else(|_| "id".to_string()),
            dynamodb_attributes_attribute: env::var("DYNAMODB_ATTRIBUTES_ATTRIBUTE")
                .unwrap_or_else(|_| "attributes".to_string()),
        }
    }
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self::from_env()
    }
}
