//! DynamoDB document store.
//!
//! Implements `DocumentStore` from `attrstore_core::store` using DynamoDB.

use async_trait::async_trait;
use aws_sdk_dynamodb::types::AttributeValue;
use aws_sdk_dynamodb::Client;

use attrstore_core::persistence::Attributes;
use attrstore_core::store::{DocumentStore, Result};

use crate::config::StorageConfig;

use super::conversions::{document_to_item, item_to_document};
use super::error::{map_delete_item_error, map_get_item_error, map_put_item_error};

pub const DEFAULT_KEY_ATTRIBUTE: &str = "id";
pub const DEFAULT_ATTRIBUTES_ATTRIBUTE: &str = "attributes";

/// DynamoDB-based document store.
///
/// The collection name is used as the table name. The table's partition key
/// must be a string attribute named after `key_attribute`.
#[derive(Debug, Clone)]
pub struct DynamoDbDocumentStore {
    client: Client,
    key_attribute: String,
    attributes_attribute: String,
}

impl DynamoDbDocumentStore {
    /// Creates a new store with the given DynamoDB client.
    pub fn new(client: Client) -> Self {
        Self {
            client,
            key_attribute: DEFAULT_KEY_ATTRIBUTE.to_string(),
            attributes_attribute: DEFAULT_ATTRIBUTES_ATTRIBUTE.to_string(),
        }
    }

    /// Creates a new store from storage configuration.
    ///
    /// Uses the AWS SDK default credential chain, with the configured region
    /// and optional endpoint override (for local DynamoDB).
    pub async fn from_config(config: &StorageConfig) -> Self {
        let mut loader = aws_config::defaults(aws_config::BehaviorVersion::latest())
            .region(aws_config::Region::new(config.aws_region.clone()));

        if let Some(endpoint) = &config.dynamodb_endpoint_url {
            loader = loader.endpoint_url(endpoint);
        }

        let sdk_config = loader.load().await;
        tracing::info!(
            region = %config.aws_region,
            endpoint = config.dynamodb_endpoint_url.as_deref().unwrap_or("default"),
            "Created DynamoDB document store"
        );

        Self::new(Client::new(&sdk_config))
            .with_key_attribute(config.dynamodb_key_attribute.clone())
            .with_attributes_attribute(config.dynamodb_attributes_attribute.clone())
    }

    pub fn with_key_attribute(mut self, key_attribute: impl Into<String>) -> Self {
        self.key_attribute = key_attribute.into();
        self
    }

    pub fn with_attributes_attribute(mut self, attributes_attribute: impl Into<String>) -> Self {
        self.attributes_attribute = attributes_attribute.into();
        self
    }

    pub fn key_attribute(&self) -> &str {
        &self.key_attribute
    }

    pub fn attributes_attribute(&self) -> &str {
        &self.attributes_attribute
    }
}

#[async_trait]
impl DocumentStore for DynamoDbDocumentStore {
    async fn get(&self, collection: &str, id: &str) -> Result<Option<Attributes>> {
        let result = self
            .client
            .get_item()
            .table_name(collection)
            .key(&self.key_attribute, AttributeValue::S(id.to_string()))
            .consistent_read(true)
            .send()
            .await
            .map_err(|e| map_get_item_error(e, collection))?;

        match result.item {
            Some(item) => Ok(Some(item_to_document(&item, &self.attributes_attribute)?)),
            None => Ok(None),
        }
    }

    async fn set(&self, collection: &str, id: &str, document: &Attributes) -> Result<()> {
        let item = document_to_item(&self.key_attribute, id, &self.attributes_attribute, document);

        self.client
            .put_item()
            .table_name(collection)
            .set_item(Some(item))
            .send()
            .await
            .map_err(|e| map_put_item_error(e, collection))?;

        Ok(())
    }

    async fn delete(&self, collection: &str, id: &str) -> Result<()> {
        self.client
            .delete_item()
            .table_name(collection)
            .key(&self.key_attribute, AttributeValue::S(id.to_string()))
            .send()
            .await
            .map_err(|e| map_delete_item_error(e, collection))?;

        Ok(())
    }
}
