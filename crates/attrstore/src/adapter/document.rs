use std::sync::Arc;

use async_trait::async_trait;

use attrstore_core::envelope::RequestEnvelope;
use attrstore_core::persistence::{
    Attributes, KeyGenerator, KeyStrategy, PersistenceAdapter, PersistenceError, Result,
};
use attrstore_core::store::DocumentStore;

use crate::config::AdapterConfig;

/// Default name of the partition key field.
pub const DEFAULT_PARTITION_KEY_NAME: &str = "id";

/// Persistence adapter storing one attributes document per partition key.
///
/// The store handle is owned elsewhere and shared through an `Arc`; the
/// adapter never opens or closes it. Writes replace the whole document.
pub struct DocumentPersistenceAdapter<S>
where
    S: DocumentStore + ?Sized,
{
    store: Arc<S>,
    collection_name: String,
    partition_key_name: String,
    key_generator: KeyGenerator,
}

impl<S> DocumentPersistenceAdapter<S>
where
    S: DocumentStore + ?Sized,
{
    /// Name reported in errors raised by this adapter.
    pub const NAME: &'static str = "DocumentPersistenceAdapter";

    /// Creates an adapter over `collection_name` using the user-id key generator.
    pub fn new(store: Arc<S>, collection_name: impl Into<String>) -> Self {
        Self {
            store,
            collection_name: collection_name.into(),
            partition_key_name: DEFAULT_PARTITION_KEY_NAME.to_string(),
            key_generator: KeyStrategy::UserId.generator(),
        }
    }

    /// Creates an adapter from a loaded configuration.
    pub fn from_config(store: Arc<S>, config: AdapterConfig) -> Self {
        Self::new(store, config.collection_name)
            .with_partition_key_name(config.partition_key_name)
            .with_key_strategy(config.key_strategy)
    }

    pub fn with_partition_key_name(mut self, partition_key_name: impl Into<String>) -> Self {
        self.partition_key_name = partition_key_name.into();
        self
    }

    /// Replaces the key generator with a custom function.
    pub fn with_key_generator<F>(mut self, generator: F) -> Self
    where
        F: Fn(&RequestEnvelope) -> Result<String> + Send + Sync + 'static,
    {
        self.key_generator = Arc::new(generator);
        self
    }

    /// Replaces the key generator with one of the built-in strategies.
    pub fn with_key_strategy(mut self, strategy: KeyStrategy) -> Self {
        self.key_generator = strategy.generator();
        self
    }

    pub fn collection_name(&self) -> &str {
        &self.collection_name
    }

    /// The configured partition key field name.
    ///
    /// Carried through configuration only; keys come from the key generator.
    pub fn partition_key_name(&self) -> &str {
        &self.partition_key_name
    }

    /// Computes the partition key for a request.
    pub fn partition_key(&self, envelope: &RequestEnvelope) -> Result<String> {
        (self.key_generator)(envelope)
    }

    fn error(&self, message: String) -> PersistenceError {
        PersistenceError::new(Self::NAME, message)
    }
}

impl<S> Clone for DocumentPersistenceAdapter<S>
where
    S: DocumentStore + ?Sized,
{
    fn clone(&self) -> Self {
        Self {
            store: Arc::clone(&self.store),
            collection_name: self.collection_name.clone(),
            partition_key_name: self.partition_key_name.clone(),
            key_generator: Arc::clone(&self.key_generator),
        }
    }
}

impl<S> std::fmt::Debug for DocumentPersistenceAdapter<S>
where
    S: DocumentStore + ?Sized,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DocumentPersistenceAdapter")
            .field("collection_name", &self.collection_name)
            .field("partition_key_name", &self.partition_key_name)
            .finish_non_exhaustive()
    }
}

#[async_trait]
impl<S> PersistenceAdapter for DocumentPersistenceAdapter<S>
where
    S: DocumentStore + ?Sized,
{
    async fn get_attributes(&self, envelope: &RequestEnvelope) -> Result<Attributes> {
        let key = self.partition_key(envelope)?;
        tracing::debug!(collection = %self.collection_name, key = %key, "Reading attributes");

        let document = self
            .store
            .get(&self.collection_name, &key)
            .await
            .map_err(|e| {
                self.error(format!(
                    "Could not read item ({key}) from collection ({}): {e}",
                    self.collection_name
                ))
            })?;

        Ok(document.unwrap_or_default())
    }

    async fn save_attributes(
        &self,
        envelope: &RequestEnvelope,
        attributes: &Attributes,
    ) -> Result<()> {
        let key = self.partition_key(envelope)?;
        tracing::debug!(
            collection = %self.collection_name,
            key = %key,
            fields = attributes.len(),
            "Saving attributes"
        );

        self.store
            .set(&self.collection_name, &key, attributes)
            .await
            .map_err(|e| {
                self.error(format!(
                    "Could not save item ({key}) to collection ({}): {e}",
                    self.collection_name
                ))
            })
    }

    async fn delete_attributes(&self, envelope: &RequestEnvelope) -> Result<()> {
        let key = self.partition_key(envelope)?;
        tracing::debug!(collection = %self.collection_name, key = %key, "Deleting attributes");

        self.store
            .delete(&self.collection_name, &key)
            .await
            .map_err(|e| {
                self.error(format!(
                    "Could not delete item ({key}) from collection ({}): {e}",
                    self.collection_name
                ))
            })
    }
}
