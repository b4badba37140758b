use async_trait::async_trait;

use crate::persistence::Attributes;

use super::Result;

/// Minimal document-store client contract.
///
/// Documents are addressed by collection name and document id. The client is
/// owned outside the adapter and shared across calls.
#[async_trait]
pub trait DocumentStore: Send + Sync {
    /// Gets a document, or `None` if it does not exist.
    async fn get(&self, collection: &str, id: &str) -> Result<Option<Attributes>>;

    /// Replaces the whole document, creating it if needed.
    async fn set(&self, collection: &str, id: &str, document: &Attributes) -> Result<()>;

    /// Deletes a document. Deleting a missing document succeeds.
    async fn delete(&self, collection: &str, id: &str) -> Result<()>;
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;
    use std::sync::{Arc, Mutex};

    use serde_json::json;

    use super::*;

    #[derive(Default)]
    struct MapStore {
        documents: Mutex<HashMap<(String, String), Attributes>>,
    }

    #[async_trait]
    impl DocumentStore for MapStore {
        async fn get(&self, collection: &str, id: &str) -> Result<Option<Attributes>> {
            let documents = self.documents.lock().unwrap();
            Ok(documents
                .get(&(collection.to_string(), id.to_string()))
                .cloned())
        }

        async fn set(&self, collection: &str, id: &str, document: &Attributes) -> Result<()> {
            let mut documents = self.documents.lock().unwrap();
            documents.insert((collection.to_string(), id.to_string()), document.clone());
            Ok(())
        }

        async fn delete(&self, collection: &str, id: &str) -> Result<()> {
            let mut documents = self.documents.lock().unwrap();
            documents.remove(&(collection.to_string(), id.to_string()));
            Ok(())
        }
    }

    #[tokio::test]
    async fn test_usable_as_trait_object() {
        let store: Arc<dyn DocumentStore> = Arc::new(MapStore::default());
        let document = json!({ "count": 1 }).as_object().cloned().unwrap();

        store.set("sessions", "U1", &document).await.unwrap();
        assert_eq!(store.get("sessions", "U1").await.unwrap(), Some(document));
        assert_eq!(store.get("other", "U1").await.unwrap(), None);

        store.delete("sessions", "U1").await.unwrap();
        store.delete("sessions", "U1").await.unwrap();
        assert_eq!(store.get("sessions", "U1").await.unwrap(), None);
    }
}
