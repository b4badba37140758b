use async_trait::async_trait;

use crate::envelope::RequestEnvelope;

use super::{Attributes, Result};

/// Persistence contract invoked by the request-handling framework.
///
/// Implementations derive a partition key from the envelope and read, replace
/// or delete the attributes document stored under it.
#[async_trait]
pub trait PersistenceAdapter: Send + Sync {
    /// Gets the attributes for the request, or an empty map if none are stored.
    async fn get_attributes(&self, envelope: &RequestEnvelope) -> Result<Attributes>;

    /// Replaces the attributes stored for the request.
    async fn save_attributes(
        &self,
        envelope: &RequestEnvelope,
        attributes: &Attributes,
    ) -> Result<()>;

    /// Deletes the attributes stored for the request. Absent documents are not an error.
    async fn delete_attributes(&self, envelope: &RequestEnvelope) -> Result<()>;
}
