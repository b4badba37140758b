use thiserror::Error;

/// Component name reported by the built-in partition key generators.
pub const KEY_GENERATORS_NAME: &str = "PartitionKeyGenerators";

/// The single error kind surfaced by persistence operations.
///
/// `name` identifies the component that failed (an adapter type or the key
/// generators) and `message` carries the human-readable detail.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("{name}: {message}")]
pub struct PersistenceError {
    name: &'static str,
    message: String,
}

impl PersistenceError {
    pub fn new(name: &'static str, message: impl Into<String>) -> Self {
        Self {
            name,
            message: message.into(),
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

/// Result type for persistence operations.
pub type Result<T> = std::result::Result<T, PersistenceError>;
