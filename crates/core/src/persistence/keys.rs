//! Partition key generators.
//!
//! Pure functions deriving the document key from a request envelope. A
//! generator is injected into the adapter at construction, so swapping it
//! changes the partitioning strategy without touching the adapter.

use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use thiserror::Error;

use crate::envelope::RequestEnvelope;

use super::{PersistenceError, Result, KEY_GENERATORS_NAME};

/// A pluggable partition key generator.
pub type KeyGenerator = Arc<dyn Fn(&RequestEnvelope) -> Result<String> + Send + Sync>;

/// Uses `context.System.user.userId` as the partition key.
pub fn user_id(envelope: &RequestEnvelope) -> Result<String> {
    envelope.user_id().map(str::to_string).ok_or_else(|| {
        PersistenceError::new(
            KEY_GENERATORS_NAME,
            "Cannot retrieve user id from request envelope!",
        )
    })
}

/// Uses `context.System.device.deviceId` as the partition key.
pub fn device_id(envelope: &RequestEnvelope) -> Result<String> {
    envelope.device_id().map(str::to_string).ok_or_else(|| {
        PersistenceError::new(
            KEY_GENERATORS_NAME,
            "Cannot retrieve device id from request envelope!",
        )
    })
}

/// Uses `context.System.person.personId`, falling back to the user id when no
/// speaker was recognized.
pub fn person_id(envelope: &RequestEnvelope) -> Result<String> {
    match envelope.person_id() {
        Some(id) => Ok(id.to_string()),
        None => user_id(envelope),
    }
}

/// Names the built-in generators so they can be selected from configuration.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum KeyStrategy {
    #[default]
    UserId,
    DeviceId,
    PersonId,
}

impl KeyStrategy {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::UserId => "user-id",
            Self::DeviceId => "device-id",
            Self::PersonId => "person-id",
        }
    }

    /// Returns the generator function for this strategy.
    pub fn generator(&self) -> KeyGenerator {
        match self {
            Self::UserId => Arc::new(user_id),
            Self::DeviceId => Arc::new(device_id),
            Self::PersonId => Arc::new(person_id),
        }
    }
}

impl fmt::Display for KeyStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("unknown key strategy '{0}', expected one of: user-id, device-id, person-id")]
pub struct ParseKeyStrategyError(String);

impl FromStr for KeyStrategy {
    type Err = ParseKeyStrategyError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_ascii_lowercase().replace('_', "-").as_str() {
            "user-id" | "userid" => Ok(Self::UserId),
            "device-id" | "deviceid" => Ok(Self::DeviceId),
            "person-id" | "personid" => Ok(Self::PersonId),
            _ => Err(ParseKeyStrategyError(s.to_string())),
        }
    }
}
