//! Serde model of the inbound request envelope.
//!
//! Only the identity-bearing parts of the request are modelled. Unknown fields
//! are ignored when deserializing, so a full request body can be parsed as is.

use serde::{Deserialize, Serialize};

/// Inbound request from which partition keys are derived.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RequestEnvelope {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
    #[serde(default)]
    pub context: Context,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub session: Option<Session>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Context {
    #[serde(rename = "System", default)]
    pub system: SystemState,
}

/// Device, user and application state attached to every request.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SystemState {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub application: Option<Application>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user: Option<User>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub device: Option<Device>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub person: Option<Person>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Application {
    pub application_id: String,
}

/// Account that enabled the skill.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub user_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub access_token: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Device {
    pub device_id: String,
}

/// Recognized speaker, when voice profiles are enabled.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Person {
    pub person_id: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    pub session_id: String,
    #[serde(default)]
    pub new: bool,
}

impl RequestEnvelope {
    /// Creates an envelope carrying only a user identifier.
    pub fn for_user(user_id: impl Into<String>) -> Self {
        Self::default().with_user_id(user_id)
    }

    pub fn with_user_id(mut self, user_id: impl Into<String>) -> Self {
        self.context.system.user = Some(User {
            user_id: user_id.into(),
            access_token: None,
        });
        self
    }

    pub fn with_device_id(mut self, device_id: impl Into<String>) -> Self {
        self.context.system.device = Some(Device {
            device_id: device_id.into(),
        });
        self
    }

    pub fn with_person_id(mut self, person_id: impl Into<String>) -> Self {
        self.context.system.person = Some(Person {
            person_id: person_id.into(),
        });
        self
    }

    pub fn user_id(&self) -> Option<&str> {
        non_empty(self.context.system.user.as_ref().map(|u| u.user_id.as_str()))
    }

    pub fn device_id(&self) -> Option<&str> {
        non_empty(self.context.system.device.as_ref().map(|d| d.device_id.as_str()))
    }

    pub fn person_id(&self) -> Option<&str> {
        non_empty(self.context.system.person.as_ref().map(|p| p.person_id.as_str()))
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}
