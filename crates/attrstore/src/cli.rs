//! CLI command definitions.

use std::path::{Path, PathBuf};

use clap::{Args, Parser, Subcommand, ValueEnum};
use thiserror::Error;

use attrstore_core::envelope::RequestEnvelope;
use attrstore_core::persistence::{Attributes, KeyStrategy};

use crate::config::AdapterConfig;

/// Errors raised while interpreting CLI input.
#[derive(Debug, Error)]
pub enum CliError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid payload: {0}")]
    InvalidPayload(String),
}

/// Inspect and edit persisted request attributes.
#[derive(Debug, Parser)]
#[command(name = "attrstore")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Collection holding the attributes documents.
    #[arg(long, env = "ATTRSTORE_COLLECTION")]
    pub collection: String,

    /// Partition key field name.
    #[arg(long, env = "ATTRSTORE_PARTITION_KEY_NAME", default_value = "id")]
    pub partition_key_name: String,

    /// How the partition key is derived: user-id, device-id or person-id.
    #[arg(long, env = "ATTRSTORE_KEY_STRATEGY", default_value = "user-id")]
    pub key_strategy: KeyStrategy,

    /// Document store backend.
    #[arg(long, env = "ATTRSTORE_BACKEND", value_enum, default_value_t)]
    pub backend: Backend,

    #[command(flatten)]
    pub identity: IdentityArgs,

    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    pub fn adapter_config(&self) -> AdapterConfig {
        AdapterConfig {
            collection_name: self.collection.clone(),
            partition_key_name: self.partition_key_name.clone(),
            key_strategy: self.key_strategy,
        }
    }
}

/// Document store backends compiled into this binary.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum Backend {
    /// SQLite database file (`SQLITE_PATH`).
    #[cfg(feature = "sqlite")]
    #[default]
    Sqlite,
    /// AWS DynamoDB, one table per collection.
    #[cfg(feature = "dynamodb")]
    #[cfg_attr(not(feature = "sqlite"), default)]
    Dynamodb,
}

/// Request identity used to derive the partition key.
#[derive(Debug, Default, Args)]
pub struct IdentityArgs {
    /// User id (`context.System.user.userId`).
    #[arg(long, global = true)]
    pub user_id: Option<String>,

    /// Device id (`context.System.device.deviceId`).
    #[arg(long, global = true)]
    pub device_id: Option<String>,

    /// Person id (`context.System.person.personId`).
    #[arg(long, global = true)]
    pub person_id: Option<String>,

    /// Request envelope JSON file. Identity flags override its fields.
    #[arg(long, global = true)]
    pub request: Option<PathBuf>,
}

impl IdentityArgs {
    /// Builds the request envelope from the request file and identity flags.
    pub fn envelope(&self) -> Result<RequestEnvelope, CliError> {
        let mut envelope = match &self.request {
            Some(path) => serde_json::from_str(&read_file(path)?)?,
            None => RequestEnvelope::default(),
        };

        if let Some(user_id) = &self.user_id {
            envelope = envelope.with_user_id(user_id);
        }
        if let Some(device_id) = &self.device_id {
            envelope = envelope.with_device_id(device_id);
        }
        if let Some(person_id) = &self.person_id {
            envelope = envelope.with_person_id(person_id);
        }

        Ok(envelope)
    }
}

/// Available commands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Print the stored attributes as JSON.
    Get,
    /// Replace the stored attributes.
    Save(SaveArgs),
    /// Delete the stored attributes.
    Delete,
}

#[derive(Debug, Args)]
#[group(required = true, multiple = false)]
pub struct SaveArgs {
    /// Attributes as an inline JSON object.
    #[arg(long)]
    pub data: Option<String>,

    /// Path to a file containing the attributes JSON object.
    #[arg(long)]
    pub file: Option<PathBuf>,
}

impl SaveArgs {
    /// Parses the attributes payload. It must be a JSON object.
    pub fn payload(&self) -> Result<Attributes, CliError> {
        let text = match (&self.data, &self.file) {
            (Some(data), _) => data.clone(),
            (None, Some(path)) => read_file(path)?,
            (None, None) => {
                return Err(CliError::InvalidPayload(
                    "either --data or --file is required".to_string(),
                ))
            }
        };

        match serde_json::from_str(&text)? {
            serde_json::Value::Object(map) => Ok(map),
            other => Err(CliError::InvalidPayload(format!(
                "expected a JSON object, got {other}"
            ))),
        }
    }
}

fn read_file(path: &Path) -> Result<String, CliError> {
    std::fs::read_to_string(path).map_err(|source| CliError::Io {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(args).unwrap()
    }

    #[test]
    fn test_parse_get_with_defaults() {
        let cli = parse(&["attrstore", "--collection", "sessions", "--user-id", "U1", "get"]);

        assert!(matches!(cli.command, Commands::Get));
        assert_eq!(
            cli.adapter_config(),
            AdapterConfig::new("sessions")
        );
        assert_eq!(cli.identity.user_id.as_deref(), Some("U1"));
    }

    #[test]
    fn test_identity_flags_after_subcommand() {
        let cli = parse(&["attrstore", "--collection", "sessions", "delete", "--device-id", "D1"]);

        assert!(matches!(cli.command, Commands::Delete));
        assert_eq!(cli.identity.device_id.as_deref(), Some("D1"));
    }

    #[test]
    fn test_parse_key_strategy() {
        let cli = parse(&[
            "attrstore",
            "--collection",
            "sessions",
            "--key-strategy",
            "person-id",
            "--partition-key-name",
            "pk",
            "get",
        ]);

        let config = cli.adapter_config();
        assert_eq!(config.key_strategy, KeyStrategy::PersonId);
        assert_eq!(config.partition_key_name, "pk");
    }

    #[test]
    fn test_invalid_key_strategy_is_rejected() {
        let result = Cli::try_parse_from([
            "attrstore",
            "--collection",
            "sessions",
            "--key-strategy",
            "session",
            "get",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn test_save_requires_payload() {
        let result = Cli::try_parse_from(["attrstore", "--collection", "sessions", "save"]);
        assert!(result.is_err());

        let result = Cli::try_parse_from([
            "attrstore",
            "--collection",
            "sessions",
            "save",
            "--data",
            "{}",
            "--file",
            "attrs.json",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn test_save_payload_inline() {
        let args = SaveArgs {
            data: Some(r#"{"count": 1}"#.to_string()),
            file: None,
        };
        assert_eq!(
            args.payload().unwrap(),
            json!({ "count": 1 }).as_object().cloned().unwrap()
        );
    }

    #[test]
    fn test_save_payload_must_be_object() {
        let args = SaveArgs {
            data: Some("[1, 2]".to_string()),
            file: None,
        };
        assert!(matches!(args.payload(), Err(CliError::InvalidPayload(_))));

        let args = SaveArgs {
            data: Some("{".to_string()),
            file: None,
        };
        assert!(matches!(args.payload(), Err(CliError::Json(_))));
    }

    #[test]
    fn test_save_payload_missing_file() {
        let args = SaveArgs {
            data: None,
            file: Some(PathBuf::from("/nonexistent/attrs.json")),
        };
        assert!(matches!(args.payload(), Err(CliError::Io { .. })));
    }

    #[test]
    fn test_envelope_from_flags() {
        let identity = IdentityArgs {
            user_id: Some("U1".to_string()),
            person_id: Some("P1".to_string()),
            ..Default::default()
        };

        let envelope = identity.envelope().unwrap();
        assert_eq!(envelope.user_id(), Some("U1"));
        assert_eq!(envelope.person_id(), Some("P1"));
        assert_eq!(envelope.device_id(), None);
    }

    #[test]
    fn test_envelope_from_request_file_with_override() {
        let path = std::env::temp_dir().join(format!("attrstore-request-{}.json", std::process::id()));
        std::fs::write(
            &path,
            r#"{"context":{"System":{"user":{"userId":"U1"},"device":{"deviceId":"D1"}}}}"#,
        )
        .unwrap();

        let identity = IdentityArgs {
            device_id: Some("D2".to_string()),
            request: Some(path.clone()),
            ..Default::default()
        };
        let envelope = identity.envelope().unwrap();
        std::fs::remove_file(&path).unwrap();

        assert_eq!(envelope.user_id(), Some("U1"));
        assert_eq!(envelope.device_id(), Some("D2"));
    }
}
