use std::sync::Arc;

use anyhow::Result;
use clap::Parser;
use serde_json::Value;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use attrstore::cli::{Backend, Cli, Commands};
use attrstore::{DocumentPersistenceAdapter, StorageConfig};
use attrstore_core::persistence::PersistenceAdapter;
use attrstore_core::store::DocumentStore;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize tracing subscriber; stdout is reserved for command output
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "attrstore=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    if let Err(err) = run(cli).await {
        tracing::error!(error = %err, "Command failed");
        return Err(err);
    }

    Ok(())
}

async fn run(cli: Cli) -> Result<()> {
    let storage = StorageConfig::from_env();
    let store = open_store(cli.backend, &storage).await?;
    let adapter = DocumentPersistenceAdapter::from_config(store, cli.adapter_config());

    let envelope = cli.identity.envelope()?;
    let key = adapter.partition_key(&envelope)?;
    tracing::debug!(
        collection = adapter.collection_name(),
        key = %key,
        backend = ?cli.backend,
        "Resolved partition key"
    );

    match cli.command {
        Commands::Get => {
            let attributes = adapter.get_attributes(&envelope).await?;
            println!("{}", serde_json::to_string_pretty(&Value::Object(attributes))?);
        }
        Commands::Save(args) => {
            let attributes = args.payload()?;
            adapter.save_attributes(&envelope, &attributes).await?;
            println!("Saved attributes for {key}");
        }
        Commands::Delete => {
            adapter.delete_attributes(&envelope).await?;
            println!("Deleted attributes for {key}");
        }
    }

    Ok(())
}

/// Open the document store selected on the command line.
async fn open_store(backend: Backend, config: &StorageConfig) -> Result<Arc<dyn DocumentStore>> {
    let store: Arc<dyn DocumentStore> = match backend {
        #[cfg(feature = "sqlite")]
        Backend::Sqlite => {
            Arc::new(attrstore::storage::SqliteDocumentStore::new(&config.sqlite_path).await?)
        }
        #[cfg(feature = "dynamodb")]
        Backend::Dynamodb => {
            Arc::new(attrstore::storage::DynamoDbDocumentStore::from_config(config).await)
        }
    };

    Ok(store)
}
