//! Schema command - creates the PostgreSQL tables

use clap::{Args, Subcommand};
use tracing::info;

use crate::config::AppConfig;
use crate::infrastructure::storage::{PostgresStore, StorageConfig};

/// Arguments for the schema command
#[derive(Args)]
pub struct SchemaArgs {
    #[command(subcommand)]
    pub action: SchemaAction,
}

#[derive(Subcommand)]
pub enum SchemaAction {
    /// Create the `users` and `posts` tables if they do not exist
    Init,
}

pub async fn run(config: &AppConfig, args: SchemaArgs) -> anyhow::Result<()> {
    match args.action {
        SchemaAction::Init => init(config).await,
    }
}

async fn init(config: &AppConfig) -> anyhow::Result<()> {
    match config.storage.storage_config()? {
        StorageConfig::InMemory => {
            info!("In-memory backend selected; nothing to initialize");
        }
        StorageConfig::Postgres(pg_config) => {
            let store = PostgresStore::connect(&pg_config).await?;
            store.ensure_schema().await?;
            info!("Schema ready");
        }
    }

    Ok(())
}
