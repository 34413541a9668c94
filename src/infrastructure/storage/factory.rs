//! Storage factory for runtime backend selection

use std::sync::Arc;

use tracing::info;

use crate::domain::{DomainError, PostRepository, UserRepository};
use crate::infrastructure::post::{InMemoryPostRepository, PostgresPostRepository};
use crate::infrastructure::user::{InMemoryUserRepository, PostgresUserRepository};

use super::in_memory::InMemoryStore;
use super::postgres::{PostgresConfig, PostgresStore};

/// Supported storage types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StorageType {
    /// In-memory storage (for testing/development)
    InMemory,
    /// PostgreSQL storage
    Postgres,
}

impl StorageType {
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "memory" | "inmemory" | "in-memory" | "in_memory" => Some(Self::InMemory),
            "postgres" | "postgresql" | "pg" => Some(Self::Postgres),
            _ => None,
        }
    }
}

/// Storage configuration
#[derive(Debug, Clone)]
pub enum StorageConfig {
    /// In-memory storage configuration
    InMemory,
    /// PostgreSQL storage configuration
    Postgres(PostgresConfig),
}

impl StorageConfig {
    /// Creates an in-memory storage configuration
    pub fn in_memory() -> Self {
        Self::InMemory
    }

    /// Creates a PostgreSQL storage configuration
    pub fn postgres(config: PostgresConfig) -> Self {
        Self::Postgres(config)
    }

    /// Returns the storage type
    pub fn storage_type(&self) -> StorageType {
        match self {
            Self::InMemory => StorageType::InMemory,
            Self::Postgres(_) => StorageType::Postgres,
        }
    }
}

/// Repositories sharing one backend
#[derive(Clone)]
pub struct Repositories {
    pub users: Arc<dyn UserRepository>,
    pub posts: Arc<dyn PostRepository>,
}

impl std::fmt::Debug for Repositories {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Repositories").finish_non_exhaustive()
    }
}

/// Factory for creating repository bundles
#[derive(Debug)]
pub struct StorageFactory;

impl StorageFactory {
    /// Creates the repositories for the configured backend
    ///
    /// For PostgreSQL the schema is ensured before returning.
    pub async fn create(config: &StorageConfig) -> Result<Repositories, DomainError> {
        info!(backend = ?config.storage_type(), "Initializing storage");

        match config {
            StorageConfig::InMemory => Ok(Self::create_in_memory(InMemoryStore::new())),
            StorageConfig::Postgres(pg_config) => {
                let store = PostgresStore::connect(pg_config).await?;
                store.ensure_schema().await?;
                Ok(Self::create_postgres(store))
            }
        }
    }

    /// Creates repositories over an in-memory store
    pub fn create_in_memory(store: InMemoryStore) -> Repositories {
        Repositories {
            users: Arc::new(InMemoryUserRepository::new(store.clone())),
            posts: Arc::new(InMemoryPostRepository::new(store)),
        }
    }

    /// Creates repositories over a connected PostgreSQL store
    pub fn create_postgres(store: PostgresStore) -> Repositories {
        Repositories {
            users: Arc::new(PostgresUserRepository::new(store.clone())),
            posts: Arc::new(PostgresPostRepository::new(store)),
        }
    }
}
