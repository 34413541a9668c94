//! PostgreSQL store handle with connection pooling

use std::future::Future;
use std::time::Duration;

use sqlx::postgres::{PgPool, PgPoolOptions};
use tracing::{debug, info};

use crate::domain::DomainError;

/// PostgreSQL storage configuration
#[derive(Debug, Clone)]
pub struct PostgresConfig {
    /// Database connection URL
    pub url: String,
    /// Maximum number of connections in the pool
    pub max_connections: u32,
    /// Minimum number of connections to maintain
    pub min_connections: u32,
    /// Connection timeout in seconds
    pub connect_timeout_secs: u64,
    /// Idle timeout in seconds
    pub idle_timeout_secs: u64,
    /// Upper bound for a single store operation in milliseconds
    pub statement_timeout_ms: u64,
}

impl Default for PostgresConfig {
    fn default() -> Self {
        Self {
            url: "postgres://localhost/postboard".to_string(),
            max_connections: 10,
            min_connections: 1,
            connect_timeout_secs: 30,
            idle_timeout_secs: 600,
            statement_timeout_ms: 3000,
        }
    }
}

impl PostgresConfig {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            ..Default::default()
        }
    }

    pub fn with_max_connections(mut self, max: u32) -> Self {
        self.max_connections = max;
        self
    }

    pub fn with_min_connections(mut self, min: u32) -> Self {
        self.min_connections = min;
        self
    }

    pub fn with_connect_timeout(mut self, secs: u64) -> Self {
        self.connect_timeout_secs = secs;
        self
    }

    pub fn with_idle_timeout(mut self, secs: u64) -> Self {
        self.idle_timeout_secs = secs;
        self
    }

    pub fn with_statement_timeout(mut self, millis: u64) -> Self {
        self.statement_timeout_ms = millis;
        self
    }
}

const USERS_TABLE: &str = r#"
    CREATE TABLE IF NOT EXISTS users (
        id BIGSERIAL PRIMARY KEY,
        username TEXT NOT NULL,
        email TEXT NOT NULL UNIQUE,
        password_hash TEXT NOT NULL
    )
"#;

const POSTS_TABLE: &str = r#"
    CREATE TABLE IF NOT EXISTS posts (
        id BIGSERIAL PRIMARY KEY,
        user_id BIGINT NOT NULL REFERENCES users(id) ON DELETE CASCADE,
        title TEXT NOT NULL,
        content TEXT NOT NULL,
        created_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
    )
"#;

/// Explicit store capability shared by the PostgreSQL repositories
///
/// Cloning is cheap; clones share the same pool.
#[derive(Debug, Clone)]
pub struct PostgresStore {
    pool: PgPool,
    statement_timeout: Duration,
}

impl PostgresStore {
    /// Wrap an existing pool
    pub fn new(pool: PgPool, statement_timeout: Duration) -> Self {
        Self {
            pool,
            statement_timeout,
        }
    }

    /// Open a pooled connection to PostgreSQL
    pub async fn connect(config: &PostgresConfig) -> Result<Self, DomainError> {
        info!(
            max_connections = config.max_connections,
            min_connections = config.min_connections,
            statement_timeout_ms = config.statement_timeout_ms,
            "Connecting to PostgreSQL"
        );

        let pool = PgPoolOptions::new()
            .max_connections(config.max_connections)
            .min_connections(config.min_connections)
            .acquire_timeout(Duration::from_secs(config.connect_timeout_secs))
            .idle_timeout(Duration::from_secs(config.idle_timeout_secs))
            .connect(&config.url)
            .await
            .map_err(|e| DomainError::storage(format!("Failed to connect to PostgreSQL: {}", e)))?;

        Ok(Self::new(
            pool,
            Duration::from_millis(config.statement_timeout_ms),
        ))
    }

    /// Returns a reference to the connection pool
    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    pub fn statement_timeout(&self) -> Duration {
        self.statement_timeout
    }

    /// Ensures the `users` and `posts` tables exist
    pub async fn ensure_schema(&self) -> Result<(), DomainError> {
        for ddl in [USERS_TABLE, POSTS_TABLE] {
            sqlx::query(ddl)
                .execute(&self.pool)
                .await
                .map_err(|e| DomainError::storage(format!("Failed to create table: {}", e)))?;
        }

        debug!("PostgreSQL schema ensured");
        Ok(())
    }

    /// Run one store operation under the statement timeout
    ///
    /// `operation` names the call in error messages.
    pub async fn bounded<T, F>(&self, operation: &str, fut: F) -> Result<T, DomainError>
    where
        F: Future<Output = Result<T, sqlx::Error>>,
    {
        match tokio::time::timeout(self.statement_timeout, fut).await {
            Ok(result) => result.map_err(|e| classify_sqlx_error(operation, e)),
            Err(_) => Err(DomainError::timeout(format!(
                "{} exceeded {}ms",
                operation,
                self.statement_timeout.as_millis()
            ))),
        }
    }
}

/// Map a sqlx error onto the domain taxonomy
pub(crate) fn classify_sqlx_error(operation: &str, error: sqlx::Error) -> DomainError {
    if let Some(db_error) = error.as_database_error() {
        if db_error.is_unique_violation() {
            return DomainError::conflict(format!("{}: {}", operation, db_error.message()));
        }

        if db_error.is_foreign_key_violation() {
            return DomainError::not_found(format!(
                "{}: referenced row does not exist",
                operation
            ));
        }
    }

    match error {
        sqlx::Error::PoolTimedOut => {
            DomainError::timeout(format!("{}: timed out acquiring a connection", operation))
        }
        other => DomainError::storage(format!("{}: {}", operation, other)),
    }
}
