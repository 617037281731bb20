//! # SQLite Storage Medium
//!
//! SQLite-backed implementation of [`StorageMedium`].
//!
//! ## Architecture
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                    SQLite Document Store                            │
//! │                                                                     │
//! │  App startup                                                        │
//! │       │                                                             │
//! │       ▼                                                             │
//! │  StoreConfig::new(path) ← configure pool settings                   │
//! │       │                                                             │
//! │       ▼                                                             │
//! │  SqliteMedium::new(config).await ← create pool + run migrations     │
//! │       │                                                             │
//! │       ▼                                                             │
//! │  ┌───────────────────────────────────────┐                          │
//! │  │ kv_store                              │                          │
//! │  │  key (TEXT PK) │ value (BLOB) │ ...   │                          │
//! │  │ ───────────────┼──────────────┼────── │                          │
//! │  │ market_takip…  │ [{"id":...}] │       │ ← the whole collection   │
//! │  └───────────────────────────────────────┘    as ONE JSON document  │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## WAL Mode
//! WAL (Write-Ahead Logging) is enabled for better crash recovery. The
//! store has a single logical writer, so concurrency is not the motivation.

use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;

use chrono::Utc;
use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions, SqliteSynchronous};
use sqlx::SqlitePool;
use tracing::{debug, info};

use crate::error::StorageError;
use crate::medium::StorageMedium;
use crate::migrations;

// =============================================================================
// Configuration
// =============================================================================

/// SQLite store configuration.
///
/// ## Example
/// ```rust,ignore
/// let config = StoreConfig::new("/path/to/shelflife.db").max_connections(2);
/// let medium = SqliteMedium::new(config).await?;
/// ```
#[derive(Debug, Clone)]
pub struct StoreConfig {
    /// Path to the SQLite database file, or ":memory:" for tests.
    pub database_path: PathBuf,

    /// Maximum number of connections in the pool.
    /// Default: 2 (one logical writer plus a reader is plenty)
    pub max_connections: u32,

    /// Connection timeout duration.
    /// Default: 30 seconds
    pub connect_timeout: Duration,

    /// Whether to run migrations on connect.
    /// Default: true
    pub run_migrations: bool,
}

impl StoreConfig {
    /// Creates a configuration for the given database path. The file is
    /// created on first connect if it does not exist.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        StoreConfig {
            database_path: path.into(),
            max_connections: 2,
            connect_timeout: Duration::from_secs(30),
            run_migrations: true,
        }
    }

    /// Sets the maximum number of connections.
    pub fn max_connections(mut self, max: u32) -> Self {
        self.max_connections = max;
        self
    }

    /// Sets the connection timeout.
    pub fn connect_timeout(mut self, timeout: Duration) -> Self {
        self.connect_timeout = timeout;
        self
    }

    /// Sets whether to run migrations on connect.
    pub fn run_migrations(mut self, run: bool) -> Self {
        self.run_migrations = run;
        self
    }

    /// Creates an in-memory database configuration (for testing).
    ///
    /// In-memory databases exist per connection, so the pool is pinned to a
    /// single connection.
    pub fn in_memory() -> Self {
        StoreConfig {
            database_path: PathBuf::from(":memory:"),
            max_connections: 1,
            connect_timeout: Duration::from_secs(5),
            run_migrations: true,
        }
    }
}

// =============================================================================
// SQLite Medium
// =============================================================================

/// Durable [`StorageMedium`] backed by a SQLite `kv_store` table.
#[derive(Debug, Clone)]
pub struct SqliteMedium {
    pool: SqlitePool,
}

impl SqliteMedium {
    /// Opens (and if needed creates) the database and runs migrations.
    pub async fn new(config: StoreConfig) -> Result<Self, StorageError> {
        info!(
            path = %config.database_path.display(),
            "Initializing inventory store"
        );

        let connect_options = if config.database_path == PathBuf::from(":memory:") {
            SqliteConnectOptions::new().in_memory(true)
        } else {
            let connect_url = format!("sqlite://{}?mode=rwc", config.database_path.display());
            SqliteConnectOptions::from_str(&connect_url)
                .map_err(|e| StorageError::WriteFailed(e.to_string()))?
                .journal_mode(SqliteJournalMode::Wal)
                .synchronous(SqliteSynchronous::Normal)
                .create_if_missing(true)
        };

        let pool = SqlitePoolOptions::new()
            .max_connections(config.max_connections)
            .acquire_timeout(config.connect_timeout)
            .connect_with(connect_options)
            .await
            .map_err(|e| StorageError::WriteFailed(e.to_string()))?;

        debug!(max_connections = config.max_connections, "Store pool created");

        let medium = SqliteMedium { pool };

        if config.run_migrations {
            migrations::run_migrations(&medium.pool).await?;
        }

        Ok(medium)
    }

    /// Returns a reference to the connection pool (diagnostics only).
    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Checks if the store is healthy (can execute queries).
    pub async fn health_check(&self) -> bool {
        sqlx::query("SELECT 1").execute(&self.pool).await.is_ok()
    }

    /// Closes the connection pool.
    pub async fn close(&self) {
        info!("Closing inventory store pool");
        self.pool.close().await;
    }
}

impl StorageMedium for SqliteMedium {
    async fn get(&self, key: &str) -> Result<Option<Vec<u8>>, StorageError> {
        let value: Option<Vec<u8>> =
            sqlx::query_scalar("SELECT value FROM kv_store WHERE key = ?1")
                .bind(key)
                .fetch_optional(&self.pool)
                .await
                .map_err(|e| StorageError::ReadFailed(e.to_string()))?;

        Ok(value)
    }

    async fn set(&self, key: &str, value: &[u8]) -> Result<(), StorageError> {
        let now = Utc::now();

        sqlx::query(
            r#"
            INSERT INTO kv_store (key, value, updated_at)
            VALUES (?1, ?2, ?3)
            ON CONFLICT(key) DO UPDATE SET
                value = excluded.value,
                updated_at = excluded.updated_at
            "#,
        )
        .bind(key)
        .bind(value)
        .bind(now)
        .execute(&self.pool)
        .await?;

        debug!(key = %key, bytes = value.len(), "Document persisted");
        Ok(())
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
