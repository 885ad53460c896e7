#![warn(missing_docs)]
//! SQLite persistence for the product interest ranking service.
//!
//! This crate implements the repository traits defined in `recs-core` on
//! top of SQLite via `sqlx`, including the group-by-mean aggregation
//! queries and the transactional catalog replace.

use sqlx::sqlite;
use std::{
    str::FromStr,
    sync::atomic::{AtomicU64, Ordering},
    time::Duration,
};
use tokio::try_join;

pub mod config;
mod r#impl;
pub(crate) mod types;

use config::SqliteConfig;

/// SQLite database implementation of the ranking service repositories.
///
/// This struct provides separate reader and writer connection pools,
/// implementing all the repository traits defined in `recs-core`. The
/// separation of read and write connections follows SQLite best practices
/// for Write-Ahead Logging (WAL) mode.
///
/// # Connection Management
///
/// - `reader`: a connection pool for read operations, allowing concurrent reads
/// - `writer`: a single-connection pool for write operations, serializing all
///   mutations (including the multi-statement catalog replace, which runs in
///   a transaction on this pool)
///
/// # Example
///
/// ```no_run
/// # use recs_sqlite::{Db, config::SqliteConfig};
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let config = SqliteConfig::default();
/// let db = Db::open(&config).await?;
/// # Ok(())
/// # }
/// ```
#[derive(Clone)]
pub struct Db {
    /// Connection pool for read operations
    pub reader: sqlx::Pool<sqlx::Sqlite>,
    /// Connection pool for write operations (limited to 1 connection)
    pub writer: sqlx::Pool<sqlx::Sqlite>,
}

impl Db {
    /// Open a connection to the specified SQLite database.
    ///
    /// Creates a new database if one doesn't exist (when
    /// `create_if_missing` is true) and applies all pending migrations.
    ///
    /// # Errors
    ///
    /// Returns `sqlx::Error` if the connection fails or migrations fail to
    /// apply.
    pub async fn open(config: &SqliteConfig) -> Result<Self, sqlx::Error> {
        // A bare `:memory:` would give every pooled connection its own
        // private database, so the in-memory fallback goes through a
        // uniquely named shared-cache database instead.
        static MEMORY_DB_SEQ: AtomicU64 = AtomicU64::new(0);
        let db_path = match &config.database_path {
            Some(path) => path.to_string_lossy().into_owned(),
            None => {
                let n = MEMORY_DB_SEQ.fetch_add(1, Ordering::Relaxed);
                format!("file:recs-memory-{n}?mode=memory&cache=shared")
            }
        };

        let options = sqlite::SqliteConnectOptions::from_str(&db_path)?
            .busy_timeout(Duration::from_secs(5))
            .foreign_keys(false)
            .journal_mode(sqlite::SqliteJournalMode::Wal)
            .synchronous(sqlite::SqliteSynchronous::Normal)
            .pragma("journal_size_limit", "27103364")
            .pragma("mmap_size", "134217728")
            .pragma("temp_store", "memory")
            .create_if_missing(config.create_if_missing);

        let reader = sqlite::SqlitePoolOptions::new().connect_with(options.clone());
        let writer = sqlite::SqlitePoolOptions::new()
            .max_connections(1)
            .min_connections(1)
            .connect_with(options);

        let (reader, writer) = try_join!(reader, writer)?;

        // Run any pending migrations before returning
        sqlx::migrate!("./schema").run(&writer).await?;

        Ok(Self { reader, writer })
    }
}
