#![warn(missing_docs)]
#![doc = include_str!("../README.md")]

use sqlx::sqlite;
use std::{str::FromStr, time::Duration};
use tokio::try_join;

pub mod config;
mod failure;
mod r#impl;
mod table;

pub use table::{CatalogTable, LineTable, SqliteQuery, Table};

use config::SqliteConfig;

/// SQLite-backed implementation of every repository port.
///
/// Holds two pools over the same database: `reader` for queries, which may
/// run concurrently, and `writer`, capped at one connection so that writes
/// are serialized in the application rather than fought over with
/// `SQLITE_BUSY`.
///
/// ```no_run
/// # use customs_sqlite::{Db, config::SqliteConfig};
/// # async fn example() -> Result<(), sqlx::Error> {
/// let db = Db::open(&SqliteConfig::default()).await?;
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
    /// Open (or create) the database and bring its schema up to date.
    ///
    /// Connections run in WAL mode with foreign keys enforced and a five
    /// second busy timeout.
    ///
    /// # Errors
    ///
    /// Returns `sqlx::Error` if the file cannot be opened or a migration
    /// fails to apply.
    pub async fn open(config: &SqliteConfig) -> Result<Self, sqlx::Error> {
        let db_path = config
            .database_path
            .as_ref()
            .map(|p| p.to_string_lossy().into_owned());

        let options =
            sqlite::SqliteConnectOptions::from_str(db_path.as_deref().unwrap_or(":memory:"))?
                .busy_timeout(Duration::from_secs(5))
                .foreign_keys(true)
                .journal_mode(sqlite::SqliteJournalMode::Wal)
                .synchronous(sqlite::SqliteSynchronous::Normal)
                .pragma("temp_store", "memory")
                .create_if_missing(config.create_if_missing);

        let reader = sqlite::SqlitePoolOptions::new()
            .max_connections(config.max_readers.max(1))
            .connect_with(options.clone());
        let writer = sqlite::SqlitePoolOptions::new()
            .max_connections(1)
            .connect_with(options);

        let (reader, writer) = try_join!(reader, writer)?;

        sqlx::migrate!("./schema").run(&writer).await?;

        tracing::debug!(
            path = db_path.as_deref().unwrap_or(":memory:"),
            "database ready"
        );

        Ok(Self { reader, writer })
    }
}
