//! Where the database lives and how many readers may hold it open.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Connection settings for [`Db::open`](crate::Db::open).
///
/// ```
/// use customs_sqlite::config::SqliteConfig;
/// use std::path::PathBuf;
///
/// // Throwaway in-memory database, e.g. for tests
/// let config = SqliteConfig::default();
///
/// // An existing file; opening fails rather than creating an empty one
/// let config = SqliteConfig {
///     database_path: Some(PathBuf::from("customs.db")),
///     create_if_missing: false,
///     ..SqliteConfig::default()
/// };
/// ```
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SqliteConfig {
    /// Database file; `None` keeps everything in memory
    #[serde(default)]
    pub database_path: Option<PathBuf>,

    /// Create the file (and apply the schema) if it is not there yet
    #[serde(default = "default_create_if_missing")]
    pub create_if_missing: bool,

    /// Upper bound on pooled read connections
    #[serde(default = "default_max_readers")]
    pub max_readers: u32,
}

fn default_create_if_missing() -> bool {
    true
}

fn default_max_readers() -> u32 {
    8
}

impl Default for SqliteConfig {
    fn default() -> Self {
        Self {
            database_path: None,
            create_if_missing: default_create_if_missing(),
            max_readers: default_max_readers(),
        }
    }
}
