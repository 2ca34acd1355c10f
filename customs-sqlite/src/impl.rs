//! Repository trait implementations for the SQLite database.

use crate::Db;
use customs_core::ports::Repository;

mod catalog;
mod export;
mod line;

impl Repository for Db {
    type Error = sqlx::Error;
}
