use crate::CliError;
use customs_core::{
    models::{DeclarationExport, DeclarationId},
    ports::ExportRepository,
};
use customs_sqlite::{Db, config::SqliteConfig};
use std::path::Path;

/// Read a declaration and everything it references from an existing
/// database file.
pub async fn load_bundle(database: &Path, id: DeclarationId) -> anyhow::Result<DeclarationExport> {
    let config = SqliteConfig {
        database_path: Some(database.to_owned()),
        create_if_missing: false,
        max_readers: 1,
    };
    let db = Db::open(&config).await?;
    let bundle = db.load_export(id).await?;
    Ok(bundle.ok_or(CliError::UnknownDeclaration(id))?)
}
