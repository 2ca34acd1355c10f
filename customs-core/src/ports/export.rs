use crate::models::{DeclarationExport, DeclarationId};
use std::future::Future;

/// Repository interface for assembling the export bundle.
pub trait ExportRepository: super::Repository {
    /// Load a declaration together with every row it references.
    ///
    /// # Returns
    ///
    /// `Ok(None)` if the declaration does not exist.
    fn load_export(
        &self,
        declaration_id: DeclarationId,
    ) -> impl Future<Output = Result<Option<DeclarationExport>, Self::Error>> + Send;
}
