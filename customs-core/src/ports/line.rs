use crate::models::{DeclarationId, Entity, Record};
use crate::ports::WriteFailure;
use std::future::Future;

/// Repository interface for rows that belong to a declaration, i.e. goods
/// lines and supporting documents.
///
/// Every operation is scoped by the owning declaration: a line addressed
/// through a declaration it does not belong to is reported as missing.
pub trait LineRepository<E: Entity>: super::Repository {
    /// All lines of the declaration. Goods come in sequence order, documents
    /// in the order they were attached.
    fn list_lines(
        &self,
        declaration_id: DeclarationId,
    ) -> impl Future<Output = Result<Vec<Record<E::Id, E>>, Self::Error>> + Send;

    /// A single line of the declaration.
    fn read_line(
        &self,
        declaration_id: DeclarationId,
        id: E::Id,
    ) -> impl Future<Output = Result<Option<Record<E::Id, E>>, Self::Error>> + Send;

    /// Attach a new line to the declaration.
    fn create_line(
        &self,
        declaration_id: DeclarationId,
        data: E,
    ) -> impl Future<Output = Result<Result<Record<E::Id, E>, WriteFailure>, Self::Error>> + Send;

    /// Replace the data of a line.
    fn update_line(
        &self,
        declaration_id: DeclarationId,
        id: E::Id,
        data: E,
    ) -> impl Future<Output = Result<Result<Record<E::Id, E>, WriteFailure>, Self::Error>> + Send;

    /// Remove a line, returning what was removed.
    fn delete_line(
        &self,
        declaration_id: DeclarationId,
        id: E::Id,
    ) -> impl Future<Output = Result<Result<Record<E::Id, E>, WriteFailure>, Self::Error>> + Send;
}
