use crate::models::{Entity, Record};
use crate::ports::WriteFailure;
use std::future::Future;

/// Repository interface for a single table of rows of one entity.
///
/// Implemented for each reference table and for declarations. Because one
/// adapter implements this trait many times over, callers usually name the
/// entity explicitly, e.g. `CatalogRepository::<Country>::list(&db)`.
pub trait CatalogRepository<E: Entity>: super::Repository {
    /// All rows, ordered by id.
    fn list(&self) -> impl Future<Output = Result<Vec<Record<E::Id, E>>, Self::Error>> + Send;

    /// A single row, or `None` if it does not exist.
    fn read(
        &self,
        id: E::Id,
    ) -> impl Future<Output = Result<Option<Record<E::Id, E>>, Self::Error>> + Send;

    /// Insert a new row and return it with its assigned id.
    fn create(
        &self,
        data: E,
    ) -> impl Future<Output = Result<Result<Record<E::Id, E>, WriteFailure>, Self::Error>> + Send;

    /// Replace the data of an existing row.
    fn update(
        &self,
        id: E::Id,
        data: E,
    ) -> impl Future<Output = Result<Result<Record<E::Id, E>, WriteFailure>, Self::Error>> + Send;

    /// Remove a row, returning what was removed.
    fn delete(
        &self,
        id: E::Id,
    ) -> impl Future<Output = Result<Result<Record<E::Id, E>, WriteFailure>, Self::Error>> + Send;
}
