//! Repository calls shared by the pages and the JSON API, with their outcomes
//! already mapped onto HTTP failures.

use crate::{
    failure::{Failure, internal, invalid, not_found, refused},
    resource::{Choice, Resource},
};
use customs_core::{
    models::{Declaration, DeclarationId, Record},
    ports::{CatalogRepository, LineRepository},
};

pub(crate) async fn list<T: CatalogRepository<E>, E: Resource>(
    db: &T,
) -> Result<Vec<Record<E::Id, E>>, Failure> {
    CatalogRepository::<E>::list(db)
        .await
        .map_err(internal(format!("failed to list {}", E::SLUG)))
}

pub(crate) async fn choices<T: CatalogRepository<E>, E: Resource>(
    db: &T,
) -> Result<Vec<Choice>, Failure> {
    Ok(list::<T, E>(db).await?.iter().map(Choice::of).collect())
}

pub(crate) async fn read<T: CatalogRepository<E>, E: Resource>(
    db: &T,
    id: E::Id,
) -> Result<Record<E::Id, E>, Failure> {
    CatalogRepository::<E>::read(db, id)
        .await
        .map_err(internal(format!("failed to read {} {id}", E::NAME)))?
        .ok_or_else(|| not_found(E::NAME, id))
}

pub(crate) async fn create<T: CatalogRepository<E>, E: Resource>(
    db: &T,
    data: E,
) -> Result<Record<E::Id, E>, Failure> {
    let data = data.prepare().map_err(invalid)?;
    let record = CatalogRepository::<E>::create(db, data)
        .await
        .map_err(internal(format!("failed to create {}", E::NAME)))?
        .map_err(|failure| refused(E::NAME, None, failure))?;
    tracing::info!(entity = E::NAME, id = %record.id, "created");
    Ok(record)
}

pub(crate) async fn update<T: CatalogRepository<E>, E: Resource>(
    db: &T,
    id: E::Id,
    data: E,
) -> Result<Record<E::Id, E>, Failure> {
    let data = data.prepare().map_err(invalid)?;
    CatalogRepository::<E>::update(db, id, data)
        .await
        .map_err(internal(format!("failed to update {} {id}", E::NAME)))?
        .map_err(|failure| refused(E::NAME, Some(id.into()), failure))
}

pub(crate) async fn delete<T: CatalogRepository<E>, E: Resource>(
    db: &T,
    id: E::Id,
) -> Result<Record<E::Id, E>, Failure> {
    let record = CatalogRepository::<E>::delete(db, id)
        .await
        .map_err(internal(format!("failed to delete {} {id}", E::NAME)))?
        .map_err(|failure| refused(E::NAME, Some(id.into()), failure))?;
    tracing::info!(entity = E::NAME, %id, "deleted");
    Ok(record)
}

pub(crate) async fn list_lines<T, E>(
    db: &T,
    declaration_id: DeclarationId,
) -> Result<Vec<Record<E::Id, E>>, Failure>
where
    T: LineRepository<E> + CatalogRepository<Declaration>,
    E: Resource,
{
    // Distinguish an empty declaration from a missing one
    read::<T, Declaration>(db, declaration_id).await?;
    LineRepository::<E>::list_lines(db, declaration_id)
        .await
        .map_err(internal(format!(
            "failed to list {} of declaration {declaration_id}",
            E::SLUG
        )))
}

pub(crate) async fn read_line<T: LineRepository<E>, E: Resource>(
    db: &T,
    declaration_id: DeclarationId,
    id: E::Id,
) -> Result<Record<E::Id, E>, Failure> {
    LineRepository::<E>::read_line(db, declaration_id, id)
        .await
        .map_err(internal(format!("failed to read {} {id}", E::NAME)))?
        .ok_or_else(|| not_found(E::NAME, id))
}

pub(crate) async fn create_line<T: LineRepository<E>, E: Resource>(
    db: &T,
    declaration_id: DeclarationId,
    data: E,
) -> Result<Record<E::Id, E>, Failure> {
    let data = data.prepare().map_err(invalid)?;
    let record = LineRepository::<E>::create_line(db, declaration_id, data)
        .await
        .map_err(internal(format!("failed to create {}", E::NAME)))?
        .map_err(|failure| refused("declaration", Some(declaration_id.into()), failure))?;
    tracing::info!(entity = E::NAME, %declaration_id, id = %record.id, "created");
    Ok(record)
}

pub(crate) async fn update_line<T: LineRepository<E>, E: Resource>(
    db: &T,
    declaration_id: DeclarationId,
    id: E::Id,
    data: E,
) -> Result<Record<E::Id, E>, Failure> {
    let data = data.prepare().map_err(invalid)?;
    LineRepository::<E>::update_line(db, declaration_id, id, data)
        .await
        .map_err(internal(format!("failed to update {} {id}", E::NAME)))?
        .map_err(|failure| refused(E::NAME, Some(id.into()), failure))
}

pub(crate) async fn delete_line<T: LineRepository<E>, E: Resource>(
    db: &T,
    declaration_id: DeclarationId,
    id: E::Id,
) -> Result<Record<E::Id, E>, Failure> {
    let record = LineRepository::<E>::delete_line(db, declaration_id, id)
        .await
        .map_err(internal(format!("failed to delete {} {id}", E::NAME)))?
        .map_err(|failure| refused(E::NAME, Some(id.into()), failure))?;
    tracing::info!(entity = E::NAME, %declaration_id, %id, "deleted");
    Ok(record)
}
