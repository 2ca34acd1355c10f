//! Pages and JSON endpoints for tables of standalone rows.
//!
//! Everything here is generic over the entity, so each reference table gets
//! the same list, add, edit and delete behavior. The declaration JSON API
//! reuses [`api_router`] as well.

use crate::{
    ApiRepository, crud,
    failure::Failure,
    resource::{Choice, Field, Resource},
    views::Views,
};
use aide::{
    axum::{
        ApiRouter,
        routing::{get, get_with},
    },
    transform::TransformOperation,
};
use axum::{
    Extension, Form, Json, Router,
    extract::{Path, State},
    http::StatusCode,
    response::{Html, Redirect},
    routing,
};
use customs_core::{
    models::{
        Consignee, Country, Currency, CustomsOffice, DocumentType, Exporter, HarmonizedCode,
        Incoterm, PackageType, Record, TransportMode,
    },
    ports::CatalogRepository,
};
use minijinja::context;
use serde::Serialize;
use std::{collections::BTreeMap, sync::Arc};

/// Path parameter for row-specific endpoints.
#[derive(serde::Deserialize, schemars::JsonSchema)]
#[schemars(inline)]
pub(crate) struct Id<T> {
    /// The identifier of the row
    pub id: T,
}

/// Slug and title of every reference table, in menu order.
pub(crate) const TABLES: &[(&str, &str)] = &[
    (Country::SLUG, Country::TITLE),
    (Incoterm::SLUG, Incoterm::TITLE),
    (TransportMode::SLUG, TransportMode::TITLE),
    (PackageType::SLUG, PackageType::TITLE),
    (HarmonizedCode::SLUG, HarmonizedCode::TITLE),
    (CustomsOffice::SLUG, CustomsOffice::TITLE),
    (Currency::SLUG, Currency::TITLE),
    (DocumentType::SLUG, DocumentType::TITLE),
    (Exporter::SLUG, Exporter::TITLE),
    (Consignee::SLUG, Consignee::TITLE),
];

/// JSON endpoints for one table, to be nested under `/api/{slug}`.
pub(crate) fn api_router<T, E>() -> ApiRouter<T>
where
    T: ApiRepository + CatalogRepository<E>,
    E: Resource,
{
    ApiRouter::new()
        .api_route_with(
            "/",
            get_with(list::<T, E>, list_docs::<E>).post_with(create::<T, E>, create_docs::<E>),
            |route| route.tag(E::SLUG),
        )
        .api_route_with(
            "/{id}",
            get(read::<T, E>)
                .put_with(update::<T, E>, update_docs::<E>)
                .delete_with(delete::<T, E>, delete_docs::<E>),
            |route| route.tag(E::SLUG),
        )
}

/// HTML pages for one table, mounted at `/{slug}`.
pub(crate) fn page_router<T, E>() -> Router<T>
where
    T: ApiRepository + CatalogRepository<E>,
    E: Resource,
{
    let base = format!("/{}", E::SLUG);
    Router::new()
        .route(&base, routing::get(list_page::<T, E>))
        .route(&format!("{base}/add"), routing::post(add::<T, E>))
        .route(
            &format!("{base}/{{id}}/edit"),
            routing::get(edit_page::<T, E>).post(edit::<T, E>),
        )
        .route(&format!("{base}/{{id}}/delete"), routing::post(remove::<T, E>))
}

async fn list<T: ApiRepository + CatalogRepository<E>, E: Resource>(
    State(db): State<T>,
) -> Result<Json<Vec<Record<E::Id, E>>>, Failure> {
    crud::list::<T, E>(&db).await.map(Json)
}

async fn create<T: ApiRepository + CatalogRepository<E>, E: Resource>(
    State(db): State<T>,
    Json(data): Json<E>,
) -> Result<(StatusCode, Json<Record<E::Id, E>>), Failure> {
    let record = crud::create::<T, E>(&db, data).await?;
    Ok((StatusCode::CREATED, Json(record)))
}

async fn read<T: ApiRepository + CatalogRepository<E>, E: Resource>(
    State(db): State<T>,
    Path(Id { id }): Path<Id<E::Id>>,
) -> Result<Json<Record<E::Id, E>>, Failure> {
    crud::read::<T, E>(&db, id).await.map(Json)
}

async fn update<T: ApiRepository + CatalogRepository<E>, E: Resource>(
    State(db): State<T>,
    Path(Id { id }): Path<Id<E::Id>>,
    Json(data): Json<E>,
) -> Result<Json<Record<E::Id, E>>, Failure> {
    crud::update::<T, E>(&db, id, data).await.map(Json)
}

async fn delete<T: ApiRepository + CatalogRepository<E>, E: Resource>(
    State(db): State<T>,
    Path(Id { id }): Path<Id<E::Id>>,
) -> Result<Json<Record<E::Id, E>>, Failure> {
    crud::delete::<T, E>(&db, id).await.map(Json)
}

fn list_docs<E: Resource>(op: TransformOperation) -> TransformOperation {
    op.summary(&format!("List {}", E::SLUG))
        .description("Every row of the table, ordered by id.")
        .response_with::<500, String, _>(|res| res.description("Database query failed"))
}

fn create_docs<E: Resource>(op: TransformOperation) -> TransformOperation {
    op.summary(&format!("Create a {}", E::NAME))
        .description("Text is trimmed and codes are upper-cased before storing.")
        .response_with::<409, String, _>(|res| {
            res.description("Duplicate code or reference to a missing row")
        })
        .response_with::<422, String, _>(|res| res.description("Missing or out-of-range value"))
        .response_with::<500, String, _>(|res| res.description("Database operation failed"))
}

fn update_docs<E: Resource>(op: TransformOperation) -> TransformOperation {
    op.summary(&format!("Replace a {}", E::NAME))
        .response_with::<404, String, _>(|res| res.description("No such row"))
        .response_with::<409, String, _>(|res| {
            res.description("Duplicate code or reference to a missing row")
        })
        .response_with::<422, String, _>(|res| res.description("Missing or out-of-range value"))
}

fn delete_docs<E: Resource>(op: TransformOperation) -> TransformOperation {
    op.summary(&format!("Delete a {}", E::NAME))
        .description("Returns the removed row.")
        .response_with::<404, String, _>(|res| res.description("No such row"))
        .response_with::<409, String, _>(|res| res.description("The row is still referenced"))
}

async fn list_page<T: ApiRepository + CatalogRepository<E>, E: Resource>(
    State(db): State<T>,
    Extension(views): Extension<Arc<Views>>,
) -> Result<Html<String>, Failure> {
    let rows = crud::list::<T, E>(&db).await?;
    views.render(
        "catalog.html",
        context! {
            title => E::TITLE,
            slug => E::SLUG,
            fields => E::FIELDS,
            rows => rows,
        },
    )
}

async fn add<T: ApiRepository + CatalogRepository<E>, E: Resource>(
    State(db): State<T>,
    Form(data): Form<E>,
) -> Result<Redirect, Failure> {
    crud::create::<T, E>(&db, data).await?;
    Ok(Redirect::to(&format!("/{}", E::SLUG)))
}

async fn edit_page<T: ApiRepository + CatalogRepository<E>, E: Resource>(
    State(db): State<T>,
    Extension(views): Extension<Arc<Views>>,
    Path(Id { id }): Path<Id<E::Id>>,
) -> Result<Html<String>, Failure> {
    let record = crud::read::<T, E>(&db, id).await?;
    let back = format!("/{}", E::SLUG);
    edit_form(
        &views,
        EditForm {
            title: format!("Edit {} {}", E::NAME, record.data.label()),
            action: format!("{back}/{id}/edit"),
            back,
            fields: E::FIELDS,
            values: &record.data,
            choices: &BTreeMap::new(),
        },
    )
}

async fn edit<T: ApiRepository + CatalogRepository<E>, E: Resource>(
    State(db): State<T>,
    Path(Id { id }): Path<Id<E::Id>>,
    Form(data): Form<E>,
) -> Result<Redirect, Failure> {
    crud::update::<T, E>(&db, id, data).await?;
    Ok(Redirect::to(&format!("/{}", E::SLUG)))
}

async fn remove<T: ApiRepository + CatalogRepository<E>, E: Resource>(
    State(db): State<T>,
    Path(Id { id }): Path<Id<E::Id>>,
) -> Result<Redirect, Failure> {
    crud::delete::<T, E>(&db, id).await?;
    Ok(Redirect::to(&format!("/{}", E::SLUG)))
}

/// Everything the shared edit page shows.
#[derive(Serialize)]
pub(crate) struct EditForm<'a, V: Serialize> {
    pub title: String,
    pub action: String,
    pub back: String,
    pub fields: &'static [Field],
    pub values: &'a V,
    pub choices: &'a BTreeMap<&'static str, Vec<Choice>>,
}

pub(crate) fn edit_form<V: Serialize>(
    views: &Views,
    form: EditForm<'_, V>,
) -> Result<Html<String>, Failure> {
    views.render("edit.html", form)
}
