#![warn(missing_docs)]
#![doc = include_str!("../README.md")]

mod catalog_routes;
mod crud;
mod declaration_routes;
mod failure;
mod resource;
mod views;

pub use views::Views;

use aide::{
    axum::{ApiRouter, routing::get},
    openapi::OpenApi,
};
use axum::{Extension, Json, Router, extract::DefaultBodyLimit, routing};
use customs_core::{
    models::{
        Consignee, Country, Currency, CustomsOffice, Declaration, DocumentType, Exporter, Goods,
        HarmonizedCode, Incoterm, PackageType, SupportingDocument, TransportMode,
    },
    ports::{CatalogRepository, ExportRepository, LineRepository},
};
use customs_export::ExportSettings;
use minijinja::context;
use resource::Resource;
use schemars::JsonSchema;
use serde::Serialize;
use std::sync::Arc;
use tower_http::trace::TraceLayer;

mod openapi;
use openapi::{api_docs, docs_routes};

pub mod config;
use config::AxumConfig;

/// Response for the health check endpoint
#[derive(Serialize, JsonSchema)]
#[schemars(inline)]
struct HealthResponse {
    status: String,
}

/// Simple health check endpoint
async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
    })
}

async fn home(
    Extension(views): Extension<Arc<Views>>,
) -> Result<axum::response::Html<String>, failure::Failure> {
    let tables = catalog_routes::TABLES
        .iter()
        .map(|(slug, title)| context! { slug => slug, title => title })
        .collect::<Vec<_>>();
    views.render("home.html", context! { tables => tables })
}

// Every reference table gets the same pages and JSON endpoints.
macro_rules! reference_tables {
    ($api:expr, $pages:expr, [$($entity:ty),* $(,)?]) => {{
        let (api, pages) = ($api, $pages);
        $(
            let api = api.nest(
                &format!("/api/{}", <$entity as Resource>::SLUG),
                catalog_routes::api_router::<T, $entity>(),
            );
            let pages = pages.merge(catalog_routes::page_router::<T, $entity>());
        )*
        (api, pages)
    }};
}

/// Construct the full application: HTML pages, the JSON API and its docs.
///
/// Fails only if an embedded template does not parse.
pub fn router<T: ApiRepository>(
    state: T,
    config: AxumConfig,
    export: ExportSettings,
) -> Result<Router, minijinja::Error> {
    let views = Views::new()?;
    let mut api = OpenApi::default();

    let (documented, pages) = reference_tables!(
        ApiRouter::new().api_route("/health", get(health_check)),
        Router::new().route("/", routing::get(home)),
        [
            Country,
            Incoterm,
            TransportMode,
            PackageType,
            HarmonizedCode,
            CustomsOffice,
            Currency,
            DocumentType,
            Exporter,
            Consignee,
        ]
    );

    let service = documented
        .nest(
            &format!("/api/{}", Declaration::SLUG),
            declaration_routes::api_router(),
        )
        .nest_api_service("/docs", docs_routes())
        .finish_api_with(&mut api, api_docs)
        .merge(pages)
        .merge(declaration_routes::page_router())
        .layer(DefaultBodyLimit::max(config.body_limit))
        .layer(TraceLayer::new_for_http())
        .layer(Extension(Arc::new(api)))
        .layer(Extension(Arc::new(views)))
        .layer(Extension(Arc::new(export)))
        .layer(Extension(Arc::new(config)))
        .with_state(state);

    Ok(service)
}

/// Starts the HTTP server with the provided configuration
pub async fn start_server<T: ApiRepository>(
    config: AxumConfig,
    export: ExportSettings,
    db: T,
) -> Result<(), std::io::Error> {
    let listener = tokio::net::TcpListener::bind(config.bind_address).await?;

    tracing::info!("Listening for requests on {}", listener.local_addr()?);

    let service = router(db, config, export).map_err(std::io::Error::other)?;
    axum::serve(listener, service).await
}

/// Everything the router needs from its state, stated once. Any storage
/// adapter implementing the repository ports for every table qualifies
/// through the blanket implementation.
pub trait ApiRepository:
    Clone
    + Send
    + Sync
    + 'static
    + CatalogRepository<Country>
    + CatalogRepository<Incoterm>
    + CatalogRepository<TransportMode>
    + CatalogRepository<PackageType>
    + CatalogRepository<HarmonizedCode>
    + CatalogRepository<CustomsOffice>
    + CatalogRepository<Currency>
    + CatalogRepository<DocumentType>
    + CatalogRepository<Exporter>
    + CatalogRepository<Consignee>
    + CatalogRepository<Declaration>
    + LineRepository<Goods>
    + LineRepository<SupportingDocument>
    + ExportRepository
{
}

impl<T> ApiRepository for T where
    T: Clone
        + Send
        + Sync
        + 'static
        + CatalogRepository<Country>
        + CatalogRepository<Incoterm>
        + CatalogRepository<TransportMode>
        + CatalogRepository<PackageType>
        + CatalogRepository<HarmonizedCode>
        + CatalogRepository<CustomsOffice>
        + CatalogRepository<Currency>
        + CatalogRepository<DocumentType>
        + CatalogRepository<Exporter>
        + CatalogRepository<Consignee>
        + CatalogRepository<Declaration>
        + LineRepository<Goods>
        + LineRepository<SupportingDocument>
        + ExportRepository
{
}
