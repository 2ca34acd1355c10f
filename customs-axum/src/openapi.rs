//! OpenAPI description of the JSON API, served next to a RapiDoc viewer.

use std::sync::Arc;

use aide::{
    axum::{ApiRouter, IntoApiResponse, routing::get},
    openapi::{OpenApi, Tag},
    transform::TransformOpenApi,
};
use axum::{
    Extension, Json,
    response::{Html, IntoResponse},
};

use crate::catalog_routes::TABLES;

/// The interactive viewer, pointed at `/docs/api.json`.
async fn serve_rapidoc() -> impl IntoApiResponse {
    let html = r#"<!doctype html>
<html>
  <head>
    <meta charset="utf-8">
    <script src="https://cdnjs.cloudflare.com/ajax/libs/rapidoc/9.3.8/rapidoc-min.js" integrity="sha512-0ES6eX4K9J1PrIEjIizv79dTlN5HwI2GW9Ku6ymb8dijMHF5CIplkS8N0iFJ/wl3GybCSqBJu8HDhiFkZRAf0g==" crossorigin="anonymous" referrerpolicy="no-referrer"></script>
  </head>
  <body>
    <rapi-doc spec-url="/docs/api.json"
        show-method-in-nav-bar="as-colored-text"
        use-path-in-nav-bar="true"
        allow-authentication="false"
    ></rapi-doc>
  </body>
</html>"#;
    Html(html).into_response()
}

pub(crate) fn docs_routes() -> ApiRouter {
    ApiRouter::new()
        .route("/", get(serve_rapidoc))
        .route("/api.json", get(serve_docs))
}

async fn serve_docs(Extension(api): Extension<Arc<OpenApi>>) -> impl IntoApiResponse {
    Json(api).into_response()
}

fn tag(name: &str, description: String) -> Tag {
    Tag {
        name: name.into(),
        description: Some(description),
        ..Default::default()
    }
}

/// Title, description and one tag per table.
pub(crate) fn api_docs(api: TransformOpenApi) -> TransformOpenApi {
    let api = api
        .title("Customs Export API")
        .summary("Reference tables and export declarations, as JSON.")
        .description(
            "Every table offered by the HTML interface is also available here. \
             Declarations carry goods lines and supporting documents, and their \
             resolved bundle is what the XML export is rendered from.",
        )
        .version("0.1");

    let api = TABLES.iter().fold(api, |api, (slug, title)| {
        api.tag(tag(slug, format!("{title} reference table")))
    });

    api.tag(tag("declarations", "Export declarations".into()))
        .tag(tag("goods", "Goods lines of a declaration".into()))
        .tag(tag(
            "documents",
            "Supporting documents of a declaration".into(),
        ))
}
