//! Declarations, their goods lines and supporting documents, and the XML
//! download.

use crate::{
    ApiRepository,
    catalog_routes::{self, EditForm, Id, edit_form},
    crud,
    failure::{Failure, export_failed, internal, not_found},
    resource::{Choice, Resource},
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
    http::{StatusCode, header},
    response::{Html, Redirect},
    routing,
};
use customs_core::{
    models::{
        Consignee, Country, Currency, CustomsOffice, Declaration, DeclarationExport,
        DeclarationId, DocumentType, Entity, Exporter, Goods, GoodsId, HarmonizedCode, Incoterm,
        PackageType, Record, SupportingDocument, TransportMode,
    },
    ports::LineRepository,
};
use customs_export::{ExportSettings, file_name, to_xml_string};
use minijinja::context;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::{collections::BTreeMap, sync::Arc};
use tokio::try_join;

type Choices = BTreeMap<&'static str, Vec<Choice>>;

/// Path parameters addressing one line of a declaration.
#[derive(Deserialize, JsonSchema)]
#[schemars(inline)]
struct LineId<T> {
    /// The owning declaration
    id: DeclarationId,
    /// The line within it
    line_id: T,
}

/// JSON endpoints, to be nested under `/api/declarations`.
pub(crate) fn api_router<T: ApiRepository>() -> ApiRouter<T> {
    catalog_routes::api_router::<T, Declaration>()
        .merge(line_api_router::<T, Goods>())
        .merge(line_api_router::<T, SupportingDocument>())
        .api_route_with(
            "/{id}/bundle",
            get_with(bundle::<T>, bundle_docs),
            |route| route.tag(Declaration::SLUG),
        )
}

fn line_api_router<T, L>() -> ApiRouter<T>
where
    T: ApiRepository + LineRepository<L>,
    L: Resource,
{
    ApiRouter::new()
        .api_route_with(
            &format!("/{{id}}/{}", L::SLUG),
            get(list_lines::<T, L>).post(create_line::<T, L>),
            |route| route.tag(L::SLUG),
        )
        .api_route_with(
            &format!("/{{id}}/{}/{{line_id}}", L::SLUG),
            get(read_line::<T, L>)
                .put(update_line::<T, L>)
                .delete(delete_line::<T, L>),
            |route| route.tag(L::SLUG),
        )
}

/// HTML pages under `/declarations`.
pub(crate) fn page_router<T: ApiRepository>() -> Router<T> {
    Router::new()
        .route("/declarations", routing::get(list_page::<T>))
        .route("/declarations/add", routing::post(add::<T>))
        .route("/declarations/{id}", routing::get(detail::<T>))
        .route(
            "/declarations/{id}/edit",
            routing::get(edit_page::<T>).post(edit::<T>),
        )
        .route("/declarations/{id}/delete", routing::post(remove::<T>))
        .route("/declarations/{id}/export", routing::post(export::<T>))
        .merge(line_page_router::<T, Goods>())
        .merge(line_page_router::<T, SupportingDocument>())
}

fn line_page_router<T, L>() -> Router<T>
where
    T: ApiRepository + LineRepository<L>,
    L: Resource,
{
    let base = format!("/declarations/{{id}}/{}", L::SLUG);
    Router::new()
        .route(&format!("{base}/add"), routing::post(add_line::<T, L>))
        .route(
            &format!("{base}/{{line_id}}/edit"),
            routing::get(edit_line_page::<T, L>).post(edit_line::<T, L>),
        )
        .route(
            &format!("{base}/{{line_id}}/delete"),
            routing::post(remove_line::<T, L>),
        )
}

/// Every select list a declaration page may need, keyed by table slug.
async fn choices<T: ApiRepository>(db: &T) -> Result<Choices, Failure> {
    let (
        countries,
        incoterms,
        transport_modes,
        package_types,
        harmonized_codes,
        customs_offices,
        currencies,
        document_types,
        exporters,
        consignees,
    ) = try_join!(
        crud::choices::<T, Country>(db),
        crud::choices::<T, Incoterm>(db),
        crud::choices::<T, TransportMode>(db),
        crud::choices::<T, PackageType>(db),
        crud::choices::<T, HarmonizedCode>(db),
        crud::choices::<T, CustomsOffice>(db),
        crud::choices::<T, Currency>(db),
        crud::choices::<T, DocumentType>(db),
        crud::choices::<T, Exporter>(db),
        crud::choices::<T, Consignee>(db),
    )?;

    Ok(BTreeMap::from([
        (Country::SLUG, countries),
        (Incoterm::SLUG, incoterms),
        (TransportMode::SLUG, transport_modes),
        (PackageType::SLUG, package_types),
        (HarmonizedCode::SLUG, harmonized_codes),
        (CustomsOffice::SLUG, customs_offices),
        (Currency::SLUG, currencies),
        (DocumentType::SLUG, document_types),
        (Exporter::SLUG, exporters),
        (Consignee::SLUG, consignees),
    ]))
}

fn detail_url(id: DeclarationId) -> String {
    format!("/declarations/{id}")
}

async fn list_page<T: ApiRepository>(
    State(db): State<T>,
    Extension(views): Extension<Arc<Views>>,
) -> Result<Html<String>, Failure> {
    let (rows, choices) = try_join!(crud::list::<T, Declaration>(&db), choices(&db))?;
    views.render(
        "declarations.html",
        context! {
            rows => rows,
            fields => Declaration::FIELDS,
            choices => choices,
        },
    )
}

async fn add<T: ApiRepository>(
    State(db): State<T>,
    Form(data): Form<Declaration>,
) -> Result<Redirect, Failure> {
    let record = crud::create::<T, Declaration>(&db, data).await?;
    Ok(Redirect::to(&detail_url(record.id)))
}

/// Totals shown under the goods table.
#[derive(Serialize)]
struct Totals {
    packages: i64,
    gross_mass: String,
    statistical_value: String,
}

impl Totals {
    fn of(goods: &[Record<GoodsId, Goods>]) -> Self {
        Self {
            packages: goods
                .iter()
                .fold(0i64, |total, line| total.saturating_add(line.data.number_of_packages)),
            gross_mass: format!(
                "{:.3}",
                goods.iter().map(|line| line.data.gross_mass).sum::<f64>()
            ),
            statistical_value: format!(
                "{:.2}",
                goods
                    .iter()
                    .map(|line| line.data.statistical_value)
                    .sum::<f64>()
            ),
        }
    }
}

async fn detail<T: ApiRepository>(
    State(db): State<T>,
    Extension(views): Extension<Arc<Views>>,
    Path(Id { id }): Path<Id<DeclarationId>>,
) -> Result<Html<String>, Failure> {
    let (declaration, goods, documents, choices) = try_join!(
        crud::read::<T, Declaration>(&db, id),
        crud::list_lines::<T, Goods>(&db, id),
        crud::list_lines::<T, SupportingDocument>(&db, id),
        choices(&db),
    )?;

    let next_sequence_number = goods
        .iter()
        .map(|line| line.data.sequence_number)
        .max()
        .unwrap_or(0)
        .saturating_add(1);

    views.render(
        "declaration.html",
        context! {
            declaration => declaration,
            fields => Declaration::FIELDS,
            choices => choices,
            totals => Totals::of(&goods),
            goods => goods,
            goods_fields => Goods::FIELDS,
            documents => documents,
            document_fields => SupportingDocument::FIELDS,
            next_sequence_number => next_sequence_number,
        },
    )
}

async fn edit_page<T: ApiRepository>(
    State(db): State<T>,
    Extension(views): Extension<Arc<Views>>,
    Path(Id { id }): Path<Id<DeclarationId>>,
) -> Result<Html<String>, Failure> {
    let (record, choices) = try_join!(crud::read::<T, Declaration>(&db, id), choices(&db))?;
    edit_form(
        &views,
        EditForm {
            title: format!("Edit declaration {}", record.data.label()),
            action: format!("/declarations/{id}/edit"),
            back: detail_url(id),
            fields: Declaration::FIELDS,
            values: &record.data,
            choices: &choices,
        },
    )
}

async fn edit<T: ApiRepository>(
    State(db): State<T>,
    Path(Id { id }): Path<Id<DeclarationId>>,
    Form(data): Form<Declaration>,
) -> Result<Redirect, Failure> {
    crud::update::<T, Declaration>(&db, id, data).await?;
    Ok(Redirect::to(&detail_url(id)))
}

async fn remove<T: ApiRepository>(
    State(db): State<T>,
    Path(Id { id }): Path<Id<DeclarationId>>,
) -> Result<Redirect, Failure> {
    crud::delete::<T, Declaration>(&db, id).await?;
    Ok(Redirect::to("/declarations"))
}

async fn add_line<T, L>(
    State(db): State<T>,
    Path(Id { id }): Path<Id<DeclarationId>>,
    Form(data): Form<L>,
) -> Result<Redirect, Failure>
where
    T: ApiRepository + LineRepository<L>,
    L: Resource,
{
    crud::create_line::<T, L>(&db, id, data).await?;
    Ok(Redirect::to(&detail_url(id)))
}

async fn edit_line_page<T, L>(
    State(db): State<T>,
    Extension(views): Extension<Arc<Views>>,
    Path(LineId { id, line_id }): Path<LineId<L::Id>>,
) -> Result<Html<String>, Failure>
where
    T: ApiRepository + LineRepository<L>,
    L: Resource,
{
    let (record, choices) = try_join!(crud::read_line::<T, L>(&db, id, line_id), choices(&db))?;
    edit_form(
        &views,
        EditForm {
            title: format!("Edit {} {}", L::NAME, record.data.label()),
            action: format!("/declarations/{id}/{}/{line_id}/edit", L::SLUG),
            back: detail_url(id),
            fields: L::FIELDS,
            values: &record.data,
            choices: &choices,
        },
    )
}

async fn edit_line<T, L>(
    State(db): State<T>,
    Path(LineId { id, line_id }): Path<LineId<L::Id>>,
    Form(data): Form<L>,
) -> Result<Redirect, Failure>
where
    T: ApiRepository + LineRepository<L>,
    L: Resource,
{
    crud::update_line::<T, L>(&db, id, line_id, data).await?;
    Ok(Redirect::to(&detail_url(id)))
}

async fn remove_line<T, L>(
    State(db): State<T>,
    Path(LineId { id, line_id }): Path<LineId<L::Id>>,
) -> Result<Redirect, Failure>
where
    T: ApiRepository + LineRepository<L>,
    L: Resource,
{
    crud::delete_line::<T, L>(&db, id, line_id).await?;
    Ok(Redirect::to(&detail_url(id)))
}

async fn load_bundle<T: ApiRepository>(
    db: &T,
    id: DeclarationId,
) -> Result<DeclarationExport, Failure> {
    db.load_export(id)
        .await
        .map_err(internal(format!("failed to load declaration {id}")))?
        .ok_or_else(|| not_found(Declaration::NAME, id))
}

/// Render the declaration as XML and offer it as a download.
async fn export<T: ApiRepository>(
    State(db): State<T>,
    Extension(settings): Extension<Arc<ExportSettings>>,
    Path(Id { id }): Path<Id<DeclarationId>>,
) -> Result<([(header::HeaderName, String); 2], String), Failure> {
    let bundle = load_bundle(&db, id).await?;
    let xml = to_xml_string(&bundle, &settings).map_err(export_failed)?;
    let name = file_name(&bundle);
    tracing::info!(declaration = %id, file = %name, "exported");
    Ok((
        [
            (header::CONTENT_TYPE, "application/xml; charset=utf-8".to_owned()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{name}\""),
            ),
        ],
        xml,
    ))
}

async fn bundle<T: ApiRepository>(
    State(db): State<T>,
    Path(Id { id }): Path<Id<DeclarationId>>,
) -> Result<Json<DeclarationExport>, Failure> {
    load_bundle(&db, id).await.map(Json)
}

fn bundle_docs(op: TransformOperation) -> TransformOperation {
    op.summary("Resolve a declaration")
        .description(
            "The declaration with every reference replaced by the referenced row, \
             plus its goods and documents. This is the input of the XML export.",
        )
        .response_with::<404, String, _>(|res| res.description("No such declaration"))
}

async fn list_lines<T, L>(
    State(db): State<T>,
    Path(Id { id }): Path<Id<DeclarationId>>,
) -> Result<Json<Vec<Record<L::Id, L>>>, Failure>
where
    T: ApiRepository + LineRepository<L>,
    L: Resource,
{
    crud::list_lines::<T, L>(&db, id).await.map(Json)
}

async fn create_line<T, L>(
    State(db): State<T>,
    Path(Id { id }): Path<Id<DeclarationId>>,
    Json(data): Json<L>,
) -> Result<(StatusCode, Json<Record<L::Id, L>>), Failure>
where
    T: ApiRepository + LineRepository<L>,
    L: Resource,
{
    let record = crud::create_line::<T, L>(&db, id, data).await?;
    Ok((StatusCode::CREATED, Json(record)))
}

async fn read_line<T, L>(
    State(db): State<T>,
    Path(LineId { id, line_id }): Path<LineId<L::Id>>,
) -> Result<Json<Record<L::Id, L>>, Failure>
where
    T: ApiRepository + LineRepository<L>,
    L: Resource,
{
    crud::read_line::<T, L>(&db, id, line_id).await.map(Json)
}

async fn update_line<T, L>(
    State(db): State<T>,
    Path(LineId { id, line_id }): Path<LineId<L::Id>>,
    Json(data): Json<L>,
) -> Result<Json<Record<L::Id, L>>, Failure>
where
    T: ApiRepository + LineRepository<L>,
    L: Resource,
{
    crud::update_line::<T, L>(&db, id, line_id, data).await.map(Json)
}

async fn delete_line<T, L>(
    State(db): State<T>,
    Path(LineId { id, line_id }): Path<LineId<L::Id>>,
) -> Result<Json<Record<L::Id, L>>, Failure>
where
    T: ApiRepository + LineRepository<L>,
    L: Resource,
{
    crud::delete_line::<T, L>(&db, id, line_id).await.map(Json)
}
