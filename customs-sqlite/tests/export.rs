mod common;

use common::{fixture, open};
use customs_core::{
    models::*,
    ports::{ExportRepository, LineRepository},
};

#[tokio::test]
async fn bundle_resolves_every_reference() -> anyhow::Result<()> {
    let db = open().await?;
    let fixture = fixture(&db).await?;
    let declaration = fixture.declaration_id;

    LineRepository::<Goods>::create_line(&db, declaration, fixture.goods(2, 60.25)).await??;
    LineRepository::<Goods>::create_line(&db, declaration, fixture.goods(1, 1025.5)).await??;
    let invoice = LineRepository::<SupportingDocument>::create_line(
        &db,
        declaration,
        fixture.document("INV-77"),
    )
    .await??;
    let bill = LineRepository::<SupportingDocument>::create_line(
        &db,
        declaration,
        fixture.document("BL-1234"),
    )
    .await??;

    let bundle = db
        .load_export(declaration)
        .await?
        .expect("declaration exists");

    assert_eq!(bundle.declaration.id, declaration);
    assert_eq!(bundle.declaration.data, fixture.declaration);
    assert_eq!(bundle.exporter.name, "Caucasus Trading LLC");
    assert_eq!(bundle.consignee.name, "Hanse Import GmbH");
    assert_eq!(bundle.destination.code, "DE");
    assert_eq!(bundle.incoterm.code, "FCA");
    assert_eq!(bundle.currency.code, "USD");
    assert_eq!(bundle.office_of_export.code, "GE000101");
    assert_eq!(bundle.office_of_exit.code, "GE000202");
    assert_eq!(bundle.transport_mode.description, "Maritime");

    let sequence = bundle
        .goods
        .iter()
        .map(|line| line.goods.sequence_number)
        .collect::<Vec<_>>();
    assert_eq!(sequence, [1, 2]);
    assert!(bundle.goods.iter().all(|line| {
        line.harmonized_code.code == "0802220000" && line.package_type.code == "BG"
    }));
    assert_eq!(bundle.total_gross_mass(), 1085.75);

    let documents = bundle
        .documents
        .iter()
        .map(|line| (line.id, line.document_type.code.as_str()))
        .collect::<Vec<_>>();
    assert_eq!(documents, [(invoice.id, "N935"), (bill.id, "N935")]);

    Ok(())
}

#[tokio::test]
async fn bundle_of_missing_declaration() -> anyhow::Result<()> {
    let db = open().await?;
    assert!(db.load_export(DeclarationId(7)).await?.is_none());
    Ok(())
}
