use customs_core::{
    models::{Currency, Incoterm, TransportMode},
    ports::CatalogRepository,
};
use customs_server::seed::{Seeded, seed};
use customs_sqlite::{Db, config::SqliteConfig};

#[tokio::test]
async fn seeding_twice_inserts_once() -> anyhow::Result<()> {
    let db = Db::open(&SqliteConfig::default()).await?;

    // An operator-entered code survives seeding untouched
    CatalogRepository::<Currency>::create(
        &db,
        Currency {
            code: "USD".into(),
            name: "United States dollar".into(),
        },
    )
    .await??;

    let first = seed(&db).await?;
    assert_eq!(first.skipped, 1);
    assert!(first.inserted > 40);

    let second = seed(&db).await?;
    assert_eq!(
        second,
        Seeded {
            inserted: 0,
            skipped: first.inserted + first.skipped,
        }
    );

    let incoterms = CatalogRepository::<Incoterm>::list(&db).await?;
    assert_eq!(incoterms.len(), 11);
    assert!(incoterms.iter().any(|row| row.data.code == "DPU"));

    let road = CatalogRepository::<TransportMode>::list(&db)
        .await?
        .into_iter()
        .find(|row| row.data.code == "3");
    assert_eq!(
        road.map(|row| row.data.description),
        Some("Road transport".to_owned())
    );

    let usd = CatalogRepository::<Currency>::list(&db)
        .await?
        .into_iter()
        .find(|row| row.data.code == "USD");
    assert_eq!(
        usd.map(|row| row.data.name),
        Some("United States dollar".to_owned())
    );
    Ok(())
}
