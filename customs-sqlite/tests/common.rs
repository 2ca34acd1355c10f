#![allow(dead_code)]

use customs_core::{
    models::*,
    ports::{CatalogRepository, WriteFailure},
};
use customs_sqlite::{CatalogTable, Db, config::SqliteConfig};
use time::macros::date;

/// A fresh in-memory database with the schema applied.
pub async fn open() -> anyhow::Result<Db> {
    Ok(Db::open(&SqliteConfig::default()).await?)
}

/// Insert a row that is expected to be accepted.
pub async fn insert<E: CatalogTable>(db: &Db, data: E) -> anyhow::Result<E::Id> {
    let record = CatalogRepository::<E>::create(db, data).await??;
    Ok(record.id)
}

/// The reference rows one declaration needs, plus the declaration itself.
pub struct Fixture {
    pub declaration_id: DeclarationId,
    pub declaration: Declaration,
    pub country_id: CountryId,
    pub harmonized_code_id: HarmonizedCodeId,
    pub package_type_id: PackageTypeId,
    pub document_type_id: DocumentTypeId,
}

pub async fn fixture(db: &Db) -> anyhow::Result<Fixture> {
    let exporter_id = insert(
        db,
        Exporter {
            name: "Caucasus Trading LLC".into(),
            address: "12 Rustaveli Ave, Tbilisi, 0108, GE".into(),
            identification_type: Some("TIN".into()),
            identification_number: Some("404123456".into()),
        },
    )
    .await?;
    let consignee_id = insert(
        db,
        Consignee {
            name: "Hanse Import GmbH".into(),
            address: "Hafenstrasse 5, Hamburg, 20457".into(),
            identification_type: None,
            identification_number: None,
        },
    )
    .await?;
    let country_id = insert(
        db,
        Country {
            code: "DE".into(),
            name: "Germany".into(),
        },
    )
    .await?;
    let incoterm_id = insert(
        db,
        Incoterm {
            code: "FCA".into(),
            description: "Free Carrier".into(),
        },
    )
    .await?;
    let currency_id = insert(
        db,
        Currency {
            code: "USD".into(),
            name: "US Dollar".into(),
        },
    )
    .await?;
    let office_of_export_id = insert(
        db,
        CustomsOffice {
            code: "GE000101".into(),
            name: "Tbilisi Central".into(),
        },
    )
    .await?;
    let office_of_exit_id = insert(
        db,
        CustomsOffice {
            code: "GE000202".into(),
            name: "Poti Port".into(),
        },
    )
    .await?;
    let transport_mode_id = insert(
        db,
        TransportMode {
            code: "1".into(),
            description: "Maritime".into(),
        },
    )
    .await?;
    let harmonized_code_id = insert(
        db,
        HarmonizedCode {
            code: "0802220000".into(),
            description: "Hazelnuts, shelled".into(),
        },
    )
    .await?;
    let package_type_id = insert(
        db,
        PackageType {
            code: "BG".into(),
            description: "Bag".into(),
        },
    )
    .await?;
    let document_type_id = insert(
        db,
        DocumentType {
            code: "N935".into(),
            description: "Invoice".into(),
        },
    )
    .await?;

    let declaration = Declaration {
        reference_number: "LRN-2025-001".into(),
        validity_date: date!(2025 - 03 - 01),
        exporter_id,
        consignee_id,
        destination_country_id: country_id,
        incoterm_id,
        delivery_location: "Poti Port".into(),
        currency_id,
        exchange_rate: 2.7123,
        office_of_export_id,
        office_of_exit_id,
        transport_mode_id,
    };
    let declaration_id = insert(db, declaration.clone()).await?;

    Ok(Fixture {
        declaration_id,
        declaration,
        country_id,
        harmonized_code_id,
        package_type_id,
        document_type_id,
    })
}

impl Fixture {
    pub fn goods(&self, sequence_number: i64, gross_mass: f64) -> Goods {
        Goods {
            sequence_number,
            description: format!("Hazelnuts, lot {sequence_number}"),
            harmonized_code_id: self.harmonized_code_id,
            package_type_id: self.package_type_id,
            number_of_packages: 40,
            shipping_marks: None,
            gross_mass,
            net_mass: gross_mass - 25.0,
            statistical_value: 8500.0,
        }
    }

    pub fn document(&self, reference_number: &str) -> SupportingDocument {
        SupportingDocument {
            document_type_id: self.document_type_id,
            reference_number: reference_number.into(),
            issue_date: Some(date!(2025 - 02 - 20)),
        }
    }

    /// A second declaration over the same reference rows.
    pub fn another(&self, reference_number: &str) -> Declaration {
        Declaration {
            reference_number: reference_number.into(),
            ..self.declaration.clone()
        }
    }
}

/// Unwrap the refusal of a write that is expected to fail.
pub fn refused<T: std::fmt::Debug>(outcome: Result<T, WriteFailure>) -> WriteFailure {
    match outcome {
        Ok(value) => panic!("expected the write to be refused, got {value:?}"),
        Err(failure) => failure,
    }
}
