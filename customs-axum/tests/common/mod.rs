#![allow(dead_code)]

use axum::http::StatusCode;
use axum_test::TestServer;
use customs_axum::{config::AxumConfig, router};
use customs_export::ExportSettings;
use customs_sqlite::{Db, config::SqliteConfig};
use serde_json::{Value, json};

/// The full application over a fresh in-memory database. Exports are
/// written without indentation.
pub async fn server() -> anyhow::Result<TestServer> {
    let db = Db::open(&SqliteConfig::default()).await?;
    let settings = ExportSettings {
        indent: 0,
        ..ExportSettings::default()
    };
    let app = router(db, AxumConfig::default(), settings)?;
    TestServer::new(app)
}

/// Create a row through the JSON API and return its id.
pub async fn create(server: &TestServer, path: &str, body: Value) -> i64 {
    let response = server.post(path).json(&body).await;
    response.assert_status(StatusCode::CREATED);
    response.json::<Value>()["id"].as_i64().unwrap()
}

/// Ids of the reference rows a declaration needs.
pub struct Refs {
    pub exporter: i64,
    pub consignee: i64,
    pub country: i64,
    pub incoterm: i64,
    pub currency: i64,
    pub office_of_export: i64,
    pub office_of_exit: i64,
    pub transport_mode: i64,
    pub harmonized_code: i64,
    pub package_type: i64,
    pub document_type: i64,
}

pub async fn refs(server: &TestServer) -> Refs {
    Refs {
        exporter: create(
            server,
            "/api/exporters",
            json!({
                "name": "Caucasus Trading LLC",
                "address": "12 Rustaveli Ave, Tbilisi, 0108, GE",
                "identification_type": "TIN",
                "identification_number": "404123456"
            }),
        )
        .await,
        consignee: create(
            server,
            "/api/consignees",
            json!({ "name": "Hanse Import GmbH", "address": "Hafenstrasse 5, Hamburg, 20457" }),
        )
        .await,
        country: create(
            server,
            "/api/countries",
            json!({ "code": "de", "name": "Germany" }),
        )
        .await,
        incoterm: create(
            server,
            "/api/incoterms",
            json!({ "code": "FCA", "description": "Free Carrier" }),
        )
        .await,
        currency: create(
            server,
            "/api/currencies",
            json!({ "code": "USD", "name": "US Dollar" }),
        )
        .await,
        office_of_export: create(
            server,
            "/api/customs-offices",
            json!({ "code": "GE000101", "name": "Tbilisi Central" }),
        )
        .await,
        office_of_exit: create(
            server,
            "/api/customs-offices",
            json!({ "code": "GE000202", "name": "Poti Port" }),
        )
        .await,
        transport_mode: create(
            server,
            "/api/transport-modes",
            json!({ "code": "1", "description": "Maritime" }),
        )
        .await,
        harmonized_code: create(
            server,
            "/api/harmonized-codes",
            json!({ "code": "0802220000", "description": "Hazelnuts, shelled" }),
        )
        .await,
        package_type: create(
            server,
            "/api/package-types",
            json!({ "code": "BG", "description": "Bag" }),
        )
        .await,
        document_type: create(
            server,
            "/api/document-types",
            json!({ "code": "N935", "description": "Invoice" }),
        )
        .await,
    }
}

impl Refs {
    pub fn declaration(&self, reference_number: &str) -> Value {
        json!({
            "reference_number": reference_number,
            "validity_date": "2025-03-01",
            "exporter_id": self.exporter,
            "consignee_id": self.consignee,
            "destination_country_id": self.country,
            "incoterm_id": self.incoterm,
            "delivery_location": "Poti Port",
            "currency_id": self.currency,
            "exchange_rate": 2.7123,
            "office_of_export_id": self.office_of_export,
            "office_of_exit_id": self.office_of_exit,
            "transport_mode_id": self.transport_mode
        })
    }

    pub fn goods(&self, sequence_number: i64) -> Value {
        json!({
            "sequence_number": sequence_number,
            "description": format!("Hazelnuts, lot {sequence_number}"),
            "harmonized_code_id": self.harmonized_code,
            "package_type_id": self.package_type,
            "number_of_packages": 40,
            "gross_mass": 1025.5,
            "net_mass": 1000.0,
            "statistical_value": 8500.0
        })
    }

    pub fn document(&self, reference_number: &str) -> Value {
        json!({
            "document_type_id": self.document_type,
            "reference_number": reference_number,
            "issue_date": "2025-02-20"
        })
    }
}
