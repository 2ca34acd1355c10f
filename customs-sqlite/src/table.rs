//! How each entity maps onto its table.
//!
//! The repository implementations are written once, generically, against
//! [`Table`]. Each entity supplies its table name, its columns in bind order,
//! and the code to decode a row and bind a value.

use customs_core::models::*;
use sqlx::{
    Row, Sqlite,
    sqlite::{SqliteArguments, SqliteRow},
};

/// A query under construction, ready for more `bind` calls.
pub type SqliteQuery<'q> = sqlx::query::Query<'q, Sqlite, SqliteArguments<'q>>;

/// The mapping of an entity onto a table.
///
/// Every table has an integer `id` primary key in addition to
/// [`COLUMNS`](Table::COLUMNS).
pub trait Table: Entity {
    /// Table name
    const TABLE: &'static str;

    /// Data columns, in the order [`bind`](Table::bind) binds them
    const COLUMNS: &'static [&'static str];

    /// `order by` clause for listings
    const ORDER_BY: &'static str = "id";

    /// Read the entity out of a row that carries all of `COLUMNS`.
    fn decode(row: &SqliteRow) -> Result<Self, sqlx::Error>;

    /// Bind every column value, in `COLUMNS` order.
    fn bind<'q>(self, query: SqliteQuery<'q>) -> SqliteQuery<'q>;
}

/// A table that stands on its own: reference tables and declarations.
pub trait CatalogTable: Table {}

/// A table whose rows belong to a declaration through `declaration_id`.
pub trait LineTable: Table {}

/// `id, col1, col2, ...`
pub(crate) fn selection<E: Table>() -> String {
    let mut columns = String::from("id");
    for column in E::COLUMNS {
        columns.push_str(", ");
        columns.push_str(column);
    }
    columns
}

/// `?, ?, ...`, one per column
pub(crate) fn placeholders<E: Table>() -> String {
    vec!["?"; E::COLUMNS.len()].join(", ")
}

/// `col1 = ?, col2 = ?, ...`
pub(crate) fn assignments<E: Table>() -> String {
    E::COLUMNS
        .iter()
        .map(|column| format!("{column} = ?"))
        .collect::<Vec<_>>()
        .join(", ")
}

/// Decode the id and data of a row.
pub(crate) fn record<E: Table>(row: &SqliteRow) -> Result<Record<E::Id, E>, sqlx::Error> {
    let id: i64 = row.try_get("id")?;
    Ok(Record::new(E::Id::from(id), E::decode(row)?))
}

macro_rules! coded_table {
    ($entity:ty, $table:literal, $text:ident) => {
        impl Table for $entity {
            const TABLE: &'static str = $table;
            const COLUMNS: &'static [&'static str] = &["code", stringify!($text)];

            fn decode(row: &SqliteRow) -> Result<Self, sqlx::Error> {
                Ok(Self {
                    code: row.try_get("code")?,
                    $text: row.try_get(stringify!($text))?,
                })
            }

            fn bind<'q>(self, query: SqliteQuery<'q>) -> SqliteQuery<'q> {
                query.bind(self.code).bind(self.$text)
            }
        }

        impl CatalogTable for $entity {}
    };
}

coded_table!(Country, "country", name);
coded_table!(Incoterm, "incoterm", description);
coded_table!(TransportMode, "transport_mode", description);
coded_table!(PackageType, "package_type", description);
coded_table!(HarmonizedCode, "harmonized_code", description);
coded_table!(CustomsOffice, "customs_office", name);
coded_table!(Currency, "currency", name);
coded_table!(DocumentType, "document_type", description);

macro_rules! party_table {
    ($entity:ty, $table:literal) => {
        impl Table for $entity {
            const TABLE: &'static str = $table;
            const COLUMNS: &'static [&'static str] = &[
                "name",
                "address",
                "identification_type",
                "identification_number",
            ];

            fn decode(row: &SqliteRow) -> Result<Self, sqlx::Error> {
                Ok(Self {
                    name: row.try_get("name")?,
                    address: row.try_get("address")?,
                    identification_type: row.try_get("identification_type")?,
                    identification_number: row.try_get("identification_number")?,
                })
            }

            fn bind<'q>(self, query: SqliteQuery<'q>) -> SqliteQuery<'q> {
                query
                    .bind(self.name)
                    .bind(self.address)
                    .bind(self.identification_type)
                    .bind(self.identification_number)
            }
        }

        impl CatalogTable for $entity {}
    };
}

party_table!(Exporter, "exporter");
party_table!(Consignee, "consignee");

impl Table for Declaration {
    const TABLE: &'static str = "declaration";
    const COLUMNS: &'static [&'static str] = &[
        "reference_number",
        "validity_date",
        "exporter_id",
        "consignee_id",
        "destination_country_id",
        "incoterm_id",
        "delivery_location",
        "currency_id",
        "exchange_rate",
        "office_of_export_id",
        "office_of_exit_id",
        "transport_mode_id",
    ];

    fn decode(row: &SqliteRow) -> Result<Self, sqlx::Error> {
        Ok(Self {
            reference_number: row.try_get("reference_number")?,
            validity_date: row.try_get("validity_date")?,
            exporter_id: ExporterId(row.try_get("exporter_id")?),
            consignee_id: ConsigneeId(row.try_get("consignee_id")?),
            destination_country_id: CountryId(row.try_get("destination_country_id")?),
            incoterm_id: IncotermId(row.try_get("incoterm_id")?),
            delivery_location: row.try_get("delivery_location")?,
            currency_id: CurrencyId(row.try_get("currency_id")?),
            exchange_rate: row.try_get("exchange_rate")?,
            office_of_export_id: CustomsOfficeId(row.try_get("office_of_export_id")?),
            office_of_exit_id: CustomsOfficeId(row.try_get("office_of_exit_id")?),
            transport_mode_id: TransportModeId(row.try_get("transport_mode_id")?),
        })
    }

    fn bind<'q>(self, query: SqliteQuery<'q>) -> SqliteQuery<'q> {
        query
            .bind(self.reference_number)
            .bind(self.validity_date)
            .bind(self.exporter_id.0)
            .bind(self.consignee_id.0)
            .bind(self.destination_country_id.0)
            .bind(self.incoterm_id.0)
            .bind(self.delivery_location)
            .bind(self.currency_id.0)
            .bind(self.exchange_rate)
            .bind(self.office_of_export_id.0)
            .bind(self.office_of_exit_id.0)
            .bind(self.transport_mode_id.0)
    }
}

impl CatalogTable for Declaration {}

impl Table for Goods {
    const TABLE: &'static str = "goods";
    const COLUMNS: &'static [&'static str] = &[
        "sequence_number",
        "description",
        "harmonized_code_id",
        "package_type_id",
        "number_of_packages",
        "shipping_marks",
        "gross_mass",
        "net_mass",
        "statistical_value",
    ];
    const ORDER_BY: &'static str = "sequence_number, id";

    fn decode(row: &SqliteRow) -> Result<Self, sqlx::Error> {
        Ok(Self {
            sequence_number: row.try_get("sequence_number")?,
            description: row.try_get("description")?,
            harmonized_code_id: HarmonizedCodeId(row.try_get("harmonized_code_id")?),
            package_type_id: PackageTypeId(row.try_get("package_type_id")?),
            number_of_packages: row.try_get("number_of_packages")?,
            shipping_marks: row.try_get("shipping_marks")?,
            gross_mass: row.try_get("gross_mass")?,
            net_mass: row.try_get("net_mass")?,
            statistical_value: row.try_get("statistical_value")?,
        })
    }

    fn bind<'q>(self, query: SqliteQuery<'q>) -> SqliteQuery<'q> {
        query
            .bind(self.sequence_number)
            .bind(self.description)
            .bind(self.harmonized_code_id.0)
            .bind(self.package_type_id.0)
            .bind(self.number_of_packages)
            .bind(self.shipping_marks)
            .bind(self.gross_mass)
            .bind(self.net_mass)
            .bind(self.statistical_value)
    }
}

impl LineTable for Goods {}

impl Table for SupportingDocument {
    const TABLE: &'static str = "supporting_document";
    const COLUMNS: &'static [&'static str] = &["document_type_id", "reference_number", "issue_date"];

    fn decode(row: &SqliteRow) -> Result<Self, sqlx::Error> {
        Ok(Self {
            document_type_id: DocumentTypeId(row.try_get("document_type_id")?),
            reference_number: row.try_get("reference_number")?,
            issue_date: row.try_get("issue_date")?,
        })
    }

    fn bind<'q>(self, query: SqliteQuery<'q>) -> SqliteQuery<'q> {
        query
            .bind(self.document_type_id.0)
            .bind(self.reference_number)
            .bind(self.issue_date)
    }
}

impl LineTable for SupportingDocument {}
