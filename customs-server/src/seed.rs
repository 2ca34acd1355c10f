//! Standard reference codes for a fresh database.
//!
//! Only code lists published by standards bodies are seeded. Countries,
//! tariff codes, customs offices and parties depend on the deployment and are
//! left to the operator.

use customs_core::{
    models::{Currency, DocumentType, Entity, Incoterm, PackageType, TransportMode},
    ports::{CatalogRepository, Repository, WriteFailure},
};
use tracing::{Level, event};

/// Incoterms 2020.
const INCOTERMS: &[(&str, &str)] = &[
    ("EXW", "Ex Works"),
    ("FCA", "Free Carrier"),
    ("CPT", "Carriage Paid To"),
    ("CIP", "Carriage and Insurance Paid To"),
    ("DAP", "Delivered at Place"),
    ("DPU", "Delivered at Place Unloaded"),
    ("DDP", "Delivered Duty Paid"),
    ("FAS", "Free Alongside Ship"),
    ("FOB", "Free on Board"),
    ("CFR", "Cost and Freight"),
    ("CIF", "Cost, Insurance and Freight"),
];

/// UN/ECE Recommendation 19.
const TRANSPORT_MODES: &[(&str, &str)] = &[
    ("0", "Transport mode not specified"),
    ("1", "Maritime transport"),
    ("2", "Rail transport"),
    ("3", "Road transport"),
    ("4", "Air transport"),
    ("5", "Mail"),
    ("7", "Fixed transport installation"),
    ("8", "Inland water transport"),
    ("9", "Transport mode not applicable"),
];

/// A selection of UN/ECE Recommendation 21.
const PACKAGE_TYPES: &[(&str, &str)] = &[
    ("BG", "Bag"),
    ("BX", "Box"),
    ("CT", "Carton"),
    ("CS", "Case"),
    ("CR", "Crate"),
    ("DR", "Drum"),
    ("PK", "Package"),
    ("PX", "Pallet"),
    ("SA", "Sack"),
    ("VL", "Bulk, liquid"),
    ("VR", "Bulk, solid, granular particles"),
    ("NE", "Unpacked or unpackaged"),
];

/// ISO 4217, the currencies most often invoiced in.
const CURRENCIES: &[(&str, &str)] = &[
    ("USD", "US Dollar"),
    ("EUR", "Euro"),
    ("GBP", "Pound Sterling"),
    ("CHF", "Swiss Franc"),
    ("JPY", "Yen"),
    ("CNY", "Yuan Renminbi"),
    ("TRY", "Turkish Lira"),
    ("AED", "UAE Dirham"),
    ("GEL", "Lari"),
];

/// Supporting document codes in the EU customs code list style.
const DOCUMENT_TYPES: &[(&str, &str)] = &[
    ("N380", "Commercial invoice"),
    ("N325", "Proforma invoice"),
    ("N935", "Invoice on the basis of which the customs value is declared"),
    ("N271", "Packing list"),
    ("N705", "Bill of lading"),
    ("N720", "Rail consignment note"),
    ("N730", "Road consignment note"),
    ("N740", "Air waybill"),
    ("N861", "Certificate of origin"),
    ("N954", "EUR.1 movement certificate"),
];

/// How many rows a seeding run wrote, and how many it found already present.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Seeded {
    /// Rows inserted
    pub inserted: usize,
    /// Rows skipped because their code was taken
    pub skipped: usize,
}

/// Insert every standard code that is not present yet.
pub async fn seed<T>(db: &T) -> Result<Seeded, <T as Repository>::Error>
where
    T: Repository
        + CatalogRepository<Incoterm>
        + CatalogRepository<TransportMode>
        + CatalogRepository<PackageType>
        + CatalogRepository<Currency>
        + CatalogRepository<DocumentType>,
{
    let mut tally = Seeded::default();

    let incoterms = INCOTERMS.iter().map(|&(code, description)| Incoterm {
        code: code.into(),
        description: description.into(),
    });
    insert_all(db, incoterms, &mut tally).await?;

    let modes = TRANSPORT_MODES
        .iter()
        .map(|&(code, description)| TransportMode {
            code: code.into(),
            description: description.into(),
        });
    insert_all(db, modes, &mut tally).await?;

    let packages = PACKAGE_TYPES
        .iter()
        .map(|&(code, description)| PackageType {
            code: code.into(),
            description: description.into(),
        });
    insert_all(db, packages, &mut tally).await?;

    let currencies = CURRENCIES.iter().map(|&(code, name)| Currency {
        code: code.into(),
        name: name.into(),
    });
    insert_all(db, currencies, &mut tally).await?;

    let documents = DOCUMENT_TYPES
        .iter()
        .map(|&(code, description)| DocumentType {
            code: code.into(),
            description: description.into(),
        });
    insert_all(db, documents, &mut tally).await?;

    event!(
        Level::INFO,
        inserted = tally.inserted,
        skipped = tally.skipped,
        "reference data seeded"
    );
    Ok(tally)
}

async fn insert_all<T, E>(
    db: &T,
    rows: impl IntoIterator<Item = E>,
    tally: &mut Seeded,
) -> Result<(), <T as Repository>::Error>
where
    T: Repository + CatalogRepository<E>,
    E: Entity,
{
    for row in rows {
        let row = match row.prepare() {
            Ok(row) => row,
            Err(err) => {
                event!(
                    Level::WARN,
                    entity = E::NAME,
                    err = err.to_string(),
                    "invalid seed row"
                );
                tally.skipped += 1;
                continue;
            }
        };

        match CatalogRepository::<E>::create(db, row).await? {
            Ok(_) => tally.inserted += 1,
            Err(WriteFailure::Duplicate(_)) => tally.skipped += 1,
            Err(failure) => {
                event!(Level::WARN, entity = E::NAME, %failure, "seed row refused");
                tally.skipped += 1;
            }
        }
    }
    Ok(())
}
