//! What the web layer needs to know about each entity: where it lives in the
//! URL space, what to call it, and how to lay out its form.

use customs_core::models::*;
use schemars::JsonSchema;
use serde::Serialize;

/// An entity exposed through pages and the JSON API.
pub trait Resource: Entity<Id: JsonSchema> + JsonSchema {
    /// Path segment, e.g. `customs-offices`
    const SLUG: &'static str;

    /// Heading for pages listing this entity
    const TITLE: &'static str;

    /// Form layout, in display order
    const FIELDS: &'static [Field];

    /// Short text identifying a row in a select box or heading.
    fn label(&self) -> String;
}

/// One form input.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct Field {
    /// Name of the serialized field
    pub name: &'static str,
    /// Label shown next to the input
    pub label: &'static str,
    /// HTML input kind: `text`, `textarea`, `number`, `date` or `select`
    pub input: &'static str,
    /// Step for number inputs
    pub step: Option<&'static str>,
    /// For selects, the key of the choice list to offer
    pub choices: Option<&'static str>,
    /// Whether the browser should insist on a value
    pub required: bool,
}

impl Field {
    const fn new(name: &'static str, label: &'static str, input: &'static str) -> Self {
        Self {
            name,
            label,
            input,
            step: None,
            choices: None,
            required: true,
        }
    }

    const fn text(name: &'static str, label: &'static str) -> Self {
        Self::new(name, label, "text")
    }

    const fn textarea(name: &'static str, label: &'static str) -> Self {
        Self::new(name, label, "textarea")
    }

    const fn date(name: &'static str, label: &'static str) -> Self {
        Self::new(name, label, "date")
    }

    const fn number(name: &'static str, label: &'static str, step: &'static str) -> Self {
        Self {
            step: Some(step),
            ..Self::new(name, label, "number")
        }
    }

    const fn select(name: &'static str, label: &'static str, choices: &'static str) -> Self {
        Self {
            choices: Some(choices),
            ..Self::new(name, label, "select")
        }
    }

    const fn optional(self) -> Self {
        Self {
            required: false,
            ..self
        }
    }
}

/// An entry of a select box.
#[derive(Debug, Clone, Serialize)]
pub struct Choice {
    /// Row id submitted by the form
    pub id: i64,
    /// Text shown to the operator
    pub label: String,
}

impl Choice {
    pub(crate) fn of<E: Resource>(record: &Record<E::Id, E>) -> Self {
        Self {
            id: record.id.into(),
            label: record.data.label(),
        }
    }
}

macro_rules! coded_resource {
    ($entity:ty, $slug:literal, $title:literal, $text:ident, $text_label:literal) => {
        impl Resource for $entity {
            const SLUG: &'static str = $slug;
            const TITLE: &'static str = $title;
            const FIELDS: &'static [Field] = &[
                Field::text("code", "Code"),
                Field::text(stringify!($text), $text_label),
            ];

            fn label(&self) -> String {
                format!("{} {}", self.code, self.$text)
            }
        }
    };
}

coded_resource!(Country, "countries", "Countries", name, "Name");
coded_resource!(Incoterm, "incoterms", "Incoterms", description, "Description");
coded_resource!(
    TransportMode,
    "transport-modes",
    "Transport modes",
    description,
    "Description"
);
coded_resource!(
    PackageType,
    "package-types",
    "Package types",
    description,
    "Description"
);
coded_resource!(
    HarmonizedCode,
    "harmonized-codes",
    "Harmonized codes",
    description,
    "Description"
);
coded_resource!(CustomsOffice, "customs-offices", "Customs offices", name, "Name");
coded_resource!(Currency, "currencies", "Currencies", name, "Name");
coded_resource!(
    DocumentType,
    "document-types",
    "Document types",
    description,
    "Description"
);

const PARTY_FIELDS: &[Field] = &[
    Field::text("name", "Name"),
    Field::text("address", "Address (street, city, postcode, country)"),
    Field::text("identification_type", "Identification type").optional(),
    Field::text("identification_number", "Identification number").optional(),
];

impl Resource for Exporter {
    const SLUG: &'static str = "exporters";
    const TITLE: &'static str = "Exporters";
    const FIELDS: &'static [Field] = PARTY_FIELDS;

    fn label(&self) -> String {
        self.name.clone()
    }
}

impl Resource for Consignee {
    const SLUG: &'static str = "consignees";
    const TITLE: &'static str = "Consignees";
    const FIELDS: &'static [Field] = PARTY_FIELDS;

    fn label(&self) -> String {
        self.name.clone()
    }
}

impl Resource for Declaration {
    const SLUG: &'static str = "declarations";
    const TITLE: &'static str = "Declarations";
    const FIELDS: &'static [Field] = &[
        Field::text("reference_number", "Local reference number"),
        Field::date("validity_date", "Validity date"),
        Field::select("exporter_id", "Exporter", "exporters"),
        Field::select("consignee_id", "Consignee", "consignees"),
        Field::select("destination_country_id", "Destination", "countries"),
        Field::select("incoterm_id", "Incoterm", "incoterms"),
        Field::text("delivery_location", "Delivery location"),
        Field::select("currency_id", "Currency", "currencies"),
        Field::number("exchange_rate", "Exchange rate", "0.000001"),
        Field::select("office_of_export_id", "Office of export", "customs-offices"),
        Field::select("office_of_exit_id", "Office of exit", "customs-offices"),
        Field::select("transport_mode_id", "Transport mode", "transport-modes"),
    ];

    fn label(&self) -> String {
        self.reference_number.clone()
    }
}

impl Resource for Goods {
    const SLUG: &'static str = "goods";
    const TITLE: &'static str = "Goods";
    const FIELDS: &'static [Field] = &[
        Field::number("sequence_number", "Item", "1"),
        Field::textarea("description", "Description"),
        Field::select("harmonized_code_id", "Tariff code", "harmonized-codes"),
        Field::select("package_type_id", "Package type", "package-types"),
        Field::number("number_of_packages", "Packages", "1"),
        Field::text("shipping_marks", "Shipping marks").optional(),
        Field::number("gross_mass", "Gross mass (kg)", "0.001"),
        Field::number("net_mass", "Net mass (kg)", "0.001"),
        Field::number("statistical_value", "Statistical value", "0.01"),
    ];

    fn label(&self) -> String {
        format!("{}. {}", self.sequence_number, self.description)
    }
}

impl Resource for SupportingDocument {
    const SLUG: &'static str = "documents";
    const TITLE: &'static str = "Supporting documents";
    const FIELDS: &'static [Field] = &[
        Field::select("document_type_id", "Type", "document-types"),
        Field::text("reference_number", "Reference"),
        Field::date("issue_date", "Issue date").optional(),
    ];

    fn label(&self) -> String {
        self.reference_number.clone()
    }
}
