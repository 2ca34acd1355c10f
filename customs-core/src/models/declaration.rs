use super::{
    ConsigneeId, CountryId, CurrencyId, CustomsOfficeId, DeclarationId, DocumentTypeId, Entity,
    ExporterId, GoodsId, HarmonizedCodeId, IncotermId, PackageTypeId, SupportingDocumentId,
    TransportModeId, ValidationError, iso_date, optional_iso_date,
    validation::{
        at_most, finite, non_negative, not_above, positive, required, trim, trim_optional,
    },
};
use serde::{Deserialize, Serialize};
use time::Date;

/// Largest goods item number a declaration may carry.
pub const MAX_SEQUENCE_NUMBER: i64 = 99_999;

/// Largest package count of a single goods line.
pub const MAX_PACKAGES: i64 = 99_999_999;

/// An export declaration: the filing that ties exporter, consignee, route and
/// commercial terms together. Goods and supporting documents hang off it.
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Declaration {
    /// Local reference number assigned by the declarant, unique
    pub reference_number: String,
    /// Date until which the declaration data is valid
    #[serde(with = "iso_date")]
    #[cfg_attr(feature = "schemars", schemars(with = "String"))]
    pub validity_date: Date,
    /// The exporting party
    pub exporter_id: ExporterId,
    /// The receiving party
    pub consignee_id: ConsigneeId,
    /// Country the goods are destined for
    pub destination_country_id: CountryId,
    /// Delivery term
    pub incoterm_id: IncotermId,
    /// Named place the delivery term refers to
    pub delivery_location: String,
    /// Invoice currency
    pub currency_id: CurrencyId,
    /// Rate from the invoice currency into the internal currency
    pub exchange_rate: f64,
    /// Office where the goods are declared
    pub office_of_export_id: CustomsOfficeId,
    /// Office where the goods leave the customs territory
    pub office_of_exit_id: CustomsOfficeId,
    /// Mode of transport at the border
    pub transport_mode_id: TransportModeId,
}

impl Entity for Declaration {
    type Id = DeclarationId;
    const NAME: &'static str = "declaration";

    fn normalize(&mut self) {
        trim(&mut self.reference_number);
        trim(&mut self.delivery_location);
    }

    fn validate(&self) -> Result<(), ValidationError> {
        required("reference_number", &self.reference_number)?;
        at_most("reference_number", &self.reference_number, 50)?;
        required("delivery_location", &self.delivery_location)?;
        at_most("delivery_location", &self.delivery_location, 255)?;
        finite("exchange_rate", self.exchange_rate)?;
        positive("exchange_rate", self.exchange_rate)
    }
}

/// A goods line of a declaration.
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Goods {
    /// Position of the line, unique within its declaration
    pub sequence_number: i64,
    /// Plain-language description of the goods
    pub description: String,
    /// Tariff classification
    pub harmonized_code_id: HarmonizedCodeId,
    /// How the goods are packed
    pub package_type_id: PackageTypeId,
    /// Number of packages
    pub number_of_packages: i64,
    /// Marks and numbers on the packages
    #[serde(default)]
    pub shipping_marks: Option<String>,
    /// Gross mass in kilograms
    pub gross_mass: f64,
    /// Net mass in kilograms
    pub net_mass: f64,
    /// Statistical value in the invoice currency
    pub statistical_value: f64,
}

impl Entity for Goods {
    type Id = GoodsId;
    const NAME: &'static str = "goods line";

    fn normalize(&mut self) {
        trim(&mut self.description);
        trim_optional(&mut self.shipping_marks);
    }

    fn validate(&self) -> Result<(), ValidationError> {
        positive("sequence_number", self.sequence_number)?;
        not_above("sequence_number", self.sequence_number, MAX_SEQUENCE_NUMBER)?;
        required("description", &self.description)?;
        at_most("description", &self.description, 500)?;
        non_negative("number_of_packages", self.number_of_packages)?;
        not_above("number_of_packages", self.number_of_packages, MAX_PACKAGES)?;
        for (field, value) in [
            ("gross_mass", self.gross_mass),
            ("net_mass", self.net_mass),
            ("statistical_value", self.statistical_value),
        ] {
            finite(field, value)?;
            non_negative(field, value)?;
        }
        Ok(())
    }
}

/// A document supporting a declaration, such as the commercial invoice.
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SupportingDocument {
    /// Kind of document
    pub document_type_id: DocumentTypeId,
    /// The document's own reference, e.g. the invoice number
    pub reference_number: String,
    /// Date the document was issued
    #[serde(default, with = "optional_iso_date")]
    #[cfg_attr(feature = "schemars", schemars(with = "Option<String>"))]
    pub issue_date: Option<Date>,
}

impl Entity for SupportingDocument {
    type Id = SupportingDocumentId;
    const NAME: &'static str = "supporting document";

    fn normalize(&mut self) {
        trim(&mut self.reference_number);
    }

    fn validate(&self) -> Result<(), ValidationError> {
        required("reference_number", &self.reference_number)?;
        at_most("reference_number", &self.reference_number, 70)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::date;

    fn goods() -> Goods {
        Goods {
            sequence_number: 1,
            description: "Laptop computers".into(),
            harmonized_code_id: HarmonizedCodeId(1),
            package_type_id: PackageTypeId(1),
            number_of_packages: 10,
            shipping_marks: None,
            gross_mass: 125.5,
            net_mass: 110.0,
            statistical_value: 15000.0,
        }
    }

    #[test]
    fn goods_masses_must_not_be_negative() {
        assert!(goods().prepare().is_ok());

        let err = Goods {
            net_mass: -1.0,
            ..goods()
        }
        .prepare()
        .unwrap_err();
        assert_eq!(err, ValidationError::Negative("net_mass"));

        let err = Goods {
            sequence_number: 0,
            ..goods()
        }
        .prepare()
        .unwrap_err();
        assert_eq!(err, ValidationError::NotPositive("sequence_number"));
    }

    #[test]
    fn goods_numbers_are_bounded() {
        let err = Goods {
            gross_mass: f64::INFINITY,
            ..goods()
        }
        .prepare()
        .unwrap_err();
        assert_eq!(err, ValidationError::NotFinite("gross_mass"));

        let err = Goods {
            sequence_number: i64::MAX,
            ..goods()
        }
        .prepare()
        .unwrap_err();
        assert_eq!(
            err,
            ValidationError::TooLarge {
                field: "sequence_number",
                max: MAX_SEQUENCE_NUMBER
            }
        );

        let err = Goods {
            number_of_packages: MAX_PACKAGES + 1,
            ..goods()
        }
        .prepare()
        .unwrap_err();
        assert_eq!(
            err,
            ValidationError::TooLarge {
                field: "number_of_packages",
                max: MAX_PACKAGES
            }
        );
    }

    #[test]
    fn goods_description_is_bounded() {
        let err = Goods {
            description: "x".repeat(501),
            ..goods()
        }
        .prepare()
        .unwrap_err();
        assert_eq!(
            err,
            ValidationError::TooLong {
                field: "description",
                max: 500
            }
        );
    }

    #[test]
    fn declaration_reads_from_json() {
        let declaration: Declaration = serde_json::from_value(serde_json::json!({
            "reference_number": " lrn-2025-001 ",
            "validity_date": "2025-03-01",
            "exporter_id": 1,
            "consignee_id": 2,
            "destination_country_id": 3,
            "incoterm_id": 4,
            "delivery_location": "Poti",
            "currency_id": 5,
            "exchange_rate": 2.71,
            "office_of_export_id": 6,
            "office_of_exit_id": 7,
            "transport_mode_id": 8
        }))
        .unwrap();
        let declaration = declaration.prepare().unwrap();

        assert_eq!(declaration.reference_number, "lrn-2025-001");
        assert_eq!(declaration.validity_date, date!(2025 - 03 - 01));
        assert_eq!(declaration.office_of_exit_id, CustomsOfficeId(7));
    }

    #[test]
    fn exchange_rate_must_be_positive() {
        let declaration = Declaration {
            reference_number: "LRN-1".into(),
            validity_date: date!(2025 - 03 - 01),
            exporter_id: ExporterId(1),
            consignee_id: ConsigneeId(1),
            destination_country_id: CountryId(1),
            incoterm_id: IncotermId(1),
            delivery_location: "Poti".into(),
            currency_id: CurrencyId(1),
            exchange_rate: 0.0,
            office_of_export_id: CustomsOfficeId(1),
            office_of_exit_id: CustomsOfficeId(2),
            transport_mode_id: TransportModeId(1),
        };
        assert_eq!(
            declaration.clone().prepare().unwrap_err(),
            ValidationError::NotPositive("exchange_rate")
        );

        let infinite = Declaration {
            exchange_rate: f64::INFINITY,
            ..declaration
        };
        assert_eq!(
            infinite.prepare().unwrap_err(),
            ValidationError::NotFinite("exchange_rate")
        );
    }
}
