//! Reference tables maintained by the operator and referenced by declarations.

use super::{
    ConsigneeId, CountryId, CurrencyId, CustomsOfficeId, DocumentTypeId, Entity, ExporterId,
    HarmonizedCodeId, IncotermId, PackageTypeId, TransportModeId, ValidationError,
    validation::{at_most, code, required, trim, trim_optional},
};

const CODE_WIDTH: usize = 35;
const TEXT_WIDTH: usize = 255;

// Every coded table is a unique `code` plus one descriptive text column.
// An optional `where` names an extra check on the normalized code.
macro_rules! coded_entity {
    (
        $(#[$meta:meta])*
        $struct:ident($id:ty, $name:literal) {
            code: $normalize:path $(where $check:path)?,
            $text:ident: $text_doc:literal $(,)?
        }
    ) => {
        $(#[$meta])*
        #[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
        #[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
        pub struct $struct {
            /// The code, unique within the table
            pub code: String,
            #[doc = $text_doc]
            pub $text: String,
        }

        impl Entity for $struct {
            type Id = $id;
            const NAME: &'static str = $name;

            fn normalize(&mut self) {
                $normalize(&mut self.code);
                trim(&mut self.$text);
            }

            fn validate(&self) -> Result<(), ValidationError> {
                required("code", &self.code)?;
                at_most("code", &self.code, CODE_WIDTH)?;
                $($check("code", &self.code)?;)?
                required(stringify!($text), &self.$text)?;
                at_most(stringify!($text), &self.$text, TEXT_WIDTH)
            }
        }
    };
}

coded_entity! {
    /// A country, identified by its ISO 3166 alpha-2 code.
    Country(CountryId, "country") {
        code: code,
        name: "English short name",
    }
}

coded_entity! {
    /// An Incoterms delivery term such as `FCA` or `DAP`.
    Incoterm(IncotermId, "incoterm") {
        code: code,
        description: "What the term obliges the seller to do",
    }
}

coded_entity! {
    /// A mode of transport, coded per UN/ECE Recommendation 19 (`3` is road).
    TransportMode(TransportModeId, "transport mode") {
        code: code,
        description: "Human-readable mode name",
    }
}

coded_entity! {
    /// A kind of package, coded per UN/ECE Recommendation 21 (`CT` is carton).
    PackageType(PackageTypeId, "package type") {
        code: code,
        description: "Human-readable package name",
    }
}

coded_entity! {
    /// A harmonized tariff code, stored as bare digits.
    ///
    /// The first six digits are the harmonized system subheading, the next two
    /// (when present) the combined nomenclature extension.
    HarmonizedCode(HarmonizedCodeId, "harmonized code") {
        code: digits where only_digits,
        description: "Tariff heading description",
    }
}

coded_entity! {
    /// A customs office, identified by its office reference number.
    CustomsOffice(CustomsOfficeId, "customs office") {
        code: code,
        name: "Office name",
    }
}

coded_entity! {
    /// A currency, identified by its ISO 4217 code.
    Currency(CurrencyId, "currency") {
        code: code,
        name: "Currency name",
    }
}

coded_entity! {
    /// A kind of supporting document, e.g. `N380` for a commercial invoice.
    DocumentType(DocumentTypeId, "document type") {
        code: code,
        description: "Human-readable document name",
    }
}

/// Tariff codes are commonly written with dots or spaces (`8471.30 00`); only
/// the digits are kept.
fn digits(value: &mut String) {
    value.retain(|c| !c.is_whitespace() && c != '.');
}

fn only_digits(field: &'static str, value: &str) -> Result<(), ValidationError> {
    if value.chars().all(|c| c.is_ascii_digit()) {
        Ok(())
    } else {
        Err(ValidationError::NotDigits(field))
    }
}

// Exporters and consignees share one shape: a name, a free-text address and
// an optional identification.
macro_rules! party_entity {
    ($(#[$meta:meta])* $struct:ident($id:ty, $name:literal)) => {
        $(#[$meta])*
        #[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
        #[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
        pub struct $struct {
            /// Legal name
            pub name: String,
            /// Comma-separated address: street and number, city, postcode, country code
            pub address: String,
            /// Kind of identification, e.g. `EORI` or `TIN`
            #[serde(default)]
            pub identification_type: Option<String>,
            /// The identification number itself
            #[serde(default)]
            pub identification_number: Option<String>,
        }

        impl Entity for $struct {
            type Id = $id;
            const NAME: &'static str = $name;

            fn normalize(&mut self) {
                trim(&mut self.name);
                trim(&mut self.address);
                trim_optional(&mut self.identification_type);
                trim_optional(&mut self.identification_number);
            }

            fn validate(&self) -> Result<(), ValidationError> {
                required("name", &self.name)?;
                at_most("name", &self.name, TEXT_WIDTH)?;
                required("address", &self.address)?;
                at_most("address", &self.address, TEXT_WIDTH)
            }
        }
    };
}

party_entity! {
    /// The party shipping the goods out of the customs territory.
    Exporter(ExporterId, "exporter")
}

party_entity! {
    /// The party the goods are shipped to.
    Consignee(ConsigneeId, "consignee")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codes_are_normalized() {
        let country = Country {
            code: " ge ".into(),
            name: " Georgia".into(),
        }
        .prepare()
        .unwrap();
        assert_eq!(country.code, "GE");
        assert_eq!(country.name, "Georgia");

        let hs = HarmonizedCode {
            code: "8471.30 00".into(),
            description: "Portable computers".into(),
        }
        .prepare()
        .unwrap();
        assert_eq!(hs.code, "84713000");

        let err = HarmonizedCode {
            code: "8471.AB".into(),
            description: "Portable computers".into(),
        }
        .prepare()
        .unwrap_err();
        assert_eq!(err, ValidationError::NotDigits("code"));
    }

    #[test]
    fn blank_fields_are_refused() {
        let err = Currency {
            code: "   ".into(),
            name: "Euro".into(),
        }
        .prepare()
        .unwrap_err();
        assert_eq!(err, ValidationError::Missing("code"));

        let err = Incoterm {
            code: "FCA".into(),
            description: "".into(),
        }
        .prepare()
        .unwrap_err();
        assert_eq!(err, ValidationError::Missing("description"));
    }

    #[test]
    fn party_identification_is_optional() {
        let exporter = Exporter {
            name: "Kartli Exports LLC".into(),
            address: "12 Rustaveli Ave, Tbilisi, 0108, GE".into(),
            identification_type: Some("".into()),
            identification_number: Some(" 404123456 ".into()),
        }
        .prepare()
        .unwrap();
        assert_eq!(exporter.identification_type, None);
        assert_eq!(exporter.identification_number.as_deref(), Some("404123456"));

        let err = Consignee {
            name: "Acme GmbH".into(),
            address: " ".into(),
            identification_type: None,
            identification_number: None,
        }
        .prepare()
        .unwrap_err();
        assert_eq!(err, ValidationError::Missing("address"));
    }
}
