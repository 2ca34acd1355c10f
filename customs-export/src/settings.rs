//! Fixed values written into every exported document.
//!
//! The document format expects a declarant identity and a handful of codes
//! that this application does not collect per declaration. They default to
//! fixed values and can be overridden through configuration.

use serde::{Deserialize, Serialize};

/// Settings for the XML export.
///
/// # Examples
///
/// ```
/// use customs_export::ExportSettings;
///
/// // The fixed values
/// let settings = ExportSettings::default();
/// assert_eq!(settings.declaration_type, "EX");
///
/// // Compact output, e.g. for comparing documents
/// let settings = ExportSettings {
///     indent: 0,
///     ..ExportSettings::default()
/// };
/// ```
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct ExportSettings {
    /// Movement reference number placeholder; customs assigns the real one
    #[serde(default = "default_mrn")]
    pub mrn: String,

    /// Declaration type code
    #[serde(default = "default_declaration_type")]
    pub declaration_type: String,

    /// Additional declaration type code (`A` is a standard declaration)
    #[serde(default = "default_additional_declaration_type")]
    pub additional_declaration_type: String,

    /// Safety and security indicator
    #[serde(default = "default_security")]
    pub security: String,

    /// The party lodging the declaration
    #[serde(default)]
    pub declarant: Declarant,

    /// Spaces per nesting level; `0` writes the document on a single line
    #[serde(default = "default_indent")]
    pub indent: usize,
}

/// Identity of the declarant.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Declarant {
    /// Identification number, e.g. an EORI
    #[serde(default = "default_declarant_identification")]
    pub identification_number: String,

    /// Legal name
    #[serde(default = "default_declarant_name")]
    pub name: String,

    /// Comma-separated address, split like every other address
    #[serde(default = "default_declarant_address")]
    pub address: String,
}

fn default_mrn() -> String {
    "00XX00000000000000".to_owned()
}

fn default_declaration_type() -> String {
    "EX".to_owned()
}

fn default_additional_declaration_type() -> String {
    "A".to_owned()
}

fn default_security() -> String {
    "0".to_owned()
}

fn default_indent() -> usize {
    2
}

fn default_declarant_identification() -> String {
    "XX000000000000".to_owned()
}

fn default_declarant_name() -> String {
    "Customs Declarant".to_owned()
}

fn default_declarant_address() -> String {
    "1 Customs Square, Capital City, 00000, XX".to_owned()
}

impl Default for ExportSettings {
    fn default() -> Self {
        Self {
            mrn: default_mrn(),
            declaration_type: default_declaration_type(),
            additional_declaration_type: default_additional_declaration_type(),
            security: default_security(),
            declarant: Declarant::default(),
            indent: default_indent(),
        }
    }
}

impl Default for Declarant {
    fn default() -> Self {
        Self {
            identification_number: default_declarant_identification(),
            name: default_declarant_name(),
            address: default_declarant_address(),
        }
    }
}
