use super::{
    Consignee, Country, Currency, CustomsOffice, Declaration, DeclarationId, DocumentType,
    Exporter, Goods, GoodsId, HarmonizedCode, Incoterm, PackageType, Record, SupportingDocument,
    SupportingDocumentId, TransportMode,
};
use serde::{Deserialize, Serialize};

/// A declaration with every foreign key resolved to the row it points at.
///
/// This is what the XML export consumes, and what the declaration detail page
/// renders. Storage adapters assemble it by walking the declaration's related
/// rows.
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeclarationExport {
    /// The declaration itself
    pub declaration: Record<DeclarationId, Declaration>,
    /// Resolved `exporter_id`
    pub exporter: Exporter,
    /// Resolved `consignee_id`
    pub consignee: Consignee,
    /// Resolved `destination_country_id`
    pub destination: Country,
    /// Resolved `incoterm_id`
    pub incoterm: Incoterm,
    /// Resolved `currency_id`
    pub currency: Currency,
    /// Resolved `office_of_export_id`
    pub office_of_export: CustomsOffice,
    /// Resolved `office_of_exit_id`
    pub office_of_exit: CustomsOffice,
    /// Resolved `transport_mode_id`
    pub transport_mode: TransportMode,
    /// Goods lines in sequence order
    pub goods: Vec<GoodsLine>,
    /// Supporting documents in the order they were attached
    pub documents: Vec<DocumentLine>,
}

impl DeclarationExport {
    /// Sum of the gross mass of all goods lines.
    pub fn total_gross_mass(&self) -> f64 {
        self.goods.iter().map(|line| line.goods.gross_mass).sum()
    }

    /// Sum of the statistical value of all goods lines.
    pub fn total_statistical_value(&self) -> f64 {
        self.goods.iter().map(|line| line.goods.statistical_value).sum()
    }
}

/// A goods line with its tariff code and package type resolved.
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GoodsLine {
    /// Identifier of the goods line
    pub id: GoodsId,
    /// The line as stored
    pub goods: Goods,
    /// Resolved `harmonized_code_id`
    pub harmonized_code: HarmonizedCode,
    /// Resolved `package_type_id`
    pub package_type: PackageType,
}

/// A supporting document with its type resolved.
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DocumentLine {
    /// Identifier of the supporting document
    pub id: SupportingDocumentId,
    /// The document as stored
    pub document: SupportingDocument,
    /// Resolved `document_type_id`
    pub document_type: DocumentType,
}
