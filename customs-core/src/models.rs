mod catalog;
mod date;
mod declaration;
mod entity;
mod export;
mod ids;
mod record;
mod validation;

pub use catalog::{
    Consignee, Country, Currency, CustomsOffice, DocumentType, Exporter, HarmonizedCode, Incoterm,
    PackageType, TransportMode,
};
pub use date::{format_date, iso_date, optional_iso_date, parse_date};
pub use declaration::{Declaration, Goods, MAX_PACKAGES, MAX_SEQUENCE_NUMBER, SupportingDocument};
pub use entity::Entity;
pub use export::{DeclarationExport, DocumentLine, GoodsLine};
pub use ids::{
    ConsigneeId, CountryId, CurrencyId, CustomsOfficeId, DeclarationId, DocumentTypeId,
    ExporterId, GoodsId, HarmonizedCodeId, IncotermId, PackageTypeId, SupportingDocumentId,
    TransportModeId,
};
pub use record::Record;
pub use validation::ValidationError;
