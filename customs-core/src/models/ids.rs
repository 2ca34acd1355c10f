//! Strongly-typed identifiers for every stored entity.
//!
//! Rows are keyed by SQLite integer primary keys. Each table gets its own
//! newtype so that, for example, a `CountryId` can never be passed where a
//! `CurrencyId` is expected.

macro_rules! new_id {
    ($struct:ident, $doc:literal) => {
        #[doc = $doc]
        #[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
        #[derive(
            Debug,
            Clone,
            Copy,
            PartialEq,
            Eq,
            Hash,
            PartialOrd,
            Ord,
            serde::Serialize,
            serde::Deserialize,
        )]
        #[serde(transparent)]
        pub struct $struct(pub i64);

        impl From<i64> for $struct {
            fn from(value: i64) -> Self {
                Self(value)
            }
        }

        impl From<$struct> for i64 {
            fn from(value: $struct) -> Self {
                value.0
            }
        }

        impl std::fmt::Display for $struct {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                self.0.fmt(f)
            }
        }

        impl std::str::FromStr for $struct {
            type Err = std::num::ParseIntError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Ok(Self(s.trim().parse()?))
            }
        }
    };
}

new_id!(CountryId, "Identifier of a country row");
new_id!(IncotermId, "Identifier of an incoterm row");
new_id!(TransportModeId, "Identifier of a transport mode row");
new_id!(PackageTypeId, "Identifier of a package type row");
new_id!(HarmonizedCodeId, "Identifier of a harmonized tariff code row");
new_id!(CustomsOfficeId, "Identifier of a customs office row");
new_id!(CurrencyId, "Identifier of a currency row");
new_id!(DocumentTypeId, "Identifier of a supporting-document type row");
new_id!(ExporterId, "Identifier of an exporter row");
new_id!(ConsigneeId, "Identifier of a consignee row");
new_id!(DeclarationId, "Identifier of an export declaration");
new_id!(GoodsId, "Identifier of a goods line within a declaration");
new_id!(
    SupportingDocumentId,
    "Identifier of a supporting document attached to a declaration"
);
