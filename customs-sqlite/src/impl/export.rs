use crate::{
    Db,
    table::{CatalogTable, Table},
};
use customs_core::{
    models::{
        Consignee, Country, Currency, CustomsOffice, Declaration, DeclarationExport,
        DeclarationId, DocumentLine, DocumentType, Exporter, Goods, GoodsId, GoodsLine,
        HarmonizedCode, Incoterm, PackageType, SupportingDocument, SupportingDocumentId,
        TransportMode,
    },
    ports::{CatalogRepository, ExportRepository},
};
use sqlx::Row;
use tokio::try_join;

impl ExportRepository for Db {
    async fn load_export(
        &self,
        declaration_id: DeclarationId,
    ) -> Result<Option<DeclarationExport>, Self::Error> {
        let Some(declaration) =
            CatalogRepository::<Declaration>::read(self, declaration_id).await?
        else {
            return Ok(None);
        };

        let data = &declaration.data;
        let (
            exporter,
            consignee,
            destination,
            incoterm,
            currency,
            office_of_export,
            office_of_exit,
            transport_mode,
            goods,
            documents,
        ) = try_join!(
            self.referenced::<Exporter>(data.exporter_id),
            self.referenced::<Consignee>(data.consignee_id),
            self.referenced::<Country>(data.destination_country_id),
            self.referenced::<Incoterm>(data.incoterm_id),
            self.referenced::<Currency>(data.currency_id),
            self.referenced::<CustomsOffice>(data.office_of_export_id),
            self.referenced::<CustomsOffice>(data.office_of_exit_id),
            self.referenced::<TransportMode>(data.transport_mode_id),
            self.goods_lines(declaration_id),
            self.document_lines(declaration_id),
        )?;

        Ok(Some(DeclarationExport {
            declaration,
            exporter,
            consignee,
            destination,
            incoterm,
            currency,
            office_of_export,
            office_of_exit,
            transport_mode,
            goods,
            documents,
        }))
    }
}

impl Db {
    /// The row a declaration points at. Foreign keys guarantee it exists, so
    /// a miss is reported as an error.
    async fn referenced<E: CatalogTable>(&self, id: E::Id) -> Result<E, sqlx::Error> {
        CatalogRepository::<E>::read(self, id)
            .await?
            .map(|record| record.data)
            .ok_or(sqlx::Error::RowNotFound)
    }

    async fn goods_lines(
        &self,
        declaration_id: DeclarationId,
    ) -> Result<Vec<GoodsLine>, sqlx::Error> {
        let sql = format!(
            r#"
            select
                {},
                h.code as hs_code,
                h.description as hs_description,
                p.code as package_code,
                p.description as package_description
            from
                goods g
                join harmonized_code h on h.id = g.harmonized_code_id
                join package_type p on p.id = g.package_type_id
            where
                g.declaration_id = ?
            order by
                g.sequence_number, g.id
            "#,
            qualified::<Goods>("g")
        );

        let rows = sqlx::query(&sql)
            .bind(declaration_id.0)
            .fetch_all(&self.reader)
            .await?;

        rows.iter()
            .map(|row| {
                Ok::<_, sqlx::Error>(GoodsLine {
                    id: GoodsId(row.try_get("id")?),
                    goods: Goods::decode(row)?,
                    harmonized_code: HarmonizedCode {
                        code: row.try_get("hs_code")?,
                        description: row.try_get("hs_description")?,
                    },
                    package_type: PackageType {
                        code: row.try_get("package_code")?,
                        description: row.try_get("package_description")?,
                    },
                })
            })
            .collect()
    }

    async fn document_lines(
        &self,
        declaration_id: DeclarationId,
    ) -> Result<Vec<DocumentLine>, sqlx::Error> {
        let sql = format!(
            r#"
            select
                {},
                t.code as type_code,
                t.description as type_description
            from
                supporting_document d
                join document_type t on t.id = d.document_type_id
            where
                d.declaration_id = ?
            order by
                d.id
            "#,
            qualified::<SupportingDocument>("d")
        );

        let rows = sqlx::query(&sql)
            .bind(declaration_id.0)
            .fetch_all(&self.reader)
            .await?;

        rows.iter()
            .map(|row| {
                let document = SupportingDocument::decode(row)?;
                Ok::<_, sqlx::Error>(DocumentLine {
                    id: SupportingDocumentId(row.try_get("id")?),
                    document_type: DocumentType {
                        code: row.try_get("type_code")?,
                        description: row.try_get("type_description")?,
                    },
                    document,
                })
            })
            .collect()
    }
}

/// The id and data columns of `E`, qualified by a table alias but keeping
/// their plain names in the result.
fn qualified<E: Table>(alias: &str) -> String {
    std::iter::once("id")
        .chain(E::COLUMNS.iter().copied())
        .map(|column| format!("{alias}.{column} as {column}"))
        .collect::<Vec<_>>()
        .join(", ")
}
