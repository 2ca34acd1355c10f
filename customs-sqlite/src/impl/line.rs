use crate::{
    Db,
    failure::{Operation, outcome},
    table::{LineTable, assignments, placeholders, record, selection},
};
use customs_core::{
    models::{DeclarationId, Record},
    ports::{LineRepository, WriteFailure},
};

impl<E: LineTable> LineRepository<E> for Db {
    async fn list_lines(
        &self,
        declaration_id: DeclarationId,
    ) -> Result<Vec<Record<E::Id, E>>, Self::Error> {
        let sql = format!(
            "select {} from {} where declaration_id = ? order by {}",
            selection::<E>(),
            E::TABLE,
            E::ORDER_BY
        );
        let rows = sqlx::query(&sql)
            .bind(declaration_id.0)
            .fetch_all(&self.reader)
            .await?;
        rows.iter().map(record::<E>).collect()
    }

    async fn read_line(
        &self,
        declaration_id: DeclarationId,
        id: E::Id,
    ) -> Result<Option<Record<E::Id, E>>, Self::Error> {
        let sql = format!(
            "select {} from {} where id = ? and declaration_id = ?",
            selection::<E>(),
            E::TABLE
        );
        let row = sqlx::query(&sql)
            .bind(Into::<i64>::into(id))
            .bind(declaration_id.0)
            .fetch_optional(&self.reader)
            .await?;
        row.as_ref().map(record::<E>).transpose()
    }

    async fn create_line(
        &self,
        declaration_id: DeclarationId,
        data: E,
    ) -> Result<Result<Record<E::Id, E>, WriteFailure>, Self::Error> {
        // A line under a missing declaration is addressed wrongly, not a
        // broken reference
        let parent = sqlx::query("select 1 from declaration where id = ?")
            .bind(declaration_id.0)
            .fetch_optional(&self.writer)
            .await?;
        if parent.is_none() {
            return Ok(Err(WriteFailure::DoesNotExist));
        }

        let sql = format!(
            "insert into {} (declaration_id, {}) values (?, {}) returning {}",
            E::TABLE,
            E::COLUMNS.join(", "),
            placeholders::<E>(),
            selection::<E>()
        );
        let result = data
            .bind(sqlx::query(&sql).bind(declaration_id.0))
            .fetch_optional(&self.writer)
            .await;
        outcome::<E>(Operation::Write, result)
    }

    async fn update_line(
        &self,
        declaration_id: DeclarationId,
        id: E::Id,
        data: E,
    ) -> Result<Result<Record<E::Id, E>, WriteFailure>, Self::Error> {
        let sql = format!(
            "update {} set {} where id = ? and declaration_id = ? returning {}",
            E::TABLE,
            assignments::<E>(),
            selection::<E>()
        );
        let result = data
            .bind(sqlx::query(&sql))
            .bind(Into::<i64>::into(id))
            .bind(declaration_id.0)
            .fetch_optional(&self.writer)
            .await;
        outcome::<E>(Operation::Write, result)
    }

    async fn delete_line(
        &self,
        declaration_id: DeclarationId,
        id: E::Id,
    ) -> Result<Result<Record<E::Id, E>, WriteFailure>, Self::Error> {
        let sql = format!(
            "delete from {} where id = ? and declaration_id = ? returning {}",
            E::TABLE,
            selection::<E>()
        );
        let result = sqlx::query(&sql)
            .bind(Into::<i64>::into(id))
            .bind(declaration_id.0)
            .fetch_optional(&self.writer)
            .await;
        outcome::<E>(Operation::Delete, result)
    }
}
