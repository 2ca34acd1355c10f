use crate::{
    Db,
    failure::{Operation, outcome},
    table::{CatalogTable, assignments, placeholders, record, selection},
};
use customs_core::{
    models::Record,
    ports::{CatalogRepository, WriteFailure},
};

impl<E: CatalogTable> CatalogRepository<E> for Db {
    async fn list(&self) -> Result<Vec<Record<E::Id, E>>, Self::Error> {
        let sql = format!(
            "select {} from {} order by {}",
            selection::<E>(),
            E::TABLE,
            E::ORDER_BY
        );
        let rows = sqlx::query(&sql).fetch_all(&self.reader).await?;
        rows.iter().map(record::<E>).collect()
    }

    async fn read(&self, id: E::Id) -> Result<Option<Record<E::Id, E>>, Self::Error> {
        let sql = format!("select {} from {} where id = ?", selection::<E>(), E::TABLE);
        let row = sqlx::query(&sql)
            .bind(Into::<i64>::into(id))
            .fetch_optional(&self.reader)
            .await?;
        row.as_ref().map(record::<E>).transpose()
    }

    async fn create(&self, data: E) -> Result<Result<Record<E::Id, E>, WriteFailure>, Self::Error> {
        let sql = format!(
            "insert into {} ({}) values ({}) returning {}",
            E::TABLE,
            E::COLUMNS.join(", "),
            placeholders::<E>(),
            selection::<E>()
        );
        let result = data
            .bind(sqlx::query(&sql))
            .fetch_optional(&self.writer)
            .await;
        outcome::<E>(Operation::Write, result)
    }

    async fn update(
        &self,
        id: E::Id,
        data: E,
    ) -> Result<Result<Record<E::Id, E>, WriteFailure>, Self::Error> {
        let sql = format!(
            "update {} set {} where id = ? returning {}",
            E::TABLE,
            assignments::<E>(),
            selection::<E>()
        );
        let result = data
            .bind(sqlx::query(&sql))
            .bind(Into::<i64>::into(id))
            .fetch_optional(&self.writer)
            .await;
        outcome::<E>(Operation::Write, result)
    }

    async fn delete(&self, id: E::Id) -> Result<Result<Record<E::Id, E>, WriteFailure>, Self::Error> {
        let sql = format!(
            "delete from {} where id = ? returning {}",
            E::TABLE,
            selection::<E>()
        );
        let result = sqlx::query(&sql)
            .bind(Into::<i64>::into(id))
            .fetch_optional(&self.writer)
            .await;
        outcome::<E>(Operation::Delete, result)
    }
}
