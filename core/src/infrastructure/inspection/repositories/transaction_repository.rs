use sea_orm::ActiveValue::Set;
use sea_orm::{DatabaseConnection, EntityTrait, TransactionTrait};

use crate::domain::{
    common::entities::app_errors::CoreError,
    inspection::{ports::TransactionRepository, value_objects::NewTransaction},
};
use crate::entity::inspeksi;
use crate::infrastructure::db::{map_read_err, map_write_err};

#[derive(Debug, Clone)]
pub struct PostgresTransactionRepository {
    pub db: DatabaseConnection,
}

impl PostgresTransactionRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

impl TransactionRepository for PostgresTransactionRepository {
    async fn create_batch(&self, rows: Vec<NewTransaction>) -> Result<u64, CoreError> {
        if rows.is_empty() {
            return Ok(0);
        }

        let count = rows.len() as u64;
        let models: Vec<inspeksi::ActiveModel> = rows
            .into_iter()
            .map(|row| inspeksi::ActiveModel {
                ts_utc: Set(row.ts_utc),
                user_id: Set(row.user_id),
                item_id: Set(row.item_id),
                status: Set(row.status),
                catatan: Set(row.catatan),
                latitude: Set(row.latitude),
                longitude: Set(row.longitude),
                shift: Set(row.shift),
                ..Default::default()
            })
            .collect();

        // One transaction boundary around the whole batch: either every row
        // of the submission appears or none does.
        let txn = self
            .db
            .begin()
            .await
            .map_err(|e| map_read_err("failed to open batch transaction", e))?;

        inspeksi::Entity::insert_many(models)
            .exec(&txn)
            .await
            .map_err(|e| map_write_err("failed to insert transaction batch", e))?;

        txn.commit()
            .await
            .map_err(|e| map_write_err("failed to commit transaction batch", e))?;

        Ok(count)
    }
}
