use sea_orm::ActiveValue::Set;
use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, TransactionTrait};
use serde_json::{Value, json};

use crate::domain::{
    common::entities::app_errors::CoreError,
    legacy::{entities::LegacyInspectionRecord, ports::LegacyInspectionRepository},
};
use crate::entity::legacy_inspections;
use crate::infrastructure::db::{map_read_err, map_write_err};

#[derive(Debug, Clone)]
pub struct PostgresLegacyInspectionRepository {
    pub db: DatabaseConnection,
}

impl PostgresLegacyInspectionRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

impl LegacyInspectionRepository for PostgresLegacyInspectionRepository {
    async fn fetch_by_terminal(
        &self,
        terminal_id: i32,
    ) -> Result<Vec<LegacyInspectionRecord>, CoreError> {
        let records = legacy_inspections::Entity::find()
            .filter(legacy_inspections::Column::TerminalId.eq(terminal_id))
            .order_by_asc(legacy_inspections::Column::Id)
            .all(&self.db)
            .await
            .map_err(|e| map_read_err("failed to fetch legacy inspections", e))?
            .into_iter()
            .map(LegacyInspectionRecord::from)
            .collect();

        Ok(records)
    }

    async fn insert_rows(
        &self,
        terminal_id: i32,
        rows: Vec<serde_json::Map<String, Value>>,
    ) -> Result<u64, CoreError> {
        if rows.is_empty() {
            return Ok(0);
        }

        let count = rows.len() as u64;
        let models: Vec<legacy_inspections::ActiveModel> = rows
            .into_iter()
            .map(|row| legacy_inspections::ActiveModel {
                terminal_id: Set(terminal_id),
                data: Set(json!({ "row": row })),
                ..Default::default()
            })
            .collect();

        let txn = self
            .db
            .begin()
            .await
            .map_err(|e| map_read_err("failed to open import transaction", e))?;

        legacy_inspections::Entity::insert_many(models)
            .exec(&txn)
            .await
            .map_err(|e| map_write_err("failed to insert imported rows", e))?;

        txn.commit()
            .await
            .map_err(|e| map_write_err("failed to commit imported rows", e))?;

        Ok(count)
    }
}
