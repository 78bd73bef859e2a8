use sea_orm::ActiveValue::Set;
use sea_orm::sea_query::Query;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder,
    TransactionTrait,
};

use crate::domain::{
    catalog::{entities::Area, ports::AreaRepository, value_objects::CreateAreaInput},
    common::entities::app_errors::{CoreError, Resource},
};
use crate::entity::{area, inspeksi, item};
use crate::infrastructure::db::{map_read_err, map_write_err};

#[derive(Debug, Clone)]
pub struct PostgresAreaRepository {
    pub db: DatabaseConnection,
}

impl PostgresAreaRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

impl AreaRepository for PostgresAreaRepository {
    async fn fetch_by_location(&self, location_id: i32) -> Result<Vec<Area>, CoreError> {
        let areas = area::Entity::find()
            .filter(area::Column::IdLokasi.eq(location_id))
            .order_by_asc(area::Column::NamaArea)
            .all(&self.db)
            .await
            .map_err(|e| map_read_err("failed to fetch areas", e))?
            .into_iter()
            .map(Area::from)
            .collect();

        Ok(areas)
    }

    async fn get_by_id(&self, id: i32) -> Result<Option<Area>, CoreError> {
        let area = area::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| map_read_err("failed to get area by id", e))?
            .map(Area::from);

        Ok(area)
    }

    async fn get_by_name(&self, location_id: i32, name: String) -> Result<Option<Area>, CoreError> {
        let area = area::Entity::find()
            .filter(area::Column::IdLokasi.eq(location_id))
            .filter(area::Column::NamaArea.eq(name))
            .one(&self.db)
            .await
            .map_err(|e| map_read_err("failed to get area by name", e))?
            .map(Area::from);

        Ok(area)
    }

    async fn create(&self, input: CreateAreaInput) -> Result<Area, CoreError> {
        let created = area::Entity::insert(area::ActiveModel {
            id_lokasi: Set(input.location_id),
            nama_area: Set(input.name),
            ..Default::default()
        })
        .exec_with_returning(&self.db)
        .await
        .map(Area::from)
        .map_err(|e| map_write_err("failed to create area", e))?;

        Ok(created)
    }

    async fn rename(&self, id: i32, name: String) -> Result<Area, CoreError> {
        let model = area::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| map_read_err("failed to load area for rename", e))?
            .ok_or(CoreError::NotFound(Resource::Area))?;

        let mut active: area::ActiveModel = model.into();
        active.nama_area = Set(name);

        let updated = active
            .update(&self.db)
            .await
            .map(Area::from)
            .map_err(|e| map_write_err("failed to rename area", e))?;

        Ok(updated)
    }

    async fn delete(&self, id: i32) -> Result<(), CoreError> {
        let txn = self
            .db
            .begin()
            .await
            .map_err(|e| map_read_err("failed to open delete transaction", e))?;

        let item_ids = Query::select()
            .column(item::Column::IdItem)
            .from(item::Entity)
            .and_where(item::Column::IdArea.eq(id))
            .to_owned();

        inspeksi::Entity::delete_many()
            .filter(inspeksi::Column::ItemId.in_subquery(item_ids))
            .exec(&txn)
            .await
            .map_err(|e| map_write_err("failed to delete area transactions", e))?;
        item::Entity::delete_many()
            .filter(item::Column::IdArea.eq(id))
            .exec(&txn)
            .await
            .map_err(|e| map_write_err("failed to delete area items", e))?;
        area::Entity::delete_by_id(id)
            .exec(&txn)
            .await
            .map_err(|e| map_write_err("failed to delete area", e))?;

        txn.commit()
            .await
            .map_err(|e| map_write_err("failed to commit area delete", e))?;

        Ok(())
    }
}
