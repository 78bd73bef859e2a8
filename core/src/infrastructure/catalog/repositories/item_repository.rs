use sea_orm::ActiveValue::Set;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, JoinType, QueryFilter,
    QueryOrder, QuerySelect, RelationTrait, TransactionTrait,
};

use crate::domain::{
    catalog::{entities::Item, ports::ItemRepository, value_objects::CreateItemInput},
    common::entities::app_errors::{CoreError, Resource},
};
use crate::entity::{area, inspeksi, item};
use crate::infrastructure::db::{map_read_err, map_write_err};

#[derive(Debug, Clone)]
pub struct PostgresItemRepository {
    pub db: DatabaseConnection,
}

impl PostgresItemRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

impl ItemRepository for PostgresItemRepository {
    async fn fetch_by_area(&self, area_id: i32) -> Result<Vec<Item>, CoreError> {
        let items = item::Entity::find()
            .filter(item::Column::IdArea.eq(area_id))
            .order_by_asc(item::Column::NamaItem)
            .all(&self.db)
            .await
            .map_err(|e| map_read_err("failed to fetch items by area", e))?
            .into_iter()
            .map(Item::from)
            .collect();

        Ok(items)
    }

    async fn fetch_by_location(&self, location_id: i32) -> Result<Vec<Item>, CoreError> {
        let items = item::Entity::find()
            .join(JoinType::InnerJoin, item::Relation::Area.def())
            .filter(area::Column::IdLokasi.eq(location_id))
            .order_by_asc(item::Column::NamaItem)
            .all(&self.db)
            .await
            .map_err(|e| map_read_err("failed to fetch items by location", e))?
            .into_iter()
            .map(Item::from)
            .collect();

        Ok(items)
    }

    async fn get_by_id(&self, id: i32) -> Result<Option<Item>, CoreError> {
        let item = item::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| map_read_err("failed to get item by id", e))?
            .map(Item::from);

        Ok(item)
    }

    async fn get_by_name(&self, area_id: i32, name: String) -> Result<Option<Item>, CoreError> {
        let item = item::Entity::find()
            .filter(item::Column::IdArea.eq(area_id))
            .filter(item::Column::NamaItem.eq(name))
            .one(&self.db)
            .await
            .map_err(|e| map_read_err("failed to get item by name", e))?
            .map(Item::from);

        Ok(item)
    }

    async fn create(&self, input: CreateItemInput) -> Result<Item, CoreError> {
        let created = item::Entity::insert(item::ActiveModel {
            id_area: Set(input.area_id),
            nama_item: Set(input.name),
            ..Default::default()
        })
        .exec_with_returning(&self.db)
        .await
        .map(Item::from)
        .map_err(|e| map_write_err("failed to create item", e))?;

        Ok(created)
    }

    async fn rename(&self, id: i32, name: String) -> Result<Item, CoreError> {
        let model = item::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| map_read_err("failed to load item for rename", e))?
            .ok_or(CoreError::NotFound(Resource::Item))?;

        let mut active: item::ActiveModel = model.into();
        active.nama_item = Set(name);

        let updated = active
            .update(&self.db)
            .await
            .map(Item::from)
            .map_err(|e| map_write_err("failed to rename item", e))?;

        Ok(updated)
    }

    async fn delete(&self, id: i32) -> Result<(), CoreError> {
        let txn = self
            .db
            .begin()
            .await
            .map_err(|e| map_read_err("failed to open delete transaction", e))?;

        inspeksi::Entity::delete_many()
            .filter(inspeksi::Column::ItemId.eq(id))
            .exec(&txn)
            .await
            .map_err(|e| map_write_err("failed to delete item transactions", e))?;
        item::Entity::delete_by_id(id)
            .exec(&txn)
            .await
            .map_err(|e| map_write_err("failed to delete item", e))?;

        txn.commit()
            .await
            .map_err(|e| map_write_err("failed to commit item delete", e))?;

        Ok(())
    }
}
