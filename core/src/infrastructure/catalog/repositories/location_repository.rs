use sea_orm::ActiveValue::Set;
use sea_orm::sea_query::Query;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder,
    TransactionTrait,
};

use crate::domain::{
    catalog::{
        entities::Location,
        ports::LocationRepository,
        value_objects::{CreateLocationInput, UpdateLocationInput},
    },
    common::entities::app_errors::{CoreError, Resource},
};
use crate::entity::{area, inspeksi, item, lokasi};
use crate::infrastructure::db::{map_read_err, map_write_err};

#[derive(Debug, Clone)]
pub struct PostgresLocationRepository {
    pub db: DatabaseConnection,
}

impl PostgresLocationRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

impl LocationRepository for PostgresLocationRepository {
    async fn fetch_locations(&self) -> Result<Vec<Location>, CoreError> {
        let locations = lokasi::Entity::find()
            .order_by_asc(lokasi::Column::NamaLokasi)
            .all(&self.db)
            .await
            .map_err(|e| map_read_err("failed to fetch locations", e))?
            .into_iter()
            .map(Location::from)
            .collect();

        Ok(locations)
    }

    async fn get_by_id(&self, id: i32) -> Result<Option<Location>, CoreError> {
        let location = lokasi::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| map_read_err("failed to get location by id", e))?
            .map(Location::from);

        Ok(location)
    }

    async fn get_by_name(&self, name: String) -> Result<Option<Location>, CoreError> {
        let location = lokasi::Entity::find()
            .filter(lokasi::Column::NamaLokasi.eq(name))
            .one(&self.db)
            .await
            .map_err(|e| map_read_err("failed to get location by name", e))?
            .map(Location::from);

        Ok(location)
    }

    async fn create(&self, input: CreateLocationInput) -> Result<Location, CoreError> {
        let created = lokasi::Entity::insert(lokasi::ActiveModel {
            nama_lokasi: Set(input.name),
            ..Default::default()
        })
        .exec_with_returning(&self.db)
        .await
        .map(Location::from)
        .map_err(|e| map_write_err("failed to create location", e))?;

        Ok(created)
    }

    async fn update(&self, id: i32, input: UpdateLocationInput) -> Result<Location, CoreError> {
        let model = lokasi::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| map_read_err("failed to load location for update", e))?
            .ok_or(CoreError::NotFound(Resource::Location))?;

        let mut active: lokasi::ActiveModel = model.into();
        if let Some(name) = input.name {
            active.nama_lokasi = Set(name);
        }
        if let Some(latitude) = input.latitude {
            active.latitude = Set(Some(latitude));
        }
        if let Some(longitude) = input.longitude {
            active.longitude = Set(Some(longitude));
        }
        if let Some(radius_m) = input.radius_m {
            active.radius_m = Set(Some(radius_m));
        }

        let updated = active
            .update(&self.db)
            .await
            .map(Location::from)
            .map_err(|e| map_write_err("failed to update location", e))?;

        Ok(updated)
    }

    async fn delete(&self, id: i32) -> Result<(), CoreError> {
        let txn = self
            .db
            .begin()
            .await
            .map_err(|e| map_read_err("failed to open delete transaction", e))?;

        let area_ids = Query::select()
            .column(area::Column::IdArea)
            .from(area::Entity)
            .and_where(area::Column::IdLokasi.eq(id))
            .to_owned();
        let item_ids = Query::select()
            .column(item::Column::IdItem)
            .from(item::Entity)
            .and_where(item::Column::IdArea.in_subquery(area_ids.clone()))
            .to_owned();

        inspeksi::Entity::delete_many()
            .filter(inspeksi::Column::ItemId.in_subquery(item_ids.clone()))
            .exec(&txn)
            .await
            .map_err(|e| map_write_err("failed to delete location transactions", e))?;
        item::Entity::delete_many()
            .filter(item::Column::IdArea.in_subquery(area_ids))
            .exec(&txn)
            .await
            .map_err(|e| map_write_err("failed to delete location items", e))?;
        area::Entity::delete_many()
            .filter(area::Column::IdLokasi.eq(id))
            .exec(&txn)
            .await
            .map_err(|e| map_write_err("failed to delete location areas", e))?;
        lokasi::Entity::delete_by_id(id)
            .exec(&txn)
            .await
            .map_err(|e| map_write_err("failed to delete location", e))?;

        txn.commit()
            .await
            .map_err(|e| map_write_err("failed to commit location delete", e))?;

        Ok(())
    }
}
