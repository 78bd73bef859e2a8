use crate::domain::{
    catalog::{
        entities::{Area, Item, Location},
        ports::{AreaRepository, CatalogService, ItemRepository, LocationRepository},
        value_objects::{CreateAreaInput, CreateItemInput, CreateLocationInput, UpdateLocationInput},
    },
    common::{
        entities::app_errors::{CoreError, Resource},
        services::Service,
    },
    health::ports::HealthCheckRepository,
    identity::ports::MasterUserRepository,
    inspection::ports::TransactionRepository,
    legacy::ports::LegacyInspectionRepository,
    stats::ports::StatsRepository,
    terminal::ports::TerminalRepository,
};

/// Trims a user-supplied catalog name, rejecting blank input.
pub fn clean_name(raw: &str) -> Result<String, CoreError> {
    let name = raw.trim();
    if name.is_empty() {
        return Err(CoreError::Invalid("name must not be empty".to_string()));
    }
    Ok(name.to_string())
}

impl<L, A, I, M, TE, TX, LE, ST, H> CatalogService for Service<L, A, I, M, TE, TX, LE, ST, H>
where
    L: LocationRepository,
    A: AreaRepository,
    I: ItemRepository,
    M: MasterUserRepository,
    TE: TerminalRepository,
    TX: TransactionRepository,
    LE: LegacyInspectionRepository,
    ST: StatsRepository,
    H: HealthCheckRepository,
{
    async fn get_locations(&self) -> Result<Vec<Location>, CoreError> {
        self.location_repository.fetch_locations().await
    }

    async fn create_location(&self, input: CreateLocationInput) -> Result<Location, CoreError> {
        let name = clean_name(&input.name)?;

        if self
            .location_repository
            .get_by_name(name.clone())
            .await?
            .is_some()
        {
            return Err(CoreError::DuplicateEntry);
        }

        self.location_repository
            .create(CreateLocationInput { name })
            .await
    }

    async fn update_location(
        &self,
        id: i32,
        input: UpdateLocationInput,
    ) -> Result<Location, CoreError> {
        let location = self
            .location_repository
            .get_by_id(id)
            .await?
            .ok_or(CoreError::NotFound(Resource::Location))?;

        let name = match input.name {
            Some(raw) => {
                let name = clean_name(&raw)?;
                if let Some(other) = self.location_repository.get_by_name(name.clone()).await?
                    && other.id != location.id
                {
                    return Err(CoreError::DuplicateEntry);
                }
                Some(name)
            }
            None => None,
        };

        self.location_repository
            .update(
                id,
                UpdateLocationInput {
                    name,
                    latitude: input.latitude,
                    longitude: input.longitude,
                    radius_m: input.radius_m,
                },
            )
            .await
    }

    async fn delete_location(&self, id: i32) -> Result<(), CoreError> {
        self.location_repository
            .get_by_id(id)
            .await?
            .ok_or(CoreError::NotFound(Resource::Location))?;

        self.location_repository.delete(id).await
    }

    async fn get_areas(&self, location_id: i32) -> Result<Vec<Area>, CoreError> {
        self.area_repository.fetch_by_location(location_id).await
    }

    async fn create_area(&self, input: CreateAreaInput) -> Result<Area, CoreError> {
        let name = clean_name(&input.name)?;

        self.location_repository
            .get_by_id(input.location_id)
            .await?
            .ok_or(CoreError::NotFound(Resource::Location))?;

        if self
            .area_repository
            .get_by_name(input.location_id, name.clone())
            .await?
            .is_some()
        {
            return Err(CoreError::DuplicateEntry);
        }

        self.area_repository
            .create(CreateAreaInput {
                location_id: input.location_id,
                name,
            })
            .await
    }

    async fn rename_area(&self, id: i32, name: String) -> Result<Area, CoreError> {
        let area = self
            .area_repository
            .get_by_id(id)
            .await?
            .ok_or(CoreError::NotFound(Resource::Area))?;

        let name = clean_name(&name)?;
        if let Some(other) = self
            .area_repository
            .get_by_name(area.location_id, name.clone())
            .await?
            && other.id != area.id
        {
            return Err(CoreError::DuplicateEntry);
        }

        self.area_repository.rename(id, name).await
    }

    async fn delete_area(&self, id: i32) -> Result<(), CoreError> {
        self.area_repository
            .get_by_id(id)
            .await?
            .ok_or(CoreError::NotFound(Resource::Area))?;

        self.area_repository.delete(id).await
    }

    async fn get_items_by_area(&self, area_id: i32) -> Result<Vec<Item>, CoreError> {
        self.item_repository.fetch_by_area(area_id).await
    }

    async fn get_items_by_location(&self, location_id: i32) -> Result<Vec<Item>, CoreError> {
        self.item_repository.fetch_by_location(location_id).await
    }

    async fn create_item(&self, input: CreateItemInput) -> Result<Item, CoreError> {
        let name = clean_name(&input.name)?;

        self.area_repository
            .get_by_id(input.area_id)
            .await?
            .ok_or(CoreError::NotFound(Resource::Area))?;

        if self
            .item_repository
            .get_by_name(input.area_id, name.clone())
            .await?
            .is_some()
        {
            return Err(CoreError::DuplicateEntry);
        }

        self.item_repository
            .create(CreateItemInput {
                area_id: input.area_id,
                name,
            })
            .await
    }

    async fn rename_item(&self, id: i32, name: String) -> Result<Item, CoreError> {
        let item = self
            .item_repository
            .get_by_id(id)
            .await?
            .ok_or(CoreError::NotFound(Resource::Item))?;

        let name = clean_name(&name)?;
        if let Some(other) = self
            .item_repository
            .get_by_name(item.area_id, name.clone())
            .await?
            && other.id != item.id
        {
            return Err(CoreError::DuplicateEntry);
        }

        self.item_repository.rename(id, name).await
    }

    async fn delete_item(&self, id: i32) -> Result<(), CoreError> {
        self.item_repository
            .get_by_id(id)
            .await?
            .ok_or(CoreError::NotFound(Resource::Item))?;

        self.item_repository.delete(id).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clean_name_trims_whitespace() {
        assert_eq!(clean_name("  Terminal Kargo ").unwrap(), "Terminal Kargo");
    }

    #[test]
    fn clean_name_rejects_blank() {
        assert!(matches!(clean_name("   "), Err(CoreError::Invalid(_))));
        assert!(matches!(clean_name(""), Err(CoreError::Invalid(_))));
    }
}
