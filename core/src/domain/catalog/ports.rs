use std::future::Future;

use crate::domain::{
    catalog::{
        entities::{Area, Item, Location},
        value_objects::{CreateAreaInput, CreateItemInput, CreateLocationInput, UpdateLocationInput},
    },
    common::entities::app_errors::CoreError,
};

#[cfg_attr(test, mockall::automock)]
pub trait LocationRepository: Send + Sync {
    fn fetch_locations(&self) -> impl Future<Output = Result<Vec<Location>, CoreError>> + Send;

    fn get_by_id(&self, id: i32)
    -> impl Future<Output = Result<Option<Location>, CoreError>> + Send;

    fn get_by_name(
        &self,
        name: String,
    ) -> impl Future<Output = Result<Option<Location>, CoreError>> + Send;

    /// Returns [`CoreError::DuplicateEntry`] when the unique name constraint
    /// fires, so concurrent lazy creates can re-fetch instead of failing.
    fn create(
        &self,
        input: CreateLocationInput,
    ) -> impl Future<Output = Result<Location, CoreError>> + Send;

    fn update(
        &self,
        id: i32,
        input: UpdateLocationInput,
    ) -> impl Future<Output = Result<Location, CoreError>> + Send;

    /// Deletes the location together with its areas, items and transactions.
    fn delete(&self, id: i32) -> impl Future<Output = Result<(), CoreError>> + Send;
}

#[cfg_attr(test, mockall::automock)]
pub trait AreaRepository: Send + Sync {
    fn fetch_by_location(
        &self,
        location_id: i32,
    ) -> impl Future<Output = Result<Vec<Area>, CoreError>> + Send;

    fn get_by_id(&self, id: i32) -> impl Future<Output = Result<Option<Area>, CoreError>> + Send;

    fn get_by_name(
        &self,
        location_id: i32,
        name: String,
    ) -> impl Future<Output = Result<Option<Area>, CoreError>> + Send;

    fn create(
        &self,
        input: CreateAreaInput,
    ) -> impl Future<Output = Result<Area, CoreError>> + Send;

    fn rename(
        &self,
        id: i32,
        name: String,
    ) -> impl Future<Output = Result<Area, CoreError>> + Send;

    /// Deletes the area together with its items and transactions.
    fn delete(&self, id: i32) -> impl Future<Output = Result<(), CoreError>> + Send;
}

#[cfg_attr(test, mockall::automock)]
pub trait ItemRepository: Send + Sync {
    fn fetch_by_area(
        &self,
        area_id: i32,
    ) -> impl Future<Output = Result<Vec<Item>, CoreError>> + Send;

    /// Items under every area of a location, name-ascending.
    fn fetch_by_location(
        &self,
        location_id: i32,
    ) -> impl Future<Output = Result<Vec<Item>, CoreError>> + Send;

    fn get_by_id(&self, id: i32) -> impl Future<Output = Result<Option<Item>, CoreError>> + Send;

    fn get_by_name(
        &self,
        area_id: i32,
        name: String,
    ) -> impl Future<Output = Result<Option<Item>, CoreError>> + Send;

    fn create(
        &self,
        input: CreateItemInput,
    ) -> impl Future<Output = Result<Item, CoreError>> + Send;

    fn rename(
        &self,
        id: i32,
        name: String,
    ) -> impl Future<Output = Result<Item, CoreError>> + Send;

    /// Deletes the item together with its transactions.
    fn delete(&self, id: i32) -> impl Future<Output = Result<(), CoreError>> + Send;
}

pub trait CatalogService: Send + Sync {
    fn get_locations(&self) -> impl Future<Output = Result<Vec<Location>, CoreError>> + Send;

    fn create_location(
        &self,
        input: CreateLocationInput,
    ) -> impl Future<Output = Result<Location, CoreError>> + Send;

    fn update_location(
        &self,
        id: i32,
        input: UpdateLocationInput,
    ) -> impl Future<Output = Result<Location, CoreError>> + Send;

    fn delete_location(&self, id: i32) -> impl Future<Output = Result<(), CoreError>> + Send;

    fn get_areas(
        &self,
        location_id: i32,
    ) -> impl Future<Output = Result<Vec<Area>, CoreError>> + Send;

    fn create_area(
        &self,
        input: CreateAreaInput,
    ) -> impl Future<Output = Result<Area, CoreError>> + Send;

    fn rename_area(
        &self,
        id: i32,
        name: String,
    ) -> impl Future<Output = Result<Area, CoreError>> + Send;

    fn delete_area(&self, id: i32) -> impl Future<Output = Result<(), CoreError>> + Send;

    fn get_items_by_area(
        &self,
        area_id: i32,
    ) -> impl Future<Output = Result<Vec<Item>, CoreError>> + Send;

    fn get_items_by_location(
        &self,
        location_id: i32,
    ) -> impl Future<Output = Result<Vec<Item>, CoreError>> + Send;

    fn create_item(
        &self,
        input: CreateItemInput,
    ) -> impl Future<Output = Result<Item, CoreError>> + Send;

    fn rename_item(
        &self,
        id: i32,
        name: String,
    ) -> impl Future<Output = Result<Item, CoreError>> + Send;

    fn delete_item(&self, id: i32) -> impl Future<Output = Result<(), CoreError>> + Send;
}
