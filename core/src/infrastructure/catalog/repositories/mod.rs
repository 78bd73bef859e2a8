pub mod area_repository;
pub mod item_repository;
pub mod location_repository;

pub use area_repository::PostgresAreaRepository;
pub use item_repository::PostgresItemRepository;
pub use location_repository::PostgresLocationRepository;
