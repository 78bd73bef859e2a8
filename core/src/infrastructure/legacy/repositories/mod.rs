pub mod legacy_repository;

pub use legacy_repository::PostgresLegacyInspectionRepository;
