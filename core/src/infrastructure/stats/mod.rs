pub mod repositories;

pub use repositories::PostgresStatsRepository;
