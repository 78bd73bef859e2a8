use crate::domain::common::{InspeksiConfig, services::Service};
use crate::infrastructure::{
    catalog::{PostgresAreaRepository, PostgresItemRepository, PostgresLocationRepository},
    db::postgres::{Postgres, PostgresConfig},
    health::PostgresHealthCheckRepository,
    identity::PostgresMasterUserRepository,
    inspection::PostgresTransactionRepository,
    legacy::PostgresLegacyInspectionRepository,
    stats::PostgresStatsRepository,
    terminal::PostgresTerminalRepository,
};

pub type InspeksiService = Service<
    PostgresLocationRepository,
    PostgresAreaRepository,
    PostgresItemRepository,
    PostgresMasterUserRepository,
    PostgresTerminalRepository,
    PostgresTransactionRepository,
    PostgresLegacyInspectionRepository,
    PostgresStatsRepository,
    PostgresHealthCheckRepository,
>;

pub async fn create_service(config: InspeksiConfig) -> Result<InspeksiService, anyhow::Error> {
    let database_url = format!(
        "postgres://{}:{}@{}:{}/{}",
        config.database.username,
        config.database.password,
        config.database.host,
        config.database.port,
        config.database.name
    );
    let postgres = Postgres::new(PostgresConfig { database_url }).await?;

    Ok(Service::new(
        PostgresLocationRepository::new(postgres.get_db()),
        PostgresAreaRepository::new(postgres.get_db()),
        PostgresItemRepository::new(postgres.get_db()),
        PostgresMasterUserRepository::new(postgres.get_db()),
        PostgresTerminalRepository::new(postgres.get_db()),
        PostgresTransactionRepository::new(postgres.get_db()),
        PostgresLegacyInspectionRepository::new(postgres.get_db()),
        PostgresStatsRepository::new(postgres.get_db()),
        PostgresHealthCheckRepository::new(postgres.get_db()),
    ))
}
