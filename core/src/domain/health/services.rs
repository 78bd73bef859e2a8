use crate::domain::{
    catalog::ports::{AreaRepository, ItemRepository, LocationRepository},
    common::{entities::app_errors::CoreError, services::Service},
    health::{
        entities::DatabaseHealthStatus,
        ports::{HealthCheckRepository, HealthCheckService},
    },
    identity::ports::MasterUserRepository,
    inspection::ports::TransactionRepository,
    legacy::ports::LegacyInspectionRepository,
    stats::ports::StatsRepository,
    terminal::ports::TerminalRepository,
};

impl<L, A, I, M, TE, TX, LE, ST, H> HealthCheckService for Service<L, A, I, M, TE, TX, LE, ST, H>
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
    async fn readiness(&self) -> Result<DatabaseHealthStatus, CoreError> {
        self.health_check_repository.readiness().await
    }
}
