use crate::domain::{
    catalog::ports::{AreaRepository, ItemRepository, LocationRepository},
    health::ports::HealthCheckRepository,
    identity::ports::MasterUserRepository,
    inspection::ports::TransactionRepository,
    legacy::ports::LegacyInspectionRepository,
    stats::ports::StatsRepository,
    terminal::ports::TerminalRepository,
};

/// Aggregate service over every repository port. Domain modules implement
/// their service traits on this struct in their own `services.rs`.
#[derive(Debug, Clone)]
pub struct Service<L, A, I, M, TE, TX, LE, ST, H>
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
    pub location_repository: L,
    pub area_repository: A,
    pub item_repository: I,
    pub master_user_repository: M,
    pub terminal_repository: TE,
    pub transaction_repository: TX,
    pub legacy_repository: LE,
    pub stats_repository: ST,
    pub health_check_repository: H,
}

impl<L, A, I, M, TE, TX, LE, ST, H> Service<L, A, I, M, TE, TX, LE, ST, H>
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
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        location_repository: L,
        area_repository: A,
        item_repository: I,
        master_user_repository: M,
        terminal_repository: TE,
        transaction_repository: TX,
        legacy_repository: LE,
        stats_repository: ST,
        health_check_repository: H,
    ) -> Self {
        Self {
            location_repository,
            area_repository,
            item_repository,
            master_user_repository,
            terminal_repository,
            transaction_repository,
            legacy_repository,
            stats_repository,
            health_check_repository,
        }
    }
}
