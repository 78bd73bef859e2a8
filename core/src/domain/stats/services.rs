use chrono::{Duration, Utc};

use crate::domain::{
    catalog::ports::{AreaRepository, ItemRepository, LocationRepository},
    common::{entities::app_errors::CoreError, format_ts_utc, services::Service},
    health::ports::HealthCheckRepository,
    identity::ports::MasterUserRepository,
    inspection::ports::TransactionRepository,
    legacy::ports::LegacyInspectionRepository,
    stats::{
        ports::{StatsRepository, StatsService},
        value_objects::{DailyCount, DashboardSummary, DatabaseSummary},
    },
    terminal::ports::TerminalRepository,
};

const TOP_N: u64 = 10;
const MAX_SERIES_DAYS: u32 = 365;

impl<L, A, I, M, TE, TX, LE, ST, H> StatsService for Service<L, A, I, M, TE, TX, LE, ST, H>
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
    async fn dashboard_summary(&self) -> Result<DashboardSummary, CoreError> {
        let cutoff_24h = format_ts_utc(Utc::now() - Duration::hours(24));

        let totals = self.stats_repository.totals(cutoff_24h).await?;
        let by_lokasi = self.stats_repository.top_locations(TOP_N).await?;
        let by_item_rusak = self.stats_repository.top_damaged_items(TOP_N).await?;

        Ok(DashboardSummary {
            totals,
            by_lokasi,
            by_item_rusak,
        })
    }

    async fn daily_series(&self, days: u32) -> Result<Vec<DailyCount>, CoreError> {
        let days = days.clamp(1, MAX_SERIES_DAYS);
        let since = format_ts_utc(Utc::now() - Duration::days(days as i64));

        self.stats_repository.daily_series(since).await
    }

    async fn database_summary(&self) -> Result<DatabaseSummary, CoreError> {
        self.stats_repository.database_summary().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{
        catalog::ports::{MockAreaRepository, MockItemRepository, MockLocationRepository},
        health::ports::MockHealthCheckRepository,
        identity::ports::MockMasterUserRepository,
        inspection::ports::MockTransactionRepository,
        legacy::ports::MockLegacyInspectionRepository,
        stats::{ports::MockStatsRepository, value_objects::SummaryTotals},
        terminal::ports::MockTerminalRepository,
    };

    fn service_with(
        stats: MockStatsRepository,
    ) -> Service<
        MockLocationRepository,
        MockAreaRepository,
        MockItemRepository,
        MockMasterUserRepository,
        MockTerminalRepository,
        MockTransactionRepository,
        MockLegacyInspectionRepository,
        MockStatsRepository,
        MockHealthCheckRepository,
    > {
        Service::new(
            MockLocationRepository::new(),
            MockAreaRepository::new(),
            MockItemRepository::new(),
            MockMasterUserRepository::new(),
            MockTerminalRepository::new(),
            MockTransactionRepository::new(),
            MockLegacyInspectionRepository::new(),
            stats,
            MockHealthCheckRepository::new(),
        )
    }

    #[tokio::test]
    async fn empty_dataset_yields_zeros_not_errors() {
        let mut stats = MockStatsRepository::new();
        stats
            .expect_totals()
            .returning(|_| Box::pin(async { Ok(SummaryTotals::default()) }));
        stats
            .expect_top_locations()
            .returning(|_| Box::pin(async { Ok(Vec::new()) }));
        stats
            .expect_top_damaged_items()
            .returning(|_| Box::pin(async { Ok(Vec::new()) }));

        let summary = service_with(stats).dashboard_summary().await.unwrap();

        assert_eq!(summary.totals, SummaryTotals::default());
        assert!(summary.by_lokasi.is_empty());
        assert!(summary.by_item_rusak.is_empty());
    }

    #[tokio::test]
    async fn series_window_is_clamped() {
        let mut stats = MockStatsRepository::new();
        // 400 days must be clamped to the 365-day maximum before the cutoff
        // string is built.
        let min_since = format_ts_utc(Utc::now() - Duration::days((MAX_SERIES_DAYS + 1) as i64));
        stats
            .expect_daily_series()
            .withf(move |since| since.as_str() > min_since.as_str())
            .returning(|_| Box::pin(async { Ok(Vec::new()) }));

        let series = service_with(stats).daily_series(400).await.unwrap();
        assert!(series.is_empty());
    }
}
