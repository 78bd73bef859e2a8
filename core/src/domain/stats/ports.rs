use std::future::Future;

use crate::domain::{
    common::entities::app_errors::CoreError,
    stats::value_objects::{
        DailyCount, DashboardSummary, DatabaseSummary, ItemDamageCount, LocationCount,
        SummaryTotals,
    },
};

/// Read-only rollups over the transaction table. Implementations must return
/// zeros and empty lists on an empty dataset, never an error.
#[cfg_attr(test, mockall::automock)]
pub trait StatsRepository: Send + Sync {
    /// Status totals; `last24h` counts rows whose `ts_utc` compares greater
    /// than or equal to the given fixed-width cutoff string.
    fn totals(
        &self,
        cutoff_24h: String,
    ) -> impl Future<Output = Result<SummaryTotals, CoreError>> + Send;

    fn top_locations(
        &self,
        limit: u64,
    ) -> impl Future<Output = Result<Vec<LocationCount>, CoreError>> + Send;

    fn top_damaged_items(
        &self,
        limit: u64,
    ) -> impl Future<Output = Result<Vec<ItemDamageCount>, CoreError>> + Send;

    fn daily_series(
        &self,
        since: String,
    ) -> impl Future<Output = Result<Vec<DailyCount>, CoreError>> + Send;

    fn database_summary(&self) -> impl Future<Output = Result<DatabaseSummary, CoreError>> + Send;
}

pub trait StatsService: Send + Sync {
    fn dashboard_summary(&self) -> impl Future<Output = Result<DashboardSummary, CoreError>> + Send;

    fn daily_series(
        &self,
        days: u32,
    ) -> impl Future<Output = Result<Vec<DailyCount>, CoreError>> + Send;

    fn database_summary(&self) -> impl Future<Output = Result<DatabaseSummary, CoreError>> + Send;
}
