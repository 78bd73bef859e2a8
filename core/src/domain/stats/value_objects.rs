use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct SummaryTotals {
    pub total: i64,
    pub bagus: i64,
    pub rusak: i64,
    pub last24h: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct LocationCount {
    pub lokasi: String,
    pub count: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ItemDamageCount {
    pub item: String,
    pub count: i64,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct DashboardSummary {
    pub totals: SummaryTotals,
    pub by_lokasi: Vec<LocationCount>,
    pub by_item_rusak: Vec<ItemDamageCount>,
}

/// One day of the time series, keyed by the 10-char date prefix of `ts_utc`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct DailyCount {
    pub day: String,
    pub total: i64,
    pub bagus: i64,
    pub rusak: i64,
}

/// Per-table row counts for the admin maintenance page.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct DatabaseSummary {
    pub lokasi: i64,
    pub area: i64,
    pub item: i64,
    pub master_users: i64,
    pub terminals: i64,
    pub inspections_legacy: i64,
    pub inspeksi: i64,
}
