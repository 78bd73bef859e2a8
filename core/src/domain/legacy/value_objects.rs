use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::import_cache::entities::PendingImport;

/// Keys expected inside a legacy payload row.
pub const KEY_LOCATION: &str = "Lokasi";
pub const KEY_AREA: &str = "Area";
pub const KEY_ITEM: &str = "Item_Cek_ID";

#[derive(Debug, Clone)]
pub struct NormalizeInput {
    pub terminal_id: i32,
    pub create_transactions: bool,
    pub inspector_email: Option<String>,
    pub default_status: String,
    pub default_shift: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct CreatedCounts {
    pub lokasi: u64,
    pub area: u64,
    pub item: u64,
    pub transactions: u64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizeReport {
    pub terminal_id: i32,
    pub created: CreatedCounts,
    /// Records that resolved cleanly into the catalog. Skipped records
    /// (missing payload or keys) are examined but not counted here.
    pub processed: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImportMode {
    CreateOrUpdate,
    UpdateOnly,
}

#[derive(Debug, Clone)]
pub struct CommitImportInput {
    pub terminal_name: String,
    pub mode: ImportMode,
    pub insert_rows: bool,
    pub pending: PendingImport,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommitImportReport {
    pub terminal_id: i32,
    pub inserted_rows: u64,
}
