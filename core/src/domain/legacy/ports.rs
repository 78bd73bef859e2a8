use std::future::Future;

use crate::domain::{
    common::entities::app_errors::CoreError,
    legacy::{
        entities::LegacyInspectionRecord,
        value_objects::{CommitImportInput, CommitImportReport, NormalizeInput, NormalizeReport},
    },
};

#[cfg_attr(test, mockall::automock)]
pub trait LegacyInspectionRepository: Send + Sync {
    /// Records of one terminal in ascending id order; processing order decides
    /// which duplicate wins on lazy creation.
    fn fetch_by_terminal(
        &self,
        terminal_id: i32,
    ) -> impl Future<Output = Result<Vec<LegacyInspectionRecord>, CoreError>> + Send;

    /// Wraps each imported row as `{"row": {...}}` and appends it.
    fn insert_rows(
        &self,
        terminal_id: i32,
        rows: Vec<serde_json::Map<String, serde_json::Value>>,
    ) -> impl Future<Output = Result<u64, CoreError>> + Send;
}

pub trait LegacyService: Send + Sync {
    fn normalize_legacy(
        &self,
        input: NormalizeInput,
    ) -> impl Future<Output = Result<NormalizeReport, CoreError>> + Send;

    fn commit_import(
        &self,
        input: CommitImportInput,
    ) -> impl Future<Output = Result<CommitImportReport, CoreError>> + Send;
}
