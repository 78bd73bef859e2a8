use axum::extract::State;
use inspeksi_core::domain::common::entities::app_errors::{CoreError, Resource};
use inspeksi_core::domain::legacy::{
    ports::LegacyService,
    value_objects::{CommitImportInput, ImportMode},
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::auth::AdminUser;
use crate::application::http::legacy::validators::CommitImportValidator;
use crate::application::http::server::api_entities::{
    api_error::{ApiError, ValidateJson},
    response::Response,
};
use crate::application::http::server::app_state::AppState;

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct CommitImportResponse {
    pub terminal_id: i32,
    pub inserted_rows: u64,
}

fn parse_mode(raw: Option<&str>) -> Result<ImportMode, ApiError> {
    match raw.map(str::trim) {
        None | Some("") | Some("create_or_update") => Ok(ImportMode::CreateOrUpdate),
        Some("update_only") => Ok(ImportMode::UpdateOnly),
        Some(other) => Err(ApiError::BadRequest(format!("unknown import mode: {other}"))),
    }
}

#[utoipa::path(
    post,
    path = "/admin/commit-import",
    tag = "admin",
    summary = "Commit a previewed import",
    description = "Consumes the preview token, upserts the named terminal with the inferred \
        form schema and optionally appends the rows as legacy records. A token can only be \
        committed once.",
    responses(
        (status = 200, body = CommitImportResponse),
        (status = 404, description = "Token unknown, already used or expired")
    ),
    request_body = CommitImportValidator
)]
pub async fn commit_import(
    State(state): State<AppState>,
    AdminUser(_identity): AdminUser,
    ValidateJson(payload): ValidateJson<CommitImportValidator>,
) -> Result<Response<CommitImportResponse>, ApiError> {
    let mode = parse_mode(payload.mode.as_deref())?;

    let pending = state
        .import_cache
        .consume(&payload.token)
        .ok_or(CoreError::NotFound(Resource::ImportPreview))
        .map_err(ApiError::from)?;

    let report = state
        .service
        .commit_import(CommitImportInput {
            terminal_name: payload.terminal_name,
            mode,
            insert_rows: payload.insert_rows,
            pending,
        })
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(CommitImportResponse {
        terminal_id: report.terminal_id,
        inserted_rows: report.inserted_rows,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mode_defaults_to_create_or_update() {
        assert_eq!(parse_mode(None), Ok(ImportMode::CreateOrUpdate));
        assert_eq!(parse_mode(Some("")), Ok(ImportMode::CreateOrUpdate));
        assert_eq!(
            parse_mode(Some("create_or_update")),
            Ok(ImportMode::CreateOrUpdate)
        );
    }

    #[test]
    fn update_only_is_recognized() {
        assert_eq!(parse_mode(Some("update_only")), Ok(ImportMode::UpdateOnly));
    }

    #[test]
    fn unknown_mode_is_rejected() {
        assert!(parse_mode(Some("replace")).is_err());
    }
}
