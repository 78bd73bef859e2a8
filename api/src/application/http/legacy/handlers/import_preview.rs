use axum::extract::State;
use inspeksi_core::domain::import_cache::{entities::PendingImport, services::infer_form_schema};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::auth::AdminUser;
use crate::application::http::legacy::validators::ImportPreviewValidator;
use crate::application::http::server::api_entities::{
    api_error::{ApiError, ValidateJson},
    response::Response,
};
use crate::application::http::server::app_state::AppState;

/// Rows shown back to the admin before committing.
const PREVIEW_ROWS: usize = 20;

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ImportPreviewResponse {
    pub token: String,
    pub filename: String,
    pub columns: Vec<String>,
    pub row_count: usize,
    #[schema(value_type = Vec<Object>)]
    pub preview: Vec<serde_json::Map<String, serde_json::Value>>,
    #[schema(value_type = Object)]
    pub schema: serde_json::Value,
}

#[utoipa::path(
    post,
    path = "/admin/import-preview",
    tag = "admin",
    summary = "Preview spreadsheet import",
    description = "Stores the parsed rows in the pending-import cache and returns a one-time \
        token, the first rows and an inferred form schema. The token expires after 30 minutes.",
    responses(
        (status = 200, body = ImportPreviewResponse)
    ),
    request_body = ImportPreviewValidator
)]
pub async fn import_preview(
    State(state): State<AppState>,
    AdminUser(_identity): AdminUser,
    ValidateJson(payload): ValidateJson<ImportPreviewValidator>,
) -> Result<Response<ImportPreviewResponse>, ApiError> {
    let schema = infer_form_schema(&payload.columns, &payload.rows);

    let pending = PendingImport {
        filename: payload.filename,
        columns: payload.columns,
        rows: payload.rows,
        schema,
    };

    let preview = pending.rows.iter().take(PREVIEW_ROWS).cloned().collect();
    let filename = pending.filename.clone();
    let columns = pending.columns.clone();
    let row_count = pending.row_count();
    let schema = pending.schema.clone();

    let token = state.import_cache.put(pending);

    Ok(Response::OK(ImportPreviewResponse {
        token,
        filename,
        columns,
        row_count,
        preview,
        schema,
    }))
}
