use axum::extract::State;
use inspeksi_core::domain::legacy::{
    ports::LegacyService,
    value_objects::{CreatedCounts, NormalizeInput},
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::auth::AdminUser;
use crate::application::http::legacy::validators::NormalizeInspectionsValidator;
use crate::application::http::server::api_entities::{
    api_error::{ApiError, ValidateJson},
    response::Response,
};
use crate::application::http::server::app_state::AppState;

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct NormalizeInspectionsResponse {
    pub terminal_id: i32,
    pub created: CreatedCounts,
    pub processed: u64,
}

#[utoipa::path(
    post,
    path = "/admin/normalize-inspections",
    tag = "admin",
    summary = "Normalize legacy inspections",
    description = "Replays a terminal's legacy free-form records into the master catalog, \
        creating missing locations, areas and items. Malformed records are skipped. \
        Re-running is idempotent: nothing already in the catalog is created again.",
    responses(
        (status = 200, body = NormalizeInspectionsResponse)
    ),
    request_body = NormalizeInspectionsValidator
)]
pub async fn normalize_inspections(
    State(state): State<AppState>,
    AdminUser(_identity): AdminUser,
    ValidateJson(payload): ValidateJson<NormalizeInspectionsValidator>,
) -> Result<Response<NormalizeInspectionsResponse>, ApiError> {
    let report = state
        .service
        .normalize_legacy(NormalizeInput {
            terminal_id: payload.terminal_id,
            create_transactions: payload.create_transactions,
            inspector_email: payload.inspector_email,
            default_status: payload.default_status,
            default_shift: payload.default_shift,
        })
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(NormalizeInspectionsResponse {
        terminal_id: report.terminal_id,
        created: report.created,
        processed: report.processed,
    }))
}
