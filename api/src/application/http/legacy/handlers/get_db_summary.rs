use axum::extract::State;
use inspeksi_core::domain::stats::{ports::StatsService, value_objects::DatabaseSummary};

use crate::application::auth::AdminUser;
use crate::application::http::server::api_entities::{api_error::ApiError, response::Response};
use crate::application::http::server::app_state::AppState;

#[utoipa::path(
    get,
    path = "/admin/db-summary",
    tag = "admin",
    summary = "Database row counts",
    responses(
        (status = 200, body = DatabaseSummary)
    )
)]
pub async fn get_db_summary(
    State(state): State<AppState>,
    AdminUser(_identity): AdminUser,
) -> Result<Response<DatabaseSummary>, ApiError> {
    let summary = state
        .service
        .database_summary()
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(summary))
}
