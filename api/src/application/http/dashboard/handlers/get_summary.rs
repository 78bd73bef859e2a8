use axum::extract::State;
use inspeksi_core::domain::stats::{ports::StatsService, value_objects::DashboardSummary};

use crate::application::auth::DashboardUser;
use crate::application::http::server::api_entities::{api_error::ApiError, response::Response};
use crate::application::http::server::app_state::AppState;

#[utoipa::path(
    get,
    path = "/dashboard/summary",
    tag = "dashboard",
    summary = "Inspection rollups",
    description = "Status totals, activity within the last 24 hours, top locations by \
        transaction count and top items by damage count. Empty data yields zeros.",
    responses(
        (status = 200, body = DashboardSummary)
    )
)]
pub async fn get_summary(
    State(state): State<AppState>,
    DashboardUser(_identity): DashboardUser,
) -> Result<Response<DashboardSummary>, ApiError> {
    let summary = state
        .service
        .dashboard_summary()
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(summary))
}
