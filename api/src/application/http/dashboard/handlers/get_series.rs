use axum::extract::{Query, State};
use inspeksi_core::domain::stats::{ports::StatsService, value_objects::DailyCount};
use serde::Deserialize;
use utoipa::IntoParams;

use crate::application::auth::DashboardUser;
use crate::application::http::server::api_entities::{api_error::ApiError, response::Response};
use crate::application::http::server::app_state::AppState;

const DEFAULT_SERIES_DAYS: u32 = 30;

#[derive(Debug, Deserialize, IntoParams)]
pub struct GetSeriesQuery {
    /// Day window, 1 to 365. Defaults to 30.
    pub days: Option<u32>,
}

#[utoipa::path(
    get,
    path = "/dashboard/series",
    tag = "dashboard",
    summary = "Daily inspection counts",
    params(GetSeriesQuery),
    responses(
        (status = 200, body = Vec<DailyCount>)
    )
)]
pub async fn get_series(
    State(state): State<AppState>,
    DashboardUser(_identity): DashboardUser,
    Query(query): Query<GetSeriesQuery>,
) -> Result<Response<Vec<DailyCount>>, ApiError> {
    let series = state
        .service
        .daily_series(query.days.unwrap_or(DEFAULT_SERIES_DAYS))
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(series))
}
