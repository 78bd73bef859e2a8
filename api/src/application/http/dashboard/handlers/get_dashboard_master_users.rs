use axum::extract::{Query, State};
use inspeksi_core::domain::identity::{
    entities::MasterUser,
    ports::MasterUserService,
    value_objects::SearchMasterUsersFilter,
};
use serde::Deserialize;
use utoipa::IntoParams;

use crate::application::auth::DashboardUser;
use crate::application::http::server::api_entities::{api_error::ApiError, response::Response};
use crate::application::http::server::app_state::AppState;

#[derive(Debug, Deserialize, IntoParams)]
pub struct DashboardMasterUsersQuery {
    /// Free-text match over email, name and department.
    pub q: Option<String>,
    pub role: Option<String>,
    pub limit: Option<u64>,
    pub offset: Option<u64>,
}

#[utoipa::path(
    get,
    path = "/dashboard/master-users",
    tag = "dashboard",
    summary = "Browse master users",
    description = "Read-only listing for dashboard consumers; supervisory roles only.",
    params(DashboardMasterUsersQuery),
    responses(
        (status = 200, body = Vec<MasterUser>)
    )
)]
pub async fn get_dashboard_master_users(
    State(state): State<AppState>,
    DashboardUser(_identity): DashboardUser,
    Query(query): Query<DashboardMasterUsersQuery>,
) -> Result<Response<Vec<MasterUser>>, ApiError> {
    let users = state
        .service
        .get_master_users(SearchMasterUsersFilter {
            query: query.q,
            role: query.role,
            limit: query.limit,
            offset: query.offset,
        })
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(users))
}
