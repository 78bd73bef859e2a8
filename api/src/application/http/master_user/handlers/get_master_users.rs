use axum::extract::{Query, State};
use inspeksi_core::domain::identity::{
    entities::MasterUser,
    ports::MasterUserService,
    value_objects::SearchMasterUsersFilter,
};
use serde::Deserialize;
use utoipa::IntoParams;

use crate::application::auth::AdminUser;
use crate::application::http::server::api_entities::{api_error::ApiError, response::Response};
use crate::application::http::server::app_state::AppState;

#[derive(Debug, Deserialize, IntoParams)]
pub struct GetMasterUsersQuery {
    /// Free-text match over email, name and department.
    pub q: Option<String>,
    pub role: Option<String>,
    pub limit: Option<u64>,
    pub offset: Option<u64>,
}

#[utoipa::path(
    get,
    path = "/admin/master-users",
    tag = "admin",
    summary = "List master users",
    params(GetMasterUsersQuery),
    responses(
        (status = 200, body = Vec<MasterUser>)
    )
)]
pub async fn get_master_users(
    State(state): State<AppState>,
    AdminUser(_identity): AdminUser,
    Query(query): Query<GetMasterUsersQuery>,
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
