use axum::extract::{Path, State};
use inspeksi_core::domain::identity::ports::MasterUserService;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::auth::AdminUser;
use crate::application::http::server::api_entities::{api_error::ApiError, response::Response};
use crate::application::http::server::app_state::AppState;

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct DeleteMasterUserResponse {
    pub message: String,
}

#[utoipa::path(
    delete,
    path = "/admin/master-users/{id_user}",
    tag = "admin",
    summary = "Delete master user",
    params(
        ("id_user" = i32, Path, description = "Master user id"),
    ),
    responses(
        (status = 200, body = DeleteMasterUserResponse)
    )
)]
pub async fn delete_master_user(
    Path(id_user): Path<i32>,
    State(state): State<AppState>,
    AdminUser(_identity): AdminUser,
) -> Result<Response<DeleteMasterUserResponse>, ApiError> {
    state
        .service
        .delete_master_user(id_user)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(DeleteMasterUserResponse {
        message: "deleted".to_string(),
    }))
}
