use axum::extract::{Path, State};
use inspeksi_core::domain::catalog::ports::CatalogService;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::auth::AdminUser;
use crate::application::http::server::api_entities::{api_error::ApiError, response::Response};
use crate::application::http::server::app_state::AppState;

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct DeleteAreaResponse {
    pub message: String,
}

#[utoipa::path(
    delete,
    path = "/admin/areas/{id_area}",
    tag = "admin",
    summary = "Delete area",
    description = "Deletes an area together with its items and transactions.",
    params(
        ("id_area" = i32, Path, description = "Area id"),
    ),
    responses(
        (status = 200, body = DeleteAreaResponse)
    )
)]
pub async fn delete_area(
    Path(id_area): Path<i32>,
    State(state): State<AppState>,
    AdminUser(_identity): AdminUser,
) -> Result<Response<DeleteAreaResponse>, ApiError> {
    state
        .service
        .delete_area(id_area)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(DeleteAreaResponse {
        message: "deleted".to_string(),
    }))
}
