use axum::extract::{Path, State};
use inspeksi_core::domain::catalog::ports::CatalogService;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::auth::AdminUser;
use crate::application::http::server::api_entities::{api_error::ApiError, response::Response};
use crate::application::http::server::app_state::AppState;

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct DeleteLokasiResponse {
    pub message: String,
}

#[utoipa::path(
    delete,
    path = "/lokasi/{id_lokasi}",
    tag = "lokasi",
    summary = "Delete location",
    description = "Deletes a location together with its areas, items and transactions.",
    params(
        ("id_lokasi" = i32, Path, description = "Location id"),
    ),
    responses(
        (status = 200, body = DeleteLokasiResponse)
    )
)]
pub async fn delete_lokasi(
    Path(id_lokasi): Path<i32>,
    State(state): State<AppState>,
    AdminUser(_identity): AdminUser,
) -> Result<Response<DeleteLokasiResponse>, ApiError> {
    state
        .service
        .delete_location(id_lokasi)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(DeleteLokasiResponse {
        message: "deleted".to_string(),
    }))
}
