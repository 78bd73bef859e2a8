use axum::extract::{Path, State};
use inspeksi_core::domain::catalog::ports::CatalogService;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::auth::AdminUser;
use crate::application::http::area::validators::UpdateAreaValidator;
use crate::application::http::server::api_entities::{
    api_error::{ApiError, ValidateJson},
    response::Response,
};
use crate::application::http::server::app_state::AppState;

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct UpdateAreaResponse {
    pub message: String,
}

#[utoipa::path(
    put,
    path = "/admin/areas/{id_area}",
    tag = "admin",
    summary = "Rename area",
    params(
        ("id_area" = i32, Path, description = "Area id"),
    ),
    responses(
        (status = 200, body = UpdateAreaResponse)
    ),
    request_body = UpdateAreaValidator
)]
pub async fn update_area(
    Path(id_area): Path<i32>,
    State(state): State<AppState>,
    AdminUser(_identity): AdminUser,
    ValidateJson(payload): ValidateJson<UpdateAreaValidator>,
) -> Result<Response<UpdateAreaResponse>, ApiError> {
    state
        .service
        .rename_area(id_area, payload.nama_area)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(UpdateAreaResponse {
        message: "ok".to_string(),
    }))
}
