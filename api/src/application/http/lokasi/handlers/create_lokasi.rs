use axum::extract::State;
use inspeksi_core::domain::catalog::{ports::CatalogService, value_objects::CreateLocationInput};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::auth::AdminUser;
use crate::application::http::lokasi::validators::CreateLokasiValidator;
use crate::application::http::server::api_entities::{
    api_error::{ApiError, ValidateJson},
    response::Response,
};
use crate::application::http::server::app_state::AppState;

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct CreateLokasiResponse {
    pub id_lokasi: i32,
    pub nama_lokasi: String,
}

#[utoipa::path(
    post,
    path = "/lokasi",
    tag = "lokasi",
    summary = "Create location",
    responses(
        (status = 201, body = CreateLokasiResponse)
    ),
    request_body = CreateLokasiValidator
)]
pub async fn create_lokasi(
    State(state): State<AppState>,
    AdminUser(_identity): AdminUser,
    ValidateJson(payload): ValidateJson<CreateLokasiValidator>,
) -> Result<Response<CreateLokasiResponse>, ApiError> {
    let location = state
        .service
        .create_location(CreateLocationInput {
            name: payload.nama_lokasi,
        })
        .await
        .map_err(ApiError::from)?;

    Ok(Response::Created(CreateLokasiResponse {
        id_lokasi: location.id,
        nama_lokasi: location.name,
    }))
}
