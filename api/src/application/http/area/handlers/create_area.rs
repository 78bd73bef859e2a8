use axum::extract::State;
use inspeksi_core::domain::catalog::{ports::CatalogService, value_objects::CreateAreaInput};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::auth::AdminUser;
use crate::application::http::area::validators::CreateAreaValidator;
use crate::application::http::server::api_entities::{
    api_error::{ApiError, ValidateJson},
    response::Response,
};
use crate::application::http::server::app_state::AppState;

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct CreateAreaResponse {
    pub id_area: i32,
}

#[utoipa::path(
    post,
    path = "/admin/areas",
    tag = "admin",
    summary = "Create area",
    responses(
        (status = 201, body = CreateAreaResponse)
    ),
    request_body = CreateAreaValidator
)]
pub async fn create_area(
    State(state): State<AppState>,
    AdminUser(_identity): AdminUser,
    ValidateJson(payload): ValidateJson<CreateAreaValidator>,
) -> Result<Response<CreateAreaResponse>, ApiError> {
    let area = state
        .service
        .create_area(CreateAreaInput {
            location_id: payload.lokasi_id,
            name: payload.nama_area,
        })
        .await
        .map_err(ApiError::from)?;

    Ok(Response::Created(CreateAreaResponse { id_area: area.id }))
}
