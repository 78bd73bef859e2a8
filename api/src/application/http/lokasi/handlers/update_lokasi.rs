use axum::extract::{Path, State};
use inspeksi_core::domain::catalog::{ports::CatalogService, value_objects::UpdateLocationInput};

use crate::application::auth::AdminUser;
use crate::application::http::lokasi::handlers::get_lokasi_list::LokasiResponse;
use crate::application::http::lokasi::validators::UpdateLokasiValidator;
use crate::application::http::server::api_entities::{
    api_error::{ApiError, ValidateJson},
    response::Response,
};
use crate::application::http::server::app_state::AppState;

#[utoipa::path(
    put,
    path = "/lokasi/{id_lokasi}",
    tag = "lokasi",
    summary = "Update location",
    description = "Renames a location and/or sets its geofence center and radius.",
    params(
        ("id_lokasi" = i32, Path, description = "Location id"),
    ),
    responses(
        (status = 200, body = LokasiResponse)
    ),
    request_body = UpdateLokasiValidator
)]
pub async fn update_lokasi(
    Path(id_lokasi): Path<i32>,
    State(state): State<AppState>,
    AdminUser(_identity): AdminUser,
    ValidateJson(payload): ValidateJson<UpdateLokasiValidator>,
) -> Result<Response<LokasiResponse>, ApiError> {
    let location = state
        .service
        .update_location(
            id_lokasi,
            UpdateLocationInput {
                name: payload.nama_lokasi,
                latitude: payload.latitude,
                longitude: payload.longitude,
                radius_m: payload.radius_m,
            },
        )
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(LokasiResponse::from(location)))
}
