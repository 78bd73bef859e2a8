use axum::extract::State;
use inspeksi_core::domain::{
    geofence::value_objects::GeoPoint,
    inspection::{ports::InspectionService, value_objects::VerifyLocationInput},
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::auth::RequiredUser;
use crate::application::http::inspection::validators::VerifyLocationValidator;
use crate::application::http::server::api_entities::{
    api_error::{ApiError, ValidateJson},
    response::Response,
};
use crate::application::http::server::app_state::AppState;

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct VerifyLocationResponse {
    pub valid: bool,
    pub distance_m: f64,
    pub radius_m: i32,
}

#[utoipa::path(
    post,
    path = "/verify-location",
    tag = "inspection",
    summary = "Verify submission point",
    description = "Checks a point against a location's geofence without submitting anything. \
        The distance is returned even when the point is out of range.",
    responses(
        (status = 200, body = VerifyLocationResponse),
        (status = 422, description = "Geofence not configured")
    ),
    request_body = VerifyLocationValidator
)]
pub async fn verify_location(
    State(state): State<AppState>,
    RequiredUser(_identity): RequiredUser,
    ValidateJson(payload): ValidateJson<VerifyLocationValidator>,
) -> Result<Response<VerifyLocationResponse>, ApiError> {
    let check = state
        .service
        .verify_location(VerifyLocationInput {
            location_id: payload.lokasi_id,
            location_name: payload.lokasi_name,
            point: GeoPoint {
                latitude: payload.lat,
                longitude: payload.lon,
            },
        })
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(VerifyLocationResponse {
        valid: check.valid,
        distance_m: check.distance_m,
        radius_m: check.radius_m,
    }))
}
