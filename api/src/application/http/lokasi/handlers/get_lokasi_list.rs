use axum::extract::State;
use inspeksi_core::domain::catalog::{entities::Location, ports::CatalogService};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::auth::RequiredUser;
use crate::application::http::server::api_entities::{api_error::ApiError, response::Response};
use crate::application::http::server::app_state::AppState;

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct LokasiResponse {
    pub id_lokasi: i32,
    pub nama_lokasi: String,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub radius_m: Option<i32>,
}

impl From<Location> for LokasiResponse {
    fn from(location: Location) -> Self {
        Self {
            id_lokasi: location.id,
            nama_lokasi: location.name,
            latitude: location.latitude,
            longitude: location.longitude,
            radius_m: location.radius_m,
        }
    }
}

#[utoipa::path(
    get,
    path = "/lokasi",
    tag = "lokasi",
    summary = "List locations",
    description = "Lists every location in name order, including geofence settings.",
    responses(
        (status = 200, body = Vec<LokasiResponse>)
    )
)]
pub async fn get_lokasi_list(
    State(state): State<AppState>,
    RequiredUser(_identity): RequiredUser,
) -> Result<Response<Vec<LokasiResponse>>, ApiError> {
    let locations = state.service.get_locations().await.map_err(ApiError::from)?;

    Ok(Response::OK(
        locations.into_iter().map(LokasiResponse::from).collect(),
    ))
}
