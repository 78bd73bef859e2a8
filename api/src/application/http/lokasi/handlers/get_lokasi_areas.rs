use axum::extract::{Path, State};
use inspeksi_core::domain::catalog::{entities::Area, ports::CatalogService};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::auth::RequiredUser;
use crate::application::http::server::api_entities::{api_error::ApiError, response::Response};
use crate::application::http::server::app_state::AppState;

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct AreaResponse {
    pub id_area: i32,
    pub nama_area: String,
}

impl From<Area> for AreaResponse {
    fn from(area: Area) -> Self {
        Self {
            id_area: area.id,
            nama_area: area.name,
        }
    }
}

#[utoipa::path(
    get,
    path = "/lokasi/{id_lokasi}/areas",
    tag = "lokasi",
    summary = "List areas of a location",
    params(
        ("id_lokasi" = i32, Path, description = "Location id"),
    ),
    responses(
        (status = 200, body = Vec<AreaResponse>)
    )
)]
pub async fn get_lokasi_areas(
    Path(id_lokasi): Path<i32>,
    State(state): State<AppState>,
    RequiredUser(_identity): RequiredUser,
) -> Result<Response<Vec<AreaResponse>>, ApiError> {
    let areas = state
        .service
        .get_areas(id_lokasi)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(
        areas.into_iter().map(AreaResponse::from).collect(),
    ))
}
