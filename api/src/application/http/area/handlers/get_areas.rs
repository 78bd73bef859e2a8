use axum::extract::{Query, State};
use inspeksi_core::domain::catalog::ports::CatalogService;
use serde::Deserialize;
use utoipa::IntoParams;

use crate::application::auth::AdminUser;
use crate::application::http::lokasi::handlers::get_lokasi_areas::AreaResponse;
use crate::application::http::server::api_entities::{api_error::ApiError, response::Response};
use crate::application::http::server::app_state::AppState;

#[derive(Debug, Deserialize, IntoParams)]
pub struct GetAreasQuery {
    pub lokasi_id: i32,
}

#[utoipa::path(
    get,
    path = "/admin/areas",
    tag = "admin",
    summary = "List areas of a location",
    params(GetAreasQuery),
    responses(
        (status = 200, body = Vec<AreaResponse>)
    )
)]
pub async fn get_areas(
    State(state): State<AppState>,
    AdminUser(_identity): AdminUser,
    Query(query): Query<GetAreasQuery>,
) -> Result<Response<Vec<AreaResponse>>, ApiError> {
    let areas = state
        .service
        .get_areas(query.lokasi_id)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(
        areas.into_iter().map(AreaResponse::from).collect(),
    ))
}
