use axum::extract::{Query, State};
use inspeksi_core::domain::catalog::ports::CatalogService;
use serde::Deserialize;
use utoipa::IntoParams;

use crate::application::auth::AdminUser;
use crate::application::http::lokasi::handlers::get_lokasi_items::ItemResponse;
use crate::application::http::server::api_entities::{api_error::ApiError, response::Response};
use crate::application::http::server::app_state::AppState;

#[derive(Debug, Deserialize, IntoParams)]
pub struct GetItemsQuery {
    pub area_id: i32,
}

#[utoipa::path(
    get,
    path = "/admin/items",
    tag = "admin",
    summary = "List items of an area",
    params(GetItemsQuery),
    responses(
        (status = 200, body = Vec<ItemResponse>)
    )
)]
pub async fn get_items(
    State(state): State<AppState>,
    AdminUser(_identity): AdminUser,
    Query(query): Query<GetItemsQuery>,
) -> Result<Response<Vec<ItemResponse>>, ApiError> {
    let items = state
        .service
        .get_items_by_area(query.area_id)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(
        items.into_iter().map(ItemResponse::from).collect(),
    ))
}
