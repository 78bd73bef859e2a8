use axum::extract::{Path, State};
use inspeksi_core::domain::catalog::{entities::Item, ports::CatalogService};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::auth::RequiredUser;
use crate::application::http::server::api_entities::{api_error::ApiError, response::Response};
use crate::application::http::server::app_state::AppState;

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ItemResponse {
    pub id_item: i32,
    pub nama_item: String,
}

impl From<Item> for ItemResponse {
    fn from(item: Item) -> Self {
        Self {
            id_item: item.id,
            nama_item: item.name,
        }
    }
}

#[utoipa::path(
    get,
    path = "/lokasi/{id_lokasi}/items",
    tag = "lokasi",
    summary = "List items under a location",
    description = "Items of every area within the location, name-ascending.",
    params(
        ("id_lokasi" = i32, Path, description = "Location id"),
    ),
    responses(
        (status = 200, body = Vec<ItemResponse>)
    )
)]
pub async fn get_lokasi_items(
    Path(id_lokasi): Path<i32>,
    State(state): State<AppState>,
    RequiredUser(_identity): RequiredUser,
) -> Result<Response<Vec<ItemResponse>>, ApiError> {
    let items = state
        .service
        .get_items_by_location(id_lokasi)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(
        items.into_iter().map(ItemResponse::from).collect(),
    ))
}
