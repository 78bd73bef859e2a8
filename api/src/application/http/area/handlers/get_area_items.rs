use axum::extract::{Path, State};
use inspeksi_core::domain::catalog::ports::CatalogService;

use crate::application::auth::RequiredUser;
use crate::application::http::lokasi::handlers::get_lokasi_items::ItemResponse;
use crate::application::http::server::api_entities::{api_error::ApiError, response::Response};
use crate::application::http::server::app_state::AppState;

#[utoipa::path(
    get,
    path = "/area/{id_area}/items",
    tag = "area",
    summary = "List items of an area",
    params(
        ("id_area" = i32, Path, description = "Area id"),
    ),
    responses(
        (status = 200, body = Vec<ItemResponse>)
    )
)]
pub async fn get_area_items(
    Path(id_area): Path<i32>,
    State(state): State<AppState>,
    RequiredUser(_identity): RequiredUser,
) -> Result<Response<Vec<ItemResponse>>, ApiError> {
    let items = state
        .service
        .get_items_by_area(id_area)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(
        items.into_iter().map(ItemResponse::from).collect(),
    ))
}
