use axum::extract::{Path, State};
use inspeksi_core::domain::catalog::ports::CatalogService;

use crate::application::auth::AdminUser;
use crate::application::http::item::validators::UpdateItemValidator;
use crate::application::http::lokasi::handlers::get_lokasi_items::ItemResponse;
use crate::application::http::server::api_entities::{
    api_error::{ApiError, ValidateJson},
    response::Response,
};
use crate::application::http::server::app_state::AppState;

#[utoipa::path(
    put,
    path = "/admin/items/{id_item}",
    tag = "admin",
    summary = "Rename item",
    params(
        ("id_item" = i32, Path, description = "Item id"),
    ),
    responses(
        (status = 200, body = ItemResponse)
    ),
    request_body = UpdateItemValidator
)]
pub async fn update_item(
    Path(id_item): Path<i32>,
    State(state): State<AppState>,
    AdminUser(_identity): AdminUser,
    ValidateJson(payload): ValidateJson<UpdateItemValidator>,
) -> Result<Response<ItemResponse>, ApiError> {
    let item = state
        .service
        .rename_item(id_item, payload.nama_item)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(ItemResponse::from(item)))
}
