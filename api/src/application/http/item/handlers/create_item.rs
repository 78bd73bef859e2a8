use axum::extract::State;
use inspeksi_core::domain::catalog::{ports::CatalogService, value_objects::CreateItemInput};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::auth::AdminUser;
use crate::application::http::item::validators::CreateItemValidator;
use crate::application::http::server::api_entities::{
    api_error::{ApiError, ValidateJson},
    response::Response,
};
use crate::application::http::server::app_state::AppState;

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct CreateItemResponse {
    pub id_item: i32,
}

#[utoipa::path(
    post,
    path = "/admin/items",
    tag = "admin",
    summary = "Create item",
    responses(
        (status = 201, body = CreateItemResponse)
    ),
    request_body = CreateItemValidator
)]
pub async fn create_item(
    State(state): State<AppState>,
    AdminUser(_identity): AdminUser,
    ValidateJson(payload): ValidateJson<CreateItemValidator>,
) -> Result<Response<CreateItemResponse>, ApiError> {
    let item = state
        .service
        .create_item(CreateItemInput {
            area_id: payload.area_id,
            name: payload.nama_item,
        })
        .await
        .map_err(ApiError::from)?;

    Ok(Response::Created(CreateItemResponse { id_item: item.id }))
}
