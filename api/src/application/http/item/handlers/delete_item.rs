use axum::extract::{Path, State};
use inspeksi_core::domain::catalog::ports::CatalogService;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::auth::AdminUser;
use crate::application::http::server::api_entities::{api_error::ApiError, response::Response};
use crate::application::http::server::app_state::AppState;

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct DeleteItemResponse {
    pub message: String,
}

#[utoipa::path(
    delete,
    path = "/admin/items/{id_item}",
    tag = "admin",
    summary = "Delete item",
    description = "Deletes an item together with its transactions.",
    params(
        ("id_item" = i32, Path, description = "Item id"),
    ),
    responses(
        (status = 200, body = DeleteItemResponse)
    )
)]
pub async fn delete_item(
    Path(id_item): Path<i32>,
    State(state): State<AppState>,
    AdminUser(_identity): AdminUser,
) -> Result<Response<DeleteItemResponse>, ApiError> {
    state
        .service
        .delete_item(id_item)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(DeleteItemResponse {
        message: "deleted".to_string(),
    }))
}
