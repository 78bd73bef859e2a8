use axum::extract::{Path, State};
use inspeksi_core::domain::terminal::ports::TerminalService;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::auth::AdminUser;
use crate::application::http::server::api_entities::{api_error::ApiError, response::Response};
use crate::application::http::server::app_state::AppState;

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct DeleteTerminalResponse {
    pub message: String,
}

#[utoipa::path(
    delete,
    path = "/admin/terminals/{id_terminal}",
    tag = "admin",
    summary = "Delete terminal",
    params(
        ("id_terminal" = i32, Path, description = "Terminal id"),
    ),
    responses(
        (status = 200, body = DeleteTerminalResponse)
    )
)]
pub async fn delete_terminal(
    Path(id_terminal): Path<i32>,
    State(state): State<AppState>,
    AdminUser(_identity): AdminUser,
) -> Result<Response<DeleteTerminalResponse>, ApiError> {
    state
        .service
        .delete_terminal(id_terminal)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(DeleteTerminalResponse {
        message: "deleted".to_string(),
    }))
}
