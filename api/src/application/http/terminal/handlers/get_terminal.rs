use axum::extract::{Path, State};
use inspeksi_core::domain::terminal::{entities::Terminal, ports::TerminalService};

use crate::application::auth::RequiredUser;
use crate::application::http::server::api_entities::{api_error::ApiError, response::Response};
use crate::application::http::server::app_state::AppState;

#[utoipa::path(
    get,
    path = "/terminals/{id_terminal}",
    tag = "terminal",
    summary = "Get terminal",
    description = "Returns the terminal with the form schema the inspection form renders.",
    params(
        ("id_terminal" = i32, Path, description = "Terminal id"),
    ),
    responses(
        (status = 200, body = Terminal),
        (status = 404, description = "Unknown terminal")
    )
)]
pub async fn get_terminal(
    Path(id_terminal): Path<i32>,
    State(state): State<AppState>,
    RequiredUser(_identity): RequiredUser,
) -> Result<Response<Terminal>, ApiError> {
    let terminal = state
        .service
        .get_terminal(id_terminal)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(terminal))
}
