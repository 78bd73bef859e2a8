use axum::extract::State;
use inspeksi_core::domain::terminal::{entities::Terminal, ports::TerminalService};

use crate::application::auth::RequiredUser;
use crate::application::http::server::api_entities::{api_error::ApiError, response::Response};
use crate::application::http::server::app_state::AppState;

#[utoipa::path(
    get,
    path = "/terminals",
    tag = "terminal",
    summary = "List terminals",
    responses(
        (status = 200, body = Vec<Terminal>)
    )
)]
pub async fn get_terminals(
    State(state): State<AppState>,
    RequiredUser(_identity): RequiredUser,
) -> Result<Response<Vec<Terminal>>, ApiError> {
    let terminals = state.service.get_terminals().await.map_err(ApiError::from)?;

    Ok(Response::OK(terminals))
}
