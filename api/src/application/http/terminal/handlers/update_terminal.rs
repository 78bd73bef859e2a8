use axum::extract::{Path, State};
use inspeksi_core::domain::terminal::{
    entities::Terminal,
    ports::TerminalService,
    value_objects::UpdateTerminalInput,
};

use crate::application::auth::AdminUser;
use crate::application::http::server::api_entities::{
    api_error::{ApiError, ValidateJson},
    response::Response,
};
use crate::application::http::server::app_state::AppState;
use crate::application::http::terminal::validators::UpdateTerminalValidator;

#[utoipa::path(
    put,
    path = "/admin/terminals/{id_terminal}",
    tag = "admin",
    summary = "Update terminal",
    params(
        ("id_terminal" = i32, Path, description = "Terminal id"),
    ),
    responses(
        (status = 200, body = Terminal)
    ),
    request_body = UpdateTerminalValidator
)]
pub async fn update_terminal(
    Path(id_terminal): Path<i32>,
    State(state): State<AppState>,
    AdminUser(_identity): AdminUser,
    ValidateJson(payload): ValidateJson<UpdateTerminalValidator>,
) -> Result<Response<Terminal>, ApiError> {
    let terminal = state
        .service
        .update_terminal(
            id_terminal,
            UpdateTerminalInput {
                name: payload.name,
                form_schema: payload.form_schema,
            },
        )
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(terminal))
}
