use axum::extract::State;
use inspeksi_core::domain::terminal::{
    entities::Terminal,
    ports::TerminalService,
    value_objects::CreateTerminalInput,
};

use crate::application::auth::AdminUser;
use crate::application::http::server::api_entities::{
    api_error::{ApiError, ValidateJson},
    response::Response,
};
use crate::application::http::server::app_state::AppState;
use crate::application::http::terminal::validators::CreateTerminalValidator;

#[utoipa::path(
    post,
    path = "/admin/terminals",
    tag = "admin",
    summary = "Create terminal",
    responses(
        (status = 201, body = Terminal)
    ),
    request_body = CreateTerminalValidator
)]
pub async fn create_terminal(
    State(state): State<AppState>,
    AdminUser(_identity): AdminUser,
    ValidateJson(payload): ValidateJson<CreateTerminalValidator>,
) -> Result<Response<Terminal>, ApiError> {
    let terminal = state
        .service
        .create_terminal(CreateTerminalInput {
            name: payload.name,
            form_schema: payload.form_schema,
        })
        .await
        .map_err(ApiError::from)?;

    Ok(Response::Created(terminal))
}
