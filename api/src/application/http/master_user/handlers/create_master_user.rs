use axum::extract::State;
use inspeksi_core::domain::identity::{
    entities::MasterUser,
    ports::MasterUserService,
    value_objects::CreateMasterUserInput,
};

use crate::application::auth::AdminUser;
use crate::application::http::master_user::validators::CreateMasterUserValidator;
use crate::application::http::server::api_entities::{
    api_error::{ApiError, ValidateJson},
    response::Response,
};
use crate::application::http::server::app_state::AppState;

#[utoipa::path(
    post,
    path = "/admin/master-users",
    tag = "admin",
    summary = "Create master user",
    description = "Creates a catalog-level person. The role must be one of the canonical \
        labels; synonym spellings are accepted and normalized.",
    responses(
        (status = 201, body = MasterUser),
        (status = 409, description = "Email already registered")
    ),
    request_body = CreateMasterUserValidator
)]
pub async fn create_master_user(
    State(state): State<AppState>,
    AdminUser(_identity): AdminUser,
    ValidateJson(payload): ValidateJson<CreateMasterUserValidator>,
) -> Result<Response<MasterUser>, ApiError> {
    let user = state
        .service
        .create_master_user(CreateMasterUserInput {
            email: payload.email,
            full_name: payload.full_name,
            department: payload.department,
            role: payload.role,
        })
        .await
        .map_err(ApiError::from)?;

    Ok(Response::Created(user))
}
