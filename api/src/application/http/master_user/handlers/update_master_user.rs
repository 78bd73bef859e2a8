use axum::extract::{Path, State};
use inspeksi_core::domain::identity::{
    entities::MasterUser,
    ports::MasterUserService,
    value_objects::UpdateMasterUserInput,
};

use crate::application::auth::AdminUser;
use crate::application::http::master_user::validators::UpdateMasterUserValidator;
use crate::application::http::server::api_entities::{
    api_error::{ApiError, ValidateJson},
    response::Response,
};
use crate::application::http::server::app_state::AppState;

#[utoipa::path(
    put,
    path = "/admin/master-users/{id_user}",
    tag = "admin",
    summary = "Update master user",
    params(
        ("id_user" = i32, Path, description = "Master user id"),
    ),
    responses(
        (status = 200, body = MasterUser)
    ),
    request_body = UpdateMasterUserValidator
)]
pub async fn update_master_user(
    Path(id_user): Path<i32>,
    State(state): State<AppState>,
    AdminUser(_identity): AdminUser,
    ValidateJson(payload): ValidateJson<UpdateMasterUserValidator>,
) -> Result<Response<MasterUser>, ApiError> {
    let user = state
        .service
        .update_master_user(
            id_user,
            UpdateMasterUserInput {
                email: payload.email,
                full_name: payload.full_name,
                department: payload.department,
                role: payload.role,
            },
        )
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(user))
}
