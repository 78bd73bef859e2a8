use axum::{
    Router, middleware,
    routing::{delete, get, post, put},
};
use utoipa::OpenApi;

use super::handlers::create_master_user::{__path_create_master_user, create_master_user};
use super::handlers::delete_master_user::{__path_delete_master_user, delete_master_user};
use super::handlers::get_master_users::{__path_get_master_users, get_master_users};
use super::handlers::update_master_user::{__path_update_master_user, update_master_user};
use crate::application::{auth::auth, http::server::app_state::AppState};

#[derive(OpenApi)]
#[openapi(paths(
    get_master_users,
    create_master_user,
    update_master_user,
    delete_master_user
))]
pub struct MasterUserApiDoc;

pub fn master_user_routes(state: AppState) -> Router<AppState> {
    let root_path = &state.args.server.root_path;

    Router::new()
        .route(
            &format!("{root_path}/admin/master-users"),
            get(get_master_users),
        )
        .route(
            &format!("{root_path}/admin/master-users"),
            post(create_master_user),
        )
        .route(
            &format!("{root_path}/admin/master-users/{{id_user}}"),
            put(update_master_user),
        )
        .route(
            &format!("{root_path}/admin/master-users/{{id_user}}"),
            delete(delete_master_user),
        )
        .layer(middleware::from_fn_with_state(state.clone(), auth))
}
