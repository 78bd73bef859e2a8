use axum::{
    Router, middleware,
    routing::{delete, get, post, put},
};
use utoipa::OpenApi;

use super::handlers::create_terminal::{__path_create_terminal, create_terminal};
use super::handlers::delete_terminal::{__path_delete_terminal, delete_terminal};
use super::handlers::get_terminal::{__path_get_terminal, get_terminal};
use super::handlers::get_terminals::{__path_get_terminals, get_terminals};
use super::handlers::update_terminal::{__path_update_terminal, update_terminal};
use crate::application::{auth::auth, http::server::app_state::AppState};

#[derive(OpenApi)]
#[openapi(paths(
    get_terminals,
    get_terminal,
    create_terminal,
    update_terminal,
    delete_terminal
))]
pub struct TerminalApiDoc;

pub fn terminal_routes(state: AppState) -> Router<AppState> {
    let root_path = &state.args.server.root_path;

    Router::new()
        .route(&format!("{root_path}/terminals"), get(get_terminals))
        .route(
            &format!("{root_path}/terminals/{{id_terminal}}"),
            get(get_terminal),
        )
        .route(&format!("{root_path}/admin/terminals"), get(get_terminals))
        .route(&format!("{root_path}/admin/terminals"), post(create_terminal))
        .route(
            &format!("{root_path}/admin/terminals/{{id_terminal}}"),
            put(update_terminal),
        )
        .route(
            &format!("{root_path}/admin/terminals/{{id_terminal}}"),
            delete(delete_terminal),
        )
        .layer(middleware::from_fn_with_state(state.clone(), auth))
}
