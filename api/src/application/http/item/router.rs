use axum::{
    Router, middleware,
    routing::{delete, get, post, put},
};
use utoipa::OpenApi;

use super::handlers::create_item::{__path_create_item, create_item};
use super::handlers::delete_item::{__path_delete_item, delete_item};
use super::handlers::get_items::{__path_get_items, get_items};
use super::handlers::update_item::{__path_update_item, update_item};
use crate::application::{auth::auth, http::server::app_state::AppState};

#[derive(OpenApi)]
#[openapi(paths(get_items, create_item, update_item, delete_item))]
pub struct ItemApiDoc;

pub fn item_routes(state: AppState) -> Router<AppState> {
    let root_path = &state.args.server.root_path;

    Router::new()
        .route(&format!("{root_path}/admin/items"), get(get_items))
        .route(&format!("{root_path}/admin/items"), post(create_item))
        .route(
            &format!("{root_path}/admin/items/{{id_item}}"),
            put(update_item),
        )
        .route(
            &format!("{root_path}/admin/items/{{id_item}}"),
            delete(delete_item),
        )
        .layer(middleware::from_fn_with_state(state.clone(), auth))
}
