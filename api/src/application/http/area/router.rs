use axum::{
    Router, middleware,
    routing::{delete, get, post, put},
};
use utoipa::OpenApi;

use super::handlers::create_area::{__path_create_area, create_area};
use super::handlers::delete_area::{__path_delete_area, delete_area};
use super::handlers::get_area_items::{__path_get_area_items, get_area_items};
use super::handlers::get_areas::{__path_get_areas, get_areas};
use super::handlers::update_area::{__path_update_area, update_area};
use crate::application::{auth::auth, http::server::app_state::AppState};

#[derive(OpenApi)]
#[openapi(paths(get_areas, create_area, update_area, delete_area, get_area_items))]
pub struct AreaApiDoc;

pub fn area_routes(state: AppState) -> Router<AppState> {
    let root_path = &state.args.server.root_path;

    Router::new()
        .route(&format!("{root_path}/admin/areas"), get(get_areas))
        .route(&format!("{root_path}/admin/areas"), post(create_area))
        .route(
            &format!("{root_path}/admin/areas/{{id_area}}"),
            put(update_area),
        )
        .route(
            &format!("{root_path}/admin/areas/{{id_area}}"),
            delete(delete_area),
        )
        .route(
            &format!("{root_path}/area/{{id_area}}/items"),
            get(get_area_items),
        )
        .layer(middleware::from_fn_with_state(state.clone(), auth))
}
