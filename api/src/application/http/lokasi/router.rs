use axum::{
    Router, middleware,
    routing::{delete, get, post, put},
};
use utoipa::OpenApi;

use super::handlers::create_lokasi::{__path_create_lokasi, create_lokasi};
use super::handlers::delete_lokasi::{__path_delete_lokasi, delete_lokasi};
use super::handlers::get_lokasi_areas::{__path_get_lokasi_areas, get_lokasi_areas};
use super::handlers::get_lokasi_items::{__path_get_lokasi_items, get_lokasi_items};
use super::handlers::get_lokasi_list::{__path_get_lokasi_list, get_lokasi_list};
use super::handlers::update_lokasi::{__path_update_lokasi, update_lokasi};
use crate::application::{auth::auth, http::server::app_state::AppState};

#[derive(OpenApi)]
#[openapi(paths(
    get_lokasi_list,
    create_lokasi,
    update_lokasi,
    delete_lokasi,
    get_lokasi_areas,
    get_lokasi_items
))]
pub struct LokasiApiDoc;

pub fn lokasi_routes(state: AppState) -> Router<AppState> {
    let root_path = &state.args.server.root_path;

    Router::new()
        .route(&format!("{root_path}/lokasi"), get(get_lokasi_list))
        .route(&format!("{root_path}/lokasi"), post(create_lokasi))
        .route(&format!("{root_path}/lokasi/{{id_lokasi}}"), put(update_lokasi))
        .route(
            &format!("{root_path}/lokasi/{{id_lokasi}}"),
            delete(delete_lokasi),
        )
        .route(
            &format!("{root_path}/lokasi/{{id_lokasi}}/areas"),
            get(get_lokasi_areas),
        )
        .route(
            &format!("{root_path}/lokasi/{{id_lokasi}}/items"),
            get(get_lokasi_items),
        )
        .layer(middleware::from_fn_with_state(state.clone(), auth))
}
