use axum::{Router, middleware, routing::post};
use utoipa::OpenApi;

use super::handlers::submit_bulk::{__path_submit_bulk, submit_bulk};
use super::handlers::verify_location::{__path_verify_location, verify_location};
use crate::application::{auth::auth, http::server::app_state::AppState};

#[derive(OpenApi)]
#[openapi(paths(submit_bulk, verify_location))]
pub struct InspectionApiDoc;

pub fn inspection_routes(state: AppState) -> Router<AppState> {
    let root_path = &state.args.server.root_path;

    Router::new()
        .route(
            &format!("{root_path}/inspections/bulk-normalized"),
            post(submit_bulk),
        )
        .route(&format!("{root_path}/verify-location"), post(verify_location))
        .layer(middleware::from_fn_with_state(state.clone(), auth))
}
