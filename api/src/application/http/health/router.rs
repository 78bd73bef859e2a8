use axum::{Router, routing::get};
use utoipa::OpenApi;

use super::handlers::get_health::{__path_get_health, get_health};
use crate::application::http::server::app_state::AppState;

#[derive(OpenApi)]
#[openapi(paths(get_health))]
pub struct HealthApiDoc;

/// No auth layer: liveness probes do not carry tokens.
pub fn health_routes(state: AppState) -> Router<AppState> {
    let root_path = &state.args.server.root_path;

    Router::new().route(&format!("{root_path}/health"), get(get_health))
}
