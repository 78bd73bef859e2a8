use axum::{
    Router, middleware,
    routing::{get, post},
};
use utoipa::OpenApi;

use super::handlers::commit_import::{__path_commit_import, commit_import};
use super::handlers::get_db_summary::{__path_get_db_summary, get_db_summary};
use super::handlers::import_preview::{__path_import_preview, import_preview};
use super::handlers::normalize_inspections::{
    __path_normalize_inspections, normalize_inspections,
};
use crate::application::{auth::auth, http::server::app_state::AppState};

#[derive(OpenApi)]
#[openapi(paths(normalize_inspections, import_preview, commit_import, get_db_summary))]
pub struct LegacyApiDoc;

pub fn legacy_routes(state: AppState) -> Router<AppState> {
    let root_path = &state.args.server.root_path;

    Router::new()
        .route(
            &format!("{root_path}/admin/normalize-inspections"),
            post(normalize_inspections),
        )
        .route(
            &format!("{root_path}/admin/import-preview"),
            post(import_preview),
        )
        .route(
            &format!("{root_path}/admin/commit-import"),
            post(commit_import),
        )
        .route(&format!("{root_path}/admin/db-summary"), get(get_db_summary))
        .layer(middleware::from_fn_with_state(state.clone(), auth))
}
