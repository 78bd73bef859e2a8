use axum::{Router, middleware, routing::get};
use utoipa::OpenApi;

use super::handlers::get_dashboard_master_users::{
    __path_get_dashboard_master_users, get_dashboard_master_users,
};
use super::handlers::get_series::{__path_get_series, get_series};
use super::handlers::get_summary::{__path_get_summary, get_summary};
use crate::application::{auth::auth, http::server::app_state::AppState};

#[derive(OpenApi)]
#[openapi(paths(get_summary, get_series, get_dashboard_master_users))]
pub struct DashboardApiDoc;

pub fn dashboard_routes(state: AppState) -> Router<AppState> {
    let root_path = &state.args.server.root_path;

    Router::new()
        .route(&format!("{root_path}/dashboard/summary"), get(get_summary))
        .route(&format!("{root_path}/dashboard/series"), get(get_series))
        .route(
            &format!("{root_path}/dashboard/master-users"),
            get(get_dashboard_master_users),
        )
        .layer(middleware::from_fn_with_state(state.clone(), auth))
}
