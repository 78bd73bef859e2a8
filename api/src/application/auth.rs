use axum::{
    extract::{Request, State},
    http::request::Parts,
    middleware::Next,
    response::Response,
};
use axum::extract::FromRequestParts;
use axum_cookie::CookieManager;
use inspeksi_core::domain::identity::{services::decode_bearer_claims, value_objects::Identity};
use tracing::debug;

use super::http::server::{api_entities::api_error::ApiError, app_state::AppState};

const ACCESS_TOKEN_COOKIE: &str = "access_token";

fn token_from_headers(req: &Request) -> Option<String> {
    req.headers()
        .get("authorization")
        .and_then(|h| h.to_str().ok())
        .and_then(|h| h.strip_prefix("Bearer "))
        .filter(|t| !t.is_empty())
        .map(|t| t.to_string())
}

/// The login page stores the token as a `Bearer <token>` cookie value.
fn token_from_cookie(cookie: &CookieManager) -> Option<String> {
    let raw = cookie.get(ACCESS_TOKEN_COOKIE)?.value().to_string();
    let token = raw.strip_prefix("Bearer ").unwrap_or(&raw);
    if token.is_empty() {
        None
    } else {
        Some(token.to_string())
    }
}

/// Resolves the bearer token (header first, session cookie second) and stores
/// the caller's [`Identity`] in the request extensions. Requests without a
/// valid token pass through anonymously; the extractors below decide per
/// route whether that is acceptable.
pub async fn auth(
    State(state): State<AppState>,
    cookie: CookieManager,
    mut req: Request,
    next: Next,
) -> Response {
    let token = token_from_headers(&req).or_else(|| token_from_cookie(&cookie));

    if let Some(token) = token {
        match decode_bearer_claims(&state.args.auth.jwt_secret, &token) {
            Ok(claims) => {
                req.extensions_mut().insert(Identity::from_claims(&claims));
            }
            Err(_) => debug!("rejecting invalid bearer token"),
        }
    }

    next.run(req).await
}

/// Any authenticated caller.
pub struct RequiredUser(pub Identity);

impl<S> FromRequestParts<S> for RequiredUser
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<Identity>()
            .cloned()
            .map(RequiredUser)
            .ok_or_else(|| ApiError::Unauthorized("authentication required".to_string()))
    }
}

/// Administrator-only routes (master data, imports, normalization).
pub struct AdminUser(pub Identity);

impl<S> FromRequestParts<S> for AdminUser
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let RequiredUser(identity) = RequiredUser::from_request_parts(parts, state).await?;
        if !identity.is_administrator() {
            return Err(ApiError::Forbidden("administrator only".to_string()));
        }
        Ok(AdminUser(identity))
    }
}

/// Dashboard rollups are restricted to supervisory roles.
pub struct DashboardUser(pub Identity);

impl<S> FromRequestParts<S> for DashboardUser
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let RequiredUser(identity) = RequiredUser::from_request_parts(parts, state).await?;
        if !identity.can_view_dashboard() {
            return Err(ApiError::Forbidden("dashboard access is restricted".to_string()));
        }
        Ok(DashboardUser(identity))
    }
}
