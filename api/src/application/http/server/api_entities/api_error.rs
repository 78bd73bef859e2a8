use axum::Json;
use axum::extract::{FromRequest, Request};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use inspeksi_core::domain::common::entities::app_errors::CoreError;
use serde::{Deserialize, Serialize};
use serde::de::DeserializeOwned;
use thiserror::Error;
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Clone, Error, PartialEq)]
pub enum ApiError {
    #[error("{0}")]
    BadRequest(String),

    #[error("{0}")]
    Unauthorized(String),

    #[error("{0}")]
    Forbidden(String),

    #[error("{0}")]
    NotFound(String),

    #[error("{0}")]
    Conflict(String),

    #[error("location has no geofence configured")]
    GeofenceNotConfigured,

    #[error("submission point is out of range")]
    OutOfRange { distance_m: f64, radius_m: i32 },

    #[error("area does not belong to the given location")]
    InvalidArea,

    #[error("damaged items require a non-empty note")]
    NoteRequired,

    #[error("{0}")]
    InternalServerError(String),
}

/// Wire shape of every error. `distance_m`/`radius_m` are only present on
/// out-of-range geofence rejections so clients can show how far off the
/// submission was.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ApiErrorBody {
    pub code: String,
    pub message: String,
    pub status: u16,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub distance_m: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub radius_m: Option<i32>,
}

impl ApiError {
    fn status(&self) -> StatusCode {
        match self {
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            ApiError::Forbidden(_) => StatusCode::FORBIDDEN,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Conflict(_) => StatusCode::CONFLICT,
            ApiError::GeofenceNotConfigured
            | ApiError::OutOfRange { .. }
            | ApiError::InvalidArea
            | ApiError::NoteRequired => StatusCode::UNPROCESSABLE_ENTITY,
            ApiError::InternalServerError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn code(&self) -> &'static str {
        match self {
            ApiError::BadRequest(_) => "E_BAD_REQUEST",
            ApiError::Unauthorized(_) => "E_UNAUTHORIZED",
            ApiError::Forbidden(_) => "E_FORBIDDEN",
            ApiError::NotFound(_) => "E_NOT_FOUND",
            ApiError::Conflict(_) => "E_CONFLICT",
            ApiError::GeofenceNotConfigured => "E_GEOFENCE_NOT_CONFIGURED",
            ApiError::OutOfRange { .. } => "E_OUT_OF_RANGE",
            ApiError::InvalidArea => "E_INVALID_AREA",
            ApiError::NoteRequired => "E_NOTE_REQUIRED",
            ApiError::InternalServerError(_) => "E_INTERNAL",
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let (distance_m, radius_m) = match &self {
            ApiError::OutOfRange {
                distance_m,
                radius_m,
            } => (Some(*distance_m), Some(*radius_m)),
            _ => (None, None),
        };

        let body = ApiErrorBody {
            code: self.code().to_string(),
            message: self.to_string(),
            status: status.as_u16(),
            distance_m,
            radius_m,
        };

        (status, Json(body)).into_response()
    }
}

impl From<CoreError> for ApiError {
    fn from(error: CoreError) -> Self {
        match error {
            CoreError::NotFound(resource) => {
                ApiError::NotFound(format!("{} not found", resource.as_str()))
            }
            CoreError::GeofenceNotConfigured => ApiError::GeofenceNotConfigured,
            CoreError::OutOfRange {
                distance_m,
                radius_m,
            } => ApiError::OutOfRange {
                distance_m,
                radius_m,
            },
            CoreError::InvalidArea => ApiError::InvalidArea,
            CoreError::NoteRequired => ApiError::NoteRequired,
            CoreError::DuplicateEntry => ApiError::Conflict("entry already exists".to_string()),
            CoreError::Invalid(message) => ApiError::BadRequest(message),
            CoreError::Unauthorized => ApiError::Unauthorized("authentication required".to_string()),
            CoreError::Forbidden => ApiError::Forbidden("forbidden".to_string()),
            CoreError::InternalServerError => {
                ApiError::InternalServerError("internal server error".to_string())
            }
        }
    }
}

/// Json extractor that also runs `validator` rules before the handler sees
/// the payload.
pub struct ValidateJson<T>(pub T);

impl<S, T> FromRequest<S> for ValidateJson<T>
where
    S: Send + Sync,
    T: DeserializeOwned + Validate,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|e| ApiError::BadRequest(e.to_string()))?;

        value
            .validate()
            .map_err(|e| ApiError::BadRequest(e.to_string()))?;

        Ok(ValidateJson(value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use inspeksi_core::domain::common::entities::app_errors::Resource;

    #[test]
    fn out_of_range_keeps_distance_and_radius() {
        let error = ApiError::from(CoreError::OutOfRange {
            distance_m: 812.5,
            radius_m: 200,
        });
        assert_eq!(
            error,
            ApiError::OutOfRange {
                distance_m: 812.5,
                radius_m: 200
            }
        );
        assert_eq!(error.status(), StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(error.code(), "E_OUT_OF_RANGE");
    }

    #[test]
    fn not_found_names_the_resource() {
        let error = ApiError::from(CoreError::NotFound(Resource::Location));
        assert_eq!(error, ApiError::NotFound("location not found".to_string()));
        assert_eq!(error.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn geofence_codes_are_distinguishable() {
        let unconfigured = ApiError::from(CoreError::GeofenceNotConfigured);
        let out_of_range = ApiError::from(CoreError::OutOfRange {
            distance_m: 1.0,
            radius_m: 1,
        });
        assert_ne!(unconfigured.code(), out_of_range.code());
        assert_eq!(unconfigured.status(), out_of_range.status());
    }
}
