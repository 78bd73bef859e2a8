use axum::extract::State;
use inspeksi_core::domain::{
    geofence::value_objects::GeoPoint,
    inspection::{
        ports::InspectionService,
        value_objects::{BulkItemInput, BulkSubmissionInput},
    },
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::auth::RequiredUser;
use crate::application::http::inspection::validators::BulkSubmissionValidator;
use crate::application::http::server::api_entities::{
    api_error::{ApiError, ValidateJson},
    response::Response,
};
use crate::application::http::server::app_state::AppState;

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct BulkSubmissionResponse {
    pub created: u64,
}

#[utoipa::path(
    post,
    path = "/inspections/bulk-normalized",
    tag = "inspection",
    summary = "Submit bulk inspection",
    description = "Validates the submission point against the location's geofence and writes \
        one transaction row per item. A damaged item without a note rejects the whole batch; \
        items outside the submitted area are skipped.",
    responses(
        (status = 201, body = BulkSubmissionResponse),
        (status = 422, description = "Geofence not configured, out of range, invalid area or missing note")
    ),
    request_body = BulkSubmissionValidator
)]
pub async fn submit_bulk(
    State(state): State<AppState>,
    RequiredUser(identity): RequiredUser,
    ValidateJson(payload): ValidateJson<BulkSubmissionValidator>,
) -> Result<Response<BulkSubmissionResponse>, ApiError> {
    let input = BulkSubmissionInput {
        location_id: payload.lokasi_id,
        area_id: payload.area_id,
        point: GeoPoint {
            latitude: payload.lat,
            longitude: payload.lon,
        },
        shift: payload.shift,
        items: payload
            .items
            .into_iter()
            .map(|item| BulkItemInput {
                item_id: item.item_id,
                status: item.status,
                catatan: item.catatan,
            })
            .collect(),
    };

    let report = state
        .service
        .submit_bulk(identity, input)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::Created(BulkSubmissionResponse {
        created: report.created,
    }))
}
