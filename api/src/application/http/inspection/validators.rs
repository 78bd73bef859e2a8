use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
pub struct BulkItemValidator {
    pub item_id: i32,

    /// Free-text status; blank defaults to "Bagus".
    #[serde(default)]
    pub status: String,

    #[serde(default)]
    pub catatan: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
pub struct BulkSubmissionValidator {
    pub lokasi_id: i32,

    pub area_id: i32,

    pub lat: f64,

    pub lon: f64,

    #[serde(default)]
    pub shift: Option<String>,

    #[validate(length(min = 1, message = "items must not be empty"))]
    pub items: Vec<BulkItemValidator>,
}

/// The form resolves the location by name before an id is at hand, so either
/// reference is accepted.
#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
pub struct VerifyLocationValidator {
    pub lat: f64,

    pub lon: f64,

    #[serde(default)]
    pub lokasi_id: Option<i32>,

    #[serde(default)]
    pub lokasi_name: Option<String>,
}
