use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateLokasiValidator {
    #[validate(length(min = 1, message = "nama_lokasi is required"))]
    pub nama_lokasi: String,
}

#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
pub struct UpdateLokasiValidator {
    #[serde(default)]
    pub nama_lokasi: Option<String>,

    #[serde(default)]
    pub latitude: Option<f64>,

    #[serde(default)]
    pub longitude: Option<f64>,

    #[serde(default)]
    pub radius_m: Option<i32>,
}
