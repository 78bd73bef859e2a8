use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateAreaValidator {
    pub lokasi_id: i32,

    #[validate(length(min = 1, message = "nama_area is required"))]
    pub nama_area: String,
}

#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
pub struct UpdateAreaValidator {
    #[validate(length(min = 1, message = "nama_area is required"))]
    pub nama_area: String,
}
