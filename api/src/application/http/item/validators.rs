use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateItemValidator {
    pub area_id: i32,

    #[validate(length(min = 1, message = "nama_item is required"))]
    pub nama_item: String,
}

#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
pub struct UpdateItemValidator {
    #[validate(length(min = 1, message = "nama_item is required"))]
    pub nama_item: String,
}
