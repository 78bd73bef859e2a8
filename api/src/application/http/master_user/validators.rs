use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateMasterUserValidator {
    #[validate(email(message = "email must be valid"))]
    pub email: String,

    #[validate(length(min = 1, message = "full_name is required"))]
    pub full_name: String,

    #[serde(default)]
    pub department: String,

    #[validate(length(min = 1, message = "role is required"))]
    pub role: String,
}

#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
pub struct UpdateMasterUserValidator {
    #[serde(default)]
    #[validate(email(message = "email must be valid"))]
    pub email: Option<String>,

    #[serde(default)]
    pub full_name: Option<String>,

    #[serde(default)]
    pub department: Option<String>,

    #[serde(default)]
    pub role: Option<String>,
}
