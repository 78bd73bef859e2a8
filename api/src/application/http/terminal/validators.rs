use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateTerminalValidator {
    #[validate(length(min = 1, message = "name is required"))]
    pub name: String,

    #[serde(default)]
    #[schema(value_type = Option<Object>)]
    pub form_schema: Option<serde_json::Value>,
}

#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
pub struct UpdateTerminalValidator {
    #[serde(default)]
    pub name: Option<String>,

    #[serde(default)]
    #[schema(value_type = Option<Object>)]
    pub form_schema: Option<serde_json::Value>,
}
