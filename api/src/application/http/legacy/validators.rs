use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

fn default_status() -> String {
    "Bagus".to_string()
}

#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
pub struct NormalizeInspectionsValidator {
    pub terminal_id: i32,

    #[serde(default)]
    pub create_transactions: bool,

    #[serde(default)]
    pub inspector_email: Option<String>,

    #[serde(default = "default_status")]
    pub default_status: String,

    #[serde(default)]
    pub default_shift: Option<String>,
}

/// Rows arrive already parsed; spreadsheet mechanics live outside this
/// service.
#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
pub struct ImportPreviewValidator {
    #[validate(length(min = 1, message = "filename is required"))]
    pub filename: String,

    #[validate(length(min = 1, message = "columns must not be empty"))]
    pub columns: Vec<String>,

    #[schema(value_type = Vec<Object>)]
    pub rows: Vec<serde_json::Map<String, serde_json::Value>>,
}

#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
pub struct CommitImportValidator {
    #[validate(length(min = 1, message = "token is required"))]
    pub token: String,

    #[validate(length(min = 1, message = "terminal_name is required"))]
    pub terminal_name: String,

    /// `create_or_update` (default) or `update_only`.
    #[serde(default)]
    pub mode: Option<String>,

    #[serde(default)]
    pub insert_rows: bool,
}
