use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Coarse grouping for legacy submissions, plus the form schema the
/// inspection form renders for it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Terminal {
    pub id: i32,
    pub name: String,
    #[schema(value_type = Object)]
    pub form_schema: Option<serde_json::Value>,
}
