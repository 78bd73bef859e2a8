use serde::{Deserialize, Serialize};

/// A historical free-form submission, kept verbatim. The payload is an opaque
/// key-value mapping nested under a `row` or `fields` key; read-only input to
/// the normalizer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LegacyInspectionRecord {
    pub id: i32,
    pub terminal_id: i32,
    pub data: serde_json::Value,
}
