use serde::{Deserialize, Serialize};

/// A parsed spreadsheet held between the preview and commit steps. Parsing
/// itself happens outside this system; rows arrive as string-keyed maps.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PendingImport {
    pub filename: String,
    pub columns: Vec<String>,
    pub rows: Vec<serde_json::Map<String, serde_json::Value>>,
    pub schema: serde_json::Value,
}

impl PendingImport {
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }
}
