#[derive(Debug, Clone)]
pub struct CreateTerminalInput {
    pub name: String,
    pub form_schema: Option<serde_json::Value>,
}

#[derive(Debug, Clone, Default)]
pub struct UpdateTerminalInput {
    pub name: Option<String>,
    pub form_schema: Option<serde_json::Value>,
}
