use crate::domain::terminal::entities::Terminal;
use crate::entity::terminals::Model as TerminalModel;

impl From<TerminalModel> for Terminal {
    fn from(model: TerminalModel) -> Self {
        Terminal {
            id: model.id,
            name: model.name,
            form_schema: model.form_schema,
        }
    }
}
