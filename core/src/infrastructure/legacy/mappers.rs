use crate::domain::legacy::entities::LegacyInspectionRecord;
use crate::entity::legacy_inspections::Model as LegacyInspectionModel;

impl From<LegacyInspectionModel> for LegacyInspectionRecord {
    fn from(model: LegacyInspectionModel) -> Self {
        LegacyInspectionRecord {
            id: model.id,
            terminal_id: model.terminal_id,
            data: model.data,
        }
    }
}
