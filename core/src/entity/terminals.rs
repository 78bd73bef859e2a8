use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "terminals")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub name: String,
    pub form_schema: Option<Json>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::legacy_inspections::Entity")]
    LegacyInspections,
}

impl Related<super::legacy_inspections::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::LegacyInspections.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
