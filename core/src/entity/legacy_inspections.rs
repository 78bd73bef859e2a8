use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "legacy_inspections")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub terminal_id: i32,
    pub data: Json,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::terminals::Entity",
        from = "Column::TerminalId",
        to = "super::terminals::Column::Id"
    )]
    Terminal,
}

impl Related<super::terminals::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Terminal.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
