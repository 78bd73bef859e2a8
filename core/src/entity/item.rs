use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "item")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id_item: i32,
    pub id_area: i32,
    pub nama_item: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::area::Entity",
        from = "Column::IdArea",
        to = "super::area::Column::IdArea"
    )]
    Area,
    #[sea_orm(has_many = "super::inspeksi::Entity")]
    Inspeksi,
}

impl Related<super::area::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Area.def()
    }
}

impl Related<super::inspeksi::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Inspeksi.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
