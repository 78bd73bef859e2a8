use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "area")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id_area: i32,
    pub id_lokasi: i32,
    pub nama_area: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::lokasi::Entity",
        from = "Column::IdLokasi",
        to = "super::lokasi::Column::IdLokasi"
    )]
    Lokasi,
    #[sea_orm(has_many = "super::item::Entity")]
    Item,
}

impl Related<super::lokasi::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Lokasi.def()
    }
}

impl Related<super::item::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Item.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
