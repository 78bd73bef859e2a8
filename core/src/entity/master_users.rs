use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "master_users")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id_user: i32,
    #[sea_orm(unique)]
    pub email: String,
    pub nama_lengkap: String,
    pub departemen: String,
    pub role: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::inspeksi::Entity")]
    Inspeksi,
}

impl Related<super::inspeksi::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Inspeksi.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
