use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "inspeksi")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id_inspeksi: i32,
    /// Fixed-width ISO-8601 UTC string; sorts lexicographically.
    pub ts_utc: String,
    pub user_id: i32,
    pub item_id: i32,
    pub status: String,
    pub catatan: String,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub shift: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::item::Entity",
        from = "Column::ItemId",
        to = "super::item::Column::IdItem"
    )]
    Item,
    #[sea_orm(
        belongs_to = "super::master_users::Entity",
        from = "Column::UserId",
        to = "super::master_users::Column::IdUser"
    )]
    MasterUser,
}

impl Related<super::item::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Item.def()
    }
}

impl Related<super::master_users::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::MasterUser.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
