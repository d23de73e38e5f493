//! `SeaORM` Entity for app_info table

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq, Serialize, Deserialize)]
#[sea_orm(table_name = "app_info")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub app_name: String,
    pub level: i32,
    pub owner_id: Option<i32>,
    pub del_flag: i8,
    pub create_time: DateTime,
    pub last_update_time: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::app_db_map::Entity")]
    AppDbMap,
}

impl Related<super::app_db_map::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::AppDbMap.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
