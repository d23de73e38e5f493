//! `SeaORM` Entity for db_info table

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq, Serialize, Deserialize)]
#[sea_orm(table_name = "db_info")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub db_name: String,
    pub cluster_id: i32,
    pub cluster_type: i32,
    pub owner_id: Option<i32>,
    pub env_id: i32,
    pub del_flag: i8,
    pub create_time: DateTime,
    pub last_update_time: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::app_db_map::Entity")]
    AppDbMap,
    #[sea_orm(
        belongs_to = "super::env_info::Entity",
        from = "Column::EnvId",
        to = "super::env_info::Column::Id"
    )]
    EnvInfo,
}

impl Related<super::app_db_map::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::AppDbMap.def()
    }
}

impl Related<super::env_info::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::EnvInfo.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
