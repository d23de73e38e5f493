//! `SeaORM` Entity for env_info table

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq, Serialize, Deserialize)]
#[sea_orm(table_name = "env_info")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub env_name: String,
    pub del_flag: i8,
    pub create_time: DateTime,
    pub last_update_time: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::db_info::Entity")]
    DbInfo,
}

impl Related<super::db_info::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::DbInfo.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
