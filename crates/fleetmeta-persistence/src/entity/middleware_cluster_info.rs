//! `SeaORM` Entity for middleware_cluster_info table

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq, Serialize, Deserialize)]
#[sea_orm(table_name = "middleware_cluster_info")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub cluster_name: String,
    pub owner_id: Option<i32>,
    pub env_id: i32,
    pub del_flag: i8,
    pub create_time: DateTime,
    pub last_update_time: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::middleware_server_info::Entity")]
    MiddlewareServerInfo,
}

impl Related<super::middleware_server_info::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::MiddlewareServerInfo.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
