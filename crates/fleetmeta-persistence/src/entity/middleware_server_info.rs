//! `SeaORM` Entity for middleware_server_info table

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq, Serialize, Deserialize)]
#[sea_orm(table_name = "middleware_server_info")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub cluster_id: i32,
    pub server_name: String,
    pub middleware_role: i32,
    pub host_ip: String,
    pub port_num: i32,
    pub del_flag: i8,
    pub create_time: DateTime,
    pub last_update_time: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::middleware_cluster_info::Entity",
        from = "Column::ClusterId",
        to = "super::middleware_cluster_info::Column::Id"
    )]
    MiddlewareClusterInfo,
}

impl Related<super::middleware_cluster_info::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::MiddlewareClusterInfo.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
