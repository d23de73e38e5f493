//! `SeaORM` Entity for mysql_cluster_info table

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq, Serialize, Deserialize)]
#[sea_orm(table_name = "mysql_cluster_info")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub cluster_name: String,
    pub middleware_cluster_id: i32,
    pub monitor_system_id: i32,
    pub owner_id: Option<i32>,
    pub env_id: i32,
    pub del_flag: i8,
    pub create_time: DateTime,
    pub last_update_time: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::mysql_server_info::Entity")]
    MysqlServerInfo,
    #[sea_orm(
        belongs_to = "super::monitor_system_info::Entity",
        from = "Column::MonitorSystemId",
        to = "super::monitor_system_info::Column::Id"
    )]
    MonitorSystemInfo,
}

impl Related<super::mysql_server_info::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::MysqlServerInfo.def()
    }
}

impl Related<super::monitor_system_info::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::MonitorSystemInfo.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
