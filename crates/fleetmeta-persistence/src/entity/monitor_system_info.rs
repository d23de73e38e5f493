//! `SeaORM` Entity for monitor_system_info table

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq, Serialize, Deserialize)]
#[sea_orm(table_name = "monitor_system_info")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub system_name: String,
    pub system_type: i32,
    pub host_ip: String,
    pub port_num: i32,
    pub port_num_slow: i32,
    pub base_url: String,
    pub env_id: i32,
    pub del_flag: i8,
    pub create_time: DateTime,
    pub last_update_time: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::mysql_cluster_info::Entity")]
    MysqlClusterInfo,
}

impl Related<super::mysql_cluster_info::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::MysqlClusterInfo.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
