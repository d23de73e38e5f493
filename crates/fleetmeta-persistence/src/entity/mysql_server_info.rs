//! `SeaORM` Entity for mysql_server_info table

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq, Serialize, Deserialize)]
#[sea_orm(table_name = "mysql_server_info")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub cluster_id: i32,
    pub server_name: String,
    pub host_ip: String,
    pub port_num: i32,
    pub deployment_type: i32,
    pub version: String,
    pub del_flag: i8,
    pub create_time: DateTime,
    pub last_update_time: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::mysql_cluster_info::Entity",
        from = "Column::ClusterId",
        to = "super::mysql_cluster_info::Column::Id"
    )]
    MysqlClusterInfo,
}

impl Related<super::mysql_cluster_info::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::MysqlClusterInfo.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
