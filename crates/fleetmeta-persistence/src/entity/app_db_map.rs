//! `SeaORM` Entity for the app_db_map junction table
//!
//! Unique on (app_id, db_id). Rows are hard-deleted, either by pair or by
//! the App/Db cascading delete.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq, Serialize, Deserialize)]
#[sea_orm(table_name = "app_db_map")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub app_id: i32,
    pub db_id: i32,
    pub del_flag: i8,
    pub create_time: DateTime,
    pub last_update_time: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::app_info::Entity",
        from = "Column::AppId",
        to = "super::app_info::Column::Id"
    )]
    AppInfo,
    #[sea_orm(
        belongs_to = "super::db_info::Entity",
        from = "Column::DbId",
        to = "super::db_info::Column::Id"
    )]
    DbInfo,
}

impl Related<super::app_info::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::AppInfo.def()
    }
}

impl Related<super::db_info::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::DbInfo.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
