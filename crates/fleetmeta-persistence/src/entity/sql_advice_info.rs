//! `SeaORM` Entity for the sql_advice_info result table
//!
//! Insert-only log of advisor outcomes, keyed by db id and SQL text.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq, Serialize, Deserialize)]
#[sea_orm(table_name = "sql_advice_info")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub db_id: i32,
    #[sea_orm(column_type = "Text")]
    pub sql_text: String,
    #[sea_orm(column_type = "Text")]
    pub advice: String,
    #[sea_orm(column_type = "Text", nullable)]
    pub message: Option<String>,
    pub create_time: DateTime,
    pub last_update_time: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::db_info::Entity",
        from = "Column::DbId",
        to = "super::db_info::Column::Id"
    )]
    DbInfo,
}

impl Related<super::db_info::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::DbInfo.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
