//! App<->Db junction and cluster hierarchy accessors.
//!
//! The junction is symmetric: the Db ids reachable from an App always equal
//! the App ids reachable from those Dbs in reverse. Both directions go
//! through one accessor parameterized by which side is fixed, so the two
//! service surfaces cannot drift apart.

use sea_orm::{
    ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter, QueryOrder, QuerySelect,
    Set, SqlErr,
};

use fleetmeta_common::MetaError;
use fleetmeta_persistence::entity::{app_db_map, middleware_server_info, mysql_server_info};

/// Which side of the App<->Db junction is fixed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum JunctionSide {
    App,
    Db,
}

impl JunctionSide {
    fn owner_column(self) -> app_db_map::Column {
        match self {
            JunctionSide::App => app_db_map::Column::AppId,
            JunctionSide::Db => app_db_map::Column::DbId,
        }
    }

    fn related_column(self) -> app_db_map::Column {
        match self {
            JunctionSide::App => app_db_map::Column::DbId,
            JunctionSide::Db => app_db_map::Column::AppId,
        }
    }
}

/// Ids on the opposite side of the junction for `owner_id`, ordered.
pub async fn related_ids(
    db: &DatabaseConnection,
    side: JunctionSide,
    owner_id: i32,
) -> Result<Vec<i32>, MetaError> {
    let ids = app_db_map::Entity::find()
        .select_only()
        .column(side.related_column())
        .filter(side.owner_column().eq(owner_id))
        .order_by_asc(side.related_column())
        .into_tuple::<i32>()
        .all(db)
        .await?;
    Ok(ids)
}

/// Insert one junction row. Not idempotent: a duplicate pair is surfaced
/// as a conflict from the store's uniqueness constraint, not swallowed.
pub async fn bind(db: &DatabaseConnection, app_id: i32, db_id: i32) -> Result<(), MetaError> {
    let row = app_db_map::ActiveModel {
        app_id: Set(app_id),
        db_id: Set(db_id),
        del_flag: Set(0),
        ..Default::default()
    };
    app_db_map::Entity::insert(row)
        .exec_without_returning(db)
        .await
        .map_err(junction_error)?;
    Ok(())
}

/// Delete one junction row; deleting a pair that is not bound is an error.
pub async fn unbind(db: &DatabaseConnection, app_id: i32, db_id: i32) -> Result<(), MetaError> {
    let outcome = app_db_map::Entity::delete_many()
        .filter(app_db_map::Column::AppId.eq(app_id))
        .filter(app_db_map::Column::DbId.eq(db_id))
        .exec(db)
        .await?;
    if outcome.rows_affected == 0 {
        return Err(MetaError::RelationshipConflict(format!(
            "app {app_id} and db {db_id} are not bound"
        )));
    }
    Ok(())
}

fn junction_error(err: DbErr) -> MetaError {
    match err.sql_err() {
        Some(SqlErr::UniqueConstraintViolation(detail)) => MetaError::RelationshipConflict(detail),
        _ => MetaError::Database(err),
    }
}

/// Active MySQL server ids of a MySQL cluster, ordered by id.
pub async fn mysql_server_ids(
    db: &DatabaseConnection,
    cluster_id: i32,
) -> Result<Vec<i32>, MetaError> {
    let ids = mysql_server_info::Entity::find()
        .select_only()
        .column(mysql_server_info::Column::Id)
        .filter(mysql_server_info::Column::ClusterId.eq(cluster_id))
        .filter(mysql_server_info::Column::DelFlag.eq(0))
        .order_by_asc(mysql_server_info::Column::Id)
        .into_tuple::<i32>()
        .all(db)
        .await?;
    Ok(ids)
}

/// Active middleware server ids of a middleware cluster, ordered by id.
pub async fn middleware_server_ids(
    db: &DatabaseConnection,
    cluster_id: i32,
) -> Result<Vec<i32>, MetaError> {
    let ids = middleware_server_info::Entity::find()
        .select_only()
        .column(middleware_server_info::Column::Id)
        .filter(middleware_server_info::Column::ClusterId.eq(cluster_id))
        .filter(middleware_server_info::Column::DelFlag.eq(0))
        .order_by_asc(middleware_server_info::Column::Id)
        .into_tuple::<i32>()
        .all(db)
        .await?;
    Ok(ids)
}

/// First active server of a MySQL cluster, ordered by id. Used by the SQL
/// advisor to resolve a physical target.
pub async fn first_mysql_server(
    db: &DatabaseConnection,
    cluster_id: i32,
) -> Result<mysql_server_info::Model, MetaError> {
    mysql_server_info::Entity::find()
        .filter(mysql_server_info::Column::ClusterId.eq(cluster_id))
        .filter(mysql_server_info::Column::DelFlag.eq(0))
        .order_by_asc(mysql_server_info::Column::Id)
        .one(db)
        .await?
        .ok_or_else(|| {
            MetaError::not_found("mysql_server", format!("cluster_id {cluster_id}"))
        })
}
