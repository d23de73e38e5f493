//! Kind descriptors: one `MetaKind` implementation per catalog table.
//!
//! The generic repository and service are parameterized by these
//! descriptors; each one binds the `SeaORM` entity types and declares the
//! field schema, natural key and deletion policy of its kind.

use async_trait::async_trait;
use sea_orm::{
    ActiveModelBehavior, ActiveModelTrait, Condition, DatabaseTransaction, DbErr, EntityTrait,
    FromQueryResult, IntoActiveModel, ModelTrait,
};
use serde::{Serialize, de::DeserializeOwned};

use fleetmeta_common::MetaError;

use crate::fields::FieldDef;

mod app;
mod db;
mod env;
mod middleware_cluster;
mod middleware_server;
mod monitor_system;
mod mysql_cluster;
mod mysql_server;
mod user;

pub use app::App;
pub use db::{CLUSTER_TYPE_MIDDLEWARE, CLUSTER_TYPE_MYSQL, Db};
pub use env::Env;
pub use middleware_cluster::MiddlewareCluster;
pub use middleware_server::MiddlewareServer;
pub use monitor_system::MonitorSystem;
pub use mysql_cluster::MysqlCluster;
pub use mysql_server::MysqlServer;
pub use user::User;

/// How `delete(id)` retires a row of this kind.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DeletionPolicy {
    /// Flip `del_flag`; the row stays.
    SoftDelete,
    /// Remove the row and its junction rows in one transaction.
    HardDeleteWithCascade,
}

/// Per-kind schema descriptor consumed by the generic repository/service.
#[async_trait]
pub trait MetaKind: Send + Sync + 'static {
    type Entity: EntityTrait<Model = Self::Model>;
    type Model: ModelTrait<Entity = Self::Entity>
        + FromQueryResult
        + IntoActiveModel<Self::ActiveModel>
        + Serialize
        + DeserializeOwned
        + Clone
        + PartialEq
        + Send
        + Sync;
    type ActiveModel: ActiveModelTrait<Entity = Self::Entity>
        + ActiveModelBehavior
        + Send
        + 'static;

    /// Kind name used in error messages and logs.
    const NAME: &'static str;
    const DELETION: DeletionPolicy;
    /// Declared field set; validated on every named-field operation.
    const FIELDS: &'static [FieldDef];

    fn id_column() -> <Self::Entity as EntityTrait>::Column;
    fn del_flag_column() -> <Self::Entity as EntityTrait>::Column;
    fn id_of(model: &Self::Model) -> i32;

    /// Filter matching the business key of `model`. Unique among active
    /// rows only.
    fn natural_key(model: &Self::Model) -> Condition;
    /// Human-readable natural key, for NotFound/DuplicateKey messages.
    fn natural_key_desc(model: &Self::Model) -> String;

    /// Active model for a two-phase insert: identity, `create_time` and
    /// `last_update_time` stay unset for the store to assign.
    fn model_for_insert(model: &Self::Model) -> Self::ActiveModel;

    /// Active model for a full-row rewrite of the settable columns.
    fn model_for_update(model: &Self::Model) -> Self::ActiveModel {
        Self::model_for_insert(model)
    }

    /// In-memory starting point for `create(fields)`; non-required fields
    /// carry their documented defaults.
    fn template() -> Self::Model;

    /// Content rules checked after field application, before any write.
    fn validate(_model: &Self::Model) -> Result<(), MetaError> {
        Ok(())
    }

    /// Cascade hook run inside the hard-delete transaction before the row
    /// itself is removed. No-op for soft-deleted kinds.
    async fn purge_relations(_txn: &DatabaseTransaction, _id: i32) -> Result<(), DbErr> {
        Ok(())
    }
}

/// Placeholder timestamp for templates; the store assigns real values.
pub(crate) fn zero_time() -> sea_orm::prelude::DateTime {
    chrono::DateTime::from_timestamp(0, 0)
        .expect("epoch timestamp")
        .naive_utc()
}
