//! Schema descriptor for databases.

use async_trait::async_trait;
use sea_orm::{ColumnTrait, Condition, DatabaseTransaction, DbErr, EntityTrait, QueryFilter, Set};

use fleetmeta_common::{MetaError, is_valid_name};
use fleetmeta_persistence::entity::{app_db_map, db_info};

use crate::fields::{FieldDef, FieldKind};
use crate::kind::{DeletionPolicy, MetaKind, zero_time};

/// Cluster type designating a MySQL cluster in `db_info.cluster_type`.
pub const CLUSTER_TYPE_MYSQL: i32 = 1;
/// Cluster type designating a middleware cluster.
pub const CLUSTER_TYPE_MIDDLEWARE: i32 = 2;

pub struct Db;

#[async_trait]
impl MetaKind for Db {
    type Entity = db_info::Entity;
    type Model = db_info::Model;
    type ActiveModel = db_info::ActiveModel;

    const NAME: &'static str = "db";
    const DELETION: DeletionPolicy = DeletionPolicy::HardDeleteWithCascade;
    const FIELDS: &'static [FieldDef] = &[
        FieldDef {
            name: "id",
            kind: FieldKind::Int,
            required: false,
            settable: false,
        },
        FieldDef {
            name: "db_name",
            kind: FieldKind::Text,
            required: true,
            settable: true,
        },
        FieldDef {
            name: "cluster_id",
            kind: FieldKind::Int,
            required: true,
            settable: true,
        },
        FieldDef {
            name: "cluster_type",
            kind: FieldKind::Int,
            required: true,
            settable: true,
        },
        FieldDef {
            name: "owner_id",
            kind: FieldKind::OptionalInt,
            required: false,
            settable: true,
        },
        FieldDef {
            name: "env_id",
            kind: FieldKind::Int,
            required: true,
            settable: true,
        },
        FieldDef {
            name: "del_flag",
            kind: FieldKind::Int,
            required: false,
            settable: true,
        },
        FieldDef {
            name: "create_time",
            kind: FieldKind::Timestamp,
            required: false,
            settable: false,
        },
        FieldDef {
            name: "last_update_time",
            kind: FieldKind::Timestamp,
            required: false,
            settable: false,
        },
    ];

    fn id_column() -> db_info::Column {
        db_info::Column::Id
    }

    fn del_flag_column() -> db_info::Column {
        db_info::Column::DelFlag
    }

    fn id_of(model: &Self::Model) -> i32 {
        model.id
    }

    fn natural_key(model: &Self::Model) -> Condition {
        Condition::all()
            .add(db_info::Column::DbName.eq(model.db_name.clone()))
            .add(db_info::Column::ClusterId.eq(model.cluster_id))
            .add(db_info::Column::ClusterType.eq(model.cluster_type))
    }

    fn natural_key_desc(model: &Self::Model) -> String {
        format!(
            "db_name '{}', cluster_id {}, cluster_type {}",
            model.db_name, model.cluster_id, model.cluster_type
        )
    }

    fn model_for_insert(model: &Self::Model) -> Self::ActiveModel {
        db_info::ActiveModel {
            db_name: Set(model.db_name.clone()),
            cluster_id: Set(model.cluster_id),
            cluster_type: Set(model.cluster_type),
            owner_id: Set(model.owner_id),
            env_id: Set(model.env_id),
            del_flag: Set(model.del_flag),
            ..Default::default()
        }
    }

    fn template() -> Self::Model {
        db_info::Model {
            id: 0,
            db_name: String::new(),
            cluster_id: 0,
            cluster_type: CLUSTER_TYPE_MYSQL,
            owner_id: None,
            env_id: 0,
            del_flag: 0,
            create_time: zero_time(),
            last_update_time: zero_time(),
        }
    }

    fn validate(model: &Self::Model) -> Result<(), MetaError> {
        if !is_valid_name(&model.db_name) {
            return Err(MetaError::FieldInvalid {
                kind: Self::NAME,
                name: "db_name",
                reason: "not a valid catalog name",
            });
        }
        Ok(())
    }

    async fn purge_relations(txn: &DatabaseTransaction, id: i32) -> Result<(), DbErr> {
        app_db_map::Entity::delete_many()
            .filter(app_db_map::Column::DbId.eq(id))
            .exec(txn)
            .await?;
        Ok(())
    }
}
