//! Schema descriptor for MySQL clusters.

use async_trait::async_trait;
use sea_orm::{ColumnTrait, Condition, Set};

use fleetmeta_common::{MetaError, is_valid_name};
use fleetmeta_persistence::entity::mysql_cluster_info;

use crate::fields::{FieldDef, FieldKind};
use crate::kind::{DeletionPolicy, MetaKind, zero_time};

pub struct MysqlCluster;

#[async_trait]
impl MetaKind for MysqlCluster {
    type Entity = mysql_cluster_info::Entity;
    type Model = mysql_cluster_info::Model;
    type ActiveModel = mysql_cluster_info::ActiveModel;

    const NAME: &'static str = "mysql_cluster";
    const DELETION: DeletionPolicy = DeletionPolicy::SoftDelete;
    const FIELDS: &'static [FieldDef] = &[
        FieldDef {
            name: "id",
            kind: FieldKind::Int,
            required: false,
            settable: false,
        },
        FieldDef {
            name: "cluster_name",
            kind: FieldKind::Text,
            required: true,
            settable: true,
        },
        FieldDef {
            name: "middleware_cluster_id",
            kind: FieldKind::Int,
            required: false,
            settable: true,
        },
        FieldDef {
            name: "monitor_system_id",
            kind: FieldKind::Int,
            required: false,
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

    fn id_column() -> mysql_cluster_info::Column {
        mysql_cluster_info::Column::Id
    }

    fn del_flag_column() -> mysql_cluster_info::Column {
        mysql_cluster_info::Column::DelFlag
    }

    fn id_of(model: &Self::Model) -> i32 {
        model.id
    }

    fn natural_key(model: &Self::Model) -> Condition {
        Condition::all().add(mysql_cluster_info::Column::ClusterName.eq(model.cluster_name.clone()))
    }

    fn natural_key_desc(model: &Self::Model) -> String {
        format!("cluster_name '{}'", model.cluster_name)
    }

    fn model_for_insert(model: &Self::Model) -> Self::ActiveModel {
        mysql_cluster_info::ActiveModel {
            cluster_name: Set(model.cluster_name.clone()),
            middleware_cluster_id: Set(model.middleware_cluster_id),
            monitor_system_id: Set(model.monitor_system_id),
            owner_id: Set(model.owner_id),
            env_id: Set(model.env_id),
            del_flag: Set(model.del_flag),
            ..Default::default()
        }
    }

    fn template() -> Self::Model {
        mysql_cluster_info::Model {
            id: 0,
            cluster_name: String::new(),
            middleware_cluster_id: 0,
            monitor_system_id: 0,
            owner_id: None,
            env_id: 0,
            del_flag: 0,
            create_time: zero_time(),
            last_update_time: zero_time(),
        }
    }

    fn validate(model: &Self::Model) -> Result<(), MetaError> {
        if !is_valid_name(&model.cluster_name) {
            return Err(MetaError::FieldInvalid {
                kind: Self::NAME,
                name: "cluster_name",
                reason: "not a valid catalog name",
            });
        }
        Ok(())
    }
}
