//! Schema descriptor for middleware clusters.

use async_trait::async_trait;
use sea_orm::{ColumnTrait, Condition, Set};

use fleetmeta_common::{MetaError, is_valid_name};
use fleetmeta_persistence::entity::middleware_cluster_info;

use crate::fields::{FieldDef, FieldKind};
use crate::kind::{DeletionPolicy, MetaKind, zero_time};

pub struct MiddlewareCluster;

#[async_trait]
impl MetaKind for MiddlewareCluster {
    type Entity = middleware_cluster_info::Entity;
    type Model = middleware_cluster_info::Model;
    type ActiveModel = middleware_cluster_info::ActiveModel;

    const NAME: &'static str = "middleware_cluster";
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

    fn id_column() -> middleware_cluster_info::Column {
        middleware_cluster_info::Column::Id
    }

    fn del_flag_column() -> middleware_cluster_info::Column {
        middleware_cluster_info::Column::DelFlag
    }

    fn id_of(model: &Self::Model) -> i32 {
        model.id
    }

    fn natural_key(model: &Self::Model) -> Condition {
        Condition::all()
            .add(middleware_cluster_info::Column::ClusterName.eq(model.cluster_name.clone()))
            .add(middleware_cluster_info::Column::EnvId.eq(model.env_id))
    }

    fn natural_key_desc(model: &Self::Model) -> String {
        format!(
            "cluster_name '{}', env_id {}",
            model.cluster_name, model.env_id
        )
    }

    fn model_for_insert(model: &Self::Model) -> Self::ActiveModel {
        middleware_cluster_info::ActiveModel {
            cluster_name: Set(model.cluster_name.clone()),
            owner_id: Set(model.owner_id),
            env_id: Set(model.env_id),
            del_flag: Set(model.del_flag),
            ..Default::default()
        }
    }

    fn template() -> Self::Model {
        middleware_cluster_info::Model {
            id: 0,
            cluster_name: String::new(),
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
