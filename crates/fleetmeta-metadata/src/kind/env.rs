//! Schema descriptor for environments.

use async_trait::async_trait;
use sea_orm::{ColumnTrait, Condition, Set};

use fleetmeta_common::{MetaError, is_valid_name};
use fleetmeta_persistence::entity::env_info;

use crate::fields::{FieldDef, FieldKind};
use crate::kind::{DeletionPolicy, MetaKind, zero_time};

pub struct Env;

#[async_trait]
impl MetaKind for Env {
    type Entity = env_info::Entity;
    type Model = env_info::Model;
    type ActiveModel = env_info::ActiveModel;

    const NAME: &'static str = "env";
    const DELETION: DeletionPolicy = DeletionPolicy::SoftDelete;
    const FIELDS: &'static [FieldDef] = &[
        FieldDef {
            name: "id",
            kind: FieldKind::Int,
            required: false,
            settable: false,
        },
        FieldDef {
            name: "env_name",
            kind: FieldKind::Text,
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

    fn id_column() -> env_info::Column {
        env_info::Column::Id
    }

    fn del_flag_column() -> env_info::Column {
        env_info::Column::DelFlag
    }

    fn id_of(model: &Self::Model) -> i32 {
        model.id
    }

    fn natural_key(model: &Self::Model) -> Condition {
        Condition::all().add(env_info::Column::EnvName.eq(model.env_name.clone()))
    }

    fn natural_key_desc(model: &Self::Model) -> String {
        format!("env_name '{}'", model.env_name)
    }

    fn model_for_insert(model: &Self::Model) -> Self::ActiveModel {
        env_info::ActiveModel {
            env_name: Set(model.env_name.clone()),
            del_flag: Set(model.del_flag),
            ..Default::default()
        }
    }

    fn template() -> Self::Model {
        env_info::Model {
            id: 0,
            env_name: String::new(),
            del_flag: 0,
            create_time: zero_time(),
            last_update_time: zero_time(),
        }
    }

    fn validate(model: &Self::Model) -> Result<(), MetaError> {
        if !is_valid_name(&model.env_name) {
            return Err(MetaError::FieldInvalid {
                kind: Self::NAME,
                name: "env_name",
                reason: "not a valid catalog name",
            });
        }
        Ok(())
    }
}
