//! Schema descriptor for applications.

use async_trait::async_trait;
use sea_orm::{ColumnTrait, Condition, DatabaseTransaction, DbErr, EntityTrait, QueryFilter, Set};

use fleetmeta_common::{MetaError, is_valid_name};
use fleetmeta_persistence::entity::{app_db_map, app_info};

use crate::fields::{FieldDef, FieldKind};
use crate::kind::{DeletionPolicy, MetaKind, zero_time};

pub struct App;

#[async_trait]
impl MetaKind for App {
    type Entity = app_info::Entity;
    type Model = app_info::Model;
    type ActiveModel = app_info::ActiveModel;

    const NAME: &'static str = "app";
    const DELETION: DeletionPolicy = DeletionPolicy::HardDeleteWithCascade;
    const FIELDS: &'static [FieldDef] = &[
        FieldDef {
            name: "id",
            kind: FieldKind::Int,
            required: false,
            settable: false,
        },
        FieldDef {
            name: "app_name",
            kind: FieldKind::Text,
            required: true,
            settable: true,
        },
        FieldDef {
            name: "level",
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

    fn id_column() -> app_info::Column {
        app_info::Column::Id
    }

    fn del_flag_column() -> app_info::Column {
        app_info::Column::DelFlag
    }

    fn id_of(model: &Self::Model) -> i32 {
        model.id
    }

    fn natural_key(model: &Self::Model) -> Condition {
        Condition::all().add(app_info::Column::AppName.eq(model.app_name.clone()))
    }

    fn natural_key_desc(model: &Self::Model) -> String {
        format!("app_name '{}'", model.app_name)
    }

    fn model_for_insert(model: &Self::Model) -> Self::ActiveModel {
        app_info::ActiveModel {
            app_name: Set(model.app_name.clone()),
            level: Set(model.level),
            owner_id: Set(model.owner_id),
            del_flag: Set(model.del_flag),
            ..Default::default()
        }
    }

    fn template() -> Self::Model {
        app_info::Model {
            id: 0,
            app_name: String::new(),
            level: 1,
            owner_id: None,
            del_flag: 0,
            create_time: zero_time(),
            last_update_time: zero_time(),
        }
    }

    fn validate(model: &Self::Model) -> Result<(), MetaError> {
        if !is_valid_name(&model.app_name) {
            return Err(MetaError::FieldInvalid {
                kind: Self::NAME,
                name: "app_name",
                reason: "not a valid catalog name",
            });
        }
        Ok(())
    }

    async fn purge_relations(txn: &DatabaseTransaction, id: i32) -> Result<(), DbErr> {
        app_db_map::Entity::delete_many()
            .filter(app_db_map::Column::AppId.eq(id))
            .exec(txn)
            .await?;
        Ok(())
    }
}
