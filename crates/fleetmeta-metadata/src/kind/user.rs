//! Schema descriptor for users.

use async_trait::async_trait;
use sea_orm::{ColumnTrait, Condition, Set};

use fleetmeta_common::{MetaError, is_valid_name};
use fleetmeta_persistence::entity::user_info;

use crate::fields::{FieldDef, FieldKind};
use crate::kind::{DeletionPolicy, MetaKind, zero_time};

pub struct User;

#[async_trait]
impl MetaKind for User {
    type Entity = user_info::Entity;
    type Model = user_info::Model;
    type ActiveModel = user_info::ActiveModel;

    const NAME: &'static str = "user";
    const DELETION: DeletionPolicy = DeletionPolicy::SoftDelete;
    const FIELDS: &'static [FieldDef] = &[
        FieldDef {
            name: "id",
            kind: FieldKind::Int,
            required: false,
            settable: false,
        },
        FieldDef {
            name: "user_name",
            kind: FieldKind::Text,
            required: true,
            settable: true,
        },
        FieldDef {
            name: "department_name",
            kind: FieldKind::Text,
            required: false,
            settable: true,
        },
        FieldDef {
            name: "employee_id",
            kind: FieldKind::Text,
            required: false,
            settable: true,
        },
        FieldDef {
            name: "account_name",
            kind: FieldKind::Text,
            required: true,
            settable: true,
        },
        FieldDef {
            name: "email",
            kind: FieldKind::Text,
            required: true,
            settable: true,
        },
        FieldDef {
            name: "telephone",
            kind: FieldKind::Text,
            required: false,
            settable: true,
        },
        FieldDef {
            name: "mobile",
            kind: FieldKind::Text,
            required: false,
            settable: true,
        },
        FieldDef {
            name: "role",
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

    fn id_column() -> user_info::Column {
        user_info::Column::Id
    }

    fn del_flag_column() -> user_info::Column {
        user_info::Column::DelFlag
    }

    fn id_of(model: &Self::Model) -> i32 {
        model.id
    }

    fn natural_key(model: &Self::Model) -> Condition {
        Condition::all().add(user_info::Column::AccountName.eq(model.account_name.clone()))
    }

    fn natural_key_desc(model: &Self::Model) -> String {
        format!("account_name '{}'", model.account_name)
    }

    fn model_for_insert(model: &Self::Model) -> Self::ActiveModel {
        user_info::ActiveModel {
            user_name: Set(model.user_name.clone()),
            department_name: Set(model.department_name.clone()),
            employee_id: Set(model.employee_id.clone()),
            account_name: Set(model.account_name.clone()),
            email: Set(model.email.clone()),
            telephone: Set(model.telephone.clone()),
            mobile: Set(model.mobile.clone()),
            role: Set(model.role),
            del_flag: Set(model.del_flag),
            ..Default::default()
        }
    }

    fn template() -> Self::Model {
        user_info::Model {
            id: 0,
            user_name: String::new(),
            department_name: String::new(),
            employee_id: String::new(),
            account_name: String::new(),
            email: String::new(),
            telephone: String::new(),
            mobile: String::new(),
            role: 1,
            del_flag: 0,
            create_time: zero_time(),
            last_update_time: zero_time(),
        }
    }

    fn validate(model: &Self::Model) -> Result<(), MetaError> {
        if !is_valid_name(&model.account_name) {
            return Err(MetaError::FieldInvalid {
                kind: Self::NAME,
                name: "account_name",
                reason: "not a valid catalog name",
            });
        }
        Ok(())
    }
}
