//! Schema descriptor for monitor systems.

use async_trait::async_trait;
use sea_orm::{ColumnTrait, Condition, Set};

use fleetmeta_common::{MetaError, is_valid_host_ip, is_valid_port};
use fleetmeta_persistence::entity::monitor_system_info;

use crate::fields::{FieldDef, FieldKind};
use crate::kind::{DeletionPolicy, MetaKind, zero_time};

pub struct MonitorSystem;

#[async_trait]
impl MetaKind for MonitorSystem {
    type Entity = monitor_system_info::Entity;
    type Model = monitor_system_info::Model;
    type ActiveModel = monitor_system_info::ActiveModel;

    const NAME: &'static str = "monitor_system";
    const DELETION: DeletionPolicy = DeletionPolicy::SoftDelete;
    const FIELDS: &'static [FieldDef] = &[
        FieldDef {
            name: "id",
            kind: FieldKind::Int,
            required: false,
            settable: false,
        },
        FieldDef {
            name: "system_name",
            kind: FieldKind::Text,
            required: true,
            settable: true,
        },
        FieldDef {
            name: "system_type",
            kind: FieldKind::Int,
            required: true,
            settable: true,
        },
        FieldDef {
            name: "host_ip",
            kind: FieldKind::Text,
            required: true,
            settable: true,
        },
        FieldDef {
            name: "port_num",
            kind: FieldKind::Int,
            required: true,
            settable: true,
        },
        FieldDef {
            name: "port_num_slow",
            kind: FieldKind::Int,
            required: true,
            settable: true,
        },
        FieldDef {
            name: "base_url",
            kind: FieldKind::Text,
            required: true,
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

    fn id_column() -> monitor_system_info::Column {
        monitor_system_info::Column::Id
    }

    fn del_flag_column() -> monitor_system_info::Column {
        monitor_system_info::Column::DelFlag
    }

    fn id_of(model: &Self::Model) -> i32 {
        model.id
    }

    fn natural_key(model: &Self::Model) -> Condition {
        Condition::all()
            .add(monitor_system_info::Column::HostIp.eq(model.host_ip.clone()))
            .add(monitor_system_info::Column::PortNum.eq(model.port_num))
    }

    fn natural_key_desc(model: &Self::Model) -> String {
        format!("host_ip '{}', port_num {}", model.host_ip, model.port_num)
    }

    fn model_for_insert(model: &Self::Model) -> Self::ActiveModel {
        monitor_system_info::ActiveModel {
            system_name: Set(model.system_name.clone()),
            system_type: Set(model.system_type),
            host_ip: Set(model.host_ip.clone()),
            port_num: Set(model.port_num),
            port_num_slow: Set(model.port_num_slow),
            base_url: Set(model.base_url.clone()),
            env_id: Set(model.env_id),
            del_flag: Set(model.del_flag),
            ..Default::default()
        }
    }

    fn template() -> Self::Model {
        monitor_system_info::Model {
            id: 0,
            system_name: String::new(),
            system_type: 1,
            host_ip: String::new(),
            port_num: 0,
            port_num_slow: 0,
            base_url: String::new(),
            env_id: 0,
            del_flag: 0,
            create_time: zero_time(),
            last_update_time: zero_time(),
        }
    }

    fn validate(model: &Self::Model) -> Result<(), MetaError> {
        if !is_valid_host_ip(&model.host_ip) {
            return Err(MetaError::FieldInvalid {
                kind: Self::NAME,
                name: "host_ip",
                reason: "not an IPv4 address",
            });
        }
        if !is_valid_port(model.port_num) {
            return Err(MetaError::FieldInvalid {
                kind: Self::NAME,
                name: "port_num",
                reason: "outside 1-65535",
            });
        }
        if !is_valid_port(model.port_num_slow) {
            return Err(MetaError::FieldInvalid {
                kind: Self::NAME,
                name: "port_num_slow",
                reason: "outside 1-65535",
            });
        }
        Ok(())
    }
}
