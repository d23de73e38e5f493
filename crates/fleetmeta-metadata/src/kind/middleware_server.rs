//! Schema descriptor for middleware servers.

use async_trait::async_trait;
use sea_orm::{ColumnTrait, Condition, Set};

use fleetmeta_common::{MetaError, is_valid_host_ip, is_valid_port};
use fleetmeta_persistence::entity::middleware_server_info;

use crate::fields::{FieldDef, FieldKind};
use crate::kind::{DeletionPolicy, MetaKind, zero_time};

pub struct MiddlewareServer;

#[async_trait]
impl MetaKind for MiddlewareServer {
    type Entity = middleware_server_info::Entity;
    type Model = middleware_server_info::Model;
    type ActiveModel = middleware_server_info::ActiveModel;

    const NAME: &'static str = "middleware_server";
    const DELETION: DeletionPolicy = DeletionPolicy::SoftDelete;
    const FIELDS: &'static [FieldDef] = &[
        FieldDef {
            name: "id",
            kind: FieldKind::Int,
            required: false,
            settable: false,
        },
        FieldDef {
            name: "cluster_id",
            kind: FieldKind::Int,
            required: true,
            settable: true,
        },
        FieldDef {
            name: "server_name",
            kind: FieldKind::Text,
            required: true,
            settable: true,
        },
        FieldDef {
            name: "middleware_role",
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

    fn id_column() -> middleware_server_info::Column {
        middleware_server_info::Column::Id
    }

    fn del_flag_column() -> middleware_server_info::Column {
        middleware_server_info::Column::DelFlag
    }

    fn id_of(model: &Self::Model) -> i32 {
        model.id
    }

    fn natural_key(model: &Self::Model) -> Condition {
        Condition::all()
            .add(middleware_server_info::Column::HostIp.eq(model.host_ip.clone()))
            .add(middleware_server_info::Column::PortNum.eq(model.port_num))
    }

    fn natural_key_desc(model: &Self::Model) -> String {
        format!("host_ip '{}', port_num {}", model.host_ip, model.port_num)
    }

    fn model_for_insert(model: &Self::Model) -> Self::ActiveModel {
        middleware_server_info::ActiveModel {
            cluster_id: Set(model.cluster_id),
            server_name: Set(model.server_name.clone()),
            middleware_role: Set(model.middleware_role),
            host_ip: Set(model.host_ip.clone()),
            port_num: Set(model.port_num),
            del_flag: Set(model.del_flag),
            ..Default::default()
        }
    }

    fn template() -> Self::Model {
        middleware_server_info::Model {
            id: 0,
            cluster_id: 0,
            server_name: String::new(),
            middleware_role: 1,
            host_ip: String::new(),
            port_num: 0,
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
        Ok(())
    }
}
