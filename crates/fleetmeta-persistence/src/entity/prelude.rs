//! Entity prelude re-exports

pub use super::app_db_map::Entity as AppDbMap;
pub use super::app_info::Entity as AppInfo;
pub use super::db_info::Entity as DbInfo;
pub use super::env_info::Entity as EnvInfo;
pub use super::middleware_cluster_info::Entity as MiddlewareClusterInfo;
pub use super::middleware_server_info::Entity as MiddlewareServerInfo;
pub use super::monitor_system_info::Entity as MonitorSystemInfo;
pub use super::mysql_cluster_info::Entity as MysqlClusterInfo;
pub use super::mysql_server_info::Entity as MysqlServerInfo;
pub use super::sql_advice_info::Entity as SqlAdviceInfo;
pub use super::user_info::Entity as UserInfo;
