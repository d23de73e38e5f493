//! `SeaORM` entities for the fleetmeta catalog tables

pub mod prelude;

pub mod app_db_map;
pub mod app_info;
pub mod db_info;
pub mod env_info;
pub mod middleware_cluster_info;
pub mod middleware_server_info;
pub mod monitor_system_info;
pub mod mysql_cluster_info;
pub mod mysql_server_info;
pub mod sql_advice_info;
pub mod user_info;
