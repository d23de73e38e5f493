//! Junction and topology accessor tests against a mocked store.

use std::collections::BTreeMap;

use sea_orm::{DatabaseBackend, MockDatabase, MockExecResult, Value};

use fleetmeta_common::MetaError;
use fleetmeta_metadata::relation::{self, JunctionSide};
use fleetmeta_persistence::entity::mysql_server_info;

fn epoch() -> sea_orm::prelude::DateTime {
    chrono::DateTime::from_timestamp(0, 0).unwrap().naive_utc()
}

fn id_row(column: &'static str, id: i32) -> BTreeMap<&'static str, Value> {
    BTreeMap::from([(column, Value::from(id))])
}

fn server(id: i32, cluster_id: i32) -> mysql_server_info::Model {
    mysql_server_info::Model {
        id,
        cluster_id,
        server_name: format!("mysql-{id}"),
        host_ip: "10.0.0.5".to_string(),
        port_num: 3306,
        deployment_type: 1,
        version: "8.0".to_string(),
        del_flag: 0,
        create_time: epoch(),
        last_update_time: epoch(),
    }
}

#[tokio::test]
async fn test_related_ids_from_app_side() {
    let db = MockDatabase::new(DatabaseBackend::MySql)
        .append_query_results([vec![id_row("db_id", 4), id_row("db_id", 9)]])
        .into_connection();

    let ids = relation::related_ids(&db, JunctionSide::App, 1).await.unwrap();
    assert_eq!(ids, vec![4, 9]);
}

#[tokio::test]
async fn test_related_ids_from_db_side() {
    let db = MockDatabase::new(DatabaseBackend::MySql)
        .append_query_results([vec![id_row("app_id", 1), id_row("app_id", 2)]])
        .into_connection();

    let ids = relation::related_ids(&db, JunctionSide::Db, 4).await.unwrap();
    assert_eq!(ids, vec![1, 2]);
}

#[tokio::test]
async fn test_bind_inserts_junction_row() {
    let db = MockDatabase::new(DatabaseBackend::MySql)
        .append_exec_results([MockExecResult {
            last_insert_id: 1,
            rows_affected: 1,
        }])
        .into_connection();

    relation::bind(&db, 1, 4).await.unwrap();

    let log = format!("{:?}", db.into_transaction_log());
    assert!(log.contains("app_db_map"));
    assert!(log.contains("INSERT"));
}

#[tokio::test]
async fn test_unbind_missing_pair_is_conflict() {
    let db = MockDatabase::new(DatabaseBackend::MySql)
        .append_exec_results([MockExecResult {
            last_insert_id: 0,
            rows_affected: 0,
        }])
        .into_connection();

    let err = relation::unbind(&db, 1, 4).await.unwrap_err();
    assert!(matches!(err, MetaError::RelationshipConflict(_)));
}

#[tokio::test]
async fn test_unbind_deletes_junction_row() {
    let db = MockDatabase::new(DatabaseBackend::MySql)
        .append_exec_results([MockExecResult {
            last_insert_id: 0,
            rows_affected: 1,
        }])
        .into_connection();

    relation::unbind(&db, 1, 4).await.unwrap();

    let log = format!("{:?}", db.into_transaction_log());
    assert!(log.contains("DELETE"));
}

#[tokio::test]
async fn test_mysql_server_ids_ordered() {
    let db = MockDatabase::new(DatabaseBackend::MySql)
        .append_query_results([vec![id_row("id", 11), id_row("id", 12)]])
        .into_connection();

    let ids = relation::mysql_server_ids(&db, 5).await.unwrap();
    assert_eq!(ids, vec![11, 12]);
}

#[tokio::test]
async fn test_first_mysql_server_found() {
    let db = MockDatabase::new(DatabaseBackend::MySql)
        .append_query_results([vec![server(11, 5)]])
        .into_connection();

    let found = relation::first_mysql_server(&db, 5).await.unwrap();
    assert_eq!(found.id, 11);
    assert_eq!(found.host_ip, "10.0.0.5");
}

#[tokio::test]
async fn test_first_mysql_server_empty_cluster() {
    let db = MockDatabase::new(DatabaseBackend::MySql)
        .append_query_results([Vec::<mysql_server_info::Model>::new()])
        .into_connection();

    let err = relation::first_mysql_server(&db, 5).await.unwrap_err();
    assert!(matches!(err, MetaError::NotFound { .. }));
}
