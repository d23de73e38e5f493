//! Catalog service tests against a mocked store.
//!
//! MockDatabase serves appended result sets in order, so each test spells
//! out the statements it expects the service to issue.

use std::time::Duration;

use sea_orm::{DatabaseBackend, MockDatabase, MockExecResult};
use serde_json::{Map, Value, json};

use fleetmeta_common::MetaError;
use fleetmeta_metadata::{CatalogService, Repository, kind};
use fleetmeta_persistence::entity::{app_info, env_info};

fn epoch() -> sea_orm::prelude::DateTime {
    chrono::DateTime::from_timestamp(0, 0).unwrap().naive_utc()
}

fn app(id: i32, name: &str) -> app_info::Model {
    app_info::Model {
        id,
        app_name: name.to_string(),
        level: 1,
        owner_id: None,
        del_flag: 0,
        create_time: epoch(),
        last_update_time: epoch(),
    }
}

fn env(id: i32, name: &str) -> env_info::Model {
    env_info::Model {
        id,
        env_name: name.to_string(),
        del_flag: 0,
        create_time: epoch(),
        last_update_time: epoch(),
    }
}

fn body(pairs: &[(&str, Value)]) -> Map<String, Value> {
    pairs
        .iter()
        .map(|(name, value)| (name.to_string(), value.clone()))
        .collect()
}

#[tokio::test]
async fn test_get_by_id_found() {
    let db = MockDatabase::new(DatabaseBackend::MySql)
        .append_query_results([vec![app(3, "billing")]])
        .into_connection();

    let mut service = CatalogService::<kind::App>::new(db);
    let entity = service.get_by_id(3).await.unwrap();
    assert_eq!(entity.app_name, "billing");
    assert_eq!(service.entities().len(), 1);
}

#[tokio::test]
async fn test_get_by_id_not_found() {
    let db = MockDatabase::new(DatabaseBackend::MySql)
        .append_query_results([Vec::<app_info::Model>::new()])
        .into_connection();

    let mut service = CatalogService::<kind::App>::new(db);
    let err = service.get_by_id(99).await.unwrap_err();
    assert!(matches!(
        err.downcast_ref::<MetaError>(),
        Some(MetaError::NotFound { .. })
    ));
}

#[tokio::test]
async fn test_get_by_id_duplicate() {
    let db = MockDatabase::new(DatabaseBackend::MySql)
        .append_query_results([vec![app(3, "billing"), app(3, "billing-copy")]])
        .into_connection();

    let mut service = CatalogService::<kind::App>::new(db);
    let err = service.get_by_id(3).await.unwrap_err();
    assert!(matches!(
        err.downcast_ref::<MetaError>(),
        Some(MetaError::DuplicateKey { .. })
    ));
}

#[tokio::test]
async fn test_get_all_returns_active_rows() {
    let db = MockDatabase::new(DatabaseBackend::MySql)
        .append_query_results([vec![env(1, "dev"), env(2, "prod")]])
        .into_connection();

    let mut service = CatalogService::<kind::Env>::new(db);
    let entities = service.get_all().await.unwrap();
    assert_eq!(entities.len(), 2);
    assert_eq!(entities[0].env_name, "dev");
}

#[tokio::test]
async fn test_create_returns_store_assigned_row() {
    // insert, then re-read by natural key with the id the store assigned
    let db = MockDatabase::new(DatabaseBackend::MySql)
        .append_exec_results([MockExecResult {
            last_insert_id: 7,
            rows_affected: 1,
        }])
        .append_query_results([vec![app(7, "billing")]])
        .into_connection();

    let mut service = CatalogService::<kind::App>::new(db);
    let fields = body(&[("app_name", json!("billing")), ("level", json!(1))]);
    let entity = service.create(&fields).await.unwrap();
    assert_eq!(entity.id, 7);
    assert_eq!(entity.app_name, "billing");
}

#[tokio::test]
async fn test_create_missing_required_field() {
    // level is required; the store must never be touched
    let db = MockDatabase::new(DatabaseBackend::MySql).into_connection();

    let mut service = CatalogService::<kind::App>::new(db);
    let fields = body(&[("app_name", json!("billing"))]);
    let err = service.create(&fields).await.unwrap_err();
    assert!(matches!(
        err.downcast_ref::<MetaError>(),
        Some(MetaError::FieldNotExists { .. })
    ));
}

#[tokio::test]
async fn test_create_rejects_unknown_field() {
    let db = MockDatabase::new(DatabaseBackend::MySql).into_connection();

    let mut service = CatalogService::<kind::App>::new(db);
    let fields = body(&[
        ("app_name", json!("billing")),
        ("level", json!(1)),
        ("nickname", json!("bill")),
    ]);
    let err = service.create(&fields).await.unwrap_err();
    assert!(matches!(
        err.downcast_ref::<MetaError>(),
        Some(MetaError::FieldNotExists { .. })
    ));
}

#[tokio::test]
async fn test_create_rejects_type_mismatch() {
    let db = MockDatabase::new(DatabaseBackend::MySql).into_connection();

    let mut service = CatalogService::<kind::App>::new(db);
    let fields = body(&[("app_name", json!("billing")), ("level", json!("high"))]);
    let err = service.create(&fields).await.unwrap_err();
    assert!(matches!(
        err.downcast_ref::<MetaError>(),
        Some(MetaError::FieldTypeMismatch { .. })
    ));
}

#[tokio::test]
async fn test_create_rejects_malformed_name() {
    let db = MockDatabase::new(DatabaseBackend::MySql).into_connection();

    let mut service = CatalogService::<kind::App>::new(db);
    let fields = body(&[("app_name", json!("not a name")), ("level", json!(1))]);
    let err = service.create(&fields).await.unwrap_err();
    assert!(matches!(
        err.downcast_ref::<MetaError>(),
        Some(MetaError::FieldInvalid { name: "app_name", .. })
    ));
}

#[tokio::test]
async fn test_update_read_modify_write() {
    // read current row, rewrite settable columns, re-read
    let db = MockDatabase::new(DatabaseBackend::MySql)
        .append_query_results([vec![app(3, "billing")]])
        .append_exec_results([MockExecResult {
            last_insert_id: 0,
            rows_affected: 1,
        }])
        .append_query_results([vec![app_info::Model {
            level: 2,
            ..app(3, "billing")
        }]])
        .into_connection();

    let mut service = CatalogService::<kind::App>::new(db);
    let fields = body(&[("level", json!(2))]);
    let entity = service.update(3, &fields).await.unwrap();
    assert_eq!(entity.level, 2);
}

#[tokio::test]
async fn test_update_rejects_unsettable_field() {
    let db = MockDatabase::new(DatabaseBackend::MySql)
        .append_query_results([vec![app(3, "billing")]])
        .into_connection();

    let mut service = CatalogService::<kind::App>::new(db);
    let fields = body(&[("id", json!(44))]);
    let err = service.update(3, &fields).await.unwrap_err();
    assert!(matches!(
        err.downcast_ref::<MetaError>(),
        Some(MetaError::FieldNotSettable { .. })
    ));
}

#[tokio::test]
async fn test_soft_delete_issues_update() {
    let db = MockDatabase::new(DatabaseBackend::MySql)
        .append_exec_results([MockExecResult {
            last_insert_id: 0,
            rows_affected: 1,
        }])
        .into_connection();

    let mut service = CatalogService::<kind::Env>::new(db.clone());
    service.delete(2).await.unwrap();

    let log = db.into_transaction_log();
    let statement = format!("{:?}", log[0]);
    assert!(statement.contains("UPDATE"));
    assert!(!statement.contains("DELETE"));
}

#[tokio::test]
async fn test_hard_delete_purges_junction_in_transaction() {
    // one exec for the junction purge, one for the entity row
    let db = MockDatabase::new(DatabaseBackend::MySql)
        .append_exec_results([
            MockExecResult {
                last_insert_id: 0,
                rows_affected: 2,
            },
            MockExecResult {
                last_insert_id: 0,
                rows_affected: 1,
            },
        ])
        .into_connection();

    let mut service = CatalogService::<kind::App>::new(db.clone());
    service.delete(3).await.unwrap();

    let log = format!("{:?}", db.into_transaction_log());
    assert!(log.contains("app_db_map"));
    assert!(log.contains("app_info"));
}

#[tokio::test]
async fn test_hard_delete_honors_deadline() {
    // the deadline wraps the whole cascade transaction, not just the
    // per-statement reads
    let db = MockDatabase::new(DatabaseBackend::MySql)
        .append_exec_results([
            MockExecResult {
                last_insert_id: 0,
                rows_affected: 1,
            },
            MockExecResult {
                last_insert_id: 0,
                rows_affected: 1,
            },
        ])
        .into_connection();

    let repo = Repository::<kind::App>::new(db.clone()).with_deadline(Duration::from_secs(5));
    repo.delete(3).await.unwrap();

    let log = format!("{:?}", db.into_transaction_log());
    assert!(log.contains("app_db_map"));
    assert!(log.contains("app_info"));
}

#[tokio::test]
async fn test_marshal_with_fields_projects_list() {
    let db = MockDatabase::new(DatabaseBackend::MySql)
        .append_query_results([vec![app(1, "billing"), app(2, "search")]])
        .into_connection();

    let mut service = CatalogService::<kind::App>::new(db);
    service.get_all().await.unwrap();

    let bytes = service.marshal_with_fields(&["id", "app_name"]).unwrap();
    let parsed: Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(
        parsed,
        json!([
            { "id": 1, "app_name": "billing" },
            { "id": 2, "app_name": "search" }
        ])
    );
}
