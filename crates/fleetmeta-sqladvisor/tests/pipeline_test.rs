//! Advisory pipeline tests: topology resolution, backend invocation and
//! outcome persistence, all against a mocked store and a fake backend.

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use sea_orm::{DatabaseBackend, MockDatabase, MockExecResult};

use fleetmeta_common::MetaError;
use fleetmeta_persistence::entity::{db_info, mysql_cluster_info, mysql_server_info};
use fleetmeta_sqladvisor::{Advice, AdvisorBackend, AdvisorCredentials, Dsn, SqlAdvisor};

fn epoch() -> sea_orm::prelude::DateTime {
    chrono::DateTime::from_timestamp(0, 0).unwrap().naive_utc()
}

fn database(id: i32, cluster_id: i32, cluster_type: i32) -> db_info::Model {
    db_info::Model {
        id,
        db_name: "orders".to_string(),
        cluster_id,
        cluster_type,
        owner_id: None,
        env_id: 1,
        del_flag: 0,
        create_time: epoch(),
        last_update_time: epoch(),
    }
}

fn cluster(id: i32) -> mysql_cluster_info::Model {
    mysql_cluster_info::Model {
        id,
        cluster_name: "orders-cluster".to_string(),
        middleware_cluster_id: 1,
        monitor_system_id: 1,
        owner_id: None,
        env_id: 1,
        del_flag: 0,
        create_time: epoch(),
        last_update_time: epoch(),
    }
}

fn server(id: i32, cluster_id: i32) -> mysql_server_info::Model {
    mysql_server_info::Model {
        id,
        cluster_id,
        server_name: format!("mysql-{id}"),
        host_ip: "10.0.0.5".to_string(),
        port_num: 3307,
        deployment_type: 1,
        version: "8.0".to_string(),
        del_flag: 0,
        create_time: epoch(),
        last_update_time: epoch(),
    }
}

/// Records the DSNs and statements it was asked about.
struct FakeBackend {
    calls: Mutex<Vec<(Dsn, String)>>,
}

impl FakeBackend {
    fn new() -> Arc<Self> {
        Arc::new(Self {
            calls: Mutex::new(Vec::new()),
        })
    }

    fn calls(&self) -> Vec<(Dsn, String)> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl AdvisorBackend for FakeBackend {
    async fn advise(&self, dsn: &Dsn, sql: &str) -> Result<Advice, MetaError> {
        self.calls.lock().unwrap().push((dsn.clone(), sql.to_string()));
        Ok(Advice {
            payload: r#"{"advice":[]}"#.to_string(),
            message: None,
        })
    }
}

fn credentials() -> AdvisorCredentials {
    AdvisorCredentials {
        user: "tuner".to_string(),
        password: "secret".to_string(),
    }
}

#[tokio::test]
async fn test_advise_resolves_topology_and_persists() {
    // db -> cluster -> first server, then one insert of the outcome
    let db = MockDatabase::new(DatabaseBackend::MySql)
        .append_query_results([vec![database(9, 5, 1)]])
        .append_query_results([vec![cluster(5)]])
        .append_query_results([vec![server(11, 5)]])
        .append_exec_results([MockExecResult {
            last_insert_id: 1,
            rows_affected: 1,
        }])
        .into_connection();

    let backend = FakeBackend::new();
    let advisor = SqlAdvisor::new(db.clone(), backend.clone(), credentials());

    let advice = advisor
        .advise(9, "SELECT * FROM orders WHERE id = 42")
        .await
        .unwrap();
    assert_eq!(advice.payload, r#"{"advice":[]}"#);

    let calls = backend.calls();
    assert_eq!(calls.len(), 1);
    let (dsn, statement) = &calls[0];
    assert_eq!(dsn.to_string(), "tuner:secret@10.0.0.5:3307/orders");
    assert!(statement.contains("SELECT"));

    let log = format!("{:?}", db.into_transaction_log());
    assert!(log.contains("sql_advice_info"));
}

#[tokio::test]
async fn test_advise_runs_first_statement_only() {
    let db = MockDatabase::new(DatabaseBackend::MySql)
        .append_query_results([vec![database(9, 5, 1)]])
        .append_query_results([vec![cluster(5)]])
        .append_query_results([vec![server(11, 5)]])
        .append_exec_results([MockExecResult {
            last_insert_id: 1,
            rows_affected: 1,
        }])
        .into_connection();

    let backend = FakeBackend::new();
    let advisor = SqlAdvisor::new(db.clone(), backend.clone(), credentials());

    advisor
        .advise(9, "SELECT a FROM t1; DELETE FROM t2")
        .await
        .unwrap();

    let calls = backend.calls();
    let (_, statement) = &calls[0];
    assert!(statement.contains("t1"));
    assert!(!statement.contains("t2"));

    // the persisted record keeps the original text, trailing statements
    // included
    let log = format!("{:?}", db.into_transaction_log());
    assert!(log.contains("SELECT a FROM t1; DELETE FROM t2"));
}

#[tokio::test]
async fn test_advise_rejects_non_mysql_db() {
    // cluster_type 2 is a middleware cluster; resolution stops before any
    // backend call or insert
    let db = MockDatabase::new(DatabaseBackend::MySql)
        .append_query_results([vec![database(9, 5, 2)]])
        .into_connection();

    let backend = FakeBackend::new();
    let advisor = SqlAdvisor::new(db, backend.clone(), credentials());

    let err = advisor.advise(9, "SELECT 1").await.unwrap_err();
    assert!(matches!(
        err.downcast_ref::<MetaError>(),
        Some(MetaError::Advisor(_))
    ));
    assert!(backend.calls().is_empty());
}

#[tokio::test]
async fn test_advise_unknown_db_aborts() {
    let db = MockDatabase::new(DatabaseBackend::MySql)
        .append_query_results([Vec::<db_info::Model>::new()])
        .into_connection();

    let backend = FakeBackend::new();
    let advisor = SqlAdvisor::new(db, backend.clone(), credentials());

    let err = advisor.advise(404, "SELECT 1").await.unwrap_err();
    assert!(matches!(
        err.downcast_ref::<MetaError>(),
        Some(MetaError::NotFound { .. })
    ));
    assert!(backend.calls().is_empty());
}

#[tokio::test]
async fn test_advise_invalid_sql_aborts_before_store() {
    let db = MockDatabase::new(DatabaseBackend::MySql).into_connection();

    let backend = FakeBackend::new();
    let advisor = SqlAdvisor::new(db, backend.clone(), credentials());

    let err = advisor.advise(9, "not sql at all").await.unwrap_err();
    assert!(matches!(
        err.downcast_ref::<MetaError>(),
        Some(MetaError::Advisor(_))
    ));
    assert!(backend.calls().is_empty());
}

#[cfg(unix)]
mod command_backend {
    use std::io::Write;
    use std::os::unix::fs::PermissionsExt;

    use fleetmeta_sqladvisor::{AdvisorBackend, CommandBackend, Dsn};

    fn dsn() -> Dsn {
        Dsn {
            user: "tuner".to_string(),
            password: "secret".to_string(),
            host: "127.0.0.1".to_string(),
            port: 3306,
            db_name: "orders".to_string(),
        }
    }

    fn script(dir: &tempfile::TempDir, body: &str) -> std::path::PathBuf {
        let path = dir.path().join("advisor.sh");
        let mut file = std::fs::File::create(&path).unwrap();
        writeln!(file, "#!/bin/sh").unwrap();
        writeln!(file, "{body}").unwrap();
        let mut perm = file.metadata().unwrap().permissions();
        perm.set_mode(0o755);
        std::fs::set_permissions(&path, perm).unwrap();
        path
    }

    #[tokio::test]
    async fn test_command_backend_parses_stdout() {
        let dir = tempfile::tempdir().unwrap();
        let path = script(&dir, r#"echo '{"advice":["add index"]}'"#);

        let backend = CommandBackend::new(path, dir.path().join("advisor.cnf"));
        let advice = backend.advise(&dsn(), "SELECT 1").await.unwrap();
        assert_eq!(advice.payload, r#"{"advice":["add index"]}"#);
        assert_eq!(advice.message, None);
    }

    #[tokio::test]
    async fn test_command_backend_rejects_failure() {
        let dir = tempfile::tempdir().unwrap();
        let path = script(&dir, "echo 'boom' >&2; exit 3");

        let backend = CommandBackend::new(path, dir.path().join("advisor.cnf"));
        let err = backend.advise(&dsn(), "SELECT 1").await.unwrap_err();
        assert!(err.to_string().contains("boom"));
    }

    #[tokio::test]
    async fn test_command_backend_rejects_non_json_output() {
        let dir = tempfile::tempdir().unwrap();
        let path = script(&dir, "echo 'plain text advice'");

        let backend = CommandBackend::new(path, dir.path().join("advisor.cnf"));
        let err = backend.advise(&dsn(), "SELECT 1").await.unwrap_err();
        assert!(err.to_string().contains("unparsable"));
    }
}
