//! The advisory pipeline: SQL text in, persisted advice out.
//!
//! Resolution walks the catalog: db id -> MySQL cluster -> first active
//! server of that cluster -> DSN. Any missing link aborts with NotFound and
//! nothing is persisted; backend failures abort with an Advisor error;
//! persistence failures are surfaced, not retried.

use std::sync::Arc;

use sea_orm::{DatabaseConnection, EntityTrait, Set};

use fleetmeta_common::MetaError;
use fleetmeta_metadata::kind::{self, CLUSTER_TYPE_MYSQL};
use fleetmeta_metadata::relation;
use fleetmeta_metadata::repository::Repository;
use fleetmeta_persistence::entity::sql_advice_info;

use crate::backend::{Advice, AdvisorBackend, Dsn};
use crate::fingerprint;

/// Credentials used for every online DSN; process-wide configuration.
#[derive(Clone, Debug)]
pub struct AdvisorCredentials {
    pub user: String,
    pub password: String,
}

pub struct SqlAdvisor {
    db: DatabaseConnection,
    backend: Arc<dyn AdvisorBackend>,
    credentials: AdvisorCredentials,
}

impl SqlAdvisor {
    pub fn new(
        db: DatabaseConnection,
        backend: Arc<dyn AdvisorBackend>,
        credentials: AdvisorCredentials,
    ) -> Self {
        Self {
            db,
            backend,
            credentials,
        }
    }

    /// Advise on the first statement of `sql` against the physical target
    /// behind `db_id`, persisting the outcome. The persisted record carries
    /// the original input text, not the analyzed first statement.
    pub async fn advise(&self, db_id: i32, sql: &str) -> anyhow::Result<Advice> {
        let statement = fingerprint::first_statement(sql)?;

        let database = Repository::<kind::Db>::new(self.db.clone())
            .get_by_id(db_id)
            .await?;
        if database.cluster_type != CLUSTER_TYPE_MYSQL {
            return Err(MetaError::Advisor(format!(
                "db {db_id} does not belong to a mysql cluster"
            ))
            .into());
        }
        let cluster = Repository::<kind::MysqlCluster>::new(self.db.clone())
            .get_by_id(database.cluster_id)
            .await?;
        let server = relation::first_mysql_server(&self.db, cluster.id).await?;

        let dsn = Dsn {
            user: self.credentials.user.clone(),
            password: self.credentials.password.clone(),
            host: server.host_ip,
            port: server.port_num,
            db_name: database.db_name,
        };

        tracing::info!(db_id, host = %dsn.host, port = dsn.port, "running sql advisor");
        let advice = self.backend.advise(&dsn, &statement).await?;

        self.save(db_id, sql, &advice).await?;
        Ok(advice)
    }

    async fn save(&self, db_id: i32, sql_text: &str, advice: &Advice) -> Result<(), MetaError> {
        let row = sql_advice_info::ActiveModel {
            db_id: Set(db_id),
            sql_text: Set(sql_text.to_string()),
            advice: Set(advice.payload.clone()),
            message: Set(advice.message.clone()),
            ..Default::default()
        };
        sql_advice_info::Entity::insert(row)
            .exec_without_returning(&self.db)
            .await?;
        Ok(())
    }
}
