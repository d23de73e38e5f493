//! Catalog services: client-facing orchestration over the repositories.
//!
//! A service validates fields before touching the store, delegates to one
//! repository, keeps the fetched entities in memory and projects them to
//! bytes. Cross-kind joins (cluster topology, monitor systems) live in the
//! kind-specific impls at the bottom.

use sea_orm::DatabaseConnection;
use serde_json::{Map, Value};

use fleetmeta_common::MetaError;
use fleetmeta_persistence::entity::{middleware_cluster_info, monitor_system_info};

use crate::fields;
use crate::kind::{self, MetaKind};
use crate::relation::{self, JunctionSide};
use crate::repository::Repository;

pub struct CatalogService<K: MetaKind> {
    repo: Repository<K>,
    entities: Vec<K::Model>,
}

impl<K: MetaKind> CatalogService<K> {
    pub fn new(db: DatabaseConnection) -> Self {
        Self {
            repo: Repository::new(db),
            entities: Vec::new(),
        }
    }

    pub fn repository(&self) -> &Repository<K> {
        &self.repo
    }

    /// Entities fetched by the last successful operation.
    pub fn entities(&self) -> &[K::Model] {
        &self.entities
    }

    pub async fn get_all(&mut self) -> anyhow::Result<&[K::Model]> {
        self.entities = self.repo.get_all().await?;
        Ok(&self.entities)
    }

    pub async fn get_by_id(&mut self, id: i32) -> anyhow::Result<&K::Model> {
        let entity = self.repo.get_by_id(id).await?;
        self.entities = vec![entity];
        Ok(&self.entities[0])
    }

    pub async fn get_by_natural_key(&mut self, model: &K::Model) -> anyhow::Result<&K::Model> {
        let entity = self.repo.get_by_natural_key(model).await?;
        self.entities = vec![entity];
        Ok(&self.entities[0])
    }

    /// Validate that every required field is present, build the entity from
    /// the kind's template, and create it.
    pub async fn create(&mut self, fields_map: &Map<String, Value>) -> anyhow::Result<&K::Model> {
        let missing = fields::missing_required(K::FIELDS, fields_map);
        if !missing.is_empty() {
            return Err(MetaError::FieldNotExists {
                kind: K::NAME,
                names: missing.join(", "),
            }
            .into());
        }
        let model = fields::apply_fields(K::NAME, K::FIELDS, &K::template(), fields_map)?;
        K::validate(&model)?;
        let created = self.repo.create(&model).await?;
        self.entities = vec![created];
        Ok(&self.entities[0])
    }

    /// Read-modify-write. Not atomic across the read and the write: two
    /// concurrent updates to the same id race and the last writer wins.
    pub async fn update(
        &mut self,
        id: i32,
        fields_map: &Map<String, Value>,
    ) -> anyhow::Result<&K::Model> {
        let current = self.repo.get_by_id(id).await?;
        let modified = fields::apply_fields(K::NAME, K::FIELDS, &current, fields_map)?;
        K::validate(&modified)?;
        let updated = self.repo.update(&modified).await?;
        self.entities = vec![updated];
        Ok(&self.entities[0])
    }

    pub async fn delete(&mut self, id: i32) -> anyhow::Result<()> {
        self.repo.delete(id).await?;
        Ok(())
    }

    /// Full JSON serialization of the in-memory entity list.
    pub fn marshal(&self) -> anyhow::Result<Vec<u8>> {
        Ok(serde_json::to_vec(&self.entities)?)
    }

    /// Field-subset serialization of the in-memory entity list. The output
    /// is the JSON array of the per-entity projections, so the one-entity
    /// list form equals `[` + entity projection + `]`.
    pub fn marshal_with_fields(&self, names: &[&str]) -> anyhow::Result<Vec<u8>> {
        let mut out = Vec::new();
        out.push(b'[');
        for (i, entity) in self.entities.iter().enumerate() {
            if i > 0 {
                out.push(b',');
            }
            out.extend(fields::marshal_with_fields(K::NAME, K::FIELDS, entity, names)?);
        }
        out.push(b']');
        Ok(out)
    }
}

impl CatalogService<kind::App> {
    /// Db ids bound to this app through the junction table.
    pub async fn db_id_list(&self, app_id: i32) -> anyhow::Result<Vec<i32>> {
        Ok(relation::related_ids(self.repo.db(), JunctionSide::App, app_id).await?)
    }

    pub async fn add_db(&self, app_id: i32, db_id: i32) -> anyhow::Result<()> {
        Ok(relation::bind(self.repo.db(), app_id, db_id).await?)
    }

    pub async fn delete_db(&self, app_id: i32, db_id: i32) -> anyhow::Result<()> {
        Ok(relation::unbind(self.repo.db(), app_id, db_id).await?)
    }
}

impl CatalogService<kind::Db> {
    /// App ids bound to this db; the reverse direction of the same junction.
    pub async fn app_id_list(&self, db_id: i32) -> anyhow::Result<Vec<i32>> {
        Ok(relation::related_ids(self.repo.db(), JunctionSide::Db, db_id).await?)
    }

    pub async fn add_app(&self, db_id: i32, app_id: i32) -> anyhow::Result<()> {
        Ok(relation::bind(self.repo.db(), app_id, db_id).await?)
    }

    pub async fn delete_app(&self, db_id: i32, app_id: i32) -> anyhow::Result<()> {
        Ok(relation::unbind(self.repo.db(), app_id, db_id).await?)
    }
}

impl CatalogService<kind::MysqlCluster> {
    pub async fn mysql_server_id_list(&self, cluster_id: i32) -> anyhow::Result<Vec<i32>> {
        Ok(relation::mysql_server_ids(self.repo.db(), cluster_id).await?)
    }

    /// The monitor system referenced by this cluster.
    pub async fn monitor_system(
        &self,
        cluster_id: i32,
    ) -> anyhow::Result<monitor_system_info::Model> {
        let cluster = self.repo.get_by_id(cluster_id).await?;
        let monitor = Repository::<kind::MonitorSystem>::new(self.repo.db().clone())
            .get_by_id(cluster.monitor_system_id)
            .await?;
        Ok(monitor)
    }

    /// The middleware cluster referenced by this cluster.
    pub async fn middleware_cluster(
        &self,
        cluster_id: i32,
    ) -> anyhow::Result<middleware_cluster_info::Model> {
        let cluster = self.repo.get_by_id(cluster_id).await?;
        let middleware = Repository::<kind::MiddlewareCluster>::new(self.repo.db().clone())
            .get_by_id(cluster.middleware_cluster_id)
            .await?;
        Ok(middleware)
    }
}

impl CatalogService<kind::MiddlewareCluster> {
    pub async fn middleware_server_id_list(&self, cluster_id: i32) -> anyhow::Result<Vec<i32>> {
        Ok(relation::middleware_server_ids(self.repo.db(), cluster_id).await?)
    }
}

impl CatalogService<kind::MysqlServer> {
    /// Resolving a server's monitor system always traverses
    /// MySQLServer -> MySQLCluster -> MonitorSystem.
    pub async fn monitor_system(
        &self,
        server_id: i32,
    ) -> anyhow::Result<monitor_system_info::Model> {
        let server = self.repo.get_by_id(server_id).await?;
        let cluster = Repository::<kind::MysqlCluster>::new(self.repo.db().clone())
            .get_by_id(server.cluster_id)
            .await?;
        let monitor = Repository::<kind::MonitorSystem>::new(self.repo.db().clone())
            .get_by_id(cluster.monitor_system_id)
            .await?;
        Ok(monitor)
    }
}
