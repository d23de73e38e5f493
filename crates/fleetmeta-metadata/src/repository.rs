//! Generic data access for catalog kinds.
//!
//! One repository serves every kind through its [`MetaKind`] descriptor.
//! All reads filter `del_flag = 0` and order by id for determinism; by-id
//! and by-natural-key lookups distinguish zero, one and many rows. The
//! connection handle is passed in at construction, never taken from global
//! state.

use std::future::Future;
use std::marker::PhantomData;
use std::time::Duration;

use sea_orm::sea_query::Expr;
use sea_orm::{
    ColumnTrait, DatabaseConnection, DatabaseTransaction, DbErr, EntityTrait, QueryFilter,
    QueryOrder, TransactionTrait,
};

use fleetmeta_common::MetaError;

use crate::kind::{DeletionPolicy, MetaKind};

pub struct Repository<K: MetaKind> {
    db: DatabaseConnection,
    deadline: Option<Duration>,
    _kind: PhantomData<K>,
}

impl<K: MetaKind> Repository<K> {
    pub fn new(db: DatabaseConnection) -> Self {
        Self {
            db,
            deadline: None,
            _kind: PhantomData,
        }
    }

    /// Apply a per-statement deadline. The default is no timeout, matching
    /// the store's behavior; the deadline exists so the contract stays
    /// testable.
    pub fn with_deadline(mut self, deadline: Duration) -> Self {
        self.deadline = Some(deadline);
        self
    }

    pub fn db(&self) -> &DatabaseConnection {
        &self.db
    }

    async fn run<T>(&self, fut: impl Future<Output = Result<T, DbErr>>) -> Result<T, MetaError> {
        let outcome = match self.deadline {
            Some(limit) => tokio::time::timeout(limit, fut)
                .await
                .map_err(|_| DbErr::Custom(format!("{} statement deadline exceeded", K::NAME)))?,
            None => fut.await,
        };
        Ok(outcome?)
    }

    fn exactly_one(
        rows: Vec<K::Model>,
        key: impl FnOnce() -> String,
    ) -> Result<K::Model, MetaError> {
        let mut rows = rows;
        match rows.len() {
            0 => Err(MetaError::not_found(K::NAME, key())),
            1 => Ok(rows.remove(0)),
            _ => Err(MetaError::duplicate_key(K::NAME, key())),
        }
    }

    /// All active rows, ordered by id.
    pub async fn get_all(&self) -> Result<Vec<K::Model>, MetaError> {
        self.run(
            K::Entity::find()
                .filter(K::del_flag_column().eq(0))
                .order_by_asc(K::id_column())
                .all(&self.db),
        )
        .await
    }

    pub async fn get_by_id(&self, id: i32) -> Result<K::Model, MetaError> {
        let rows = self
            .run(
                K::Entity::find()
                    .filter(K::id_column().eq(id))
                    .filter(K::del_flag_column().eq(0))
                    .all(&self.db),
            )
            .await?;
        Self::exactly_one(rows, || format!("id {id}"))
    }

    pub async fn get_by_natural_key(&self, model: &K::Model) -> Result<K::Model, MetaError> {
        let rows = self
            .run(
                K::Entity::find()
                    .filter(K::natural_key(model))
                    .filter(K::del_flag_column().eq(0))
                    .order_by_asc(K::id_column())
                    .all(&self.db),
            )
            .await?;
        Self::exactly_one(rows, || K::natural_key_desc(model))
    }

    /// Two-phase create: insert, then re-read by the natural key used at
    /// insert time, because the store assigns the identity and timestamps.
    ///
    /// Known consistency gap: if the natural key is not unique-enforced at
    /// the store, two concurrent creates with the same key can both insert;
    /// the re-read then surfaces DuplicateKey instead of picking a winner.
    pub async fn create(&self, model: &K::Model) -> Result<K::Model, MetaError> {
        self.run(K::Entity::insert(K::model_for_insert(model)).exec_without_returning(&self.db))
            .await?;
        self.get_by_natural_key(model).await
    }

    /// Full-row rewrite of the settable columns by id, then re-read.
    pub async fn update(&self, model: &K::Model) -> Result<K::Model, MetaError> {
        let id = K::id_of(model);
        self.run(
            K::Entity::update_many()
                .set(K::model_for_update(model))
                .filter(K::id_column().eq(id))
                .exec(&self.db),
        )
        .await?;
        self.get_by_id(id).await
    }

    /// Retire a row per the kind's deletion policy.
    pub async fn delete(&self, id: i32) -> Result<(), MetaError> {
        match K::DELETION {
            DeletionPolicy::SoftDelete => {
                self.run(
                    K::Entity::update_many()
                        .col_expr(K::del_flag_column(), Expr::value(1))
                        .filter(K::id_column().eq(id))
                        .exec(&self.db),
                )
                .await?;
                Ok(())
            }
            DeletionPolicy::HardDeleteWithCascade => self.hard_delete(id).await,
        }
    }

    /// Entity row plus junction rows in one transaction; either both go or
    /// neither does, and the handle is released on every exit path. The
    /// instance deadline covers the whole transaction.
    async fn hard_delete(&self, id: i32) -> Result<(), MetaError> {
        let cascade = async {
            let txn = self
                .db
                .begin()
                .await
                .map_err(|err| MetaError::TransactionFailure(err.to_string()))?;

            if let Err(err) = Self::cascade_statements(&txn, id).await {
                if let Err(rollback_err) = txn.rollback().await {
                    // the statement error is the primary outcome; the cleanup
                    // failure is logged, not propagated
                    tracing::error!(
                        kind = K::NAME,
                        id,
                        error = %rollback_err,
                        "rollback failed after cascade delete error"
                    );
                }
                return Err(err.into());
            }

            txn.commit()
                .await
                .map_err(|err| MetaError::TransactionFailure(err.to_string()))?;
            Ok(())
        };

        match self.deadline {
            Some(limit) => tokio::time::timeout(limit, cascade)
                .await
                .map_err(|_| {
                    MetaError::TransactionFailure(format!(
                        "{} cascade delete deadline exceeded",
                        K::NAME
                    ))
                })?,
            None => cascade.await,
        }
    }

    async fn cascade_statements(txn: &DatabaseTransaction, id: i32) -> Result<(), DbErr> {
        K::purge_relations(txn, id).await?;
        K::Entity::delete_many()
            .filter(K::id_column().eq(id))
            .exec(txn)
            .await?;
        Ok(())
    }
}
