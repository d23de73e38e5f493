//! fleetmeta-metadata - Generic entity/repository/service core
//!
//! This crate provides:
//! - Per-kind field schemas and typed named-field get/set (`fields`)
//! - The `MetaKind` descriptor trait and the nine kind descriptors (`kind`)
//! - A generic repository over a `SeaORM` connection (`repository`)
//! - The App<->Db junction and cluster hierarchy resolver (`relation`)
//! - Catalog services orchestrating repository calls (`service`)

pub mod fields;
pub mod kind;
pub mod relation;
pub mod repository;
pub mod service;

pub use fields::{FieldDef, FieldKind};
pub use kind::{DeletionPolicy, MetaKind};
pub use relation::JunctionSide;
pub use repository::Repository;
pub use service::CatalogService;
