//! fleetmeta-persistence - Database entities for the fleetmeta catalog
//!
//! This crate provides the `SeaORM` entity definitions for the metadata
//! tables, the App<->Db junction table and the SQL-advice result table.

pub mod entity;

// Re-export sea-orm for convenience
pub use sea_orm;

// Re-export entity prelude
pub use entity::prelude::*;
