//! fleetmeta-sqladvisor - SQL fingerprinting and advisory pipeline
//!
//! This crate provides:
//! - Literal-insensitive fingerprints and stable SQL-IDs (`fingerprint`)
//! - The advisor backend capability with a shell-out implementation
//!   (`backend`)
//! - The resolution pipeline persisting advice outcomes (`advisor`)

pub mod advisor;
pub mod backend;
pub mod fingerprint;

pub use advisor::{AdvisorCredentials, SqlAdvisor};
pub use backend::{Advice, AdvisorBackend, CommandBackend, Dsn};
pub use fingerprint::{first_statement, fingerprint, sql_id};
