//! fleetmeta-server - HTTP surface for the fleet metadata catalog
//!
//! Wires configuration, logging, the database pool and the SQL advisor
//! pipeline into an actix-web application.

pub mod api;
pub mod config;
pub mod logging;
pub mod state;

pub use config::Configuration;
pub use state::AppState;
