//! Application state shared across all handlers.

use std::sync::Arc;

use sea_orm::DatabaseConnection;

use fleetmeta_sqladvisor::SqlAdvisor;

use crate::config::Configuration;

/// Application state shared across all handlers.
///
/// The connection handle is constructed by the bootstrap and passed in;
/// nothing in the crates below reaches for global state.
#[derive(Clone)]
pub struct AppState {
    pub configuration: Configuration,
    pub db: DatabaseConnection,
    pub advisor: Arc<SqlAdvisor>,
}

impl std::fmt::Debug for AppState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppState")
            .field("configuration", &self.configuration)
            .field("db", &"<DatabaseConnection>")
            .field("advisor", &"<SqlAdvisor>")
            .finish()
    }
}
