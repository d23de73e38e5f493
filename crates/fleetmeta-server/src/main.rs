use std::sync::Arc;

use actix_web::{App, HttpServer, web};
use sea_orm::{ConnectOptions, Database};
use tracing::info;

use fleetmeta_server::api;
use fleetmeta_server::config::Configuration;
use fleetmeta_server::logging;
use fleetmeta_server::state::AppState;
use fleetmeta_sqladvisor::{AdvisorCredentials, CommandBackend, SqlAdvisor};

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    let configuration = Configuration::from_env();
    let _log_guard = logging::init_subscriber(&configuration);

    let mut options = ConnectOptions::new(configuration.db_url.clone());
    options
        .max_connections(configuration.max_connections)
        .min_connections(configuration.min_connections);
    let db = Database::connect(options).await?;

    let backend = Arc::new(CommandBackend::new(
        configuration.advisor_command.clone(),
        configuration.advisor_config.clone(),
    ));
    let credentials = AdvisorCredentials {
        user: configuration.advisor_user.clone(),
        password: configuration.advisor_password.clone(),
    };
    let advisor = Arc::new(SqlAdvisor::new(db.clone(), backend, credentials));

    let state = AppState {
        configuration: configuration.clone(),
        db,
        advisor,
    };

    info!(
        address = %configuration.http_address,
        port = configuration.http_port,
        "starting fleetmeta server"
    );

    HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(state.clone()))
            .configure(api::routes)
    })
    .bind((configuration.http_address.as_str(), configuration.http_port))?
    .run()
    .await?;

    Ok(())
}
