//! Tracing initialization.
//!
//! Console logging always; an additional daily-rolling file when a log
//! directory is configured. The returned guard must be held for the life
//! of the process so buffered file output is flushed.

use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Registry, fmt};

use crate::config::Configuration;

pub fn init_subscriber(configuration: &Configuration) -> Option<WorkerGuard> {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&configuration.log_level));

    match &configuration.log_dir {
        Some(dir) => {
            let appender = rolling::daily(dir, "fleetmeta.log");
            let (writer, guard) = tracing_appender::non_blocking(appender);
            Registry::default()
                .with(env_filter)
                .with(fmt::layer())
                .with(fmt::layer().with_writer(writer).with_ansi(false))
                .init();
            Some(guard)
        }
        None => {
            Registry::default()
                .with(env_filter)
                .with(fmt::layer())
                .init();
            None
        }
    }
}
