use anyhow::Context;
use std::sync::Arc;

use time_logs::modules::time_logs::adapters::outbound::time_logs_mysql::MySqlTimeLogs;
use time_logs::modules::time_logs::core::clock::{ZonedClock, resolve_zone};
use time_logs::shared::infrastructure::config::{AppConfig, LOG_FILE};
use time_logs::shared::infrastructure::logging::init_logging;
use time_logs::shell::server::{run_until_shutdown, shutdown_signal};
use time_logs::shell::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let _log_guard = init_logging(LOG_FILE)?;

    if let Err(error) = run().await {
        tracing::error!(error = %format!("{error:#}"), "fatal error");
        return Err(error);
    }
    Ok(())
}

async fn run() -> anyhow::Result<()> {
    let config = AppConfig::from_env()
        .context("Database credentials are not set in environment variables")?;
    tracing::info!(db = ?config.db, time_zone = %config.time_zone, "configuration loaded");

    let zone = resolve_zone(&config.time_zone)?;
    let gateway = MySqlTimeLogs::connect(&config.db, zone)
        .await
        .context("Error connecting to database")?;

    let state = AppState::new(Arc::new(ZonedClock::new(zone)), Arc::new(gateway));
    run_until_shutdown(config.listen_addr, state, shutdown_signal())
        .await
        .context("Server failed")
}
