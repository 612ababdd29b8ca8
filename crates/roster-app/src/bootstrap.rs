//! Application boot sequence.

use roster_api::{ApiServer, SharedUserStore, SqliteUserStore};
use tracing::info;

use crate::config::AppConfig;
use crate::error::{AppError, AppResult};

/// Entry point for the Roster application boot sequence.
///
/// # Errors
///
/// Returns an error if configuration is invalid, logging cannot be installed,
/// the user database cannot be opened, or the API server fails to bind or
/// serve.
pub async fn run_app() -> AppResult<()> {
    let config = AppConfig::from_env()?;
    run_app_with(config).await
}

/// Boot sequence that relies entirely on injected configuration.
pub(crate) async fn run_app_with(config: AppConfig) -> AppResult<()> {
    roster_telemetry::init_logging(&config.logging())
        .map_err(|err| AppError::telemetry("telemetry.init", err))?;

    info!(
        build_sha = roster_telemetry::build_sha(),
        "Roster application bootstrap starting"
    );

    let users = open_user_store(&config).await?;
    let api = ApiServer::new(users, config.static_dir.clone());
    let addr = config.socket_addr();
    info!(addr = %addr, "Launching API listener");

    api.serve(addr)
        .await
        .map_err(|err| AppError::api_server("api_server.serve", err))?;
    info!("API server shutdown complete");
    Ok(())
}

/// Open the SQLite user store named by the configuration.
pub(crate) async fn open_user_store(config: &AppConfig) -> AppResult<SharedUserStore> {
    let store = SqliteUserStore::connect(&config.database_url)
        .await
        .map_err(|err| AppError::storage("storage.open", err))?;
    info!(database_url = %config.database_url, "user store ready");
    Ok(store.shared())
}
