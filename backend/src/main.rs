//! Cafe directory entry-point: loads settings, prepares the database and
//! serves the REST API.

mod server;

use std::ffi::OsString;

use actix_web::web;
use ortho_config::OrthoConfig;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt};

use cafe_directory::config::CafesSettings;
use cafe_directory::inbound::http::health::HealthState;
use cafe_directory::outbound::persistence::{DbPool, PoolConfig, run_pending_migrations};

use server::{ServerConfig, create_server};

/// Application bootstrap.
#[actix_web::main]
async fn main() -> std::io::Result<()> {
    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }

    let settings = CafesSettings::load_from_iter(std::env::args_os().collect::<Vec<OsString>>())
        .map_err(|e| std::io::Error::other(format!("failed to load configuration: {e}")))?;
    let bind_addr = settings
        .bind_addr()
        .map_err(|e| std::io::Error::other(format!("invalid bind address: {e}")))?;
    let database_url = settings.database_path().to_string_lossy().into_owned();

    let migration_url = database_url.clone();
    let applied = web::block(move || run_pending_migrations(&migration_url))
        .await
        .map_err(std::io::Error::other)?
        .map_err(std::io::Error::other)?;
    info!(database = %database_url, applied, "database schema is current");

    let pool = DbPool::new(
        PoolConfig::new(database_url).with_max_size(settings.pool_max_size()),
    )
    .await
    .map_err(std::io::Error::other)?;

    let api_key = settings.api_key();
    match &api_key {
        Some(key) => info!(fingerprint = %key.fingerprint(), "api key configured"),
        None => warn!("no api key configured; cafe deletion is disabled"),
    }

    let health_state = web::Data::new(HealthState::new());
    let config = ServerConfig::new(bind_addr, pool).with_api_key(api_key);
    let server = create_server(health_state, config)?;
    info!(%bind_addr, "cafe directory listening");
    server.await
}
