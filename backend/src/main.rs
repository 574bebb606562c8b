//! Service entry-point: loads settings, prepares storage and serves the
//! student, course and enrolment endpoints.

mod server;

use actix_web::web;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt};

use aula::inbound::http::health::HealthState;
use aula::outbound::persistence::{DbPool, PoolConfig, run_pending_migrations};
use aula::settings::AppSettings;
use ortho_config::OrthoConfig;
use server::{ServerConfig, create_server};

async fn prepare_database(settings: &AppSettings, url: &str) -> std::io::Result<DbPool> {
    if settings.skip_migrations {
        info!("skipping database migrations");
    } else {
        let migration_url = url.to_owned();
        tokio::task::spawn_blocking(move || run_pending_migrations(&migration_url))
            .await
            .map_err(|e| std::io::Error::other(format!("migration task failed: {e}")))?
            .map_err(|e| std::io::Error::other(e.to_string()))?;
    }

    let config = PoolConfig::new(url).with_max_size(settings.pool_max_size());
    DbPool::new(config)
        .await
        .map_err(|e| std::io::Error::other(format!("database pool: {e}")))
}

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

    let settings = AppSettings::load_from_iter(std::env::args_os())
        .map_err(|e| std::io::Error::other(format!("configuration: {e}")))?;
    let bind_addr = settings
        .bind_addr()
        .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidInput, e))?;

    let mut config = ServerConfig::new(bind_addr);
    if let Some(url) = settings.database_url.as_deref() {
        let pool = prepare_database(&settings, url).await?;
        config = config.with_db_pool(pool);
    }

    let health_state = web::Data::new(HealthState::new());
    info!(%bind_addr, "starting server");
    create_server(health_state, config)?.await
}
