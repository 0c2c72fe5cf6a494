//! Feeding log entry-point: loads settings, prepares storage and serves the
//! HTML pages.

mod server;

use actix_web::web;
#[cfg(feature = "metrics")]
use actix_web_prom::{PrometheusMetrics, PrometheusMetricsBuilder};
use color_eyre::eyre::{Result, WrapErr};
use ortho_config::OrthoConfig;
use tracing::warn;
use tracing_subscriber::{EnvFilter, fmt};

use feeding_log::inbound::http::health::HealthState;
use feeding_log::outbound::persistence::{DbPool, PoolConfig, run_migrations};
use feeding_log::settings::AppSettings;
use server::{ServerConfig, create_server, fail_liveness_on};

/// Application bootstrap.
#[actix_web::main]
async fn main() -> Result<()> {
    color_eyre::install()?;
    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }

    let settings = AppSettings::load().wrap_err("failed to load settings")?;
    let mut config = ServerConfig::new(settings.bind_addr());

    if let Some(database_url) = settings.database_url() {
        run_migrations(database_url.to_owned())
            .await
            .wrap_err("failed to migrate the database")?;
        let pool = DbPool::new(
            PoolConfig::new(database_url).with_max_size(settings.pool_max_size()),
        )
        .await
        .wrap_err("failed to build the database pool")?;
        config = config.with_db_pool(pool);
    }

    #[cfg(feature = "metrics")]
    {
        config = config.with_metrics(make_metrics());
    }

    let health_state = web::Data::new(HealthState::new());
    actix_web::rt::spawn(fail_liveness_on(
        tokio::signal::ctrl_c(),
        health_state.clone(),
    ));
    let server = create_server(health_state, config)?;
    server.await?;
    Ok(())
}

#[cfg(feature = "metrics")]
fn make_metrics() -> Option<PrometheusMetrics> {
    match PrometheusMetricsBuilder::new("feeding_log")
        .endpoint("/metrics")
        .build()
    {
        Ok(metrics) => Some(metrics),
        Err(e) => {
            warn!(error = %e, "metrics disabled: Prometheus registry setup failed");
            None
        }
    }
}
