//! # sensortabd — sensors tab daemon
//!
//! Composition root that wires the adapters together and serves the
//! sensors tab.
//!
//! ## Responsibilities
//! - Load configuration (`sensortab.toml`, env vars)
//! - Initialise `tracing` from the configured filter
//! - Construct the HTTP sensor source and the HTML table widget
//! - Load metadata, hide empty rows and start the poller
//! - Build the axum router and serve it until SIGINT
//!
//! ## Dependency rule
//! This is the **only** crate that depends on all other crates.
//! It is the wiring layer — no domain logic belongs here.

mod config;

use std::sync::Arc;

use anyhow::Context;
use tracing_subscriber::EnvFilter;

use sensortab_adapter_http_axum::router;
use sensortab_adapter_http_axum::state::AppState;
use sensortab_adapter_http_reqwest::HttpSensorSource;
use sensortab_adapter_table_html::HtmlSensorTable;
use sensortab_app::poller;
use sensortab_app::services::sensor_tab::SensorTabService;

use crate::config::Config;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::load().context("unable to load configuration")?;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_new(&config.logging.filter).context("invalid logging filter")?,
        )
        .init();

    // Sensors tab
    let source = HttpSensorSource::new(&config.entity).context("unable to build sensor source")?;
    let sensor_tab = Arc::new(SensorTabService::new(source, HtmlSensorTable::new()));
    sensor_tab.initialize().await;

    let poll_interval = config.poll_interval();
    let mut poller = poller::spawn(Arc::clone(&sensor_tab), poll_interval);

    // HTTP
    let app = router::build(AppState::new(sensor_tab, poll_interval));

    let bind_addr = config.bind_addr();
    let listener = tokio::net::TcpListener::bind(&bind_addr)
        .await
        .with_context(|| format!("unable to bind {bind_addr}"))?;
    tracing::info!(%bind_addr, "sensortabd listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    poller.stop();
    tracing::info!("sensortabd stopped");
    Ok(())
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => tracing::info!("shutdown signal received"),
        Err(err) => {
            tracing::error!(error = %err, "unable to listen for shutdown signal");
            std::future::pending::<()>().await;
        }
    }
}
