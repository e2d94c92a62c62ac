use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;

use launch_dash::api;
use launch_dash::config::Config;
use launch_dash::data::loader;
use launch_dash::state::AppState;

#[tokio::main]
async fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = Config::parse();
    if let Err(e) = run(config).await {
        log::error!("{e:#}");
        std::process::exit(1);
    }
}

async fn run(config: Config) -> Result<()> {
    let source = config.source();
    log::info!("Loading launch records from {source}");

    // single attempt, any failure is fatal
    let dataset = loader::load(&source, config.fetch_timeout())
        .await
        .with_context(|| format!("loading launch records from {source}"))?;

    let state = Arc::new(AppState::new(dataset)?);
    let app = api::create_router(state);

    let addr = config.listen_addr();
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("binding {addr}"))?;
    log::info!("Dashboard running at http://{addr}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("serving HTTP")?;

    log::info!("Shut down");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        log::warn!("Failed to listen for Ctrl+C: {e}");
        std::future::pending::<()>().await;
    }
}
