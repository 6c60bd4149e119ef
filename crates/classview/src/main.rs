use anyhow::Context;
use std::path::Path;
use std::sync::Arc;
use tracing::{debug, info, warn};

use classview::config::AppConfig;
use classview::ingest;
use classview::schedule::RangeSelector;
use classview::server;
use classview::store::ScheduleStore;
use classview::types::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    let config_path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "config.json".to_string());
    let config = match AppConfig::load_from_path(Path::new(&config_path)) {
        Ok(config) => config,
        Err(e) => {
            warn!(path = %config_path, error = %e, "config not loaded, using defaults");
            AppConfig::default()
        }
    };

    let schedules = if ingest::is_remote_source(&config.schedule_source) {
        ingest::load_from_url(&config.schedule_source)
            .await
            .map_err(anyhow::Error::from_boxed)
            .with_context(|| format!("failed to fetch schedules from {}", config.schedule_source))?
    } else {
        ingest::load_from_path(Path::new(&config.schedule_source))
            .map_err(anyhow::Error::from_boxed)
            .with_context(|| format!("failed to load schedules from {}", config.schedule_source))?
    };

    let store = ScheduleStore::from_map(schedules);
    if store.is_empty() {
        warn!("schedule source contained no usable schedules");
    }

    let mut selector = RangeSelector::new();
    selector.set_on_change(Box::new(|window| {
        debug!(%window, "visible window changed");
    }));

    let state = Arc::new(AppState::new(store, selector, config.clone()));
    let router = server::create_router(state);

    let addr = config.bind_addr();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;
    info!("listening on {addr}");

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;

    Ok(())
}

async fn shutdown_signal() {
    if tokio::signal::ctrl_c().await.is_err() {
        warn!("failed to install ctrl-c handler");
        return;
    }
    info!("shutdown signal received");
}
