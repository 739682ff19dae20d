use std::sync::Arc;

use anyhow::{Context, Result};
use axum::Router;
use tokio::net::TcpListener;
use tracing::{info, warn};

use crate::config::settings::SettingsConfig;
use crate::observability::metrics::Metrics;
use crate::observability::routes::MetricsState;
use crate::server::routes::TokenState;
use crate::service::TokenService;

#[derive(Clone)]
pub struct AppState {
    pub metrics_state: MetricsState,
    pub token_state: TokenState,
}

impl AppState {
    pub fn new(service: Arc<TokenService>, metrics: Arc<Metrics>) -> Self {
        Self {
            metrics_state: MetricsState::new(metrics.registry.clone()),
            token_state: TokenState::new(service, metrics),
        }
    }
}

/// Token routes plus the metrics route when enabled.
pub fn router(settings_config: &SettingsConfig, state: AppState) -> Router {
    Router::new()
        .merge(state.token_state.router())
        .merge(state.metrics_state.router(&settings_config.metrics))
        .with_state(state)
}

/// Bind the configured address and serve until Ctrl-C.
pub async fn start(settings_config: &SettingsConfig, state: AppState) -> Result<()> {
    let bind_addr = settings_config.server.bind_addr();
    let listener = TcpListener::bind(&bind_addr)
        .await
        .with_context(|| format!("cannot bind {}", bind_addr))?;
    info!("listening on {}", bind_addr);

    state.token_state.metrics.up.set(1);
    let app = router(settings_config, state.clone());
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("http server failed")?;
    state.token_state.metrics.up.set(0);

    info!("server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!("cannot listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    info!("shutdown signal received");
}
