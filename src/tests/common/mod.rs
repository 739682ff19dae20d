use std::net::SocketAddr;
use std::sync::Arc;

use axum::Router;
use reqwest::Client;
use tokio::task::JoinHandle;

use crate::config::settings::{MetricsConfig, ServerConfig, SettingsConfig};
use crate::observability::metrics::Metrics;
use crate::server::server::{router, AppState};
use crate::service::TokenService;

/// Spawn an Axum router on an ephemeral port and return (JoinHandle, SocketAddr)
pub async fn spawn_axum(router: Router) -> (JoinHandle<()>, SocketAddr) {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.expect("bind failed");
    let addr = listener.local_addr().unwrap();
    let handle = tokio::spawn(async move {
        axum::serve(listener, router).await.expect("server failed");
    });
    (handle, addr)
}

pub fn test_settings(metrics_enabled: bool) -> SettingsConfig {
    SettingsConfig {
        server: ServerConfig {
            host: "127.0.0.1".to_owned(),
            port: "0".to_owned(),
        },
        metrics: MetricsConfig {
            path: "/metrics".to_owned(),
            is_enabled: metrics_enabled,
        },
        logging: None,
    }
}

/// Serve a fresh default service; returns its base url.
pub async fn spawn_token_server(metrics_enabled: bool) -> (JoinHandle<()>, String) {
    let state = AppState::new(
        Arc::new(TokenService::default()),
        Arc::new(Metrics::new().expect("metrics")),
    );
    let app = router(&test_settings(metrics_enabled), state);
    let (handle, addr) = spawn_axum(app).await;
    (handle, format!("http://{}", addr))
}

pub fn build_reqwest_client() -> Client {
    Client::builder()
        .timeout(std::time::Duration::from_secs(5))
        .build()
        .expect("reqwest client")
}
