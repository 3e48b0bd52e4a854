mod pages;
mod routes;

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::{Context, Result};
use axum::Router;
use tower_http::compression::CompressionLayer;
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::api::ApiClient;
use crate::config::Config;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub api: ApiClient,
    pub config: Arc<Config>,
}

impl AppState {
    /// Build the state, including the API client, from configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the API client cannot be created.
    pub fn new(config: Config) -> Result<Self> {
        let api = ApiClient::new(&config).context("Failed to create API client")?;
        Ok(Self {
            api,
            config: Arc::new(config),
        })
    }
}

/// Start the web server and run until `shutdown` resolves.
///
/// # Errors
///
/// Returns an error if the server fails to start.
pub async fn serve<F>(config: Config, shutdown: F) -> Result<()>
where
    F: std::future::Future<Output = ()> + Send + 'static,
{
    let addr: SocketAddr = format!("{}:{}", config.web_host, config.web_port)
        .parse()
        .context("Invalid web server address")?;

    let state = AppState::new(config)?;
    let app = create_app(state);

    info!(addr = %addr, "Starting HTTP web server");

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .context("Failed to bind web server")?;

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown)
        .await
        .context("Web server error")?;

    Ok(())
}

/// Create the main application router.
#[must_use]
pub fn create_app(state: AppState) -> Router {
    Router::new()
        .merge(routes::router())
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
