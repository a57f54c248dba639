pub mod app;
pub mod handlers;

use std::sync::Arc;

use tokio::net::TcpListener;
use tracing::{error, info};

use crate::errors::{Result, RosterError};
use crate::store::RecordStore;

#[derive(Clone, Debug)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub cors_origin: Option<String>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 5555,
            cors_origin: None,
        }
    }
}

impl ServerConfig {
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

pub async fn start_server(store: Arc<RecordStore>, config: &ServerConfig) -> Result<()> {
    let app = app::create_app(store, config.cors_origin.as_deref()).await?;

    let addr = config.bind_address();
    let listener = TcpListener::bind(&addr)
        .await
        .map_err(|source| RosterError::Bind {
            addr: addr.clone(),
            source,
        })?;

    log_routes();
    info!("Server running on http://{}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(RosterError::Serve)?;

    info!("Server stopped");
    Ok(())
}

fn log_routes() {
    info!("API Endpoints:");
    info!("  /health                     - Health check");
    info!("  /graphql                    - GraphQL API (POST) & GraphiQL console (GET)");
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}
