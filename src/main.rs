use std::sync::Arc;

use anyhow::Result;
use run_tracker::api::{create_routes, AppState};
use run_tracker::config::AppConfig;
use run_tracker::services::SystemClock;
use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    let config = AppConfig::from_env()?;

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(&config.log_level)),
        )
        .init();

    info!(environment = %config.environment, "Loaded configuration");

    let users = config.load_user_store()?;
    info!(users = users.len(), "User store ready");

    let state = AppState::new(&config, Arc::new(users), Arc::new(SystemClock));
    let app = create_routes(state);

    // Start the server
    let address = config.server_address();
    let listener = TcpListener::bind(&address).await?;
    info!("Run tracker server starting on http://{}", address);
    info!("Health check available at http://{}/health", address);

    axum::serve(listener, app).await?;

    Ok(())
}
