//! Countdown Card - A self-hosted countdown widget server
//!
//! This is the main entry point for the countdown-card application.

use std::sync::Arc;
use chrono::Utc;
use tokio::net::TcpListener;
use tracing::info;

use countdown_card::{
    api::create_router,
    config::Config,
    state::AppState,
    tasks::ticker_task,
    utils::shutdown_signal,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::parse();

    // Initialize tracing with appropriate log level
    tracing_subscriber::fmt()
        .with_env_filter(format!(
            "countdown_card={},tower_http=info",
            config.log_level()
        ))
        .init();

    info!(
        "Starting countdown-card server v{}",
        env!("CARGO_PKG_VERSION")
    );
    info!(
        "Configuration: host={}, port={}, public_url={}",
        config.host,
        config.port,
        config.public_base_url()
    );

    let card = config.demo_card(Utc::now());
    info!(
        "Serving card '{}' targeting '{}'",
        card.title, card.target
    );

    // Create application state
    let state = Arc::new(AppState::new(
        config.port,
        config.host.clone(),
        config.public_base_url(),
        card,
    ));

    // Start the countdown ticker background task
    let ticker_state = Arc::clone(&state);
    tokio::spawn(async move {
        ticker_task(ticker_state).await;
    });

    // Create HTTP router with all endpoints
    let app = create_router(state);

    // Bind to the specified address
    let addr = config.address();
    let listener = TcpListener::bind(&addr).await?;

    info!("Server running on http://{}", addr);
    info!("Endpoints:");
    info!("  GET  /embed          - Hosted embed page (query-configured card)");
    info!("  GET  /embed/live     - Per-second countdown stream (SSE)");
    info!("  POST /api/snippet    - Generate embed code for a card");
    info!("  GET  /api/countdown  - Served card and its live numbers");
    info!("  POST /api/countdown  - Replace the served card");
    info!("  GET  /status         - Check current status and uptime");
    info!("  GET  /health         - Health check");

    // Setup graceful shutdown
    let server = axum::serve(listener, app);

    tokio::select! {
        result = server => {
            if let Err(e) = result {
                tracing::error!("Server error: {}", e);
            }
        }
        _ = shutdown_signal() => {
            info!("Shutdown signal received");
        }
    }

    info!("Server shutdown complete");
    Ok(())
}
