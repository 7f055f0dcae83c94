//! Portfolio Page Server
//!
//! Serves the rendered page and JSON views of the timelines.
//!
//! Usage:
//!   cargo run --bin portfolio_api
//!
//! Environment:
//!   PORT / PORTFOLIO_PORT - Server port (default: 8080)
//!   PORTFOLIO_HOST        - Server host (default: 0.0.0.0)

use portfolio_page::api::{create_router, AppState};
use portfolio_page::{ServerConfig, SiteConfig};
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::{info, warn, Level};
use tracing_subscriber::FmtSubscriber;

#[tokio::main]
async fn main() -> eyre::Result<()> {
    // Initialize logging
    FmtSubscriber::builder()
        .with_max_level(Level::INFO)
        .with_target(false)
        .compact()
        .init();

    let server = ServerConfig::from_env()?;
    let addr = server.socket_addr()?;

    let site = SiteConfig::default();
    if !site.overlay.enabled {
        warn!("Splash overlay disabled");
    }

    let state = Arc::new(AppState::new(site));
    let app = create_router(state);

    info!("🚀 Portfolio page starting on http://{}", addr);
    info!("");
    info!("Endpoints:");
    info!("  GET /                            - Rendered portfolio page");
    info!("  GET /v1/experiences/work         - Work experience timeline (JSON)");
    info!("  GET /v1/experiences/volunteering - Volunteering timeline (JSON)");
    info!("  GET /v1/health                   - Health check");
    info!("");
    info!("Press Ctrl+C for graceful shutdown");

    let listener = TcpListener::bind(addr).await?;

    let shutdown_signal = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            warn!("Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal)
        .await?;

    info!("👋 Portfolio page shutdown complete");

    Ok(())
}
