//! Bracketeer Server - HTTP API for fixture generation
//!
//! This crate provides the web backend:
//! - JSON endpoints for knockout and round-robin fixtures
//! - Team file upload (.txt / .csv)
//! - Status endpoint
//! - Optional static file serving for a front-end

mod routes;
mod state;

use axum::{
    routing::{get, post},
    Router,
};
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tower_http::services::ServeDir;

pub use routes::fixtures::{
    ErrorResponse, FixturesRequest, KnockoutRequest, KnockoutResponse, RoundRobinRequest,
    RoundRobinResponse,
};
pub use state::ServerState;

/// Server configuration
#[derive(Clone, Debug)]
pub struct ServerConfig {
    pub port: u16,
    /// Directory served for any path not matched by the API
    pub static_dir: Option<String>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: 8002,
            static_dir: None,
        }
    }
}

/// Create the router with all routes
pub fn create_router(config: &ServerConfig, state: Arc<ServerState>) -> Router {
    let router = Router::new()
        // Status endpoint
        .route("/api/status", get(routes::status::status_handler))
        // Fixture generation
        .route("/api/knockout", post(routes::fixtures::knockout_handler))
        .route("/api/round-robin", post(routes::fixtures::round_robin_handler))
        .route("/api/fixtures", post(routes::fixtures::fixtures_handler))
        .route("/api/upload", post(routes::fixtures::upload_handler))
        // Shared state
        .with_state(state)
        .layer(CorsLayer::permissive());

    // Static file serving (must be last)
    match &config.static_dir {
        Some(dir) => router.fallback_service(ServeDir::new(dir)),
        None => router,
    }
}

/// Start the HTTP server
pub async fn run_server(config: ServerConfig, state: ServerState) -> anyhow::Result<()> {
    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    let router = create_router(&config, Arc::new(state));

    tracing::info!("Bracketeer server starting on http://0.0.0.0:{}", config.port);
    if let Some(dir) = &config.static_dir {
        tracing::info!("Static files served from: {}", dir);
    }

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, router).await?;

    Ok(())
}
