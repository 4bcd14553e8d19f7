// SPDX-FileCopyrightText: 2026 Atrium Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Dashboard HTTP server built on axum.
//!
//! Sets up routes, middleware, and shared state for page delivery.

use std::sync::Arc;

use axum::{routing::get, Router};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use atrium_core::AtriumError;
use atrium_plugin::{ListingService, PageRegistry, PageResolver};

use crate::handlers;

/// Shared state for axum request handlers.
#[derive(Clone)]
pub struct DashboardState {
    /// Resolves page names to content (the only I/O path).
    pub resolver: Arc<PageResolver>,
    /// Produces metadata listings (pure, in-memory).
    pub listing: Arc<ListingService>,
    /// Process start time for the health endpoint.
    pub start_time: std::time::Instant,
}

impl DashboardState {
    /// Build handler state over an immutable page registry.
    pub fn new(registry: Arc<PageRegistry>) -> Self {
        Self {
            resolver: Arc::new(PageResolver::new(Arc::clone(&registry))),
            listing: Arc::new(ListingService::new(registry)),
            start_time: std::time::Instant::now(),
        }
    }
}

/// Dashboard server configuration (mirrors the `[server]` config section).
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Host address to bind.
    pub host: String,
    /// Port to bind.
    pub port: u16,
}

/// Build the dashboard router.
///
/// Kept separate from [`start_server`] so tests can drive the router
/// directly without binding a socket.
pub fn router(state: DashboardState) -> Router {
    Router::new()
        .route(
            "/web/ConfigurationPage",
            get(handlers::get_configuration_page),
        )
        .route(
            "/web/ConfigurationPages",
            get(handlers::get_configuration_pages),
        )
        .route("/health", get(handlers::get_health))
        .with_state(state)
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
}

/// Start the dashboard HTTP server.
///
/// Binds to the configured host:port and serves:
/// - GET /web/ConfigurationPage?name=<page>
/// - GET /web/ConfigurationPages?enableInMainMenu=<true|false>
/// - GET /health
pub async fn start_server(config: &ServerConfig, state: DashboardState) -> Result<(), AtriumError> {
    let app = router(state);

    let addr = format!("{}:{}", config.host, config.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| AtriumError::Server {
            message: format!("failed to bind dashboard to {addr}: {e}"),
            source: Some(Box::new(e)),
        })?;

    tracing::info!("dashboard server listening on {addr}");

    axum::serve(listener, app)
        .await
        .map_err(|e| AtriumError::Server {
            message: format!("dashboard server error: {e}"),
            source: Some(Box::new(e)),
        })?;

    Ok(())
}
