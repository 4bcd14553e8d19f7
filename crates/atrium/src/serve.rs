// SPDX-FileCopyrightText: 2026 Atrium Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! `atrium serve` and `atrium pages` command implementations.
//!
//! Discovers plugins, builds the immutable page registry once, and either
//! runs the dashboard HTTP server until a shutdown signal arrives (`serve`)
//! or prints the page listing to stdout (`pages`).

use std::path::Path;
use std::sync::Arc;

use tokio_util::sync::CancellationToken;
use tracing::{debug, info};

use atrium_config::AtriumConfig;
use atrium_core::AtriumError;
use atrium_gateway::{DashboardState, ServerConfig};
use atrium_plugin::{discover_plugins, ListFilter, ListingService, PageRegistry};

/// Runs the `atrium serve` command.
///
/// The registry is built exactly once, before the server starts accepting
/// requests; request handlers only ever see the finished value.
pub async fn run_serve(config: AtriumConfig) -> Result<(), AtriumError> {
    init_tracing(&config.dashboard.log_level);
    info!(name = config.dashboard.name.as_str(), "starting atrium serve");

    let registry = build_registry(&config)?;
    let state = DashboardState::new(registry);

    let server_config = ServerConfig {
        host: config.server.host.clone(),
        port: config.server.port,
    };

    let cancel = install_signal_handler();

    let mut server = tokio::spawn(async move {
        atrium_gateway::start_server(&server_config, state).await
    });

    tokio::select! {
        result = &mut server => {
            result.map_err(|e| AtriumError::Internal(format!("server task failed: {e}")))??;
        }
        _ = cancel.cancelled() => {
            info!("shutdown signal received, stopping dashboard server");
            server.abort();
        }
    }

    info!("atrium serve shutdown complete");
    Ok(())
}

/// Runs the `atrium pages` command.
///
/// Exercises discovery, registry build, and the listing service without the
/// HTTP layer, printing the unfiltered listing as pretty JSON.
pub async fn run_pages(config: AtriumConfig) -> Result<(), AtriumError> {
    init_tracing(&config.dashboard.log_level);

    let registry = build_registry(&config)?;
    let listing = ListingService::new(registry);
    let entries = listing.list(ListFilter::default());

    let rendered = serde_json::to_string_pretty(&entries)
        .map_err(|e| AtriumError::Internal(format!("failed to render listing: {e}")))?;
    println!("{rendered}");
    Ok(())
}

/// Discover plugins and build the immutable page registry.
fn build_registry(config: &AtriumConfig) -> Result<Arc<PageRegistry>, AtriumError> {
    let plugins = discover_plugins(Path::new(&config.plugins.dir))?;
    info!(plugins = plugins.len(), "plugin discovery complete");

    let registry = Arc::new(PageRegistry::build(plugins));
    info!(pages = registry.len(), "page registry built");
    Ok(registry)
}

/// Installs signal handlers for SIGTERM and SIGINT.
///
/// Returns a [`CancellationToken`] that is cancelled when either signal is
/// received. The handler task runs in the background until then.
fn install_signal_handler() -> CancellationToken {
    let token = CancellationToken::new();
    let token_clone = token.clone();

    tokio::spawn(async move {
        let ctrl_c = tokio::signal::ctrl_c();

        #[cfg(unix)]
        {
            use tokio::signal::unix::{signal, SignalKind};
            let mut sigterm =
                signal(SignalKind::terminate()).expect("failed to install SIGTERM handler");

            tokio::select! {
                _ = ctrl_c => {
                    info!("received SIGINT (Ctrl+C), initiating shutdown");
                }
                _ = sigterm.recv() => {
                    info!("received SIGTERM, initiating shutdown");
                }
            }
        }

        #[cfg(not(unix))]
        {
            let _ = ctrl_c.await;
            info!("received Ctrl+C, initiating shutdown");
        }

        token_clone.cancel();
        debug!("shutdown signal handler completed");
    });

    token
}

/// Initializes the tracing subscriber with the given log level.
fn init_tracing(log_level: &str) {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("atrium={log_level},warn")));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_thread_names(false)
        .init();
}
