//! Camp directory backend.
//!
//! A small HTTP service behind the camp directory site: it proxies the
//! Airtable base without exposing credentials, caches camp and category
//! records in memory, filters and shapes them for display, verifies
//! Supabase-issued tokens, and stores per-user favorites in Postgres.

mod config;
mod favorites;
mod server;

use std::io;
use std::sync::Arc;

use anyhow::{Context, Result};
use tokio::net::TcpListener;
use tracing::{info, warn};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use config::Config;
use favorites::FavoritesStore;
use server::AppState;

/// Initialize the tracing subscriber for logging
fn init_tracing() {
    // Use RUST_LOG env var to control log level (e.g., RUST_LOG=debug)
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(io::stderr))
        .with(filter)
        .init();
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if present (silently ignore if not found)
    let _ = dotenvy::dotenv();

    init_tracing();

    let config = Config::from_env();
    let mut state = AppState::from_config(&config)?;

    // Favorites are optional: a bad database stays a warning, the rest of
    // the API still serves.
    if let Some(ref url) = config.database_url {
        match FavoritesStore::connect(url).await {
            Ok(store) => state.favorites = Some(Arc::new(store)),
            Err(e) => warn!(error = %e, "Favorites store unavailable"),
        }
    }

    let listener = TcpListener::bind(&config.bind_addr)
        .await
        .with_context(|| format!("Failed to bind {}", config.bind_addr))?;
    info!(addr = %config.bind_addr, "Listening");

    axum::serve(listener, server::router(state))
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    info!("Shut down cleanly");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!(error = %e, "Failed to listen for shutdown signal");
    }
}
