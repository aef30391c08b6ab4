//! Portfolio web service
//!
//! Fetches the portfolio graph of projects, teams and awards from the remote
//! portfolio API and serves it as localized Korean or English pages.
//! Uses hexagonal (ports & adapters) architecture for clean separation of concerns.

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Context;
use axum::{routing::get, Json, Router};
use serde::Serialize;
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod adapters;
mod app;
mod config;
mod domain;
mod error;
mod handlers;
mod render;

#[cfg(test)]
mod test_utils;


use adapters::HttpPortfolioApi;
use app::{PortfolioService, SiteUrls};
use config::Config;
use render::SiteInfo;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub portfolio_service: Arc<PortfolioService<HttpPortfolioApi>>,
    pub site: Arc<SiteInfo>,
}

impl AppState {
    pub fn from_config(config: &Config) -> anyhow::Result<Self> {
        let api = HttpPortfolioApi::new(&config.api_url, config.api_timeout)
            .context("Failed to build portfolio API client")?;

        Ok(Self {
            portfolio_service: Arc::new(PortfolioService::new(
                Arc::new(api),
                SiteUrls::from_config(config),
            )),
            site: Arc::new(SiteInfo::from_config(config)),
        })
    }
}

#[derive(Serialize)]
struct HealthResponse {
    status: &'static str,
    version: &'static str,
}

async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
    })
}

/// Build the router with all routes and middleware
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/", get(handlers::index))
        .route("/project/:key", get(handlers::project))
        .fallback(handlers::not_found)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,portfolio_web=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting portfolio web...");

    // Load configuration
    let config = Config::from_env();
    tracing::info!("Using portfolio API at {}", config.api_url);

    let state = AppState::from_config(&config)?;
    let app = router(state);

    // Start server
    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;
    axum::serve(listener, app)
        .await
        .context("Server error")?;

    Ok(())
}
