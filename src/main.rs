// Main entry point - Dependency injection and server setup
mod domain;
mod application;
mod infrastructure;
mod presentation;

use anyhow::Context;
use axum::{routing::get, Router};
use std::{net::SocketAddr, sync::Arc};
use tower_http::trace::TraceLayer;

use crate::application::analytics_service::AnalyticsService;
use crate::application::record_service::RecordService;
use crate::infrastructure::config::load_service_config;
use crate::infrastructure::postgrest_repository::PostgrestRepository;
use crate::presentation::app_state::AppState;
use crate::presentation::handlers::{export_analytics, get_analytics, health_check, list_records};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    // Load configuration
    let config = load_service_config()?;

    // Create repository (infrastructure layer)
    let repository = Arc::new(PostgrestRepository::new(config.records));

    // Create services (application layer)
    let record_service = RecordService::new(repository.clone());
    let analytics_service = AnalyticsService::new(repository);

    // Create application state
    let state = Arc::new(AppState {
        record_service,
        analytics_service,
    });

    // Build router (presentation layer)
    let router = Router::new()
        .route("/healthz", get(health_check))
        .route("/records/:user_id", get(list_records))
        .route("/analytics/:user_id", get(get_analytics))
        .route("/analytics/:user_id/export", get(export_analytics))
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    // Start server
    let addr: SocketAddr = config
        .server
        .bind
        .parse()
        .context("Invalid server.bind address")?;
    println!("Starting tasting-analytics service on {}", addr);

    axum::serve(tokio::net::TcpListener::bind(addr).await?, router).await?;

    Ok(())
}
