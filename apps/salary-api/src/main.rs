//! Salary API Server - backend for the salary explorer visualization
//!
//! Provides REST endpoints for:
//! - Filter facets (distinct languages and countries)
//! - Per-experience-bracket salary statistics
//! - Salary-range distribution

use anyhow::Result;
use axum::{routing::get, Router};
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::info;

mod handlers;
mod models;
mod state;

use state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if present
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("salary_api=info".parse()?)
                .add_directive("tower_http=debug".parse()?),
        )
        .init();

    // Initialize application state
    info!("Initializing salary API...");
    let state = AppState::new().await?;
    let state = Arc::new(state);

    // CORS configuration for the visualization client
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    // Build router
    let app = Router::new()
        // Health check
        .route("/health", get(handlers::health))
        // Filter facets
        .route("/api/salaries/filters", get(handlers::get_filters))
        // Per-bracket statistics
        .route("/api/salaries", get(handlers::get_salaries))
        // Salary-range histogram
        .route("/api/salaries/distribution", get(handlers::get_distribution))
        // Experience levels present in the dataset
        .route("/api/experience-levels", get(handlers::get_experience_levels))
        // Add middleware
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state);

    // Parse bind address
    let port: u16 = std::env::var("PORT")
        .ok()
        .and_then(|p| p.parse().ok())
        .unwrap_or(3001);

    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    info!("Starting salary API on http://{}", addr);

    // Start server
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
