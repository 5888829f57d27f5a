//! # HireSync API
//!
//! The API crate provides the web server for the HireSync interview-scheduling
//! service. It exposes endpoints for matching availability, managing
//! scheduling sessions, and building candidate-message envelopes.
//!
//! ## Architecture
//!
//! This crate follows a layered architecture:
//!
//! - **Routes**: Define API endpoints and URL structure
//! - **Handlers**: Implement request processing logic
//! - **Middleware**: Provide cross-cutting error handling
//! - **Config**: Handle environment and application configuration
//!
//! The API uses Axum as the web framework. All scheduling logic lives in
//! `hiresync-core`; handlers only validate input, call the pure matcher, and
//! shape responses.

/// Configuration module for API settings
pub mod config;
/// Request handlers that implement business logic
pub mod handlers;
/// Middleware for error handling
pub mod middleware;
/// Route definitions and API endpoint structure
pub mod routes;

use std::sync::Arc;

use axum::Router;
use eyre::Result;
use hiresync_core::oracle::AvailabilityOracle;
use hiresync_store::SessionStore;
use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::FmtSubscriber;

/// Shared application state that is accessible to all request handlers.
pub struct ApiState {
    /// In-memory session store for scheduling results
    pub store: SessionStore,
    /// External text-to-windows parser service
    pub oracle: Arc<dyn AvailabilityOracle>,
    /// Default minimum slot length in minutes when a request does not set one
    pub default_slot_minutes: i64,
}

/// Builds the application router: all routes, plus CORS and request-timeout
/// layers, against the given shared state.
pub fn build_router(config: &config::ApiConfig, state: Arc<ApiState>) -> Result<Router> {
    // Build the application router with all routes
    let app = Router::new()
        // Health check endpoints
        .merge(routes::health::routes())
        // Availability matching and free-text scheduling endpoints
        .merge(routes::schedule::routes())
        // Scheduling session lifecycle endpoints
        .merge(routes::session::routes())
        // Candidate message endpoints
        .merge(routes::message::routes())
        // Attach shared state to all routes
        .with_state(state);

    // Apply CORS configuration if origins are specified
    let app = if let Some(origins) = &config.cors_origins {
        let origins = origins
            .iter()
            .map(|origin| origin.parse::<axum::http::HeaderValue>())
            .collect::<Result<Vec<_>, _>>()?;

        let cors = tower_http::cors::CorsLayer::new()
            .allow_methods([
                axum::http::Method::GET,
                axum::http::Method::POST,
                axum::http::Method::DELETE,
                axum::http::Method::OPTIONS,
            ])
            .allow_headers([
                axum::http::header::CONTENT_TYPE,
                axum::http::header::ACCEPT,
            ])
            .allow_origin(origins)
            .allow_credentials(true);

        app.layer(cors)
    } else {
        app
    };

    // Add request timeout middleware
    let app = app.layer(tower_http::timeout::TimeoutLayer::new(
        std::time::Duration::from_secs(config.request_timeout),
    ));

    Ok(app)
}

/// Starts the API server with the provided configuration, session store, and
/// availability oracle.
///
/// Initializes logging, builds the router, and serves until shutdown.
pub async fn start_server(
    config: config::ApiConfig,
    store: SessionStore,
    oracle: Arc<dyn AvailabilityOracle>,
) -> Result<()> {
    // Initialize tracing for logging
    let subscriber = FmtSubscriber::builder()
        .with_max_level(config.log_level)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    // Create shared state with dependencies
    let state = Arc::new(ApiState {
        store,
        oracle,
        default_slot_minutes: config.default_slot_minutes,
    });

    let app = build_router(&config, state)?;

    // Start the HTTP server
    let addr = config.server_addr();
    let listener = TcpListener::bind(&addr).await?;
    info!("Server listening on http://{}", addr);
    axum::serve(listener, app).await?;

    Ok(())
}
