// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
use std::net::SocketAddr;
use std::sync::Arc;

use axum::{
    extract::DefaultBodyLimit,
    response::IntoResponse,
    routing::{get, post},
    Router,
};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::relay::GhibliRelay;
use crate::version;

use super::generate::generate_handler;
use super::generate_from_text::generate_from_text_handler;
use super::response::HealthResponse;

// Decoded images are capped at 10MB; leave headroom for multipart framing
const MAX_BODY_SIZE: usize = 12 * 1024 * 1024;

#[derive(Clone)]
pub struct AppState {
    pub relay: Arc<GhibliRelay>,
}

/// Build the relay router with all routes and middleware
pub fn build_router(state: AppState) -> Router {
    Router::new()
        // Health check
        .route("/health", get(health_handler))
        // Image stylization endpoint
        .route("/api/v1/generate", post(generate_handler))
        // Text generation endpoint
        .route(
            "/api/v1/generate-from-text",
            post(generate_from_text_handler),
        )
        .layer(DefaultBodyLimit::max(MAX_BODY_SIZE))
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(state)
}

pub async fn start_server(
    relay: GhibliRelay,
    port: u16,
) -> Result<(), Box<dyn std::error::Error>> {
    let state = AppState {
        relay: Arc::new(relay),
    };

    let app = build_router(state);

    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    let listener = tokio::net::TcpListener::bind(addr).await?;

    info!("API server listening on {}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    let _ = tokio::signal::ctrl_c().await;
    info!("shutdown signal received");
}

async fn health_handler() -> impl IntoResponse {
    axum::response::Json(HealthResponse {
        status: "ok".to_string(),
        version: version::get_version_string(),
    })
}
