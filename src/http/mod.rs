//! HTTP transport for the conversion service.
//!
//! A thin axum layer over [`crate::convert`]: one upload endpoint plus
//! health and info probes. All conversion work happens in the library; the
//! handlers only validate the upload and shape responses.

mod handlers;
pub mod types;

use crate::config::ServiceConfig;
use axum::extract::DefaultBodyLimit;
use axum::routing::{get, post};
use axum::Router;
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

pub use handlers::{convert_pdf, health, info_endpoint, ApiError};

/// Headroom on top of the upload limit for multipart boundaries and part
/// headers, so a file of exactly the limit is still decodable.
const MULTIPART_OVERHEAD_BYTES: usize = 64 * 1024;

/// State shared across handlers.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<ServiceConfig>,
}

impl AppState {
    pub fn new(config: ServiceConfig) -> Self {
        Self {
            config: Arc::new(config),
        }
    }
}

/// Build the API router with all endpoints.
pub fn build_router(state: AppState) -> Router {
    let body_limit = state.config.max_upload_bytes + MULTIPART_OVERHEAD_BYTES;
    Router::new()
        .route("/api/conversion/convert", post(convert_pdf))
        .route("/api/conversion/health", get(health))
        .route("/api/conversion/info", get(info_endpoint))
        .layer(DefaultBodyLimit::max(body_limit))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// Bind and serve until the process is terminated.
pub async fn start_server(config: ServiceConfig) -> Result<(), std::io::Error> {
    let addr = config.bind_addr.clone();
    tracing::info!("starting conversion server on {}", addr);

    let app = build_router(AppState::new(config));
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    axum::serve(listener, app).await
}
