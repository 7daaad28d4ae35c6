//! # parcel-api: HTTP Surface of the Parcel Tracker
//!
//! Axum REST server over parcel-core and parcel-db.
//!
//! ## Request Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                         Request Flow                                │
//! │                                                                     │
//! │  HTTP request                                                       │
//! │       │                                                             │
//! │       ▼                                                             │
//! │  CorsLayer ──► TraceLayer ──► route handler                         │
//! │                                    │                                │
//! │                  validation (parcel-core) ──► 422 on bad fields     │
//! │                                    │                                │
//! │                  repositories / ledger (parcel-db)                  │
//! │                                    │                                │
//! │                  ApiError ──► JSON error body + status code         │
//! │                                    │                                │
//! │       ◄────────────────────────────┘                                │
//! │  JSON response                                                      │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The library exposes [`app`] so integration tests can drive the full
//! router in-process without binding a socket.

pub mod config;
pub mod error;
pub mod routes;
pub mod state;

use axum::http::HeaderValue;
use axum::Router;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::config::ApiConfig;
use crate::state::AppState;

/// Builds the full application router over the given state.
///
/// Every route goes through `TraceLayer`, so request/response pairs show
/// up in the structured logs with latency and status.
pub fn app(state: AppState) -> Router {
    Router::new()
        .merge(routes::health::router())
        .merge(routes::customers::router())
        .merge(routes::parcels::router())
        .merge(routes::scans::router())
        .merge(routes::reports::router())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Builds the CORS layer from the configured frontend origins.
///
/// Origins that fail to parse as header values are skipped.
pub fn cors_layer(config: &ApiConfig) -> CorsLayer {
    let origins: Vec<HeaderValue> = config
        .allowed_origins
        .iter()
        .filter_map(|origin| origin.parse().ok())
        .collect();

    CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods(Any)
        .allow_headers(Any)
}
