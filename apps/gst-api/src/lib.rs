//! # gst-api — Axum HTTP Application
//!
//! The JSON-over-HTTP surface of the GST calculator. Route handlers parse
//! and validate request bodies, delegate all arithmetic to `gst-core`, and
//! shape results and errors into JSON responses.
//!
//! ## API Surface
//!
//! | Method | Path               | Module             | Purpose                  |
//! |--------|--------------------|--------------------|--------------------------|
//! | `POST` | `/gst-calculation` | [`routes::gst`]    | Forward GST computation  |
//! | `POST` | `/reverse-gst`     | [`routes::gst`]    | Reverse GST extraction   |
//! | `POST` | `/gst-breakdown`   | [`routes::gst`]    | CGST/SGST vs IGST split  |
//! | `POST` | `/compare-rates`   | [`routes::gst`]    | Multi-rate comparison    |
//! | `POST` | `/validate-gstin`  | [`routes::gstin`]  | GSTIN format validation  |
//! | `GET`  | `/health`          | this module        | Service health           |
//! | `*`    | anything else      | this module        | JSON 404 fallback        |
//!
//! ## Crate Policy
//!
//! - No business logic in route handlers — delegates to `gst-core`.
//! - All client errors map to HTTP 400 `{"error": "..."}` via [`ApiError`].
//! - `TraceLayer` traces every request; handlers log each computation.

pub mod config;
pub mod error;
pub mod extract;
pub mod routes;

pub use error::ApiError;

use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::get;
use axum::{Json, Router};
use chrono::Utc;
use serde_json::json;
use tower_http::trace::TraceLayer;

/// Service name reported by the health endpoint.
pub const SERVICE_NAME: &str = "gst-api";

/// Every routable endpoint, as reported by `/health` and the 404 fallback.
pub const ENDPOINTS: &[&str] = &[
    "POST /gst-calculation",
    "POST /reverse-gst",
    "POST /gst-breakdown",
    "POST /compare-rates",
    "POST /validate-gstin",
    "GET /health",
];

/// Assemble the full application router with all routes and middleware.
///
/// The service is stateless, so the router carries no shared state: every
/// handler is a pure function of its request body.
pub fn app() -> Router {
    Router::new()
        .merge(routes::gst::router())
        .merge(routes::gstin::router())
        .route("/health", get(health))
        .fallback(not_found)
        .layer(TraceLayer::new_for_http())
}

/// GET /health — service identity and endpoint inventory.
async fn health() -> impl IntoResponse {
    Json(json!({
        "status": "healthy",
        "service": SERVICE_NAME,
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": Utc::now().to_rfc3339(),
        "endpoints": ENDPOINTS,
    }))
}

/// Fallback for unknown paths — JSON 404 listing the available endpoints.
async fn not_found() -> impl IntoResponse {
    (
        StatusCode::NOT_FOUND,
        Json(json!({
            "error": "Endpoint not found",
            "available": ENDPOINTS,
        })),
    )
}
