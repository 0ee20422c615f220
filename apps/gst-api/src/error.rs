//! # API Error Types
//!
//! Structured error type implementing `axum::response::IntoResponse`.
//! Maps request-parsing and validation failures to HTTP responses with
//! `{"error": "<message>"}` bodies.
//!
//! ## Two Client Error Kinds
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  MissingFields  - required top-level key absent from the request body   │
//! │                   (checked FIRST, before any value is inspected)        │
//! │  InvalidInput   - key present but fails the type or sign check          │
//! │                                                                         │
//! │  Both are HTTP 400. Nothing in the core performs I/O, so there is no    │
//! │  taxonomy of server faults; an Internal error indicates a bug and is    │
//! │  logged, with a generic 500 returned.                                   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use gst_core::ValidationError;
use serde_json::json;
use thiserror::Error;

/// Application-level error type that maps to HTTP responses.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ApiError {
    /// One or more required top-level fields are absent. The message lists
    /// the endpoint's full required-field set.
    #[error("Missing required fields: {}", .0.join(", "))]
    MissingFields(&'static [&'static str]),

    /// A field is present but has the wrong type or an invalid value.
    /// Carries the client-facing message verbatim.
    #[error("{0}")]
    InvalidInput(String),

    /// A core bug, not a modeled error condition. Detail is logged, never
    /// returned to the client.
    #[error("internal error: {0}")]
    Internal(String),
}

impl From<ValidationError> for ApiError {
    fn from(err: ValidationError) -> Self {
        ApiError::InvalidInput(err.to_string())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            ApiError::MissingFields(_) | ApiError::InvalidInput(_) => {
                (StatusCode::BAD_REQUEST, self.to_string())
            }
            ApiError::Internal(detail) => {
                tracing::error!(detail = %detail, "internal error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "internal server error".to_string(),
                )
            }
        };

        (status, Json(json!({ "error": message }))).into_response()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
