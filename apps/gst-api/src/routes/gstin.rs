//! # GSTIN Validation Endpoint
//!
//! | Method | Path              | Handler          |
//! |--------|-------------------|------------------|
//! | `POST` | `/validate-gstin` | `validate_gstin` |
//!
//! Format validation is a query, not a command: an ill-formed GSTIN is a
//! 200 response with `valid: false`. Only a missing or non-string `gstin`
//! field is a client error.

use axum::response::IntoResponse;
use axum::routing::post;
use axum::{Json, Router};
use serde_json::Value;

use gst_core::gstin;

use crate::error::ApiError;
use crate::extract;

const GSTIN_FIELDS: &[&str] = &["gstin"];

/// Build the GSTIN validation router.
pub fn router() -> Router {
    Router::new().route("/validate-gstin", post(validate_gstin))
}

/// POST /validate-gstin — format-check a GSTIN and extract its components.
async fn validate_gstin(Json(body): Json<Value>) -> Result<impl IntoResponse, ApiError> {
    extract::require_fields(&body, GSTIN_FIELDS)?;
    let candidate = extract::string(&body, "gstin")?;

    let result = gstin::validate_gstin(candidate);
    tracing::info!(gstin = candidate, valid = result.valid, "validated GSTIN");
    Ok(Json(result))
}
