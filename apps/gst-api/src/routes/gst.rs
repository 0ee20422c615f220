//! # GST Calculation Endpoints
//!
//! | Method | Path               | Handler           |
//! |--------|--------------------|-------------------|
//! | `POST` | `/gst-calculation` | `gst_calculation` |
//! | `POST` | `/reverse-gst`     | `reverse_gst`     |
//! | `POST` | `/gst-breakdown`   | `gst_breakdown`   |
//! | `POST` | `/compare-rates`   | `compare_rates`   |
//!
//! Every handler follows the same one-way flow: body → presence check →
//! type extraction → sign validation → engine → JSON response. Each
//! computation is logged with structured fields.

use axum::response::IntoResponse;
use axum::routing::post;
use axum::{Json, Router};
use serde_json::Value;

use gst_core::engine;
use gst_core::validation::validate_positive;

use crate::error::ApiError;
use crate::extract;

const CALCULATION_FIELDS: &[&str] = &["base_amount", "gst_rate"];
const REVERSE_FIELDS: &[&str] = &["total_amount", "gst_rate"];
const COMPARE_FIELDS: &[&str] = &["base_amount", "rates"];

/// Build the GST calculation router.
pub fn router() -> Router {
    Router::new()
        .route("/gst-calculation", post(gst_calculation))
        .route("/reverse-gst", post(reverse_gst))
        .route("/gst-breakdown", post(gst_breakdown))
        .route("/compare-rates", post(compare_rates))
}

/// POST /gst-calculation — forward GST computation.
async fn gst_calculation(Json(body): Json<Value>) -> Result<impl IntoResponse, ApiError> {
    extract::require_fields(&body, CALCULATION_FIELDS)?;
    let base_amount = extract::number(&body, "base_amount")?;
    let gst_rate = extract::number(&body, "gst_rate")?;
    validate_positive(base_amount, "base_amount")?;
    validate_positive(gst_rate, "gst_rate")?;

    let result = engine::calculate_gst(base_amount, gst_rate);
    tracing::info!(
        base_amount,
        gst_rate,
        gst_amount = result.gst_amount,
        total_amount = result.total_amount,
        "calculated GST"
    );
    Ok(Json(result))
}

/// POST /reverse-gst — recover the base amount from a GST-inclusive total.
async fn reverse_gst(Json(body): Json<Value>) -> Result<impl IntoResponse, ApiError> {
    extract::require_fields(&body, REVERSE_FIELDS)?;
    let total_amount = extract::number(&body, "total_amount")?;
    let gst_rate = extract::number(&body, "gst_rate")?;
    validate_positive(total_amount, "total_amount")?;
    validate_positive(gst_rate, "gst_rate")?;

    let result = engine::reverse_gst(total_amount, gst_rate);
    tracing::info!(
        total_amount,
        gst_rate,
        base_amount = result.base_amount,
        gst_amount = result.gst_amount,
        "reverse calculated GST"
    );
    Ok(Json(result))
}

/// POST /gst-breakdown — forward computation with the CGST/SGST or IGST
/// split. `is_intra_state` defaults to `true` when omitted.
async fn gst_breakdown(Json(body): Json<Value>) -> Result<impl IntoResponse, ApiError> {
    extract::require_fields(&body, CALCULATION_FIELDS)?;
    let base_amount = extract::number(&body, "base_amount")?;
    let gst_rate = extract::number(&body, "gst_rate")?;
    let is_intra_state = extract::bool_or(&body, "is_intra_state", true)?;
    validate_positive(base_amount, "base_amount")?;
    validate_positive(gst_rate, "gst_rate")?;

    let result = engine::gst_breakdown(base_amount, gst_rate, is_intra_state);
    tracing::info!(
        base_amount,
        gst_rate,
        is_intra_state,
        gst_amount = result.calculation.gst_amount,
        "calculated GST breakdown"
    );
    Ok(Json(result))
}

/// POST /compare-rates — one base amount across several GST rates.
///
/// Only `base_amount` gets the sign check; individual rate entries are
/// type-checked but deliberately not re-validated (see DESIGN.md).
async fn compare_rates(Json(body): Json<Value>) -> Result<impl IntoResponse, ApiError> {
    extract::require_fields(&body, COMPARE_FIELDS)?;
    let base_amount = extract::number(&body, "base_amount")?;
    let rates = extract::number_array(&body, "rates")?;
    validate_positive(base_amount, "base_amount")?;

    let result = engine::compare_rates(base_amount, &rates)?;
    tracing::info!(
        base_amount,
        rate_count = rates.len(),
        lowest_rate = result.lowest_rate,
        highest_rate = result.highest_rate,
        max_difference = result.max_difference,
        "compared GST rates"
    );
    Ok(Json(result))
}
