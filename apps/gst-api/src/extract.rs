//! # Request Body Extraction
//!
//! Explicit presence and type checks over `serde_json::Value` request
//! bodies. Handlers extract each field through these helpers so the
//! MissingFields / InvalidInput distinction is deterministic:
//!
//! ```text
//! body ──► require_fields (presence) ──► number/bool_or/... (type)
//!              │ absent                        │ wrong type
//!              ▼                               ▼
//!        MissingFields                   InvalidInput
//! ```
//!
//! JSON `null` counts as absent. Type-check messages for numeric fields
//! match the validator's ("<field> must be a positive number"), so clients
//! see one rule regardless of whether they sent a string or a negative.

use serde_json::Value;

use crate::error::ApiError;

/// Checks that every required top-level field is present and non-null.
///
/// Fails with the endpoint's full required-field list when any one is
/// absent, or when the body is not a JSON object at all.
pub fn require_fields(body: &Value, fields: &'static [&'static str]) -> Result<(), ApiError> {
    let all_present = body.is_object()
        && fields
            .iter()
            .all(|field| body.get(field).is_some_and(|v| !v.is_null()));

    if !all_present {
        return Err(ApiError::MissingFields(fields));
    }

    Ok(())
}

/// Extracts a numeric field. Presence is guaranteed by [`require_fields`];
/// a non-numeric value produces the positive-number message.
pub fn number(body: &Value, field: &str) -> Result<f64, ApiError> {
    body.get(field)
        .and_then(Value::as_f64)
        .ok_or_else(|| ApiError::InvalidInput(format!("{field} must be a positive number")))
}

/// Extracts an optional boolean field, defaulting when absent or null.
pub fn bool_or(body: &Value, field: &str, default: bool) -> Result<bool, ApiError> {
    match body.get(field) {
        None | Some(Value::Null) => Ok(default),
        Some(Value::Bool(flag)) => Ok(*flag),
        Some(_) => Err(ApiError::InvalidInput(format!("{field} must be a boolean"))),
    }
}

/// Extracts a field that must be an array of numbers.
///
/// Emptiness is NOT checked here — the engine owns the non-empty
/// invariant and its error message.
pub fn number_array(body: &Value, field: &str) -> Result<Vec<f64>, ApiError> {
    let invalid = || ApiError::InvalidInput(format!("{field} must be an array of numbers"));

    let items = body.get(field).and_then(Value::as_array).ok_or_else(invalid)?;
    items
        .iter()
        .map(|item| item.as_f64().ok_or_else(invalid))
        .collect()
}

/// Extracts a string field.
pub fn string<'a>(body: &'a Value, field: &str) -> Result<&'a str, ApiError> {
    body.get(field)
        .and_then(Value::as_str)
        .ok_or_else(|| ApiError::InvalidInput(format!("{field} must be a string")))
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    const FIELDS: &[&str] = &["base_amount", "gst_rate"];

    #[test]
    fn test_require_fields_accepts_complete_body() {
        let body = json!({"base_amount": 1000, "gst_rate": 18});
        assert!(require_fields(&body, FIELDS).is_ok());
    }

    #[test]
    fn test_require_fields_lists_all_on_any_absence() {
        let body = json!({"gst_rate": 18});
        let err = require_fields(&body, FIELDS).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Missing required fields: base_amount, gst_rate"
        );
    }

    #[test]
    fn test_require_fields_treats_null_as_absent() {
        let body = json!({"base_amount": null, "gst_rate": 18});
        assert!(require_fields(&body, FIELDS).is_err());
    }

    #[test]
    fn test_require_fields_rejects_non_object_body() {
        assert!(require_fields(&json!([1, 2]), FIELDS).is_err());
        assert!(require_fields(&json!("text"), FIELDS).is_err());
    }

    #[test]
    fn test_number_accepts_integers_and_floats() {
        let body = json!({"base_amount": 1000, "gst_rate": 18.5});
        assert_eq!(number(&body, "base_amount").unwrap(), 1000.0);
        assert_eq!(number(&body, "gst_rate").unwrap(), 18.5);
    }

    #[test]
    fn test_number_rejects_wrong_type_with_positive_number_message() {
        let body = json!({"base_amount": "1000"});
        let err = number(&body, "base_amount").unwrap_err();
        assert_eq!(err.to_string(), "base_amount must be a positive number");
    }

    #[test]
    fn test_bool_or_defaults_and_type_checks() {
        assert!(bool_or(&json!({}), "is_intra_state", true).unwrap());
        assert!(!bool_or(&json!({"is_intra_state": false}), "is_intra_state", true).unwrap());

        let err = bool_or(&json!({"is_intra_state": "yes"}), "is_intra_state", true).unwrap_err();
        assert_eq!(err.to_string(), "is_intra_state must be a boolean");
    }

    #[test]
    fn test_number_array_extracts_and_type_checks() {
        let body = json!({"rates": [5, 18.0, 28]});
        assert_eq!(number_array(&body, "rates").unwrap(), vec![5.0, 18.0, 28.0]);

        let err = number_array(&json!({"rates": "5,18"}), "rates").unwrap_err();
        assert_eq!(err.to_string(), "rates must be an array of numbers");

        let err = number_array(&json!({"rates": [5, "18"]}), "rates").unwrap_err();
        assert_eq!(err.to_string(), "rates must be an array of numbers");
    }

    #[test]
    fn test_number_array_allows_empty() {
        // Emptiness is the engine's invariant, not a parsing concern
        assert_eq!(number_array(&json!({"rates": []}), "rates").unwrap(), Vec::<f64>::new());
    }

    #[test]
    fn test_string_extracts_and_type_checks() {
        assert_eq!(string(&json!({"gstin": "29ABCDE1234F1Z5"}), "gstin").unwrap(), "29ABCDE1234F1Z5");

        let err = string(&json!({"gstin": 42}), "gstin").unwrap_err();
        assert_eq!(err.to_string(), "gstin must be a string");
    }
}
