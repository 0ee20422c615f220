//! # Error Types
//!
//! Domain-specific error types for gst-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  gst-core errors (this file)                                            │
//! │  └── ValidationError  - Input validation failures                       │
//! │                                                                         │
//! │  gst-api errors (in app)                                                │
//! │  └── ApiError         - What HTTP clients see (serialized to JSON)      │
//! │                                                                         │
//! │  Flow: ValidationError → ApiError → {"error": "..."} + HTTP 400         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Include the offending field name in the message
//! 3. Errors are enum variants, never String

use thiserror::Error;

/// Input validation errors.
///
/// These errors occur when request values fail the numeric guard checks.
/// Every message is client-facing: the HTTP layer forwards it verbatim
/// inside an `{"error": "..."}` body.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    /// Value is negative or not a finite number. Zero is allowed.
    #[error("{field} must be a positive number")]
    NotPositive { field: String },

    /// `compare_rates` was called with no rates to compare.
    #[error("Rates list cannot be empty")]
    EmptyRates,
}

/// Convenience type alias for Results with ValidationError.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = ValidationError::NotPositive {
            field: "base_amount".to_string(),
        };
        assert_eq!(err.to_string(), "base_amount must be a positive number");

        assert_eq!(
            ValidationError::EmptyRates.to_string(),
            "Rates list cannot be empty"
        );
    }
}
