//! # Validation Module
//!
//! Numeric input validation for the tax engine.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: HTTP request parsing (gst-api)                                │
//! │  ├── Presence check  → "Missing required fields: ..."                   │
//! │  └── Type check      → "<field> must be a positive number"              │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: THIS MODULE                                                   │
//! │  └── Sign check      → "<field> must be a positive number"              │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 3: Tax engine (arithmetic on validated values only)              │
//! │                                                                         │
//! │  A wrong JSON type and a negative number produce the SAME message:      │
//! │  clients see one rule, "must be a positive number".                     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use gst_core::validation::validate_positive;
//!
//! assert!(validate_positive(1000.0, "base_amount").is_ok());
//! assert!(validate_positive(0.0, "base_amount").is_ok());     // zero allowed
//! assert!(validate_positive(-1.0, "base_amount").is_err());
//! ```

use crate::error::{ValidationError, ValidationResult};

/// Validates that a numeric field is non-negative.
///
/// ## Rules
/// - Must be finite (NaN and infinities are rejected; JSON cannot encode
///   them, but the guard keeps the engine total)
/// - Must be >= 0; zero is allowed (0% rate, free item)
///
/// Called once per numeric field before any arithmetic runs. No side
/// effects beyond returning the error.
pub fn validate_positive(value: f64, field: &str) -> ValidationResult<()> {
    if !value.is_finite() || value < 0.0 {
        return Err(ValidationError::NotPositive {
            field: field.to_string(),
        });
    }

    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================
