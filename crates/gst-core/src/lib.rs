//! # gst-core: Pure Tax Arithmetic for the GST Calculator API
//!
//! This crate is the **heart** of the GST Calculator API. It contains all
//! tax arithmetic as pure functions with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    GST Calculator Architecture                          │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    HTTP Clients (JSON)                          │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                    apps/gst-api (Axum)                          │   │
//! │  │    request parsing, error mapping, logging, bootstrap           │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ gst-core (THIS CRATE) ★                         │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐   │   │
//! │  │   │  engine   │  │ rounding  │  │validation │  │   gstin   │   │   │
//! │  │   │  forward  │  │  round2   │  │ positive  │  │  format   │   │   │
//! │  │   │  reverse  │  │           │  │  checks   │  │  states   │   │   │
//! │  │   │ breakdown │  │           │  │           │  │           │   │   │
//! │  │   │  compare  │  │           │  │           │  │           │   │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘   │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO LOGGING • NO SHARED STATE • PURE FUNCTIONS        │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`engine`] - The four tax operations and their result types
//! - [`rounding`] - The single monetary rounding rule ([`rounding::round2`])
//! - [`validation`] - Numeric input validation
//! - [`gstin`] - GSTIN format validation and component extraction
//! - [`error`] - Domain error types
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: Every function is deterministic - same input = same output
//! 2. **No I/O**: Network, file system, and logging are FORBIDDEN here
//! 3. **Rounding Discipline**: Monetary values are rounded to 2 decimals at
//!    each computation boundary; rate fields pass through raw
//! 4. **Explicit Errors**: All errors are typed, never strings or panics
//!
//! ## Example Usage
//!
//! ```rust
//! use gst_core::engine::calculate_gst;
//! use gst_core::validation::validate_positive;
//!
//! validate_positive(1000.0, "base_amount").unwrap();
//! validate_positive(18.0, "gst_rate").unwrap();
//!
//! let result = calculate_gst(1000.0, 18.0);
//! assert_eq!(result.gst_amount, 180.0);
//! assert_eq!(result.total_amount, 1180.0);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod engine;
pub mod error;
pub mod gstin;
pub mod rounding;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================
// These allow users to do `use gst_core::ValidationError` instead of
// `use gst_core::error::ValidationError`

pub use error::ValidationError;
pub use rounding::round2;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Source tag stamped on every computed monetary result.
///
/// ## Why a constant?
/// Downstream consumers aggregating figures from several backends use this
/// tag to identify which service produced a number. Every result struct in
/// [`engine`] carries it.
pub const SOURCE_TAG: &str = "gst_api";
