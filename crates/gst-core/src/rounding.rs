//! # Rounding Module
//!
//! The single monetary rounding rule of the system.
//!
//! ## Why One Function?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  ROUNDING DISCIPLINE                                                    │
//! │                                                                         │
//! │  Monetary values are rounded to 2 decimal places at EACH computation    │
//! │  boundary, not just at final output:                                    │
//! │                                                                         │
//! │    gst_amount   = round2(base * rate / 100)                             │
//! │    total_amount = round2(base + gst_amount)                             │
//! │                                                                         │
//! │  Reverse extraction derives gst from the ALREADY-ROUNDED base, so a     │
//! │  compounding error of up to 0.01 is expected output, not a bug:         │
//! │                                                                         │
//! │    base = round2(total / (1 + rate/100))                                │
//! │    gst  = round2(total - base)        ← uses the rounded base           │
//! │                                                                         │
//! │  Rate fields (gst_rate, cgst_rate, ...) are NEVER rounded.              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

/// Rounds a monetary value to exactly 2 decimal places.
///
/// Half-way values round away from zero (`f64::round` semantics).
///
/// ## Example
/// ```rust
/// use gst_core::rounding::round2;
///
/// assert_eq!(round2(180.0), 180.0);
/// assert_eq!(round2(84.74576271), 84.75);
/// assert_eq!(round2(0.125), 0.13);
/// ```
#[inline]
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round2_exact_values_unchanged() {
        assert_eq!(round2(0.0), 0.0);
        assert_eq!(round2(1180.0), 1180.0);
        assert_eq!(round2(10.99), 10.99);
    }

    #[test]
    fn test_round2_truncates_to_two_places() {
        assert_eq!(round2(84.74576271), 84.75);
        assert_eq!(round2(15.254237), 15.25);
        assert_eq!(round2(0.001), 0.0);
    }

    #[test]
    fn test_round2_negative_values() {
        // Negative values never survive validation, but the rounding rule
        // itself is sign-symmetric.
        assert_eq!(round2(-84.745), -84.75);
        assert_eq!(round2(-0.004), 0.0);
    }
}
