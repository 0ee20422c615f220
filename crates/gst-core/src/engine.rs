//! # Tax Engine
//!
//! The four GST operations and their result types.
//!
//! ## Operations
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                          Tax Engine                                     │
//! │                                                                         │
//! │  calculate_gst(base, rate)      base ──► gst ──► total                  │
//! │  reverse_gst(total, rate)       total ──► base ──► gst                  │
//! │  gst_breakdown(base, rate, ..)  forward + CGST/SGST or IGST split       │
//! │  compare_rates(base, rates)     forward per rate, sorted ascending      │
//! │                                                                         │
//! │  All four are pure: no I/O, no logging, no shared state.                │
//! │  Inputs are validated by the caller (see `validation`); the engine      │
//! │  only enforces the non-empty invariant on `rates`.                      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Rounding Contract
//!
//! Monetary fields are rounded with [`round2`] at each computation boundary.
//! Rate fields (`gst_rate`, `cgst_rate`, ...) pass through raw. Reverse
//! extraction derives `gst_amount` from the already-rounded base; the small
//! compounding error this produces is contractual output (see [`reverse_gst`]).

use serde::Serialize;

use crate::error::{ValidationError, ValidationResult};
use crate::rounding::round2;
use crate::SOURCE_TAG;

// =============================================================================
// Result Types
// =============================================================================

/// Result of a forward GST computation.
///
/// `base_amount` is re-rounded to 2 decimals in the result; `gst_rate`
/// passes through exactly as supplied.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Calculation {
    pub base_amount: f64,
    pub gst_rate: f64,
    pub gst_amount: f64,
    pub total_amount: f64,
    /// Backend identification tag (always [`SOURCE_TAG`]).
    pub source: &'static str,
}

/// Result of a reverse GST extraction (base recovered from total).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReverseCalculation {
    pub total_amount: f64,
    pub gst_rate: f64,
    pub base_amount: f64,
    pub gst_amount: f64,
    pub source: &'static str,
}

/// The CGST/SGST vs IGST split of a GST amount.
///
/// Serialized with a `type` tag of `"Intra-State"` or `"Inter-State"`.
/// Both variants carry the full field set; the inapplicable side is zeroed
/// so consumers always see the same shape.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type")]
pub enum TaxSplit {
    /// Same-state transaction: tax splits into equal CGST and SGST halves.
    #[serde(rename = "Intra-State")]
    IntraState {
        cgst: f64,
        sgst: f64,
        igst: f64,
        cgst_rate: f64,
        sgst_rate: f64,
        igst_rate: f64,
    },
    /// Cross-state transaction: the whole tax is charged as IGST.
    #[serde(rename = "Inter-State")]
    InterState {
        cgst: f64,
        sgst: f64,
        igst: f64,
        cgst_rate: f64,
        sgst_rate: f64,
        igst_rate: f64,
    },
}

/// Forward computation plus its tax-component split.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Breakdown {
    #[serde(flatten)]
    pub calculation: Calculation,
    pub breakdown: TaxSplit,
}

/// One entry of a multi-rate comparison.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RateComparison {
    pub rate: f64,
    #[serde(flatten)]
    pub calculation: Calculation,
    /// `total_amount` minus the lowest-rate entry's total, rounded.
    /// Always `0.0` for the first (lowest-rate) entry.
    pub difference_from_lowest: f64,
}

/// Result of comparing one base amount across several GST rates.
///
/// Entries are sorted ascending by rate regardless of input order. The
/// envelope carries no `source` tag; each entry does.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Comparison {
    pub base_amount: f64,
    pub comparisons: Vec<RateComparison>,
    pub lowest_rate: f64,
    pub highest_rate: f64,
    pub max_difference: f64,
}

// =============================================================================
// Operations
// =============================================================================

/// Computes GST and total for a base amount.
///
/// ## Formula
/// ```text
/// gst_amount   = round2(base_amount * gst_rate / 100)
/// total_amount = round2(base_amount + gst_amount)
/// ```
///
/// ## Example
/// ```rust
/// use gst_core::engine::calculate_gst;
///
/// let result = calculate_gst(1000.0, 18.0);
/// assert_eq!(result.gst_amount, 180.0);
/// assert_eq!(result.total_amount, 1180.0);
/// ```
pub fn calculate_gst(base_amount: f64, gst_rate: f64) -> Calculation {
    let gst_amount = round2(base_amount * gst_rate / 100.0);
    let total_amount = round2(base_amount + gst_amount);

    Calculation {
        base_amount: round2(base_amount),
        gst_rate,
        gst_amount,
        total_amount,
        source: SOURCE_TAG,
    }
}

/// Recovers the base amount from a GST-inclusive total.
///
/// ## Formula
/// ```text
/// base_amount = round2(total_amount / (1 + gst_rate/100))
/// gst_amount  = round2(total_amount - base_amount)
/// ```
///
/// `gst_amount` is derived from the already-rounded base, NOT from the
/// algebraically independent `total * rate / (100 + rate)`. The two can
/// disagree by up to 0.01; the rounded-base order is the contract and
/// must not be "corrected".
pub fn reverse_gst(total_amount: f64, gst_rate: f64) -> ReverseCalculation {
    let base_amount = round2(total_amount / (1.0 + gst_rate / 100.0));
    let gst_amount = round2(total_amount - base_amount);

    ReverseCalculation {
        total_amount: round2(total_amount),
        gst_rate,
        base_amount,
        gst_amount,
        source: SOURCE_TAG,
    }
}

/// Computes GST with its CGST/SGST or IGST component split.
///
/// Intra-state transactions split the tax into equal CGST and SGST halves
/// (each `round2(gst_amount / 2)`, rounded independently); inter-state
/// transactions charge the whole amount as IGST. The rate halves are NOT
/// rounded - only monetary amounts are.
pub fn gst_breakdown(base_amount: f64, gst_rate: f64, is_intra_state: bool) -> Breakdown {
    let calculation = calculate_gst(base_amount, gst_rate);

    let breakdown = if is_intra_state {
        let half = round2(calculation.gst_amount / 2.0);
        TaxSplit::IntraState {
            cgst: half,
            sgst: half,
            igst: 0.0,
            cgst_rate: gst_rate / 2.0,
            sgst_rate: gst_rate / 2.0,
            igst_rate: 0.0,
        }
    } else {
        TaxSplit::InterState {
            cgst: 0.0,
            sgst: 0.0,
            igst: calculation.gst_amount,
            cgst_rate: 0.0,
            sgst_rate: 0.0,
            igst_rate: gst_rate,
        }
    };

    Breakdown {
        calculation,
        breakdown,
    }
}

/// Compares one base amount across several GST rates.
///
/// Each rate gets a forward computation; entries are sorted ascending by
/// rate, then annotated with `difference_from_lowest` relative to the
/// lowest-rate entry's total.
///
/// ## Errors
/// Fails with [`ValidationError::EmptyRates`] when `rates` is empty.
/// Individual rate values are not re-validated here; the caller decides
/// what rates are acceptable.
pub fn compare_rates(base_amount: f64, rates: &[f64]) -> ValidationResult<Comparison> {
    if rates.is_empty() {
        return Err(ValidationError::EmptyRates);
    }

    let mut comparisons: Vec<RateComparison> = rates
        .iter()
        .map(|&rate| RateComparison {
            rate,
            calculation: calculate_gst(base_amount, rate),
            difference_from_lowest: 0.0,
        })
        .collect();

    comparisons.sort_by(|a, b| a.rate.total_cmp(&b.rate));

    let lowest_total = comparisons[0].calculation.total_amount;
    for comp in &mut comparisons {
        comp.difference_from_lowest = round2(comp.calculation.total_amount - lowest_total);
    }

    let last = comparisons.len() - 1;
    Ok(Comparison {
        base_amount,
        lowest_rate: comparisons[0].rate,
        highest_rate: comparisons[last].rate,
        max_difference: round2(comparisons[last].calculation.total_amount - lowest_total),
        comparisons,
    })
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_calculate_gst_reference_scenario() {
        // 1000 at 18% -> gst 180, total 1180
        let result = calculate_gst(1000.0, 18.0);
        assert_eq!(result.base_amount, 1000.0);
        assert_eq!(result.gst_rate, 18.0);
        assert_eq!(result.gst_amount, 180.0);
        assert_eq!(result.total_amount, 1180.0);
        assert_eq!(result.source, "gst_api");
    }

    #[test]
    fn test_calculate_gst_zero_rate() {
        let result = calculate_gst(500.0, 0.0);
        assert_eq!(result.gst_amount, 0.0);
        assert_eq!(result.total_amount, 500.0);
    }

    #[test]
    fn test_calculate_gst_rounds_base_and_amounts() {
        // 99.999 at 18%: gst = round2(17.99982) = 18.00
        let result = calculate_gst(99.999, 18.0);
        assert_eq!(result.base_amount, 100.0);
        assert_eq!(result.gst_amount, 18.0);
        // total = round2(99.999 + 18.00) = 118.00 (unrounded base feeds the sum)
        assert_eq!(result.total_amount, 118.0);
    }

    #[test]
    fn test_reverse_gst_reference_scenario() {
        // 11800 at 18% -> base 10000, gst 1800
        let result = reverse_gst(11800.0, 18.0);
        assert_eq!(result.total_amount, 11800.0);
        assert_eq!(result.base_amount, 10000.0);
        assert_eq!(result.gst_amount, 1800.0);
        assert_eq!(result.source, "gst_api");
    }

    #[test]
    fn test_reverse_gst_derives_gst_from_rounded_base() {
        // 100 / 1.18 = 84.7457... -> base 84.75, gst = 100 - 84.75 = 15.25
        let result = reverse_gst(100.0, 18.0);
        assert_eq!(result.base_amount, 84.75);
        assert_eq!(result.gst_amount, round2(100.0 - result.base_amount));
        assert_eq!(result.gst_amount, 15.25);
    }

    #[test]
    fn test_forward_reverse_round_trip() {
        let forward = calculate_gst(1000.0, 18.0);
        let back = reverse_gst(forward.total_amount, 18.0);
        assert!((back.base_amount - 1000.0).abs() <= 0.01);

        let forward = calculate_gst(123.45, 5.0);
        let back = reverse_gst(forward.total_amount, 5.0);
        assert!((back.base_amount - 123.45).abs() <= 0.01);
    }

    #[test]
    fn test_breakdown_intra_state_halves() {
        let result = gst_breakdown(1000.0, 18.0, true);
        assert_eq!(result.calculation.gst_amount, 180.0);
        match result.breakdown {
            TaxSplit::IntraState {
                cgst,
                sgst,
                igst,
                cgst_rate,
                sgst_rate,
                igst_rate,
            } => {
                assert_eq!(cgst, 90.0);
                assert_eq!(sgst, 90.0);
                assert_eq!(igst, 0.0);
                assert_eq!(cgst_rate, 9.0);
                assert_eq!(sgst_rate, 9.0);
                assert_eq!(igst_rate, 0.0);
            }
            TaxSplit::InterState { .. } => panic!("expected intra-state split"),
        }
    }

    #[test]
    fn test_breakdown_intra_state_halves_sum_to_gst() {
        // 100 at 15% -> gst 15.00, halves 7.50 each
        let result = gst_breakdown(100.0, 15.0, true);
        match result.breakdown {
            TaxSplit::IntraState { cgst, sgst, .. } => {
                assert_eq!(cgst, 7.5);
                assert_eq!(sgst, 7.5);
                assert!((cgst + sgst - result.calculation.gst_amount).abs() <= 0.01);
            }
            TaxSplit::InterState { .. } => panic!("expected intra-state split"),
        }
    }

    #[test]
    fn test_breakdown_inter_state_is_all_igst() {
        let result = gst_breakdown(1000.0, 18.0, false);
        match result.breakdown {
            TaxSplit::InterState {
                cgst,
                sgst,
                igst,
                cgst_rate,
                sgst_rate,
                igst_rate,
            } => {
                assert_eq!(cgst, 0.0);
                assert_eq!(sgst, 0.0);
                assert_eq!(igst, 180.0);
                assert_eq!(cgst_rate, 0.0);
                assert_eq!(sgst_rate, 0.0);
                assert_eq!(igst_rate, 18.0);
            }
            TaxSplit::IntraState { .. } => panic!("expected inter-state split"),
        }
    }

    #[test]
    fn test_breakdown_rate_halves_are_not_rounded() {
        // 5% splits into 2.5% halves; the rate fields carry the raw halves
        let result = gst_breakdown(100.0, 5.0, true);
        match result.breakdown {
            TaxSplit::IntraState {
                cgst_rate,
                sgst_rate,
                ..
            } => {
                assert_eq!(cgst_rate, 2.5);
                assert_eq!(sgst_rate, 2.5);
            }
            TaxSplit::InterState { .. } => panic!("expected intra-state split"),
        }
    }

    #[test]
    fn test_breakdown_serializes_with_type_tag() {
        let value = serde_json::to_value(gst_breakdown(1000.0, 18.0, false)).unwrap();
        // Flattened forward-calculation fields sit beside the breakdown object
        assert_eq!(value["gst_amount"], 180.0);
        assert_eq!(value["source"], "gst_api");
        assert_eq!(value["breakdown"]["type"], "Inter-State");
        assert_eq!(value["breakdown"]["igst"], 180.0);
        assert_eq!(value["breakdown"]["cgst"], 0.0);
    }

    #[test]
    fn test_compare_rates_sorts_and_annotates() {
        // 500 across [28, 5, 18] -> entries ascending, diffs vs 5% total
        let result = compare_rates(500.0, &[28.0, 5.0, 18.0]).unwrap();

        let rates: Vec<f64> = result.comparisons.iter().map(|c| c.rate).collect();
        assert_eq!(rates, vec![5.0, 18.0, 28.0]);

        assert_eq!(result.comparisons[0].difference_from_lowest, 0.0);
        assert_eq!(result.comparisons[1].difference_from_lowest, 65.0);
        assert_eq!(result.comparisons[2].difference_from_lowest, 115.0);

        assert_eq!(result.lowest_rate, 5.0);
        assert_eq!(result.highest_rate, 28.0);
        assert_eq!(result.max_difference, 115.0);
        assert_eq!(result.base_amount, 500.0);
    }

    #[test]
    fn test_compare_rates_single_rate() {
        let result = compare_rates(1000.0, &[18.0]).unwrap();
        assert_eq!(result.comparisons.len(), 1);
        assert_eq!(result.lowest_rate, 18.0);
        assert_eq!(result.highest_rate, 18.0);
        assert_eq!(result.max_difference, 0.0);
    }

    #[test]
    fn test_compare_rates_rejects_empty() {
        let err = compare_rates(1000.0, &[]).unwrap_err();
        assert_eq!(err, ValidationError::EmptyRates);
    }

    #[test]
    fn test_compare_rates_entries_carry_source() {
        let result = compare_rates(500.0, &[5.0, 18.0]).unwrap();
        for comp in &result.comparisons {
            assert_eq!(comp.calculation.source, "gst_api");
        }
        // The envelope itself has no source tag
        let value = serde_json::to_value(&result).unwrap();
        assert!(value.get("source").is_none());
        assert_eq!(value["comparisons"][0]["source"], "gst_api");
        assert_eq!(value["comparisons"][0]["rate"], 5.0);
    }
}
