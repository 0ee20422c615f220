//! # GSTIN Validation Module
//!
//! Format validation and component extraction for GSTIN identifiers
//! (Goods and Services Tax Identification Numbers).
//!
//! ## GSTIN Anatomy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                     2 9 A B C D E 1 2 3 4 F 1 Z 5                       │
//! │                     ─┬─ ────────┬──────── ┬ ┬ ┬ ┬                       │
//! │                      │          │         │ │ │ └─ checksum character   │
//! │                      │          │         │ │ └─── literal 'Z'          │
//! │                      │          │         │ └───── default letter       │
//! │                      │          │         └─────── entity number        │
//! │                      │          └───────────────── PAN (5L + 4D + 1L)   │
//! │                      └──────────────────────────── state code (01-38..) │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! This is a format-only check: the checksum character's class is verified
//! but no checksum arithmetic is performed, and no registry lookup happens.
//! Validation failures are data, not errors - an ill-formed GSTIN produces
//! a `valid: false` result, not a `Result::Err`.

use serde::Serialize;

/// Human-readable description of the expected GSTIN layout, returned
/// alongside format failures.
pub const EXPECTED_FORMAT: &str =
    "2-digit state code + 5 letters + 4 digits + 1 letter + 1 alphanumeric + Z + 1 alphanumeric";

// =============================================================================
// Result Types
// =============================================================================

/// Outcome of a GSTIN format validation.
///
/// Well-formed input populates `gstin` and `components`; ill-formed input
/// populates `error` (and `expected_format` for layout failures). Absent
/// fields are omitted from the serialized JSON.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GstinValidation {
    pub valid: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gstin: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub components: Option<GstinComponents>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expected_format: Option<&'static str>,
}

/// The positional components of a well-formed GSTIN.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GstinComponents {
    pub state_code: String,
    /// Resolved from the published state-code table; `None` for codes the
    /// table does not list.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state_name: Option<&'static str>,
    pub pan_number: String,
    pub entity_number: char,
    pub default_letter: char,
    pub checksum: char,
}

impl GstinValidation {
    fn invalid(error: &str, expected_format: Option<&'static str>) -> Self {
        GstinValidation {
            valid: false,
            gstin: None,
            components: None,
            error: Some(error.to_string()),
            expected_format,
        }
    }
}

// =============================================================================
// State Code Table
// =============================================================================

/// Resolves a 2-digit GST state code to its state or territory name.
///
/// Covers the published code list, including the special codes 97
/// (Other Territory) and 99 (Centre Jurisdiction).
pub fn state_name(code: &str) -> Option<&'static str> {
    let name = match code {
        "01" => "Jammu & Kashmir",
        "02" => "Himachal Pradesh",
        "03" => "Punjab",
        "04" => "Chandigarh",
        "05" => "Uttarakhand",
        "06" => "Haryana",
        "07" => "Delhi",
        "08" => "Rajasthan",
        "09" => "Uttar Pradesh",
        "10" => "Bihar",
        "11" => "Sikkim",
        "12" => "Arunachal Pradesh",
        "13" => "Nagaland",
        "14" => "Manipur",
        "15" => "Mizoram",
        "16" => "Tripura",
        "17" => "Meghalaya",
        "18" => "Assam",
        "19" => "West Bengal",
        "20" => "Jharkhand",
        "21" => "Odisha",
        "22" => "Chhattisgarh",
        "23" => "Madhya Pradesh",
        "24" => "Gujarat",
        "25" => "Daman & Diu",
        "26" => "Dadra & Nagar Haveli",
        "27" => "Maharashtra",
        "28" => "Andhra Pradesh",
        "29" => "Karnataka",
        "30" => "Goa",
        "31" => "Lakshadweep",
        "32" => "Kerala",
        "33" => "Tamil Nadu",
        "34" => "Puducherry",
        "35" => "Andaman & Nicobar",
        "36" => "Telangana",
        "37" => "Andhra Pradesh (New)",
        "38" => "Ladakh",
        "97" => "Other Territory",
        "99" => "Centre Jurisdiction",
        _ => return None,
    };
    Some(name)
}

// =============================================================================
// Validation
// =============================================================================

/// Validates a GSTIN's format and extracts its components.
///
/// Input is trimmed and uppercased before checking, so `"29abcde1234f1z5"`
/// validates the same as its canonical form.
///
/// ## Rules
/// - Exactly 15 ASCII characters
/// - Positions 1-2: digits (state code)
/// - Positions 3-7: uppercase letters (PAN holder name part)
/// - Positions 8-11: digits (PAN number part)
/// - Position 12: uppercase letter (PAN check letter)
/// - Position 13: letter or digit (entity number)
/// - Position 14: the literal `Z`
/// - Position 15: letter or digit (checksum character)
///
/// ## Example
/// ```rust
/// use gst_core::gstin::validate_gstin;
///
/// let result = validate_gstin("29ABCDE1234F1Z5");
/// assert!(result.valid);
/// assert_eq!(result.components.unwrap().state_name, Some("Karnataka"));
///
/// assert!(!validate_gstin("not-a-gstin").valid);
/// ```
pub fn validate_gstin(input: &str) -> GstinValidation {
    let gstin = input.trim().to_uppercase();

    if gstin.is_empty() {
        return GstinValidation::invalid("GSTIN is required", None);
    }

    let chars: Vec<char> = gstin.chars().collect();
    if chars.len() != 15 || !well_formed(&chars) {
        return GstinValidation::invalid("Invalid GSTIN format", Some(EXPECTED_FORMAT));
    }

    let state_code: String = gstin[..2].to_string();
    let components = GstinComponents {
        state_name: state_name(&state_code),
        state_code,
        pan_number: gstin[2..12].to_string(),
        entity_number: chars[12],
        default_letter: chars[13],
        checksum: chars[14],
    };

    GstinValidation {
        valid: true,
        gstin: Some(gstin),
        components: Some(components),
        error: None,
        expected_format: None,
    }
}

/// Positional character-class check over an exactly-15-char candidate.
fn well_formed(chars: &[char]) -> bool {
    let digit = |c: char| c.is_ascii_digit();
    let letter = |c: char| c.is_ascii_uppercase();
    let alnum = |c: char| c.is_ascii_uppercase() || c.is_ascii_digit();

    chars[0..2].iter().all(|&c| digit(c))
        && chars[2..7].iter().all(|&c| letter(c))
        && chars[7..11].iter().all(|&c| digit(c))
        && letter(chars[11])
        && alnum(chars[12])
        && chars[13] == 'Z'
        && alnum(chars[14])
}

// =============================================================================
// Unit Tests
// =============================================================================
