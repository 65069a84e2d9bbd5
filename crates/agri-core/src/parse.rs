//! # Semantic Field Parsers
//!
//! The record stores strings; these functions give them meaning. Each parser
//! returns either the typed value or a [`FieldFault`] naming what is wrong,
//! so the validator can pick a message without re-inspecting the input.
//!
//! | Parser               | Accepts                          | Used for                  |
//! |----------------------|----------------------------------|---------------------------|
//! | [`digits`]           | exactly N ASCII digits           | contact number            |
//! | [`decimal`]          | `12`, `12.5`, `.5`, `12.`        | land area, quantities     |
//! | [`iso_date`]         | `YYYY-MM-DD`, a real date        | sowing and harvest dates  |
//! | [`numeric_keystroke`]| `^\d*\.?\d*$` (empty included)   | on-change input filtering |

use chrono::NaiveDate;
use thiserror::Error;

/// Why a field value failed to parse.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldFault {
    /// The value is empty (or whitespace only, for trimmed parsers).
    #[error("value is empty")]
    Empty,

    /// A character other than an ASCII digit was found.
    #[error("value contains a non-digit character")]
    NonDigit,

    /// The digit string has the wrong length.
    #[error("expected {expected} digits, got {actual}")]
    WrongLength {
        /// Required length.
        expected: usize,
        /// Observed length.
        actual: usize,
    },

    /// The value is not a non-negative decimal number.
    #[error("value is not a decimal number")]
    NotDecimal,

    /// The value is not a `YYYY-MM-DD` calendar date.
    #[error("value is not a YYYY-MM-DD date")]
    BadDate,
}

/// Parse a string of exactly `len` ASCII digits.
///
/// No trimming: surrounding whitespace is a non-digit.
pub fn digits(s: &str, len: usize) -> Result<&str, FieldFault> {
    if s.is_empty() {
        return Err(FieldFault::Empty);
    }
    if !s.bytes().all(|b| b.is_ascii_digit()) {
        return Err(FieldFault::NonDigit);
    }
    if s.len() != len {
        return Err(FieldFault::WrongLength {
            expected: len,
            actual: s.len(),
        });
    }
    Ok(s)
}

/// Parse a non-negative decimal such as `3`, `2.75`, `.5` or `4.`.
///
/// Leading and trailing whitespace is ignored. Signs, exponents, grouping
/// separators and `NaN`/`inf` spellings are rejected.
pub fn decimal(s: &str) -> Result<f64, FieldFault> {
    let s = s.trim();
    if s.is_empty() {
        return Err(FieldFault::Empty);
    }
    if !numeric_keystroke(s) || !s.bytes().any(|b| b.is_ascii_digit()) {
        return Err(FieldFault::NotDecimal);
    }
    s.parse::<f64>().map_err(|_| FieldFault::NotDecimal)
}

/// Parse an ISO calendar date in the exact `YYYY-MM-DD` shape.
pub fn iso_date(s: &str) -> Result<NaiveDate, FieldFault> {
    if s.is_empty() {
        return Err(FieldFault::Empty);
    }
    let bytes = s.as_bytes();
    let shaped = bytes.len() == 10
        && bytes.iter().enumerate().all(|(i, b)| match i {
            4 | 7 => *b == b'-',
            _ => b.is_ascii_digit(),
        });
    if !shaped {
        return Err(FieldFault::BadDate);
    }
    NaiveDate::parse_from_str(s, "%Y-%m-%d").map_err(|_| FieldFault::BadDate)
}

/// The on-change filter: digits with at most one decimal point.
///
/// Matches `^\d*\.?\d*$`, so the empty string passes (clearing a field is
/// always allowed).
pub fn numeric_keystroke(s: &str) -> bool {
    let mut seen_point = false;
    for b in s.bytes() {
        match b {
            b'0'..=b'9' => {}
            b'.' if !seen_point => seen_point = true,
            _ => return false,
        }
    }
    true
}

/// Whole days from `from` to `to` (negative when `to` is earlier).
pub fn days_between(from: NaiveDate, to: NaiveDate) -> i64 {
    (to - from).num_days()
}
