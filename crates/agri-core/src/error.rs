//! # Error Types
//!
//! Errors raised when converting untrusted input (wire names, step numbers,
//! JSON documents) into the core vocabulary. Field-level validation faults
//! are not errors in this sense; see [`crate::parse::FieldFault`].

use thiserror::Error;

/// Top-level error type for `agri-core` conversions.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CoreError {
    /// The string is not one of the 14 survey field names.
    #[error("unknown field name: {0:?}")]
    UnknownField(String),

    /// The step number is outside 1..=3.
    #[error("step must be 1, 2 or 3, got {0}")]
    StepOutOfRange(u8),

    /// A record document could not be decoded.
    #[error("malformed record: {0}")]
    MalformedRecord(String),
}
