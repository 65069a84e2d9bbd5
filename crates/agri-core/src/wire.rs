//! # Submission Wire Envelope
//!
//! Every response from `POST /api/submit`, successful or not, is a
//! `SubmitResponse`. The form only needs `success` and `message`; `code` and
//! `errors` give programmatic clients the failure class and the per-field
//! messages of a server-side validation failure.

use serde::{Deserialize, Serialize};

use crate::errors::ErrorMap;

/// Message returned when a record is stored.
pub const SAVED_MESSAGE: &str = "Form data saved successfully!";

/// Message returned when the farmer ID is already stored.
pub const DUPLICATE_MESSAGE: &str = "Duplicate entry: Farmer ID already exists.";

/// Message returned for any other storage failure.
pub const SERVER_ERROR_MESSAGE: &str = "Server error. Please try again later.";

/// The `{ success, message }` response envelope.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmitResponse {
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    /// Machine-readable failure code (e.g. `DUPLICATE_ENTRY`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
    /// Per-field messages from server-side validation.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub errors: Option<ErrorMap>,
}

impl SubmitResponse {
    /// A successful response carrying [`SAVED_MESSAGE`].
    pub fn saved() -> Self {
        Self {
            success: true,
            message: Some(SAVED_MESSAGE.to_string()),
            code: None,
            errors: None,
        }
    }

    /// A failed response.
    pub fn failure(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: Some(message.into()),
            code: Some(code.into()),
            errors: None,
        }
    }

    /// Attach per-field messages.
    pub fn with_errors(mut self, errors: ErrorMap) -> Self {
        self.errors = Some(errors);
        self
    }

    /// The message to show a user, falling back to a generic one.
    pub fn display_message(&self) -> &str {
        match (&self.message, self.success) {
            (Some(m), _) => m,
            (None, true) => SAVED_MESSAGE,
            (None, false) => "Unknown error",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::field::FieldName;

    #[test]
    fn saved_serializes_minimally() {
        let json = serde_json::to_string(&SubmitResponse::saved()).unwrap();
        assert_eq!(json, r#"{"success":true,"message":"Form data saved successfully!"}"#);
    }

    #[test]
    fn failure_with_errors() {
        let mut errors = ErrorMap::new();
        errors.insert(FieldName::FarmerId, "Farmer ID is required");
        let resp = SubmitResponse::failure("VALIDATION_ERROR", "invalid").with_errors(errors);
        let json = serde_json::to_value(&resp).unwrap();
        assert_eq!(json["success"], false);
        assert_eq!(json["code"], "VALIDATION_ERROR");
        assert_eq!(json["errors"]["farmerId"], "Farmer ID is required");
    }

    #[test]
    fn decodes_bare_envelope() {
        let resp: SubmitResponse = serde_json::from_str(r#"{"success":false}"#).unwrap();
        assert!(!resp.success);
        assert_eq!(resp.display_message(), "Unknown error");
    }
}
