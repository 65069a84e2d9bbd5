//! # API Error Types
//!
//! Structured error type implementing `axum::response::IntoResponse`.
//! Every error renders as the same [`SubmitResponse`] envelope the success
//! path uses, so clients read `success` and `message` without branching on
//! status. Storage details are logged and never returned.

use agri_core::wire::{DUPLICATE_MESSAGE, SERVER_ERROR_MESSAGE};
use agri_core::{CoreError, ErrorMap, SubmitResponse};
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use thiserror::Error;

use crate::state::StoreError;

/// Message of a server-side validation failure.
pub const VALIDATION_MESSAGE: &str = "Submitted record failed validation";

/// Application-level error type that implements [`IntoResponse`] for Axum.
#[derive(Error, Debug)]
pub enum AppError {
    /// One or more fields failed server-side validation (422).
    #[error("validation failed: {0}")]
    Validation(ErrorMap),

    /// The body could not be decoded as a survey record (422).
    #[error("bad request: {0}")]
    BadRequest(String),

    /// The body exceeds the configured limit (413).
    #[error("payload too large: {0}")]
    PayloadTooLarge(String),

    /// The farmer ID is already stored (409).
    #[error("duplicate farmer ID: {0}")]
    Duplicate(String),

    /// Storage failure (500). Message is logged but not returned to client.
    #[error("internal error: {0}")]
    Internal(String),

    /// A dependency is not available (503).
    #[error("service unavailable: {0}")]
    ServiceUnavailable(String),
}

impl AppError {
    /// Return the HTTP status code and machine-readable error code for this error.
    pub fn status_and_code(&self) -> (StatusCode, &'static str) {
        match self {
            Self::Validation(_) => (StatusCode::UNPROCESSABLE_ENTITY, "VALIDATION_ERROR"),
            Self::BadRequest(_) => (StatusCode::UNPROCESSABLE_ENTITY, "BAD_REQUEST"),
            Self::PayloadTooLarge(_) => (StatusCode::PAYLOAD_TOO_LARGE, "PAYLOAD_TOO_LARGE"),
            Self::Duplicate(_) => (StatusCode::CONFLICT, "DUPLICATE_ENTRY"),
            Self::Internal(_) => (StatusCode::INTERNAL_SERVER_ERROR, "INTERNAL_ERROR"),
            Self::ServiceUnavailable(_) => (StatusCode::SERVICE_UNAVAILABLE, "SERVICE_UNAVAILABLE"),
        }
    }

    /// The envelope sent to the client.
    pub fn envelope(&self) -> SubmitResponse {
        let (_, code) = self.status_and_code();
        match self {
            Self::Validation(errors) => {
                SubmitResponse::failure(code, VALIDATION_MESSAGE).with_errors(errors.clone())
            }
            Self::BadRequest(reason) => {
                SubmitResponse::failure(code, format!("Invalid request body: {reason}"))
            }
            Self::PayloadTooLarge(_) => SubmitResponse::failure(code, "Request body is too large"),
            Self::Duplicate(_) => SubmitResponse::failure(code, DUPLICATE_MESSAGE),
            Self::Internal(_) => SubmitResponse::failure(code, SERVER_ERROR_MESSAGE),
            Self::ServiceUnavailable(_) => SubmitResponse::failure(code, self.to_string()),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, _) = self.status_and_code();

        match &self {
            Self::Internal(_) => tracing::error!(error = %self, "internal server error"),
            Self::Duplicate(_) => tracing::warn!(error = %self, "duplicate submission"),
            Self::ServiceUnavailable(_) => tracing::warn!(error = %self, "service unavailable"),
            _ => {}
        }

        (status, Json(self.envelope())).into_response()
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        if rejection.status() == StatusCode::PAYLOAD_TOO_LARGE {
            return Self::PayloadTooLarge(rejection.body_text());
        }
        Self::BadRequest(rejection.body_text())
    }
}

impl From<CoreError> for AppError {
    fn from(err: CoreError) -> Self {
        Self::BadRequest(err.to_string())
    }
}

impl From<StoreError> for AppError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::DuplicateFarmerId(id) => Self::Duplicate(id),
        }
    }
}
