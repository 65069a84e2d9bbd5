//! # Submission Gateway
//!
//! The seam between the form and whatever persists a finished record. The
//! form calls [`SubmissionGateway::submit`] exactly once per accepted submit
//! and awaits it; that await is the only suspension point of the form.
//!
//! ## Outcomes
//!
//! - `Ok(SubmitResponse { success: true, .. })`: stored.
//! - `Ok(SubmitResponse { success: false, message, .. })`: the server
//!   refused (duplicate farmer ID, server-side validation, storage error).
//! - `Err(SubmissionError)`: the request never produced a readable answer.
//!
//! The form treats both failure shapes the same way: the record is retained
//! and a message is shown.

use std::future::Future;
use std::sync::Arc;

use agri_core::{FarmRecord, SubmitResponse};
use thiserror::Error;

/// Message shown when the gateway fails below the business layer.
pub const TRANSPORT_FAILURE_MESSAGE: &str =
    "An error occurred while saving data. Please try again.";

/// Transport-level submission failure.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SubmissionError {
    /// The request could not be sent or no response arrived.
    #[error("transport error: {0}")]
    Transport(String),

    /// A response arrived but was not a submission envelope.
    #[error("unreadable response (HTTP {status}): {reason}")]
    Decode {
        /// HTTP status of the response.
        status: u16,
        /// Why decoding failed.
        reason: String,
    },

    /// The gateway is misconfigured (e.g. an invalid endpoint URL).
    #[error("gateway misconfigured: {0}")]
    Config(String),
}

/// Accepts finished records for persistence.
///
/// Implementations must be `Send + Sync` so a single gateway can be shared
/// behind an `Arc`.
pub trait SubmissionGateway: Send + Sync {
    /// Persist `record`.
    fn submit(
        &self,
        record: &FarmRecord,
    ) -> impl Future<Output = Result<SubmitResponse, SubmissionError>> + Send;
}

impl<G: SubmissionGateway> SubmissionGateway for Arc<G> {
    fn submit(
        &self,
        record: &FarmRecord,
    ) -> impl Future<Output = Result<SubmitResponse, SubmissionError>> + Send {
        (**self).submit(record)
    }
}

impl<G: SubmissionGateway> SubmissionGateway for &G {
    fn submit(
        &self,
        record: &FarmRecord,
    ) -> impl Future<Output = Result<SubmitResponse, SubmissionError>> + Send {
        (**self).submit(record)
    }
}
