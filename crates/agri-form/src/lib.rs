//! # agri-form: Multi-Step Survey Form
//!
//! The behavior of the three-step farm input survey, independent of any
//! rendering layer:
//!
//! - [`validator`]: per-step field rules producing an [`ErrorMap`].
//! - [`controller`]: the form as a state machine. Transitions are pure
//!   functions on [`FormState`]; [`FormController`] owns a state and a
//!   gateway and performs the one asynchronous step, submission.
//! - [`gateway`]: the [`SubmissionGateway`] seam. `agri-client` provides the
//!   HTTP implementation; tests provide scripted ones.
//!
//! ## Crate Policy
//!
//! - Depends only on `agri-core` internally.
//! - No I/O apart from the gateway call.
//!
//! [`ErrorMap`]: agri_core::ErrorMap

pub mod controller;
pub mod gateway;
pub mod validator;

pub use controller::{FormController, FormError, FormPhase, FormState, Notice, SubmitStart, SubmitStatus};
pub use gateway::{SubmissionError, SubmissionGateway, TRANSPORT_FAILURE_MESSAGE};
pub use validator::{first_invalid_step, validate, validate_all};
