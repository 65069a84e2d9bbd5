//! # Form State Machine
//!
//! Models the survey form as a value that moves between steps.
//!
//! ## States
//!
//! ```text
//!            next (valid)        next (valid)        submit (valid)
//!   Step 1 ───────────────▶ Step 2 ───────────────▶ Step 3 ─────────────▶ Submitting
//!     ▲   ◀─────────────────   ▲   ◀───────────────   ▲                       │
//!     │         back           │        back          │   gateway failure     │
//!     │                        │                      └───────────────────────┤
//!     └───────────────────────────────────────────────────────────────────────┘
//!                         gateway success (record reset)
//! ```
//!
//! There is no terminal state; the form is reusable indefinitely.
//!
//! ## Transitions as values
//!
//! Every operation on [`FormState`] borrows the current state and returns the
//! next one. The old value is never mutated, so a caller can keep it (for
//! undo, logging, or comparison). The single side effect, the gateway call,
//! lives in [`FormController::submit`], which sandwiches it between
//! [`FormState::begin_submit`] and [`FormState::complete_submit`].

use agri_core::parse;
use agri_core::{Clock, ErrorMap, FarmRecord, FieldName, Step, SubmitResponse, SystemClock};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::gateway::{SubmissionError, SubmissionGateway, TRANSPORT_FAILURE_MESSAGE};
use crate::validator::{self, messages};

// ─── Phase ───────────────────────────────────────────────────────────

/// The machine state derived from a [`FormState`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FormPhase {
    /// Editing the given step.
    Editing(Step),
    /// A submission is awaiting the gateway.
    Submitting,
}

impl std::fmt::Display for FormPhase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Editing(step) => write!(f, "{step}"),
            Self::Submitting => f.write_str("SUBMITTING"),
        }
    }
}

// ─── Errors ──────────────────────────────────────────────────────────

/// An operation that is not available in the current phase.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FormError {
    /// `back` at step 1.
    #[error("already at the first step")]
    AtFirstStep,

    /// `next` at step 3; the last step submits instead.
    #[error("no step after {0}; submit instead")]
    NoNextStep(Step),

    /// `submit` before step 3.
    #[error("submit is only available at the final step, current step is {0}")]
    NotAtFinalStep(Step),

    /// Any operation while a submission is awaiting the gateway.
    #[error("a submission is already in progress")]
    SubmissionInFlight,

    /// `complete_submit` without a pending submission.
    #[error("no submission is in progress")]
    NoSubmissionInFlight,
}

// ─── Notice ──────────────────────────────────────────────────────────

/// User-facing outcome of the most recent submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "message", rename_all = "snake_case")]
pub enum Notice {
    /// The record was stored and the form reset.
    Saved(String),
    /// The record was not stored; it is still in the form.
    Failed(String),
}

impl Notice {
    pub fn message(&self) -> &str {
        match self {
            Self::Saved(m) | Self::Failed(m) => m,
        }
    }
}

// ─── Form State ──────────────────────────────────────────────────────

/// The complete state of the form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormState {
    /// The record being edited.
    pub record: FarmRecord,
    /// The step being edited (or, while submitting, the step submitted from).
    pub step: Step,
    /// Current per-field messages.
    pub errors: ErrorMap,
    /// Whether a submission is awaiting the gateway.
    pub submitting: bool,
    /// Outcome of the last submission, cleared by the next edit.
    pub notice: Option<Notice>,
}

impl Default for FormState {
    fn default() -> Self {
        Self::new()
    }
}

/// Result of [`FormState::begin_submit`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitStart {
    /// Step 3 has errors; the state carries them and no submission starts.
    Invalid(FormState),
    /// Validation passed; the state is submitting and the record is ready
    /// to hand to the gateway.
    Ready(FormState),
}

impl FormState {
    /// A fresh form: empty record, step 1, no errors.
    pub fn new() -> Self {
        Self {
            record: FarmRecord::default(),
            step: Step::Farmer,
            errors: ErrorMap::new(),
            submitting: false,
            notice: None,
        }
    }

    /// The machine state.
    pub fn phase(&self) -> FormPhase {
        if self.submitting {
            FormPhase::Submitting
        } else {
            FormPhase::Editing(self.step)
        }
    }

    /// Apply an edit to one field.
    ///
    /// Numeric-input fields reject values that fail the keystroke filter:
    /// the edit is discarded and the field gets "Only numbers are allowed".
    /// Any other edit is applied and clears that field's message.
    pub fn on_field_change(&self, field: FieldName, value: &str) -> Result<Self, FormError> {
        self.require_idle()?;
        let mut next = self.clone();
        next.notice = None;
        if field.accepts_numeric_input() && !parse::numeric_keystroke(value) {
            next.errors.insert(field, messages::ONLY_NUMBERS);
            return Ok(next);
        }
        next.record.set(field, value);
        next.errors.clear(field);
        Ok(next)
    }

    /// Validate the current step and advance when it is clean.
    ///
    /// On errors the step is unchanged and `errors` is replaced wholesale by
    /// the new map.
    pub fn on_next(&self, today: NaiveDate) -> Result<Self, FormError> {
        self.require_idle()?;
        let target = self.step.next().ok_or(FormError::NoNextStep(self.step))?;
        let errors = validator::validate(&self.record, self.step, today);
        let mut next = self.clone();
        if errors.is_empty() {
            tracing::debug!(from = %self.step, to = %target, "form step advanced");
            next.step = target;
        } else {
            tracing::debug!(step = %self.step, invalid = errors.len(), "form step rejected");
        }
        next.errors = errors;
        Ok(next)
    }

    /// Return to the previous step without validating.
    pub fn on_back(&self) -> Result<Self, FormError> {
        self.require_idle()?;
        let target = self.step.previous().ok_or(FormError::AtFirstStep)?;
        tracing::debug!(from = %self.step, to = %target, "form step reverted");
        let mut next = self.clone();
        next.step = target;
        Ok(next)
    }

    /// Validate the final step and, when clean, enter the submitting phase.
    pub fn begin_submit(&self, today: NaiveDate) -> Result<SubmitStart, FormError> {
        self.require_idle()?;
        if !self.step.is_final() {
            return Err(FormError::NotAtFinalStep(self.step));
        }
        let errors = validator::validate(&self.record, self.step, today);
        let mut next = self.clone();
        next.notice = None;
        if !errors.is_empty() {
            next.errors = errors;
            return Ok(SubmitStart::Invalid(next));
        }
        next.errors = ErrorMap::new();
        next.submitting = true;
        Ok(SubmitStart::Ready(next))
    }

    /// Leave the submitting phase with the gateway's outcome.
    ///
    /// Success resets the form to step 1 with an empty record. Any failure,
    /// structured or transport-level, keeps the record and step and surfaces
    /// a message.
    pub fn complete_submit(
        &self,
        outcome: &Result<SubmitResponse, SubmissionError>,
    ) -> Result<Self, FormError> {
        if !self.submitting {
            return Err(FormError::NoSubmissionInFlight);
        }
        let next = match outcome {
            Ok(resp) if resp.success => Self {
                notice: Some(Notice::Saved(resp.display_message().to_string())),
                ..Self::new()
            },
            Ok(resp) => {
                let mut next = self.clone();
                next.submitting = false;
                next.notice = Some(Notice::Failed(resp.display_message().to_string()));
                next
            }
            Err(e) => {
                tracing::warn!(error = %e, "submission gateway failed");
                let mut next = self.clone();
                next.submitting = false;
                next.notice = Some(Notice::Failed(TRANSPORT_FAILURE_MESSAGE.to_string()));
                next
            }
        };
        Ok(next)
    }

    fn require_idle(&self) -> Result<(), FormError> {
        if self.submitting {
            return Err(FormError::SubmissionInFlight);
        }
        Ok(())
    }
}

// ─── Controller ──────────────────────────────────────────────────────

/// How a call to [`FormController::submit`] ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitStatus {
    /// Step 3 had errors; the gateway was not called.
    Invalid(ErrorMap),
    /// Stored; the form has been reset.
    Saved(String),
    /// Not stored; the record is still in the form.
    Failed(String),
}

/// Owns a [`FormState`] and drives it against a gateway and a clock.
#[derive(Debug)]
pub struct FormController<G, C = SystemClock> {
    state: FormState,
    gateway: G,
    clock: C,
}

impl<G: SubmissionGateway> FormController<G, SystemClock> {
    /// A controller reading today's date from the system clock.
    pub fn new(gateway: G) -> Self {
        Self::with_clock(gateway, SystemClock)
    }
}

impl<G: SubmissionGateway, C: Clock> FormController<G, C> {
    /// A controller with an explicit date source.
    pub fn with_clock(gateway: G, clock: C) -> Self {
        Self {
            state: FormState::new(),
            gateway,
            clock,
        }
    }

    /// The current state.
    pub fn state(&self) -> &FormState {
        &self.state
    }

    /// The gateway this controller submits to.
    pub fn gateway(&self) -> &G {
        &self.gateway
    }

    /// See [`FormState::on_field_change`].
    pub fn change(&mut self, field: FieldName, value: &str) -> Result<&FormState, FormError> {
        self.state = self.state.on_field_change(field, value)?;
        Ok(&self.state)
    }

    /// See [`FormState::on_next`].
    pub fn next(&mut self) -> Result<&FormState, FormError> {
        self.state = self.state.on_next(self.clock.today())?;
        Ok(&self.state)
    }

    /// See [`FormState::on_back`].
    pub fn back(&mut self) -> Result<&FormState, FormError> {
        self.state = self.state.on_back()?;
        Ok(&self.state)
    }

    /// Validate step 3 and, when clean, hand the record to the gateway.
    ///
    /// The submitting state is held locally and committed only once the
    /// gateway answers. If this future is dropped before then, the
    /// controller keeps its pre-submit state and can submit again.
    pub async fn submit(&mut self) -> Result<SubmitStatus, FormError> {
        let ready = match self.state.begin_submit(self.clock.today())? {
            SubmitStart::Invalid(state) => {
                let errors = state.errors.clone();
                self.state = state;
                return Ok(SubmitStatus::Invalid(errors));
            }
            SubmitStart::Ready(state) => state,
        };

        tracing::info!(farmer_id = %ready.record.farmer_id, "submitting survey record");
        let outcome = self.gateway.submit(&ready.record).await;
        self.state = ready.complete_submit(&outcome)?;

        let status = match &self.state.notice {
            Some(Notice::Saved(m)) => SubmitStatus::Saved(m.clone()),
            Some(Notice::Failed(m)) => SubmitStatus::Failed(m.clone()),
            None => SubmitStatus::Failed(TRANSPORT_FAILURE_MESSAGE.to_string()),
        };
        Ok(status)
    }
}

// ─── Tests ───────────────────────────────────────────────────────────
