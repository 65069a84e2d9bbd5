//! # Form Steps
//!
//! The survey form is split into three steps. Each step owns a disjoint
//! subset of the fields (see [`crate::FieldName::step`]).
//!
//! ```text
//! Farmer (1) ──▶ Field (2) ──▶ Crop (3)
//! ```

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// A form step, numbered 1 through 3.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum Step {
    /// Farmer identity: ID, name, contact number.
    Farmer = 1,
    /// Field details: survey number, area, soil, irrigation, season.
    Field = 2,
    /// Crop details: type, quantities, fertilizer, sowing and harvest dates.
    Crop = 3,
}

impl Step {
    /// All steps in order.
    pub const ALL: [Step; 3] = [Self::Farmer, Self::Field, Self::Crop];

    /// The step number (1, 2 or 3).
    pub fn number(&self) -> u8 {
        *self as u8
    }

    /// The following step, or `None` at the last step.
    pub fn next(&self) -> Option<Step> {
        match self {
            Self::Farmer => Some(Self::Field),
            Self::Field => Some(Self::Crop),
            Self::Crop => None,
        }
    }

    /// The preceding step, or `None` at the first step.
    pub fn previous(&self) -> Option<Step> {
        match self {
            Self::Farmer => None,
            Self::Field => Some(Self::Farmer),
            Self::Crop => Some(Self::Field),
        }
    }

    /// Whether this is the last step (submission happens here).
    pub fn is_final(&self) -> bool {
        matches!(self, Self::Crop)
    }

    /// Heading shown above the step's inputs.
    pub fn title(&self) -> &'static str {
        match self {
            Self::Farmer => "Farmer Input Dashboard",
            Self::Field => "Field Input",
            Self::Crop => "Crop Details",
        }
    }
}

impl TryFrom<u8> for Step {
    type Error = CoreError;

    fn try_from(n: u8) -> Result<Self, Self::Error> {
        match n {
            1 => Ok(Self::Farmer),
            2 => Ok(Self::Field),
            3 => Ok(Self::Crop),
            other => Err(CoreError::StepOutOfRange(other)),
        }
    }
}

impl From<Step> for u8 {
    fn from(step: Step) -> u8 {
        step.number()
    }
}

impl std::fmt::Display for Step {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "STEP_{}", self.number())
    }
}
