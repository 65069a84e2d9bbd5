//! # agri-cli: Headless Survey Form Driver
//!
//! Provides the `agri` command-line interface. Records are JSON files in the
//! same camelCase shape the form submits.
//!
//! ## Subcommands
//!
//! - `agri validate`: Run the step validators over a record.
//! - `agri submit`: Replay a record through the form controller (field
//!   changes, Next, Next, Submit) against the survey service.
//! - `agri catalog`: Print the select option catalogs.
//!
//! ```bash
//! agri validate record.json --today 2024-06-01
//! agri submit record.json --endpoint http://localhost:5000
//! agri catalog soilType
//! ```
//!
//! ## Exit Codes
//!
//! | Code | Meaning                                  |
//! |------|------------------------------------------|
//! | 0    | valid / saved                            |
//! | 1    | usage or I/O error                       |
//! | 2    | the record failed validation             |
//! | 3    | the service refused or was unreachable   |

pub mod catalog;
pub mod submit;
pub mod validate;

use std::path::Path;

use agri_core::FarmRecord;
use anyhow::{Context, Result};

/// The record is valid, or was saved.
pub const EXIT_OK: u8 = 0;
/// The record failed validation.
pub const EXIT_INVALID: u8 = 2;
/// The gateway reported a failure.
pub const EXIT_GATEWAY: u8 = 3;

/// Read a survey record from a JSON file.
pub fn load_record(path: &Path) -> Result<FarmRecord> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    FarmRecord::from_json(&text).with_context(|| format!("{} is not a survey record", path.display()))
}
