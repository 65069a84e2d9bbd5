//! # Validate Subcommand
//!
//! Runs the step validators over a record file and prints every message,
//! grouped by step.

use std::fmt::Write as _;
use std::path::PathBuf;

use agri_core::{Clock, FarmRecord, Step, SystemClock};
use anyhow::{Context, Result};
use chrono::NaiveDate;
use clap::Args;

use crate::{load_record, EXIT_INVALID, EXIT_OK};

/// Arguments for the validate subcommand.
#[derive(Args, Debug)]
pub struct ValidateArgs {
    /// Path to the record JSON file.
    pub record: PathBuf,

    /// Date to treat as today (YYYY-MM-DD). Defaults to the UTC date.
    #[arg(long)]
    pub today: Option<NaiveDate>,

    /// Validate only this step (1, 2 or 3).
    #[arg(long, value_parser = clap::value_parser!(u8).range(1..=3))]
    pub step: Option<u8>,
}

/// Execute the validate subcommand.
pub fn run_validate(args: &ValidateArgs) -> Result<u8> {
    let record = load_record(&args.record)?;
    let today = args.today.unwrap_or_else(|| SystemClock.today());
    let steps = match args.step {
        Some(n) => vec![Step::try_from(n).context("invalid step")?],
        None => Step::ALL.to_vec(),
    };

    let (report, valid) = report(&record, &steps, today);
    print!("{report}");
    Ok(if valid { EXIT_OK } else { EXIT_INVALID })
}

/// Render the validation result for `steps`; the flag is true when clean.
pub fn report(record: &FarmRecord, steps: &[Step], today: NaiveDate) -> (String, bool) {
    let mut out = String::new();
    let mut valid = true;
    for step in steps {
        let errors = agri_form::validate(record, *step, today);
        if errors.is_empty() {
            let _ = writeln!(out, "Step {} ({}): ok", step.number(), step.title());
            continue;
        }
        valid = false;
        let _ = writeln!(
            out,
            "Step {} ({}): {} error(s)",
            step.number(),
            step.title(),
            errors.len()
        );
        for (field, message) in errors.iter() {
            let _ = writeln!(out, "  {field}: {message}");
        }
    }
    (out, valid)
}
