//! # Submit Subcommand
//!
//! Replays a record file through [`FormController`] the way a user would:
//! enter each step's fields, press Next twice, then Submit. The controller
//! posts the record through the HTTP gateway.

use std::path::PathBuf;

use agri_client::{GatewayConfig, HttpSubmissionGateway, DEFAULT_BASE_URL, DEFAULT_TIMEOUT_SECS};
use agri_core::{Clock, FarmRecord, FixedClock, Step, SystemClock};
use agri_form::{FormController, SubmissionGateway, SubmitStatus};
use anyhow::{Context, Result};
use chrono::NaiveDate;
use clap::Args;

use crate::{load_record, EXIT_GATEWAY, EXIT_INVALID, EXIT_OK};

/// Arguments for the submit subcommand.
#[derive(Args, Debug)]
pub struct SubmitArgs {
    /// Path to the record JSON file.
    pub record: PathBuf,

    /// Base URL of the survey service.
    #[arg(long, env = "AGRI_API_URL", default_value = DEFAULT_BASE_URL)]
    pub endpoint: String,

    /// Request timeout in seconds.
    #[arg(long, default_value_t = DEFAULT_TIMEOUT_SECS)]
    pub timeout_secs: u64,

    /// Date to treat as today (YYYY-MM-DD). Defaults to the UTC date.
    #[arg(long)]
    pub today: Option<NaiveDate>,
}

/// Execute the submit subcommand.
pub fn run_submit(args: &SubmitArgs) -> Result<u8> {
    let record = load_record(&args.record)?;
    let config = GatewayConfig::new(&args.endpoint).with_timeout_secs(args.timeout_secs);
    let gateway = HttpSubmissionGateway::new(config)?;
    let clock = FixedClock(args.today.unwrap_or_else(|| SystemClock.today()));
    tracing::debug!(url = %gateway.submit_url(), "submitting record");

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .context("failed to start async runtime")?;
    let mut controller = FormController::with_clock(gateway, clock);
    let status = runtime.block_on(replay(&mut controller, &record))?;

    Ok(print_status(&status))
}

/// Drive `controller` through all three steps with the values in `record`.
///
/// Stops at the first value the form refuses to take, or at the first step
/// whose Next is rejected, and reports the errors the form shows.
pub async fn replay<G, C>(
    controller: &mut FormController<G, C>,
    record: &FarmRecord,
) -> Result<SubmitStatus>
where
    G: SubmissionGateway,
    C: Clock,
{
    for step in Step::ALL {
        for (field, value) in record.entries().filter(|(f, _)| f.step() == step) {
            let state = controller.change(field, value)?;
            if state.record.get(field) != value {
                tracing::debug!(%field, "value rejected on entry");
                return Ok(SubmitStatus::Invalid(state.errors.clone()));
            }
        }
        if step.is_final() {
            break;
        }
        let state = controller.next()?;
        if state.step == step {
            tracing::debug!(%step, "step rejected");
            return Ok(SubmitStatus::Invalid(state.errors.clone()));
        }
    }
    Ok(controller.submit().await?)
}

fn print_status(status: &SubmitStatus) -> u8 {
    match status {
        SubmitStatus::Saved(message) => {
            println!("{message}");
            EXIT_OK
        }
        SubmitStatus::Invalid(errors) => {
            eprintln!("record failed validation:");
            for (field, message) in errors.iter() {
                eprintln!("  {field}: {message}");
            }
            EXIT_INVALID
        }
        SubmitStatus::Failed(message) => {
            eprintln!("{message}");
            EXIT_GATEWAY
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use agri_core::wire::{DUPLICATE_MESSAGE, SAVED_MESSAGE};
    use agri_core::{FieldName, SubmitResponse};
    use agri_form::SubmissionError;
    use parking_lot::Mutex;

    #[derive(Default)]
    struct RecordingGateway {
        calls: Mutex<Vec<FarmRecord>>,
        reply: Option<SubmitResponse>,
    }

    impl SubmissionGateway for RecordingGateway {
        async fn submit(&self, record: &FarmRecord) -> Result<SubmitResponse, SubmissionError> {
            self.calls.lock().push(record.clone());
            Ok(self.reply.clone().unwrap_or_else(SubmitResponse::saved))
        }
    }

    fn clock() -> FixedClock {
        FixedClock(NaiveDate::from_ymd_opt(2024, 6, 1).unwrap())
    }

    fn full_record() -> FarmRecord {
        FarmRecord::default()
            .with(FieldName::FarmerId, "F-1001")
            .with(FieldName::FarmerName, "Lakshmi Rao")
            .with(FieldName::ContactNumber, "9876543210")
            .with(FieldName::SurveyNumber, "142")
            .with(FieldName::LandArea, "2.5")
            .with(FieldName::SoilType, "Loam")
            .with(FieldName::IrrigationSource, "Canal Water")
            .with(FieldName::CropSeason, "Winter Crop Season")
            .with(FieldName::SeedQuantity, "40")
            .with(FieldName::ProduceQuantity, "1200")
            .with(FieldName::CropType, "Food Crops")
            .with(FieldName::FertilizerUsed, "Compost")
            .with(FieldName::SowingDate, "2024-01-01")
            .with(FieldName::HarvestDate, "2024-04-15")
    }

    #[tokio::test]
    async fn replay_submits_complete_record_once() {
        let mut ctl = FormController::with_clock(RecordingGateway::default(), clock());
        let status = replay(&mut ctl, &full_record()).await.unwrap();
        assert_eq!(status, SubmitStatus::Saved(SAVED_MESSAGE.to_string()));
        assert_eq!(ctl.gateway().calls.lock().as_slice(), &[full_record()]);
    }

    #[tokio::test]
    async fn replay_stops_at_first_invalid_step() {
        let record = full_record().with(FieldName::LandArea, "");
        let mut ctl = FormController::with_clock(RecordingGateway::default(), clock());
        let status = replay(&mut ctl, &record).await.unwrap();
        let SubmitStatus::Invalid(errors) = status else {
            panic!("expected validation failure");
        };
        assert_eq!(errors.fields().collect::<Vec<_>>(), vec![FieldName::LandArea]);
        assert_eq!(ctl.state().step, Step::Field);
        assert!(ctl.gateway().calls.lock().is_empty());
    }

    #[tokio::test]
    async fn replay_reports_value_the_form_refuses() {
        let record = full_record().with(FieldName::SurveyNumber, "142/3A");
        let mut ctl = FormController::with_clock(RecordingGateway::default(), clock());
        let status = replay(&mut ctl, &record).await.unwrap();
        let SubmitStatus::Invalid(errors) = status else {
            panic!("expected validation failure");
        };
        assert_eq!(errors.get(FieldName::SurveyNumber), Some("Only numbers are allowed"));
        assert_eq!(errors.len(), 1);
        assert_eq!(ctl.state().step, Step::Field);
        assert!(ctl.gateway().calls.lock().is_empty());
    }

    #[tokio::test]
    async fn replay_reports_gateway_refusal() {
        let gateway = RecordingGateway {
            reply: Some(SubmitResponse::failure("DUPLICATE_ENTRY", DUPLICATE_MESSAGE)),
            ..RecordingGateway::default()
        };
        let mut ctl = FormController::with_clock(gateway, clock());
        let status = replay(&mut ctl, &full_record()).await.unwrap();
        assert_eq!(status, SubmitStatus::Failed(DUPLICATE_MESSAGE.to_string()));
        assert_eq!(print_status(&status), EXIT_GATEWAY);
    }

    #[test]
    fn exit_codes_follow_status() {
        assert_eq!(print_status(&SubmitStatus::Saved("ok".into())), EXIT_OK);
        assert_eq!(
            print_status(&SubmitStatus::Invalid(agri_core::ErrorMap::new())),
            EXIT_INVALID
        );
    }
}
