//! # Step Validator
//!
//! `validate(record, step, today)` returns the field → message map for one
//! step. It is pure: the same record, step and date always give the same map.
//!
//! ## Rule Order
//!
//! Rules run in the order listed below and write into an [`ErrorMap`], which
//! keeps one message per field. A later rule therefore replaces an earlier
//! message for the same field; the harvest date is the only field where more
//! than one rule can fire.
//!
//! | Step | Field            | Rule                                          |
//! |------|------------------|-----------------------------------------------|
//! | 1    | farmerId         | non-blank                                     |
//! | 1    | farmerName       | non-blank                                     |
//! | 1    | contactNumber    | exactly 10 digits                             |
//! | 2    | surveyNumber     | non-blank, digits with at most one `.`        |
//! | 2    | landArea         | decimal                                       |
//! | 2    | soilType         | catalog member                                |
//! | 2    | irrigationSource | catalog member                                |
//! | 2    | cropSeason       | catalog member                                |
//! | 3    | seedQuantity     | decimal                                       |
//! | 3    | produceQuantity  | decimal                                       |
//! | 3    | cropType         | catalog member                                |
//! | 3    | fertilizerUsed   | catalog member                                |
//! | 3    | sowingDate       | required, `YYYY-MM-DD`, not after today       |
//! | 3    | harvestDate      | required, `YYYY-MM-DD`, not after today       |
//! | 3    | both dates       | harvest strictly after sowing                 |
//! | 3    | harvestDate      | at least [`MIN_GROWING_DAYS`] after sowing    |

use agri_core::parse::{self, FieldFault};
use agri_core::{Catalog, ErrorMap, FarmRecord, FieldName, Step};
use chrono::NaiveDate;

/// Minimum whole days between sowing and harvest.
pub const MIN_GROWING_DAYS: i64 = 20;

/// Length of a contact number.
pub const PHONE_DIGITS: usize = 10;

/// Fixed validator messages.
pub mod messages {
    pub const FARMER_ID_REQUIRED: &str = "Farmer ID is required";
    pub const FARMER_NAME_REQUIRED: &str = "Farmer Name is required";
    pub const PHONE_INVALID: &str = "Enter a valid 10-digit number";
    pub const SURVEY_NUMBER_REQUIRED: &str = "Survey Number is required";
    pub const LAND_AREA_INVALID: &str = "Enter a valid land area";
    pub const SEED_QUANTITY_INVALID: &str = "Enter a valid seed quantity";
    pub const PRODUCE_QUANTITY_INVALID: &str = "Enter a valid produce quantity";
    pub const SOWING_REQUIRED: &str = "Sowing Date is required";
    pub const SOWING_MALFORMED: &str = "Enter a valid Sowing Date";
    pub const SOWING_IN_FUTURE: &str = "Sowing Date cannot be in the future";
    pub const HARVEST_REQUIRED: &str = "Harvest Date is required";
    pub const HARVEST_MALFORMED: &str = "Enter a valid Harvest Date";
    pub const HARVEST_IN_FUTURE: &str = "Harvest Date cannot be in the future";
    pub const SOWING_NOT_BEFORE_HARVEST: &str = "Sowing Date must be before Harvest Date";
    pub const HARVEST_NOT_AFTER_SOWING: &str = "Harvest Date must be after Sowing Date";
    pub const HARVEST_TOO_SOON: &str =
        "Harvest Date must be a minimum 20 days after Sowing Date";
    /// On-change rejection for numeric inputs; also the submit-time message
    /// for a survey number that is not numeric.
    pub const ONLY_NUMBERS: &str = "Only numbers are allowed";
}

/// Validate the fields of `step`.
pub fn validate(record: &FarmRecord, step: Step, today: NaiveDate) -> ErrorMap {
    let mut errors = ErrorMap::new();
    match step {
        Step::Farmer => farmer_rules(record, &mut errors),
        Step::Field => field_rules(record, &mut errors),
        Step::Crop => crop_rules(record, today, &mut errors),
    }
    errors
}

/// Validate every step and merge the results.
///
/// Steps own disjoint fields, so merging never overwrites.
pub fn validate_all(record: &FarmRecord, today: NaiveDate) -> ErrorMap {
    let mut errors = ErrorMap::new();
    for step in Step::ALL {
        errors.extend(validate(record, step, today));
    }
    errors
}

/// The first step with errors, together with its error map.
pub fn first_invalid_step(record: &FarmRecord, today: NaiveDate) -> Option<(Step, ErrorMap)> {
    Step::ALL
        .into_iter()
        .map(|step| (step, validate(record, step, today)))
        .find(|(_, errors)| !errors.is_empty())
}

// ─── Step Rules ──────────────────────────────────────────────────────

fn farmer_rules(record: &FarmRecord, errors: &mut ErrorMap) {
    require_text(record, FieldName::FarmerId, messages::FARMER_ID_REQUIRED, errors);
    require_text(record, FieldName::FarmerName, messages::FARMER_NAME_REQUIRED, errors);
    if parse::digits(&record.contact_number, PHONE_DIGITS).is_err() {
        errors.insert(FieldName::ContactNumber, messages::PHONE_INVALID);
    }
}

fn field_rules(record: &FarmRecord, errors: &mut ErrorMap) {
    if record.survey_number.trim().is_empty() {
        errors.insert(FieldName::SurveyNumber, messages::SURVEY_NUMBER_REQUIRED);
    } else if !parse::numeric_keystroke(&record.survey_number) {
        errors.insert(FieldName::SurveyNumber, messages::ONLY_NUMBERS);
    }
    require_decimal(record, FieldName::LandArea, messages::LAND_AREA_INVALID, errors);
    require_option(record, FieldName::SoilType, errors);
    require_option(record, FieldName::IrrigationSource, errors);
    require_option(record, FieldName::CropSeason, errors);
}

fn crop_rules(record: &FarmRecord, today: NaiveDate, errors: &mut ErrorMap) {
    require_decimal(record, FieldName::SeedQuantity, messages::SEED_QUANTITY_INVALID, errors);
    require_decimal(
        record,
        FieldName::ProduceQuantity,
        messages::PRODUCE_QUANTITY_INVALID,
        errors,
    );
    require_option(record, FieldName::CropType, errors);
    require_option(record, FieldName::FertilizerUsed, errors);

    let sowing = check_date(
        &record.sowing_date,
        today,
        DateMessages {
            field: FieldName::SowingDate,
            required: messages::SOWING_REQUIRED,
            malformed: messages::SOWING_MALFORMED,
            future: messages::SOWING_IN_FUTURE,
        },
        errors,
    );
    let harvest = check_date(
        &record.harvest_date,
        today,
        DateMessages {
            field: FieldName::HarvestDate,
            required: messages::HARVEST_REQUIRED,
            malformed: messages::HARVEST_MALFORMED,
            future: messages::HARVEST_IN_FUTURE,
        },
        errors,
    );

    if let (Some(sowing), Some(harvest)) = (sowing, harvest) {
        if harvest <= sowing {
            errors.insert(FieldName::SowingDate, messages::SOWING_NOT_BEFORE_HARVEST);
            errors.insert(FieldName::HarvestDate, messages::HARVEST_NOT_AFTER_SOWING);
        } else if parse::days_between(sowing, harvest) < MIN_GROWING_DAYS {
            errors.insert(FieldName::HarvestDate, messages::HARVEST_TOO_SOON);
        }
    }
}

// ─── Rule Helpers ────────────────────────────────────────────────────

fn require_text(record: &FarmRecord, field: FieldName, message: &str, errors: &mut ErrorMap) {
    if record.get(field).trim().is_empty() {
        errors.insert(field, message);
    }
}

fn require_decimal(record: &FarmRecord, field: FieldName, message: &str, errors: &mut ErrorMap) {
    if parse::decimal(record.get(field)).is_err() {
        errors.insert(field, message);
    }
}

fn require_option(record: &FarmRecord, field: FieldName, errors: &mut ErrorMap) {
    let value = record.get(field);
    if value.is_empty() {
        errors.insert(field, format!("Select {}", field.label()));
        return;
    }
    let known = Catalog::for_field(field).map_or(false, |c| c.contains(value));
    if !known {
        errors.insert(field, format!("Select a valid {}", field.label()));
    }
}

struct DateMessages {
    field: FieldName,
    required: &'static str,
    malformed: &'static str,
    future: &'static str,
}

/// Apply the presence, shape and not-in-future rules to one date field.
///
/// Returns the parsed date whenever it is well-formed, even if it lies in the
/// future, so the ordering rules can still run and supersede.
fn check_date(
    value: &str,
    today: NaiveDate,
    msgs: DateMessages,
    errors: &mut ErrorMap,
) -> Option<NaiveDate> {
    match parse::iso_date(value) {
        Ok(date) => {
            if date > today {
                errors.insert(msgs.field, msgs.future);
            }
            Some(date)
        }
        Err(FieldFault::Empty) => {
            errors.insert(msgs.field, msgs.required);
            None
        }
        Err(_) => {
            errors.insert(msgs.field, msgs.malformed);
            None
        }
    }
}

// ─── Tests ───────────────────────────────────────────────────────────
