//! # Survey Submission Endpoint
//!
//! `POST /api/submit` accepts a camelCase survey record, re-validates all
//! three steps against today's date, and stores it.
//!
//! | Outcome                      | Status | `code`             |
//! |------------------------------|--------|--------------------|
//! | stored                       | 200    |                    |
//! | body is not a survey record  | 422    | `BAD_REQUEST`      |
//! | body over the size limit     | 413    | `PAYLOAD_TOO_LARGE`|
//! | a field fails validation     | 422    | `VALIDATION_ERROR` |
//! | farmer ID already stored     | 409    | `DUPLICATE_ENTRY`  |
//! | storage failure              | 500    | `INTERNAL_ERROR`   |

use agri_core::{Clock, FarmRecord, SubmitResponse, SystemClock};
use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::routing::post;
use axum::{Json, Router};

use crate::db;
use crate::error::AppError;
use crate::middleware::metrics::{record_submission, SubmissionOutcome};
use crate::state::AppState;

/// Build the submissions router.
pub fn router() -> Router<AppState> {
    Router::new().route("/api/submit", post(submit))
}

/// POST /api/submit: Validate and store a survey record.
#[utoipa::path(
    post,
    path = "/api/submit",
    request_body = crate::openapi::FarmRecordSchema,
    responses(
        (status = 200, description = "Record stored", body = crate::openapi::SubmitResponseSchema),
        (status = 413, description = "Body over the size limit", body = crate::openapi::SubmitResponseSchema),
        (status = 409, description = "Farmer ID already stored", body = crate::openapi::SubmitResponseSchema),
        (status = 422, description = "Malformed body or invalid fields", body = crate::openapi::SubmitResponseSchema),
        (status = 500, description = "Storage failure", body = crate::openapi::SubmitResponseSchema),
    ),
    tag = "submissions"
)]
pub async fn submit(
    State(state): State<AppState>,
    payload: Result<Json<serde_json::Value>, JsonRejection>,
) -> Result<Json<SubmitResponse>, AppError> {
    let result = accept(&state, payload).await;
    record_submission(outcome_of(&result));
    result
}

async fn accept(
    state: &AppState,
    payload: Result<Json<serde_json::Value>, JsonRejection>,
) -> Result<Json<SubmitResponse>, AppError> {
    let Json(body) = payload?;
    let record = FarmRecord::from_value(&body)?;

    let errors = agri_form::validate_all(&record, SystemClock.today());
    if !errors.is_empty() {
        tracing::info!(farmer_id = %record.farmer_id, invalid = %errors, "submission rejected");
        return Err(AppError::Validation(errors));
    }

    let id = match &state.db_pool {
        Some(pool) => db::farm_data::insert(pool, &record).await.map_err(|e| {
            if db::is_unique_violation(&e) {
                AppError::Duplicate(record.farmer_id.clone())
            } else {
                AppError::Internal(format!("insert into farm_data: {e}"))
            }
        })?,
        None => state.store.insert(record.clone())?,
    };

    tracing::info!(id, farmer_id = %record.farmer_id, "survey record saved");
    Ok(Json(SubmitResponse::saved()))
}

fn outcome_of(result: &Result<Json<SubmitResponse>, AppError>) -> SubmissionOutcome {
    match result {
        Ok(_) => SubmissionOutcome::Saved,
        Err(AppError::Duplicate(_)) => SubmissionOutcome::Duplicate,
        Err(
            AppError::Validation(_) | AppError::BadRequest(_) | AppError::PayloadTooLarge(_),
        ) => SubmissionOutcome::Invalid,
        Err(_) => SubmissionOutcome::Error,
    }
}
