//! # OpenAPI Document Assembly
//!
//! Assembles the utoipa-documented routes into a single OpenAPI document served
//! at `/openapi.json`. The wire types live in `agri-core`, which does not
//! depend on utoipa; the schema structs below describe the same JSON.

use axum::routing::get;
use axum::{Json, Router};
use serde::{Deserialize, Serialize};
use utoipa::{OpenApi, ToSchema};

use crate::state::AppState;

/// A survey record as submitted by the form. Every value is a string.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
#[schema(as = FarmRecord)]
pub struct FarmRecordSchema {
    #[schema(example = "F-1001")]
    pub farmer_id: String,
    pub farmer_name: String,
    /// Exactly 10 digits.
    #[schema(example = "9876543210")]
    pub contact_number: String,
    /// Digits with at most one `.`.
    pub survey_number: String,
    /// Decimal, in acres.
    #[schema(example = "2.5")]
    pub land_area: String,
    /// One of the soil type catalog values.
    pub soil_type: String,
    /// One of the irrigation source catalog values.
    pub irrigation_source: String,
    /// One of the crop season catalog values.
    pub crop_season: String,
    /// One of the crop type catalog values.
    pub crop_type: String,
    /// Decimal, in kilograms.
    pub seed_quantity: String,
    /// `YYYY-MM-DD`, not in the future.
    #[schema(example = "2024-01-01")]
    pub sowing_date: String,
    /// `YYYY-MM-DD`, not in the future, at least 20 days after sowing.
    #[schema(example = "2024-04-15")]
    pub harvest_date: String,
    /// Decimal, in kilograms.
    pub produce_quantity: String,
    /// One of the fertilizer catalog values.
    pub fertilizer_used: String,
}

/// Response envelope for every outcome of a submission.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[schema(as = SubmitResponse)]
pub struct SubmitResponseSchema {
    pub success: bool,
    #[schema(example = "Form data saved successfully!")]
    pub message: Option<String>,
    /// `VALIDATION_ERROR`, `BAD_REQUEST`, `DUPLICATE_ENTRY` or `INTERNAL_ERROR`.
    pub code: Option<String>,
    /// Field name to message, present on `VALIDATION_ERROR`.
    #[schema(value_type = Option<Object>)]
    pub errors: Option<serde_json::Value>,
}

/// Assembled OpenAPI document for the service.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Farm Input Survey API",
        description = "Stores farm input survey records collected by the three-step survey form."
    ),
    servers(
        (url = "http://localhost:5000", description = "Local development server"),
    ),
    paths(crate::routes::submissions::submit),
    components(schemas(FarmRecordSchema, SubmitResponseSchema)),
    tags(
        (name = "submissions", description = "Survey record submission"),
    )
)]
pub struct ApiDoc;

/// Router serving `/openapi.json`.
pub fn router() -> Router<AppState> {
    Router::new().route("/openapi.json", get(openapi_json))
}

async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn document_lists_submit_endpoint() {
        let doc = serde_json::to_value(ApiDoc::openapi()).unwrap();
        assert!(doc["paths"]["/api/submit"]["post"].is_object());
        let record = &doc["components"]["schemas"]["FarmRecord"]["properties"];
        assert!(record["farmerId"].is_object());
        assert!(record["fertilizerUsed"].is_object());
        assert!(doc["components"]["schemas"]["SubmitResponse"].is_object());
    }
}
