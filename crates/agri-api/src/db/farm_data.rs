//! `farm_data` persistence operations.
//!
//! Rows are immutable once written; there are no update operations.

use agri_core::FarmRecord;
use sqlx::PgPool;

/// Insert a submission, returning its row id.
///
/// A second row with the same `farmer_id` fails with a unique violation
/// (see [`super::is_unique_violation`]).
pub async fn insert(pool: &PgPool, record: &FarmRecord) -> Result<i64, sqlx::Error> {
    let id: i64 = sqlx::query_scalar(
        "INSERT INTO farm_data (farmer_id, farmer_name, contact_number,
         survey_number, land_area, soil_type, irrigation_source, crop_season,
         crop_type, seed_quantity, sowing_date, harvest_date, produce_quantity,
         fertilizer_used)
         VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14)
         RETURNING id",
    )
    .bind(&record.farmer_id)
    .bind(&record.farmer_name)
    .bind(&record.contact_number)
    .bind(&record.survey_number)
    .bind(&record.land_area)
    .bind(&record.soil_type)
    .bind(&record.irrigation_source)
    .bind(&record.crop_season)
    .bind(&record.crop_type)
    .bind(&record.seed_quantity)
    .bind(&record.sowing_date)
    .bind(&record.harvest_date)
    .bind(&record.produce_quantity)
    .bind(&record.fertilizer_used)
    .fetch_one(pool)
    .await?;

    Ok(id)
}
