//! # Database Persistence Layer
//!
//! Postgres persistence for survey submissions via SQLx.
//!
//! The database is **optional**. With a connection URL the service stores
//! submissions in the `farm_data` table; without one it keeps them in the
//! process-local [`FarmStore`](crate::state::FarmStore) (suitable for
//! development and testing). Both enforce farmer ID uniqueness.

pub mod farm_data;

use std::time::Duration;

use sqlx::postgres::{PgPool, PgPoolOptions};

/// Initialize the database connection pool and run migrations.
///
/// Returns `None` when no URL is given (in-memory mode).
/// Returns `Err` if the URL is set but the connection or migration fails.
pub async fn init_pool(database_url: Option<&str>) -> Result<Option<PgPool>, sqlx::Error> {
    let Some(url) = database_url.filter(|u| !u.trim().is_empty()) else {
        tracing::warn!(
            "DATABASE_URL not set, running in-memory only mode. \
             Submissions will not survive restarts."
        );
        return Ok(None);
    };

    let pool = PgPoolOptions::new()
        .max_connections(10)
        .min_connections(1)
        .acquire_timeout(Duration::from_secs(5))
        .connect(url)
        .await?;

    tracing::info!("Connected to PostgreSQL");

    sqlx::migrate!("./migrations").run(&pool).await?;
    tracing::info!("Database migrations applied");

    Ok(Some(pool))
}

/// Whether `err` is a unique-constraint violation.
pub fn is_unique_violation(err: &sqlx::Error) -> bool {
    err.as_database_error()
        .map_or(false, |db| db.is_unique_violation())
}
