//! # agri-api: Farm Input Survey Service
//!
//! Axum service behind the survey form's submission gateway.
//!
//! ## API Surface
//!
//! | Path                 | Module                       | Purpose                      |
//! |----------------------|------------------------------|------------------------------|
//! | `POST /api/submit`   | [`routes::submissions`]      | Validate and store a record  |
//! | `/health/liveness`   | this module                  | Process is up                |
//! | `/health/readiness`  | this module                  | Storage is reachable         |
//! | `/metrics`           | this module                  | Prometheus exposition        |
//! | `/openapi.json`      | [`openapi`]                  | OpenAPI document             |
//!
//! ## Middleware Stack (execution order)
//!
//! ```text
//! CorsLayer → TraceLayer → MetricsMiddleware → BodyLimit → Handler
//! ```
//!
//! ## Storage
//!
//! Postgres when a database URL is configured, the in-memory
//! [`FarmStore`](state::FarmStore) otherwise. See [`db`].

pub mod db;
pub mod error;
pub mod middleware;
pub mod openapi;
pub mod routes;
pub mod state;

use axum::extract::{DefaultBodyLimit, State};
use axum::http::StatusCode;
use axum::middleware::from_fn;
use axum::response::IntoResponse;
use axum::routing::get;
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

pub use error::AppError;
pub use state::{AppConfig, AppState};

/// Assemble the full application router with all routes and middleware.
///
/// Health probes and `/metrics` sit outside the body limit and request
/// metrics so scrapes do not count themselves.
pub fn app(state: AppState) -> Router {
    let metrics_on = state.config.metrics_enabled;

    let mut api = Router::new()
        .merge(routes::submissions::router())
        .merge(openapi::router())
        .layer(DefaultBodyLimit::max(state.config.body_limit));

    if metrics_on {
        api = api.layer(from_fn(middleware::metrics::metrics_middleware));
    }

    let api = api
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state.clone());

    let mut probes = Router::new()
        .route("/health/liveness", get(liveness))
        .route("/health/readiness", get(readiness));

    if metrics_on {
        probes = probes.route("/metrics", get(prometheus_metrics));
    }

    let probes = probes.with_state(state);

    Router::new().merge(probes).merge(api)
}

/// GET /metrics: Prometheus text exposition of the installed recorder.
async fn prometheus_metrics(State(state): State<AppState>) -> impl IntoResponse {
    match &state.metrics {
        Some(handle) => (StatusCode::OK, handle.render()).into_response(),
        None => (StatusCode::SERVICE_UNAVAILABLE, "metrics recorder not installed").into_response(),
    }
}

/// Liveness probe: the process is running.
async fn liveness() -> &'static str {
    "ok"
}

/// Readiness probe: storage can accept writes.
///
/// Postgres is probed when configured; the in-memory store is always ready.
/// Returns 200 "ready" or 503 with a diagnostic message.
async fn readiness(State(state): State<AppState>) -> impl IntoResponse {
    if let Some(pool) = &state.db_pool {
        if let Err(e) = sqlx::query("SELECT 1").execute(pool).await {
            tracing::warn!("Database health check failed: {e}");
            return (StatusCode::SERVICE_UNAVAILABLE, "database unreachable").into_response();
        }
    }
    (StatusCode::OK, "ready").into_response()
}
