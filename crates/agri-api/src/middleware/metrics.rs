//! # Prometheus Metrics
//!
//! Metrics are recorded through the `metrics` facade and exported by the
//! `metrics-exporter-prometheus` recorder installed in `main`. Without an
//! installed recorder every call here is a no-op, so tests and embedders
//! need no setup.
//!
//! | Metric                                | Kind      | Labels                   |
//! |---------------------------------------|-----------|--------------------------|
//! | `agri_http_requests_total`            | counter   | method, path, status     |
//! | `agri_http_request_duration_seconds`  | histogram | method, path             |
//! | `agri_submissions_total`              | counter   | outcome                  |

use std::time::Instant;

use axum::extract::Request;
use axum::middleware::Next;
use axum::response::Response;

/// Paths reported verbatim; anything else is reported as `other`.
const KNOWN_PATHS: &[&str] = &[
    "/api/submit",
    "/health/liveness",
    "/health/readiness",
    "/metrics",
    "/openapi.json",
];

/// How a submission ended, as reported in `agri_submissions_total`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmissionOutcome {
    Saved,
    Duplicate,
    Invalid,
    Error,
}

impl SubmissionOutcome {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Saved => "saved",
            Self::Duplicate => "duplicate",
            Self::Invalid => "invalid",
            Self::Error => "error",
        }
    }
}

/// Count one submission.
pub fn record_submission(outcome: SubmissionOutcome) {
    metrics::counter!("agri_submissions_total", "outcome" => outcome.as_str()).increment(1);
}

/// Collapse unknown paths so label cardinality stays bounded.
fn normalize_path(path: &str) -> &'static str {
    let trimmed = if path.len() > 1 {
        path.trim_end_matches('/')
    } else {
        path
    };
    KNOWN_PATHS
        .iter()
        .find(|known| **known == trimmed)
        .copied()
        .unwrap_or("other")
}

/// Axum middleware that records request count and latency.
pub async fn metrics_middleware(request: Request, next: Next) -> Response {
    let method = request.method().to_string();
    let path = normalize_path(request.uri().path());
    let start = Instant::now();

    let response = next.run(request).await;

    let status = response.status().as_u16().to_string();
    metrics::counter!(
        "agri_http_requests_total",
        "method" => method.clone(),
        "path" => path,
        "status" => status
    )
    .increment(1);
    metrics::histogram!(
        "agri_http_request_duration_seconds",
        "method" => method,
        "path" => path
    )
    .record(start.elapsed().as_secs_f64());

    response
}
