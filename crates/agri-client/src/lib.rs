//! # agri-client: HTTP Submission Gateway
//!
//! [`HttpSubmissionGateway`] implements [`agri_form::SubmissionGateway`] by
//! posting the record as camelCase JSON to `{base_url}/api/submit`.
//!
//! ## Response Mapping
//!
//! The survey service answers every request, successful or not, with a
//! [`SubmitResponse`] envelope. The gateway therefore decodes the body
//! regardless of HTTP status:
//!
//! | Outcome                                  | Result                               |
//! |------------------------------------------|--------------------------------------|
//! | any status, body is an envelope          | `Ok(SubmitResponse)`                 |
//! | any status, body is not an envelope      | `Err(SubmissionError::Decode)`       |
//! | connect failure, timeout, broken body    | `Err(SubmissionError::Transport)`    |
//!
//! ## Timeout & Retry
//!
//! Each request carries the configured timeout (default 30s). No retries:
//! a failed submission leaves the record in the form for the user to resend.

use std::time::Duration;

use agri_core::{FarmRecord, SubmitResponse};
use agri_form::{SubmissionError, SubmissionGateway};
use url::Url;

/// Service address used when none is configured.
pub const DEFAULT_BASE_URL: &str = "http://localhost:5000";

/// Request timeout used when none is configured.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Path of the submission endpoint, relative to the base URL.
pub const SUBMIT_PATH: &str = "/api/submit";

// ─── Configuration ───────────────────────────────────────────────────

/// Configuration for [`HttpSubmissionGateway`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GatewayConfig {
    /// Base URL of the survey service (e.g. `http://localhost:5000`).
    pub base_url: String,
    /// Request timeout in seconds.
    pub timeout_secs: u64,
}

impl GatewayConfig {
    /// Configuration for `base_url` with the default timeout.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }

    /// Override the request timeout.
    pub fn with_timeout_secs(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }

    /// The absolute submission URL.
    pub fn submit_url(&self) -> Result<Url, SubmissionError> {
        let raw = format!("{}{SUBMIT_PATH}", self.base_url.trim_end_matches('/'));
        let url = Url::parse(&raw)
            .map_err(|e| SubmissionError::Config(format!("invalid base URL {:?}: {e}", self.base_url)))?;
        match url.scheme() {
            "http" | "https" => Ok(url),
            other => Err(SubmissionError::Config(format!(
                "unsupported URL scheme {other:?}; expected http or https"
            ))),
        }
    }
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}

// ─── Gateway ─────────────────────────────────────────────────────────

/// Submission gateway backed by `reqwest`.
///
/// Cheap to share: wrap in an `Arc` to use from several controllers.
#[derive(Debug, Clone)]
pub struct HttpSubmissionGateway {
    client: reqwest::Client,
    submit_url: Url,
    timeout_secs: u64,
}

impl HttpSubmissionGateway {
    /// Build a gateway from configuration.
    pub fn new(config: GatewayConfig) -> Result<Self, SubmissionError> {
        let submit_url = config.submit_url()?;
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| SubmissionError::Config(format!("failed to build HTTP client: {e}")))?;
        Ok(Self {
            client,
            submit_url,
            timeout_secs: config.timeout_secs,
        })
    }

    /// The URL records are posted to.
    pub fn submit_url(&self) -> &Url {
        &self.submit_url
    }
}

impl SubmissionGateway for HttpSubmissionGateway {
    async fn submit(&self, record: &FarmRecord) -> Result<SubmitResponse, SubmissionError> {
        let resp = self
            .client
            .post(self.submit_url.clone())
            .json(record)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    SubmissionError::Transport(format!(
                        "no response within {}s from {}",
                        self.timeout_secs, self.submit_url
                    ))
                } else {
                    SubmissionError::Transport(format!("POST {}: {e}", self.submit_url))
                }
            })?;

        let status = resp.status();
        let body = resp
            .bytes()
            .await
            .map_err(|e| SubmissionError::Transport(format!("reading response body: {e}")))?;

        let envelope: SubmitResponse =
            serde_json::from_slice(&body).map_err(|e| SubmissionError::Decode {
                status: status.as_u16(),
                reason: e.to_string(),
            })?;

        tracing::debug!(
            status = status.as_u16(),
            success = envelope.success,
            code = envelope.code.as_deref().unwrap_or(""),
            "submission answered"
        );
        Ok(envelope)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_targets_local_service() {
        let config = GatewayConfig::default();
        assert_eq!(config.timeout_secs, 30);
        assert_eq!(
            config.submit_url().unwrap().as_str(),
            "http://localhost:5000/api/submit"
        );
    }

    #[test]
    fn trailing_slash_is_ignored() {
        let url = GatewayConfig::new("https://survey.example/v2/").submit_url().unwrap();
        assert_eq!(url.as_str(), "https://survey.example/v2/api/submit");
    }

    #[test]
    fn rejects_unparseable_base() {
        let err = HttpSubmissionGateway::new(GatewayConfig::new("not a url")).unwrap_err();
        assert!(matches!(err, SubmissionError::Config(_)));
    }

    #[test]
    fn rejects_non_http_scheme() {
        let err = GatewayConfig::new("ftp://files.example").submit_url().unwrap_err();
        assert!(matches!(err, SubmissionError::Config(m) if m.contains("ftp")));
    }
}
