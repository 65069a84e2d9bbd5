//! # Application State
//!
//! Shared state for the Axum application: runtime configuration, the
//! optional Postgres pool, the in-memory store used when no database is
//! configured, and the Prometheus handle.
//!
//! `AppState` is `Clone`; every clone shares the same store through an
//! `Arc<RwLock<..>>`.

use std::sync::Arc;

use agri_core::FarmRecord;
use chrono::{DateTime, Utc};
use metrics_exporter_prometheus::PrometheusHandle;
use parking_lot::RwLock;
use sqlx::PgPool;
use thiserror::Error;

// ─── Configuration ───────────────────────────────────────────────────

/// Runtime configuration for the service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Interface to bind.
    pub host: String,
    /// Port to listen on.
    pub port: u16,
    /// Whether HTTP metrics are recorded and `/metrics` is mounted.
    pub metrics_enabled: bool,
    /// Maximum accepted request body, in bytes.
    pub body_limit: usize,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 5000,
            metrics_enabled: true,
            body_limit: 64 * 1024,
        }
    }
}

// ─── In-Memory Store ─────────────────────────────────────────────────

/// A stored submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoredRecord {
    pub id: i64,
    pub record: FarmRecord,
    pub created_at: DateTime<Utc>,
}

/// Insert failure in the in-memory store.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    #[error("farmer ID {0:?} already exists")]
    DuplicateFarmerId(String),
}

/// Process-local `farm_data` table with the same farmer ID uniqueness rule
/// as the Postgres schema.
#[derive(Debug, Clone, Default)]
pub struct FarmStore {
    rows: Arc<RwLock<Vec<StoredRecord>>>,
}

impl FarmStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append `record`, returning its id.
    ///
    /// The uniqueness check and the append happen under one write lock.
    pub fn insert(&self, record: FarmRecord) -> Result<i64, StoreError> {
        let mut rows = self.rows.write();
        if rows.iter().any(|r| r.record.farmer_id == record.farmer_id) {
            return Err(StoreError::DuplicateFarmerId(record.farmer_id));
        }
        let id = rows.last().map_or(1, |r| r.id + 1);
        rows.push(StoredRecord {
            id,
            record,
            created_at: Utc::now(),
        });
        Ok(id)
    }

    /// Look up a submission by farmer ID.
    pub fn get(&self, farmer_id: &str) -> Option<StoredRecord> {
        self.rows
            .read()
            .iter()
            .find(|r| r.record.farmer_id == farmer_id)
            .cloned()
    }

    pub fn len(&self) -> usize {
        self.rows.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.read().is_empty()
    }
}

// ─── Application State ───────────────────────────────────────────────

/// Shared application state passed to all route handlers.
#[derive(Clone)]
pub struct AppState {
    pub config: AppConfig,
    /// Postgres pool; `None` selects the in-memory store.
    pub db_pool: Option<PgPool>,
    pub store: FarmStore,
    /// Installed Prometheus recorder, rendered by `/metrics`.
    pub metrics: Option<PrometheusHandle>,
}

impl AppState {
    /// In-memory state with default configuration and no metrics recorder.
    pub fn new() -> Self {
        Self::with_config(AppConfig::default(), None)
    }

    /// State with explicit configuration and an optional database pool.
    pub fn with_config(config: AppConfig, db_pool: Option<PgPool>) -> Self {
        Self {
            config,
            db_pool,
            store: FarmStore::new(),
            metrics: None,
        }
    }

    /// Attach the handle of an installed Prometheus recorder.
    pub fn with_metrics(mut self, handle: PrometheusHandle) -> Self {
        self.metrics = Some(handle);
        self
    }
}

impl std::fmt::Debug for AppState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppState")
            .field("config", &self.config)
            .field("database", &self.db_pool.is_some())
            .field("stored", &self.store.len())
            .field("metrics", &self.metrics.is_some())
            .finish()
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
