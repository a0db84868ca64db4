// ============================================================================
// Bank Shared - Client Metrics
// File: crates/bank-shared/src/metrics.rs
// Description: Prometheus counters, gauge and timings for client operations
// ============================================================================

use std::collections::HashMap;
use std::future::Future;
use std::sync::Arc;
use std::time::Instant;

use prometheus::{
    HistogramOpts, HistogramVec, IntCounter, IntGauge, Opts, Registry, TextEncoder,
};
use tracing::{info, warn};

use crate::error::AppError;

const DURATION_BUCKETS: [f64; 10] = [0.001, 0.005, 0.01, 0.025, 0.05, 0.1, 0.25, 0.5, 1.0, 2.5];

/// Metrics for client operations, cheap to clone
#[derive(Clone)]
pub struct ClientMetrics {
    inner: Arc<MetricsInner>,
}

struct MetricsInner {
    registry: Registry,
    clients_created: IntCounter,
    clients_deleted: IntCounter,
    clients_updated: IntCounter,
    client_rights_updated: IntCounter,
    active_clients: IntGauge,
    operation_duration: HistogramVec,
}

impl ClientMetrics {
    /// Build a fresh registry tagged with the application name
    pub fn new(application: &str) -> Result<Self, AppError> {
        let mut labels = HashMap::new();
        labels.insert("application".to_string(), application.to_string());
        let registry = Registry::new_custom(None, Some(labels))?;

        let clients_created = IntCounter::with_opts(Opts::new(
            "bank_clients_created_total",
            "Number of clients created",
        ))?;
        let clients_deleted = IntCounter::with_opts(Opts::new(
            "bank_clients_deleted_total",
            "Number of clients deleted",
        ))?;
        let clients_updated = IntCounter::with_opts(Opts::new(
            "bank_clients_updated_total",
            "Number of client updates",
        ))?;
        let client_rights_updated = IntCounter::with_opts(Opts::new(
            "bank_clients_rights_updated_total",
            "Number of client rights updates",
        ))?;
        let active_clients = IntGauge::with_opts(Opts::new(
            "bank_clients_active",
            "Number of clients returned by the last full listing",
        ))?;
        let operation_duration = HistogramVec::new(
            HistogramOpts::new(
                "bank_clients_operation_duration_seconds",
                "Time taken for client operations",
            )
            .buckets(DURATION_BUCKETS.to_vec()),
            &["operation", "success"],
        )?;

        registry.register(Box::new(clients_created.clone()))?;
        registry.register(Box::new(clients_deleted.clone()))?;
        registry.register(Box::new(clients_updated.clone()))?;
        registry.register(Box::new(client_rights_updated.clone()))?;
        registry.register(Box::new(active_clients.clone()))?;
        registry.register(Box::new(operation_duration.clone()))?;

        Ok(Self {
            inner: Arc::new(MetricsInner {
                registry,
                clients_created,
                clients_deleted,
                clients_updated,
                client_rights_updated,
                active_clients,
                operation_duration,
            }),
        })
    }

    pub fn increment_client_creation(&self) {
        self.inner.clients_created.inc();
    }

    pub fn increment_client_deletion(&self) {
        self.inner.clients_deleted.inc();
    }

    pub fn increment_client_update(&self) {
        self.inner.clients_updated.inc();
    }

    pub fn increment_client_rights_update(&self) {
        self.inner.client_rights_updated.inc();
    }

    pub fn set_active_clients(&self, count: usize) {
        self.inner.active_clients.set(i64::try_from(count).unwrap_or(i64::MAX));
    }

    pub fn clients_created(&self) -> u64 {
        self.inner.clients_created.get()
    }

    pub fn clients_deleted(&self) -> u64 {
        self.inner.clients_deleted.get()
    }

    pub fn clients_updated(&self) -> u64 {
        self.inner.clients_updated.get()
    }

    pub fn client_rights_updated(&self) -> u64 {
        self.inner.client_rights_updated.get()
    }

    pub fn active_clients(&self) -> i64 {
        self.inner.active_clients.get()
    }

    /// Number of timed runs recorded for `operation` with the given outcome
    pub fn observed_count(&self, operation: &str, success: bool) -> u64 {
        self.inner
            .operation_duration
            .with_label_values(&[operation, outcome_label(success)])
            .get_sample_count()
    }

    /// Time `future`, record the outcome and log it.
    pub async fn observe<F, T, E>(&self, operation: &'static str, future: F) -> Result<T, E>
    where
        F: Future<Output = Result<T, E>>,
    {
        let start = Instant::now();
        let result = future.await;
        let elapsed = start.elapsed();
        let success = result.is_ok();

        self.inner
            .operation_duration
            .with_label_values(&[operation, outcome_label(success)])
            .observe(elapsed.as_secs_f64());

        if success {
            info!(
                "{} executed in {:.2} ms (success: true)",
                operation,
                elapsed.as_secs_f64() * 1000.0
            );
        } else {
            warn!(
                "{} executed in {:.2} ms (success: false)",
                operation,
                elapsed.as_secs_f64() * 1000.0
            );
        }

        result
    }

    /// Prometheus text exposition of every registered metric
    pub fn render(&self) -> Result<String, AppError> {
        let families = self.inner.registry.gather();
        Ok(TextEncoder::new().encode_to_string(&families)?)
    }
}

fn outcome_label(success: bool) -> &'static str {
    if success {
        "true"
    } else {
        "false"
    }
}
