//! Prometheus metrics for the signing pipeline.
//!
//! All metrics follow the naming convention: `ps_<metric>_<unit>`

use lazy_static::lazy_static;
use prometheus::{
    exponential_buckets, Counter, CounterVec, Encoder, Histogram, HistogramOpts, Opts, Registry,
    TextEncoder,
};
use std::sync::Arc;

use crate::TelemetryError;

lazy_static! {
    /// Global metrics registry
    pub static ref REGISTRY: Registry = Registry::new();

    /// Platform requests appended to an envelope
    pub static ref SIGNATURES_ATTACHED: Counter = Counter::new(
        "ps_signatures_attached_total",
        "Total encrypted signatures attached to request envelopes"
    ).expect("metric creation failed");

    /// Calls that left the envelope unsigned
    pub static ref SIGNATURES_SKIPPED: CounterVec = CounterVec::new(
        Opts::new("ps_signatures_skipped_total", "Signing calls that left the envelope unsigned"),
        &["reason"]  // no_auth_ticket, malformed_hash, missing_hashes
    ).expect("metric creation failed");

    /// Calls that failed with a fatal error
    pub static ref SIGNING_FAILURES: CounterVec = CounterVec::new(
        Opts::new("ps_signing_failures_total", "Signing calls that failed fatally"),
        &["error_type"]  // encryption, hash_count
    ).expect("metric creation failed");

    /// Size of the encrypted signature payload
    pub static ref ENCRYPTED_SIGNATURE_BYTES: Histogram = Histogram::with_opts(
        HistogramOpts::new(
            "ps_encrypted_signature_bytes",
            "Size of encrypted signatures in bytes"
        ).buckets(exponential_buckets(64.0, 2.0, 10).expect("valid buckets"))
    ).expect("metric creation failed");
}

/// Handle for the registered metrics
pub struct MetricsHandle {
    registry: Arc<Registry>,
}

impl MetricsHandle {
    /// Registry the signing metrics were registered in.
    pub fn registry(&self) -> &Registry {
        &self.registry
    }
}

/// Register all metrics with the global registry.
///
/// Registering twice fails with `TelemetryError::MetricsInit`.
pub fn register_metrics() -> Result<MetricsHandle, TelemetryError> {
    let metrics: Vec<Box<dyn prometheus::core::Collector>> = vec![
        Box::new(SIGNATURES_ATTACHED.clone()),
        Box::new(SIGNATURES_SKIPPED.clone()),
        Box::new(SIGNING_FAILURES.clone()),
        Box::new(ENCRYPTED_SIGNATURE_BYTES.clone()),
    ];

    for metric in metrics {
        REGISTRY
            .register(metric)
            .map_err(|e| TelemetryError::MetricsInit(e.to_string()))?;
    }

    Ok(MetricsHandle {
        registry: Arc::new(REGISTRY.clone()),
    })
}

/// Encode all metrics as Prometheus text format.
pub fn encode_metrics() -> Result<String, TelemetryError> {
    let encoder = TextEncoder::new();
    let metric_families = REGISTRY.gather();
    let mut buffer = Vec::new();
    encoder
        .encode(&metric_families, &mut buffer)
        .map_err(|e| TelemetryError::MetricsInit(e.to_string()))?;
    String::from_utf8(buffer).map_err(|e| TelemetryError::MetricsInit(e.to_string()))
}

/// Count a signature attached to an envelope.
pub fn record_attached(encrypted_len: usize) {
    SIGNATURES_ATTACHED.inc();
    ENCRYPTED_SIGNATURE_BYTES.observe(encrypted_len as f64);
}

/// Count a call that left the envelope unsigned.
pub fn record_skipped(reason: &str) {
    SIGNATURES_SKIPPED.with_label_values(&[reason]).inc();
}

/// Count a fatal signing failure.
pub fn record_failure(error_type: &str) {
    SIGNING_FAILURES.with_label_values(&[error_type]).inc();
}
