//! Prometheus metrics for extrinsic submission.
//!
//! All metrics follow the naming convention: `gp_<component>_<metric>_<unit>`

use lazy_static::lazy_static;
use prometheus::{exponential_buckets, CounterVec, Encoder, Histogram, Opts, Registry, TextEncoder};
use std::sync::Arc;

use crate::TelemetryError;

lazy_static! {
    /// Global metrics registry
    pub static ref REGISTRY: Registry = Registry::new();

    /// Submission attempts by result
    pub static ref SUBMISSIONS: CounterVec = CounterVec::new(
        Opts::new("gp_submitter_submissions_total", "Submission attempts"),
        &["result"]  // result: subscribed/skipped/rejected
    ).expect("metric creation failed");

    /// Status updates pushed to callers
    pub static ref STATUS_UPDATES: CounterVec = CounterVec::new(
        Opts::new("gp_submitter_status_updates_total", "Status updates delivered to callers"),
        &["status"]
    ).expect("metric creation failed");

    /// Terminal outcomes
    pub static ref OUTCOMES: CounterVec = CounterVec::new(
        Opts::new("gp_submitter_outcomes_total", "Terminal submission outcomes"),
        &["outcome"]  // outcome: success/failure
    ).expect("metric creation failed");

    /// Time from submission to terminal outcome
    pub static ref OUTCOME_LATENCY: Histogram = Histogram::with_opts(
        prometheus::HistogramOpts::new(
            "gp_submitter_outcome_latency_seconds",
            "Time from submission to terminal outcome"
        ).buckets(exponential_buckets(0.05, 2.0, 12).expect("valid buckets"))
    ).expect("metric creation failed");
}

/// Handle to registered metrics.
pub struct MetricsHandle {
    _registry: Arc<Registry>,
}

/// Register all metrics with the global registry.
///
/// Calling this more than once is harmless.
pub fn register_metrics() -> Result<MetricsHandle, TelemetryError> {
    let metrics: Vec<Box<dyn prometheus::core::Collector>> = vec![
        Box::new(SUBMISSIONS.clone()),
        Box::new(STATUS_UPDATES.clone()),
        Box::new(OUTCOMES.clone()),
        Box::new(OUTCOME_LATENCY.clone()),
    ];

    for metric in metrics {
        match REGISTRY.register(metric) {
            Ok(()) | Err(prometheus::Error::AlreadyReg) => {}
            Err(e) => return Err(TelemetryError::MetricsInit(e.to_string())),
        }
    }

    Ok(MetricsHandle {
        _registry: Arc::new(REGISTRY.clone()),
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
