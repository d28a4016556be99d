//! Observer decorator that records Prometheus metrics.

use std::time::Instant;

use gp_extrinsic_submitter::{SubmissionObserver, TxHash, TxStatus};
use gp_telemetry::{log_tx_event, OUTCOMES, OUTCOME_LATENCY, STATUS_UPDATES};

/// Wraps an observer and counts what passes through it.
pub struct MeteredObserver<O> {
    inner: O,
    started: Instant,
}

impl<O: SubmissionObserver> MeteredObserver<O> {
    /// Start metering; latency is measured from now.
    pub fn new(inner: O) -> Self {
        Self {
            inner,
            started: Instant::now(),
        }
    }

    fn record_outcome(&self, outcome: &str) {
        OUTCOMES.with_label_values(&[outcome]).inc();
        OUTCOME_LATENCY.observe(self.started.elapsed().as_secs_f64());
    }
}

impl<O: SubmissionObserver> SubmissionObserver for MeteredObserver<O> {
    fn on_status(&self, status: TxStatus) {
        STATUS_UPDATES.with_label_values(&[status.label()]).inc();
        self.inner.on_status(status);
    }

    fn on_broadcast(&self) {
        self.inner.on_broadcast();
    }

    fn on_success(&self, tx_hash: TxHash) {
        self.record_outcome("success");
        log_tx_event!(info, "gp-submit", "Submission succeeded", tx_hash);
        self.inner.on_success(tx_hash);
    }

    fn on_failed(&self, message: String) {
        self.record_outcome("failure");
        self.inner.on_failed(message);
    }
}
