//! Recording Observer
//!
//! Keeps every callback invocation for later inspection.

use crate::domain::{TxHash, TxStatus};
use crate::ports::outbound::SubmissionObserver;
use parking_lot::Mutex;

/// Observer that records everything it is told.
#[derive(Debug, Default)]
pub struct RecordingObserver {
    statuses: Mutex<Vec<TxStatus>>,
    broadcasts: Mutex<usize>,
    successes: Mutex<Vec<TxHash>>,
    failures: Mutex<Vec<String>>,
}

impl RecordingObserver {
    /// Create an empty recorder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Status updates in arrival order.
    pub fn statuses(&self) -> Vec<TxStatus> {
        self.statuses.lock().clone()
    }

    /// Number of broadcast notifications.
    pub fn broadcasts(&self) -> usize {
        *self.broadcasts.lock()
    }

    /// Hashes passed to `on_success`.
    pub fn successes(&self) -> Vec<TxHash> {
        self.successes.lock().clone()
    }

    /// Messages passed to `on_failed`.
    pub fn failures(&self) -> Vec<String> {
        self.failures.lock().clone()
    }

    /// Total terminal callbacks received.
    pub fn outcome_count(&self) -> usize {
        self.successes.lock().len() + self.failures.lock().len()
    }

    /// Whether no callback was ever invoked.
    pub fn is_untouched(&self) -> bool {
        self.statuses.lock().is_empty() && self.broadcasts() == 0 && self.outcome_count() == 0
    }
}

impl SubmissionObserver for RecordingObserver {
    fn on_status(&self, status: TxStatus) {
        self.statuses.lock().push(status);
    }

    fn on_broadcast(&self) {
        *self.broadcasts.lock() += 1;
    }

    fn on_success(&self, tx_hash: TxHash) {
        self.successes.lock().push(tx_hash);
    }

    fn on_failed(&self, message: String) {
        self.failures.lock().push(message);
    }
}
