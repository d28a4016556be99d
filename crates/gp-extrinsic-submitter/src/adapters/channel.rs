//! Channel Observer
//!
//! Bridges the callback contract to async code: the outcome goes out on a
//! oneshot channel, status updates on an optional unbounded channel.

use parking_lot::Mutex;
use tokio::sync::{mpsc, oneshot};

use crate::domain::{SubmissionOutcome, TxHash, TxStatus};
use crate::ports::outbound::SubmissionObserver;

/// Observer that forwards into tokio channels.
pub struct ChannelObserver {
    outcome_tx: Mutex<Option<oneshot::Sender<SubmissionOutcome>>>,
    status_tx: Option<mpsc::UnboundedSender<TxStatus>>,
}

impl ChannelObserver {
    /// Create the observer and the receiver for its outcome.
    pub fn new(
        status_tx: Option<mpsc::UnboundedSender<TxStatus>>,
    ) -> (Self, oneshot::Receiver<SubmissionOutcome>) {
        let (outcome_tx, outcome_rx) = oneshot::channel();
        let observer = Self {
            outcome_tx: Mutex::new(Some(outcome_tx)),
            status_tx,
        };
        (observer, outcome_rx)
    }

    fn deliver(&self, outcome: SubmissionOutcome) {
        if let Some(tx) = self.outcome_tx.lock().take() {
            // receiver may have given up already
            let _ = tx.send(outcome);
        }
    }
}

impl SubmissionObserver for ChannelObserver {
    fn on_status(&self, status: TxStatus) {
        if let Some(tx) = &self.status_tx {
            let _ = tx.send(status);
        }
    }

    fn on_success(&self, tx_hash: TxHash) {
        self.deliver(SubmissionOutcome::Success(tx_hash));
    }

    fn on_failed(&self, message: String) {
        self.deliver(SubmissionOutcome::Failure(message));
    }
}
