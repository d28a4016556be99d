//! # Lifecycle Tracking
//!
//! Reactive handler for one submission's event stream.
//!
//! ```text
//! Ready ──→ Broadcast ──→ InBlock ──→ Finalized
//!   │                        │
//!   └── Invalid              ├── ExtrinsicSuccess → on_success
//!                            └── ExtrinsicFailed  → on_failed
//! ```
//!
//! The tracker does not enforce ordering. Every event updates the status;
//! only the first decisive `InBlock` (or a transport rejection) produces an
//! outcome.

use std::sync::Arc;
use tracing::{debug, info, warn};

use super::dispatch_message::{describe_failure, describe_rejection};
use crate::domain::{
    ChainEvent, LifecycleEvent, OutcomeLatch, SubmissionOutcome, TransportError, TxHash, TxStatus,
    EXTRINSIC_FAILED, EXTRINSIC_SUCCESS,
};
use crate::ports::outbound::SubmissionObserver;

/// Per-submission event handler.
pub struct LifecycleTracker {
    observer: Arc<dyn SubmissionObserver>,
    fallback: String,
    outcome: OutcomeLatch,
    broadcast: OutcomeLatch,
}

impl LifecycleTracker {
    /// Create a tracker reporting to `observer`.
    pub fn new(observer: Arc<dyn SubmissionObserver>, fallback: impl Into<String>) -> Self {
        Self {
            observer,
            fallback: fallback.into(),
            outcome: OutcomeLatch::new(),
            broadcast: OutcomeLatch::new(),
        }
    }

    /// Whether a terminal outcome has been reported.
    pub fn is_resolved(&self) -> bool {
        self.outcome.has_fired()
    }

    /// Process one lifecycle event.
    ///
    /// Returns the outcome when this event resolved the submission.
    pub fn handle(&self, event: LifecycleEvent) -> Option<SubmissionOutcome> {
        debug!(
            phase = %event.phase(),
            resolved = self.is_resolved(),
            "[gp-submitter] Lifecycle event"
        );

        match event {
            LifecycleEvent::Invalid => {
                warn!("[gp-submitter] Extrinsic reported invalid by the pool");
                self.observer.on_status(TxStatus::Invalid);
                None
            }
            LifecycleEvent::Ready => {
                debug!("[gp-submitter] Extrinsic ready");
                self.observer.on_status(TxStatus::Ready);
                None
            }
            LifecycleEvent::Broadcast => {
                debug!("[gp-submitter] Extrinsic broadcast");
                self.observer.on_status(TxStatus::Broadcasted);
                if self.broadcast.try_fire() {
                    self.observer.on_broadcast();
                }
                None
            }
            LifecycleEvent::InBlock { events, tx_hash } => {
                info!(tx_hash = ?tx_hash, events = events.len(), "[gp-submitter] Extrinsic in block");
                self.observer.on_status(TxStatus::InBlock);
                self.settle_in_block(&events, tx_hash)
            }
            LifecycleEvent::Finalized {
                block_hash,
                tx_hash,
            } => {
                info!(
                    tx_hash = ?tx_hash,
                    block_hash = ?block_hash,
                    "[gp-submitter] Extrinsic finalized"
                );
                None
            }
        }
    }

    /// Report a transport rejection.
    pub fn reject(&self, error: &TransportError) -> Option<SubmissionOutcome> {
        let message = describe_rejection(error, &self.fallback);
        warn!(error = %message, "[gp-submitter] Transport rejected submission");
        self.resolve(TxStatus::Rejected, SubmissionOutcome::Failure(message))
    }

    fn settle_in_block(&self, events: &[ChainEvent], tx_hash: TxHash) -> Option<SubmissionOutcome> {
        let decisive = events
            .iter()
            .find(|e| e.method == EXTRINSIC_SUCCESS || e.method == EXTRINSIC_FAILED);

        match decisive {
            Some(event) if event.method == EXTRINSIC_SUCCESS => {
                self.resolve(TxStatus::Success, SubmissionOutcome::Success(tx_hash))
            }
            Some(event) => {
                let message = describe_failure(event.dispatch_error.as_ref(), &self.fallback);
                self.resolve(TxStatus::Failed, SubmissionOutcome::Failure(message))
            }
            None => {
                debug!(tx_hash = ?tx_hash, "[gp-submitter] No dispatch result in block events");
                None
            }
        }
    }

    fn resolve(&self, status: TxStatus, outcome: SubmissionOutcome) -> Option<SubmissionOutcome> {
        if !self.outcome.try_fire() {
            debug!(?outcome, "[gp-submitter] Outcome already reported, ignoring");
            return None;
        }

        self.observer.on_status(status);
        match &outcome {
            SubmissionOutcome::Success(tx_hash) => self.observer.on_success(*tx_hash),
            SubmissionOutcome::Failure(message) => self.observer.on_failed(message.clone()),
        }
        Some(outcome)
    }
}
