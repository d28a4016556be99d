//! # Inbound Ports
//!
//! API trait defining what the submission subsystem can do.

use crate::domain::{SkipReason, SubmissionOutcome, SubmissionRequest, SubmitterError, TxStatus};
use crate::ports::outbound::{SubmissionObserver, SubscriptionHandle};
use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::mpsc::UnboundedSender;

/// What happened when a submission was attempted.
#[derive(Debug)]
pub enum SubmitAttempt {
    /// Preconditions not met; nothing was submitted and no callback fired.
    Skipped(SkipReason),
    /// The transport accepted the submission; outcomes arrive via the observer.
    Subscribed(SubscriptionHandle),
    /// The transport refused; `on_failed` already received this message.
    Rejected(String),
}

impl SubmitAttempt {
    /// Check if the transport accepted the submission.
    pub fn is_subscribed(&self) -> bool {
        matches!(self, SubmitAttempt::Subscribed(_))
    }
}

/// Extrinsic submission API - inbound port.
#[async_trait]
pub trait ExtrinsicSubmissionApi: Send + Sync {
    /// Submit a request and report its lifecycle to `observer`.
    ///
    /// Never returns an error: transport failures are reported through
    /// `observer.on_failed` and as [`SubmitAttempt::Rejected`].
    async fn submit(
        &self,
        request: SubmissionRequest,
        observer: Arc<dyn SubmissionObserver>,
    ) -> SubmitAttempt;

    /// Submit and wait for the terminal outcome.
    ///
    /// Status updates are forwarded to `status_tx` when given.
    async fn submit_and_wait(
        &self,
        request: SubmissionRequest,
        status_tx: Option<UnboundedSender<TxStatus>>,
    ) -> Result<SubmissionOutcome, SubmitterError>;
}
