//! # Extrinsic Submission Service
//!
//! Application service layer that implements the `ExtrinsicSubmissionApi` trait.
//!
//! ## Architecture
//!
//! This is the hexagonal "application service" that:
//! - Implements the inbound port (`ExtrinsicSubmissionApi`)
//! - Uses the outbound port (`SigningTransport`) to sign and broadcast
//! - Reports to the outbound port (`SubmissionObserver`) via a `LifecycleTracker`

use async_trait::async_trait;
use parking_lot::RwLock;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tokio::sync::mpsc::UnboundedSender;
use tokio::sync::oneshot;
use tracing::{debug, info, warn};

use crate::adapters::ChannelObserver;
use crate::algorithms::{prepare_dispatch, LifecycleTracker};
use crate::config::SubmitterConfig;
use crate::domain::{
    LifecycleEvent, SkipReason, SubmissionOutcome, SubmissionRequest, SubmitterError, TxStatus,
};
use crate::ports::inbound::{ExtrinsicSubmissionApi, SubmitAttempt};
use crate::ports::outbound::{EventCallback, SigningTransport, SubmissionObserver};

/// Extrinsic submitter.
///
/// The transport may be connected after construction and the `ready` flag
/// follows the chain api's readiness; submissions made before both are in
/// place are skipped.
pub struct ExtrinsicSubmitter {
    transport: RwLock<Option<Arc<dyn SigningTransport>>>,
    ready: AtomicBool,
    config: SubmitterConfig,
}

impl ExtrinsicSubmitter {
    /// Create a submitter with no transport connected.
    pub fn new(config: SubmitterConfig) -> Self {
        Self {
            transport: RwLock::new(None),
            ready: AtomicBool::new(false),
            config,
        }
    }

    /// Create a submitter that is connected and ready.
    pub fn with_transport(config: SubmitterConfig, transport: Arc<dyn SigningTransport>) -> Self {
        let submitter = Self::new(config);
        submitter.connect(transport);
        submitter.set_ready(true);
        submitter
    }

    /// Attach a signing transport.
    pub fn connect(&self, transport: Arc<dyn SigningTransport>) {
        *self.transport.write() = Some(transport);
    }

    /// Detach the signing transport.
    pub fn disconnect(&self) {
        *self.transport.write() = None;
    }

    /// Update the chain api readiness flag.
    pub fn set_ready(&self, ready: bool) {
        self.ready.store(ready, Ordering::Release);
    }

    /// Check if the chain api is ready.
    pub fn is_ready(&self) -> bool {
        self.ready.load(Ordering::Acquire)
    }

    /// Active configuration.
    pub fn config(&self) -> &SubmitterConfig {
        &self.config
    }

    /// Wait for the outcome of an attempt made with a [`ChannelObserver`].
    ///
    /// Applies `outcome_timeout` when configured and unsubscribes on expiry.
    /// Callers that wrap the channel observer (metering, logging) submit
    /// themselves and hand the attempt here.
    pub async fn await_outcome(
        &self,
        attempt: SubmitAttempt,
        outcome_rx: oneshot::Receiver<SubmissionOutcome>,
    ) -> Result<SubmissionOutcome, SubmitterError> {
        let handle = match attempt {
            SubmitAttempt::Skipped(reason) => return Err(SubmitterError::Skipped(reason)),
            SubmitAttempt::Subscribed(handle) => Some(handle),
            SubmitAttempt::Rejected(_) => None,
        };

        let received = match self.config.outcome_timeout {
            Some(deadline) => match tokio::time::timeout(deadline, outcome_rx).await {
                Ok(received) => received,
                Err(_) => {
                    warn!(?deadline, "[gp-submitter] No outcome before deadline");
                    if let Some(handle) = handle {
                        handle.unsubscribe();
                    }
                    return Err(SubmitterError::Timeout(deadline));
                }
            },
            None => outcome_rx.await,
        };

        received.map_err(|_| SubmitterError::SubscriptionClosed)
    }

    fn precondition(
        &self,
        request: &SubmissionRequest,
    ) -> Result<Arc<dyn SigningTransport>, SkipReason> {
        let transport = self.transport.read().clone().ok_or(SkipReason::NoTransport)?;
        if !self.is_ready() {
            return Err(SkipReason::NotReady);
        }
        if request.payload.is_none() {
            return Err(SkipReason::NoPayload);
        }
        Ok(transport)
    }
}

#[async_trait]
impl ExtrinsicSubmissionApi for ExtrinsicSubmitter {
    async fn submit(
        &self,
        request: SubmissionRequest,
        observer: Arc<dyn SubmissionObserver>,
    ) -> SubmitAttempt {
        let transport = match self.precondition(&request) {
            Ok(transport) => transport,
            Err(reason) => {
                debug!(%reason, "[gp-submitter] Submission skipped");
                return SubmitAttempt::Skipped(reason);
            }
        };

        let SubmissionRequest {
            signer,
            proxy,
            payload,
            params,
            fallback_error_message,
        } = request;
        let Some(call) = payload else {
            return SubmitAttempt::Skipped(SkipReason::NoPayload);
        };

        let fallback = fallback_error_message
            .unwrap_or_else(|| self.config.fallback_error_message.clone());
        let prepared = prepare_dispatch(signer, proxy, call);

        info!(
            signer = %prepared.signer,
            call = %prepared.call,
            proxied = prepared.call.is_proxy(),
            "[gp-submitter] Submitting extrinsic"
        );

        let tracker = Arc::new(LifecycleTracker::new(observer, fallback));
        let on_event: EventCallback = {
            let tracker = tracker.clone();
            Arc::new(move |event: LifecycleEvent| {
                tracker.handle(event);
            })
        };

        match transport
            .sign_and_send(&prepared.signer, prepared.call, &params, on_event)
            .await
        {
            Ok(handle) => SubmitAttempt::Subscribed(handle),
            Err(error) => {
                let message = match tracker.reject(&error) {
                    Some(SubmissionOutcome::Failure(message)) => message,
                    // an event already settled the submission before the error surfaced
                    _ => error.to_string(),
                };
                SubmitAttempt::Rejected(message)
            }
        }
    }

    async fn submit_and_wait(
        &self,
        request: SubmissionRequest,
        status_tx: Option<UnboundedSender<TxStatus>>,
    ) -> Result<SubmissionOutcome, SubmitterError> {
        let (observer, outcome_rx) = ChannelObserver::new(status_tx);

        let attempt = self.submit(request, Arc::new(observer)).await;
        self.await_outcome(attempt, outcome_rx).await
    }
}
