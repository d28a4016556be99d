//! # Outbound Ports
//!
//! Traits for external dependencies: the chain client's signing transport
//! and the caller's callbacks.

use crate::domain::{
    AccountAddress, Call, LifecycleEvent, SubmissionParams, TransportError, TxHash, TxStatus,
};
use async_trait::async_trait;
use std::fmt;
use std::sync::Arc;

/// Subscription callback handed to the transport.
///
/// Invoked on the transport's own task or thread, once per lifecycle event.
pub type EventCallback = Arc<dyn Fn(LifecycleEvent) + Send + Sync>;

/// Signing and broadcast capability - outbound port.
///
/// Signs `call` with `signer`, submits it and pushes every lifecycle
/// update into `on_event` until the subscription ends or is cancelled.
#[async_trait]
pub trait SigningTransport: Send + Sync {
    /// Sign, submit and subscribe.
    ///
    /// `Err` means the subscription never started (network, signer or pool
    /// rejection). Retries, if any, are the transport's business.
    async fn sign_and_send(
        &self,
        signer: &AccountAddress,
        call: Call,
        params: &SubmissionParams,
        on_event: EventCallback,
    ) -> Result<SubscriptionHandle, TransportError>;
}

/// Handle to a live transport subscription.
///
/// Dropping the handle leaves the subscription running; call
/// [`SubscriptionHandle::unsubscribe`] to stop it.
pub struct SubscriptionHandle {
    cancel: Option<Box<dyn FnOnce() + Send>>,
}

impl SubscriptionHandle {
    /// Create a handle that runs `cancel` on unsubscribe.
    pub fn new(cancel: impl FnOnce() + Send + 'static) -> Self {
        Self {
            cancel: Some(Box::new(cancel)),
        }
    }

    /// Handle for a subscription that has nothing left to cancel.
    pub fn detached() -> Self {
        Self { cancel: None }
    }

    /// Stop receiving lifecycle events.
    pub fn unsubscribe(mut self) {
        if let Some(cancel) = self.cancel.take() {
            cancel();
        }
    }
}

impl fmt::Debug for SubscriptionHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SubscriptionHandle")
            .field("cancellable", &self.cancel.is_some())
            .finish()
    }
}

/// Caller callbacks - outbound port.
///
/// `on_status` and `on_broadcast` are optional and default to no-ops.
/// At most one of `on_success` / `on_failed` is invoked per submission.
pub trait SubmissionObserver: Send + Sync {
    /// Advisory status update. May repeat.
    fn on_status(&self, _status: TxStatus) {}

    /// Extrinsic was broadcast. Invoked at most once.
    fn on_broadcast(&self) {}

    /// Extrinsic dispatched successfully.
    fn on_success(&self, tx_hash: TxHash);

    /// Dispatch failed or the transport rejected the submission.
    fn on_failed(&self, message: String);
}

impl<T: SubmissionObserver + ?Sized> SubmissionObserver for Arc<T> {
    fn on_status(&self, status: TxStatus) {
        (**self).on_status(status)
    }

    fn on_broadcast(&self) {
        (**self).on_broadcast()
    }

    fn on_success(&self, tx_hash: TxHash) {
        (**self).on_success(tx_hash)
    }

    fn on_failed(&self, message: String) {
        (**self).on_failed(message)
    }
}
