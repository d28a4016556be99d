//! Scripted Signing Transport
//!
//! Implements `SigningTransport` without a node: replays a fixed list of
//! lifecycle events, or rejects with a configured error. Used for tests and
//! for replaying recorded submissions from the CLI.

use async_trait::async_trait;
use parking_lot::Mutex;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tracing::debug;

use crate::domain::{AccountAddress, Call, LifecycleEvent, SubmissionParams, TransportError};
use crate::ports::outbound::{EventCallback, SigningTransport, SubscriptionHandle};

/// How scripted events reach the callback.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Delivery {
    /// Delivered inline before `sign_and_send` returns.
    Immediate,
    /// Delivered from a spawned task, `interval` apart, until unsubscribed.
    Background {
        /// Delay before each event.
        interval: Duration,
    },
    /// Not delivered; the callback is kept alive and fed by [`ScriptedTransport::emit`].
    Hold,
}

/// A dispatch as seen by the transport.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RecordedDispatch {
    /// Signing account.
    pub signer: AccountAddress,
    /// Dispatched call.
    pub call: Call,
    /// Signing options.
    pub params: SubmissionParams,
}

/// In-process transport driven by a script.
pub struct ScriptedTransport {
    script: Vec<LifecycleEvent>,
    rejection: Option<TransportError>,
    delivery: Delivery,
    dispatched: Mutex<Vec<RecordedDispatch>>,
    held: Mutex<Vec<EventCallback>>,
}

impl ScriptedTransport {
    /// Replay `script` for every submission.
    pub fn new(script: Vec<LifecycleEvent>) -> Self {
        Self {
            script,
            rejection: None,
            delivery: Delivery::Immediate,
            dispatched: Mutex::new(Vec::new()),
            held: Mutex::new(Vec::new()),
        }
    }

    /// Refuse every submission with `error`.
    pub fn rejecting(error: TransportError) -> Self {
        Self {
            rejection: Some(error),
            ..Self::new(Vec::new())
        }
    }

    /// Change the delivery mode.
    pub fn with_delivery(mut self, delivery: Delivery) -> Self {
        self.delivery = delivery;
        self
    }

    /// Dispatches received so far.
    pub fn dispatched(&self) -> Vec<RecordedDispatch> {
        self.dispatched.lock().clone()
    }

    /// Drain the dispatch record.
    pub fn take_dispatched(&self) -> Vec<RecordedDispatch> {
        std::mem::take(&mut *self.dispatched.lock())
    }

    /// Push `event` to every held subscription.
    pub fn emit(&self, event: LifecycleEvent) {
        let held: Vec<EventCallback> = self.held.lock().clone();
        for callback in held {
            callback(event.clone());
        }
    }

    /// Drop every held subscription.
    pub fn close_held(&self) {
        self.held.lock().clear();
    }

    fn spawn_delivery(
        &self,
        on_event: EventCallback,
        interval: Duration,
    ) -> SubscriptionHandle {
        let cancelled = Arc::new(AtomicBool::new(false));
        let flag = cancelled.clone();
        let script = self.script.clone();

        tokio::spawn(async move {
            for event in script {
                tokio::time::sleep(interval).await;
                if flag.load(Ordering::Acquire) {
                    debug!("[gp-submitter] Scripted subscription cancelled");
                    break;
                }
                on_event(event);
            }
        });

        SubscriptionHandle::new(move || cancelled.store(true, Ordering::Release))
    }
}

#[async_trait]
impl SigningTransport for ScriptedTransport {
    async fn sign_and_send(
        &self,
        signer: &AccountAddress,
        call: Call,
        params: &SubmissionParams,
        on_event: EventCallback,
    ) -> Result<SubscriptionHandle, TransportError> {
        debug!(signer = %signer, call = %call, "[gp-submitter] Scripted sign_and_send");

        self.dispatched.lock().push(RecordedDispatch {
            signer: signer.clone(),
            call,
            params: params.clone(),
        });

        if let Some(error) = &self.rejection {
            return Err(error.clone());
        }

        match self.delivery {
            Delivery::Immediate => {
                for event in self.script.iter().cloned() {
                    on_event(event);
                }
                Ok(SubscriptionHandle::detached())
            }
            Delivery::Background { interval } => Ok(self.spawn_delivery(on_event, interval)),
            Delivery::Hold => {
                self.held.lock().push(on_event);
                Ok(SubscriptionHandle::detached())
            }
        }
    }
}
