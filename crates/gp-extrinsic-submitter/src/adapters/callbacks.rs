//! Callback Observer
//!
//! Closure-based observer matching the portal's callback shape:
//! `on_success`, `on_failed`, optional `on_broadcast` and `set_status`.

use crate::domain::{TxHash, TxStatus};
use crate::ports::outbound::SubmissionObserver;

type HashFn = Box<dyn Fn(TxHash) + Send + Sync>;
type MessageFn = Box<dyn Fn(String) + Send + Sync>;
type NotifyFn = Box<dyn Fn() + Send + Sync>;
type StatusFn = Box<dyn Fn(&str) + Send + Sync>;

/// Observer built from closures.
pub struct CallbackObserver {
    on_success: HashFn,
    on_failed: MessageFn,
    on_broadcast: Option<NotifyFn>,
    set_status: Option<StatusFn>,
}

impl CallbackObserver {
    /// Create with the two mandatory callbacks.
    pub fn new(
        on_success: impl Fn(TxHash) + Send + Sync + 'static,
        on_failed: impl Fn(String) + Send + Sync + 'static,
    ) -> Self {
        Self {
            on_success: Box::new(on_success),
            on_failed: Box::new(on_failed),
            on_broadcast: None,
            set_status: None,
        }
    }

    /// Called once when the extrinsic is broadcast.
    pub fn with_broadcast(mut self, on_broadcast: impl Fn() + Send + Sync + 'static) -> Self {
        self.on_broadcast = Some(Box::new(on_broadcast));
        self
    }

    /// Receives each status string.
    pub fn with_status(mut self, set_status: impl Fn(&str) + Send + Sync + 'static) -> Self {
        self.set_status = Some(Box::new(set_status));
        self
    }
}

impl SubmissionObserver for CallbackObserver {
    fn on_status(&self, status: TxStatus) {
        if let Some(set_status) = &self.set_status {
            set_status(status.as_str());
        }
    }

    fn on_broadcast(&self) {
        if let Some(on_broadcast) = &self.on_broadcast {
            on_broadcast();
        }
    }

    fn on_success(&self, tx_hash: TxHash) {
        (self.on_success)(tx_hash);
    }

    fn on_failed(&self, message: String) {
        (self.on_failed)(message);
    }
}
