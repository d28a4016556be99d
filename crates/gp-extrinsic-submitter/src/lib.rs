//! # GP Extrinsic Submitter
//!
//! Signs and submits governance extrinsics and reports their lifecycle.
//!
//! **Architecture:** Hexagonal (DDD + Ports/Adapters)
//!
//! ## Purpose
//!
//! Given a signing transport and a prepared call, submit it (optionally
//! wrapped in a proxy envelope), follow the subscription and turn each
//! lifecycle event into:
//! - an advisory status string for the UI
//! - at most one terminal `on_success` / `on_failed` callback
//!
//! ## Guarantees
//!
//! | Rule | Enforcement |
//! |------|-------------|
//! | One outcome per submission | `OutcomeLatch` (atomic check-and-set) |
//! | One broadcast notification | second latch |
//! | No error escapes the callback | rejections become `on_failed` |
//! | Missing transport/readiness/payload | silent no-op |
//!
//! ## Module Structure
//!
//! ```text
//! gp-extrinsic-submitter/
//! ├── domain/          # Call, LifecycleEvent, DispatchError, latch, errors
//! ├── algorithms/      # Proxy wrapping, failure messages, lifecycle tracker
//! ├── ports/           # ExtrinsicSubmissionApi, SigningTransport, SubmissionObserver
//! ├── adapters/        # Callback/channel/recording observers, scripted transport
//! ├── config.rs        # SubmitterConfig
//! └── service.rs       # ExtrinsicSubmitter
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod adapters;
pub mod algorithms;
pub mod config;
pub mod domain;
pub mod ports;
pub mod service;

// Re-exports
pub use adapters::{
    CallbackObserver, ChannelObserver, Delivery, RecordedDispatch, RecordingObserver,
    ScriptedTransport,
};
pub use algorithms::{
    describe_failure, describe_rejection, prepare_dispatch, LifecycleTracker, PreparedDispatch,
};
pub use config::{SubmitterConfig, DEFAULT_FALLBACK_ERROR_MESSAGE};
pub use domain::{
    AccountAddress, BlockHash, Call, ChainEvent, DispatchError, LifecycleEvent, LifecyclePhase,
    ModuleError, OutcomeLatch, SkipReason, SubmissionOutcome, SubmissionParams,
    SubmissionRequest, SubmitterError, TokenError, TransportError, TxHash, TxStatus,
    EXTRINSIC_FAILED, EXTRINSIC_SUCCESS,
};
pub use ports::{
    EventCallback, ExtrinsicSubmissionApi, SigningTransport, SubmissionObserver, SubmitAttempt,
    SubscriptionHandle,
};
pub use service::ExtrinsicSubmitter;

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
