//! # Domain Errors
//!
//! Error types for extrinsic submission.
//!
//! Chain-level dispatch failures are never errors here: they are turned into
//! a `SubmissionOutcome::Failure` message. These types only cover the
//! transport boundary and the awaitable helper.

use std::time::Duration;
use thiserror::Error;

use super::value_objects::SkipReason;

/// Failure reported by the signing/transport capability when the
/// subscription itself cannot be established.
///
/// `Display` yields the bare message so it can be surfaced to the caller
/// unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TransportError {
    /// Connection to the node failed or dropped.
    #[error("{0}")]
    Network(String),

    /// The signer refused or failed to sign.
    #[error("{0}")]
    Signing(String),

    /// The node rejected the extrinsic before it entered the pool.
    #[error("{0}")]
    Rejected(String),

    /// Anything else the transport reports.
    #[error("{0}")]
    Other(String),
}

/// Submitter error types.
#[derive(Debug, Error)]
pub enum SubmitterError {
    /// Address is neither SS58 nor a 20/32 byte hex account.
    #[error("Invalid address: {0}")]
    InvalidAddress(String),

    /// Preconditions were not met, nothing was submitted.
    #[error("Submission skipped: {0}")]
    Skipped(SkipReason),

    /// No terminal outcome arrived before the caller's deadline.
    #[error("No outcome after {0:?}")]
    Timeout(Duration),

    /// The transport dropped the subscription without a terminal outcome.
    #[error("Subscription closed before an outcome was reached")]
    SubscriptionClosed,
}
