//! # Domain Entities
//!
//! Submission requests, lifecycle events and outcomes.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::value_objects::{AccountAddress, BlockHash, LifecyclePhase, TxHash};

/// Event method that marks a successful dispatch.
pub const EXTRINSIC_SUCCESS: &str = "ExtrinsicSuccess";

/// Event method that marks a failed dispatch.
pub const EXTRINSIC_FAILED: &str = "ExtrinsicFailed";

/// A runtime call that has been constructed but not signed.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind")]
pub enum Call {
    /// A plain pallet call with SCALE-encoded arguments.
    Runtime {
        /// Pallet name, e.g. `democracy`.
        pallet: String,
        /// Call name, e.g. `vote`.
        method: String,
        /// Encoded call arguments.
        #[serde(with = "hex::serde", default)]
        args: Vec<u8>,
    },
    /// `proxy.proxy(real, force_proxy_type, call)` envelope.
    Proxy {
        /// Account the proxy acts on behalf of.
        real: AccountAddress,
        /// Restrict to a proxy type, `None` for any.
        force_proxy_type: Option<String>,
        /// Wrapped call.
        call: Box<Call>,
    },
}

impl Call {
    /// Create a plain runtime call.
    pub fn runtime(pallet: impl Into<String>, method: impl Into<String>, args: Vec<u8>) -> Self {
        Call::Runtime {
            pallet: pallet.into(),
            method: method.into(),
            args,
        }
    }

    /// Whether this call is a proxy envelope.
    pub fn is_proxy(&self) -> bool {
        matches!(self, Call::Proxy { .. })
    }

    /// The innermost non-proxy call.
    pub fn inner(&self) -> &Call {
        match self {
            Call::Proxy { call, .. } => call.inner(),
            runtime => runtime,
        }
    }
}

impl fmt::Display for Call {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Call::Runtime { pallet, method, .. } => write!(f, "{}.{}", pallet, method),
            Call::Proxy { real, call, .. } => write!(f, "proxy.proxy({}, {})", real, call),
        }
    }
}

/// Options forwarded to `sign_and_send`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SubmissionParams {
    /// Explicit nonce, `None` lets the transport pick the next one.
    pub nonce: Option<u64>,
    /// Tip paid to the block author.
    pub tip: u128,
    /// Mortality period in blocks, `None` for immortal.
    pub era_period: Option<u64>,
}

/// A user-initiated submission.
///
/// Consumed by value when submission starts.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmissionRequest {
    /// Account that authorizes the call.
    pub signer: AccountAddress,
    /// When set, the call is wrapped in a proxy envelope and signed by this account.
    #[serde(default)]
    pub proxy: Option<AccountAddress>,
    /// The unsigned transaction.
    pub payload: Option<Call>,
    /// Signing options.
    #[serde(default)]
    pub params: SubmissionParams,
    /// Message used when a failure carries no readable description.
    #[serde(default)]
    pub fallback_error_message: Option<String>,
}

impl SubmissionRequest {
    /// Create a request for `payload` signed by `signer`.
    pub fn new(signer: AccountAddress, payload: Call) -> Self {
        Self {
            signer,
            proxy: None,
            payload: Some(payload),
            params: SubmissionParams::default(),
            fallback_error_message: None,
        }
    }

    /// Submit through a proxy account.
    pub fn with_proxy(mut self, proxy: AccountAddress) -> Self {
        self.proxy = Some(proxy);
        self
    }

    /// Override signing options.
    pub fn with_params(mut self, params: SubmissionParams) -> Self {
        self.params = params;
        self
    }

    /// Override the fallback failure message.
    pub fn with_fallback_message(mut self, message: impl Into<String>) -> Self {
        self.fallback_error_message = Some(message.into());
        self
    }
}

/// Status update delivered by the transport subscription.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status")]
pub enum LifecycleEvent {
    /// Pool rejected the extrinsic.
    Invalid,
    /// Extrinsic is in the pool.
    Ready,
    /// Extrinsic was gossiped to peers.
    Broadcast,
    /// Extrinsic was included; carries the events it emitted.
    InBlock {
        /// Events emitted by the extrinsic, in order.
        events: Vec<ChainEvent>,
        /// Extrinsic hash.
        tx_hash: TxHash,
    },
    /// The inclusion block was finalized.
    Finalized {
        /// Finalized block hash.
        block_hash: BlockHash,
        /// Extrinsic hash.
        tx_hash: TxHash,
    },
}

impl LifecycleEvent {
    /// Tag of this event.
    pub fn phase(&self) -> LifecyclePhase {
        match self {
            LifecycleEvent::Invalid => LifecyclePhase::Invalid,
            LifecycleEvent::Ready => LifecyclePhase::Ready,
            LifecycleEvent::Broadcast => LifecyclePhase::Broadcast,
            LifecycleEvent::InBlock { .. } => LifecyclePhase::InBlock,
            LifecycleEvent::Finalized { .. } => LifecyclePhase::Finalized,
        }
    }
}

/// A runtime event attached to the inclusion block.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChainEvent {
    /// Event method name, e.g. `ExtrinsicSuccess`.
    pub method: String,
    /// Dispatch error carried by `ExtrinsicFailed`.
    #[serde(default)]
    pub dispatch_error: Option<DispatchError>,
}

impl ChainEvent {
    /// `system.ExtrinsicSuccess`.
    pub fn success() -> Self {
        Self {
            method: EXTRINSIC_SUCCESS.to_string(),
            dispatch_error: None,
        }
    }

    /// `system.ExtrinsicFailed` with its dispatch error.
    pub fn failed(error: DispatchError) -> Self {
        Self {
            method: EXTRINSIC_FAILED.to_string(),
            dispatch_error: Some(error),
        }
    }

    /// Any other event.
    pub fn other(method: impl Into<String>) -> Self {
        Self {
            method: method.into(),
            dispatch_error: None,
        }
    }
}

/// Structured dispatch failure.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "detail")]
pub enum DispatchError {
    /// Error raised by a pallet.
    Module(ModuleError),
    /// Token/balance error.
    Token(TokenError),
    /// Any other error kind, identified by its type name when known.
    Other {
        /// Variant name, e.g. `BadOrigin`.
        type_name: Option<String>,
    },
}

impl DispatchError {
    /// Variant name as reported by the runtime.
    pub fn type_name(&self) -> Option<&str> {
        match self {
            DispatchError::Module(_) => Some("Module"),
            DispatchError::Token(_) => Some("Token"),
            DispatchError::Other { type_name } => type_name.as_deref(),
        }
    }
}

/// Pallet error with its metadata documentation.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModuleError {
    /// Pallet name.
    pub section: String,
    /// Error variant.
    pub method: String,
    /// Doc lines from metadata.
    #[serde(default)]
    pub docs: Vec<String>,
}

/// Token error kinds.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TokenError {
    /// Funds are unavailable.
    FundsUnavailable,
    /// Account would be reaped while it is the only provider.
    OnlyProvider,
    /// Balance would fall below the existential deposit.
    BelowMinimum,
    /// Account cannot be created.
    CannotCreate,
    /// Asset id is unknown.
    UnknownAsset,
    /// Funds exist but are frozen.
    Frozen,
    /// Operation not supported by the asset.
    Unsupported,
    /// Account cannot be created for a hold.
    CannotCreateHold,
    /// Withdrawal would kill the account.
    NotExpendable,
    /// Account is blocked.
    Blocked,
    /// Not enough funds.
    NoFunds,
}

impl TokenError {
    /// Variant name.
    pub fn name(&self) -> &'static str {
        match self {
            TokenError::FundsUnavailable => "FundsUnavailable",
            TokenError::OnlyProvider => "OnlyProvider",
            TokenError::BelowMinimum => "BelowMinimum",
            TokenError::CannotCreate => "CannotCreate",
            TokenError::UnknownAsset => "UnknownAsset",
            TokenError::Frozen => "Frozen",
            TokenError::Unsupported => "Unsupported",
            TokenError::CannotCreateHold => "CannotCreateHold",
            TokenError::NotExpendable => "NotExpendable",
            TokenError::Blocked => "Blocked",
            TokenError::NoFunds => "NoFunds",
        }
    }
}

impl fmt::Display for TokenError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Terminal result of a submission.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum SubmissionOutcome {
    /// `ExtrinsicSuccess` observed in block.
    Success(TxHash),
    /// Dispatch failed or the transport rejected the submission.
    Failure(String),
}

impl SubmissionOutcome {
    /// Check if successful.
    pub fn is_success(&self) -> bool {
        matches!(self, SubmissionOutcome::Success(_))
    }
}
