//! # Domain Value Objects
//!
//! Immutable value types for extrinsic submission.

use primitive_types::H256;
use serde::{Deserialize, Serialize};
use std::fmt;

use super::errors::SubmitterError;

/// Extrinsic hash.
pub type TxHash = H256;

/// Block hash.
pub type BlockHash = H256;

/// Base58 alphabet used by SS58 addresses.
const BASE58_ALPHABET: &str = "123456789ABCDEFGHJKLMNPQRSTUVWXYZabcdefghijkmnopqrstuvwxyz";

/// SS58 text length range (one and two byte network prefixes).
const SS58_LEN: std::ops::RangeInclusive<usize> = 46..=50;

/// A chain account address.
///
/// Accepts SS58 text or a `0x`-prefixed 20 or 32 byte hex account. The
/// checksum is not verified; the signing transport owns that.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct AccountAddress(String);

impl AccountAddress {
    /// Parse and validate an address.
    pub fn parse(value: &str) -> Result<Self, SubmitterError> {
        let value = value.trim();

        if let Some(hex_part) = value.strip_prefix("0x") {
            let bytes = hex::decode(hex_part)
                .map_err(|e| SubmitterError::InvalidAddress(format!("{}: {}", value, e)))?;
            return match bytes.len() {
                20 | 32 => Ok(Self(value.to_lowercase())),
                n => Err(SubmitterError::InvalidAddress(format!(
                    "{}: expected 20 or 32 bytes, got {}",
                    value, n
                ))),
            };
        }

        if !SS58_LEN.contains(&value.len()) {
            return Err(SubmitterError::InvalidAddress(format!(
                "{}: unexpected length {}",
                value,
                value.len()
            )));
        }

        if let Some(bad) = value.chars().find(|c| !BASE58_ALPHABET.contains(*c)) {
            return Err(SubmitterError::InvalidAddress(format!(
                "{}: invalid character '{}'",
                value, bad
            )));
        }

        Ok(Self(value.to_string()))
    }

    /// Address text.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Whether this is a hex (unified/EVM style) account.
    pub fn is_hex(&self) -> bool {
        self.0.starts_with("0x")
    }
}

impl fmt::Display for AccountAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<String> for AccountAddress {
    type Error = SubmitterError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<AccountAddress> for String {
    fn from(address: AccountAddress) -> Self {
        address.0
    }
}

impl std::str::FromStr for AccountAddress {
    type Err = SubmitterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

/// Advisory status pushed to the caller's status callback.
///
/// The rendered strings are shown to users verbatim.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TxStatus {
    /// Pool reported the extrinsic invalid.
    Invalid,
    /// Extrinsic accepted into the pool.
    Ready,
    /// Extrinsic gossiped to peers.
    Broadcasted,
    /// Extrinsic included in a block.
    InBlock,
    /// `ExtrinsicSuccess` seen in the inclusion block.
    Success,
    /// `ExtrinsicFailed` seen in the inclusion block.
    Failed,
    /// Transport refused to start the subscription.
    Rejected,
}

impl TxStatus {
    /// User-facing status text.
    pub fn as_str(&self) -> &'static str {
        match self {
            TxStatus::Invalid => "Transaction invalid",
            TxStatus::Ready => "Transaction is ready",
            TxStatus::Broadcasted => "Transaction has been broadcasted",
            TxStatus::InBlock => "Transaction is in block",
            TxStatus::Success => "Transaction Success",
            TxStatus::Failed => "Transaction failed",
            TxStatus::Rejected => ":( transaction failed",
        }
    }

    /// Short label for metrics.
    pub fn label(&self) -> &'static str {
        match self {
            TxStatus::Invalid => "invalid",
            TxStatus::Ready => "ready",
            TxStatus::Broadcasted => "broadcasted",
            TxStatus::InBlock => "in_block",
            TxStatus::Success => "success",
            TxStatus::Failed => "failed",
            TxStatus::Rejected => "rejected",
        }
    }
}

impl fmt::Display for TxStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Lifecycle phase tag, without payload.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LifecyclePhase {
    /// Rejected by the pool.
    Invalid,
    /// In the pool.
    Ready,
    /// Gossiped.
    Broadcast,
    /// Included in a block.
    InBlock,
    /// Inclusion block finalized.
    Finalized,
}

impl fmt::Display for LifecyclePhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            LifecyclePhase::Invalid => "invalid",
            LifecyclePhase::Ready => "ready",
            LifecyclePhase::Broadcast => "broadcast",
            LifecyclePhase::InBlock => "in_block",
            LifecyclePhase::Finalized => "finalized",
        };
        f.write_str(s)
    }
}

/// Why a submission request was a no-op.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum SkipReason {
    /// No signing capability connected.
    NoTransport,
    /// The chain api is not ready yet.
    NotReady,
    /// The request carries no transaction.
    NoPayload,
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            SkipReason::NoTransport => "no signing transport",
            SkipReason::NotReady => "chain api not ready",
            SkipReason::NoPayload => "no transaction payload",
        };
        f.write_str(s)
    }
}
