//! Scenario files.
//!
//! A scenario is a submission request plus what the node answered: either a
//! list of lifecycle events or a rejection message.
//!
//! ```json
//! {
//!   "request": {
//!     "signer": "5GrwvaEF5zXb26Fz9rcQpDWS57CtERHpNehXCPcNoHGKutQY",
//!     "payload": { "kind": "Runtime", "pallet": "democracy", "method": "vote", "args": "00" }
//!   },
//!   "events": [ { "status": "Ready" }, { "status": "Broadcast" } ]
//! }
//! ```

use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::Path;
use std::time::Duration;

use gp_extrinsic_submitter::{
    Delivery, LifecycleEvent, ScriptedTransport, SubmissionRequest, TransportError,
};

/// A recorded submission.
#[derive(Debug, Clone, Deserialize)]
pub struct Scenario {
    /// What the user submitted.
    pub request: SubmissionRequest,
    /// Lifecycle events the node reported.
    #[serde(default)]
    pub events: Vec<LifecycleEvent>,
    /// Transport error message, when the node refused the submission.
    #[serde(default)]
    pub reject: Option<String>,
    /// Delay between replayed events; inline replay when absent.
    #[serde(default)]
    pub event_interval_ms: Option<u64>,
}

impl Scenario {
    /// Parse a scenario from JSON text.
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).context("invalid scenario JSON")
    }

    /// Load a scenario file.
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read scenario {}", path.display()))?;
        Self::from_json(&text)
    }

    /// Build the transport that replays this scenario.
    pub fn transport(&self) -> ScriptedTransport {
        if let Some(message) = &self.reject {
            return ScriptedTransport::rejecting(TransportError::Rejected(message.clone()));
        }

        let transport = ScriptedTransport::new(self.events.clone());
        match self.event_interval_ms {
            Some(ms) => transport.with_delivery(Delivery::Background {
                interval: Duration::from_millis(ms),
            }),
            None => transport,
        }
    }
}
