//! Submitter configuration from environment variables.

use std::env;
use std::time::Duration;

/// Default message when a failure has no readable description.
pub const DEFAULT_FALLBACK_ERROR_MESSAGE: &str = "Failed to submit transaction";

/// Configuration for [`crate::ExtrinsicSubmitter`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmitterConfig {
    /// Used when a request does not carry its own fallback message.
    pub fallback_error_message: String,

    /// Deadline applied by `submit_and_wait` only. `None` waits forever.
    pub outcome_timeout: Option<Duration>,
}

impl Default for SubmitterConfig {
    fn default() -> Self {
        Self {
            fallback_error_message: DEFAULT_FALLBACK_ERROR_MESSAGE.to_string(),
            outcome_timeout: None,
        }
    }
}

impl SubmitterConfig {
    /// Create configuration from environment variables.
    ///
    /// # Environment Variables
    ///
    /// - `GP_FALLBACK_ERROR_MESSAGE`: fallback failure text
    /// - `GP_OUTCOME_TIMEOUT_SECS`: `submit_and_wait` deadline, 0 or unset for none
    pub fn from_env() -> Self {
        Self {
            fallback_error_message: env::var("GP_FALLBACK_ERROR_MESSAGE")
                .ok()
                .filter(|v| !v.trim().is_empty())
                .unwrap_or_else(|| DEFAULT_FALLBACK_ERROR_MESSAGE.to_string()),

            outcome_timeout: env::var("GP_OUTCOME_TIMEOUT_SECS")
                .ok()
                .and_then(|v| v.parse::<u64>().ok())
                .filter(|secs| *secs > 0)
                .map(Duration::from_secs),
        }
    }

    /// Set the `submit_and_wait` deadline.
    pub fn with_outcome_timeout(mut self, timeout: Duration) -> Self {
        self.outcome_timeout = Some(timeout);
        self
    }
}
