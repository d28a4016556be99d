//! Replay and error rendering behind the CLI subcommands.

use anyhow::{Context, Result};
use std::sync::Arc;
use tokio::sync::mpsc::UnboundedSender;
use tracing::info;

use gp_extrinsic_submitter::{
    describe_failure, AccountAddress, ChannelObserver, DispatchError, ExtrinsicSubmissionApi,
    ExtrinsicSubmitter, SubmissionOutcome, SubmitAttempt, SubmitterConfig, TxStatus,
};
use gp_telemetry::SUBMISSIONS;

use crate::metered::MeteredObserver;
use crate::scenario::Scenario;

/// Run `scenario` through a submitter and wait for its outcome.
///
/// The deadline, if any, comes from `config.outcome_timeout`. Status updates
/// go to `status_tx` when given.
pub async fn replay(
    scenario: &Scenario,
    proxy: Option<AccountAddress>,
    config: SubmitterConfig,
    status_tx: Option<UnboundedSender<TxStatus>>,
) -> Result<SubmissionOutcome> {
    let mut request = scenario.request.clone();
    if let Some(proxy) = proxy {
        request = request.with_proxy(proxy);
    }

    let submitter = ExtrinsicSubmitter::with_transport(config, Arc::new(scenario.transport()));
    let (observer, outcome_rx) = ChannelObserver::new(status_tx);
    let attempt = submitter
        .submit(request, Arc::new(MeteredObserver::new(observer)))
        .await;

    let label = match &attempt {
        SubmitAttempt::Skipped(_) => "skipped",
        SubmitAttempt::Subscribed(_) => "subscribed",
        SubmitAttempt::Rejected(_) => "rejected",
    };
    SUBMISSIONS.with_label_values(&[label]).inc();
    info!(result = label, "Replay submitted");

    Ok(submitter.await_outcome(attempt, outcome_rx).await?)
}

/// Render a `DispatchError` JSON document as the user-facing message.
pub fn describe_error_json(json: &str, fallback: &str) -> Result<String> {
    let error: DispatchError = serde_json::from_str(json).context("invalid dispatch error JSON")?;
    Ok(describe_failure(Some(&error), fallback))
}
