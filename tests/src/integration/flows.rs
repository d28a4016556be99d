//! # Submitter Flows
//!
//! End-to-end submissions through `ExtrinsicSubmitter` with scripted and
//! threaded transports.
//!
//! ## Flows Tested:
//!
//! 1. **Happy path**: Ready → Broadcast → InBlock(success) → Finalized
//! 2. **Dispatch failure**: module and token errors reach `on_failed`
//! 3. **Proxy**: the proxy account signs the wrapped call
//! 4. **Transport rejection**: `:( transaction failed` + error message
//! 5. **Foreign thread delivery**: duplicate InBlock from another thread

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;
    use std::time::Duration;

    use async_trait::async_trait;
    use parking_lot::Mutex;
    use tokio::sync::mpsc;

    use gp_extrinsic_submitter::{
        AccountAddress, Call, CallbackObserver, ChainEvent, Delivery, DispatchError, EventCallback,
        ExtrinsicSubmissionApi, ExtrinsicSubmitter, LifecycleEvent, RecordingObserver,
        ScriptedTransport, SigningTransport, SubmissionOutcome, SubmissionParams,
        SubmissionRequest, SubmitAttempt, SubmitterConfig, SubmitterError, SubscriptionHandle,
        TokenError, TransportError, TxHash, TxStatus, BlockHash,
    };

    // =============================================================================
    // TEST FIXTURES
    // =============================================================================

    const ALICE: &str = "5GrwvaEF5zXb26Fz9rcQpDWS57CtERHpNehXCPcNoHGKutQY";
    const BOB: &str = "5FHneW46xGXgs5mUiveU4sbTyGBzmstUspZC92UhjJM694ty";

    fn addr(s: &str) -> AccountAddress {
        AccountAddress::parse(s).unwrap()
    }

    fn referendum_vote() -> SubmissionRequest {
        SubmissionRequest::new(
            addr(ALICE),
            Call::runtime("convictionVoting", "vote", vec![0x0c, 0x00]),
        )
    }

    fn in_block(events: Vec<ChainEvent>) -> LifecycleEvent {
        LifecycleEvent::InBlock {
            events,
            tx_hash: TxHash::repeat_byte(0x42),
        }
    }

    fn full_success_script() -> Vec<LifecycleEvent> {
        vec![
            LifecycleEvent::Ready,
            LifecycleEvent::Broadcast,
            in_block(vec![ChainEvent::other("Withdraw"), ChainEvent::success()]),
            LifecycleEvent::Finalized {
                block_hash: BlockHash::repeat_byte(0x11),
                tx_hash: TxHash::repeat_byte(0x42),
            },
        ]
    }

    /// Callback set mirroring the portal's `onSuccess/onFailed/onBroadcast/setStatus`.
    #[derive(Default)]
    struct Calls {
        statuses: Mutex<Vec<String>>,
        successes: AtomicUsize,
        failures: Mutex<Vec<String>>,
        broadcasts: AtomicUsize,
    }

    fn callback_observer(calls: Arc<Calls>) -> CallbackObserver {
        let (s, f, b, st) = (calls.clone(), calls.clone(), calls.clone(), calls);
        CallbackObserver::new(
            move |_| {
                s.successes.fetch_add(1, Ordering::SeqCst);
            },
            move |msg| f.failures.lock().push(msg),
        )
        .with_broadcast(move || {
            b.broadcasts.fetch_add(1, Ordering::SeqCst);
        })
        .with_status(move |status| st.statuses.lock().push(status.to_string()))
    }

    /// Transport that delivers the script from a plain OS thread, twice.
    struct ThreadedEchoTransport {
        script: Vec<LifecycleEvent>,
    }

    #[async_trait]
    impl SigningTransport for ThreadedEchoTransport {
        async fn sign_and_send(
            &self,
            _signer: &AccountAddress,
            _call: Call,
            _params: &SubmissionParams,
            on_event: EventCallback,
        ) -> Result<SubscriptionHandle, TransportError> {
            let script = self.script.clone();
            std::thread::spawn(move || {
                for event in script.iter().chain(script.iter()) {
                    on_event(event.clone());
                }
            });
            Ok(SubscriptionHandle::detached())
        }
    }

    // =============================================================================
    // INTEGRATION TESTS
    // =============================================================================

    #[tokio::test]
    async fn test_background_happy_path_statuses() {
        let transport = Arc::new(
            ScriptedTransport::new(full_success_script()).with_delivery(Delivery::Background {
                interval: Duration::from_millis(5),
            }),
        );
        let submitter = ExtrinsicSubmitter::with_transport(SubmitterConfig::default(), transport);
        let (status_tx, mut status_rx) = mpsc::unbounded_channel();

        let outcome = submitter
            .submit_and_wait(referendum_vote(), Some(status_tx))
            .await
            .unwrap();

        assert_eq!(outcome, SubmissionOutcome::Success(TxHash::repeat_byte(0x42)));

        let mut statuses = Vec::new();
        while let Ok(status) = status_rx.try_recv() {
            statuses.push(status);
        }
        assert_eq!(
            statuses,
            vec![
                TxStatus::Ready,
                TxStatus::Broadcasted,
                TxStatus::InBlock,
                TxStatus::Success
            ]
        );
    }

    #[tokio::test]
    async fn test_callback_strings_for_token_failure() {
        let transport = Arc::new(ScriptedTransport::new(vec![
            LifecycleEvent::Ready,
            LifecycleEvent::Broadcast,
            in_block(vec![ChainEvent::failed(DispatchError::Token(
                TokenError::BelowMinimum,
            ))]),
        ]));
        let submitter = ExtrinsicSubmitter::with_transport(SubmitterConfig::default(), transport);
        let calls = Arc::new(Calls::default());

        let attempt = submitter
            .submit(referendum_vote(), Arc::new(callback_observer(calls.clone())))
            .await;

        assert!(attempt.is_subscribed());
        assert_eq!(
            *calls.statuses.lock(),
            vec![
                "Transaction is ready",
                "Transaction has been broadcasted",
                "Transaction is in block",
                "Transaction failed"
            ]
        );
        assert_eq!(*calls.failures.lock(), vec!["Token.BelowMinimum".to_string()]);
        assert_eq!(calls.successes.load(Ordering::SeqCst), 0);
        assert_eq!(calls.broadcasts.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_proxy_flow_signed_by_proxy() {
        let transport = Arc::new(ScriptedTransport::new(full_success_script()));
        let submitter =
            ExtrinsicSubmitter::with_transport(SubmitterConfig::default(), transport.clone());

        let outcome = submitter
            .submit_and_wait(referendum_vote().with_proxy(addr(BOB)), None)
            .await
            .unwrap();

        assert!(outcome.is_success());
        let dispatched = transport.dispatched();
        assert_eq!(dispatched[0].signer, addr(BOB));
        match &dispatched[0].call {
            Call::Proxy { real, call, .. } => {
                assert_eq!(real, &addr(ALICE));
                assert_eq!(call.to_string(), "convictionVoting.vote");
            }
            other => panic!("expected proxy envelope, got {}", other),
        }
    }

    #[tokio::test]
    async fn test_transport_rejection_flow() {
        let transport = Arc::new(ScriptedTransport::rejecting(TransportError::Network(
            "network down".to_string(),
        )));
        let submitter = ExtrinsicSubmitter::with_transport(SubmitterConfig::default(), transport);
        let calls = Arc::new(Calls::default());

        let attempt = submitter
            .submit(referendum_vote(), Arc::new(callback_observer(calls.clone())))
            .await;

        assert!(matches!(attempt, SubmitAttempt::Rejected(_)));
        assert_eq!(*calls.statuses.lock(), vec![":( transaction failed"]);
        assert_eq!(*calls.failures.lock(), vec!["network down".to_string()]);
    }

    #[tokio::test]
    async fn test_foreign_thread_duplicates_fire_once() {
        let transport = Arc::new(ThreadedEchoTransport {
            script: full_success_script(),
        });
        let submitter = ExtrinsicSubmitter::with_transport(SubmitterConfig::default(), transport);
        let observer = Arc::new(RecordingObserver::new());

        submitter.submit(referendum_vote(), observer.clone()).await;

        // wait for the delivery thread
        for _ in 0..100 {
            if observer.statuses().len() >= 7 {
                break;
            }
            tokio::time::sleep(Duration::from_millis(5)).await;
        }

        assert_eq!(observer.outcome_count(), 1);
        assert_eq!(observer.broadcasts(), 1);
        assert_eq!(observer.successes(), vec![TxHash::repeat_byte(0x42)]);
    }

    #[tokio::test]
    async fn test_timeout_unsubscribes_late_events() {
        let transport = Arc::new(
            ScriptedTransport::new(full_success_script()).with_delivery(Delivery::Background {
                interval: Duration::from_millis(100),
            }),
        );
        let config = SubmitterConfig::default().with_outcome_timeout(Duration::from_millis(150));
        let submitter = ExtrinsicSubmitter::with_transport(config, transport);
        let (status_tx, mut status_rx) = mpsc::unbounded_channel();

        let result = submitter
            .submit_and_wait(referendum_vote(), Some(status_tx))
            .await;
        assert!(matches!(result, Err(SubmitterError::Timeout(_))));

        tokio::time::sleep(Duration::from_millis(400)).await;
        let mut statuses = Vec::new();
        while let Ok(status) = status_rx.try_recv() {
            statuses.push(status);
        }
        assert_eq!(statuses, vec![TxStatus::Ready]);
    }

    #[tokio::test]
    async fn test_held_subscription_fed_manually() {
        let transport = Arc::new(ScriptedTransport::new(vec![]).with_delivery(Delivery::Hold));
        let submitter =
            ExtrinsicSubmitter::with_transport(SubmitterConfig::default(), transport.clone());
        let observer = Arc::new(RecordingObserver::new());

        submitter.submit(referendum_vote(), observer.clone()).await;
        assert!(observer.is_untouched());

        transport.emit(LifecycleEvent::Ready);
        transport.emit(in_block(vec![ChainEvent::failed(DispatchError::Other {
            type_name: Some("BadOrigin".to_string()),
        })]));
        transport.emit(in_block(vec![ChainEvent::success()]));

        assert_eq!(observer.failures(), vec!["BadOrigin".to_string()]);
        assert!(observer.successes().is_empty());
    }
}
