//! # Submitter Benchmarks
//!
//! | Path | Target |
//! |------|--------|
//! | InBlock settlement scan | < 10µs for 64 events |
//! | Failure message rendering | < 1µs |
//! | Full submit with immediate transport | < 50µs |

use criterion::{
    black_box, criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion, Throughput,
};
use rand::Rng;
use std::sync::Arc;

use gp_extrinsic_submitter::{
    describe_failure, AccountAddress, Call, ChainEvent, DispatchError, ExtrinsicSubmissionApi,
    ExtrinsicSubmitter, LifecycleEvent, LifecycleTracker, ModuleError, ScriptedTransport,
    SubmissionObserver, SubmissionRequest, SubmitterConfig, TokenError, TxHash,
};

struct NullObserver;

impl SubmissionObserver for NullObserver {
    fn on_success(&self, _tx_hash: TxHash) {}
    fn on_failed(&self, _message: String) {}
}

fn block_events(noise: usize) -> Vec<ChainEvent> {
    let mut events: Vec<ChainEvent> = (0..noise)
        .map(|i| ChainEvent::other(format!("Deposit{}", i % 4)))
        .collect();
    events.push(ChainEvent::success());
    events
}

// ============================================================================
// Lifecycle tracking
// ============================================================================

fn bench_in_block_settlement(c: &mut Criterion) {
    let mut group = c.benchmark_group("lifecycle-in-block");

    for noise in [0usize, 8, 64, 256] {
        let events = block_events(noise);
        group.throughput(Throughput::Elements(events.len() as u64));
        group.bench_with_input(BenchmarkId::new("settle", noise), &events, |b, events| {
            b.iter(|| {
                let tracker = LifecycleTracker::new(Arc::new(NullObserver), "fallback");
                black_box(tracker.handle(LifecycleEvent::InBlock {
                    events: events.clone(),
                    tx_hash: TxHash::zero(),
                }))
            })
        });
    }

    group.bench_function("duplicate_after_resolution", |b| {
        let tracker = LifecycleTracker::new(Arc::new(NullObserver), "fallback");
        tracker.handle(LifecycleEvent::InBlock {
            events: block_events(0),
            tx_hash: TxHash::zero(),
        });
        let mut rng = rand::thread_rng();

        b.iter(|| {
            black_box(tracker.handle(LifecycleEvent::InBlock {
                events: block_events(0),
                tx_hash: TxHash::repeat_byte(rng.gen()),
            }))
        })
    });

    group.finish();
}

// ============================================================================
// Failure messages
// ============================================================================

fn bench_describe_failure(c: &mut Criterion) {
    let mut group = c.benchmark_group("describe-failure");

    let module = DispatchError::Module(ModuleError {
        section: "treasury".to_string(),
        method: "InsufficientProposersBalance".to_string(),
        docs: vec![
            "Proposer's balance is too low.".to_string(),
            "Reserve more funds.".to_string(),
        ],
    });
    let token = DispatchError::Token(TokenError::BelowMinimum);

    group.bench_function("module", |b| {
        b.iter(|| black_box(describe_failure(Some(&module), "fallback")))
    });
    group.bench_function("token", |b| {
        b.iter(|| black_box(describe_failure(Some(&token), "fallback")))
    });

    group.finish();
}

// ============================================================================
// End-to-end submit
// ============================================================================

fn bench_submit_immediate(c: &mut Criterion) {
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .unwrap();

    let transport = Arc::new(ScriptedTransport::new(vec![
        LifecycleEvent::Ready,
        LifecycleEvent::Broadcast,
        LifecycleEvent::InBlock {
            events: block_events(4),
            tx_hash: TxHash::repeat_byte(0x42),
        },
    ]));
    let submitter =
        ExtrinsicSubmitter::with_transport(SubmitterConfig::default(), transport.clone());
    let signer = AccountAddress::parse("5GrwvaEF5zXb26Fz9rcQpDWS57CtERHpNehXCPcNoHGKutQY").unwrap();
    let request = SubmissionRequest::new(signer, Call::runtime("system", "remark", vec![0u8; 32]));

    c.bench_function("submit_immediate", |b| {
        b.iter_batched(
            || {
                // the transport records every dispatch; keep it bounded
                transport.take_dispatched();
                request.clone()
            },
            |request| {
                runtime.block_on(async {
                    black_box(
                        submitter
                            .submit(request, Arc::new(NullObserver))
                            .await
                            .is_subscribed(),
                    )
                })
            },
            BatchSize::NumIterations(1024),
        )
    });
}

criterion_group!(
    benches,
    bench_in_block_settlement,
    bench_describe_failure,
    bench_submit_immediate,
);

criterion_main!(benches);
