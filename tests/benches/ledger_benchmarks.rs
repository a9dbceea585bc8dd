//! # Guild-Ledger Benchmarks
//!
//! | Component | Operation | Target |
//! |-----------|-----------|--------|
//! | gl-01 Settings Normalizer | coerce one value | < 1us |
//! | gl-01 Settings Normalizer | patch update | < 50us |
//! | gl-02 Role-Event Ledger | record event, one hot key | < 50us |
//! | gl-02 Role-Event Ledger | audit 1000 records | < 50ms |

use std::sync::Arc;
use std::time::Duration;

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use gl_01_settings::{coerce_bool, InMemorySettingsStore, SettingsApi, SettingsNormalizer};
use gl_02_role_ledger::{
    ConsistencyChecker, InMemoryLedgerStore, RecordEventRequest, RoleAction, RoleEventLedger,
    RoleLedgerApi,
};
use rand::Rng;
use serde_json::{json, Map, Value};
use shared_types::{CommunityId, RoleId, UserId};
use tokio::runtime::Runtime;

fn runtime() -> Runtime {
    tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .unwrap()
}

// ============================================================================
// GL-01: Settings Normalizer
// ============================================================================

fn bench_coercion(c: &mut Criterion) {
    let mut group = c.benchmark_group("gl-01-coercion");
    let inputs = [json!(true), json!("true"), json!("false"), json!(1), json!(null)];

    group.bench_function("coerce_mixed", |b| {
        b.iter(|| {
            for input in &inputs {
                let _ = black_box(coerce_bool(black_box(input)));
            }
        })
    });
    group.finish();
}

fn bench_settings_update(c: &mut Criterion) {
    let rt = runtime();
    let mut group = c.benchmark_group("gl-01-settings");
    let normalizer = SettingsNormalizer::new(Arc::new(InMemorySettingsStore::new()));

    let mut patch = Map::new();
    patch.insert("messageLog".to_string(), Value::from("true"));
    patch.insert("flags.logDeletedOnly".to_string(), Value::from(false));
    patch.insert("modules.welcome".to_string(), Value::from("false"));

    group.bench_function("update_three_fields", |b| {
        let mut rng = rand::thread_rng();
        b.to_async(&rt).iter(|| {
            let community = CommunityId::new(format!("g{}", rng.gen_range(0..64)));
            let normalizer = &normalizer;
            let patch = &patch;
            async move { black_box(normalizer.update_settings(&community, patch).await) }
        })
    });
    group.finish();
}

// ============================================================================
// GL-02: Role-Event Ledger
// ============================================================================

fn bench_record_event(c: &mut Criterion) {
    let rt = runtime();
    let mut group = c.benchmark_group("gl-02-record");
    group.measurement_time(Duration::from_secs(10));

    group.bench_function("hot_key", |b| {
        // Fresh ledger per sample so the event array stays bounded.
        b.to_async(&rt).iter_batched(
            || RoleEventLedger::new(Arc::new(InMemoryLedgerStore::new())),
            |ledger| async move {
                for user in 0..100 {
                    let request = RecordEventRequest::new(
                        CommunityId::new("g1"),
                        RoleId::new("r1"),
                        UserId::new(format!("u{user}")),
                        "member",
                        RoleAction::ALL[user % 3],
                    );
                    black_box(ledger.record_event(request).await.ok());
                }
            },
            criterion::BatchSize::SmallInput,
        )
    });
    group.finish();
}

fn bench_audit(c: &mut Criterion) {
    let rt = runtime();
    let mut group = c.benchmark_group("gl-02-audit");

    for records in [100usize, 1000] {
        let store = Arc::new(InMemoryLedgerStore::new());
        let ledger = RoleEventLedger::new(Arc::clone(&store));
        rt.block_on(async {
            for i in 0..records {
                let request = RecordEventRequest::new(
                    CommunityId::new(format!("g{}", i % 10)),
                    RoleId::new(format!("r{i}")),
                    UserId::new("u1"),
                    "member",
                    RoleAction::Add,
                );
                let _ = ledger.record_event(request).await;
            }
        });
        let checker = ConsistencyChecker::new(store, Duration::from_secs(5));

        group.throughput(Throughput::Elements(records as u64));
        group.bench_with_input(BenchmarkId::new("audit", records), &records, |b, _| {
            b.to_async(&rt).iter(|| async { black_box(checker.audit().await.ok()) })
        });
    }
    group.finish();
}

criterion_group!(
    benches,
    bench_coercion,
    bench_settings_update,
    bench_record_event,
    bench_audit
);
criterion_main!(benches);
