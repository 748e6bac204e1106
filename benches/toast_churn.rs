// SPDX-License-Identifier: MPL-2.0
//! Benchmarks for the toast manager hot paths.
//!
//! Measures the performance of:
//! - Showing toasts into a full list (eviction on every call)
//! - Expiring a full list through `tick`

use criterion::{criterion_group, criterion_main, BatchSize, Criterion};
use glacier_ui::config::ToastConfig;
use glacier_ui::registry::ConfigRegistry;
use glacier_ui::sink::NoopSink;
use glacier_ui::toast::{ManualClock, ToastManager, ToastOptions};
use std::hint::black_box;
use std::rc::Rc;
use std::time::Duration;

fn manager(max_count: usize) -> (ToastManager, ManualClock) {
    let clock = ManualClock::new();
    let registry = Rc::new(ConfigRegistry::new());
    registry.register_render_function(NoopSink);
    let manager = ToastManager::with_clock(
        registry,
        ToastConfig {
            max_count: Some(max_count),
            ..Default::default()
        },
        Rc::new(clock.clone()),
    );
    (manager, clock)
}

/// Benchmark `show` when every call evicts the oldest toast.
fn bench_show_with_eviction(c: &mut Criterion) {
    let mut group = c.benchmark_group("toast_churn");
    let (mut toasts, _) = manager(5);
    for _ in 0..5 {
        toasts.info("warmup", ToastOptions::new());
    }

    group.bench_function("show_full_list", |b| {
        b.iter(|| {
            black_box(toasts.success("Saved", ToastOptions::new()));
        });
    });

    group.finish();
}

/// Benchmark expiring a full list in one tick.
fn bench_tick_expiry(c: &mut Criterion) {
    let mut group = c.benchmark_group("toast_churn");

    group.bench_function("tick_expire_all", |b| {
        b.iter_batched(
            || {
                let (mut toasts, clock) = manager(32);
                for step in 0..32 {
                    toasts.info(
                        format!("toast {step}"),
                        ToastOptions::new().duration(Duration::from_millis(100)),
                    );
                }
                clock.advance(Duration::from_millis(100));
                toasts
            },
            |mut toasts| black_box(toasts.tick()),
            BatchSize::SmallInput,
        );
    });

    group.finish();
}

criterion_group!(benches, bench_show_with_eviction, bench_tick_expiry);
criterion_main!(benches);
