use criterion::{black_box, criterion_group, criterion_main, Criterion};

use lob_engine::{EngineConfig, MatchingEngine, NullSink, Side};

fn setup_engine() -> MatchingEngine {
    MatchingEngine::new(EngineConfig {
        arena_capacity: 1_000_000,
        max_price: 100_000,
        max_id: 10_000_000,
    })
}

fn bench_mixed_workload(c: &mut Criterion) {
    let mut engine = setup_engine();
    let mut sink = NullSink;
    let mut group = c.benchmark_group("mixed_workload");
    let mut next_id = 0u64;

    group.bench_function("realistic_mixed_operations", |b| {
        b.iter(|| {
            // Resting orders that never cross.
            for _ in 0..6 {
                next_id += 1;
                black_box(engine.submit(next_id, 100, 1, Side::Buy, &mut sink));
            }

            // Submit then cancel.
            for _ in 0..2 {
                next_id += 1;
                let id = next_id;
                engine.submit(id, 101, 1, Side::Sell, &mut sink);
                black_box(engine.cancel(id, &mut sink));
            }

            // Crossing matches.
            for _ in 0..2 {
                next_id += 1;
                let sell_id = next_id;
                next_id += 1;
                let buy_id = next_id;
                engine.submit(sell_id, 100, 1, Side::Sell, &mut sink);
                black_box(engine.submit(buy_id, 100, 1, Side::Buy, &mut sink));
            }
        })
    });

    group.finish();
}

fn bench_rapid_matching_against_deep_level(c: &mut Criterion) {
    let mut engine = setup_engine();
    let mut sink = NullSink;
    let mut group = c.benchmark_group("rapid_matching");

    // Pre-fill a single deep price level so every aggressor consumes
    // exactly the FIFO head without multi-level sweeping.
    for id in 0..100_000u64 {
        engine.submit(id, 100, 1, Side::Sell, &mut sink);
    }

    let mut aggressor_id = 100_000u64;
    group.bench_function("consume_fifo_head", |b| {
        b.iter(|| {
            aggressor_id += 1;
            black_box(engine.submit(aggressor_id, 100, 1, Side::Buy, &mut sink));
        })
    });

    group.finish();
}

fn bench_multi_level_sweep(c: &mut Criterion) {
    let mut group = c.benchmark_group("multi_level_sweep");

    group.bench_function("sweep_ten_levels", |b| {
        b.iter(|| {
            let mut engine = setup_engine();
            let mut sink = NullSink;

            for level in 0..10 {
                let price = 100 + level;
                for id in 0..20 {
                    engine.submit(level as u64 * 100 + id, price, 1, Side::Sell, &mut sink);
                }
            }

            black_box(engine.submit(999_999, 110, 200, Side::Buy, &mut sink));
        })
    });

    group.finish();
}

fn bench_cancel_from_deep_book(c: &mut Criterion) {
    let mut engine = setup_engine();
    let mut sink = NullSink;
    let mut group = c.benchmark_group("cancel_from_deep_book");

    let ids: Vec<u64> = (0..200_000u64).collect();
    for &id in &ids {
        engine.submit(id, 100 + (id % 500) as i32, 1, Side::Buy, &mut sink);
    }

    let mut next = ids.into_iter().cycle();
    group.bench_function("cancel_resting_order", |b| {
        b.iter(|| {
            let id = next.next().unwrap();
            black_box(engine.cancel(id, &mut sink));
            engine.submit(id, 100 + (id % 500) as i32, 1, Side::Buy, &mut sink);
        })
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_mixed_workload,
    bench_rapid_matching_against_deep_level,
    bench_multi_level_sweep,
    bench_cancel_from_deep_book,
);
criterion_main!(benches);
