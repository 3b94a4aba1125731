//! Benchmarks for period extraction throughput

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use period_core::{EdgeEvent, EdgePolarity, SampleTime};
use period_stats::{ExtractorParameters, OrderingPolicy, PeriodExtractor};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Generate a jittered clock: alternating rising/falling edges
fn generate_clock(edges: usize, seed: u64) -> Vec<EdgeEvent<SampleTime>> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let mut t = 0.0;
    (0..edges)
        .map(|i| {
            t += 0.5e-6 + rng.gen_range(-1e-9..1e-9);
            EdgeEvent::new(SampleTime::from_seconds(t), i % 2 == 0)
        })
        .collect()
}

/// Benchmark ingest under both ordering policies
fn bench_ingest(c: &mut Criterion) {
    let mut group = c.benchmark_group("ingest");

    for &size in &[1_000usize, 100_000, 1_000_000] {
        let events = generate_clock(size, 42);
        group.throughput(Throughput::Elements(size as u64));

        for ordering in [OrderingPolicy::Trust, OrderingPolicy::Validate] {
            let params = ExtractorParameters::new(EdgePolarity::Rising).with_ordering(ordering);
            group.bench_with_input(
                BenchmarkId::new(format!("{ordering:?}"), size),
                &events,
                |b, events| {
                    b.iter(|| {
                        let mut extractor =
                            PeriodExtractor::with_parameters(params.clone()).unwrap();
                        extractor.ingest(events.iter().copied()).unwrap();
                        black_box(extractor.finalize())
                    })
                },
            );
        }
    }

    group.finish();
}

/// Benchmark many small host batches against one large batch
fn bench_batching(c: &mut Criterion) {
    let mut group = c.benchmark_group("batching");
    let events = generate_clock(100_000, 7);

    for &batch in &[16usize, 1_024, 100_000] {
        group.bench_with_input(BenchmarkId::from_parameter(batch), &events, |b, events| {
            b.iter(|| {
                let mut extractor = PeriodExtractor::new(EdgePolarity::Rising);
                for chunk in events.chunks(batch) {
                    extractor.ingest(chunk.iter().copied()).unwrap();
                }
                black_box(extractor.finalize())
            })
        });
    }

    group.finish();
}

criterion_group!(benches, bench_ingest, bench_batching);
criterion_main!(benches);
