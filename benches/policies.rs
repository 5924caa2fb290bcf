use cachecore::{Cache, PolicyKind};
use criterion::{BatchSize, BenchmarkId, Criterion, criterion_group, criterion_main};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::hint::black_box;

const CAPACITY: usize = 1024;
const UNIVERSE: u64 = 8 * CAPACITY as u64;
const OPS: usize = 16 * 1024;

/// Keys with a hot set: 80% of accesses hit the first 20% of the universe.
fn hotset_keys(seed: u64) -> Vec<u64> {
    let mut rng = StdRng::seed_from_u64(seed);
    let hot = UNIVERSE / 5;
    (0..OPS)
        .map(|_| {
            if rng.gen_bool(0.8) {
                rng.gen_range(0..hot)
            } else {
                rng.gen_range(hot..UNIVERSE)
            }
        })
        .collect()
}

fn filled(kind: PolicyKind) -> Cache<u64, u64> {
    let mut cache = Cache::with_kind(CAPACITY, kind);
    for i in 0..CAPACITY as u64 {
        cache.put(i, i);
    }
    cache
}

fn bench_insert_get(c: &mut Criterion) {
    let mut group = c.benchmark_group("insert_get");
    for kind in PolicyKind::ALL {
        group.bench_with_input(BenchmarkId::from_parameter(kind), &kind, |b, &kind| {
            b.iter_batched(
                || filled(kind),
                |mut cache| {
                    for i in 0..CAPACITY as u64 {
                        cache.put(black_box(i + 10_000), i);
                        let _ = black_box(cache.get(&black_box(i)));
                    }
                },
                BatchSize::SmallInput,
            )
        });
    }
    group.finish();
}

fn bench_eviction_churn(c: &mut Criterion) {
    let mut group = c.benchmark_group("eviction_churn");
    for kind in PolicyKind::ALL {
        group.bench_with_input(BenchmarkId::from_parameter(kind), &kind, |b, &kind| {
            b.iter_batched(
                || filled(kind),
                |mut cache| {
                    for i in 0..4 * CAPACITY as u64 {
                        cache.put(black_box(10_000 + i), i);
                    }
                },
                BatchSize::SmallInput,
            )
        });
    }
    group.finish();
}

fn bench_read_through_hotset(c: &mut Criterion) {
    let keys = hotset_keys(42);
    let mut group = c.benchmark_group("read_through_hotset");
    for kind in PolicyKind::ALL {
        group.bench_with_input(BenchmarkId::from_parameter(kind), &kind, |b, &kind| {
            b.iter_batched(
                || Cache::<u64, u64>::with_kind(CAPACITY, kind),
                |mut cache| {
                    let mut hits = 0u64;
                    for &key in &keys {
                        if cache.get(&key).is_some() {
                            hits += 1;
                        } else {
                            cache.put(key, key);
                        }
                    }
                    black_box(hits)
                },
                BatchSize::SmallInput,
            )
        });
    }
    group.finish();
}

criterion_group!(
    benches,
    bench_insert_get,
    bench_eviction_churn,
    bench_read_through_hotset
);
criterion_main!(benches);
