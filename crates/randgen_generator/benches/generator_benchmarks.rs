//! Criterion benchmarks for the generator façade.
//!
//! Covers batch fills per algorithm and parallel stream fills across
//! stream counts.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use randgen_core::{BitGeneratorKind, SeedSequence};
use randgen_generator::{Generator, StreamSet};

const LEN: usize = 1 << 16;

fn seeded(kind: BitGeneratorKind) -> Generator {
    Generator::from_kind(kind, &SeedSequence::from(42_u64))
}

/// Benchmark `fill_standard_normal` for every algorithm.
fn bench_fill_standard_normal(c: &mut Criterion) {
    let mut group = c.benchmark_group("fill_standard_normal");
    group.throughput(Throughput::Elements(LEN as u64));
    let mut out = vec![0.0; LEN];

    for kind in BitGeneratorKind::ALL {
        let mut rng = seeded(kind);
        group.bench_with_input(BenchmarkId::from_parameter(kind), &kind, |b, _| {
            b.iter(|| {
                rng.fill_standard_normal(&mut out).unwrap();
                black_box(out[LEN - 1])
            });
        });
    }

    group.finish();
}

/// Benchmark bounded integer fills against the scalar loop.
fn bench_fill_integers(c: &mut Criterion) {
    let mut group = c.benchmark_group("integers");
    group.throughput(Throughput::Elements(LEN as u64));
    let mut out = vec![0_i64; LEN];
    let mut rng = seeded(BitGeneratorKind::Pcg64);

    group.bench_function("fill", |b| {
        b.iter(|| {
            rng.fill_integers(0, 999, &mut out).unwrap();
            black_box(out[0])
        });
    });

    group.bench_function("scalar", |b| {
        b.iter(|| {
            for slot in out.iter_mut() {
                *slot = rng.integers(0, 999).unwrap();
            }
            black_box(out[0])
        });
    });

    group.finish();
}

/// Benchmark parallel fills as the stream count grows.
fn bench_par_fill(c: &mut Criterion) {
    let mut group = c.benchmark_group("par_fill_standard_normal");
    let len = LEN * 16;
    group.throughput(Throughput::Elements(len as u64));
    let mut out = vec![0.0; len];
    let root = seeded(BitGeneratorKind::Philox);

    for n in [1_usize, 2, 4, 8] {
        let mut streams = StreamSet::from_root(&root, n).unwrap();
        group.bench_with_input(BenchmarkId::from_parameter(n), &n, |b, _| {
            b.iter(|| {
                streams.par_fill_with(&mut out, |g| g.standard_normal()).unwrap();
                black_box(out[len - 1])
            });
        });
    }

    group.finish();
}

/// Benchmark shuffling a large index vector.
fn bench_shuffle(c: &mut Criterion) {
    let mut rng = seeded(BitGeneratorKind::Xoroshiro128);
    let mut values: Vec<u32> = (0..LEN as u32).collect();

    c.bench_function("shuffle_65536", |b| {
        b.iter(|| {
            rng.shuffle(&mut values).unwrap();
            black_box(values[0])
        });
    });
}

criterion_group!(
    benches,
    bench_fill_standard_normal,
    bench_fill_integers,
    bench_par_fill,
    bench_shuffle,
);
criterion_main!(benches);
