//! Integration tests for the generator façade, streams and configuration.

use approx::assert_abs_diff_eq;
use proptest::prelude::*;
use rand::{Rng, RngCore};
use randgen_core::generators::Pcg64;
use randgen_core::{BitGeneratorKind, BitGeneratorState, RandomError, SeedSequence};
use randgen_distributions::{Gamma, Poisson};
use randgen_generator::{ConfigError, Generator, GeneratorConfig, StreamSet};

fn seeded(kind: BitGeneratorKind, seed: u64) -> Generator {
    Generator::from_kind(kind, &SeedSequence::from(seed))
}

// ========================================
// Regression oracles
// ========================================

#[test]
fn test_mt19937_seed_42_outputs() {
    let mut rng = seeded(BitGeneratorKind::Mt19937, 42);
    assert_eq!(rng.next_u64(), 6909045637428952499);
    assert_eq!(rng.next_u64(), 17537583593393853710);
    assert_eq!(rng.next_u64(), 13502904847239337031);
}

#[test]
fn test_mt19937_seed_42_first_normals() {
    let mut rng = seeded(BitGeneratorKind::Mt19937, 42);
    assert_eq!(rng.standard_normal().unwrap(), 0.9821089215878807);
    assert_eq!(rng.standard_normal().unwrap(), 0.5428331144281047);
    assert_eq!(rng.standard_normal().unwrap(), 0.3692732938968179);
}

// ========================================
// Distribution properties
// ========================================

#[test]
fn test_uniform_within_bounds() {
    let mut rng = seeded(BitGeneratorKind::Xoroshiro128, 1);
    for _ in 0..10_000 {
        let x = rng.uniform(-3.5, 2.25).unwrap();
        assert!((-3.5..2.25).contains(&x));
    }
}

#[test]
fn test_integers_zero_to_two_unbiased() {
    let mut rng = seeded(BitGeneratorKind::Pcg64, 2);
    let mut counts = [0_i64; 3];
    for _ in 0..1_000_000 {
        let k = rng.integers(0, 2).unwrap();
        counts[k as usize] += 1;
    }
    // Standard error is about 471 per bucket.
    for count in counts {
        assert!((count - 333_333).abs() < 3_000, "counts {:?}", counts);
    }
}

#[test]
fn test_gamma_half_shape_positive_with_mean_one() {
    let mut rng = seeded(BitGeneratorKind::Philox, 3);
    let n = 100_000;
    let mut sum = 0.0;
    for _ in 0..n {
        let x = rng.gamma(0.5, 2.0).unwrap();
        assert!(x > 0.0);
        sum += x;
    }
    assert_abs_diff_eq!(sum / n as f64, 1.0, epsilon = 0.03);
}

#[test]
fn test_binomial_negative_trials_rejected_without_draw() {
    let mut rng = seeded(BitGeneratorKind::Dsfmt, 4);
    let before = rng.state();
    let err = rng.binomial(-1, 0.5).unwrap_err();
    assert!(matches!(err, RandomError::InvalidParameter { name: "n", .. }));
    assert_eq!(rng.state(), before);
}

// ========================================
// Batch fill
// ========================================

#[test]
fn test_fill_equals_scalar_calls_for_every_kind() {
    let gamma = Gamma::new(2.5, 1.5).unwrap();
    for kind in BitGeneratorKind::ALL {
        let mut batch = seeded(kind, 5);
        let mut scalar = batch.clone();

        let mut uniforms = vec![0.0; 33];
        batch.fill_uniform(0.0, 10.0, &mut uniforms).unwrap();
        let mut gammas = vec![0.0; 33];
        batch.fill(&gamma, &mut gammas).unwrap();
        let mut raw = vec![0_u64; 33];
        batch.fill_raw(&mut raw);

        for &u in &uniforms {
            assert_eq!(u, scalar.uniform(0.0, 10.0).unwrap());
        }
        for &g in &gammas {
            assert_eq!(g, scalar.sample(&gamma).unwrap());
        }
        for &r in &raw {
            assert_eq!(r, scalar.random_raw());
        }
        assert_eq!(batch.state(), scalar.state(), "{}", kind);
    }
}

#[test]
fn test_fill_validates_before_drawing() {
    let mut rng = seeded(BitGeneratorKind::Threefry, 6);
    let before = rng.state();
    let mut out = [0.0; 8];
    assert!(rng.fill_uniform(2.0, 1.0, &mut out).is_err());
    assert_eq!(out, [0.0; 8]);
    assert_eq!(rng.state(), before);
}

// ========================================
// State and streams
// ========================================

#[test]
fn test_state_json_round_trip_through_generator() {
    let mut rng = seeded(BitGeneratorKind::Xorshift1024, 7);
    rng.fill_random(&mut [0.0; 5]);
    let json = serde_json::to_string(&rng.state()).unwrap();

    let state: BitGeneratorState = serde_json::from_str(&json).unwrap();
    let mut restored = Generator::from_state(&state).unwrap();
    for _ in 0..20 {
        assert_eq!(restored.standard_normal().unwrap(), rng.standard_normal().unwrap());
    }
}

#[test]
fn test_advance_on_counter_generator() {
    let mut stepped = seeded(BitGeneratorKind::Philox, 8);
    let mut skipped = stepped.clone();
    for _ in 0..40 {
        stepped.random_raw();
    }
    skipped.advance(10).unwrap();
    assert_eq!(skipped.random_raw(), stepped.random_raw());
}

#[test]
fn test_parallel_fill_independent_of_pool_size() {
    let root = seeded(BitGeneratorKind::Pcg64, 9);
    let poisson = Poisson::new(12.0).unwrap();

    let fill_in_pool = |threads: usize| {
        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(threads)
            .build()
            .unwrap();
        let mut streams = StreamSet::from_root(&root, 6).unwrap();
        let mut out = vec![0_i64; 1_001];
        pool.install(|| streams.par_fill(&poisson, &mut out)).unwrap();
        (out, streams)
    };

    let (single, single_streams) = fill_in_pool(1);
    let (many, many_streams) = fill_in_pool(4);
    assert_eq!(single, many);
    assert_eq!(single_streams, many_streams);
}

#[test]
fn test_streams_do_not_share_outputs() {
    let root = seeded(BitGeneratorKind::Xoroshiro128, 10);
    let mut streams = StreamSet::from_root(&root, 3).unwrap();
    let mut firsts: Vec<u64> = streams.iter_mut().map(|g| g.random_raw()).collect();
    firsts.sort_unstable();
    firsts.dedup();
    assert_eq!(firsts.len(), 3);
}

// ========================================
// Configuration
// ========================================

#[test]
fn test_config_file_builds_streams() {
    let path = std::env::temp_dir().join(format!("randgen_config_{}.toml", std::process::id()));
    std::fs::write(&path, "kind = \"threefry\"\nseed = [1, 2, 3]\nstreams = 3\n").unwrap();
    let config = GeneratorConfig::from_file(&path);
    std::fs::remove_file(&path).unwrap();

    let config = config.unwrap();
    let streams = config.build_streams().unwrap();
    assert_eq!(streams.len(), 3);

    let root = Generator::from_kind(
        BitGeneratorKind::Threefry,
        &SeedSequence::from_words(vec![1, 2, 3]).unwrap(),
    );
    assert_eq!(streams.get(2), Some(&root.jumped(2).unwrap()));
}

#[test]
fn test_config_rejects_stream_count() {
    assert_eq!(
        GeneratorConfig::from_toml_str("streams = 5000"),
        Err(ConfigError::InvalidStreamCount(5000))
    );
}

// ========================================
// rand interop
// ========================================

#[test]
fn test_generator_drives_rand_api() {
    let mut rng = Generator::<Pcg64>::seed_from_u64(11);
    for _ in 0..1_000 {
        let k: u32 = rng.gen_range(10..20);
        assert!((10..20).contains(&k));
    }
    let mut bytes = [0u8; 7];
    rng.fill_bytes(&mut bytes);
}

// ========================================
// Property-based tests
// ========================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn prop_shuffle_preserves_elements(seed in any::<u64>(), len in 0_usize..200) {
        let mut rng = seeded(BitGeneratorKind::Pcg64, seed);
        let original: Vec<usize> = (0..len).map(|i| i * 7 % 13).collect();
        let mut shuffled = original.clone();
        rng.shuffle(&mut shuffled).unwrap();

        let mut a = original;
        let mut b = shuffled;
        a.sort_unstable();
        b.sort_unstable();
        prop_assert_eq!(a, b);
    }

    #[test]
    fn prop_integers_in_closed_range(
        seed in any::<u64>(),
        low in -1_000_i64..1_000,
        width in 0_i64..1_000,
    ) {
        let mut rng = seeded(BitGeneratorKind::Xoroshiro128, seed);
        let k = rng.integers(low, low + width).unwrap();
        prop_assert!(low <= k && k <= low + width);
    }
}
