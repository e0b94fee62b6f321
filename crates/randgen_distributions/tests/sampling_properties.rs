//! Cross-generator properties of the sampling kernels.

use approx::assert_abs_diff_eq;
use proptest::prelude::*;
use randgen_core::generators::{Pcg64, Philox};
use randgen_core::{
    AnyBitGenerator, BitGenerator, BitGeneratorKind, BitGeneratorState, RandomError, Result,
    SeedSequence, SeedableBitGenerator,
};
use randgen_distributions::continuous::{
    random_gamma, random_standard_exponential_inv, random_standard_normal,
};
use randgen_distributions::discrete::{random_binomial, random_poisson};
use randgen_distributions::uniform::{random_integers, random_interval, random_uniform};
use randgen_distributions::{Distribution, Gamma, Normal, MAX_ATTEMPTS};

/// Emits the same word forever.
struct ConstantBits(u64);

impl BitGenerator for ConstantBits {
    fn kind(&self) -> BitGeneratorKind {
        BitGeneratorKind::SplitMix64
    }

    fn next_u64(&mut self) -> u64 {
        self.0
    }

    fn next_u32(&mut self) -> u32 {
        self.0 as u32
    }

    fn state(&self) -> BitGeneratorState {
        BitGeneratorState::new(self.kind(), vec![self.0])
    }

    fn set_state(&mut self, state: &BitGeneratorState) -> Result<()> {
        self.0 = state.words[0];
        Ok(())
    }
}

// ========================================
// Bounded rejection
// ========================================

#[test]
fn test_zero_bits_exhaust_exponential_inversion() {
    let mut rng = ConstantBits(0);
    assert_eq!(
        random_standard_exponential_inv(&mut rng),
        Err(RandomError::InternalError {
            distribution: "exponential_inv",
            attempts: MAX_ATTEMPTS
        })
    );
}

#[test]
fn test_saturated_bits_exhaust_integer_rejection() {
    let mut rng = ConstantBits(u64::MAX);
    assert!(matches!(
        random_integers(&mut rng, 0, 2),
        Err(RandomError::InternalError { distribution: "integers", .. })
    ));
    assert!(matches!(
        random_interval(&mut rng, 2),
        Err(RandomError::InternalError { distribution: "interval", .. })
    ));
}

#[test]
fn test_constant_bits_still_return_when_accepted() {
    // Zero words land in the ziggurat's base strip and are accepted.
    let mut rng = ConstantBits(0);
    assert_eq!(random_standard_normal(&mut rng).unwrap(), 0.0);
}

// ========================================
// Generic entry points
// ========================================

#[test]
fn test_trait_object_generators() {
    let mut boxed: Box<dyn BitGenerator> = Box::new(Pcg64::seed_from_u64(1));
    let mut concrete = Pcg64::seed_from_u64(1);
    assert_eq!(
        random_standard_normal(boxed.as_mut()).unwrap(),
        random_standard_normal(&mut concrete).unwrap()
    );
    let gamma = Gamma::new(2.0, 1.0).unwrap();
    assert_eq!(
        gamma.sample(boxed.as_mut()).unwrap(),
        gamma.sample(&mut concrete).unwrap()
    );
}

#[test]
fn test_samples_reproducible_for_every_kind() {
    let normal = Normal::new(0.0, 1.0).unwrap();
    for kind in BitGeneratorKind::ALL {
        let seed = SeedSequence::from(314_u64);
        let mut a = AnyBitGenerator::from_seed(kind, &seed);
        let mut b = AnyBitGenerator::from_seed(kind, &seed);
        for _ in 0..50 {
            assert_eq!(normal.sample(&mut a).unwrap(), normal.sample(&mut b).unwrap());
            assert_eq!(
                random_binomial(&mut a, 1000, 0.3).unwrap(),
                random_binomial(&mut b, 1000, 0.3).unwrap()
            );
            assert_eq!(
                random_poisson(&mut a, 20.0).unwrap(),
                random_poisson(&mut b, 20.0).unwrap()
            );
        }
        assert_eq!(a.state(), b.state());
    }
}

#[test]
fn test_invalid_parameters_never_draw() {
    for kind in BitGeneratorKind::ALL {
        let mut rng = AnyBitGenerator::from_seed(kind, &SeedSequence::from(1_u64));
        let before = rng.state();
        assert!(random_binomial(&mut rng, -1, 0.5).is_err());
        assert!(random_gamma(&mut rng, -1.0, 1.0).is_err());
        assert!(random_poisson(&mut rng, f64::INFINITY).is_err());
        assert!(random_uniform(&mut rng, 1.0, 0.0).is_err());
        assert_eq!(rng.state(), before, "kind {}", kind);
    }
}

// ========================================
// Statistical checks
// ========================================

#[test]
fn test_normal_cdf_at_reference_points() {
    let mut rng = Philox::seed_from_u64(2718);
    let n = 400_000;
    let xs: Vec<f64> = (0..n).map(|_| random_standard_normal(&mut rng).unwrap()).collect();
    let reference = [
        (-2.0, 0.022_750_131_948_179),
        (-1.0, 0.158_655_253_931_457),
        (0.0, 0.5),
        (0.5, 0.691_462_461_274_013),
        (1.5, 0.933_192_798_731_142),
    ];
    for (z, phi) in reference {
        let freq = xs.iter().filter(|&&x| x <= z).count() as f64 / n as f64;
        assert_abs_diff_eq!(freq, phi, epsilon = 0.004);
    }
}

#[test]
fn test_integers_pass_chi_square() {
    // 9 degrees of freedom; 27.88 is the 0.999 quantile.
    let mut rng = AnyBitGenerator::from_seed(BitGeneratorKind::Dsfmt, &SeedSequence::from(5_u64));
    let n = 100_000;
    let mut counts = [0_u64; 10];
    for _ in 0..n {
        counts[random_integers(&mut rng, 0, 9).unwrap() as usize] += 1;
    }
    let expected = n as f64 / 10.0;
    let chi2: f64 = counts
        .iter()
        .map(|&c| (c as f64 - expected).powi(2) / expected)
        .sum();
    assert!(chi2 < 27.88, "chi2 = {}", chi2);
}

// ========================================
// Properties
// ========================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(128))]

    #[test]
    fn prop_uniform_in_half_open_range(
        seed in any::<u64>(),
        low in -1.0e6f64..1.0e6,
        width in 1.0e-9f64..1.0e6,
    ) {
        let mut rng = Pcg64::seed_from_u64(seed);
        let high = low + width;
        for _ in 0..32 {
            let x = random_uniform(&mut rng, low, high).unwrap();
            prop_assert!(x >= low && x < high);
        }
    }

    #[test]
    fn prop_integers_in_closed_range(
        seed in any::<u64>(),
        low in any::<i64>(),
        high in any::<i64>(),
    ) {
        let (low, high) = if low <= high { (low, high) } else { (high, low) };
        let mut rng = Pcg64::seed_from_u64(seed);
        for _ in 0..32 {
            let v = random_integers(&mut rng, low, high).unwrap();
            prop_assert!(low <= v && v <= high);
        }
    }

    #[test]
    fn prop_binomial_in_support(seed in any::<u64>(), n in 0i64..100_000, p in 0.0f64..=1.0) {
        let mut rng = Pcg64::seed_from_u64(seed);
        for _ in 0..8 {
            let k = random_binomial(&mut rng, n, p).unwrap();
            prop_assert!((0..=n).contains(&k));
        }
    }
}
