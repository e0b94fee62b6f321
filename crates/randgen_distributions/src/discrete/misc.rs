//! Geometric, negative binomial, logarithmic series and Zipf sampling.

use randgen_core::{BitGenerator, RandomError, Result};

use super::poisson::{draw_poisson, POISSON_LAM_MAX};
use crate::attempts::Attempts;
use crate::continuous::{draw_standard_gamma, random_standard_exponential};
use crate::validate;

/// Switch point between the search and inversion geometric samplers.
const GEOMETRIC_SEARCH_MIN_P: f64 = 1.0 / 3.0;

/// Geometric variate: number of trials up to and including the first
/// success, so the support starts at 1.
///
/// # Errors
///
/// Returns [`randgen_core::RandomError::InvalidParameter`] unless
/// `0 < p <= 1`.
pub fn random_geometric<B: BitGenerator + ?Sized>(bitgen: &mut B, p: f64) -> Result<i64> {
    validate::success_probability("p", p)?;
    if p >= GEOMETRIC_SEARCH_MIN_P {
        geometric_search(bitgen, p)
    } else {
        geometric_inversion(bitgen, p)
    }
}

fn geometric_search<B: BitGenerator + ?Sized>(bitgen: &mut B, p: f64) -> Result<i64> {
    let q = 1.0 - p;
    let mut x = 1_i64;
    let mut sum = p;
    let mut prod = p;
    let u = bitgen.next_double();
    let mut attempts = Attempts::new("geometric");
    while u > sum {
        attempts.next()?;
        prod *= q;
        sum += prod;
        x += 1;
    }
    Ok(x)
}

fn geometric_inversion<B: BitGenerator + ?Sized>(bitgen: &mut B, p: f64) -> Result<i64> {
    let e = random_standard_exponential(bitgen)?;
    let z = (-e / (-p).ln_1p()).ceil().max(1.0);
    // Saturate instead of overflowing for vanishing p.
    if z >= 9.223_372_036_854_776e18 {
        return Ok(i64::MAX);
    }
    Ok(z as i64)
}

/// Negative binomial variate: failures before the `n`-th success, drawn as
/// a gamma-Poisson mixture. `n` may be fractional.
///
/// # Errors
///
/// Returns [`randgen_core::RandomError::InvalidParameter`] unless `n > 0`,
/// `0 < p <= 1` and the mean `n (1 - p) / p` is at most [`POISSON_LAM_MAX`].
/// A gamma draw whose mixing rate exceeds that bound saturates the result
/// at `i64::MAX`.
///
/// [`POISSON_LAM_MAX`]: super::POISSON_LAM_MAX
pub fn random_negative_binomial<B: BitGenerator + ?Sized>(
    bitgen: &mut B,
    n: f64,
    p: f64,
) -> Result<i64> {
    let odds = check_negative_binomial(n, p)?;
    let rate = draw_standard_gamma(bitgen, n)? * odds;
    if rate > POISSON_LAM_MAX {
        return Ok(i64::MAX);
    }
    draw_poisson(bitgen, rate)
}

/// Returns the odds `(1 - p) / p` once the parameters pass.
pub(crate) fn check_negative_binomial(n: f64, p: f64) -> Result<f64> {
    validate::positive("n", n)?;
    validate::success_probability("p", p)?;
    let odds = (1.0 - p) / p;
    let mean = n * odds;
    if mean > POISSON_LAM_MAX {
        return Err(RandomError::invalid_parameter(
            "p",
            format!("mean n (1 - p) / p must not exceed {:e}, got {:e}", POISSON_LAM_MAX, mean),
        ));
    }
    Ok(odds)
}

/// Logarithmic series variate with `0 < p < 1`, support starting at 1.
///
/// Kemp's second accelerated generator (LK).
pub fn random_logseries<B: BitGenerator + ?Sized>(bitgen: &mut B, p: f64) -> Result<i64> {
    validate::success_probability("p", p)?;
    if p >= 1.0 {
        return Err(RandomError::invalid_parameter("p", "must be < 1"));
    }
    let r = (-p).ln_1p();
    let mut attempts = Attempts::new("logseries");
    loop {
        attempts.next()?;
        let v = bitgen.next_double();
        if v >= p {
            return Ok(1);
        }
        let u = bitgen.next_double();
        let q = -(r * u).exp_m1();
        if v <= q * q {
            let result = (1.0 + v.ln() / q.ln()).floor();
            if result < 1.0 || v == 0.0 {
                continue;
            }
            return Ok(result as i64);
        }
        if v >= q {
            return Ok(1);
        }
        return Ok(2);
    }
}

/// Zipf variate with exponent `a > 1`, support starting at 1.
///
/// Devroye's rejection from a Pareto envelope.
pub fn random_zipf<B: BitGenerator + ?Sized>(bitgen: &mut B, a: f64) -> Result<i64> {
    validate::finite("a", a)?;
    if a <= 1.0 {
        return Err(RandomError::invalid_parameter(
            "a",
            format!("must be > 1, got {}", a),
        ));
    }
    let am1 = a - 1.0;
    let b = 2.0_f64.powf(am1);
    let mut attempts = Attempts::new("zipf");
    loop {
        attempts.next()?;
        let u = 1.0 - bitgen.next_double();
        let v = bitgen.next_double();
        let x = u.powf(-1.0 / am1).floor();
        if x > i64::MAX as f64 || x < 1.0 {
            continue;
        }
        let t = (1.0 + 1.0 / x).powf(am1);
        if v * x * (t - 1.0) / (b - 1.0) <= t / b {
            return Ok(x as i64);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use randgen_core::generators::Pcg64;
    use randgen_core::SeedableBitGenerator;

    fn mean_of(n: usize, mut draw: impl FnMut() -> i64) -> f64 {
        (0..n).map(|_| draw() as f64).sum::<f64>() / n as f64
    }

    #[test]
    fn test_geometric_both_regimes() {
        let mut rng = Pcg64::seed_from_u64(1);
        for p in [0.9, 0.5, 1.0 / 3.0, 0.2, 0.01] {
            let mean = mean_of(100_000, || random_geometric(&mut rng, p).unwrap());
            // sd of the mean is sqrt((1 - p) / p^2 / n)
            let tol = 6.0 * ((1.0 - p) / (p * p) / 100_000.0_f64).sqrt() + 1e-9;
            assert_abs_diff_eq!(mean, 1.0 / p, epsilon = tol);
        }
    }

    #[test]
    fn test_geometric_certain_success() {
        let mut rng = Pcg64::seed_from_u64(2);
        for _ in 0..100 {
            assert_eq!(random_geometric(&mut rng, 1.0).unwrap(), 1);
        }
        assert!(random_geometric(&mut rng, 0.0).is_err());
    }

    #[test]
    fn test_geometric_vanishing_p_saturates_or_fits() {
        let mut rng = Pcg64::seed_from_u64(3);
        for _ in 0..100 {
            assert!(random_geometric(&mut rng, 1e-300).unwrap() >= 1);
        }
    }

    #[test]
    fn test_negative_binomial_mean() {
        // E = n (1 - p) / p
        let mut rng = Pcg64::seed_from_u64(4);
        let mean = mean_of(100_000, || random_negative_binomial(&mut rng, 3.5, 0.4).unwrap());
        assert_abs_diff_eq!(mean, 3.5 * 0.6 / 0.4, epsilon = 0.05);
        assert_eq!(random_negative_binomial(&mut rng, 2.0, 1.0).unwrap(), 0);
    }

    #[test]
    fn test_negative_binomial_huge_mean_rejected_without_draw() {
        let mut rng = Pcg64::seed_from_u64(1);
        let before = rng.state();
        assert!(matches!(
            random_negative_binomial(&mut rng, 1.0, 1e-20),
            Err(RandomError::InvalidParameter { name: "p", .. })
        ));
        assert_eq!(rng.state(), before);
    }

    #[test]
    fn test_negative_binomial_rate_overshoot_saturates() {
        // mean just under the Poisson bound, so about a third of the gamma
        // draws overshoot it
        let mut rng = Pcg64::seed_from_u64(7);
        let p = 1.0 / 9.0e18;
        let draws: Vec<i64> =
            (0..200).map(|_| random_negative_binomial(&mut rng, 1.0, p).unwrap()).collect();
        assert!(draws.iter().all(|&k| k >= 0));
        assert!(draws.contains(&i64::MAX));
    }

    #[test]
    fn test_logseries_mean() {
        // E = -p / ((1 - p) ln(1 - p))
        let mut rng = Pcg64::seed_from_u64(5);
        for p in [0.3, 0.9] {
            let mean = mean_of(100_000, || random_logseries(&mut rng, p).unwrap());
            let expected = -p / ((1.0 - p) * (1.0 - p).ln());
            assert_abs_diff_eq!(mean, expected, epsilon = 0.03 * expected);
        }
        assert!(random_logseries(&mut rng, 1.0).is_err());
    }

    #[test]
    fn test_zipf_mass_at_one() {
        // P(X = 1) = 1 / zeta(a); zeta(3) = 1.2020569
        let mut rng = Pcg64::seed_from_u64(6);
        let n = 100_000;
        let ones = (0..n).filter(|_| random_zipf(&mut rng, 3.0).unwrap() == 1).count();
        assert_abs_diff_eq!(ones as f64 / n as f64, 1.0 / 1.202_056_9, epsilon = 0.01);
        assert!(random_zipf(&mut rng, 1.0).is_err());
    }
}
