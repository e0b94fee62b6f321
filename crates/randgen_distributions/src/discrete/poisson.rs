//! Poisson sampling.
//!
//! Knuth's multiplication method for `lam < 10` and Hörmann's transformed
//! rejection with squeeze (PTRS, 1993) above.

use randgen_core::{BitGenerator, RandomError, Result};

use crate::attempts::Attempts;
use crate::special::loggam;
use crate::validate;

/// Largest accepted rate; beyond it the count would not fit in an `i64`.
pub const POISSON_LAM_MAX: f64 = 9.223_372_006_484_770_8e18;

const PTRS_THRESHOLD: f64 = 10.0;

/// Poisson variate with rate `lam`.
///
/// # Errors
///
/// Returns [`RandomError::InvalidParameter`] if `lam` is negative, not
/// finite or above [`POISSON_LAM_MAX`].
pub fn random_poisson<B: BitGenerator + ?Sized>(bitgen: &mut B, lam: f64) -> Result<i64> {
    check_poisson(lam)?;
    draw_poisson(bitgen, lam)
}

pub(crate) fn check_poisson(lam: f64) -> Result<()> {
    validate::non_negative("lam", lam)?;
    if lam > POISSON_LAM_MAX {
        return Err(RandomError::invalid_parameter(
            "lam",
            format!("must not exceed {:e}, got {:e}", POISSON_LAM_MAX, lam),
        ));
    }
    Ok(())
}

pub(crate) fn draw_poisson<B: BitGenerator + ?Sized>(bitgen: &mut B, lam: f64) -> Result<i64> {
    if lam >= PTRS_THRESHOLD {
        poisson_ptrs(bitgen, lam)
    } else if lam == 0.0 {
        Ok(0)
    } else {
        poisson_mult(bitgen, lam)
    }
}

fn poisson_mult<B: BitGenerator + ?Sized>(bitgen: &mut B, lam: f64) -> Result<i64> {
    let enlam = (-lam).exp();
    let mut x = 0_i64;
    let mut prod = 1.0;
    let mut attempts = Attempts::new("poisson");
    loop {
        attempts.next()?;
        prod *= bitgen.next_double();
        if prod > enlam {
            x += 1;
        } else {
            return Ok(x);
        }
    }
}

fn poisson_ptrs<B: BitGenerator + ?Sized>(bitgen: &mut B, lam: f64) -> Result<i64> {
    let slam = lam.sqrt();
    let loglam = lam.ln();
    let b = 0.931 + 2.53 * slam;
    let a = -0.059 + 0.02483 * b;
    let invalpha = 1.1239 + 1.1328 / (b - 3.4);
    let vr = 0.9277 - 3.6224 / (b - 2.0);

    let mut attempts = Attempts::new("poisson");
    loop {
        attempts.next()?;
        let u = bitgen.next_double() - 0.5;
        let v = bitgen.next_double();
        let us = 0.5 - u.abs();
        let k = ((2.0 * a / us + b) * u + lam + 0.43).floor();
        if us >= 0.07 && v <= vr {
            return Ok(k as i64);
        }
        if k < 0.0 || (us < 0.013 && v > us) {
            continue;
        }
        // ln(0) = -inf accepts, which is what the squeeze intends.
        let lhs = v.ln() + invalpha.ln() - (a / (us * us) + b).ln();
        let rhs = -lam + k * loglam - loggam(k + 1.0);
        if lhs <= rhs {
            return Ok(k as i64);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use randgen_core::generators::{Pcg64, Xorshift1024};
    use randgen_core::SeedableBitGenerator;

    fn mean_and_var(lam: f64, n: usize, rng: &mut Pcg64) -> (f64, f64) {
        let xs: Vec<f64> = (0..n).map(|_| random_poisson(rng, lam).unwrap() as f64).collect();
        let mean = xs.iter().sum::<f64>() / n as f64;
        let var = xs.iter().map(|x| (x - mean).powi(2)).sum::<f64>() / (n as f64 - 1.0);
        (mean, var)
    }

    #[test]
    fn test_small_rate_moments() {
        let mut rng = Pcg64::seed_from_u64(10);
        let (mean, var) = mean_and_var(3.5, 100_000, &mut rng);
        assert_abs_diff_eq!(mean, 3.5, epsilon = 0.03);
        assert_abs_diff_eq!(var, 3.5, epsilon = 0.1);
    }

    #[test]
    fn test_ptrs_moments() {
        let mut rng = Pcg64::seed_from_u64(11);
        for lam in [10.0, 57.3, 1.0e4] {
            let (mean, var) = mean_and_var(lam, 100_000, &mut rng);
            let se = (lam / 100_000.0_f64).sqrt();
            assert_abs_diff_eq!(mean, lam, epsilon = 6.0 * se);
            assert_abs_diff_eq!(var / lam, 1.0, epsilon = 0.03);
        }
    }

    #[test]
    fn test_zero_probability_at_small_rate() {
        // P(X = 0) = e^-1 for lam = 1
        let mut rng = Xorshift1024::seed_from_u64(12);
        let n = 100_000;
        let zeros = (0..n)
            .filter(|_| random_poisson(&mut rng, 1.0).unwrap() == 0)
            .count();
        assert_abs_diff_eq!(zeros as f64 / n as f64, (-1.0_f64).exp(), epsilon = 0.01);
    }

    #[test]
    fn test_rate_bounds() {
        let mut rng = Pcg64::seed_from_u64(13);
        let before = rng.state();
        assert_eq!(random_poisson(&mut rng, 0.0).unwrap(), 0);
        assert!(random_poisson(&mut rng, -1.0).is_err());
        assert!(random_poisson(&mut rng, POISSON_LAM_MAX * 2.0).is_err());
        assert!(random_poisson(&mut rng, f64::NAN).is_err());
        assert_eq!(rng.state(), before);
        let huge = random_poisson(&mut rng, 1.0e15).unwrap();
        assert!(huge > 0);
    }
}
