//! Binomial sampling.
//!
//! Works with `p' = min(p, 1 - p)` and reflects the count afterwards.
//! Small means (`n p' <= 30`) use sequential inversion; larger ones the
//! BTPE algorithm of Kachitvichyanukul and Schmeiser (1988).

use randgen_core::{BitGenerator, Result};

use crate::attempts::Attempts;
use crate::validate;

const INVERSION_MEAN_LIMIT: f64 = 30.0;

/// Binomial variate: successes in `n` trials with probability `p`.
///
/// # Arguments
///
/// * `n` - Number of trials, `n >= 0`
/// * `p` - Success probability in `[0, 1]`
///
/// # Errors
///
/// Returns [`randgen_core::RandomError::InvalidParameter`] for `n < 0` or
/// `p` outside `[0, 1]`, before any bits are drawn.
///
/// # Examples
///
/// ```
/// use randgen_core::generators::Pcg64;
/// use randgen_core::SeedableBitGenerator;
/// use randgen_distributions::discrete::random_binomial;
///
/// let mut rng = Pcg64::seed_from_u64(3);
/// let k = random_binomial(&mut rng, 100, 0.3).unwrap();
/// assert!((0..=100).contains(&k));
/// assert!(random_binomial(&mut rng, -1, 0.3).is_err());
/// ```
pub fn random_binomial<B: BitGenerator + ?Sized>(bitgen: &mut B, n: i64, p: f64) -> Result<i64> {
    check_binomial(n, p)?;
    draw_binomial(bitgen, n, p)
}

pub(crate) fn check_binomial(n: i64, p: f64) -> Result<()> {
    validate::non_negative_count("n", n)?;
    validate::probability("p", p)
}

pub(crate) fn draw_binomial<B: BitGenerator + ?Sized>(
    bitgen: &mut B,
    n: i64,
    p: f64,
) -> Result<i64> {
    if n == 0 || p == 0.0 {
        return Ok(0);
    }
    if p <= 0.5 {
        if p * n as f64 <= INVERSION_MEAN_LIMIT {
            binomial_inversion(bitgen, n, p)
        } else {
            binomial_btpe(bitgen, n, p)
        }
    } else {
        let q = 1.0 - p;
        if q * n as f64 <= INVERSION_MEAN_LIMIT {
            Ok(n - binomial_inversion(bitgen, n, q)?)
        } else {
            Ok(n - binomial_btpe(bitgen, n, q)?)
        }
    }
}

/// Sequential search from zero, restarting past a generous bound.
fn binomial_inversion<B: BitGenerator + ?Sized>(bitgen: &mut B, n: i64, p: f64) -> Result<i64> {
    let q = 1.0 - p;
    let nf = n as f64;
    let qn = (nf * q.ln()).exp();
    let np = nf * p;
    let bound = nf.min(np + 10.0 * (np * q + 1.0).sqrt());

    let mut attempts = Attempts::new("binomial");
    attempts.next()?;
    let mut x = 0_i64;
    let mut px = qn;
    let mut u = bitgen.next_double();
    while u > px {
        x += 1;
        if x as f64 > bound {
            attempts.next()?;
            x = 0;
            px = qn;
            u = bitgen.next_double();
        } else {
            u -= px;
            px = ((nf - x as f64 + 1.0) * p * px) / (x as f64 * q);
        }
    }
    Ok(x)
}

/// BTPE for `p <= 0.5` and `n p > 30`.
fn binomial_btpe<B: BitGenerator + ?Sized>(bitgen: &mut B, n: i64, p: f64) -> Result<i64> {
    let nf = n as f64;
    let r = p;
    let q = 1.0 - r;
    let fm = nf * r + r;
    let m = fm.floor();
    let p1 = (2.195 * (nf * r * q).sqrt() - 4.6 * q).floor() + 0.5;
    let xm = m + 0.5;
    let xl = xm - p1;
    let xr = xm + p1;
    let c = 0.134 + 20.5 / (15.3 + m);
    let a = (fm - xl) / (fm - xl * r);
    let lambda_l = a * (1.0 + a / 2.0);
    let a = (xr - fm) / (xr * q);
    let lambda_r = a * (1.0 + a / 2.0);
    let p2 = p1 * (1.0 + 2.0 * c);
    let p3 = p2 + c / lambda_l;
    let p4 = p3 + c / lambda_r;
    let nrq = nf * r * q;

    let mut attempts = Attempts::new("binomial");
    loop {
        attempts.next()?;
        let u = bitgen.next_double() * p4;
        let mut v = bitgen.next_double();

        // Triangular centre: immediate acceptance.
        if u <= p1 {
            return Ok((xm - p1 * v + u).floor() as i64);
        }

        let y: f64;
        if u <= p2 {
            // Parallelograms.
            let x = xl + (u - p1) / c;
            v = v * c + 1.0 - (m - x + 0.5).abs() / p1;
            if v > 1.0 {
                continue;
            }
            y = x.floor();
        } else if u <= p3 {
            // Left exponential tail.
            let candidate = (xl + v.ln() / lambda_l).floor();
            if candidate < 0.0 || v == 0.0 {
                continue;
            }
            y = candidate;
            v *= (u - p2) * lambda_l;
        } else {
            // Right exponential tail.
            let candidate = (xr - v.ln() / lambda_r).floor();
            if candidate > nf || v == 0.0 {
                continue;
            }
            y = candidate;
            v *= (u - p3) * lambda_r;
        }

        let k = (y - m).abs();
        if k <= 20.0 || k >= nrq / 2.0 - 1.0 {
            // Explicit evaluation of f(y) / f(m).
            let s = r / q;
            let a = s * (nf + 1.0);
            let mut f = 1.0;
            if m < y {
                let mut i = m + 1.0;
                while i <= y {
                    f *= a / i - s;
                    i += 1.0;
                }
            } else if m > y {
                let mut i = y + 1.0;
                while i <= m {
                    f /= a / i - s;
                    i += 1.0;
                }
            }
            if v <= f {
                return Ok(y as i64);
            }
            continue;
        }

        // Squeeze on log(f(y) / f(m)).
        let rho = (k / nrq) * ((k * (k / 3.0 + 0.625) + 0.166_666_666_666_666_66) / nrq + 0.5);
        let t = -k * k / (2.0 * nrq);
        let log_v = v.ln();
        if log_v < t - rho {
            return Ok(y as i64);
        }
        if log_v > t + rho {
            continue;
        }

        let x1 = y + 1.0;
        let f1 = m + 1.0;
        let z = nf + 1.0 - m;
        let w = nf - y + 1.0;
        let bound = xm * (f1 / x1).ln()
            + (nf - m + 0.5) * (z / w).ln()
            + (y - m) * (w * r / (x1 * q)).ln()
            + stirling_correction(f1)
            + stirling_correction(z)
            + stirling_correction(x1)
            + stirling_correction(w);
        if log_v <= bound {
            return Ok(y as i64);
        }
    }
}

/// Stirling series remainder used by the final BTPE acceptance test.
#[inline]
fn stirling_correction(x: f64) -> f64 {
    let x2 = x * x;
    (13680.0 - (462.0 - (132.0 - (99.0 - 140.0 / x2) / x2) / x2) / x2) / x / 166_320.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use randgen_core::generators::{Mt19937, Pcg64};
    use randgen_core::{RandomError, SeedableBitGenerator};

    fn moments(n: i64, p: f64, draws: usize, rng: &mut Pcg64) -> (f64, f64) {
        let xs: Vec<f64> = (0..draws)
            .map(|_| random_binomial(rng, n, p).unwrap() as f64)
            .collect();
        let mean = xs.iter().sum::<f64>() / draws as f64;
        let var = xs.iter().map(|x| (x - mean).powi(2)).sum::<f64>() / (draws as f64 - 1.0);
        (mean, var)
    }

    #[test]
    fn test_inversion_regime_moments() {
        let mut rng = Pcg64::seed_from_u64(1);
        let (mean, var) = moments(20, 0.3, 100_000, &mut rng);
        assert_abs_diff_eq!(mean, 6.0, epsilon = 0.05);
        assert_abs_diff_eq!(var, 4.2, epsilon = 0.1);
    }

    #[test]
    fn test_btpe_regime_moments() {
        let mut rng = Pcg64::seed_from_u64(2);
        let (mean, var) = moments(1000, 0.4, 100_000, &mut rng);
        assert_abs_diff_eq!(mean, 400.0, epsilon = 0.2);
        assert_abs_diff_eq!(var, 240.0, epsilon = 5.0);
    }

    #[test]
    fn test_reflection_above_half() {
        let mut rng = Pcg64::seed_from_u64(3);
        let (mean, _) = moments(500, 0.9, 50_000, &mut rng);
        assert_abs_diff_eq!(mean, 450.0, epsilon = 0.2);
        let (mean, _) = moments(10, 0.95, 50_000, &mut rng);
        assert_abs_diff_eq!(mean, 9.5, epsilon = 0.02);
    }

    #[test]
    fn test_degenerate_parameters() {
        let mut rng = Pcg64::seed_from_u64(4);
        let before = rng.state();
        assert_eq!(random_binomial(&mut rng, 0, 0.5).unwrap(), 0);
        assert_eq!(random_binomial(&mut rng, 100, 0.0).unwrap(), 0);
        assert_eq!(rng.state(), before);
        for _ in 0..100 {
            assert_eq!(random_binomial(&mut rng, 100, 1.0).unwrap(), 100);
        }
    }

    #[test]
    fn test_large_n_in_range() {
        let mut rng = Mt19937::seed_from_u64(5);
        let n = 1_i64 << 40;
        for _ in 0..1000 {
            let k = random_binomial(&mut rng, n, 0.5).unwrap();
            assert!((0..=n).contains(&k));
        }
    }

    #[test]
    fn test_negative_trials_rejected_without_state_change() {
        let mut rng = Pcg64::seed_from_u64(6);
        let before = rng.state();
        assert!(matches!(
            random_binomial(&mut rng, -1, 0.5),
            Err(RandomError::InvalidParameter { name: "n", .. })
        ));
        assert!(random_binomial(&mut rng, 10, 1.5).is_err());
        assert!(random_binomial(&mut rng, 10, f64::NAN).is_err());
        assert_eq!(rng.state(), before);
    }
}
