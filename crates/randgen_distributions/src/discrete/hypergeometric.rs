//! Hypergeometric sampling.
//!
//! Draws of at most ten items simulate the urn directly (HYP); larger
//! draws use Stadlober's ratio-of-uniforms HRUA algorithm with the
//! symmetry corrections that let `sample` exceed half the population.

use randgen_core::{BitGenerator, RandomError, Result};

use crate::attempts::Attempts;
use crate::special::loggam;
use crate::validate;

const HYP_SAMPLE_LIMIT: i64 = 10;
const D1: f64 = 1.715_527_769_921_413_5;
const D2: f64 = 0.898_916_162_058_898_8;

/// Number of "good" items in `sample` draws without replacement from an
/// urn of `good` good and `bad` bad items.
///
/// # Errors
///
/// Returns [`RandomError::InvalidParameter`] if any count is negative or
/// `sample > good + bad`.
pub fn random_hypergeometric<B: BitGenerator + ?Sized>(
    bitgen: &mut B,
    good: i64,
    bad: i64,
    sample: i64,
) -> Result<i64> {
    check_hypergeometric(good, bad, sample)?;
    if sample > HYP_SAMPLE_LIMIT {
        hypergeometric_hrua(bitgen, good, bad, sample)
    } else if sample > 0 {
        hypergeometric_hyp(bitgen, good, bad, sample)
    } else {
        Ok(0)
    }
}

pub(crate) fn check_hypergeometric(good: i64, bad: i64, sample: i64) -> Result<()> {
    validate::non_negative_count("good", good)?;
    validate::non_negative_count("bad", bad)?;
    validate::non_negative_count("sample", sample)?;
    match good.checked_add(bad) {
        Some(total) if sample <= total => Ok(()),
        Some(total) => Err(RandomError::invalid_parameter(
            "sample",
            format!("must not exceed good + bad ({} > {})", sample, total),
        )),
        None => Err(RandomError::invalid_parameter("bad", "good + bad overflows")),
    }
}

fn hypergeometric_hyp<B: BitGenerator + ?Sized>(
    bitgen: &mut B,
    good: i64,
    bad: i64,
    sample: i64,
) -> Result<i64> {
    let d1 = (bad + good - sample) as f64;
    let d2 = good.min(bad) as f64;
    let mut y = d2;
    let mut k = sample as f64;
    while y > 0.0 {
        let u = bitgen.next_double();
        y -= (u + y / (d1 + k)).floor();
        k -= 1.0;
        if k == 0.0 {
            break;
        }
    }
    let mut z = (d2 - y) as i64;
    if good > bad {
        z = sample - z;
    }
    Ok(z)
}

fn hypergeometric_hrua<B: BitGenerator + ?Sized>(
    bitgen: &mut B,
    good: i64,
    bad: i64,
    sample: i64,
) -> Result<i64> {
    let min_good_bad = good.min(bad);
    let max_good_bad = good.max(bad);
    let popsize = good + bad;
    let m = sample.min(popsize - sample);
    let (mingb, maxgb, pop, mf) = (
        min_good_bad as f64,
        max_good_bad as f64,
        popsize as f64,
        m as f64,
    );

    let d4 = mingb / pop;
    let d5 = 1.0 - d4;
    let d6 = mf * d4 + 0.5;
    let d7 = ((pop - mf) * sample as f64 * d4 * d5 / (pop - 1.0) + 0.5).sqrt();
    let d8 = D1 * d7 + D2;
    let d9 = ((mf + 1.0) * (mingb + 1.0) / (pop + 2.0)).floor();
    let d10 = loggam(d9 + 1.0)
        + loggam(mingb - d9 + 1.0)
        + loggam(mf - d9 + 1.0)
        + loggam(maxgb - mf + d9 + 1.0);
    // 16 matches the decimal precision of D1 and D2.
    let d11 = (mf.min(mingb) + 1.0).min((d6 + 16.0 * d7).floor());

    let mut attempts = Attempts::new("hypergeometric");
    let z = loop {
        attempts.next()?;
        let x = bitgen.next_double();
        let y = bitgen.next_double();
        let w = d6 + d8 * (y - 0.5) / x;
        if !(0.0..d11).contains(&w) {
            continue;
        }
        let z = w.floor();
        let t = d10
            - (loggam(z + 1.0)
                + loggam(mingb - z + 1.0)
                + loggam(mf - z + 1.0)
                + loggam(maxgb - mf + z + 1.0));
        if x * (4.0 - x) - 3.0 <= t {
            break z as i64;
        }
        if x * (x - t) >= 1.0 {
            continue;
        }
        if 2.0 * x.ln() <= t {
            break z as i64;
        }
    };

    let mut z = z;
    if good > bad {
        z = m - z;
    }
    if m < sample {
        z = good - z;
    }
    Ok(z)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use randgen_core::generators::Pcg64;
    use randgen_core::SeedableBitGenerator;

    fn check_mean(good: i64, bad: i64, sample: i64, seed: u64) {
        let mut rng = Pcg64::seed_from_u64(seed);
        let n = 50_000;
        let xs: Vec<i64> = (0..n)
            .map(|_| random_hypergeometric(&mut rng, good, bad, sample).unwrap())
            .collect();
        assert!(xs.iter().all(|&x| x >= 0 && x <= good.min(sample)));
        assert!(xs.iter().all(|&x| sample - x <= bad));
        let mean = xs.iter().sum::<i64>() as f64 / n as f64;
        let total = (good + bad) as f64;
        let expected = sample as f64 * good as f64 / total;
        let var = expected * (bad as f64 / total) * (total - sample as f64) / (total - 1.0);
        let tol = 6.0 * (var / n as f64).sqrt() + 1e-9;
        assert_abs_diff_eq!(mean, expected, epsilon = tol);
    }

    #[test]
    fn test_hyp_regime() {
        check_mean(7, 13, 5, 1);
        check_mean(30, 2, 10, 2);
    }

    #[test]
    fn test_hrua_regime() {
        check_mean(100, 200, 50, 3);
        check_mean(500, 40, 300, 4);
        check_mean(1000, 1000, 1500, 5);
    }

    #[test]
    fn test_degenerate_urns() {
        let mut rng = Pcg64::seed_from_u64(6);
        assert_eq!(random_hypergeometric(&mut rng, 5, 5, 0).unwrap(), 0);
        assert_eq!(random_hypergeometric(&mut rng, 0, 8, 4).unwrap(), 0);
        assert_eq!(random_hypergeometric(&mut rng, 8, 0, 4).unwrap(), 4);
        assert_eq!(random_hypergeometric(&mut rng, 20, 30, 50).unwrap(), 20);
    }

    #[test]
    fn test_invalid_counts() {
        let mut rng = Pcg64::seed_from_u64(7);
        assert!(random_hypergeometric(&mut rng, -1, 5, 2).is_err());
        assert!(random_hypergeometric(&mut rng, 3, 5, 9).is_err());
        assert!(random_hypergeometric(&mut rng, i64::MAX, 1, 2).is_err());
    }
}
