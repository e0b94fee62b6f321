//! Remaining continuous distributions, built from the uniform, normal,
//! exponential and gamma kernels.

use std::f64::consts::PI;

use randgen_core::{BitGenerator, RandomError, Result};

use super::exponential::random_standard_exponential;
use super::gamma::draw_standard_gamma;
use super::normal::random_standard_normal;
use crate::attempts::Attempts;
use crate::validate;

/// Standard Cauchy variate, the ratio of two standard normals.
pub fn random_standard_cauchy<B: BitGenerator + ?Sized>(bitgen: &mut B) -> Result<f64> {
    let num = random_standard_normal(bitgen)?;
    let den = random_standard_normal(bitgen)?;
    Ok(num / den)
}

/// Student's t variate with `df > 0`.
pub fn random_standard_t<B: BitGenerator + ?Sized>(bitgen: &mut B, df: f64) -> Result<f64> {
    validate::positive("df", df)?;
    let num = random_standard_normal(bitgen)?;
    let denom = draw_standard_gamma(bitgen, df / 2.0)?;
    Ok((df / 2.0).sqrt() * num / denom.sqrt())
}

/// Laplace (double exponential) variate.
pub fn random_laplace<B: BitGenerator + ?Sized>(
    bitgen: &mut B,
    loc: f64,
    scale: f64,
) -> Result<f64> {
    check_location_scale(loc, scale)?;
    let mut attempts = Attempts::new("laplace");
    loop {
        attempts.next()?;
        let u = bitgen.next_double();
        if u >= 0.5 {
            return Ok(loc - scale * (2.0 - u - u).ln());
        }
        if u > 0.0 {
            return Ok(loc + scale * (u + u).ln());
        }
    }
}

/// Gumbel (type I extreme value) variate.
pub fn random_gumbel<B: BitGenerator + ?Sized>(
    bitgen: &mut B,
    loc: f64,
    scale: f64,
) -> Result<f64> {
    check_location_scale(loc, scale)?;
    let mut attempts = Attempts::new("gumbel");
    loop {
        attempts.next()?;
        let u = 1.0 - bitgen.next_double();
        if u < 1.0 {
            return Ok(loc - scale * (-u.ln()).ln());
        }
    }
}

/// Logistic variate.
pub fn random_logistic<B: BitGenerator + ?Sized>(
    bitgen: &mut B,
    loc: f64,
    scale: f64,
) -> Result<f64> {
    check_location_scale(loc, scale)?;
    let mut attempts = Attempts::new("logistic");
    loop {
        attempts.next()?;
        let u = bitgen.next_double();
        if u > 0.0 {
            return Ok(loc + scale * (u / (1.0 - u)).ln());
        }
    }
}

fn check_location_scale(loc: f64, scale: f64) -> Result<()> {
    validate::finite("loc", loc)?;
    validate::non_negative("scale", scale)
}

/// Rayleigh variate with the given `scale` (mode).
pub fn random_rayleigh<B: BitGenerator + ?Sized>(bitgen: &mut B, scale: f64) -> Result<f64> {
    validate::non_negative("scale", scale)?;
    Ok(scale * (2.0 * random_standard_exponential(bitgen)?).sqrt())
}

/// Weibull variate with shape `a >= 0` and unit scale.
pub fn random_weibull<B: BitGenerator + ?Sized>(bitgen: &mut B, a: f64) -> Result<f64> {
    validate::non_negative("a", a)?;
    if a == 0.0 {
        return Ok(0.0);
    }
    Ok(random_standard_exponential(bitgen)?.powf(1.0 / a))
}

/// Pareto II (Lomax) variate with shape `a > 0`; add 1 for the classical
/// Pareto with unit mode.
pub fn random_pareto<B: BitGenerator + ?Sized>(bitgen: &mut B, a: f64) -> Result<f64> {
    validate::positive("a", a)?;
    Ok((random_standard_exponential(bitgen)? / a).exp_m1())
}

/// Power-function variate on `[0, 1]` with exponent `a > 0`.
pub fn random_power<B: BitGenerator + ?Sized>(bitgen: &mut B, a: f64) -> Result<f64> {
    validate::positive("a", a)?;
    Ok((-(-random_standard_exponential(bitgen)?).exp_m1()).powf(1.0 / a))
}

/// Wald (inverse Gaussian) variate with `mean > 0` and `scale > 0`.
pub fn random_wald<B: BitGenerator + ?Sized>(bitgen: &mut B, mean: f64, scale: f64) -> Result<f64> {
    validate::positive("mean", mean)?;
    validate::positive("scale", scale)?;
    let mu_2l = mean / (2.0 * scale);
    let y = random_standard_normal(bitgen)?;
    let y = mean * y * y;
    let x = mean + mu_2l * (y - (4.0 * scale * y + y * y).sqrt());
    let u = bitgen.next_double();
    if u <= mean / (mean + x) {
        Ok(x)
    } else {
        Ok(mean * mean / x)
    }
}

/// von Mises variate on `[-π, π]` with mode `mu` and concentration
/// `kappa >= 0`.
///
/// Best and Fisher's wrapped-Cauchy rejection. Very small `kappa` is
/// uniform on the circle; very large `kappa` falls back to a wrapped
/// normal.
pub fn random_vonmises<B: BitGenerator + ?Sized>(
    bitgen: &mut B,
    mu: f64,
    kappa: f64,
) -> Result<f64> {
    validate::finite("mu", mu)?;
    validate::non_negative("kappa", kappa)?;
    if kappa < 1e-8 {
        return Ok(PI * (2.0 * bitgen.next_double() - 1.0));
    }
    let s = if kappa < 1e-5 {
        1.0 / kappa + kappa
    } else if kappa <= 1e6 {
        let r = 1.0 + (1.0 + 4.0 * kappa * kappa).sqrt();
        let rho = (r - (2.0 * r).sqrt()) / (2.0 * kappa);
        (1.0 + rho * rho) / (2.0 * rho)
    } else {
        let mut result = mu + (1.0 / kappa).sqrt() * random_standard_normal(bitgen)?;
        if result < -PI {
            result += 2.0 * PI;
        }
        if result > PI {
            result -= 2.0 * PI;
        }
        return Ok(result);
    };

    let mut attempts = Attempts::new("vonmises");
    let w = loop {
        attempts.next()?;
        let u = bitgen.next_double();
        let z = (PI * u).cos();
        let w = (1.0 + s * z) / (s + z);
        let y = kappa * (s - w);
        let v = bitgen.next_double();
        if y * (2.0 - y) - v >= 0.0 || (y / v).ln() + 1.0 - y >= 0.0 {
            break w;
        }
    };

    let u = bitgen.next_double();
    let mut result = w.acos();
    if u < 0.5 {
        result = -result;
    }
    result += mu;
    let negative = result < 0.0;
    let mut wrapped = (result.abs() + PI) % (2.0 * PI) - PI;
    if negative {
        wrapped = -wrapped;
    }
    Ok(wrapped)
}

/// Triangular variate on `[left, right]` with peak at `mode`.
pub fn random_triangular<B: BitGenerator + ?Sized>(
    bitgen: &mut B,
    left: f64,
    mode: f64,
    right: f64,
) -> Result<f64> {
    validate::finite("left", left)?;
    validate::finite("mode", mode)?;
    validate::finite("right", right)?;
    if left > mode || mode > right {
        return Err(RandomError::invalid_parameter(
            "mode",
            format!("must satisfy left <= mode <= right, got {} {} {}", left, mode, right),
        ));
    }
    if left == right {
        return Err(RandomError::invalid_parameter("right", "must exceed left"));
    }
    let base = right - left;
    let left_base = mode - left;
    let ratio = left_base / base;
    let left_prod = left_base * base;
    let right_prod = (right - mode) * base;
    let u = bitgen.next_double();
    if u <= ratio {
        Ok(left + (u * left_prod).sqrt())
    } else {
        Ok(right - ((1.0 - u) * right_prod).sqrt())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use randgen_core::generators::{Pcg64, Threefry};
    use randgen_core::SeedableBitGenerator;

    fn sample(n: usize, mut draw: impl FnMut() -> f64) -> Vec<f64> {
        (0..n).map(|_| draw()).collect()
    }

    fn mean(xs: &[f64]) -> f64 {
        xs.iter().sum::<f64>() / xs.len() as f64
    }

    fn median(xs: &mut [f64]) -> f64 {
        xs.sort_by(|a, b| a.total_cmp(b));
        xs[xs.len() / 2]
    }

    #[test]
    fn test_cauchy_median_and_quartile() {
        let mut rng = Pcg64::seed_from_u64(1);
        let mut xs = sample(100_000, || random_standard_cauchy(&mut rng).unwrap());
        assert_abs_diff_eq!(median(&mut xs), 0.0, epsilon = 0.02);
        let above_one = xs.iter().filter(|&&x| x > 1.0).count() as f64 / xs.len() as f64;
        assert_abs_diff_eq!(above_one, 0.25, epsilon = 0.01);
    }

    #[test]
    fn test_student_t_variance() {
        // Var = df / (df - 2)
        let mut rng = Pcg64::seed_from_u64(2);
        let xs = sample(200_000, || random_standard_t(&mut rng, 10.0).unwrap());
        let var = xs.iter().map(|x| x * x).sum::<f64>() / xs.len() as f64;
        assert_abs_diff_eq!(mean(&xs), 0.0, epsilon = 0.01);
        assert_abs_diff_eq!(var, 1.25, epsilon = 0.03);
    }

    #[test]
    fn test_location_scale_families() {
        let mut rng = Threefry::seed_from_u64(3);
        let euler_gamma = 0.577_215_664_901_532_9;
        let laplace = sample(100_000, || random_laplace(&mut rng, 1.0, 2.0).unwrap());
        assert_abs_diff_eq!(mean(&laplace), 1.0, epsilon = 0.04);
        let gumbel = sample(100_000, || random_gumbel(&mut rng, 0.0, 1.0).unwrap());
        assert_abs_diff_eq!(mean(&gumbel), euler_gamma, epsilon = 0.02);
        let logistic = sample(100_000, || random_logistic(&mut rng, -2.0, 1.0).unwrap());
        assert_abs_diff_eq!(mean(&logistic), -2.0, epsilon = 0.03);
    }

    #[test]
    fn test_shape_families() {
        let mut rng = Pcg64::seed_from_u64(4);
        // Rayleigh mean = scale sqrt(pi/2)
        let rayleigh = sample(100_000, || random_rayleigh(&mut rng, 2.0).unwrap());
        assert_abs_diff_eq!(mean(&rayleigh), 2.0 * (PI / 2.0).sqrt(), epsilon = 0.02);
        // Weibull(a = 1) is exponential
        let weibull = sample(100_000, || random_weibull(&mut rng, 1.0).unwrap());
        assert_abs_diff_eq!(mean(&weibull), 1.0, epsilon = 0.02);
        // Lomax mean = 1 / (a - 1)
        let pareto = sample(200_000, || random_pareto(&mut rng, 5.0).unwrap());
        assert_abs_diff_eq!(mean(&pareto), 0.25, epsilon = 0.01);
        // Power mean = a / (a + 1)
        let power = sample(100_000, || random_power(&mut rng, 3.0).unwrap());
        assert_abs_diff_eq!(mean(&power), 0.75, epsilon = 0.01);
        assert!(power.iter().all(|&x| (0.0..=1.0).contains(&x)));
    }

    #[test]
    fn test_weibull_zero_shape() {
        let mut rng = Pcg64::seed_from_u64(4);
        assert_eq!(random_weibull(&mut rng, 0.0).unwrap(), 0.0);
    }

    #[test]
    fn test_wald_mean() {
        let mut rng = Pcg64::seed_from_u64(5);
        let xs = sample(100_000, || random_wald(&mut rng, 3.0, 2.0).unwrap());
        assert!(xs.iter().all(|&x| x > 0.0));
        assert_abs_diff_eq!(mean(&xs), 3.0, epsilon = 0.06);
    }

    #[test]
    fn test_vonmises_range_and_centre() {
        let mut rng = Pcg64::seed_from_u64(6);
        for kappa in [0.0, 1e-6, 0.5, 4.0, 1e7] {
            let xs = sample(20_000, || random_vonmises(&mut rng, 1.0, kappa).unwrap());
            assert!(xs.iter().all(|&x| (-PI..=PI).contains(&x)), "kappa {}", kappa);
            if kappa >= 4.0 {
                assert_abs_diff_eq!(mean(&xs), 1.0, epsilon = 0.02);
            }
        }
    }

    #[test]
    fn test_triangular() {
        let mut rng = Pcg64::seed_from_u64(7);
        let xs = sample(100_000, || random_triangular(&mut rng, 0.0, 1.0, 4.0).unwrap());
        assert!(xs.iter().all(|&x| (0.0..=4.0).contains(&x)));
        assert_abs_diff_eq!(mean(&xs), 5.0 / 3.0, epsilon = 0.02);
        assert!(random_triangular(&mut rng, 0.0, 5.0, 4.0).is_err());
        assert!(random_triangular(&mut rng, 1.0, 1.0, 1.0).is_err());
    }
}
