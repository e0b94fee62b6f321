//! Gamma family: gamma, beta, chi-square and F, central and non-central.
//!
//! Shape >= 1 uses Marsaglia and Tsang's squeeze (2000) on top of the
//! normal ziggurat. Shape < 1 boosts a `Gamma(shape + 1)` draw by
//! `U^(1/shape)`.

use randgen_core::{BitGenerator, Result};

use super::exponential::random_standard_exponential;
use super::normal::random_standard_normal;
use crate::attempts::Attempts;
use crate::discrete::draw_poisson;
use crate::validate;

/// Standard gamma variate (scale 1) with the given `shape > 0`.
///
/// `shape == 1` is a standard exponential. For very small shapes a large
/// share of the mass lies below the smallest subnormal `f64`, and those
/// draws come back as exactly 0.
///
/// # Examples
///
/// ```
/// use randgen_core::generators::Pcg64;
/// use randgen_core::SeedableBitGenerator;
/// use randgen_distributions::continuous::random_standard_gamma;
///
/// let mut rng = Pcg64::seed_from_u64(5);
/// let g = random_standard_gamma(&mut rng, 2.5).unwrap();
/// assert!(g > 0.0);
/// ```
pub fn random_standard_gamma<B: BitGenerator + ?Sized>(bitgen: &mut B, shape: f64) -> Result<f64> {
    validate::positive("shape", shape)?;
    draw_standard_gamma(bitgen, shape)
}

pub(crate) fn draw_standard_gamma<B: BitGenerator + ?Sized>(
    bitgen: &mut B,
    shape: f64,
) -> Result<f64> {
    if shape == 1.0 {
        return random_standard_exponential(bitgen);
    }
    if shape < 1.0 {
        let boosted = marsaglia_tsang(bitgen, shape + 1.0)?;
        // U in (0, 1]. U^(1/shape) still underflows to 0 once
        // U < 2^(-1075 shape), which is the true rounding of such draws.
        let u = 1.0 - bitgen.next_double();
        return Ok(boosted * u.powf(1.0 / shape));
    }
    marsaglia_tsang(bitgen, shape)
}

fn marsaglia_tsang<B: BitGenerator + ?Sized>(bitgen: &mut B, shape: f64) -> Result<f64> {
    let b = shape - 1.0 / 3.0;
    let c = 1.0 / (9.0 * b).sqrt();
    let mut attempts = Attempts::new("gamma");
    loop {
        attempts.next()?;
        let x = random_standard_normal(bitgen)?;
        let v = 1.0 + c * x;
        if v <= 0.0 {
            continue;
        }
        let v = v * v * v;
        let u = bitgen.next_double();
        let x2 = x * x;
        if u < 1.0 - 0.0331 * x2 * x2 {
            return Ok(b * v);
        }
        if u.ln() < 0.5 * x2 + b * (1.0 - v + v.ln()) {
            return Ok(b * v);
        }
    }
}

/// Gamma variate with `shape > 0` and `scale >= 0`.
///
/// # Errors
///
/// Returns [`randgen_core::RandomError::InvalidParameter`] naming the
/// offending parameter; no bits are drawn in that case.
pub fn random_gamma<B: BitGenerator + ?Sized>(
    bitgen: &mut B,
    shape: f64,
    scale: f64,
) -> Result<f64> {
    check_gamma(shape, scale)?;
    Ok(scale * draw_standard_gamma(bitgen, shape)?)
}

pub(crate) fn check_gamma(shape: f64, scale: f64) -> Result<()> {
    validate::positive("shape", shape)?;
    validate::non_negative("scale", scale)
}

/// Beta variate with shapes `a > 0` and `b > 0`.
///
/// Jöhnk's algorithm when both shapes are at most 1, falling back to log
/// space when both powers underflow; otherwise `Ga / (Ga + Gb)`.
pub fn random_beta<B: BitGenerator + ?Sized>(bitgen: &mut B, a: f64, b: f64) -> Result<f64> {
    validate::positive("a", a)?;
    validate::positive("b", b)?;
    draw_beta(bitgen, a, b)
}

pub(crate) fn draw_beta<B: BitGenerator + ?Sized>(bitgen: &mut B, a: f64, b: f64) -> Result<f64> {
    if a <= 1.0 && b <= 1.0 {
        let mut attempts = Attempts::new("beta");
        loop {
            attempts.next()?;
            let u = bitgen.next_double();
            let v = bitgen.next_double();
            let x = u.powf(1.0 / a);
            let y = v.powf(1.0 / b);
            let sum = x + y;
            if sum <= 1.0 && u + v > 0.0 {
                if sum > 0.0 {
                    return Ok(x / sum);
                }
                let mut log_x = u.ln() / a;
                let mut log_y = v.ln() / b;
                let log_max = log_x.max(log_y);
                log_x -= log_max;
                log_y -= log_max;
                return Ok((log_x - (log_x.exp() + log_y.exp()).ln()).exp());
            }
        }
    }
    let ga = draw_standard_gamma(bitgen, a)?;
    let gb = draw_standard_gamma(bitgen, b)?;
    Ok(ga / (ga + gb))
}

/// Chi-square variate with `df > 0` degrees of freedom.
pub fn random_chisquare<B: BitGenerator + ?Sized>(bitgen: &mut B, df: f64) -> Result<f64> {
    validate::positive("df", df)?;
    draw_chisquare(bitgen, df)
}

pub(crate) fn draw_chisquare<B: BitGenerator + ?Sized>(bitgen: &mut B, df: f64) -> Result<f64> {
    Ok(2.0 * draw_standard_gamma(bitgen, df / 2.0)?)
}

/// Non-central chi-square variate with `df > 0` and `nonc >= 0`.
///
/// For `df > 1` adds a shifted squared normal to a `χ²(df - 1)` draw;
/// otherwise mixes over a Poisson number of extra degrees of freedom.
pub fn random_noncentral_chisquare<B: BitGenerator + ?Sized>(
    bitgen: &mut B,
    df: f64,
    nonc: f64,
) -> Result<f64> {
    validate::positive("df", df)?;
    validate::non_negative("nonc", nonc)?;
    draw_noncentral_chisquare(bitgen, df, nonc)
}

pub(crate) fn draw_noncentral_chisquare<B: BitGenerator + ?Sized>(
    bitgen: &mut B,
    df: f64,
    nonc: f64,
) -> Result<f64> {
    if nonc == 0.0 {
        return draw_chisquare(bitgen, df);
    }
    if df > 1.0 {
        let chi2 = draw_chisquare(bitgen, df - 1.0)?;
        let n = random_standard_normal(bitgen)? + nonc.sqrt();
        return Ok(chi2 + n * n);
    }
    let i = draw_poisson(bitgen, nonc / 2.0)?;
    draw_chisquare(bitgen, df + 2.0 * i as f64)
}

/// F variate with `dfnum > 0` and `dfden > 0`.
pub fn random_f<B: BitGenerator + ?Sized>(bitgen: &mut B, dfnum: f64, dfden: f64) -> Result<f64> {
    validate::positive("dfnum", dfnum)?;
    validate::positive("dfden", dfden)?;
    let num = draw_chisquare(bitgen, dfnum)? * dfden;
    let den = draw_chisquare(bitgen, dfden)? * dfnum;
    Ok(num / den)
}

/// Non-central F variate with `dfnum > 0`, `dfden > 0` and `nonc >= 0`.
pub fn random_noncentral_f<B: BitGenerator + ?Sized>(
    bitgen: &mut B,
    dfnum: f64,
    dfden: f64,
    nonc: f64,
) -> Result<f64> {
    validate::positive("dfnum", dfnum)?;
    validate::positive("dfden", dfden)?;
    validate::non_negative("nonc", nonc)?;
    let t = draw_noncentral_chisquare(bitgen, dfnum, nonc)? * dfden;
    Ok(t / (draw_chisquare(bitgen, dfden)? * dfnum))
}
