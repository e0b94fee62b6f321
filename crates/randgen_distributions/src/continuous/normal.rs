//! Normal and log-normal sampling with a 256-layer ziggurat.
//!
//! One 64-bit word per attempt: the low byte picks the layer, the next bit
//! the sign, and the following 52 bits the magnitude. About 99.3% of draws
//! return after a single comparison.

use randgen_core::{BitGenerator, Result};

use super::ziggurat::{FI_DOUBLE, KI_DOUBLE, WI_DOUBLE, ZIGGURAT_NOR_INV_R, ZIGGURAT_NOR_R};
use crate::attempts::Attempts;
use crate::validate;

const MANTISSA_MASK: u64 = 0x000f_ffff_ffff_ffff;

/// Standard normal variate (mean 0, variance 1).
///
/// # Errors
///
/// Returns [`randgen_core::RandomError::InternalError`] only for a
/// degenerate bit generator that keeps landing outside the ziggurat.
///
/// # Examples
///
/// ```
/// use randgen_core::generators::Philox;
/// use randgen_core::SeedableBitGenerator;
/// use randgen_distributions::continuous::random_standard_normal;
///
/// let mut rng = Philox::seed_from_u64(42);
/// let z = random_standard_normal(&mut rng).unwrap();
/// assert!(z.is_finite());
/// ```
pub fn random_standard_normal<B: BitGenerator + ?Sized>(bitgen: &mut B) -> Result<f64> {
    let mut attempts = Attempts::new("normal");
    loop {
        attempts.next()?;
        let mut r = bitgen.next_u64();
        let idx = (r & 0xff) as usize;
        r >>= 8;
        let negative = r & 1 == 1;
        let rabs = (r >> 1) & MANTISSA_MASK;
        let magnitude = rabs as f64 * WI_DOUBLE[idx];
        let x = if negative { -magnitude } else { magnitude };
        if rabs < KI_DOUBLE[idx] {
            return Ok(x);
        }
        if idx == 0 {
            // Tail beyond r: Marsaglia's exponential rejection.
            loop {
                attempts.next()?;
                let xx = -ZIGGURAT_NOR_INV_R * (-bitgen.next_double()).ln_1p();
                let yy = -(-bitgen.next_double()).ln_1p();
                if yy + yy > xx * xx {
                    let tail = ZIGGURAT_NOR_R + xx;
                    return Ok(if (rabs >> 8) & 1 == 1 { -tail } else { tail });
                }
            }
        }
        let y = (FI_DOUBLE[idx - 1] - FI_DOUBLE[idx]) * bitgen.next_double() + FI_DOUBLE[idx];
        if y < (-0.5 * x * x).exp() {
            return Ok(x);
        }
    }
}

/// Normal variate with mean `loc` and standard deviation `scale`.
///
/// # Errors
///
/// Returns [`randgen_core::RandomError::InvalidParameter`] if `loc` is not
/// finite or `scale` is negative or not finite.
pub fn random_normal<B: BitGenerator + ?Sized>(
    bitgen: &mut B,
    loc: f64,
    scale: f64,
) -> Result<f64> {
    check_normal(loc, scale)?;
    Ok(loc + scale * random_standard_normal(bitgen)?)
}

pub(crate) fn check_normal(loc: f64, scale: f64) -> Result<()> {
    validate::finite("loc", loc)?;
    validate::non_negative("scale", scale)
}

/// Log-normal variate: `exp(N(mean, sigma))`.
pub fn random_lognormal<B: BitGenerator + ?Sized>(
    bitgen: &mut B,
    mean: f64,
    sigma: f64,
) -> Result<f64> {
    validate::finite("mean", mean)?;
    validate::non_negative("sigma", sigma)?;
    Ok((mean + sigma * random_standard_normal(bitgen)?).exp())
}
