//! Exponential sampling: 256-layer ziggurat and plain inversion.

use randgen_core::{BitGenerator, Result};

use super::ziggurat::{FE_DOUBLE, KE_DOUBLE, WE_DOUBLE, ZIGGURAT_EXP_R};
use crate::attempts::Attempts;
use crate::validate;

/// Standard exponential variate (rate 1) by ziggurat.
///
/// The top three bits of each word are discarded; the next byte picks the
/// layer and the remaining 53 bits give the magnitude.
pub fn random_standard_exponential<B: BitGenerator + ?Sized>(bitgen: &mut B) -> Result<f64> {
    let mut attempts = Attempts::new("exponential");
    loop {
        attempts.next()?;
        let mut ri = bitgen.next_u64() >> 3;
        let idx = (ri & 0xff) as usize;
        ri >>= 8;
        let x = ri as f64 * WE_DOUBLE[idx];
        if ri < KE_DOUBLE[idx] {
            return Ok(x);
        }
        if idx == 0 {
            // Memoryless tail.
            return Ok(ZIGGURAT_EXP_R - (-bitgen.next_double()).ln_1p());
        }
        let y = (FE_DOUBLE[idx - 1] - FE_DOUBLE[idx]) * bitgen.next_double() + FE_DOUBLE[idx];
        if y < (-x).exp() {
            return Ok(x);
        }
    }
}

/// Standard exponential variate by inversion, `-ln(U)`.
///
/// Slower than the ziggurat but consumes exactly one double per draw
/// (redrawing only when `U == 0`).
pub fn random_standard_exponential_inv<B: BitGenerator + ?Sized>(bitgen: &mut B) -> Result<f64> {
    let mut attempts = Attempts::new("exponential_inv");
    loop {
        attempts.next()?;
        let u = bitgen.next_double();
        if u > 0.0 {
            return Ok(-u.ln());
        }
    }
}

/// Exponential variate with the given `scale` (mean).
///
/// # Errors
///
/// Returns [`randgen_core::RandomError::InvalidParameter`] if `scale` is
/// negative or not finite.
pub fn random_exponential<B: BitGenerator + ?Sized>(bitgen: &mut B, scale: f64) -> Result<f64> {
    validate::non_negative("scale", scale)?;
    Ok(scale * random_standard_exponential(bitgen)?)
}
