//! Uniform real and integer sampling.
//!
//! Integer draws use masked rejection: the smallest all-ones mask covering
//! the range is applied to fresh words until the masked value falls inside.
//! Ranges that fit in 32 bits consume `next_u32` words, wider ranges
//! `next_u64` words, so the number of words consumed per draw depends only
//! on the range and the bits seen.

use randgen_core::{BitGenerator, RandomError, Result};

use crate::attempts::Attempts;
use crate::validate;

/// Standard uniform `f64` in `[0, 1)` with 53 bits of resolution.
#[inline]
pub fn random_standard_uniform<B: BitGenerator + ?Sized>(bitgen: &mut B) -> f64 {
    bitgen.next_double()
}

/// Standard uniform `f32` in `[0, 1)` with 24 bits of resolution.
#[inline]
pub fn random_standard_uniform_f32<B: BitGenerator + ?Sized>(bitgen: &mut B) -> f32 {
    bitgen.next_float()
}

/// Uniform real on `[low, high)`.
///
/// # Arguments
///
/// * `low` - Inclusive lower bound
/// * `high` - Exclusive upper bound, strictly greater than `low`
///
/// # Errors
///
/// Returns [`RandomError::InvalidParameter`] if either bound is not finite,
/// if `low >= high`, or if `high - low` overflows.
pub fn random_uniform<B: BitGenerator + ?Sized>(
    bitgen: &mut B,
    low: f64,
    high: f64,
) -> Result<f64> {
    check_uniform(low, high)?;
    Ok(draw_uniform(bitgen, low, high - low))
}

pub(crate) fn check_uniform(low: f64, high: f64) -> Result<()> {
    validate::finite("low", low)?;
    validate::finite("high", high)?;
    if low >= high {
        return Err(RandomError::invalid_parameter(
            "high",
            format!("must exceed low ({} >= {})", low, high),
        ));
    }
    if !(high - low).is_finite() {
        return Err(RandomError::invalid_parameter("high", "range high - low overflows"));
    }
    Ok(())
}

/// `low + range * U`, pulled back below `low + range` when rounding lands
/// on the upper bound.
#[inline]
pub(crate) fn draw_uniform<B: BitGenerator + ?Sized>(bitgen: &mut B, low: f64, range: f64) -> f64 {
    let high = low + range;
    let x = low + range * bitgen.next_double();
    if x < high {
        x
    } else {
        next_toward_neg_infinity(high)
    }
}

/// The largest `f64` strictly below a finite `x`.
fn next_toward_neg_infinity(x: f64) -> f64 {
    if x == 0.0 {
        -f64::from_bits(1)
    } else if x > 0.0 {
        f64::from_bits(x.to_bits() - 1)
    } else {
        f64::from_bits(x.to_bits() + 1)
    }
}

/// Uniform integer on the closed interval `[low, high]`.
///
/// # Errors
///
/// Returns [`RandomError::InvalidParameter`] if `low > high`, or
/// [`RandomError::InternalError`] if the bit generator never produces an
/// in-range value.
///
/// # Examples
///
/// ```
/// use randgen_core::generators::Pcg64;
/// use randgen_core::SeedableBitGenerator;
/// use randgen_distributions::uniform::random_integers;
///
/// let mut rng = Pcg64::seed_from_u64(1);
/// let die = random_integers(&mut rng, 1, 6).unwrap();
/// assert!((1..=6).contains(&die));
/// ```
pub fn random_integers<B: BitGenerator + ?Sized>(
    bitgen: &mut B,
    low: i64,
    high: i64,
) -> Result<i64> {
    check_integers(low, high)?;
    draw_integers(bitgen, low, high)
}

pub(crate) fn check_integers(low: i64, high: i64) -> Result<()> {
    if low > high {
        return Err(RandomError::invalid_parameter(
            "high",
            format!("must be >= low ({} > {})", low, high),
        ));
    }
    Ok(())
}

#[inline]
pub(crate) fn draw_integers<B: BitGenerator + ?Sized>(
    bitgen: &mut B,
    low: i64,
    high: i64,
) -> Result<i64> {
    let range = high.wrapping_sub(low) as u64;
    let offset = random_bounded_u64(bitgen, range)?;
    Ok(low.wrapping_add(offset as i64))
}

/// Uniform `u64` on `[0, range]` by masked rejection.
///
/// `range == u64::MAX` returns a raw word; `range == u32::MAX` a raw
/// 32-bit word.
pub fn random_bounded_u64<B: BitGenerator + ?Sized>(bitgen: &mut B, range: u64) -> Result<u64> {
    if range == 0 {
        return Ok(0);
    }
    if range == u64::MAX {
        return Ok(bitgen.next_u64());
    }
    if range == u64::from(u32::MAX) {
        return Ok(u64::from(bitgen.next_u32()));
    }
    let mask = covering_mask(range);
    let mut attempts = Attempts::new("integers");
    if range <= u64::from(u32::MAX) {
        let mask32 = mask as u32;
        let range32 = range as u32;
        loop {
            attempts.next()?;
            let value = bitgen.next_u32() & mask32;
            if value <= range32 {
                return Ok(u64::from(value));
            }
        }
    }
    loop {
        attempts.next()?;
        let value = bitgen.next_u64() & mask;
        if value <= range {
            return Ok(value);
        }
    }
}

/// Uniform `u64` on `[0, max]`, the primitive behind shuffling.
///
/// Always uses masked rejection, even for the full 32- and 64-bit ranges.
pub fn random_interval<B: BitGenerator + ?Sized>(bitgen: &mut B, max: u64) -> Result<u64> {
    if max == 0 {
        return Ok(0);
    }
    let mask = covering_mask(max);
    let mut attempts = Attempts::new("interval");
    loop {
        attempts.next()?;
        let value = if max <= u64::from(u32::MAX) {
            u64::from(bitgen.next_u32()) & mask
        } else {
            bitgen.next_u64() & mask
        };
        if value <= max {
            return Ok(value);
        }
    }
}

/// Smallest `2^k - 1` that is `>= value`.
#[inline]
fn covering_mask(value: u64) -> u64 {
    u64::MAX >> value.leading_zeros()
}
