//! The sampling trait implemented by every parameter value object.

use randgen_core::{BitGenerator, Result};

/// A validated probability distribution that can draw samples from any bit
/// generator.
///
/// Parameters are checked when the value object is built, so `sample` only
/// fails for a degenerate bit generator (see
/// [`crate::attempts::MAX_ATTEMPTS`]). Implementations draw bits from
/// `bitgen` only; repeated calls on the same generator state give the same
/// samples.
///
/// # Examples
///
/// ```
/// use randgen_core::generators::Xoroshiro128;
/// use randgen_core::SeedableBitGenerator;
/// use randgen_distributions::{Distribution, Normal};
///
/// let normal = Normal::new(1.0, 0.5).unwrap();
/// let mut rng = Xoroshiro128::seed_from_u64(9);
/// let x = normal.sample(&mut rng).unwrap();
/// assert!(x.is_finite());
/// ```
pub trait Distribution {
    /// Sample type.
    type Output;

    /// Draws one sample.
    fn sample<B: BitGenerator + ?Sized>(&self, bitgen: &mut B) -> Result<Self::Output>;
}

impl<D: Distribution + ?Sized> Distribution for &D {
    type Output = D::Output;

    #[inline]
    fn sample<B: BitGenerator + ?Sized>(&self, bitgen: &mut B) -> Result<Self::Output> {
        (**self).sample(bitgen)
    }
}
