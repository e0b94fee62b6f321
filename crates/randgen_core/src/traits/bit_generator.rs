//! The bit generator capability contract.

use crate::seed::SeedSequence;
use crate::types::{BitGeneratorKind, BitGeneratorState, RandomError, Result};

/// 2^-53, the spacing of 53-bit doubles in `[0, 1)`.
pub const DOUBLE_UNIT: f64 = 1.0 / 9_007_199_254_740_992.0;

/// 2^-24, the spacing of 24-bit floats in `[0, 1)`.
pub const FLOAT_UNIT: f32 = 1.0 / 16_777_216.0;

/// Deterministic source of raw random bits.
///
/// Every output is a pure function of the algorithm and its current state.
/// The trait is object safe; sampling kernels take `B: BitGenerator + ?Sized`
/// so both concrete generators and `dyn BitGenerator` work.
///
/// # Provided conversions
///
/// - [`next_double`](Self::next_double): top 53 bits of `next_u64`, scaled
///   to `[0, 1)`
/// - [`next_float`](Self::next_float): top 24 bits of `next_u32`, scaled
///   to `[0, 1)`
///
/// Variants with a different native word (MT19937, dSFMT) override them.
///
/// # Capabilities
///
/// [`jump`](Self::jump) and [`advance`](Self::advance) default to
/// [`RandomError::UnsupportedOperation`].
pub trait BitGenerator {
    /// Returns the algorithm of this generator.
    fn kind(&self) -> BitGeneratorKind;

    /// Returns 64 uniformly distributed bits.
    fn next_u64(&mut self) -> u64;

    /// Returns 32 uniformly distributed bits.
    fn next_u32(&mut self) -> u32;

    /// Returns a uniform double in `[0, 1)` with 53 bits of resolution.
    #[inline]
    fn next_double(&mut self) -> f64 {
        (self.next_u64() >> 11) as f64 * DOUBLE_UNIT
    }

    /// Returns a uniform float in `[0, 1)` with 24 bits of resolution.
    #[inline]
    fn next_float(&mut self) -> f32 {
        (self.next_u32() >> 8) as f32 * FLOAT_UNIT
    }

    /// Returns the native output word without conversion.
    #[inline]
    fn next_raw(&mut self) -> u64 {
        self.next_u64()
    }

    /// Takes a snapshot of the full state.
    fn state(&self) -> BitGeneratorState;

    /// Restores a snapshot taken by [`state`](Self::state).
    ///
    /// # Errors
    ///
    /// Returns [`RandomError::SerializationMismatch`] if the snapshot does
    /// not fit this variant; the generator is left unchanged.
    fn set_state(&mut self, state: &BitGeneratorState) -> Result<()>;

    /// Advances the state by `iter` jump distances, in place.
    ///
    /// `jump(0)` leaves the state unchanged.
    ///
    /// # Errors
    ///
    /// Returns [`RandomError::UnsupportedOperation`] if the variant has no
    /// jump.
    fn jump(&mut self, iter: u64) -> Result<()> {
        let _ = iter;
        Err(RandomError::unsupported(self.kind(), "jump"))
    }

    /// Advances the state by exactly `delta` native steps.
    ///
    /// # Errors
    ///
    /// Returns [`RandomError::UnsupportedOperation`] if the variant cannot
    /// skip arbitrary distances.
    fn advance(&mut self, delta: u128) -> Result<()> {
        let _ = delta;
        Err(RandomError::unsupported(self.kind(), "advance"))
    }

    /// Returns a copy of this generator advanced by `iter` jumps.
    ///
    /// The receiver is not modified.
    ///
    /// # Errors
    ///
    /// As for [`jump`](Self::jump).
    fn jumped(&self, iter: u64) -> Result<Self>
    where
        Self: Clone + Sized,
    {
        let mut next = self.clone();
        next.jump(iter)?;
        Ok(next)
    }
}

/// Bit generators that can be constructed from seed material.
pub trait SeedableBitGenerator: BitGenerator + Sized {
    /// Initialises the generator from seed material.
    fn from_seed_sequence(seed: &SeedSequence) -> Self;

    /// Initialises the generator from a 64-bit integer seed.
    #[inline]
    fn seed_from_u64(seed: u64) -> Self {
        Self::from_seed_sequence(&SeedSequence::from_u64(seed))
    }

    /// Initialises the generator from operating system entropy.
    ///
    /// # Errors
    ///
    /// Returns [`RandomError::EntropyUnavailable`] if the OS source fails.
    fn from_entropy() -> Result<Self> {
        Ok(Self::from_seed_sequence(&SeedSequence::from_entropy()?))
    }

    /// Rebuilds a generator from a snapshot.
    ///
    /// # Errors
    ///
    /// Returns [`RandomError::SerializationMismatch`] if the snapshot does
    /// not fit this variant.
    fn from_state(state: &BitGeneratorState) -> Result<Self> {
        let mut generator = Self::seed_from_u64(0);
        generator.set_state(state)?;
        Ok(generator)
    }

    /// Re-initialises the generator in place.
    fn reseed(&mut self, seed: &SeedSequence) {
        *self = Self::from_seed_sequence(seed);
    }
}

impl<B: BitGenerator + ?Sized> BitGenerator for &mut B {
    #[inline]
    fn kind(&self) -> BitGeneratorKind {
        (**self).kind()
    }

    #[inline]
    fn next_u64(&mut self) -> u64 {
        (**self).next_u64()
    }

    #[inline]
    fn next_u32(&mut self) -> u32 {
        (**self).next_u32()
    }

    #[inline]
    fn next_double(&mut self) -> f64 {
        (**self).next_double()
    }

    #[inline]
    fn next_float(&mut self) -> f32 {
        (**self).next_float()
    }

    #[inline]
    fn next_raw(&mut self) -> u64 {
        (**self).next_raw()
    }

    fn state(&self) -> BitGeneratorState {
        (**self).state()
    }

    fn set_state(&mut self, state: &BitGeneratorState) -> Result<()> {
        (**self).set_state(state)
    }

    fn jump(&mut self, iter: u64) -> Result<()> {
        (**self).jump(iter)
    }

    fn advance(&mut self, delta: u128) -> Result<()> {
        (**self).advance(delta)
    }
}

impl<B: BitGenerator + ?Sized> BitGenerator for Box<B> {
    #[inline]
    fn kind(&self) -> BitGeneratorKind {
        (**self).kind()
    }

    #[inline]
    fn next_u64(&mut self) -> u64 {
        (**self).next_u64()
    }

    #[inline]
    fn next_u32(&mut self) -> u32 {
        (**self).next_u32()
    }

    #[inline]
    fn next_double(&mut self) -> f64 {
        (**self).next_double()
    }

    #[inline]
    fn next_float(&mut self) -> f32 {
        (**self).next_float()
    }

    #[inline]
    fn next_raw(&mut self) -> u64 {
        (**self).next_raw()
    }

    fn state(&self) -> BitGeneratorState {
        (**self).state()
    }

    fn set_state(&mut self, state: &BitGeneratorState) -> Result<()> {
        (**self).set_state(state)
    }

    fn jump(&mut self, iter: u64) -> Result<()> {
        (**self).jump(iter)
    }

    fn advance(&mut self, delta: u128) -> Result<()> {
        (**self).advance(delta)
    }
}
