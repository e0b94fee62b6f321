//! Closed-set wrapper over every bit generator variant.
//!
//! [`AnyBitGenerator`] lets callers choose the algorithm at run time (from
//! configuration, say) while keeping static dispatch: every call is a
//! `match` over the variants, never a virtual call. The two Mersenne
//! Twister states are boxed to keep the enum small.

use super::{Dsfmt, Mt19937, Pcg64, Philox, SplitMix64, Threefry, Xoroshiro128, Xorshift1024};
use crate::seed::SeedSequence;
use crate::traits::{BitGenerator, SeedableBitGenerator};
use crate::types::{BitGeneratorKind, BitGeneratorState, Result};

/// Any of the supported bit generators.
///
/// # Examples
///
/// ```
/// use randgen_core::generators::AnyBitGenerator;
/// use randgen_core::seed::SeedSequence;
/// use randgen_core::traits::BitGenerator;
/// use randgen_core::types::BitGeneratorKind;
///
/// let seed = SeedSequence::from(42_u64);
/// let mut rng = AnyBitGenerator::from_seed(BitGeneratorKind::Pcg64, &seed);
/// let snapshot = rng.state();
///
/// let mut restored = AnyBitGenerator::from_state(&snapshot).unwrap();
/// assert_eq!(rng.next_u64(), restored.next_u64());
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AnyBitGenerator {
    /// MT19937.
    Mt19937(Box<Mt19937>),
    /// dSFMT-19937.
    Dsfmt(Box<Dsfmt>),
    /// PCG64.
    Pcg64(Pcg64),
    /// Philox4x64-10.
    Philox(Philox),
    /// Threefry4x64-20.
    Threefry(Threefry),
    /// xoroshiro128+.
    Xoroshiro128(Xoroshiro128),
    /// xorshift1024*.
    Xorshift1024(Xorshift1024),
    /// SplitMix64.
    SplitMix64(SplitMix64),
}

macro_rules! dispatch {
    ($self:expr, $g:ident => $body:expr) => {
        match $self {
            AnyBitGenerator::Mt19937($g) => $body,
            AnyBitGenerator::Dsfmt($g) => $body,
            AnyBitGenerator::Pcg64($g) => $body,
            AnyBitGenerator::Philox($g) => $body,
            AnyBitGenerator::Threefry($g) => $body,
            AnyBitGenerator::Xoroshiro128($g) => $body,
            AnyBitGenerator::Xorshift1024($g) => $body,
            AnyBitGenerator::SplitMix64($g) => $body,
        }
    };
}

impl AnyBitGenerator {
    /// Seeds a generator of the given kind.
    pub fn from_seed(kind: BitGeneratorKind, seed: &SeedSequence) -> Self {
        let generator = match kind {
            BitGeneratorKind::Mt19937 => {
                AnyBitGenerator::Mt19937(Box::new(Mt19937::from_seed_sequence(seed)))
            }
            BitGeneratorKind::Dsfmt => {
                AnyBitGenerator::Dsfmt(Box::new(Dsfmt::from_seed_sequence(seed)))
            }
            BitGeneratorKind::Pcg64 => AnyBitGenerator::Pcg64(Pcg64::from_seed_sequence(seed)),
            BitGeneratorKind::Philox => AnyBitGenerator::Philox(Philox::from_seed_sequence(seed)),
            BitGeneratorKind::Threefry => {
                AnyBitGenerator::Threefry(Threefry::from_seed_sequence(seed))
            }
            BitGeneratorKind::Xoroshiro128 => {
                AnyBitGenerator::Xoroshiro128(Xoroshiro128::from_seed_sequence(seed))
            }
            BitGeneratorKind::Xorshift1024 => {
                AnyBitGenerator::Xorshift1024(Xorshift1024::from_seed_sequence(seed))
            }
            BitGeneratorKind::SplitMix64 => {
                AnyBitGenerator::SplitMix64(SplitMix64::from_seed_sequence(seed))
            }
        };
        tracing::debug!(kind = %kind, "bit generator seeded");
        generator
    }

    /// Seeds a generator of the given kind from operating system entropy.
    ///
    /// # Errors
    ///
    /// Returns [`crate::types::RandomError::EntropyUnavailable`] if the OS
    /// source fails.
    pub fn from_entropy(kind: BitGeneratorKind) -> Result<Self> {
        Ok(Self::from_seed(kind, &SeedSequence::from_entropy()?))
    }

    /// Rebuilds a generator of the snapshot's kind from the snapshot.
    ///
    /// # Errors
    ///
    /// Returns [`crate::types::RandomError::SerializationMismatch`] if the
    /// snapshot is malformed.
    pub fn from_state(state: &BitGeneratorState) -> Result<Self> {
        let mut generator = Self::from_seed(state.kind, &SeedSequence::from_u64(0));
        generator.set_state(state)?;
        Ok(generator)
    }

    /// Re-initialises the generator in place, keeping its kind.
    pub fn reseed(&mut self, seed: &SeedSequence) {
        *self = Self::from_seed(self.kind(), seed);
    }
}

impl BitGenerator for AnyBitGenerator {
    fn kind(&self) -> BitGeneratorKind {
        dispatch!(self, g => g.kind())
    }

    #[inline]
    fn next_u64(&mut self) -> u64 {
        dispatch!(self, g => g.next_u64())
    }

    #[inline]
    fn next_u32(&mut self) -> u32 {
        dispatch!(self, g => g.next_u32())
    }

    #[inline]
    fn next_double(&mut self) -> f64 {
        dispatch!(self, g => g.next_double())
    }

    #[inline]
    fn next_float(&mut self) -> f32 {
        dispatch!(self, g => g.next_float())
    }

    #[inline]
    fn next_raw(&mut self) -> u64 {
        dispatch!(self, g => g.next_raw())
    }

    fn state(&self) -> BitGeneratorState {
        dispatch!(self, g => g.state())
    }

    fn set_state(&mut self, state: &BitGeneratorState) -> Result<()> {
        dispatch!(self, g => g.set_state(state))
    }

    fn jump(&mut self, iter: u64) -> Result<()> {
        dispatch!(self, g => g.jump(iter))
    }

    fn advance(&mut self, delta: u128) -> Result<()> {
        dispatch!(self, g => g.advance(delta))
    }
}

impl From<Mt19937> for AnyBitGenerator {
    fn from(generator: Mt19937) -> Self {
        AnyBitGenerator::Mt19937(Box::new(generator))
    }
}

impl From<Dsfmt> for AnyBitGenerator {
    fn from(generator: Dsfmt) -> Self {
        AnyBitGenerator::Dsfmt(Box::new(generator))
    }
}

macro_rules! impl_from {
    ($($variant:ident),*) => {
        $(
            impl From<$variant> for AnyBitGenerator {
                fn from(generator: $variant) -> Self {
                    AnyBitGenerator::$variant(generator)
                }
            }
        )*
    };
}

impl_from!(Pcg64, Philox, Threefry, Xoroshiro128, Xorshift1024, SplitMix64);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::RandomError;

    #[test]
    fn test_kind_matches_request() {
        let seed = SeedSequence::from(1_u64);
        for kind in BitGeneratorKind::ALL {
            assert_eq!(AnyBitGenerator::from_seed(kind, &seed).kind(), kind);
        }
    }

    #[test]
    fn test_wrapper_matches_concrete_generator() {
        let mut concrete = Pcg64::seed_from_u64(77);
        let mut wrapped = AnyBitGenerator::from(concrete.clone());
        for _ in 0..10 {
            assert_eq!(wrapped.next_u64(), concrete.next_u64());
        }
        assert_eq!(wrapped.next_double(), concrete.next_double());
    }

    #[test]
    fn test_snapshot_from_other_kind_rejected() {
        let seed = SeedSequence::from(1_u64);
        let philox = AnyBitGenerator::from_seed(BitGeneratorKind::Philox, &seed);
        let mut threefry = AnyBitGenerator::from_seed(BitGeneratorKind::Threefry, &seed);
        let before = threefry.state();
        assert!(matches!(
            threefry.set_state(&philox.state()),
            Err(RandomError::SerializationMismatch { .. })
        ));
        assert_eq!(threefry.state(), before);
    }

    #[test]
    fn test_reseed_keeps_kind() {
        let kind = BitGeneratorKind::Dsfmt;
        let mut rng = AnyBitGenerator::from_seed(kind, &SeedSequence::from(1_u64));
        rng.reseed(&SeedSequence::from(2_u64));
        assert_eq!(rng.kind(), kind);
        let mut fresh = AnyBitGenerator::from_seed(kind, &SeedSequence::from(2_u64));
        assert_eq!(rng.next_u64(), fresh.next_u64());
    }
}
