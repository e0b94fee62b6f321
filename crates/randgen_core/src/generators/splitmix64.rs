//! SplitMix64.
//!
//! A 64-bit Weyl sequence passed through a bijective finaliser. It is the
//! seed expander for the other variants and is offered as a bit generator
//! in its own right. It has no jump.

use super::HalfWordCache;
use crate::seed::SeedSequence;
use crate::traits::{BitGenerator, SeedableBitGenerator};
use crate::types::{BitGeneratorKind, BitGeneratorState, Result};

const GOLDEN_GAMMA: u64 = 0x9e37_79b9_7f4a_7c15;

/// Advances `state` and returns the next SplitMix64 output.
#[inline]
pub(crate) fn splitmix64_next(state: &mut u64) -> u64 {
    *state = state.wrapping_add(GOLDEN_GAMMA);
    let mut z = *state;
    z = (z ^ (z >> 30)).wrapping_mul(0xbf58_476d_1ce4_e5b9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94d0_49bb_1331_11eb);
    z ^ (z >> 31)
}

/// SplitMix64 bit generator.
///
/// State snapshot: `words = [state]`, half-word cache in `aux`.
///
/// # Examples
///
/// ```
/// use randgen_core::generators::SplitMix64;
/// use randgen_core::traits::{BitGenerator, SeedableBitGenerator};
///
/// let mut rng = SplitMix64::seed_from_u64(1234567);
/// assert_eq!(rng.next_u64(), 6457827717110365317);
/// assert!(rng.jump(1).is_err());
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SplitMix64 {
    state: u64,
    cache: HalfWordCache,
}

impl SplitMix64 {
    /// Creates a generator with the given raw state.
    pub fn new(state: u64) -> Self {
        Self {
            state,
            cache: HalfWordCache::default(),
        }
    }
}

impl BitGenerator for SplitMix64 {
    fn kind(&self) -> BitGeneratorKind {
        BitGeneratorKind::SplitMix64
    }

    #[inline]
    fn next_u64(&mut self) -> u64 {
        splitmix64_next(&mut self.state)
    }

    #[inline]
    fn next_u32(&mut self) -> u32 {
        if let Some(half) = self.cache.take() {
            return half;
        }
        let word = self.next_u64();
        self.cache.split(word)
    }

    fn state(&self) -> BitGeneratorState {
        BitGeneratorState::new(self.kind(), vec![self.state]).with_aux(self.cache.to_aux())
    }

    fn set_state(&mut self, state: &BitGeneratorState) -> Result<()> {
        state.expect_layout(self.kind(), 1)?;
        self.state = state.words[0];
        self.cache = HalfWordCache::from_aux(&state.aux);
        Ok(())
    }
}

impl SeedableBitGenerator for SplitMix64 {
    fn from_seed_sequence(seed: &SeedSequence) -> Self {
        let state = match seed.as_u64() {
            Some(value) => value,
            None => seed.generate_state(1)[0],
        };
        Self::new(state)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::RandomError;

    #[test]
    fn test_reference_sequence() {
        let mut rng = SplitMix64::seed_from_u64(1234567);
        let expected = [
            6457827717110365317_u64,
            3203168211198807973,
            9817491932198370423,
        ];
        for value in expected {
            assert_eq!(rng.next_u64(), value);
        }
    }

    #[test]
    fn test_u32_uses_both_halves() {
        let mut a = SplitMix64::seed_from_u64(3);
        let mut b = a.clone();
        let word = b.next_u64();
        assert_eq!(a.next_u32(), word as u32);
        assert_eq!(a.next_u32(), (word >> 32) as u32);
    }

    #[test]
    fn test_no_jump_or_advance() {
        let mut rng = SplitMix64::seed_from_u64(3);
        let before = rng.state();
        assert!(matches!(
            rng.jump(1),
            Err(RandomError::UnsupportedOperation { operation: "jump", .. })
        ));
        assert!(rng.advance(10).is_err());
        assert_eq!(rng.state(), before);
    }
}
