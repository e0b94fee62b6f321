//! xoroshiro128+ (Blackman and Vigna, 2016).
//!
//! Two 64-bit words, rotation/shift parameters (55, 14, 36), output the
//! sum of the words. Period 2^128 - 1. One jump skips 2^64 outputs using
//! the published jump polynomial.

use super::polynomial::{apply_polynomial, LinearRecurrence};
use super::HalfWordCache;
use crate::seed::SeedSequence;
use crate::traits::{BitGenerator, SeedableBitGenerator};
use crate::types::{BitGeneratorKind, BitGeneratorState, Result};

/// `x^(2^64) mod P(x)` for the xoroshiro128 recurrence.
const JUMP_POLY: [u64; 2] = [0xbeac_0467_eba5_facb, 0xd86b_048b_86aa_9922];

/// xoroshiro128+ bit generator.
///
/// State snapshot: `words = [s0, s1]` (never both zero), half-word cache in
/// `aux`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Xoroshiro128 {
    s: [u64; 2],
    cache: HalfWordCache,
}

impl Xoroshiro128 {
    /// Creates a generator from raw state words.
    ///
    /// An all-zero state is replaced by the SplitMix64 expansion of zero.
    pub fn from_words(s: [u64; 2]) -> Self {
        let s = if s == [0, 0] {
            let w = SeedSequence::from_u64(0).generate_state(2);
            [w[0], w[1]]
        } else {
            s
        };
        Self {
            s,
            cache: HalfWordCache::default(),
        }
    }

    #[inline]
    fn step_words(s: &mut [u64; 2]) {
        let s0 = s[0];
        let s1 = s[1] ^ s0;
        s[0] = s0.rotate_left(55) ^ s1 ^ (s1 << 14);
        s[1] = s1.rotate_left(36);
    }
}

impl BitGenerator for Xoroshiro128 {
    fn kind(&self) -> BitGeneratorKind {
        BitGeneratorKind::Xoroshiro128
    }

    #[inline]
    fn next_u64(&mut self) -> u64 {
        let result = self.s[0].wrapping_add(self.s[1]);
        Self::step_words(&mut self.s);
        result
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
        BitGeneratorState::new(self.kind(), self.s.to_vec()).with_aux(self.cache.to_aux())
    }

    fn set_state(&mut self, state: &BitGeneratorState) -> Result<()> {
        state.expect_layout(self.kind(), 2)?;
        state.expect_nonzero()?;
        self.s = [state.words[0], state.words[1]];
        self.cache = HalfWordCache::from_aux(&state.aux);
        tracing::debug!(kind = %self.kind(), "state restored");
        Ok(())
    }

    fn jump(&mut self, iter: u64) -> Result<()> {
        for _ in 0..iter {
            self.s = apply_polynomial(&Words(self.s), &JUMP_POLY).0;
        }
        self.cache.clear();
        tracing::debug!(kind = %self.kind(), iter, "jumped");
        Ok(())
    }
}

impl SeedableBitGenerator for Xoroshiro128 {
    fn from_seed_sequence(seed: &SeedSequence) -> Self {
        let w = seed.generate_state(2);
        Self::from_words([w[0], w[1]])
    }
}

#[derive(Clone)]
struct Words([u64; 2]);

impl LinearRecurrence for Words {
    fn zeroed(&self) -> Self {
        Words([0; 2])
    }

    #[inline]
    fn step(&mut self) {
        Xoroshiro128::step_words(&mut self.0);
    }

    fn accumulate(&mut self, other: &Self) {
        self.0[0] ^= other.0[0];
        self.0[1] ^= other.0[1];
    }
}
