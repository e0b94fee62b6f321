//! xorshift1024* φ (Vigna, 2014).
//!
//! Sixteen 64-bit words used as a circular buffer with index `p`; output
//! scrambled by multiplication with `0x9e3779b97f4a7c13`. Period
//! 2^1024 - 1. One jump skips 2^512 outputs using the published jump
//! polynomial.

use super::polynomial::{apply_polynomial, LinearRecurrence};
use super::HalfWordCache;
use crate::seed::SeedSequence;
use crate::traits::{BitGenerator, SeedableBitGenerator};
use crate::types::{BitGeneratorKind, BitGeneratorState, Result, StateAux};

const WORDS: usize = 16;
const MULTIPLIER: u64 = 0x9e37_79b9_7f4a_7c13;

/// `x^(2^512) mod P(x)` for the xorshift1024 recurrence.
#[rustfmt::skip]
const JUMP_POLY: [u64; WORDS] = [
    0x8424_2f96_eca9_c41d, 0xa3c6_5b87_76f9_6855, 0x5b34_a39f_070b_5837, 0x4489_affc_e4f3_1a1e,
    0x2ffe_eb0a_4831_6f40, 0xdc2d_9891_fe68_c022, 0x3659_132b_b12f_ea70, 0xaac1_7d8e_fa43_cab8,
    0xc4cb_8155_9098_9b13, 0x5ee9_7528_3d71_c93b, 0x6915_48c8_6c1b_d540, 0x7910_c41d_10a1_e6a5,
    0x0b5f_c645_63b3_e2a8, 0x047f_7684_e9fc_949d, 0xb991_81f2_d8f6_85ca, 0x2846_00e3_f30e_38c3,
];

/// xorshift1024* bit generator.
///
/// State snapshot: `words` holds the sixteen state words, `aux.index` the
/// buffer position `p` (0..16), plus the half-word cache.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Xorshift1024 {
    s: [u64; WORDS],
    p: usize,
    cache: HalfWordCache,
}

impl Xorshift1024 {
    /// Creates a generator from raw state words with `p = 0`.
    ///
    /// An all-zero state is replaced by the SplitMix64 expansion of zero.
    pub fn from_words(s: [u64; WORDS]) -> Self {
        let mut words = s;
        if words.iter().all(|&w| w == 0) {
            let expanded = SeedSequence::from_u64(0).generate_state(WORDS);
            words.copy_from_slice(&expanded);
        }
        Self {
            s: words,
            p: 0,
            cache: HalfWordCache::default(),
        }
    }

    #[inline]
    fn step_words(s: &mut [u64; WORDS], p: &mut usize) -> u64 {
        let s0 = s[*p];
        *p = (*p + 1) & (WORDS - 1);
        let mut s1 = s[*p];
        s1 ^= s1 << 31;
        s[*p] = s1 ^ s0 ^ (s1 >> 11) ^ (s0 >> 30);
        s[*p]
    }
}

impl BitGenerator for Xorshift1024 {
    fn kind(&self) -> BitGeneratorKind {
        BitGeneratorKind::Xorshift1024
    }

    #[inline]
    fn next_u64(&mut self) -> u64 {
        Self::step_words(&mut self.s, &mut self.p).wrapping_mul(MULTIPLIER)
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
        BitGeneratorState::new(self.kind(), self.s.to_vec()).with_aux(StateAux {
            index: self.p,
            ..self.cache.to_aux()
        })
    }

    fn set_state(&mut self, state: &BitGeneratorState) -> Result<()> {
        state.expect_layout(self.kind(), WORDS)?;
        state.expect_nonzero()?;
        let p = state.expect_index(WORDS - 1)?;
        self.s.copy_from_slice(&state.words);
        self.p = p;
        self.cache = HalfWordCache::from_aux(&state.aux);
        tracing::debug!(kind = %self.kind(), p, "state restored");
        Ok(())
    }

    fn jump(&mut self, iter: u64) -> Result<()> {
        for _ in 0..iter {
            let window = Ring {
                s: self.s,
                p: self.p,
            };
            let jumped = apply_polynomial(&window, &JUMP_POLY);
            self.s = jumped.s;
        }
        self.cache.clear();
        tracing::debug!(kind = %self.kind(), iter, "jumped");
        Ok(())
    }
}

impl SeedableBitGenerator for Xorshift1024 {
    fn from_seed_sequence(seed: &SeedSequence) -> Self {
        let expanded = seed.generate_state(WORDS);
        let mut s = [0u64; WORDS];
        s.copy_from_slice(&expanded);
        Self::from_words(s)
    }
}

/// The state words in logical order starting at `p`.
#[derive(Clone)]
struct Ring {
    s: [u64; WORDS],
    p: usize,
}

impl LinearRecurrence for Ring {
    /// The accumulator keeps the caller's `p`, so the jumped state is read
    /// back with the same position.
    fn zeroed(&self) -> Self {
        Ring {
            s: [0; WORDS],
            p: self.p,
        }
    }

    #[inline]
    fn step(&mut self) {
        Xorshift1024::step_words(&mut self.s, &mut self.p);
    }

    fn accumulate(&mut self, other: &Self) {
        for j in 0..WORDS {
            self.s[(j + self.p) & (WORDS - 1)] ^= other.s[(j + other.p) & (WORDS - 1)];
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generators::polynomial::monomial;

    fn logical(rng: &Xorshift1024) -> Vec<u64> {
        (0..WORDS).map(|j| rng.s[(j + rng.p) & (WORDS - 1)]).collect()
    }

    #[test]
    fn test_monomial_jump_equals_stepping() {
        let mut base = Xorshift1024::seed_from_u64(3);
        for _ in 0..5 {
            base.next_u64();
        }
        for k in [1_usize, 15, 16, 333, 1023] {
            let mut stepped = base.clone();
            for _ in 0..k {
                stepped.next_u64();
            }
            let ring = Ring {
                s: base.s,
                p: base.p,
            };
            let jumped = apply_polynomial(&ring, &monomial(k));
            let mut restored = base.clone();
            restored.s = jumped.s;
            assert_eq!(logical(&restored), logical(&stepped));
            // Same logical state gives the same future output.
            for _ in 0..40 {
                let a = Xorshift1024::step_words(&mut restored.s, &mut restored.p);
                let b = Xorshift1024::step_words(&mut stepped.s, &mut stepped.p);
                assert_eq!(a, b);
            }
        }
    }

    #[test]
    fn test_jump_keeps_position() {
        let mut rng = Xorshift1024::seed_from_u64(3);
        for _ in 0..7 {
            rng.next_u64();
        }
        let p = rng.p;
        rng.jump(1).unwrap();
        assert_eq!(rng.p, p);
    }

    #[test]
    fn test_set_state_rejects_bad_position() {
        let mut rng = Xorshift1024::seed_from_u64(3);
        let mut state = rng.state();
        state.aux.index = WORDS;
        assert!(rng.set_state(&state).is_err());
    }
}
