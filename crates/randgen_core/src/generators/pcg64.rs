//! PCG64: permuted congruential generator, XSL-RR 128/64 output.
//!
//! O'Neill (2014). A 128-bit LCG with an odd increment selecting one of
//! 2^127 streams; the output function xors the state halves and applies a
//! rotation taken from the top six bits. Each draw steps the state first
//! and then permutes it.
//!
//! `advance(delta)` uses the O(log delta) LCG jump-ahead of Brown (1994).
//! `jump(iter)` advances by `iter * 0x9E3779B97F4A7C15F39CC0605CEDC835`
//! (about 0.618 of 2^128) steps; the multiplier is odd, so distinct jump
//! counts below 2^128 never land on the same position.

use super::HalfWordCache;
use crate::seed::SeedSequence;
use crate::traits::{BitGenerator, SeedableBitGenerator};
use crate::types::{BitGeneratorKind, BitGeneratorState, RandomError, Result};

const PCG_MULTIPLIER: u128 = 0x2360_ED05_1FC6_5DA4_4385_DF64_9FCC_F645;

/// Steps skipped by one jump.
pub const PCG64_JUMP_DELTA: u128 = 0x9E37_79B9_7F4A_7C15_F39C_C060_5CED_C835;

/// State after `delta` steps of `x -> x * mult + plus`.
fn lcg_advance(state: u128, mut delta: u128, mult: u128, plus: u128) -> u128 {
    let mut acc_mult: u128 = 1;
    let mut acc_plus: u128 = 0;
    let mut cur_mult = mult;
    let mut cur_plus = plus;
    while delta > 0 {
        if delta & 1 == 1 {
            acc_mult = acc_mult.wrapping_mul(cur_mult);
            acc_plus = acc_plus.wrapping_mul(cur_mult).wrapping_add(cur_plus);
        }
        cur_plus = cur_mult.wrapping_add(1).wrapping_mul(cur_plus);
        cur_mult = cur_mult.wrapping_mul(cur_mult);
        delta >>= 1;
    }
    acc_mult.wrapping_mul(state).wrapping_add(acc_plus)
}

/// PCG64 bit generator.
///
/// State snapshot: `words = [state_lo, state_hi, inc_lo, inc_hi]`, half-word
/// cache in `aux`. The increment must be odd.
///
/// # Examples
///
/// ```
/// use randgen_core::generators::Pcg64;
/// use randgen_core::traits::{BitGenerator, SeedableBitGenerator};
///
/// let mut a = Pcg64::new(42, 54);
/// let mut b = a.clone();
/// for _ in 0..1000 {
///     a.next_u64();
/// }
/// b.advance(1000).unwrap();
/// assert_eq!(a.next_u64(), b.next_u64());
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Pcg64 {
    state: u128,
    inc: u128,
    cache: HalfWordCache,
}

impl Pcg64 {
    /// Reference `pcg64_srandom(initstate, initseq)` seeding.
    pub fn new(initstate: u128, initseq: u128) -> Self {
        let mut rng = Self {
            state: 0,
            inc: (initseq << 1) | 1,
            cache: HalfWordCache::default(),
        };
        rng.step();
        rng.state = rng.state.wrapping_add(initstate);
        rng.step();
        rng
    }

    #[inline]
    fn step(&mut self) {
        self.state = self
            .state
            .wrapping_mul(PCG_MULTIPLIER)
            .wrapping_add(self.inc);
    }

    #[inline]
    fn output(state: u128) -> u64 {
        let rot = (state >> 122) as u32;
        (((state >> 64) as u64) ^ (state as u64)).rotate_right(rot)
    }
}

impl BitGenerator for Pcg64 {
    fn kind(&self) -> BitGeneratorKind {
        BitGeneratorKind::Pcg64
    }

    #[inline]
    fn next_u64(&mut self) -> u64 {
        self.step();
        Self::output(self.state)
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
        let words = vec![
            self.state as u64,
            (self.state >> 64) as u64,
            self.inc as u64,
            (self.inc >> 64) as u64,
        ];
        BitGeneratorState::new(self.kind(), words).with_aux(self.cache.to_aux())
    }

    fn set_state(&mut self, state: &BitGeneratorState) -> Result<()> {
        state.expect_layout(self.kind(), 4)?;
        let w = &state.words;
        let inc = u128::from(w[2]) | (u128::from(w[3]) << 64);
        if inc & 1 == 0 {
            return Err(RandomError::mismatch(self.kind(), "increment must be odd"));
        }
        self.state = u128::from(w[0]) | (u128::from(w[1]) << 64);
        self.inc = inc;
        self.cache = HalfWordCache::from_aux(&state.aux);
        tracing::debug!(kind = %self.kind(), "state restored");
        Ok(())
    }

    fn jump(&mut self, iter: u64) -> Result<()> {
        self.advance(PCG64_JUMP_DELTA.wrapping_mul(u128::from(iter)))?;
        tracing::debug!(kind = %self.kind(), iter, "jumped");
        Ok(())
    }

    fn advance(&mut self, delta: u128) -> Result<()> {
        self.state = lcg_advance(self.state, delta, PCG_MULTIPLIER, self.inc);
        self.cache.clear();
        Ok(())
    }
}

impl SeedableBitGenerator for Pcg64 {
    /// State and stream selector from four expanded words.
    fn from_seed_sequence(seed: &SeedSequence) -> Self {
        let w = seed.generate_state(4);
        let initstate = u128::from(w[0]) | (u128::from(w[1]) << 64);
        let initseq = u128::from(w[2]) | (u128::from(w[3]) << 64);
        Self::new(initstate, initseq)
    }
}
