//! Mersenne Twister MT19937.
//!
//! The classic 32-bit generator of Matsumoto and Nishimura (1998) with
//! period 2^19937 - 1. Seeding follows the reference `init_genrand` for
//! integer seeds that fit in 32 bits and `init_by_array` for everything
//! else, so outputs match the reference implementation word for word.
//!
//! # Jump
//!
//! One jump skips 2^128 32-bit outputs. The jump polynomial
//! `x^(2^128) mod P(x)` is precomputed.

use super::mt19937_jump::MT19937_JUMP_POLY;
use super::polynomial::{apply_polynomial, LinearRecurrence};
use crate::seed::SeedSequence;
use crate::traits::{BitGenerator, SeedableBitGenerator, DOUBLE_UNIT};
use crate::types::{BitGeneratorKind, BitGeneratorState, Result, StateAux};

/// Number of 32-bit words in the state.
pub const MT19937_N: usize = 624;
const M: usize = 397;
const MATRIX_A: u32 = 0x9908_b0df;
const UPPER_MASK: u32 = 0x8000_0000;
const LOWER_MASK: u32 = 0x7fff_ffff;

/// MT19937 bit generator.
///
/// State snapshot: `words` holds the 624 key words, `aux.index` the
/// position (624 means the next draw regenerates the block).
///
/// # Examples
///
/// ```
/// use randgen_core::generators::Mt19937;
/// use randgen_core::traits::{BitGenerator, SeedableBitGenerator};
///
/// // Reference implementation default seed.
/// let mut rng = Mt19937::seed_from_u64(5489);
/// assert_eq!(rng.next_u32(), 3499211612);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Mt19937 {
    key: [u32; MT19937_N],
    pos: usize,
}

impl Mt19937 {
    /// Reference `init_genrand` seeding.
    pub fn init_genrand(seed: u32) -> Self {
        let mut key = [0u32; MT19937_N];
        key[0] = seed;
        for i in 1..MT19937_N {
            key[i] = 1_812_433_253_u32
                .wrapping_mul(key[i - 1] ^ (key[i - 1] >> 30))
                .wrapping_add(i as u32);
        }
        Self {
            key,
            pos: MT19937_N,
        }
    }

    /// Reference `init_by_array` seeding.
    ///
    /// An empty slice is treated as `[0]`.
    pub fn init_by_array(init_key: &[u32]) -> Self {
        let init_key: &[u32] = if init_key.is_empty() { &[0] } else { init_key };
        let mut rng = Self::init_genrand(19_650_218);
        let mt = &mut rng.key;
        let mut i = 1usize;
        let mut j = 0usize;
        for _ in 0..MT19937_N.max(init_key.len()) {
            mt[i] = (mt[i] ^ (mt[i - 1] ^ (mt[i - 1] >> 30)).wrapping_mul(1_664_525))
                .wrapping_add(init_key[j])
                .wrapping_add(j as u32);
            i += 1;
            j += 1;
            if i >= MT19937_N {
                mt[0] = mt[MT19937_N - 1];
                i = 1;
            }
            if j >= init_key.len() {
                j = 0;
            }
        }
        for _ in 0..MT19937_N - 1 {
            mt[i] = (mt[i] ^ (mt[i - 1] ^ (mt[i - 1] >> 30)).wrapping_mul(1_566_083_941))
                .wrapping_sub(i as u32);
            i += 1;
            if i >= MT19937_N {
                mt[0] = mt[MT19937_N - 1];
                i = 1;
            }
        }
        // Guarantees a non-zero state.
        mt[0] = 0x8000_0000;
        rng.pos = MT19937_N;
        rng
    }

    /// Regenerates the whole block of 624 words.
    fn twist(&mut self) {
        let mt = &mut self.key;
        for i in 0..MT19937_N {
            let y = (mt[i] & UPPER_MASK) | (mt[(i + 1) % MT19937_N] & LOWER_MASK);
            let mag = if y & 1 == 1 { MATRIX_A } else { 0 };
            mt[i] = mt[(i + M) % MT19937_N] ^ (y >> 1) ^ mag;
        }
        self.pos = 0;
    }

    #[inline]
    fn genrand_u32(&mut self) -> u32 {
        if self.pos >= MT19937_N {
            self.twist();
        }
        let mut y = self.key[self.pos];
        self.pos += 1;
        y ^= y >> 11;
        y ^= (y << 7) & 0x9d2c_5680;
        y ^= (y << 15) & 0xefc6_0000;
        y ^ (y >> 18)
    }

    /// Applies `poly(J)` to the key, keeping the position.
    pub(crate) fn jump_by_polynomial(&mut self, poly: &[u64]) {
        // The key must hold recurrence output, not raw seeding words.
        if self.pos >= MT19937_N {
            self.twist();
        }
        let window = KeyWindow {
            key: self.key,
            start: 0,
        };
        let jumped = apply_polynomial(&window, poly);
        self.key = jumped.linearised();
    }
}

impl BitGenerator for Mt19937 {
    fn kind(&self) -> BitGeneratorKind {
        BitGeneratorKind::Mt19937
    }

    /// Concatenates two 32-bit outputs, the first in the high half.
    #[inline]
    fn next_u64(&mut self) -> u64 {
        let hi = u64::from(self.genrand_u32());
        let lo = u64::from(self.genrand_u32());
        (hi << 32) | lo
    }

    #[inline]
    fn next_u32(&mut self) -> u32 {
        self.genrand_u32()
    }

    /// Reference `genrand_res53`: 27 + 26 bits from two outputs.
    #[inline]
    fn next_double(&mut self) -> f64 {
        let a = f64::from(self.genrand_u32() >> 5);
        let b = f64::from(self.genrand_u32() >> 6);
        (a * 67_108_864.0 + b) * DOUBLE_UNIT
    }

    #[inline]
    fn next_raw(&mut self) -> u64 {
        u64::from(self.genrand_u32())
    }

    fn state(&self) -> BitGeneratorState {
        BitGeneratorState::new(self.kind(), self.key.iter().map(|&w| u64::from(w)).collect())
            .with_aux(StateAux {
                index: self.pos,
                ..StateAux::default()
            })
    }

    fn set_state(&mut self, state: &BitGeneratorState) -> Result<()> {
        state.expect_layout(self.kind(), MT19937_N)?;
        state.expect_nonzero()?;
        let pos = state.expect_index(MT19937_N)?;
        let words = state.words_u32()?;
        self.key.copy_from_slice(&words);
        self.pos = pos;
        tracing::debug!(kind = %self.kind(), pos, "state restored");
        Ok(())
    }

    fn jump(&mut self, iter: u64) -> Result<()> {
        for _ in 0..iter {
            self.jump_by_polynomial(&MT19937_JUMP_POLY);
        }
        tracing::debug!(kind = %self.kind(), iter, "jumped");
        Ok(())
    }
}

impl SeedableBitGenerator for Mt19937 {
    fn from_seed_sequence(seed: &SeedSequence) -> Self {
        match seed.as_u64().and_then(|value| u32::try_from(value).ok()) {
            Some(value) => Self::init_genrand(value),
            None => Self::init_by_array(&seed.words32()),
        }
    }
}

/// The key viewed as a circular window of consecutive recurrence words.
#[derive(Clone)]
struct KeyWindow {
    key: [u32; MT19937_N],
    start: usize,
}

impl KeyWindow {
    fn linearised(&self) -> [u32; MT19937_N] {
        let mut out = self.key;
        out.rotate_left(self.start);
        out
    }
}

impl LinearRecurrence for KeyWindow {
    fn zeroed(&self) -> Self {
        KeyWindow {
            key: [0; MT19937_N],
            start: 0,
        }
    }

    #[inline]
    fn step(&mut self) {
        let i = self.start;
        let k = &mut self.key;
        let y = (k[i] & UPPER_MASK) | (k[(i + 1) % MT19937_N] & LOWER_MASK);
        let mag = if y & 1 == 1 { MATRIX_A } else { 0 };
        k[i] = k[(i + M) % MT19937_N] ^ (y >> 1) ^ mag;
        self.start = (i + 1) % MT19937_N;
    }

    fn accumulate(&mut self, other: &Self) {
        let (head, tail) = self.key.split_at_mut(self.start);
        let dst = tail.iter_mut().chain(head.iter_mut());
        let src = other.key[other.start..]
            .iter()
            .chain(other.key[..other.start].iter());
        for (d, s) in dst.zip(src) {
            *d ^= *s;
        }
    }
}
