//! Philox4x64-10 counter-based generator.
//!
//! Salmon et al., "Parallel random numbers: as easy as 1, 2, 3" (SC11).
//! Ten rounds of a multiply-based Feistel network over a 256-bit counter
//! with a 128-bit key. Outputs match the Random123 reference vectors.
//!
//! One native step is one counter increment (four 64-bit outputs), so
//! `advance(d)` from an empty buffer equals drawing `4 * d` words.

use super::counter::{Counter, CounterBlock, BLOCK_WORDS};
use crate::seed::SeedSequence;
use crate::traits::{BitGenerator, SeedableBitGenerator};
use crate::types::{BitGeneratorKind, BitGeneratorState, Result};

const PHILOX_M0: u64 = 0xD2E7_470E_E14C_6C93;
const PHILOX_M1: u64 = 0xCA5A_8263_9512_1157;
const PHILOX_W0: u64 = 0x9E37_79B9_7F4A_7C15;
const PHILOX_W1: u64 = 0xBB67_AE85_84CA_A73B;
const ROUNDS: usize = 10;

#[inline(always)]
fn mulhilo(a: u64, b: u64) -> (u64, u64) {
    let product = u128::from(a) * u128::from(b);
    ((product >> 64) as u64, product as u64)
}

/// The Philox4x64-10 bijection.
#[inline]
pub fn philox4x64_10(ctr: &Counter, key: &[u64; 2]) -> [u64; BLOCK_WORDS] {
    let mut x = *ctr;
    let mut k = *key;
    for round in 0..ROUNDS {
        if round > 0 {
            k[0] = k[0].wrapping_add(PHILOX_W0);
            k[1] = k[1].wrapping_add(PHILOX_W1);
        }
        let (hi0, lo0) = mulhilo(PHILOX_M0, x[0]);
        let (hi1, lo1) = mulhilo(PHILOX_M1, x[2]);
        x = [hi1 ^ x[1] ^ k[0], lo1, hi0 ^ x[3] ^ k[1], lo0];
    }
    x
}

/// Philox4x64-10 bit generator.
///
/// State snapshot: `words = [ctr0..ctr3, key0, key1]`; `aux.buffer` holds
/// the current block and `aux.index` the next word within it (4 when
/// empty), plus the half-word cache.
///
/// # Examples
///
/// ```
/// use randgen_core::generators::Philox;
/// use randgen_core::traits::{BitGenerator, SeedableBitGenerator};
///
/// let mut a = Philox::seed_from_u64(5);
/// let mut b = a.clone();
/// for _ in 0..4 * 10 {
///     a.next_u64();
/// }
/// b.advance(10).unwrap();
/// assert_eq!(a.next_u64(), b.next_u64());
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Philox {
    key: [u64; 2],
    block: CounterBlock,
}

impl Philox {
    /// Creates a generator from an explicit key and counter.
    ///
    /// The first block produced uses `counter + 1`.
    pub fn from_key_counter(key: [u64; 2], counter: Counter) -> Self {
        Self {
            key,
            block: CounterBlock::new(counter),
        }
    }

    /// Returns the key.
    pub fn key(&self) -> [u64; 2] {
        self.key
    }

    /// Returns the counter of the most recent block.
    pub fn counter(&self) -> Counter {
        self.block.counter()
    }
}

impl BitGenerator for Philox {
    fn kind(&self) -> BitGeneratorKind {
        BitGeneratorKind::Philox
    }

    #[inline]
    fn next_u64(&mut self) -> u64 {
        let key = self.key;
        self.block.next_u64(|ctr| philox4x64_10(ctr, &key))
    }

    #[inline]
    fn next_u32(&mut self) -> u32 {
        let key = self.key;
        self.block.next_u32(|ctr| philox4x64_10(ctr, &key))
    }

    fn state(&self) -> BitGeneratorState {
        let (words, aux) = self.block.snapshot_words(&self.key);
        BitGeneratorState::new(self.kind(), words).with_aux(aux)
    }

    fn set_state(&mut self, state: &BitGeneratorState) -> Result<()> {
        state.expect_layout(self.kind(), BLOCK_WORDS + 2)?;
        let (block, key) = CounterBlock::restore(state)?;
        self.block = block;
        self.key = [key[0], key[1]];
        tracing::debug!(kind = %self.kind(), "state restored");
        Ok(())
    }

    /// Skips `iter * 2^128` blocks.
    fn jump(&mut self, iter: u64) -> Result<()> {
        self.block.jump(iter);
        tracing::debug!(kind = %self.kind(), iter, "jumped");
        Ok(())
    }

    /// Skips `delta` blocks, dropping buffered output.
    fn advance(&mut self, delta: u128) -> Result<()> {
        self.block.advance(delta);
        tracing::debug!(kind = %self.kind(), delta = %delta, "advanced");
        Ok(())
    }
}

impl SeedableBitGenerator for Philox {
    /// Key from the expanded seed, counter zero.
    fn from_seed_sequence(seed: &SeedSequence) -> Self {
        let words = seed.generate_state(2);
        Self::from_key_counter([words[0], words[1]], [0; BLOCK_WORDS])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PI_CTR: Counter = [
        0x243f_6a88_85a3_08d3,
        0x1319_8a2e_0370_7344,
        0xa409_3822_299f_31d0,
        0x082e_fa98_ec4e_6c89,
    ];

    // ========================================
    // Random123 known-answer vectors
    // ========================================

    #[test]
    fn test_kat_zero() {
        assert_eq!(
            philox4x64_10(&[0; 4], &[0; 2]),
            [
                0x1655_4d9e_ca36_314c,
                0xdb20_fe9d_672d_0fdc,
                0xd7e7_72ce_e186_176b,
                0x7e68_b68a_ec7b_a23b
            ]
        );
    }

    #[test]
    fn test_kat_ones() {
        assert_eq!(
            philox4x64_10(&[u64::MAX; 4], &[u64::MAX; 2]),
            [
                0x87b0_92c3_013f_e90b,
                0x438c_3c67_be8d_0224,
                0x9cc7_d7c6_9cd7_77b6,
                0xa09c_aebf_594f_0ba0
            ]
        );
    }

    #[test]
    fn test_kat_pi() {
        let key = [0x4528_21e6_38d0_1377, 0xbe54_66cf_34e9_0c6c];
        assert_eq!(
            philox4x64_10(&PI_CTR, &key),
            [
                0xa528_f454_03e6_1d95,
                0x38c7_2dbd_566e_9788,
                0xa5a1_610e_72fd_18b5,
                0x57bd_43b5_e52b_7fe6
            ]
        );
    }

    #[test]
    fn test_generator_serves_kat_block() {
        // Counter wraps from all-ones to zero before the first block.
        let mut rng = Philox::from_key_counter([0; 2], [u64::MAX; 4]);
        assert_eq!(rng.next_u64(), 0x1655_4d9e_ca36_314c);
        assert_eq!(rng.next_u64(), 0xdb20_fe9d_672d_0fdc);
    }

    // ========================================
    // Jump / advance exactness
    // ========================================

    #[test]
    fn test_advance_equals_drawing() {
        let mut drawn = Philox::seed_from_u64(99);
        let mut advanced = drawn.clone();
        for _ in 0..4 * 1000 {
            drawn.next_u64();
        }
        advanced.advance(1000).unwrap();
        assert_eq!(advanced.counter(), drawn.counter());
        for _ in 0..9 {
            assert_eq!(advanced.next_u64(), drawn.next_u64());
        }
    }

    #[test]
    fn test_jump_moves_counter_word_two() {
        let mut rng = Philox::seed_from_u64(1);
        rng.jump(2).unwrap();
        assert_eq!(rng.counter(), [0, 0, 2, 0]);

        let expected = philox4x64_10(&[1, 0, 2, 0], &rng.key());
        assert_eq!(rng.next_u64(), expected[0]);
    }

    #[test]
    fn test_jump_is_additive() {
        let rng = Philox::seed_from_u64(8);
        let mut twice = rng.jumped(1).unwrap().jumped(1).unwrap();
        let mut once = rng.jumped(2).unwrap();
        assert_eq!(twice.next_u64(), once.next_u64());
    }
}
