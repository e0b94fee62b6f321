//! Threefry4x64-20 counter-based generator.
//!
//! The Threefish-256 block cipher reduced to 20 rounds and without the
//! tweak, as specified by Random123. 256-bit counter, 256-bit key.
//! Buffering, jump and advance behave exactly as for
//! [`Philox`](super::Philox).

use super::counter::{Counter, CounterBlock, BLOCK_WORDS};
use crate::seed::SeedSequence;
use crate::traits::{BitGenerator, SeedableBitGenerator};
use crate::types::{BitGeneratorKind, BitGeneratorState, Result};

const SKEIN_PARITY: u64 = 0x1BD1_1BDA_A9FC_1A22;
const ROUNDS: usize = 20;
const ROTATIONS: [(u32, u32); 8] = [
    (14, 16),
    (52, 57),
    (23, 40),
    (5, 37),
    (25, 33),
    (46, 12),
    (58, 22),
    (32, 32),
];

/// The Threefry4x64-20 bijection.
#[inline]
pub fn threefry4x64_20(ctr: &Counter, key: &[u64; 4]) -> [u64; BLOCK_WORDS] {
    let ks = [
        key[0],
        key[1],
        key[2],
        key[3],
        SKEIN_PARITY ^ key[0] ^ key[1] ^ key[2] ^ key[3],
    ];
    let mut x = [
        ctr[0].wrapping_add(ks[0]),
        ctr[1].wrapping_add(ks[1]),
        ctr[2].wrapping_add(ks[2]),
        ctr[3].wrapping_add(ks[3]),
    ];
    for round in 0..ROUNDS {
        let (a, b) = ROTATIONS[round % 8];
        if round % 2 == 0 {
            x[0] = x[0].wrapping_add(x[1]);
            x[1] = x[1].rotate_left(a) ^ x[0];
            x[2] = x[2].wrapping_add(x[3]);
            x[3] = x[3].rotate_left(b) ^ x[2];
        } else {
            x[0] = x[0].wrapping_add(x[3]);
            x[3] = x[3].rotate_left(a) ^ x[0];
            x[2] = x[2].wrapping_add(x[1]);
            x[1] = x[1].rotate_left(b) ^ x[2];
        }
        // Key injection every four rounds.
        if round % 4 == 3 {
            let s = (round + 1) / 4;
            for (i, word) in x.iter_mut().enumerate() {
                *word = word.wrapping_add(ks[(s + i) % 5]);
            }
            x[3] = x[3].wrapping_add(s as u64);
        }
    }
    x
}

/// Threefry4x64-20 bit generator.
///
/// State snapshot: `words = [ctr0..ctr3, key0..key3]`; buffer, index and
/// half-word cache in `aux` as for Philox.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Threefry {
    key: [u64; 4],
    block: CounterBlock,
}

impl Threefry {
    /// Creates a generator from an explicit key and counter.
    ///
    /// The first block produced uses `counter + 1`.
    pub fn from_key_counter(key: [u64; 4], counter: Counter) -> Self {
        Self {
            key,
            block: CounterBlock::new(counter),
        }
    }

    /// Returns the key.
    pub fn key(&self) -> [u64; 4] {
        self.key
    }

    /// Returns the counter of the most recent block.
    pub fn counter(&self) -> Counter {
        self.block.counter()
    }
}

impl BitGenerator for Threefry {
    fn kind(&self) -> BitGeneratorKind {
        BitGeneratorKind::Threefry
    }

    #[inline]
    fn next_u64(&mut self) -> u64 {
        let key = self.key;
        self.block.next_u64(|ctr| threefry4x64_20(ctr, &key))
    }

    #[inline]
    fn next_u32(&mut self) -> u32 {
        let key = self.key;
        self.block.next_u32(|ctr| threefry4x64_20(ctr, &key))
    }

    fn state(&self) -> BitGeneratorState {
        let (words, aux) = self.block.snapshot_words(&self.key);
        BitGeneratorState::new(self.kind(), words).with_aux(aux)
    }

    fn set_state(&mut self, state: &BitGeneratorState) -> Result<()> {
        state.expect_layout(self.kind(), 2 * BLOCK_WORDS)?;
        let (block, key) = CounterBlock::restore(state)?;
        self.block = block;
        self.key.copy_from_slice(&key);
        tracing::debug!(kind = %self.kind(), "state restored");
        Ok(())
    }

    fn jump(&mut self, iter: u64) -> Result<()> {
        self.block.jump(iter);
        tracing::debug!(kind = %self.kind(), iter, "jumped");
        Ok(())
    }

    fn advance(&mut self, delta: u128) -> Result<()> {
        self.block.advance(delta);
        tracing::debug!(kind = %self.kind(), delta = %delta, "advanced");
        Ok(())
    }
}

impl SeedableBitGenerator for Threefry {
    fn from_seed_sequence(seed: &SeedSequence) -> Self {
        let words = seed.generate_state(4);
        Self::from_key_counter([words[0], words[1], words[2], words[3]], [0; BLOCK_WORDS])
    }
}
