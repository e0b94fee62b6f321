//! Shared machinery for counter-based generators (Philox, Threefry).
//!
//! Output block `i` is `f(counter_i, key)` for a keyed bijection `f`. The
//! 256-bit counter is incremented before each block is produced, and the
//! four output words are served in order from a buffer. Skipping ahead is
//! plain counter arithmetic.

use super::HalfWordCache;
use crate::types::{BitGeneratorState, Result, StateAux};

/// Words per output block.
pub(crate) const BLOCK_WORDS: usize = 4;

pub(crate) type Counter = [u64; BLOCK_WORDS];

/// Adds a 128-bit value at word `offset` of the counter, carrying upwards.
#[inline]
fn add_at(ctr: &mut Counter, offset: usize, value: u128) {
    let mut carry = 0u128;
    let mut addend = value;
    for word in ctr.iter_mut().skip(offset) {
        let sum = u128::from(*word) + (addend & 0xffff_ffff_ffff_ffff) + carry;
        *word = sum as u64;
        carry = sum >> 64;
        addend >>= 64;
    }
}

/// Counter, buffered block and half-word cache of a counter-based generator.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct CounterBlock {
    ctr: Counter,
    buffer: [u64; BLOCK_WORDS],
    buffer_pos: usize,
    cache: HalfWordCache,
}

impl CounterBlock {
    /// Starts at `ctr` with an empty buffer.
    pub(crate) fn new(ctr: Counter) -> Self {
        Self {
            ctr,
            buffer: [0; BLOCK_WORDS],
            buffer_pos: BLOCK_WORDS,
            cache: HalfWordCache::default(),
        }
    }

    pub(crate) fn counter(&self) -> Counter {
        self.ctr
    }

    #[inline]
    pub(crate) fn next_u64<F>(&mut self, block: F) -> u64
    where
        F: FnOnce(&Counter) -> [u64; BLOCK_WORDS],
    {
        if self.buffer_pos < BLOCK_WORDS {
            let word = self.buffer[self.buffer_pos];
            self.buffer_pos += 1;
            return word;
        }
        add_at(&mut self.ctr, 0, 1);
        self.buffer = block(&self.ctr);
        self.buffer_pos = 1;
        self.buffer[0]
    }

    #[inline]
    pub(crate) fn next_u32<F>(&mut self, block: F) -> u32
    where
        F: FnOnce(&Counter) -> [u64; BLOCK_WORDS],
    {
        if let Some(half) = self.cache.take() {
            return half;
        }
        let word = self.next_u64(block);
        self.cache.split(word)
    }

    /// Skips `delta` blocks and drops any buffered output.
    pub(crate) fn advance(&mut self, delta: u128) {
        add_at(&mut self.ctr, 0, delta);
        self.reset_buffer();
    }

    /// Skips `iter * 2^128` blocks and drops any buffered output.
    pub(crate) fn jump(&mut self, iter: u64) {
        add_at(&mut self.ctr, 2, u128::from(iter));
        self.reset_buffer();
    }

    fn reset_buffer(&mut self) {
        self.buffer = [0; BLOCK_WORDS];
        self.buffer_pos = BLOCK_WORDS;
        self.cache.clear();
    }

    /// Counter words followed by `key`, with the buffer in `aux`.
    pub(crate) fn snapshot_words(&self, key: &[u64]) -> (Vec<u64>, StateAux) {
        let mut words = self.ctr.to_vec();
        words.extend_from_slice(key);
        let aux = StateAux {
            index: self.buffer_pos,
            buffer: self.buffer.to_vec(),
            ..self.cache.to_aux()
        };
        (words, aux)
    }

    /// Reads the counter and buffer back; the key follows the counter in
    /// `state.words` and is returned separately.
    pub(crate) fn restore(state: &BitGeneratorState) -> Result<(Self, Vec<u64>)> {
        let buffer_pos = state.expect_index(BLOCK_WORDS)?;
        let buffered = state.expect_buffer(BLOCK_WORDS)?;
        let mut ctr = [0u64; BLOCK_WORDS];
        ctr.copy_from_slice(&state.words[..BLOCK_WORDS]);
        let mut buffer = [0u64; BLOCK_WORDS];
        buffer.copy_from_slice(buffered);
        let block = Self {
            ctr,
            buffer,
            buffer_pos,
            cache: HalfWordCache::from_aux(&state.aux),
        };
        Ok((block, state.words[BLOCK_WORDS..].to_vec()))
    }
}
