//! Serialisable bit generator state snapshots.
//!
//! A [`BitGeneratorState`] is a plain data record: the variant tag, the
//! variant's state words widened to `u64`, and a small auxiliary block for
//! buffered output and position indices. Every variant documents its own
//! layout next to its `state()` implementation.
//!
//! Snapshots are validated on restore; a snapshot that does not fit the
//! target variant is rejected with [`RandomError::SerializationMismatch`]
//! and leaves the target untouched.
//!
//! # Examples
//!
//! ```
//! use randgen_core::generators::Xoroshiro128;
//! use randgen_core::traits::{BitGenerator, SeedableBitGenerator};
//!
//! let mut rng = Xoroshiro128::seed_from_u64(7);
//! let snapshot = rng.state();
//! let first = rng.next_u64();
//!
//! rng.set_state(&snapshot).unwrap();
//! assert_eq!(rng.next_u64(), first);
//! ```

use serde::{Deserialize, Serialize};

use super::error::{RandomError, Result};
use super::kind::BitGeneratorKind;

/// Full state of one bit generator.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BitGeneratorState {
    /// Variant the state belongs to.
    pub kind: BitGeneratorKind,
    /// Variant state words, widened to 64 bits.
    pub words: Vec<u64>,
    /// Buffered output and position indices.
    #[serde(default)]
    pub aux: StateAux,
}

/// Auxiliary state shared by several variants.
///
/// Fields a variant does not use stay at their defaults.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StateAux {
    /// Position within the current output block.
    pub index: usize,
    /// Buffered output block (counter-based variants).
    pub buffer: Vec<u64>,
    /// Whether a 32-bit half word is cached.
    pub has_uint32: bool,
    /// The cached 32-bit half word.
    pub uinteger: u32,
}

impl BitGeneratorState {
    /// Creates a snapshot with default auxiliary state.
    pub fn new(kind: BitGeneratorKind, words: Vec<u64>) -> Self {
        Self {
            kind,
            words,
            aux: StateAux::default(),
        }
    }

    /// Replaces the auxiliary block.
    pub fn with_aux(mut self, aux: StateAux) -> Self {
        self.aux = aux;
        self
    }

    /// Checks the variant tag and the number of state words.
    pub(crate) fn expect_layout(&self, kind: BitGeneratorKind, n_words: usize) -> Result<()> {
        if self.kind != kind {
            return Err(RandomError::mismatch(
                kind,
                format!("snapshot was taken from {}", self.kind),
            ));
        }
        if self.words.len() != n_words {
            return Err(RandomError::mismatch(
                kind,
                format!("expected {} state words, got {}", n_words, self.words.len()),
            ));
        }
        Ok(())
    }

    /// Checks that `aux.index` lies in `0..=max`.
    pub(crate) fn expect_index(&self, max: usize) -> Result<usize> {
        if self.aux.index > max {
            return Err(RandomError::mismatch(
                self.kind,
                format!("index {} outside 0..={}", self.aux.index, max),
            ));
        }
        Ok(self.aux.index)
    }

    /// Checks the length of the buffered output block.
    pub(crate) fn expect_buffer(&self, len: usize) -> Result<&[u64]> {
        if self.aux.buffer.len() != len {
            return Err(RandomError::mismatch(
                self.kind,
                format!(
                    "expected {} buffered words, got {}",
                    len,
                    self.aux.buffer.len()
                ),
            ));
        }
        Ok(&self.aux.buffer)
    }

    /// Returns the state words narrowed to 32 bits, rejecting wider values.
    pub(crate) fn words_u32(&self) -> Result<Vec<u32>> {
        self.words
            .iter()
            .map(|&w| {
                u32::try_from(w).map_err(|_| {
                    RandomError::mismatch(self.kind, format!("word {:#x} exceeds 32 bits", w))
                })
            })
            .collect()
    }

    /// Fails if every state word is zero (invalid for shift registers).
    pub(crate) fn expect_nonzero(&self) -> Result<()> {
        if self.words.iter().all(|&w| w == 0) {
            return Err(RandomError::mismatch(self.kind, "all-zero state"));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layout_checks() {
        let state = BitGeneratorState::new(BitGeneratorKind::Xoroshiro128, vec![1, 2]);
        assert!(state.expect_layout(BitGeneratorKind::Xoroshiro128, 2).is_ok());
        assert!(matches!(
            state.expect_layout(BitGeneratorKind::Pcg64, 2),
            Err(RandomError::SerializationMismatch { .. })
        ));
        assert!(state.expect_layout(BitGeneratorKind::Xoroshiro128, 3).is_err());
    }

    #[test]
    fn test_index_and_buffer_checks() {
        let state = BitGeneratorState::new(BitGeneratorKind::Philox, vec![0; 6]).with_aux(
            StateAux {
                index: 5,
                buffer: vec![0; 4],
                ..StateAux::default()
            },
        );
        assert!(state.expect_index(4).is_err());
        assert!(state.expect_index(5).is_ok());
        assert!(state.expect_buffer(4).is_ok());
        assert!(state.expect_buffer(2).is_err());
    }

    #[test]
    fn test_words_u32_rejects_wide_words() {
        let state = BitGeneratorState::new(BitGeneratorKind::Mt19937, vec![1, 1 << 40]);
        assert!(state.words_u32().is_err());
    }

    #[test]
    fn test_missing_aux_deserialises_to_default() {
        let json = r#"{"kind":"splitmix64","words":[42]}"#;
        let state: BitGeneratorState = serde_json::from_str(json).unwrap();
        assert_eq!(state.aux, StateAux::default());
        assert_eq!(state.kind, BitGeneratorKind::SplitMix64);
    }
}
