//! Seed material and the entropy boundary.
//!
//! A [`SeedSequence`] is the only input a bit generator needs at
//! construction: an integer, a sequence of 32-bit words, or raw bytes.
//! Variants with a native seeding routine (MT19937, dSFMT) consume the
//! material directly; every other variant draws its initial words from
//! [`SeedSequence::generate_state`], a deterministic SplitMix64 expansion.
//!
//! Operating system entropy is treated as an opaque byte source behind
//! the [`EntropySource`] trait. Any `rand::RngCore` is an entropy source,
//! and [`SeedSequence::from_entropy`] uses `rand::rngs::OsRng`.
//!
//! # Examples
//!
//! ```
//! use randgen_core::seed::SeedSequence;
//!
//! let seed = SeedSequence::from(42_u64);
//! assert_eq!(seed.generate_state(2), seed.generate_state(2));
//!
//! let words = SeedSequence::from_words(vec![1, 2, 3]).unwrap();
//! assert_eq!(words.words32(), vec![1, 2, 3]);
//! ```

mod entropy;

pub use entropy::EntropySource;

use crate::generators::splitmix64::splitmix64_next;
use crate::types::{RandomError, Result};

/// Number of 32-bit words drawn from the entropy source by
/// [`SeedSequence::from_entropy`].
pub const ENTROPY_WORDS: usize = 4;

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
enum SeedMaterial {
    Integer(u64),
    Words(Vec<u32>),
    Bytes(Vec<u8>),
}

/// Seed material for a bit generator.
///
/// Word and byte sequences are never empty. The sequence is consumed at
/// seeding time and not retained by the generator.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct SeedSequence {
    material: SeedMaterial,
}

impl SeedSequence {
    /// Creates seed material from a 64-bit integer.
    #[inline]
    pub fn from_u64(seed: u64) -> Self {
        Self {
            material: SeedMaterial::Integer(seed),
        }
    }

    /// Creates seed material from 32-bit words.
    ///
    /// # Errors
    ///
    /// Returns [`RandomError::InvalidParameter`] if `words` is empty.
    pub fn from_words(words: impl Into<Vec<u32>>) -> Result<Self> {
        let words = words.into();
        if words.is_empty() {
            return Err(RandomError::invalid_parameter(
                "seed",
                "word sequence must not be empty",
            ));
        }
        Ok(Self {
            material: SeedMaterial::Words(words),
        })
    }

    /// Creates seed material from raw bytes.
    ///
    /// # Errors
    ///
    /// Returns [`RandomError::InvalidParameter`] if `bytes` is empty.
    pub fn from_bytes(bytes: impl Into<Vec<u8>>) -> Result<Self> {
        let bytes = bytes.into();
        if bytes.is_empty() {
            return Err(RandomError::invalid_parameter(
                "seed",
                "byte sequence must not be empty",
            ));
        }
        Ok(Self {
            material: SeedMaterial::Bytes(bytes),
        })
    }

    /// Draws [`ENTROPY_WORDS`] words from the operating system.
    ///
    /// # Errors
    ///
    /// Returns [`RandomError::EntropyUnavailable`] if the OS source fails.
    pub fn from_entropy() -> Result<Self> {
        Self::from_entropy_source(&mut rand::rngs::OsRng, ENTROPY_WORDS)
    }

    /// Draws `n_words` words from an arbitrary entropy source.
    ///
    /// # Errors
    ///
    /// Returns [`RandomError::InvalidParameter`] if `n_words` is zero, or
    /// the source's error if it fails.
    pub fn from_entropy_source<E: EntropySource + ?Sized>(
        source: &mut E,
        n_words: usize,
    ) -> Result<Self> {
        if n_words == 0 {
            return Err(RandomError::invalid_parameter(
                "n_words",
                "must draw at least one word",
            ));
        }
        let mut words = vec![0u32; n_words];
        source.fill_words(&mut words)?;
        tracing::debug!(n_words, "seed material drawn from entropy source");
        Self::from_words(words)
    }

    /// Returns the integer seed, if the material is a single integer.
    pub fn as_u64(&self) -> Option<u64> {
        match self.material {
            SeedMaterial::Integer(seed) => Some(seed),
            _ => None,
        }
    }

    /// Returns the material as little-endian 32-bit words.
    ///
    /// Integers that fit in 32 bits give one word, wider integers two.
    /// Bytes are packed four at a time with zero padding.
    pub fn words32(&self) -> Vec<u32> {
        match &self.material {
            SeedMaterial::Integer(seed) => {
                let (lo, hi) = (*seed as u32, (*seed >> 32) as u32);
                if hi == 0 {
                    vec![lo]
                } else {
                    vec![lo, hi]
                }
            }
            SeedMaterial::Words(words) => words.clone(),
            SeedMaterial::Bytes(bytes) => bytes
                .chunks(4)
                .map(|chunk| {
                    let mut buf = [0u8; 4];
                    buf[..chunk.len()].copy_from_slice(chunk);
                    u32::from_le_bytes(buf)
                })
                .collect(),
        }
    }

    /// Returns the material as little-endian 64-bit words.
    pub fn words64(&self) -> Vec<u64> {
        match &self.material {
            SeedMaterial::Integer(seed) => vec![*seed],
            SeedMaterial::Words(words) => words
                .chunks(2)
                .map(|pair| {
                    let hi = pair.get(1).copied().unwrap_or(0);
                    u64::from(pair[0]) | (u64::from(hi) << 32)
                })
                .collect(),
            SeedMaterial::Bytes(bytes) => bytes
                .chunks(8)
                .map(|chunk| {
                    let mut buf = [0u8; 8];
                    buf[..chunk.len()].copy_from_slice(chunk);
                    u64::from_le_bytes(buf)
                })
                .collect(),
        }
    }

    /// Expands the material into `n` state words.
    ///
    /// The material words are absorbed into a SplitMix64 state one per
    /// round, and each round's output is folded into the output word at
    /// `round % n`. For an integer seed `s` this is exactly the SplitMix64
    /// stream started at `s`.
    pub fn generate_state(&self, n: usize) -> Vec<u64> {
        let mut out = vec![0u64; n];
        if n == 0 {
            return out;
        }
        let pool = self.words64();
        let mut mixer = 0u64;
        for round in 0..n.max(pool.len()) {
            mixer ^= pool.get(round).copied().unwrap_or(0);
            out[round % n] ^= splitmix64_next(&mut mixer);
        }
        out
    }
}

impl From<u64> for SeedSequence {
    fn from(seed: u64) -> Self {
        Self::from_u64(seed)
    }
}

impl From<u32> for SeedSequence {
    fn from(seed: u32) -> Self {
        Self::from_u64(u64::from(seed))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ========================================
    // Construction
    // ========================================

    #[test]
    fn test_empty_material_rejected() {
        assert!(SeedSequence::from_words(Vec::new()).is_err());
        assert!(SeedSequence::from_bytes(Vec::new()).is_err());
    }

    #[test]
    fn test_as_u64() {
        assert_eq!(SeedSequence::from(9_u64).as_u64(), Some(9));
        assert_eq!(SeedSequence::from_words(vec![9]).unwrap().as_u64(), None);
    }

    // ========================================
    // Word packing
    // ========================================

    #[test]
    fn test_words32_of_integer() {
        assert_eq!(SeedSequence::from(5_u64).words32(), vec![5]);
        assert_eq!(
            SeedSequence::from(0x1_0000_0002_u64).words32(),
            vec![2, 1]
        );
    }

    #[test]
    fn test_words64_pairs_words() {
        let seed = SeedSequence::from_words(vec![1, 2, 3]).unwrap();
        assert_eq!(seed.words64(), vec![1 | (2 << 32), 3]);
    }

    #[test]
    fn test_bytes_pack_little_endian() {
        let seed = SeedSequence::from_bytes(vec![1, 0, 0, 0, 2]).unwrap();
        assert_eq!(seed.words32(), vec![1, 2]);
        assert_eq!(seed.words64(), vec![1 | (2 << 32)]);
    }

    // ========================================
    // Expansion
    // ========================================

    #[test]
    fn test_integer_expansion_is_splitmix_stream() {
        // SplitMix64 reference outputs for seed 1234567.
        let state = SeedSequence::from(1234567_u64).generate_state(3);
        assert_eq!(
            state,
            vec![
                6457827717110365317,
                3203168211198807973,
                9817491932198370423
            ]
        );
    }

    #[test]
    fn test_expansion_depends_on_every_word() {
        let a = SeedSequence::from_words(vec![1, 2, 3, 4, 5, 6]).unwrap();
        let b = SeedSequence::from_words(vec![1, 2, 3, 4, 5, 7]).unwrap();
        assert_ne!(a.generate_state(2), b.generate_state(2));
    }

    #[test]
    fn test_expansion_of_zero_length() {
        assert!(SeedSequence::from(1_u64).generate_state(0).is_empty());
    }

    #[test]
    fn test_entropy_is_fresh() {
        let a = SeedSequence::from_entropy().unwrap();
        let b = SeedSequence::from_entropy().unwrap();
        assert_eq!(a.words32().len(), ENTROPY_WORDS);
        assert_ne!(a, b);
    }
}
