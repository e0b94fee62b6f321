//! Bit generator algorithms.
//!
//! | Type | Native word | Jump | Advance |
//! |------|-------------|------|---------|
//! | [`Mt19937`] | 32 | 2^128 outputs | - |
//! | [`Dsfmt`] | 52-bit mantissa | 2^128 × 128-bit steps | - |
//! | [`Pcg64`] | 64 | golden-ratio fraction of 2^128 | yes |
//! | [`Philox`] | 64 | 2^128 blocks | yes |
//! | [`Threefry`] | 64 | 2^128 blocks | yes |
//! | [`Xoroshiro128`] | 64 | 2^64 outputs | - |
//! | [`Xorshift1024`] | 64 | 2^512 outputs | - |
//! | [`SplitMix64`] | 64 | - | - |
//!
//! [`AnyBitGenerator`] wraps the closed set behind one type with static
//! dispatch.

pub mod any;
pub mod dsfmt;
pub mod mt19937;
pub mod pcg64;
pub mod philox;
pub mod splitmix64;
pub mod threefry;
pub mod xoroshiro128;
pub mod xorshift1024;

mod counter;
mod dsfmt_jump;
mod mt19937_jump;
mod polynomial;

pub use any::AnyBitGenerator;
pub use dsfmt::Dsfmt;
pub use mt19937::Mt19937;
pub use pcg64::Pcg64;
pub use philox::Philox;
pub use splitmix64::SplitMix64;
pub use threefry::Threefry;
pub use xoroshiro128::Xoroshiro128;
pub use xorshift1024::Xorshift1024;

use crate::types::StateAux;

/// Serves 32-bit draws from the two halves of one 64-bit word.
///
/// The low half is returned first; the high half is kept for the next
/// 32-bit draw. 64-bit draws bypass the cache.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub(crate) struct HalfWordCache {
    has_uint32: bool,
    uinteger: u32,
}

impl HalfWordCache {
    /// Returns the cached high half, if any, emptying the cache.
    #[inline]
    pub(crate) fn take(&mut self) -> Option<u32> {
        if self.has_uint32 {
            self.has_uint32 = false;
            Some(self.uinteger)
        } else {
            None
        }
    }

    /// Caches the high half of `word` and returns the low half.
    #[inline]
    pub(crate) fn split(&mut self, word: u64) -> u32 {
        self.has_uint32 = true;
        self.uinteger = (word >> 32) as u32;
        word as u32
    }

    #[inline]
    pub(crate) fn clear(&mut self) {
        *self = Self::default();
    }

    pub(crate) fn to_aux(self) -> StateAux {
        StateAux {
            has_uint32: self.has_uint32,
            uinteger: self.uinteger,
            ..StateAux::default()
        }
    }

    pub(crate) fn from_aux(aux: &StateAux) -> Self {
        Self {
            has_uint32: aux.has_uint32,
            uinteger: aux.uinteger,
        }
    }
}
