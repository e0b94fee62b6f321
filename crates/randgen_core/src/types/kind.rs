//! Bit generator variant identifiers.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::error::RandomError;

/// Closed set of bit generator algorithms.
///
/// The kind tags every state snapshot, so a snapshot taken from one
/// algorithm can never be restored into another.
///
/// # Examples
///
/// ```
/// use randgen_core::types::BitGeneratorKind;
///
/// let kind: BitGeneratorKind = "philox".parse().unwrap();
/// assert_eq!(kind, BitGeneratorKind::Philox);
/// assert_eq!(kind.to_string(), "philox");
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BitGeneratorKind {
    /// Mersenne Twister MT19937 (32-bit native output).
    Mt19937,
    /// Double precision SIMD-oriented Fast Mersenne Twister, MEXP 19937.
    Dsfmt,
    /// PCG64 (XSL-RR 128/64) permuted congruential generator.
    Pcg64,
    /// Philox4x64-10 counter-based generator.
    Philox,
    /// Threefry4x64-20 counter-based generator.
    Threefry,
    /// xoroshiro128+ shift register generator.
    Xoroshiro128,
    /// xorshift1024* shift register generator.
    Xorshift1024,
    /// SplitMix64 (also used internally for seed expansion).
    SplitMix64,
}

impl BitGeneratorKind {
    /// All variants, in a stable order.
    pub const ALL: [BitGeneratorKind; 8] = [
        BitGeneratorKind::Mt19937,
        BitGeneratorKind::Dsfmt,
        BitGeneratorKind::Pcg64,
        BitGeneratorKind::Philox,
        BitGeneratorKind::Threefry,
        BitGeneratorKind::Xoroshiro128,
        BitGeneratorKind::Xorshift1024,
        BitGeneratorKind::SplitMix64,
    ];

    /// Returns the canonical lowercase name.
    pub fn name(&self) -> &'static str {
        match self {
            BitGeneratorKind::Mt19937 => "mt19937",
            BitGeneratorKind::Dsfmt => "dsfmt",
            BitGeneratorKind::Pcg64 => "pcg64",
            BitGeneratorKind::Philox => "philox",
            BitGeneratorKind::Threefry => "threefry",
            BitGeneratorKind::Xoroshiro128 => "xoroshiro128",
            BitGeneratorKind::Xorshift1024 => "xorshift1024",
            BitGeneratorKind::SplitMix64 => "splitmix64",
        }
    }

    /// Returns `true` if the variant supports `jump`.
    pub fn supports_jump(&self) -> bool {
        !matches!(self, BitGeneratorKind::SplitMix64)
    }

    /// Returns `true` if the variant supports arbitrary `advance`.
    pub fn supports_advance(&self) -> bool {
        matches!(
            self,
            BitGeneratorKind::Pcg64 | BitGeneratorKind::Philox | BitGeneratorKind::Threefry
        )
    }
}

impl fmt::Display for BitGeneratorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for BitGeneratorKind {
    type Err = RandomError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lowered = s.trim().to_ascii_lowercase();
        BitGeneratorKind::ALL
            .iter()
            .copied()
            .find(|kind| kind.name() == lowered)
            .ok_or_else(|| {
                RandomError::invalid_parameter("kind", format!("unknown bit generator '{}'", s))
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_round_trip() {
        for kind in BitGeneratorKind::ALL {
            assert_eq!(kind.name().parse::<BitGeneratorKind>().unwrap(), kind);
        }
    }

    #[test]
    fn test_parse_is_case_insensitive() {
        assert_eq!(
            "MT19937".parse::<BitGeneratorKind>().unwrap(),
            BitGeneratorKind::Mt19937
        );
    }

    #[test]
    fn test_parse_unknown() {
        let err = "mersenne".parse::<BitGeneratorKind>().unwrap_err();
        assert!(matches!(err, RandomError::InvalidParameter { name: "kind", .. }));
    }

    #[test]
    fn test_capabilities() {
        assert!(!BitGeneratorKind::SplitMix64.supports_jump());
        assert!(BitGeneratorKind::Mt19937.supports_jump());
        assert!(BitGeneratorKind::Philox.supports_advance());
        assert!(!BitGeneratorKind::Xoroshiro128.supports_advance());
    }
}
