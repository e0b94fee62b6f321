//! Jump-ahead for linear recurrences over GF(2).
//!
//! MT19937, dSFMT, xoroshiro128+ and xorshift1024* are linear maps `J` on
//! their state bits. Skipping `k` steps is `p(J)` applied to the state,
//! where `p(x) = x^k mod P(x)` and `P` is the characteristic polynomial.
//! The jump polynomials for the standard distances are precomputed and
//! stored as little-endian `u64` coefficient words: bit `i % 64` of word
//! `i / 64` is the coefficient of `x^i`.
//!
//! Evaluation uses the power basis: the state is stepped once per
//! coefficient and accumulated (XOR) whenever the coefficient is set.

/// State of a linear recurrence over GF(2).
pub(crate) trait LinearRecurrence: Clone {
    /// An all-zero state aligned like `self`.
    fn zeroed(&self) -> Self;

    /// Applies one recurrence step.
    fn step(&mut self);

    /// XORs `other` into `self`, element by logical position.
    fn accumulate(&mut self, other: &Self);
}

/// Returns the index of the highest set coefficient, if any.
pub(crate) fn degree(poly: &[u64]) -> Option<usize> {
    poly.iter()
        .enumerate()
        .rev()
        .find(|(_, &word)| word != 0)
        .map(|(i, &word)| i * 64 + 63 - word.leading_zeros() as usize)
}

/// Evaluates `poly(J)` on `state`.
pub(crate) fn apply_polynomial<S: LinearRecurrence>(state: &S, poly: &[u64]) -> S {
    let mut acc = state.zeroed();
    let Some(top) = degree(poly) else {
        return acc;
    };
    let mut base = state.clone();
    for i in 0..=top {
        if (poly[i / 64] >> (i % 64)) & 1 == 1 {
            acc.accumulate(&base);
        }
        if i < top {
            base.step();
        }
    }
    acc
}

/// Returns the polynomial `x^k` as coefficient words.
#[cfg(test)]
pub(crate) fn monomial(k: usize) -> Vec<u64> {
    let mut poly = vec![0u64; k / 64 + 1];
    poly[k / 64] = 1 << (k % 64);
    poly
}

#[cfg(test)]
mod tests {
    use super::*;

    /// A 3-bit Fibonacci LFSR, x^3 + x + 1.
    #[derive(Clone, Debug, PartialEq)]
    struct Lfsr(u8);

    impl LinearRecurrence for Lfsr {
        fn zeroed(&self) -> Self {
            Lfsr(0)
        }

        fn step(&mut self) {
            let feedback = (self.0 ^ (self.0 >> 1)) & 1;
            self.0 = (self.0 >> 1) | (feedback << 2);
        }

        fn accumulate(&mut self, other: &Self) {
            self.0 ^= other.0;
        }
    }

    #[test]
    fn test_degree() {
        assert_eq!(degree(&[]), None);
        assert_eq!(degree(&[0, 0]), None);
        assert_eq!(degree(&[1]), Some(0));
        assert_eq!(degree(&[0, 0x8000_0000_0000_0000]), Some(127));
    }

    #[test]
    fn test_monomial_equals_stepping() {
        for k in 0..3 {
            let mut stepped = Lfsr(0b101);
            for _ in 0..k {
                stepped.step();
            }
            assert_eq!(apply_polynomial(&Lfsr(0b101), &monomial(k)), stepped);
        }
    }

    #[test]
    fn test_zero_polynomial_gives_zero_state() {
        assert_eq!(apply_polynomial(&Lfsr(0b111), &[0]), Lfsr(0));
    }
}
