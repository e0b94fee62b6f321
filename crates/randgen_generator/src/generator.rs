//! The generator façade: one bit generator plus the sampling engine.
//!
//! [`Generator`] owns its bit generator and exposes scalar draws, batch
//! fills and shuffling. Every method that takes distribution parameters
//! checks them before drawing, so a `RandomError::InvalidParameter`
//! never advances the state.
//!
//! Batch fills validate once and then draw strictly in index order from the
//! single advance chain of the bit generator: filling a slice of length `n`
//! leaves the generator in the same state, with the same values, as `n`
//! scalar calls.

use rand::RngCore;
use randgen_core::{
    AnyBitGenerator, BitGenerator, BitGeneratorKind, BitGeneratorState, Result,
    SeedSequence, SeedableBitGenerator,
};
use randgen_distributions::continuous::{
    random_beta, random_exponential, random_gamma, random_normal, random_standard_exponential,
    random_standard_gamma, random_standard_normal,
};
use randgen_distributions::discrete::{random_binomial, random_poisson};
use randgen_distributions::multivariate::{random_dirichlet, random_multinomial};
use randgen_distributions::uniform::{random_integers, random_interval, random_uniform};
use randgen_distributions::{
    Distribution, Exponential, Normal, StandardExponential, StandardNormal, Uniform, UniformInt,
};

/// Reproducible random generator over any bit generator.
///
/// The default type parameter is [`AnyBitGenerator`], so the algorithm can
/// be chosen at run time; a concrete bit generator type gives the same
/// outputs without the dispatch `match`.
///
/// # Examples
///
/// ```rust
/// use randgen_core::{BitGeneratorKind, SeedSequence};
/// use randgen_generator::Generator;
///
/// let mut rng = Generator::from_kind(BitGeneratorKind::Pcg64, &SeedSequence::from(42_u64));
///
/// let u = rng.random();
/// assert!((0.0..1.0).contains(&u));
///
/// let k = rng.integers(1, 6).unwrap();
/// assert!((1..=6).contains(&k));
///
/// let mut buffer = vec![0.0; 128];
/// rng.fill_standard_normal(&mut buffer).unwrap();
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Generator<B: BitGenerator = AnyBitGenerator> {
    bit_generator: B,
}

impl Generator<AnyBitGenerator> {
    /// Seeds a generator of the given kind.
    ///
    /// # Arguments
    ///
    /// * `kind` - Bit generator algorithm
    /// * `seed` - Seed material
    pub fn from_kind(kind: BitGeneratorKind, seed: &SeedSequence) -> Self {
        Self::new(AnyBitGenerator::from_seed(kind, seed))
    }

    /// Seeds a generator of the given kind from operating system entropy.
    ///
    /// # Errors
    ///
    /// Returns `RandomError::EntropyUnavailable` if the OS source fails.
    pub fn from_entropy(kind: BitGeneratorKind) -> Result<Self> {
        Ok(Self::new(AnyBitGenerator::from_entropy(kind)?))
    }

    /// Rebuilds a generator from a state snapshot of any kind.
    ///
    /// # Errors
    ///
    /// Returns `RandomError::SerializationMismatch` if the snapshot is
    /// malformed.
    pub fn from_state(state: &BitGeneratorState) -> Result<Self> {
        Ok(Self::new(AnyBitGenerator::from_state(state)?))
    }
}

impl<B: SeedableBitGenerator> Generator<B> {
    /// Seeds the concrete bit generator from a 64-bit integer.
    pub fn seed_from_u64(seed: u64) -> Self {
        Self::new(B::seed_from_u64(seed))
    }
}

impl<B: BitGenerator> Generator<B> {
    /// Wraps an existing bit generator.
    #[inline]
    pub fn new(bit_generator: B) -> Self {
        Self { bit_generator }
    }

    /// Returns the underlying bit generator.
    #[inline]
    pub fn bit_generator(&self) -> &B {
        &self.bit_generator
    }

    /// Returns the underlying bit generator mutably, for the free sampling
    /// kernels.
    #[inline]
    pub fn bit_generator_mut(&mut self) -> &mut B {
        &mut self.bit_generator
    }

    /// Unwraps the bit generator.
    #[inline]
    pub fn into_inner(self) -> B {
        self.bit_generator
    }

    /// Returns the algorithm of the underlying bit generator.
    #[inline]
    pub fn kind(&self) -> BitGeneratorKind {
        self.bit_generator.kind()
    }

    // ========================================
    // State and stream management
    // ========================================

    /// Takes a snapshot of the bit generator state.
    pub fn state(&self) -> BitGeneratorState {
        self.bit_generator.state()
    }

    /// Restores a snapshot; on error the generator is unchanged.
    ///
    /// # Errors
    ///
    /// Returns `RandomError::SerializationMismatch` if the snapshot does
    /// not fit the bit generator.
    pub fn set_state(&mut self, state: &BitGeneratorState) -> Result<()> {
        self.bit_generator.set_state(state)
    }

    /// Advances the bit generator by `iter` jump distances.
    ///
    /// # Errors
    ///
    /// Returns `RandomError::UnsupportedOperation` if the variant has no
    /// jump.
    pub fn jump(&mut self, iter: u64) -> Result<()> {
        self.bit_generator.jump(iter)
    }

    /// Returns a copy advanced by `iter` jumps, leaving `self` unchanged.
    ///
    /// # Errors
    ///
    /// As for [`jump`](Self::jump).
    pub fn jumped(&self, iter: u64) -> Result<Self>
    where
        B: Clone,
    {
        Ok(Self::new(self.bit_generator.jumped(iter)?))
    }

    /// Advances the bit generator by exactly `delta` native steps.
    ///
    /// # Errors
    ///
    /// Returns `RandomError::UnsupportedOperation` if the variant cannot
    /// skip arbitrary distances.
    pub fn advance(&mut self, delta: u128) -> Result<()> {
        self.bit_generator.advance(delta)
    }

    // ========================================
    // Scalar draws
    // ========================================

    /// Returns the native output word of the bit generator.
    #[inline]
    pub fn random_raw(&mut self) -> u64 {
        self.bit_generator.next_raw()
    }

    /// Returns a uniform `f64` in `[0, 1)`.
    #[inline]
    pub fn random(&mut self) -> f64 {
        self.bit_generator.next_double()
    }

    /// Returns a uniform `f32` in `[0, 1)`.
    #[inline]
    pub fn random_f32(&mut self) -> f32 {
        self.bit_generator.next_float()
    }

    /// Returns a uniform `f64` in `[low, high)`.
    ///
    /// # Errors
    ///
    /// Returns `RandomError::InvalidParameter` unless `low < high` and
    /// both are finite.
    pub fn uniform(&mut self, low: f64, high: f64) -> Result<f64> {
        random_uniform(&mut self.bit_generator, low, high)
    }

    /// Returns a uniform integer in the closed interval `[low, high]`.
    ///
    /// # Errors
    ///
    /// Returns `RandomError::InvalidParameter` if `low > high`.
    pub fn integers(&mut self, low: i64, high: i64) -> Result<i64> {
        random_integers(&mut self.bit_generator, low, high)
    }

    /// Returns a standard normal variate.
    pub fn standard_normal(&mut self) -> Result<f64> {
        random_standard_normal(&mut self.bit_generator)
    }

    /// Returns a normal variate with mean `loc` and standard deviation
    /// `scale`.
    pub fn normal(&mut self, loc: f64, scale: f64) -> Result<f64> {
        random_normal(&mut self.bit_generator, loc, scale)
    }

    /// Returns a standard exponential variate.
    pub fn standard_exponential(&mut self) -> Result<f64> {
        random_standard_exponential(&mut self.bit_generator)
    }

    /// Returns an exponential variate with mean `scale`.
    pub fn exponential(&mut self, scale: f64) -> Result<f64> {
        random_exponential(&mut self.bit_generator, scale)
    }

    /// Returns a gamma variate with unit scale.
    pub fn standard_gamma(&mut self, shape: f64) -> Result<f64> {
        random_standard_gamma(&mut self.bit_generator, shape)
    }

    /// Returns a gamma variate.
    ///
    /// # Errors
    ///
    /// Returns `RandomError::InvalidParameter` unless `shape > 0` and
    /// `scale >= 0`, both finite.
    pub fn gamma(&mut self, shape: f64, scale: f64) -> Result<f64> {
        random_gamma(&mut self.bit_generator, shape, scale)
    }

    /// Returns a beta variate.
    pub fn beta(&mut self, a: f64, b: f64) -> Result<f64> {
        random_beta(&mut self.bit_generator, a, b)
    }

    /// Returns the number of successes in `n` Bernoulli(`p`) trials.
    ///
    /// # Errors
    ///
    /// Returns `RandomError::InvalidParameter` if `n < 0` or `p` is
    /// outside `[0, 1]`; no bits are drawn.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use randgen_core::generators::Pcg64;
    /// use randgen_generator::Generator;
    ///
    /// let mut rng = Generator::<Pcg64>::seed_from_u64(3);
    /// let before = rng.state();
    /// assert!(rng.binomial(-1, 0.5).is_err());
    /// assert_eq!(rng.state(), before);
    /// ```
    pub fn binomial(&mut self, n: i64, p: f64) -> Result<i64> {
        random_binomial(&mut self.bit_generator, n, p)
    }

    /// Returns a Poisson variate with mean `lam`.
    pub fn poisson(&mut self, lam: f64) -> Result<i64> {
        random_poisson(&mut self.bit_generator, lam)
    }

    /// Draws one sample from a validated distribution.
    #[inline]
    pub fn sample<D: Distribution>(&mut self, distribution: &D) -> Result<D::Output> {
        distribution.sample(&mut self.bit_generator)
    }

    // ========================================
    // Batch fill
    // ========================================

    /// Fills `out` with samples from `distribution`, in index order.
    ///
    /// # Errors
    ///
    /// Returns the first sampling error. Slots before the failing index keep
    /// their new values; later slots are untouched.
    pub fn fill<D: Distribution>(&mut self, distribution: &D, out: &mut [D::Output]) -> Result<()> {
        for slot in out.iter_mut() {
            *slot = distribution.sample(&mut self.bit_generator)?;
        }
        Ok(())
    }

    /// Fills `out` by calling `draw` once per slot, in index order.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use randgen_core::generators::Xoroshiro128;
    /// use randgen_generator::Generator;
    ///
    /// let mut rng = Generator::<Xoroshiro128>::seed_from_u64(5);
    /// let mut dice = [0_i64; 16];
    /// rng.fill_with(&mut dice, |g| g.integers(1, 6)).unwrap();
    /// assert!(dice.iter().all(|d| (1..=6).contains(d)));
    /// ```
    pub fn fill_with<T, F>(&mut self, out: &mut [T], mut draw: F) -> Result<()>
    where
        F: FnMut(&mut Self) -> Result<T>,
    {
        for slot in out.iter_mut() {
            *slot = draw(self)?;
        }
        Ok(())
    }

    /// Fills `out` with native output words.
    pub fn fill_raw(&mut self, out: &mut [u64]) {
        for slot in out.iter_mut() {
            *slot = self.bit_generator.next_raw();
        }
    }

    /// Fills `out` with uniform doubles in `[0, 1)`.
    pub fn fill_random(&mut self, out: &mut [f64]) {
        for slot in out.iter_mut() {
            *slot = self.bit_generator.next_double();
        }
    }

    /// Fills `out` with uniform doubles in `[low, high)`.
    pub fn fill_uniform(&mut self, low: f64, high: f64, out: &mut [f64]) -> Result<()> {
        let distribution = Uniform::new(low, high)?;
        self.fill(&distribution, out)
    }

    /// Fills `out` with standard normal variates.
    pub fn fill_standard_normal(&mut self, out: &mut [f64]) -> Result<()> {
        self.fill(&StandardNormal, out)
    }

    /// Fills `out` with normal variates.
    pub fn fill_normal(&mut self, loc: f64, scale: f64, out: &mut [f64]) -> Result<()> {
        let distribution = Normal::new(loc, scale)?;
        self.fill(&distribution, out)
    }

    /// Fills `out` with standard exponential variates.
    pub fn fill_standard_exponential(&mut self, out: &mut [f64]) -> Result<()> {
        self.fill(&StandardExponential, out)
    }

    /// Fills `out` with exponential variates of mean `scale`.
    pub fn fill_exponential(&mut self, scale: f64, out: &mut [f64]) -> Result<()> {
        let distribution = Exponential::new(scale)?;
        self.fill(&distribution, out)
    }

    /// Fills `out` with uniform integers in `[low, high]`.
    pub fn fill_integers(&mut self, low: i64, high: i64, out: &mut [i64]) -> Result<()> {
        let distribution = UniformInt::new(low, high)?;
        self.fill(&distribution, out)
    }

    // ========================================
    // Vectors and permutations
    // ========================================

    /// Returns category counts for `n` draws with probabilities `pvals`.
    ///
    /// The last category absorbs the remainder, so only the leading
    /// probabilities need to sum to at most one.
    pub fn multinomial(&mut self, n: i64, pvals: &[f64]) -> Result<Vec<i64>> {
        let mut counts = vec![0; pvals.len()];
        random_multinomial(&mut self.bit_generator, n, pvals, &mut counts)?;
        Ok(counts)
    }

    /// Returns a point on the simplex drawn from Dirichlet(`alpha`).
    pub fn dirichlet(&mut self, alpha: &[f64]) -> Result<Vec<f64>> {
        let mut point = vec![0.0; alpha.len()];
        random_dirichlet(&mut self.bit_generator, alpha, &mut point)?;
        Ok(point)
    }

    /// Shuffles `values` in place (Fisher-Yates, last index first).
    ///
    /// # Errors
    ///
    /// Only fails for a degenerate bit generator; the slice may then be
    /// partially shuffled.
    pub fn shuffle<T>(&mut self, values: &mut [T]) -> Result<()> {
        for i in (1..values.len()).rev() {
            let j = random_interval(&mut self.bit_generator, i as u64)? as usize;
            values.swap(i, j);
        }
        Ok(())
    }

    /// Returns a random permutation of `0..n`.
    pub fn permutation(&mut self, n: usize) -> Result<Vec<usize>> {
        let mut values: Vec<usize> = (0..n).collect();
        self.shuffle(&mut values)?;
        Ok(values)
    }
}

impl<B: BitGenerator> From<B> for Generator<B> {
    fn from(bit_generator: B) -> Self {
        Self::new(bit_generator)
    }
}

/// Lets a [`Generator`] drive code written against `rand`.
///
/// Bytes are taken from `next_u64` words in little-endian order; a final
/// partial word is truncated.
impl<B: BitGenerator> RngCore for Generator<B> {
    #[inline]
    fn next_u32(&mut self) -> u32 {
        self.bit_generator.next_u32()
    }

    #[inline]
    fn next_u64(&mut self) -> u64 {
        self.bit_generator.next_u64()
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        for chunk in dest.chunks_mut(8) {
            let bytes = self.bit_generator.next_u64().to_le_bytes();
            chunk.copy_from_slice(&bytes[..chunk.len()]);
        }
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> std::result::Result<(), rand::Error> {
        self.fill_bytes(dest);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use randgen_core::generators::{Mt19937, Pcg64};

    fn pcg(seed: u64) -> Generator<Pcg64> {
        Generator::seed_from_u64(seed)
    }

    // ========================================
    // Scalars
    // ========================================

    #[test]
    fn test_scalar_draws_match_kernels() {
        let mut rng = pcg(1);
        let mut bits = Pcg64::seed_from_u64(1);

        assert_eq!(rng.standard_normal().unwrap(), random_standard_normal(&mut bits).unwrap());
        assert_eq!(rng.gamma(2.0, 3.0).unwrap(), random_gamma(&mut bits, 2.0, 3.0).unwrap());
        assert_eq!(rng.poisson(4.0).unwrap(), random_poisson(&mut bits, 4.0).unwrap());
        assert_eq!(rng.random(), bits.next_double());
        assert_eq!(rng.state(), bits.state());
    }

    #[test]
    fn test_random_raw_is_native_word() {
        let mut rng = Generator::<Mt19937>::seed_from_u64(42);
        let raw = rng.random_raw();
        assert!(raw <= u64::from(u32::MAX));
    }

    #[test]
    fn test_invalid_parameters_leave_state() {
        let mut rng = pcg(2);
        let before = rng.state();
        assert!(rng.uniform(1.0, 1.0).is_err());
        assert!(rng.integers(3, 2).is_err());
        assert!(rng.normal(0.0, -1.0).is_err());
        assert!(rng.poisson(-1.0).is_err());
        assert!(rng.gamma(0.0, 1.0).is_err());
        assert!(rng.fill_normal(0.0, f64::NAN, &mut [0.0; 4]).is_err());
        assert_eq!(rng.state(), before);
    }

    // ========================================
    // Batch fill
    // ========================================

    #[test]
    fn test_fill_equals_scalar_calls() {
        let mut batch = pcg(3);
        let mut scalar = pcg(3);

        let mut out = [0.0; 64];
        batch.fill_normal(1.0, 2.0, &mut out).unwrap();
        for &x in &out {
            assert_eq!(x, scalar.normal(1.0, 2.0).unwrap());
        }

        let mut ints = [0_i64; 64];
        batch.fill_integers(-5, 5, &mut ints).unwrap();
        for &k in &ints {
            assert_eq!(k, scalar.integers(-5, 5).unwrap());
        }
        assert_eq!(batch.state(), scalar.state());
    }

    #[test]
    fn test_fill_empty_slice_draws_nothing() {
        let mut rng = pcg(4);
        let before = rng.state();
        rng.fill_standard_exponential(&mut []).unwrap();
        rng.fill_raw(&mut []);
        assert_eq!(rng.state(), before);
    }

    // ========================================
    // Permutations
    // ========================================

    #[test]
    fn test_permutation_is_a_permutation() {
        let mut rng = pcg(5);
        let mut perm = rng.permutation(100).unwrap();
        perm.sort_unstable();
        assert_eq!(perm, (0..100).collect::<Vec<_>>());
    }

    #[test]
    fn test_shuffle_trivial_slices() {
        let mut rng = pcg(6);
        let before = rng.state();
        let mut empty: [u8; 0] = [];
        rng.shuffle(&mut empty).unwrap();
        let mut one = [7];
        rng.shuffle(&mut one).unwrap();
        assert_eq!(one, [7]);
        assert_eq!(rng.state(), before);
    }

    #[test]
    fn test_dirichlet_sums_to_one() {
        let mut rng = pcg(7);
        let point = rng.dirichlet(&[1.0, 2.0, 3.0]).unwrap();
        assert_relative_eq!(point.iter().sum::<f64>(), 1.0, epsilon = 1e-12);
    }

    #[test]
    fn test_multinomial_counts_total() {
        let mut rng = pcg(8);
        let counts = rng.multinomial(1000, &[0.2, 0.3, 0.5]).unwrap();
        assert_eq!(counts.iter().sum::<i64>(), 1000);
    }

    // ========================================
    // rand interop
    // ========================================

    #[test]
    fn test_fill_bytes_little_endian_words() {
        let mut rng = pcg(9);
        let mut bits = Pcg64::seed_from_u64(9);
        let mut bytes = [0u8; 12];
        rng.fill_bytes(&mut bytes);
        assert_eq!(&bytes[..8], &bits.next_u64().to_le_bytes());
        assert_eq!(&bytes[8..], &bits.next_u64().to_le_bytes()[..4]);
    }

    #[test]
    fn test_drives_rand_distr() {
        use rand_distr::Distribution as _;

        let mut rng = pcg(10);
        let x: f64 = rand_distr::Exp1.sample(&mut rng);
        assert!(x >= 0.0);
    }
}
