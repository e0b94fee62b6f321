//! Parameter value objects, one per distribution.
//!
//! Each type validates its parameters in `new` and is immutable afterwards,
//! so invalid parameters surface before any sampling loop starts. Sampling
//! goes through [`Distribution::sample`].

use randgen_core::{BitGenerator, RandomError, Result};

use crate::continuous::{
    self, check_gamma, check_normal, draw_beta, draw_chisquare, draw_standard_gamma,
};
use crate::discrete::{
    self, check_binomial, check_hypergeometric, check_poisson, draw_binomial, draw_poisson,
};
use crate::multivariate::{check_dirichlet, check_multinomial, random_dirichlet, random_multinomial};
use crate::traits::Distribution;
use crate::uniform::{check_integers, check_uniform, draw_integers, draw_uniform};
use crate::validate;

// ========================================
// Uniform
// ========================================

/// Uniform `f64` on `[0, 1)`.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct StandardUniform;

impl Distribution for StandardUniform {
    type Output = f64;

    #[inline]
    fn sample<B: BitGenerator + ?Sized>(&self, bitgen: &mut B) -> Result<f64> {
        Ok(bitgen.next_double())
    }
}

/// Uniform `f64` on `[low, high)`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Uniform {
    low: f64,
    range: f64,
}

impl Uniform {
    /// Creates the distribution; requires finite `low < high`.
    pub fn new(low: f64, high: f64) -> Result<Self> {
        check_uniform(low, high)?;
        Ok(Self {
            low,
            range: high - low,
        })
    }
}

impl Distribution for Uniform {
    type Output = f64;

    #[inline]
    fn sample<B: BitGenerator + ?Sized>(&self, bitgen: &mut B) -> Result<f64> {
        Ok(draw_uniform(bitgen, self.low, self.range))
    }
}

/// Uniform `i64` on the closed interval `[low, high]`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct UniformInt {
    low: i64,
    high: i64,
}

impl UniformInt {
    /// Creates the distribution; requires `low <= high`.
    pub fn new(low: i64, high: i64) -> Result<Self> {
        check_integers(low, high)?;
        Ok(Self { low, high })
    }
}

impl Distribution for UniformInt {
    type Output = i64;

    #[inline]
    fn sample<B: BitGenerator + ?Sized>(&self, bitgen: &mut B) -> Result<i64> {
        draw_integers(bitgen, self.low, self.high)
    }
}

// ========================================
// Normal family
// ========================================

/// Standard normal, mean 0 and variance 1.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct StandardNormal;

impl Distribution for StandardNormal {
    type Output = f64;

    #[inline]
    fn sample<B: BitGenerator + ?Sized>(&self, bitgen: &mut B) -> Result<f64> {
        continuous::random_standard_normal(bitgen)
    }
}

/// Normal with mean `loc` and standard deviation `scale`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Normal {
    loc: f64,
    scale: f64,
}

impl Normal {
    /// Creates the distribution; requires finite `loc` and `scale >= 0`.
    ///
    /// # Examples
    ///
    /// ```
    /// use randgen_distributions::Normal;
    ///
    /// assert!(Normal::new(0.0, 1.0).is_ok());
    /// assert!(Normal::new(0.0, -1.0).is_err());
    /// ```
    pub fn new(loc: f64, scale: f64) -> Result<Self> {
        check_normal(loc, scale)?;
        Ok(Self { loc, scale })
    }

    /// Mean.
    pub fn loc(&self) -> f64 {
        self.loc
    }

    /// Standard deviation.
    pub fn scale(&self) -> f64 {
        self.scale
    }
}

impl Distribution for Normal {
    type Output = f64;

    #[inline]
    fn sample<B: BitGenerator + ?Sized>(&self, bitgen: &mut B) -> Result<f64> {
        Ok(self.loc + self.scale * continuous::random_standard_normal(bitgen)?)
    }
}

/// Log-normal: `exp(N(mean, sigma))`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LogNormal {
    normal: Normal,
}

impl LogNormal {
    /// Creates the distribution from the parameters of the underlying normal.
    pub fn new(mean: f64, sigma: f64) -> Result<Self> {
        validate::finite("mean", mean)?;
        validate::non_negative("sigma", sigma)?;
        Ok(Self {
            normal: Normal {
                loc: mean,
                scale: sigma,
            },
        })
    }
}

impl Distribution for LogNormal {
    type Output = f64;

    #[inline]
    fn sample<B: BitGenerator + ?Sized>(&self, bitgen: &mut B) -> Result<f64> {
        Ok(self.normal.sample(bitgen)?.exp())
    }
}

/// Standard Cauchy.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct StandardCauchy;

impl Distribution for StandardCauchy {
    type Output = f64;

    fn sample<B: BitGenerator + ?Sized>(&self, bitgen: &mut B) -> Result<f64> {
        continuous::random_standard_cauchy(bitgen)
    }
}

/// Student's t with `df > 0` degrees of freedom.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StudentT {
    df: f64,
}

impl StudentT {
    /// Creates the distribution.
    pub fn new(df: f64) -> Result<Self> {
        validate::positive("df", df)?;
        Ok(Self { df })
    }
}

impl Distribution for StudentT {
    type Output = f64;

    fn sample<B: BitGenerator + ?Sized>(&self, bitgen: &mut B) -> Result<f64> {
        continuous::random_standard_t(bitgen, self.df)
    }
}

// ========================================
// Exponential and gamma family
// ========================================

/// Standard exponential, rate 1.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct StandardExponential;

impl Distribution for StandardExponential {
    type Output = f64;

    #[inline]
    fn sample<B: BitGenerator + ?Sized>(&self, bitgen: &mut B) -> Result<f64> {
        continuous::random_standard_exponential(bitgen)
    }
}

/// Exponential with mean `scale`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Exponential {
    scale: f64,
}

impl Exponential {
    /// Creates the distribution; requires finite `scale >= 0`.
    pub fn new(scale: f64) -> Result<Self> {
        validate::non_negative("scale", scale)?;
        Ok(Self { scale })
    }
}

impl Distribution for Exponential {
    type Output = f64;

    #[inline]
    fn sample<B: BitGenerator + ?Sized>(&self, bitgen: &mut B) -> Result<f64> {
        Ok(self.scale * continuous::random_standard_exponential(bitgen)?)
    }
}

/// Gamma with `shape > 0` and `scale >= 0`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Gamma {
    shape: f64,
    scale: f64,
}

impl Gamma {
    /// Creates the distribution.
    pub fn new(shape: f64, scale: f64) -> Result<Self> {
        check_gamma(shape, scale)?;
        Ok(Self { shape, scale })
    }

    /// Shape parameter.
    pub fn shape(&self) -> f64 {
        self.shape
    }

    /// Scale parameter.
    pub fn scale(&self) -> f64 {
        self.scale
    }
}

impl Distribution for Gamma {
    type Output = f64;

    #[inline]
    fn sample<B: BitGenerator + ?Sized>(&self, bitgen: &mut B) -> Result<f64> {
        Ok(self.scale * draw_standard_gamma(bitgen, self.shape)?)
    }
}

/// Beta with shapes `a > 0` and `b > 0`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Beta {
    a: f64,
    b: f64,
}

impl Beta {
    /// Creates the distribution.
    pub fn new(a: f64, b: f64) -> Result<Self> {
        validate::positive("a", a)?;
        validate::positive("b", b)?;
        Ok(Self { a, b })
    }
}

impl Distribution for Beta {
    type Output = f64;

    #[inline]
    fn sample<B: BitGenerator + ?Sized>(&self, bitgen: &mut B) -> Result<f64> {
        draw_beta(bitgen, self.a, self.b)
    }
}

/// Chi-square with `df > 0` degrees of freedom.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ChiSquared {
    df: f64,
}

impl ChiSquared {
    /// Creates the distribution.
    pub fn new(df: f64) -> Result<Self> {
        validate::positive("df", df)?;
        Ok(Self { df })
    }
}

impl Distribution for ChiSquared {
    type Output = f64;

    #[inline]
    fn sample<B: BitGenerator + ?Sized>(&self, bitgen: &mut B) -> Result<f64> {
        draw_chisquare(bitgen, self.df)
    }
}

/// Non-central chi-square.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct NoncentralChiSquared {
    df: f64,
    nonc: f64,
}

impl NoncentralChiSquared {
    /// Creates the distribution; requires `df > 0` and `nonc >= 0`.
    pub fn new(df: f64, nonc: f64) -> Result<Self> {
        validate::positive("df", df)?;
        validate::non_negative("nonc", nonc)?;
        Ok(Self { df, nonc })
    }
}

impl Distribution for NoncentralChiSquared {
    type Output = f64;

    fn sample<B: BitGenerator + ?Sized>(&self, bitgen: &mut B) -> Result<f64> {
        continuous::random_noncentral_chisquare(bitgen, self.df, self.nonc)
    }
}

/// Snedecor's F.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FisherF {
    dfnum: f64,
    dfden: f64,
}

impl FisherF {
    /// Creates the distribution; requires both degrees of freedom `> 0`.
    pub fn new(dfnum: f64, dfden: f64) -> Result<Self> {
        validate::positive("dfnum", dfnum)?;
        validate::positive("dfden", dfden)?;
        Ok(Self { dfnum, dfden })
    }
}

impl Distribution for FisherF {
    type Output = f64;

    fn sample<B: BitGenerator + ?Sized>(&self, bitgen: &mut B) -> Result<f64> {
        continuous::random_f(bitgen, self.dfnum, self.dfden)
    }
}

/// Non-central F.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct NoncentralF {
    dfnum: f64,
    dfden: f64,
    nonc: f64,
}

impl NoncentralF {
    /// Creates the distribution.
    pub fn new(dfnum: f64, dfden: f64, nonc: f64) -> Result<Self> {
        validate::positive("dfnum", dfnum)?;
        validate::positive("dfden", dfden)?;
        validate::non_negative("nonc", nonc)?;
        Ok(Self { dfnum, dfden, nonc })
    }
}

impl Distribution for NoncentralF {
    type Output = f64;

    fn sample<B: BitGenerator + ?Sized>(&self, bitgen: &mut B) -> Result<f64> {
        continuous::random_noncentral_f(bitgen, self.dfnum, self.dfden, self.nonc)
    }
}

// ========================================
// Location-scale and shape families
// ========================================

/// Which of the three location-scale families a [`LocationScale`] draws.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum LocationScaleFamily {
    /// Double exponential.
    Laplace,
    /// Type I extreme value.
    Gumbel,
    /// Logistic.
    Logistic,
}

/// Laplace, Gumbel or logistic with location `loc` and `scale >= 0`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LocationScale {
    family: LocationScaleFamily,
    loc: f64,
    scale: f64,
}

impl LocationScale {
    /// Creates the distribution.
    pub fn new(family: LocationScaleFamily, loc: f64, scale: f64) -> Result<Self> {
        validate::finite("loc", loc)?;
        validate::non_negative("scale", scale)?;
        Ok(Self { family, loc, scale })
    }
}

impl Distribution for LocationScale {
    type Output = f64;

    fn sample<B: BitGenerator + ?Sized>(&self, bitgen: &mut B) -> Result<f64> {
        match self.family {
            LocationScaleFamily::Laplace => {
                continuous::random_laplace(bitgen, self.loc, self.scale)
            }
            LocationScaleFamily::Gumbel => continuous::random_gumbel(bitgen, self.loc, self.scale),
            LocationScaleFamily::Logistic => {
                continuous::random_logistic(bitgen, self.loc, self.scale)
            }
        }
    }
}

/// Rayleigh with the given `scale`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rayleigh {
    scale: f64,
}

impl Rayleigh {
    /// Creates the distribution; requires `scale >= 0`.
    pub fn new(scale: f64) -> Result<Self> {
        validate::non_negative("scale", scale)?;
        Ok(Self { scale })
    }
}

impl Distribution for Rayleigh {
    type Output = f64;

    fn sample<B: BitGenerator + ?Sized>(&self, bitgen: &mut B) -> Result<f64> {
        continuous::random_rayleigh(bitgen, self.scale)
    }
}

/// Weibull with shape `a >= 0`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Weibull {
    a: f64,
}

impl Weibull {
    /// Creates the distribution.
    pub fn new(a: f64) -> Result<Self> {
        validate::non_negative("a", a)?;
        Ok(Self { a })
    }
}

impl Distribution for Weibull {
    type Output = f64;

    fn sample<B: BitGenerator + ?Sized>(&self, bitgen: &mut B) -> Result<f64> {
        continuous::random_weibull(bitgen, self.a)
    }
}

/// Pareto II (Lomax) with shape `a > 0`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Pareto {
    a: f64,
}

impl Pareto {
    /// Creates the distribution.
    pub fn new(a: f64) -> Result<Self> {
        validate::positive("a", a)?;
        Ok(Self { a })
    }
}

impl Distribution for Pareto {
    type Output = f64;

    fn sample<B: BitGenerator + ?Sized>(&self, bitgen: &mut B) -> Result<f64> {
        continuous::random_pareto(bitgen, self.a)
    }
}

/// Power-function with exponent `a > 0`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Power {
    a: f64,
}

impl Power {
    /// Creates the distribution.
    pub fn new(a: f64) -> Result<Self> {
        validate::positive("a", a)?;
        Ok(Self { a })
    }
}

impl Distribution for Power {
    type Output = f64;

    fn sample<B: BitGenerator + ?Sized>(&self, bitgen: &mut B) -> Result<f64> {
        continuous::random_power(bitgen, self.a)
    }
}

/// Wald (inverse Gaussian).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Wald {
    mean: f64,
    scale: f64,
}

impl Wald {
    /// Creates the distribution; requires `mean > 0` and `scale > 0`.
    pub fn new(mean: f64, scale: f64) -> Result<Self> {
        validate::positive("mean", mean)?;
        validate::positive("scale", scale)?;
        Ok(Self { mean, scale })
    }
}

impl Distribution for Wald {
    type Output = f64;

    fn sample<B: BitGenerator + ?Sized>(&self, bitgen: &mut B) -> Result<f64> {
        continuous::random_wald(bitgen, self.mean, self.scale)
    }
}

/// von Mises on the circle.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct VonMises {
    mu: f64,
    kappa: f64,
}

impl VonMises {
    /// Creates the distribution; requires finite `mu` and `kappa >= 0`.
    pub fn new(mu: f64, kappa: f64) -> Result<Self> {
        validate::finite("mu", mu)?;
        validate::non_negative("kappa", kappa)?;
        Ok(Self { mu, kappa })
    }
}

impl Distribution for VonMises {
    type Output = f64;

    fn sample<B: BitGenerator + ?Sized>(&self, bitgen: &mut B) -> Result<f64> {
        continuous::random_vonmises(bitgen, self.mu, self.kappa)
    }
}

/// Triangular on `[left, right]` peaking at `mode`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Triangular {
    left: f64,
    mode: f64,
    right: f64,
}

impl Triangular {
    /// Creates the distribution; requires `left <= mode <= right` and
    /// `left < right`.
    pub fn new(left: f64, mode: f64, right: f64) -> Result<Self> {
        validate::finite("left", left)?;
        validate::finite("mode", mode)?;
        validate::finite("right", right)?;
        if left > mode || mode > right || left == right {
            return Err(RandomError::invalid_parameter(
                "mode",
                format!(
                    "must satisfy left <= mode <= right with left < right, got {} {} {}",
                    left, mode, right
                ),
            ));
        }
        Ok(Self { left, mode, right })
    }
}

impl Distribution for Triangular {
    type Output = f64;

    fn sample<B: BitGenerator + ?Sized>(&self, bitgen: &mut B) -> Result<f64> {
        continuous::random_triangular(bitgen, self.left, self.mode, self.right)
    }
}

// ========================================
// Discrete
// ========================================

/// Binomial: successes in `n` trials with probability `p`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Binomial {
    n: i64,
    p: f64,
}

impl Binomial {
    /// Creates the distribution; requires `n >= 0` and `0 <= p <= 1`.
    pub fn new(n: i64, p: f64) -> Result<Self> {
        check_binomial(n, p)?;
        Ok(Self { n, p })
    }
}

impl Distribution for Binomial {
    type Output = i64;

    #[inline]
    fn sample<B: BitGenerator + ?Sized>(&self, bitgen: &mut B) -> Result<i64> {
        draw_binomial(bitgen, self.n, self.p)
    }
}

/// Poisson with rate `lam`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Poisson {
    lam: f64,
}

impl Poisson {
    /// Creates the distribution; requires `0 <= lam <= POISSON_LAM_MAX`.
    pub fn new(lam: f64) -> Result<Self> {
        check_poisson(lam)?;
        Ok(Self { lam })
    }
}

impl Distribution for Poisson {
    type Output = i64;

    #[inline]
    fn sample<B: BitGenerator + ?Sized>(&self, bitgen: &mut B) -> Result<i64> {
        draw_poisson(bitgen, self.lam)
    }
}

/// Geometric on `{1, 2, ...}`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Geometric {
    p: f64,
}

impl Geometric {
    /// Creates the distribution; requires `0 < p <= 1`.
    pub fn new(p: f64) -> Result<Self> {
        validate::success_probability("p", p)?;
        Ok(Self { p })
    }
}

impl Distribution for Geometric {
    type Output = i64;

    fn sample<B: BitGenerator + ?Sized>(&self, bitgen: &mut B) -> Result<i64> {
        discrete::random_geometric(bitgen, self.p)
    }
}

/// Negative binomial: failures before the `n`-th success.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct NegativeBinomial {
    n: f64,
    p: f64,
}

impl NegativeBinomial {
    /// Creates the distribution; requires `n > 0`, `0 < p <= 1` and a mean
    /// `n (1 - p) / p` within [`discrete::POISSON_LAM_MAX`].
    pub fn new(n: f64, p: f64) -> Result<Self> {
        discrete::check_negative_binomial(n, p)?;
        Ok(Self { n, p })
    }
}

impl Distribution for NegativeBinomial {
    type Output = i64;

    fn sample<B: BitGenerator + ?Sized>(&self, bitgen: &mut B) -> Result<i64> {
        discrete::random_negative_binomial(bitgen, self.n, self.p)
    }
}

/// Hypergeometric: good items among `sample` drawn without replacement.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Hypergeometric {
    good: i64,
    bad: i64,
    sample: i64,
}

impl Hypergeometric {
    /// Creates the distribution; requires non-negative counts and
    /// `sample <= good + bad`.
    pub fn new(good: i64, bad: i64, sample: i64) -> Result<Self> {
        check_hypergeometric(good, bad, sample)?;
        Ok(Self { good, bad, sample })
    }
}

impl Distribution for Hypergeometric {
    type Output = i64;

    fn sample<B: BitGenerator + ?Sized>(&self, bitgen: &mut B) -> Result<i64> {
        discrete::random_hypergeometric(bitgen, self.good, self.bad, self.sample)
    }
}

/// Logarithmic series on `{1, 2, ...}`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LogSeries {
    p: f64,
}

impl LogSeries {
    /// Creates the distribution; requires `0 < p < 1`.
    pub fn new(p: f64) -> Result<Self> {
        validate::success_probability("p", p)?;
        if p >= 1.0 {
            return Err(RandomError::invalid_parameter("p", "must be < 1"));
        }
        Ok(Self { p })
    }
}

impl Distribution for LogSeries {
    type Output = i64;

    fn sample<B: BitGenerator + ?Sized>(&self, bitgen: &mut B) -> Result<i64> {
        discrete::random_logseries(bitgen, self.p)
    }
}

/// Zipf on `{1, 2, ...}` with exponent `a > 1`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Zipf {
    a: f64,
}

impl Zipf {
    /// Creates the distribution.
    pub fn new(a: f64) -> Result<Self> {
        validate::finite("a", a)?;
        if a <= 1.0 {
            return Err(RandomError::invalid_parameter("a", format!("must be > 1, got {}", a)));
        }
        Ok(Self { a })
    }
}

impl Distribution for Zipf {
    type Output = i64;

    fn sample<B: BitGenerator + ?Sized>(&self, bitgen: &mut B) -> Result<i64> {
        discrete::random_zipf(bitgen, self.a)
    }
}

// ========================================
// Multivariate
// ========================================

/// Multinomial counts over `pvals.len()` categories.
#[derive(Clone, Debug, PartialEq)]
pub struct Multinomial {
    n: i64,
    pvals: Vec<f64>,
}

impl Multinomial {
    /// Creates the distribution. The last probability is implied by the
    /// others; only the leading ones must sum to at most one.
    pub fn new(n: i64, pvals: Vec<f64>) -> Result<Self> {
        check_multinomial(n, &pvals)?;
        Ok(Self { n, pvals })
    }
}

impl Distribution for Multinomial {
    type Output = Vec<i64>;

    fn sample<B: BitGenerator + ?Sized>(&self, bitgen: &mut B) -> Result<Vec<i64>> {
        let mut out = vec![0; self.pvals.len()];
        random_multinomial(bitgen, self.n, &self.pvals, &mut out)?;
        Ok(out)
    }
}

/// Dirichlet on the probability simplex.
#[derive(Clone, Debug, PartialEq)]
pub struct Dirichlet {
    alpha: Vec<f64>,
}

impl Dirichlet {
    /// Creates the distribution; requires a non-empty, strictly positive
    /// `alpha`.
    pub fn new(alpha: Vec<f64>) -> Result<Self> {
        check_dirichlet(&alpha)?;
        Ok(Self { alpha })
    }
}

impl Distribution for Dirichlet {
    type Output = Vec<f64>;

    fn sample<B: BitGenerator + ?Sized>(&self, bitgen: &mut B) -> Result<Vec<f64>> {
        let mut out = vec![0.0; self.alpha.len()];
        random_dirichlet(bitgen, &self.alpha, &mut out)?;
        Ok(out)
    }
}
