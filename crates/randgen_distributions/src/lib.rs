//! # randgen_distributions: Sampling Engine
//!
//! ## Layer 2 (Distributions) Role
//!
//! randgen_distributions turns raw bits from any
//! [`randgen_core::BitGenerator`] into samples from named distributions:
//! - Uniform real and integer draws (`uniform`)
//! - Ziggurat normal and exponential, the gamma family and the remaining
//!   continuous distributions (`continuous`)
//! - Binomial, Poisson, hypergeometric and other counts (`discrete`)
//! - Multinomial and Dirichlet vectors (`multivariate`)
//! - Validated parameter value objects implementing [`Distribution`]
//!   (`params`)
//!
//! Kernels are free functions generic over `B: BitGenerator + ?Sized`, so
//! they accept concrete generators, `AnyBitGenerator` and trait objects
//! alike. Every kernel checks its parameters before drawing any bits and
//! every rejection loop is bounded by [`MAX_ATTEMPTS`].
//!
//! ## Usage Examples
//!
//! ```rust
//! use randgen_core::generators::Pcg64;
//! use randgen_core::SeedableBitGenerator;
//! use randgen_distributions::continuous::random_standard_normal;
//! use randgen_distributions::{Binomial, Distribution};
//!
//! let mut rng = Pcg64::seed_from_u64(42);
//! let z = random_standard_normal(&mut rng).unwrap();
//! assert!(z.is_finite());
//!
//! let binomial = Binomial::new(10, 0.5).unwrap();
//! let k = binomial.sample(&mut rng).unwrap();
//! assert!((0..=10).contains(&k));
//! ```

#![warn(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod attempts;
pub mod continuous;
pub mod discrete;
pub mod multivariate;
pub mod params;
pub mod special;
pub mod traits;
pub mod uniform;

mod validate;

pub use attempts::MAX_ATTEMPTS;
pub use params::{
    Beta, Binomial, ChiSquared, Dirichlet, Exponential, FisherF, Gamma, Geometric,
    Hypergeometric, LocationScale, LocationScaleFamily, LogNormal, LogSeries, Multinomial,
    NegativeBinomial, NoncentralChiSquared, NoncentralF, Normal, Pareto, Poisson, Power,
    Rayleigh, StandardCauchy, StandardExponential, StandardNormal, StandardUniform, StudentT,
    Triangular, UniformInt, Uniform, VonMises, Wald, Weibull, Zipf,
};
pub use traits::Distribution;
