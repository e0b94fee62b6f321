//! Continuous distribution kernels.
//!
//! Every kernel takes `&mut B` for any `B: BitGenerator + ?Sized`, checks
//! its parameters before touching the generator and returns
//! [`randgen_core::Result`].

mod exponential;
mod extra;
mod gamma;
mod normal;
mod ziggurat;

pub use exponential::{
    random_exponential, random_standard_exponential, random_standard_exponential_inv,
};
pub use extra::{
    random_gumbel, random_laplace, random_logistic, random_pareto, random_power, random_rayleigh,
    random_standard_cauchy, random_standard_t, random_triangular, random_vonmises, random_wald,
    random_weibull,
};
pub use gamma::{
    random_beta, random_chisquare, random_f, random_gamma, random_noncentral_chisquare,
    random_noncentral_f, random_standard_gamma,
};
pub use normal::{random_lognormal, random_normal, random_standard_normal};

pub(crate) use gamma::{check_gamma, draw_beta, draw_chisquare, draw_standard_gamma};
pub(crate) use normal::check_normal;
