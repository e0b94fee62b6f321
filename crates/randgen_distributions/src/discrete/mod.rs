//! Discrete distribution kernels.
//!
//! Counts are returned as `i64`. Parameters are checked before any bits
//! are drawn.

mod binomial;
mod hypergeometric;
mod misc;
mod poisson;

pub use binomial::random_binomial;
pub use hypergeometric::random_hypergeometric;
pub use misc::{random_geometric, random_logseries, random_negative_binomial, random_zipf};
pub use poisson::{random_poisson, POISSON_LAM_MAX};

pub(crate) use binomial::{check_binomial, draw_binomial};
pub(crate) use hypergeometric::check_hypergeometric;
pub(crate) use misc::check_negative_binomial;
pub(crate) use poisson::{check_poisson, draw_poisson};
