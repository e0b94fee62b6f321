//! Bounded retry guard for rejection samplers.
//!
//! Every rejection loop in this crate counts its iterations through an
//! [`Attempts`] guard. A correct bit generator never comes close to the cap;
//! a degenerate one (constant output, say) would otherwise spin forever.

use randgen_core::{RandomError, Result};

/// Maximum number of rejection iterations for a single sample.
pub const MAX_ATTEMPTS: u32 = 1 << 20;

/// Iteration counter for one rejection loop.
#[derive(Debug)]
pub(crate) struct Attempts {
    distribution: &'static str,
    count: u32,
}

impl Attempts {
    /// Starts a fresh count for `distribution`.
    #[inline]
    pub(crate) fn new(distribution: &'static str) -> Self {
        Self {
            distribution,
            count: 0,
        }
    }

    /// Records one iteration, failing once the cap is exceeded.
    #[inline]
    pub(crate) fn next(&mut self) -> Result<()> {
        self.count += 1;
        if self.count > MAX_ATTEMPTS {
            tracing::warn!(
                distribution = self.distribution,
                attempts = MAX_ATTEMPTS,
                "rejection sampler exceeded attempt cap"
            );
            return Err(RandomError::InternalError {
                distribution: self.distribution,
                attempts: MAX_ATTEMPTS,
            });
        }
        Ok(())
    }
}
