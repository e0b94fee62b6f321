//! Multinomial and Dirichlet sampling into caller-provided slices.

use randgen_core::{BitGenerator, RandomError, Result};

use crate::continuous::{draw_beta, draw_standard_gamma};
use crate::discrete::draw_binomial;
use crate::validate;

/// Tolerance on the sum of all but the last category probability.
const PVALS_SUM_TOLERANCE: f64 = 1e-12;

/// Below this every-α threshold the Dirichlet uses stick-breaking, which
/// stays accurate when all gamma draws would underflow.
const DIRICHLET_STICK_BREAKING_ALPHA: f64 = 0.1;

/// Multinomial counts for `n` trials over the categories in `pvals`,
/// written to `out`.
///
/// Categories are filled by sequential conditional binomials. The last
/// probability is implied: whatever trials remain land in the last
/// category.
///
/// # Errors
///
/// Returns [`RandomError::InvalidParameter`] if `n < 0`, `pvals` is empty,
/// `out.len() != pvals.len()`, any probability lies outside `[0, 1]`, or
/// the leading probabilities sum to more than one.
pub fn random_multinomial<B: BitGenerator + ?Sized>(
    bitgen: &mut B,
    n: i64,
    pvals: &[f64],
    out: &mut [i64],
) -> Result<()> {
    check_multinomial(n, pvals)?;
    if out.len() != pvals.len() {
        return Err(RandomError::invalid_parameter(
            "out",
            format!("length {} does not match {} categories", out.len(), pvals.len()),
        ));
    }
    out.fill(0);
    let last = pvals.len() - 1;
    let mut remaining_p = 1.0;
    let mut remaining_n = n;
    for (j, &p) in pvals[..last].iter().enumerate() {
        let conditional = if remaining_p > 0.0 {
            (p / remaining_p).min(1.0)
        } else {
            1.0
        };
        out[j] = draw_binomial(bitgen, remaining_n, conditional)?;
        remaining_n -= out[j];
        if remaining_n <= 0 {
            break;
        }
        remaining_p -= p;
    }
    if remaining_n > 0 {
        out[last] = remaining_n;
    }
    Ok(())
}

pub(crate) fn check_multinomial(n: i64, pvals: &[f64]) -> Result<()> {
    validate::non_negative_count("n", n)?;
    if pvals.is_empty() {
        return Err(RandomError::invalid_parameter("pvals", "must not be empty"));
    }
    for &p in pvals {
        validate::probability("pvals", p)?;
    }
    let leading: f64 = pvals[..pvals.len() - 1].iter().sum();
    if leading > 1.0 + PVALS_SUM_TOLERANCE {
        return Err(RandomError::invalid_parameter(
            "pvals",
            format!("sum of pvals[:-1] must be <= 1, got {}", leading),
        ));
    }
    Ok(())
}

/// Dirichlet variate with concentration `alpha`, written to `out`.
///
/// # Errors
///
/// Returns [`RandomError::InvalidParameter`] if `alpha` is empty, any
/// entry is not strictly positive and finite, or the lengths differ.
pub fn random_dirichlet<B: BitGenerator + ?Sized>(
    bitgen: &mut B,
    alpha: &[f64],
    out: &mut [f64],
) -> Result<()> {
    check_dirichlet(alpha)?;
    if out.len() != alpha.len() {
        return Err(RandomError::invalid_parameter(
            "out",
            format!("length {} does not match {} components", out.len(), alpha.len()),
        ));
    }
    let k = alpha.len();

    if alpha.iter().all(|&a| a < DIRICHLET_STICK_BREAKING_ALPHA) {
        // tail_sum[j] = alpha[j] + ... + alpha[k - 1]
        let mut tail_sum = vec![0.0; k + 1];
        for j in (0..k).rev() {
            tail_sum[j] = tail_sum[j + 1] + alpha[j];
        }
        let mut stick = 1.0;
        for j in 0..k - 1 {
            let v = draw_beta(bitgen, alpha[j], tail_sum[j + 1])?;
            out[j] = stick * v;
            stick *= 1.0 - v;
        }
        out[k - 1] = stick;
        return Ok(());
    }

    let mut total = 0.0;
    for (slot, &a) in out.iter_mut().zip(alpha) {
        *slot = draw_standard_gamma(bitgen, a)?;
        total += *slot;
    }
    let inv_total = 1.0 / total;
    for slot in out.iter_mut() {
        *slot *= inv_total;
    }
    Ok(())
}

pub(crate) fn check_dirichlet(alpha: &[f64]) -> Result<()> {
    if alpha.is_empty() {
        return Err(RandomError::invalid_parameter("alpha", "must not be empty"));
    }
    for &a in alpha {
        validate::positive("alpha", a)?;
    }
    Ok(())
}
