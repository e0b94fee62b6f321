//! Parameter checks shared by the kernels and value objects.
//!
//! All checks run before any bits are drawn, so a rejected call leaves the
//! bit generator untouched. NaN fails every check.

use randgen_core::{RandomError, Result};

#[inline]
pub(crate) fn finite(name: &'static str, value: f64) -> Result<()> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(RandomError::invalid_parameter(name, format!("must be finite, got {}", value)))
    }
}

#[inline]
pub(crate) fn non_negative(name: &'static str, value: f64) -> Result<()> {
    finite(name, value)?;
    if value >= 0.0 {
        Ok(())
    } else {
        Err(RandomError::invalid_parameter(name, format!("must be >= 0, got {}", value)))
    }
}

#[inline]
pub(crate) fn positive(name: &'static str, value: f64) -> Result<()> {
    finite(name, value)?;
    if value > 0.0 {
        Ok(())
    } else {
        Err(RandomError::invalid_parameter(name, format!("must be > 0, got {}", value)))
    }
}

/// `0 <= value <= 1`.
#[inline]
pub(crate) fn probability(name: &'static str, value: f64) -> Result<()> {
    if (0.0..=1.0).contains(&value) {
        Ok(())
    } else {
        Err(RandomError::invalid_parameter(name, format!("must lie in [0, 1], got {}", value)))
    }
}

/// `0 < value <= 1`.
#[inline]
pub(crate) fn success_probability(name: &'static str, value: f64) -> Result<()> {
    if value > 0.0 && value <= 1.0 {
        Ok(())
    } else {
        Err(RandomError::invalid_parameter(name, format!("must lie in (0, 1], got {}", value)))
    }
}

#[inline]
pub(crate) fn non_negative_count(name: &'static str, value: i64) -> Result<()> {
    if value >= 0 {
        Ok(())
    } else {
        Err(RandomError::invalid_parameter(name, format!("must be >= 0, got {}", value)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nan_fails_every_check() {
        assert!(finite("x", f64::NAN).is_err());
        assert!(non_negative("x", f64::NAN).is_err());
        assert!(positive("x", f64::NAN).is_err());
        assert!(probability("x", f64::NAN).is_err());
        assert!(success_probability("x", f64::NAN).is_err());
    }

    #[test]
    fn test_boundaries() {
        assert!(non_negative("x", 0.0).is_ok());
        assert!(positive("x", 0.0).is_err());
        assert!(probability("p", 0.0).is_ok());
        assert!(probability("p", 1.0).is_ok());
        assert!(success_probability("p", 0.0).is_err());
        assert!(success_probability("p", 1.0).is_ok());
        assert!(non_negative_count("n", -1).is_err());
        assert!(non_negative("scale", f64::INFINITY).is_err());
    }

    #[test]
    fn test_error_names_parameter() {
        let err = positive("shape", -1.0).unwrap_err();
        assert!(matches!(err, RandomError::InvalidParameter { name: "shape", .. }));
    }
}
