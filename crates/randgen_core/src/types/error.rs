//! Error types for structured error handling.
//!
//! This module provides [`RandomError`], the single error taxonomy shared by
//! bit generators, the sampling engine and the generator façade.
//!
//! Parameter validation always happens before any state is consumed, so a
//! caller that receives [`RandomError::InvalidParameter`] can rely on the
//! generator being exactly where it was before the call.

use thiserror::Error;

use super::kind::BitGeneratorKind;

/// Categorised random generation errors.
///
/// # Variants
/// - `InvalidParameter`: distribution parameters or seed material out of domain
/// - `UnsupportedOperation`: the bit generator variant lacks the capability
/// - `SerializationMismatch`: a state snapshot does not fit the target variant
/// - `InternalError`: a rejection loop exceeded its safety bound
/// - `EntropyUnavailable`: the operating system entropy source failed
///
/// # Examples
/// ```
/// use randgen_core::types::RandomError;
///
/// let err = RandomError::invalid_parameter("n", "must be non-negative, got -1");
/// assert_eq!(
///     format!("{}", err),
///     "Invalid parameter 'n': must be non-negative, got -1"
/// );
/// ```
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RandomError {
    /// Distribution parameter or seed material outside its valid domain.
    #[error("Invalid parameter '{name}': {reason}")]
    InvalidParameter {
        /// Parameter name as exposed to the caller
        name: &'static str,
        /// Human readable description of the violated constraint
        reason: String,
    },

    /// Operation not provided by this bit generator variant.
    #[error("Operation '{operation}' is not supported by {kind}")]
    UnsupportedOperation {
        /// Variant that was asked
        kind: BitGeneratorKind,
        /// Operation name (e.g. `jump`, `advance`)
        operation: &'static str,
    },

    /// State snapshot incompatible with the target variant.
    #[error("State snapshot does not match {kind}: {reason}")]
    SerializationMismatch {
        /// Variant the snapshot was applied to
        kind: BitGeneratorKind,
        /// What did not match
        reason: String,
    },

    /// A rejection sampler gave up after its safety bound.
    #[error("Sampler '{distribution}' exceeded {attempts} rejection attempts")]
    InternalError {
        /// Sampler that failed
        distribution: &'static str,
        /// Number of attempts made
        attempts: u32,
    },

    /// The entropy source could not provide seed material.
    #[error("Entropy source unavailable: {0}")]
    EntropyUnavailable(String),
}

impl RandomError {
    /// Builds an [`RandomError::InvalidParameter`] error.
    #[inline]
    pub fn invalid_parameter(name: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidParameter {
            name,
            reason: reason.into(),
        }
    }

    /// Builds an [`RandomError::UnsupportedOperation`] error.
    #[inline]
    pub fn unsupported(kind: BitGeneratorKind, operation: &'static str) -> Self {
        Self::UnsupportedOperation { kind, operation }
    }

    /// Builds an [`RandomError::SerializationMismatch`] error.
    #[inline]
    pub fn mismatch(kind: BitGeneratorKind, reason: impl Into<String>) -> Self {
        Self::SerializationMismatch {
            kind,
            reason: reason.into(),
        }
    }
}

/// Result alias used throughout the randgen crates.
pub type Result<T> = std::result::Result<T, RandomError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_parameter_display() {
        let err = RandomError::invalid_parameter("p", "must lie in [0, 1], got 1.5");
        assert_eq!(err.to_string(), "Invalid parameter 'p': must lie in [0, 1], got 1.5");
    }

    #[test]
    fn test_unsupported_display() {
        let err = RandomError::unsupported(BitGeneratorKind::SplitMix64, "jump");
        assert_eq!(
            err.to_string(),
            "Operation 'jump' is not supported by splitmix64"
        );
    }

    #[test]
    fn test_mismatch_display() {
        let err = RandomError::mismatch(BitGeneratorKind::Pcg64, "increment must be odd");
        assert!(err.to_string().contains("pcg64"));
        assert!(err.to_string().contains("increment must be odd"));
    }

    #[test]
    fn test_internal_error_display() {
        let err = RandomError::InternalError {
            distribution: "standard_gamma",
            attempts: 1 << 20,
        };
        assert!(err.to_string().contains("standard_gamma"));
        assert!(err.to_string().contains("1048576"));
    }

    #[test]
    fn test_error_is_clone_and_eq() {
        let err = RandomError::EntropyUnavailable("no device".to_string());
        assert_eq!(err.clone(), err);
    }
}
