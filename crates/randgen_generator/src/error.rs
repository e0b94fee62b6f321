//! Error types for generator configuration.
//!
//! Sampling and state errors are [`RandomError`]s; this module adds the
//! failures that can only happen while loading or validating a
//! [`crate::config::GeneratorConfig`].

use randgen_core::RandomError;
use thiserror::Error;

use crate::config::MAX_STREAMS;

/// Configuration error for generator construction.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Stream count outside `[1, MAX_STREAMS]`.
    #[error("Invalid stream count {0}: must be in range [1, {max}]", max = MAX_STREAMS)]
    InvalidStreamCount(usize),

    /// Configuration file could not be read.
    #[error("Configuration file error: {0}")]
    FileError(String),

    /// Configuration text is not valid TOML or has unknown fields.
    #[error("Configuration parse error: {0}")]
    ParseError(String),

    /// Seed material or generator construction failed.
    #[error(transparent)]
    Random(#[from] RandomError),
}

#[cfg(test)]
mod tests {
    use super::*;
    use randgen_core::BitGeneratorKind;

    #[test]
    fn test_config_error_display() {
        let err = ConfigError::InvalidStreamCount(0);
        assert_eq!(
            err.to_string(),
            "Invalid stream count 0: must be in range [1, 4096]"
        );

        let err = ConfigError::FileError("missing.toml: not found".to_string());
        assert!(err.to_string().contains("missing.toml"));
    }

    #[test]
    fn test_random_error_is_transparent() {
        let inner = RandomError::unsupported(BitGeneratorKind::SplitMix64, "jump");
        let err = ConfigError::from(inner.clone());
        assert_eq!(err.to_string(), inner.to_string());
        assert_eq!(err, ConfigError::Random(inner));
    }
}
