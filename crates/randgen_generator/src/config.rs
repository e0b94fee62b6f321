//! Generator configuration.
//!
//! A [`GeneratorConfig`] names the bit generator algorithm, the seed and the
//! number of parallel streams. It is loaded from TOML or assembled with
//! [`GeneratorConfigBuilder`]; both paths validate before returning.
//!
//! ```toml
//! kind = "philox"
//! seed = 12345          # or a word list: seed = [1, 2, 3]
//! streams = 8
//! ```
//!
//! Without a `seed` the generator is seeded from operating system entropy
//! each time it is built.

use std::path::Path;

use serde::{Deserialize, Serialize};

use randgen_core::{BitGeneratorKind, RandomError, SeedSequence};

use crate::error::ConfigError;
use crate::generator::Generator;
use crate::streams::StreamSet;

/// Maximum number of parallel streams.
pub const MAX_STREAMS: usize = 4096;

/// Algorithm used when the configuration does not name one.
pub const DEFAULT_KIND: BitGeneratorKind = BitGeneratorKind::Pcg64;

/// Seed material as written in a configuration file.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SeedSpec {
    /// A single integer seed.
    Integer(u64),
    /// A non-empty list of 32-bit words.
    Words(Vec<u32>),
}

impl SeedSpec {
    /// Converts to seed material.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Random`] for an empty word list.
    pub fn to_seed_sequence(&self) -> Result<SeedSequence, ConfigError> {
        match self {
            SeedSpec::Integer(value) => Ok(SeedSequence::from_u64(*value)),
            SeedSpec::Words(words) => Ok(SeedSequence::from_words(words.clone())?),
        }
    }
}

fn default_kind() -> BitGeneratorKind {
    DEFAULT_KIND
}

fn default_streams() -> usize {
    1
}

/// Generator configuration.
///
/// # Examples
///
/// ```rust
/// use randgen_core::BitGeneratorKind;
/// use randgen_generator::GeneratorConfig;
///
/// let config = GeneratorConfig::builder()
///     .kind(BitGeneratorKind::Threefry)
///     .seed(42)
///     .streams(4)
///     .build()
///     .expect("valid configuration");
///
/// let streams = config.build_streams().unwrap();
/// assert_eq!(streams.len(), 4);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GeneratorConfig {
    /// Bit generator algorithm.
    #[serde(default = "default_kind")]
    kind: BitGeneratorKind,
    /// Seed material; `None` means OS entropy.
    #[serde(default)]
    seed: Option<SeedSpec>,
    /// Number of parallel streams.
    #[serde(default = "default_streams")]
    streams: usize,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            kind: DEFAULT_KIND,
            seed: None,
            streams: 1,
        }
    }
}

impl GeneratorConfig {
    /// Creates a new configuration builder.
    #[inline]
    pub fn builder() -> GeneratorConfigBuilder {
        GeneratorConfigBuilder::default()
    }

    /// Parses and validates a TOML document.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::ParseError`] for malformed TOML, an unknown
    /// key or an unknown algorithm name, and the validation errors of
    /// [`validate`](Self::validate).
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        let config: GeneratorConfig =
            toml::from_str(text).map_err(|e| ConfigError::ParseError(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Loads and validates a TOML file.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::FileError`] if the file cannot be read, then as
    /// for [`from_toml_str`](Self::from_toml_str).
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|e| {
            ConfigError::FileError(format!("Failed to read {}: {}", path.display(), e))
        })?;
        Self::from_toml_str(&text)
    }

    /// Returns the bit generator algorithm.
    #[inline]
    pub fn kind(&self) -> BitGeneratorKind {
        self.kind
    }

    /// Returns the configured seed, if any.
    #[inline]
    pub fn seed(&self) -> Option<&SeedSpec> {
        self.seed.as_ref()
    }

    /// Returns the number of parallel streams.
    #[inline]
    pub fn streams(&self) -> usize {
        self.streams
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if:
    /// - `streams` is 0 or greater than 4096
    /// - `streams > 1` and the algorithm has no jump
    /// - the seed is an empty word list
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.streams == 0 || self.streams > MAX_STREAMS {
            return Err(ConfigError::InvalidStreamCount(self.streams));
        }
        if self.streams > 1 && !self.kind.supports_jump() {
            return Err(RandomError::unsupported(self.kind, "jump").into());
        }
        if let Some(seed) = &self.seed {
            seed.to_seed_sequence()?;
        }
        Ok(())
    }

    /// Returns the seed material, drawing from OS entropy when no seed is
    /// configured.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Random`] if entropy is unavailable.
    pub fn seed_sequence(&self) -> Result<SeedSequence, ConfigError> {
        match &self.seed {
            Some(seed) => seed.to_seed_sequence(),
            None => Ok(SeedSequence::from_entropy()?),
        }
    }

    /// Builds the root generator.
    pub fn build_generator(&self) -> Result<Generator, ConfigError> {
        let seed = self.seed_sequence()?;
        tracing::debug!(kind = %self.kind, seeded = self.seed.is_some(), "generator configured");
        Ok(Generator::from_kind(self.kind, &seed))
    }

    /// Builds the root generator and derives `streams` streams from it.
    pub fn build_streams(&self) -> Result<StreamSet, ConfigError> {
        let root = self.build_generator()?;
        Ok(StreamSet::from_root(&root, self.streams)?)
    }
}

/// Builder for [`GeneratorConfig`].
///
/// Validation happens at [`build`](Self::build).
#[derive(Clone, Debug, Default)]
pub struct GeneratorConfigBuilder {
    kind: Option<BitGeneratorKind>,
    seed: Option<SeedSpec>,
    streams: Option<usize>,
}

impl GeneratorConfigBuilder {
    /// Sets the bit generator algorithm (default PCG64).
    #[inline]
    pub fn kind(mut self, kind: BitGeneratorKind) -> Self {
        self.kind = Some(kind);
        self
    }

    /// Sets an integer seed.
    #[inline]
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(SeedSpec::Integer(seed));
        self
    }

    /// Sets a word-list seed.
    #[inline]
    pub fn seed_words(mut self, words: Vec<u32>) -> Self {
        self.seed = Some(SeedSpec::Words(words));
        self
    }

    /// Sets the number of parallel streams.
    ///
    /// # Arguments
    ///
    /// * `streams` - Number of streams in [1, 4096]
    #[inline]
    pub fn streams(mut self, streams: usize) -> Self {
        self.streams = Some(streams);
        self
    }

    /// Builds and validates the configuration.
    ///
    /// # Errors
    ///
    /// As for [`GeneratorConfig::validate`].
    pub fn build(self) -> Result<GeneratorConfig, ConfigError> {
        let config = GeneratorConfig {
            kind: self.kind.unwrap_or(DEFAULT_KIND),
            seed: self.seed,
            streams: self.streams.unwrap_or(1),
        };
        config.validate()?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_defaults() {
        let config = GeneratorConfig::builder().build().unwrap();
        assert_eq!(config, GeneratorConfig::default());
        assert_eq!(config.kind(), BitGeneratorKind::Pcg64);
        assert_eq!(config.streams(), 1);
        assert!(config.seed().is_none());
    }

    #[test]
    fn test_builder_rejects_stream_counts() {
        for n in [0, MAX_STREAMS + 1] {
            assert_eq!(
                GeneratorConfig::builder().streams(n).build(),
                Err(ConfigError::InvalidStreamCount(n))
            );
        }
        assert!(GeneratorConfig::builder().streams(MAX_STREAMS).build().is_ok());
    }

    #[test]
    fn test_streams_need_jump() {
        let result = GeneratorConfig::builder()
            .kind(BitGeneratorKind::SplitMix64)
            .streams(2)
            .build();
        assert!(matches!(
            result,
            Err(ConfigError::Random(RandomError::UnsupportedOperation { .. }))
        ));
    }

    #[test]
    fn test_empty_seed_words_rejected() {
        let result = GeneratorConfig::builder().seed_words(Vec::new()).build();
        assert!(matches!(
            result,
            Err(ConfigError::Random(RandomError::InvalidParameter { .. }))
        ));
    }

    #[test]
    fn test_from_toml_integer_and_word_seeds() {
        let config = GeneratorConfig::from_toml_str("kind = \"mt19937\"\nseed = 42\n").unwrap();
        assert_eq!(config.kind(), BitGeneratorKind::Mt19937);
        assert_eq!(config.seed(), Some(&SeedSpec::Integer(42)));

        let config = GeneratorConfig::from_toml_str("seed = [1, 2, 3]\nstreams = 8\n").unwrap();
        assert_eq!(config.kind(), DEFAULT_KIND);
        assert_eq!(config.seed(), Some(&SeedSpec::Words(vec![1, 2, 3])));
        assert_eq!(config.streams(), 8);
    }

    #[test]
    fn test_from_toml_errors() {
        assert!(matches!(
            GeneratorConfig::from_toml_str("kind = \"rot13\""),
            Err(ConfigError::ParseError(_))
        ));
        assert!(matches!(
            GeneratorConfig::from_toml_str("kind = \"pcg64\"\ncolour = \"blue\""),
            Err(ConfigError::ParseError(_))
        ));
        assert_eq!(
            GeneratorConfig::from_toml_str("streams = 0"),
            Err(ConfigError::InvalidStreamCount(0))
        );
    }

    #[test]
    fn test_from_missing_file() {
        let result = GeneratorConfig::from_file("/nonexistent/randgen.toml");
        assert!(matches!(result, Err(ConfigError::FileError(_))));
    }

    #[test]
    fn test_seeded_config_is_reproducible() {
        let config = GeneratorConfig::builder().seed(7).build().unwrap();
        let mut a = config.build_generator().unwrap();
        let mut b = config.build_generator().unwrap();
        assert_eq!(a.random_raw(), b.random_raw());
    }
}
