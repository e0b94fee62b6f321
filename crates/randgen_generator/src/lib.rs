//! # randgen_generator: Generator Façade
//!
//! ## Layer 3 (Generator) Role
//!
//! randgen_generator ties a bit generator to the sampling engine and adds
//! the pieces callers use day to day:
//! - [`Generator`]: scalar draws, batch fills, shuffling and
//!   `rand::RngCore` interop over any bit generator
//! - [`StreamSet`]: independent streams derived by repeated jumps, with
//!   deterministic parallel fills on the rayon pool
//! - [`GeneratorConfig`]: algorithm, seed and stream count loaded from TOML
//!   or built fluently
//!
//! ## Usage Examples
//!
//! ```rust
//! use randgen_core::{BitGeneratorKind, SeedSequence};
//! use randgen_generator::{Generator, GeneratorConfig};
//!
//! // Explicit construction.
//! let mut rng = Generator::from_kind(BitGeneratorKind::Xoroshiro128, &SeedSequence::from(1_u64));
//! let snapshot = rng.state();
//! let first = rng.standard_normal().unwrap();
//!
//! rng.set_state(&snapshot).unwrap();
//! assert_eq!(rng.standard_normal().unwrap(), first);
//!
//! // From configuration.
//! let toml = "kind = \"philox\"\nseed = 7\nstreams = 2";
//! let config = GeneratorConfig::from_toml_str(toml).unwrap();
//! let mut streams = config.build_streams().unwrap();
//! let mut out = vec![0.0; 64];
//! streams.par_fill_with(&mut out, |g| g.uniform(-1.0, 1.0)).unwrap();
//! ```

#![warn(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod config;
pub mod error;
pub mod generator;
pub mod streams;

pub use config::{GeneratorConfig, GeneratorConfigBuilder, SeedSpec, MAX_STREAMS};
pub use error::ConfigError;
pub use generator::Generator;
pub use streams::StreamSet;
