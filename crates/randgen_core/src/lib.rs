//! # randgen_core: Bit Generators for Reproducible Random Streams
//!
//! ## Layer 1 (Foundation) Role
//!
//! randgen_core is the bottom layer of the three-layer architecture,
//! providing:
//! - The bit generator contract (`traits::BitGenerator`)
//! - Seven interchangeable algorithms plus SplitMix64 (`generators`)
//! - Seed material and the entropy boundary (`seed::SeedSequence`)
//! - Serialisable state snapshots (`types::BitGeneratorState`)
//! - The shared error taxonomy (`types::RandomError`)
//!
//! The sampling engine (`randgen_distributions`) and the generator façade
//! (`randgen_generator`) build on these types without knowing which
//! algorithm produces the bits.
//!
//! ## Reproducibility
//!
//! Every output is a pure function of the algorithm and its state. There
//! is no global generator: callers own their generators and pass them by
//! `&mut` reference.
//!
//! ## Usage Examples
//!
//! ```rust
//! use randgen_core::generators::{Mt19937, Philox};
//! use randgen_core::traits::{BitGenerator, SeedableBitGenerator};
//!
//! let mut mt = Mt19937::seed_from_u64(42);
//! let u = mt.next_double();
//! assert!((0.0..1.0).contains(&u));
//!
//! // Independent stream 2^128 blocks further along.
//! let philox = Philox::seed_from_u64(42);
//! let mut stream = philox.jumped(1).unwrap();
//! let _ = stream.next_u64();
//! ```

#![warn(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod generators;
pub mod seed;
pub mod traits;
pub mod types;

pub use generators::AnyBitGenerator;
pub use seed::SeedSequence;
pub use traits::{BitGenerator, SeedableBitGenerator};
pub use types::{BitGeneratorKind, BitGeneratorState, RandomError, Result};
