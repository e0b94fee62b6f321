//! Capability traits for bit generators.
//!
//! - [`BitGenerator`]: raw output, conversions, state snapshots, jump/advance
//! - [`SeedableBitGenerator`]: construction from seed material or snapshots

mod bit_generator;

pub use bit_generator::{BitGenerator, SeedableBitGenerator, DOUBLE_UNIT, FLOAT_UNIT};
