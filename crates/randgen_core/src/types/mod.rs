//! Core value types shared by every bit generator.
//!
//! This module provides:
//! - `error`: the [`RandomError`] taxonomy and the crate [`Result`] alias
//! - `kind`: the closed set of bit generator variants ([`BitGeneratorKind`])
//! - `state`: serialisable state snapshots ([`BitGeneratorState`], [`StateAux`])

pub mod error;
pub mod kind;
pub mod state;

// Re-export commonly used types at module level
pub use error::{RandomError, Result};
pub use kind::BitGeneratorKind;
pub use state::{BitGeneratorState, StateAux};
