//! Conformance checker for base-10 logarithm implementations.
//!
//! This crate re-exports [`log10check_core`] and provides the command-line
//! driver used by the `log10check` binary.

pub mod cli;

pub use log10check_core::{config, prelude, validation, ConformanceError, Result};

/// Core error, scalar and table types.
pub mod types {
    pub use log10check_core::core::*;
}
