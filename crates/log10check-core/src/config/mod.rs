//! Configuration utilities for conformance runs.

pub mod run;

// Re-export key items
pub use run::{FailurePolicy, RunConfig, RunConfigBuilder};
