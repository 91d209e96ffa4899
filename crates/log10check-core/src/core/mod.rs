//! Core types for logarithm conformance checks.

pub mod cases;
pub mod error;
pub mod traits;
pub mod types;

// Re-export core types
pub use cases::*;
pub use error::*;
pub use traits::*;
pub use types::*;
