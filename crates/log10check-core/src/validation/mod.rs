//! Conformance validation of `log10` implementations.

pub mod callback;
pub mod report;
pub mod validator;

// Re-export validation utilities
pub use callback::*;
pub use report::*;
pub use validator::*;
