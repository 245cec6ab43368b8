//! abigen Runtime
//!
//! Shared data model and error handling for the abigen toolkit.
//! The compiler and the CLI both speak in terms of these ABI fragments.

pub mod error;
pub mod types;

// Re-export core types for convenience
pub use error::{AbigenError, Result};
pub use types::{Fragment, FragmentKind, Param};
