//! abigen CLI
//!
//! Drives generation over a tree of compiler artifacts: discovery, parallel
//! reads, destination grouping and one written module per destination.

pub mod processor;

pub use processor::{AbiProcessor, RunReport};
