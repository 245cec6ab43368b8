//! abigen Compiler
//!
//! Compiles contract ABI fragments into named, exported, read-only constants
//! that can be statically imported from TypeScript.

pub mod ast;
pub mod codegen;
pub mod dedup;
pub mod group;
pub mod ident;
pub mod key;
pub mod parser;

pub use ast::{
    aggregate_export, build_module, declaration_for, literal_for, Module, ModuleBuilder, Node,
};
pub use codegen::{render_module, AggregateStyle, CodegenConfig, TypeScriptPrinter};
pub use dedup::deduplicate;
pub use group::DestinationGroups;
pub use ident::{assign_identifiers, filter_nameable, Assigned};
pub use key::canonical_key;
pub use parser::{destination_for, is_excluded, parse_artifact, Artifact, DEFAULT_EXCLUDE};

// Re-export runtime types for convenience
pub use abigen_runtime::{AbigenError, Fragment, FragmentKind, Param, Result};
