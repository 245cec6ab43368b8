//! Source Code Generation for abigen Modules
//!
//! Renders the declaration tree from [`crate::ast`] into TypeScript source.

pub mod typescript;

pub use typescript::TypeScriptPrinter;

use crate::ast::Module;

pub const GENERATED_HEADER: &str = "// Generated by abigen. Do not edit by hand.";

/// How the aggregate collection of all bindings is exported
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AggregateStyle {
    /// `export default [...] as const;`
    Default,
    /// `export const <name> = [...] as const;`
    Named(String),
}

#[derive(Debug, Clone)]
pub struct CodegenConfig {
    /// Spaces per nesting level; `0` renders every literal on one line
    pub indent: usize,
    pub aggregate: AggregateStyle,
    pub file_extension: String,
    pub header: bool,
}

impl Default for CodegenConfig {
    fn default() -> Self {
        Self {
            indent: 2,
            aggregate: AggregateStyle::Default,
            file_extension: "ts".to_string(),
            header: true,
        }
    }
}

/// Renders a module with the given configuration
pub fn render_module(module: &Module, config: &CodegenConfig) -> String {
    TypeScriptPrinter::new(config).print_module(module)
}
