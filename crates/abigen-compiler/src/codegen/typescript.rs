//! TypeScript printer
//!
//! Bindings become `export const x = {...} as const;` so that consumers get
//! literal types for every ABI entry, and the aggregate export lists them in
//! declaration order.

use super::{AggregateStyle, CodegenConfig, GENERATED_HEADER};
use crate::ast::{Module, Node};
use crate::ident::is_identifier;
use serde_json::Value;

pub struct TypeScriptPrinter<'a> {
    config: &'a CodegenConfig,
}

impl<'a> TypeScriptPrinter<'a> {
    pub fn new(config: &'a CodegenConfig) -> Self {
        Self { config }
    }

    pub fn print_module(&self, module: &Module) -> String {
        let mut statements: Vec<String> = Vec::with_capacity(module.bindings.len() + 2);

        if self.config.header {
            statements.push(GENERATED_HEADER.to_string());
        }
        statements.extend(module.bindings.iter().map(|node| self.print_statement(node)));
        statements.push(self.print_statement(&module.aggregate));

        let mut out = statements.join("\n\n");
        out.push('\n');
        out
    }

    /// Prints a node in statement position
    pub fn print_statement(&self, node: &Node) -> String {
        match node {
            Node::Binding { identifier, value } => {
                format!("export const {} = {} as const;", identifier, self.print_literal(value))
            }
            Node::AggregateExport { identifiers } => {
                let list = format!("[{}]", identifiers.join(", "));
                match &self.config.aggregate {
                    AggregateStyle::Default => format!("export default {} as const;", list),
                    AggregateStyle::Named(name) => {
                        format!("export const {} = {} as const;", name, list)
                    }
                }
            }
            literal => format!("{};", self.print_literal(literal)),
        }
    }

    /// Prints a node in expression position
    pub fn print_literal(&self, node: &Node) -> String {
        let mut out = String::new();
        self.write_literal(&mut out, node, 0);
        out
    }

    fn write_literal(&self, out: &mut String, node: &Node, depth: usize) {
        match node {
            Node::Null => out.push_str("null"),
            Node::Bool(b) => out.push_str(if *b { "true" } else { "false" }),
            Node::Text(text) => out.push_str(&quote(text)),
            Node::List(items) => {
                self.write_sequence(out, ('[', ']'), items, depth, |printer, out, item, depth| {
                    printer.write_literal(out, item, depth)
                })
            }
            Node::Record(entries) => {
                self.write_sequence(out, ('{', '}'), entries, depth, |printer, out, entry, depth| {
                    let (key, value) = entry;
                    out.push_str(&property_key(key));
                    out.push_str(": ");
                    printer.write_literal(out, value, depth)
                })
            }
            Node::Binding { identifier, .. } => out.push_str(identifier),
            Node::AggregateExport { identifiers } => {
                out.push('[');
                out.push_str(&identifiers.join(", "));
                out.push(']');
            }
        }
    }

    fn write_sequence<T>(
        &self,
        out: &mut String,
        (open, close): (char, char),
        items: &[T],
        depth: usize,
        mut write_item: impl FnMut(&Self, &mut String, &T, usize),
    ) {
        out.push(open);

        if items.is_empty() {
            out.push(close);
            return;
        }

        if self.config.indent == 0 {
            for (i, item) in items.iter().enumerate() {
                if i > 0 {
                    out.push_str(", ");
                }
                write_item(self, out, item, depth);
            }
            out.push(close);
            return;
        }

        let inner = " ".repeat(self.config.indent * (depth + 1));
        for item in items {
            out.push('\n');
            out.push_str(&inner);
            write_item(self, out, item, depth + 1);
            out.push(',');
        }
        out.push('\n');
        out.push_str(&" ".repeat(self.config.indent * depth));
        out.push(close);
    }
}

fn quote(text: &str) -> String {
    Value::from(text).to_string()
}

fn property_key(key: &str) -> String {
    if is_identifier(key) {
        key.to_string()
    } else {
        quote(key)
    }
}
