//! Declaration tree for generated modules
//!
//! Fragments are lowered into a small syntax-neutral tree of literal and
//! binding nodes. Printers in [`crate::codegen`] turn the tree into source text,
//! so everything here is independent of the target syntax.

use crate::dedup::deduplicate;
use crate::ident::{assign_identifiers, filter_nameable};
use abigen_runtime::{AbigenError, Fragment, Result};
use serde_json::Value;
use std::collections::HashMap;

#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    Null,
    Bool(bool),
    Text(String),
    List(Vec<Node>),
    /// Key-ordered record; entries keep their insertion order
    Record(Vec<(String, Node)>),
    /// Exported, immutable, deeply read-only named binding
    Binding { identifier: String, value: Box<Node> },
    /// Exported ordered collection of previously declared bindings
    AggregateExport { identifiers: Vec<String> },
}

/// One generated source unit: its bindings followed by the aggregate export
#[derive(Debug, Clone, PartialEq)]
pub struct Module {
    pub bindings: Vec<Node>,
    pub aggregate: Node,
}

impl Module {
    pub fn identifiers(&self) -> Vec<&str> {
        self.bindings
            .iter()
            .filter_map(|node| match node {
                Node::Binding { identifier, .. } => Some(identifier.as_str()),
                _ => None,
            })
            .collect()
    }
}

/// Converts a JSON-like value into a literal node
///
/// Numbers fall outside the shapes an ABI literal carries and become an
/// `<unsupported: ...>` text placeholder instead of failing generation.
pub fn literal_for(value: &Value) -> Node {
    match value {
        Value::Null => Node::Null,
        Value::Bool(b) => Node::Bool(*b),
        Value::String(s) => Node::Text(s.clone()),
        Value::Array(items) => Node::List(items.iter().map(literal_for).collect()),
        Value::Object(map) => {
            Node::Record(map.iter().map(|(k, v)| (k.clone(), literal_for(v))).collect())
        }
        Value::Number(n) => Node::Text(format!("<unsupported: {}>", n)),
    }
}

pub fn declaration_for(fragment: &Fragment, identifier: &str) -> Result<Node> {
    let value = serde_json::to_value(fragment)?;

    Ok(Node::Binding { identifier: identifier.to_string(), value: Box::new(literal_for(&value)) })
}

/// Returns `None` for an empty identifier list; nothing should be written then
pub fn aggregate_export(identifiers: &[String]) -> Option<Node> {
    if identifiers.is_empty() {
        return None;
    }

    Some(Node::AggregateExport { identifiers: identifiers.to_vec() })
}

/// Collects the bindings of one destination
#[derive(Debug, Default)]
pub struct ModuleBuilder {
    bindings: Vec<Node>,
    identifiers: Vec<String>,
    declared: HashMap<String, String>,
}

impl ModuleBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a binding, refusing to shadow an identifier already declared
    pub fn declare(&mut self, fragment: &Fragment, identifier: &str) -> Result<()> {
        if let Some(first) = self.declared.get(identifier) {
            return Err(AbigenError::duplicate_identifier(identifier, first, fragment.signature()));
        }

        self.bindings.push(declaration_for(fragment, identifier)?);
        self.identifiers.push(identifier.to_string());
        self.declared.insert(identifier.to_string(), fragment.signature());
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }

    pub fn finish(self) -> Option<Module> {
        let aggregate = aggregate_export(&self.identifiers)?;
        Some(Module { bindings: self.bindings, aggregate })
    }
}

/// Lowers the fragments of one destination into a module
///
/// Duplicates are removed first, unnamed fragments are left out, and the rest
/// are bound in their original order. `Ok(None)` means there is nothing to emit.
pub fn build_module(fragments: Vec<Fragment>) -> Result<Option<Module>> {
    let nameable = filter_nameable(deduplicate(fragments));

    let mut builder = ModuleBuilder::new();
    for assigned in assign_identifiers(nameable)? {
        builder.declare(&assigned.fragment, &assigned.identifier)?;
    }

    Ok(builder.finish())
}
