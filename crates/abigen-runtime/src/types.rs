//! Core types for abigen
//!
//! This module defines the ABI fragment model shared by the compiler and the CLI.
//! Field names follow the Solidity JSON ABI, so compiler artifacts deserialize
//! directly into these types and re-serialize into the same shape.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;

/// The `type` tag of an ABI entry
///
/// Unknown tags are kept verbatim in [`FragmentKind::Other`] so that entries
/// produced by newer compilers still pass through generation unchanged.
///
/// # Examples
///
/// ```
/// use abigen_runtime::FragmentKind;
///
/// assert_eq!(FragmentKind::from("event"), FragmentKind::Event);
/// assert_eq!(FragmentKind::from("custom").as_str(), "custom");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum FragmentKind {
    Function,
    Event,
    Error,
    Constructor,
    Fallback,
    Receive,
    Other(String),
}

impl FragmentKind {
    pub fn as_str(&self) -> &str {
        match self {
            Self::Function => "function",
            Self::Event => "event",
            Self::Error => "error",
            Self::Constructor => "constructor",
            Self::Fallback => "fallback",
            Self::Receive => "receive",
            Self::Other(tag) => tag,
        }
    }
}

impl From<&str> for FragmentKind {
    fn from(tag: &str) -> Self {
        match tag {
            "function" => Self::Function,
            "event" => Self::Event,
            "error" => Self::Error,
            "constructor" => Self::Constructor,
            "fallback" => Self::Fallback,
            "receive" => Self::Receive,
            other => Self::Other(other.to_string()),
        }
    }
}

impl From<String> for FragmentKind {
    fn from(tag: String) -> Self {
        Self::from(tag.as_str())
    }
}

impl From<FragmentKind> for String {
    fn from(kind: FragmentKind) -> Self {
        kind.as_str().to_string()
    }
}

impl fmt::Display for FragmentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A parameter or return value descriptor
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Param {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(rename = "type")]
    pub type_name: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub indexed: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub internal_type: Option<String>,

    /// Members of a `tuple` type
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub components: Option<Vec<Param>>,

    /// Any further fields, passed through verbatim
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Param {
    pub fn new(type_name: impl Into<String>) -> Self {
        Self {
            name: None,
            type_name: type_name.into(),
            indexed: None,
            internal_type: None,
            components: None,
            extra: Map::new(),
        }
    }

    pub fn named(name: impl Into<String>, type_name: impl Into<String>) -> Self {
        Self { name: Some(name.into()), ..Self::new(type_name) }
    }

    pub fn indexed(mut self, indexed: bool) -> Self {
        self.indexed = Some(indexed);
        self
    }
}

/// One ABI entry: a function, event, error, constructor, fallback or receive
///
/// # Examples
///
/// ```
/// use abigen_runtime::{Fragment, FragmentKind, Param};
///
/// let transfer = Fragment::new(FragmentKind::Function)
///     .with_name("transfer")
///     .with_inputs(vec![Param::named("to", "address"), Param::named("amount", "uint256")]);
///
/// assert_eq!(transfer.signature(), "transfer(address,uint256)");
/// assert!(transfer.is_nameable());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Fragment {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(rename = "type")]
    pub kind: FragmentKind,

    #[serde(default)]
    pub inputs: Vec<Param>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub outputs: Option<Vec<Param>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub state_mutability: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub anonymous: Option<bool>,

    /// Any further fields, passed through verbatim
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Fragment {
    pub fn new(kind: FragmentKind) -> Self {
        Self {
            name: None,
            kind,
            inputs: Vec::new(),
            outputs: None,
            state_mutability: None,
            anonymous: None,
            extra: Map::new(),
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_inputs(mut self, inputs: Vec<Param>) -> Self {
        self.inputs = inputs;
        self
    }

    pub fn with_outputs(mut self, outputs: Vec<Param>) -> Self {
        self.outputs = Some(outputs);
        self
    }

    pub fn with_state_mutability(mut self, state_mutability: impl Into<String>) -> Self {
        self.state_mutability = Some(state_mutability.into());
        self
    }

    /// Returns the name when it is present and non-empty
    pub fn binding_name(&self) -> Option<&str> {
        self.name.as_deref().filter(|name| !name.is_empty())
    }

    pub fn is_nameable(&self) -> bool {
        self.binding_name().is_some()
    }

    pub fn input_types(&self) -> impl Iterator<Item = &str> {
        self.inputs.iter().map(|param| param.type_name.as_str())
    }

    pub fn output_types(&self) -> impl Iterator<Item = &str> {
        self.outputs.iter().flatten().map(|param| param.type_name.as_str())
    }

    /// Human-readable `name(type,...)` form used in diagnostics
    pub fn signature(&self) -> String {
        let name = self.binding_name().unwrap_or(self.kind.as_str());
        format!("{}({})", name, self.input_types().collect::<Vec<_>>().join(","))
    }
}
