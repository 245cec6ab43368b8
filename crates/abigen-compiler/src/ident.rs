//! Binding-name assignment
//!
//! A fragment whose name is unique within its destination is bound under that
//! name. Overloaded names get a suffix built from their parameter types, so
//! `transfer(address,uint256)` becomes `transfer_address_uint256`.

use abigen_runtime::{AbigenError, Fragment, Result};
use std::collections::{HashMap, HashSet};
use tracing::debug;

/// Words that cannot name a `const` binding in the generated module
const RESERVED_WORDS: &[&str] = &[
    "await", "break", "case", "catch", "class", "const", "continue", "debugger", "default",
    "delete", "do", "else", "enum", "export", "extends", "false", "finally", "for", "function",
    "if", "implements", "import", "in", "instanceof", "interface", "let", "new", "null",
    "package", "private", "protected", "public", "return", "static", "super", "switch", "this",
    "throw", "true", "try", "typeof", "var", "void", "while", "with", "yield",
];

/// A fragment paired with the identifier it will be bound under
#[derive(Debug, Clone, PartialEq)]
pub struct Assigned {
    pub identifier: String,
    pub fragment: Fragment,
}

/// Drops fragments that cannot be bound to a name
pub fn filter_nameable(fragments: Vec<Fragment>) -> Vec<Fragment> {
    let total = fragments.len();
    let named: Vec<Fragment> = fragments.into_iter().filter(Fragment::is_nameable).collect();

    if named.len() < total {
        debug!("Skipped {} unnamed fragment(s)", total - named.len());
    }

    named
}

/// Assigns an identifier to every fragment, in order
///
/// Every fragment must carry a non-empty name; see [`filter_nameable`].
/// A reserved word is escaped with trailing `_` until it no longer matches
/// another identifier of the same set, so `delete` next to `delete_` binds as
/// `delete__`.
pub fn assign_identifiers(fragments: Vec<Fragment>) -> Result<Vec<Assigned>> {
    let name_counts = fragments.iter().try_fold(HashMap::new(), |mut counts, fragment| {
        let name = fragment
            .binding_name()
            .ok_or_else(|| AbigenError::unidentifiable(&fragment.kind))?;
        *counts.entry(name.to_string()).or_insert(0_usize) += 1;
        Ok::<_, AbigenError>(counts)
    })?;

    let candidates = fragments
        .into_iter()
        .map(|fragment| {
            let overloaded = fragment
                .binding_name()
                .and_then(|name| name_counts.get(name))
                .is_some_and(|&count| count > 1);
            Ok((base_identifier(&fragment, overloaded)?, fragment))
        })
        .collect::<Result<Vec<(String, Fragment)>>>()?;

    let mut taken: HashSet<String> = candidates
        .iter()
        .map(|(identifier, _)| identifier.clone())
        .filter(|identifier| !is_reserved(identifier))
        .collect();

    Ok(candidates
        .into_iter()
        .map(|(identifier, fragment)| {
            let identifier = if is_reserved(&identifier) {
                escape_reserved(&identifier, &mut taken)
            } else {
                identifier
            };
            Assigned { identifier, fragment }
        })
        .collect())
}

/// Builds the identifier of a single fragment
pub fn identifier_for(fragment: &Fragment, overloaded: bool) -> Result<String> {
    let identifier = base_identifier(fragment, overloaded)?;

    if is_reserved(&identifier) {
        Ok(format!("{}_", identifier))
    } else {
        Ok(identifier)
    }
}

fn base_identifier(fragment: &Fragment, overloaded: bool) -> Result<String> {
    let name = fragment.binding_name().ok_or_else(|| AbigenError::unidentifiable(&fragment.kind))?;

    if !overloaded {
        return Ok(name.to_string());
    }

    let tags: Vec<String> = fragment.input_types().map(type_tag).collect();
    Ok(format!("{}_{}", name, tags.join("_")))
}

/// Rewrites a parameter type into identifier-safe text
///
/// `[]` becomes `Array`, `[N]` becomes `ArrayN`, and any other character that
/// cannot appear in an identifier becomes `_`.
pub fn type_tag(type_name: &str) -> String {
    let mut tag = String::with_capacity(type_name.len() + 5);
    let mut chars = type_name.chars();

    while let Some(c) = chars.next() {
        if c == '[' {
            tag.push_str("Array");
            for d in chars.by_ref() {
                if d == ']' {
                    break;
                }
                tag.push(if is_identifier_char(d) { d } else { '_' });
            }
        } else {
            tag.push(if is_identifier_char(c) { c } else { '_' });
        }
    }

    tag
}

/// Whether `text` can be written as a bare identifier or property key
pub fn is_identifier(text: &str) -> bool {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) if first.is_ascii_alphabetic() || first == '_' || first == '$' => {
            chars.all(is_identifier_char)
        }
        _ => false,
    }
}

fn is_identifier_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_' || c == '$'
}

fn is_reserved(identifier: &str) -> bool {
    RESERVED_WORDS.contains(&identifier)
}

fn escape_reserved(identifier: &str, taken: &mut HashSet<String>) -> String {
    let mut escaped = format!("{}_", identifier);
    while taken.contains(&escaped) {
        escaped.push('_');
    }

    debug!("Reserved word {} bound as {}", identifier, escaped);
    taken.insert(escaped.clone());
    escaped
}
