//! Parser for extracting ABI fragments from compiler artifacts

use abigen_runtime::{AbigenError, Fragment, Result};
use glob::Pattern;
use serde::Deserialize;
use serde_json::Value;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Debug-metadata artifacts are never read
pub const DEFAULT_EXCLUDE: &str = "*.dbg.json";

/// The fragments one artifact contributes to its destination
#[derive(Debug, Clone, PartialEq)]
pub struct Artifact {
    pub path: PathBuf,
    pub destination: String,
    pub fragments: Vec<Fragment>,
}

/// Parses one artifact document
///
/// Returns `Ok(None)` when the document has no usable `abi` list or its file
/// name yields no destination. Content that is not UTF-8 JSON is a parse
/// failure. Entries that are not fragment-shaped are skipped with a warning.
pub fn parse_artifact(path: &Path, content: &[u8]) -> Result<Option<Artifact>> {
    let data: Value =
        serde_json::from_slice(content).map_err(|e| AbigenError::parse_failure(path, e))?;

    let entries = match data.get("abi") {
        Some(Value::Array(entries)) => entries,
        Some(other) => {
            debug!("Ignoring non-list abi ({}) in {}", json_kind(other), path.display());
            return Ok(None);
        }
        None => return Ok(None),
    };

    let Some(destination) = destination_for(path) else {
        warn!("No destination name can be derived from {}", path.display());
        return Ok(None);
    };

    let fragments = entries
        .iter()
        .enumerate()
        .filter_map(|(index, entry)| match Fragment::deserialize(entry) {
            Ok(fragment) => Some(fragment),
            Err(e) => {
                warn!("Skipping abi[{}] in {}: {}", index, path.display(), e);
                None
            }
        })
        .collect();

    Ok(Some(Artifact { path: path.to_path_buf(), destination, fragments }))
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Base file name up to its first `.`
///
/// `Token.json` and `Token.metadata.json` both map to `Token`.
pub fn destination_for(path: &Path) -> Option<String> {
    let file_name = path.file_name()?.to_string_lossy();
    let base = file_name.split('.').next().unwrap_or_default();

    (!base.is_empty()).then(|| base.to_string())
}

pub fn is_excluded(path: &Path, patterns: &[Pattern]) -> bool {
    let Some(file_name) = path.file_name().map(|name| name.to_string_lossy()) else {
        return false;
    };

    patterns.iter().any(|pattern| pattern.matches(&file_name))
}
