//! Canonical identity of a fragment
//!
//! The key is `name:kind:inputs:outputs`, with each type list sorted by ordinal
//! byte order and joined with `,`. Parameter names, `indexed` flags and any other
//! metadata do not take part, so two declarations of the same interface entry
//! collapse even when their artifacts disagree on incidental fields.

use abigen_runtime::Fragment;

pub fn canonical_key(fragment: &Fragment) -> String {
    let mut input_types: Vec<&str> = fragment.input_types().collect();
    input_types.sort_unstable();

    let mut output_types: Vec<&str> = fragment.output_types().collect();
    output_types.sort_unstable();

    format!(
        "{}:{}:{}:{}",
        fragment.name.as_deref().unwrap_or_default(),
        fragment.kind,
        input_types.join(","),
        output_types.join(",")
    )
}
