//! Exact-duplicate removal within one destination

use crate::key::canonical_key;
use abigen_runtime::Fragment;
use std::collections::HashSet;
use tracing::debug;

/// Keeps the first fragment seen for every canonical key, preserving order
pub fn deduplicate(fragments: Vec<Fragment>) -> Vec<Fragment> {
    let total = fragments.len();
    let mut seen = HashSet::with_capacity(total);

    let unique: Vec<Fragment> =
        fragments.into_iter().filter(|fragment| seen.insert(canonical_key(fragment))).collect();

    if unique.len() < total {
        debug!("Dropped {} duplicate fragment(s)", total - unique.len());
    }

    unique
}
