//! Destination grouping
//!
//! Several artifacts may feed the same generated module. Their fragments are
//! concatenated in processing order; deduplication happens later, per group.

use crate::ast::{build_module, Module};
use crate::parser::Artifact;
use abigen_runtime::{Fragment, Result};
use indexmap::IndexMap;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct DestinationGroups {
    groups: IndexMap<String, Vec<Fragment>>,
}

impl DestinationGroups {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends fragments to a destination, creating it on first use
    pub fn merge(&mut self, destination: impl Into<String>, fragments: Vec<Fragment>) {
        self.groups.entry(destination.into()).or_default().extend(fragments);
    }

    pub fn merge_artifact(&mut self, artifact: Artifact) {
        self.merge(artifact.destination, artifact.fragments);
    }

    pub fn get(&self, destination: &str) -> Option<&[Fragment]> {
        self.groups.get(destination).map(Vec::as_slice)
    }

    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    pub fn destinations(&self) -> impl Iterator<Item = &str> {
        self.groups.keys().map(String::as_str)
    }

    /// Lowers every group into its module, keeping destination order
    pub fn build(self) -> Vec<(String, Result<Option<Module>>)> {
        self.into_iter()
            .map(|(destination, fragments)| (destination, build_module(fragments)))
            .collect()
    }
}

impl IntoIterator for DestinationGroups {
    type Item = (String, Vec<Fragment>);
    type IntoIter = indexmap::map::IntoIter<String, Vec<Fragment>>;

    fn into_iter(self) -> Self::IntoIter {
        self.groups.into_iter()
    }
}

impl FromIterator<Artifact> for DestinationGroups {
    fn from_iter<I: IntoIterator<Item = Artifact>>(artifacts: I) -> Self {
        let mut groups = Self::new();
        for artifact in artifacts {
            groups.merge_artifact(artifact);
        }
        groups
    }
}
