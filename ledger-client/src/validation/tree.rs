//! The result type shared by every validator

use super::errors::ValidationError;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Recursive validation outcome: the node's own errors plus one subtree per
/// field name (or per list index, as a string).
///
/// A tree is built fresh for every validation call and is valid when it is
/// empty all the way down.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationTree {
    #[serde(default)]
    pub errors: Vec<ValidationError>,
    #[serde(default)]
    pub children: BTreeMap<String, ValidationTree>,
}

impl ValidationTree {
    /// An empty (valid) tree
    pub fn new() -> Self {
        Self::default()
    }

    /// A tree holding a single self-level error and no children
    pub fn from_error(error: ValidationError) -> Self {
        Self {
            errors: vec![error],
            children: BTreeMap::new(),
        }
    }

    pub fn push_error(&mut self, error: ValidationError) {
        self.errors.push(error);
    }

    pub fn insert_child(&mut self, key: impl Into<String>, child: ValidationTree) {
        self.children.insert(key.into(), child);
    }

    pub fn child(&self, key: &str) -> Option<&ValidationTree> {
        self.children.get(key)
    }

    /// `true` when this node and every descendant carry no errors
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty() && self.children.values().all(ValidationTree::is_valid)
    }

    /// Fold another tree over the same value into this one.
    ///
    /// Errors are appended; children with the same key are merged recursively.
    pub fn merge(&mut self, other: ValidationTree) {
        self.errors.extend(other.errors);
        for (key, child) in other.children {
            match self.children.get_mut(&key) {
                Some(existing) => existing.merge(child),
                None => {
                    self.children.insert(key, child);
                }
            }
        }
    }

    /// Every node that carries errors, depth first, with its dotted path.
    ///
    /// The root is reported with an empty path. Keys that would be ambiguous
    /// once joined (empty, or containing `.`, `[` or `]`) are written as a
    /// quoted bracket segment, e.g. `filtersByParty["alice.admin"]`.
    pub fn failures(&self) -> Vec<(String, &[ValidationError])> {
        let mut out = Vec::new();
        self.collect_failures(String::new(), &mut out);
        out
    }

    fn collect_failures<'a>(&'a self, path: String, out: &mut Vec<(String, &'a [ValidationError])>) {
        if !self.errors.is_empty() {
            out.push((path.clone(), self.errors.as_slice()));
        }
        for (key, child) in &self.children {
            child.collect_failures(join_segment(&path, key), out);
        }
    }

    /// Total number of errors in the tree
    pub fn error_count(&self) -> usize {
        self.errors.len() + self.children.values().map(ValidationTree::error_count).sum::<usize>()
    }
}

fn join_segment(path: &str, key: &str) -> String {
    if key.is_empty() || key.contains(&['.', '[', ']'][..]) {
        format!("{path}[{key:?}]")
    } else if path.is_empty() {
        key.to_string()
    } else {
        format!("{path}.{key}")
    }
}
