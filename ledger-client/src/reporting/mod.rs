//! Turning validation trees into caller-facing errors
//!
//! A reporter returns `None` for a valid tree and a [`ValidationFailure`]
//! otherwise. The failure always carries the tree itself, so callers can
//! branch on error kinds and paths regardless of how the message was
//! rendered.

mod human;
mod json;

pub use human::HumanReadableReporter;
pub use json::JsonReporter;

use crate::types::ReporterKind;
use crate::validation::ValidationTree;
use std::fmt::Debug;
use std::sync::Arc;

/// Caller-facing error produced from an invalid [`ValidationTree`]
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{message}")]
pub struct ValidationFailure {
    message: String,
    tree: ValidationTree,
}

impl ValidationFailure {
    pub fn new(message: impl Into<String>, tree: ValidationTree) -> Self {
        Self {
            message: message.into(),
            tree,
        }
    }

    /// The rendered message
    pub fn message(&self) -> &str {
        &self.message
    }

    /// The tree that failed validation
    pub fn tree(&self) -> &ValidationTree {
        &self.tree
    }

    pub fn into_tree(self) -> ValidationTree {
        self.tree
    }

    /// Recover a tree from the message, for reporters whose message is the
    /// serialized tree
    pub fn parse_tree(&self) -> Result<ValidationTree, serde_json::Error> {
        serde_json::from_str(&self.message)
    }
}

/// Converts a validation tree into an error, or `None` when the tree is valid
pub trait ValidationReporter: Debug + Send + Sync {
    fn report(&self, tree: &ValidationTree) -> Option<ValidationFailure>;
}

impl ReporterKind {
    /// Instantiate the standard reporter for this kind
    pub fn build(&self) -> Arc<dyn ValidationReporter> {
        match self {
            ReporterKind::HumanReadable => Arc::new(HumanReadableReporter),
            ReporterKind::Json => Arc::new(JsonReporter),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::ValidationError;

    #[test]
    fn test_standard_reporters_accept_valid_trees() {
        for kind in [ReporterKind::HumanReadable, ReporterKind::Json] {
            assert!(kind.build().report(&ValidationTree::new()).is_none());
        }
    }

    #[test]
    fn test_failure_keeps_tree() {
        let tree = ValidationTree::from_error(ValidationError::missing_field("id"));
        let failure = ReporterKind::HumanReadable.build().report(&tree);
        assert_eq!(failure.map(ValidationFailure::into_tree), Some(tree));
    }
}
