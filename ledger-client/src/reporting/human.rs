use super::{ValidationFailure, ValidationReporter};
use crate::validation::ValidationTree;
use std::fmt::Write;

const ROOT_PATH: &str = "(root)";

/// Renders one indented block per failing path:
///
/// ```text
/// Validation failed with 2 error(s)
///   commands.commandId
///     - Missing required field 'commandId'
///   commands.list.0
///     - Exactly one of [create, exercise] must be set
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct HumanReadableReporter;

impl HumanReadableReporter {
    pub fn render(tree: &ValidationTree) -> String {
        let mut out = format!("Validation failed with {} error(s)", tree.error_count());
        for (path, errors) in tree.failures() {
            let path = if path.is_empty() { ROOT_PATH } else { path.as_str() };
            let _ = write!(out, "\n  {path}");
            for error in errors {
                let _ = write!(out, "\n    - {error}");
            }
        }
        out
    }
}

impl ValidationReporter for HumanReadableReporter {
    fn report(&self, tree: &ValidationTree) -> Option<ValidationFailure> {
        if tree.is_valid() {
            return None;
        }
        Some(ValidationFailure::new(Self::render(tree), tree.clone()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::ValidationError;

    #[test]
    fn test_render_paths_and_messages() {
        let mut commands = ValidationTree::new();
        commands.insert_child(
            "commandId",
            ValidationTree::from_error(ValidationError::missing_field("commandId")),
        );
        let mut tree = ValidationTree::from_error(ValidationError::type_error("Commands", "string"));
        tree.insert_child("commands", commands);

        let failure = HumanReadableReporter.report(&tree);
        let message = failure.as_ref().map(|f| f.message().to_string());

        assert_eq!(
            message.as_deref(),
            Some(
                "Validation failed with 2 error(s)\n  (root)\n    - Type error: expected Commands, found string\n  commands.commandId\n    - Missing required field 'commandId'"
            )
        );
    }

    #[test]
    fn test_tree_with_empty_children_is_not_reported() {
        let mut tree = ValidationTree::new();
        tree.insert_child("a", ValidationTree::new());
        assert!(HumanReadableReporter.report(&tree).is_none());
    }

    #[test]
    fn test_party_names_with_dots_render_unambiguously() {
        let mut parties = ValidationTree::new();
        parties.insert_child(
            "alice.admin",
            ValidationTree::from_error(ValidationError::type_error("Filters", "number")),
        );
        let mut tree = ValidationTree::new();
        tree.insert_child("filtersByParty", parties);

        let message = HumanReadableReporter::render(&tree);
        assert_eq!(
            message,
            "Validation failed with 1 error(s)\n  filtersByParty[\"alice.admin\"]\n    - Type error: expected Filters, found number"
        );
    }
}
