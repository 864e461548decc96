use super::{HumanReadableReporter, ValidationFailure, ValidationReporter};
use crate::validation::ValidationTree;
use tracing::error;

/// Embeds the serialized tree as the error message, so
/// `serde_json::from_str(failure.message())` recovers the tree exactly
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonReporter;

impl ValidationReporter for JsonReporter {
    fn report(&self, tree: &ValidationTree) -> Option<ValidationFailure> {
        if tree.is_valid() {
            return None;
        }
        let message = match serde_json::to_string(tree) {
            Ok(message) => message,
            Err(e) => {
                error!("Failed to serialize validation tree: {}", e);
                HumanReadableReporter::render(tree)
            }
        };
        Some(ValidationFailure::new(message, tree.clone()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::ValidationError;
    use serde_json::json;

    #[test]
    fn test_message_parses_back_to_tree() {
        let mut element = ValidationTree::new();
        element.insert_child(
            "packageId",
            ValidationTree::from_error(ValidationError::type_error("string", "number")),
        );
        let mut list = ValidationTree::new();
        list.insert_child("0", element);
        let mut tree = ValidationTree::new();
        tree.insert_child("templateIds", list);
        tree.insert_child("verbose", ValidationTree::new());

        let failure = JsonReporter.report(&tree);
        let parsed = failure.as_ref().map(|f| f.parse_tree());

        assert!(matches!(parsed, Some(Ok(ref t)) if *t == tree));
    }

    #[test]
    fn test_message_is_plain_tree_json() {
        let tree = ValidationTree::from_error(ValidationError::non_unique_union(["a", "b"]));
        let failure = JsonReporter.report(&tree);
        let value: Option<serde_json::Value> =
            failure.and_then(|f| serde_json::from_str(f.message()).ok());
        assert_eq!(
            value,
            Some(json!({
                "errors": [{"kind": "non-unique-union", "keys": ["a", "b"]}],
                "children": {}
            }))
        );
    }
}
