//! Exclusive-group (union) validator

use super::errors::ValidationError;
use super::traits::{runtime_type, SharedValidator, Validator};
use super::tree::ValidationTree;
use serde_json::Value;
use std::sync::Arc;

/// Requires exactly one of an ordered set of keys to be present.
///
/// Absence of every key and presence of several keys are reported the same
/// way: one self-level `non-unique-union` error listing the whole key set.
#[derive(Debug, Clone)]
pub struct UnionValidator {
    name: String,
    variants: Vec<(String, SharedValidator)>,
    strict: bool,
}

impl UnionValidator {
    /// Create a lenient union; keys outside the group are ignored
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            variants: Vec::new(),
            strict: false,
        }
    }

    pub fn variant(mut self, key: impl Into<String>, validator: SharedValidator) -> Self {
        self.variants.push((key.into(), validator));
        self
    }

    /// Report keys outside the group as `unexpected-field`
    pub fn strict(mut self) -> Self {
        self.strict = true;
        self
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.variants.iter().map(|(key, _)| key.as_str())
    }

    pub fn shared(self) -> SharedValidator {
        Arc::new(self)
    }
}

impl Validator for UnionValidator {
    fn type_name(&self) -> String {
        self.name.clone()
    }

    fn validate(&self, value: &Value) -> ValidationTree {
        let Some(object) = value.as_object() else {
            return ValidationTree::from_error(ValidationError::type_error(
                self.name.clone(),
                runtime_type(value),
            ));
        };

        let present: Vec<&(String, SharedValidator)> = self
            .variants
            .iter()
            .filter(|(key, _)| object.contains_key(key))
            .collect();

        let mut tree = ValidationTree::new();
        if present.len() != 1 {
            tree.push_error(ValidationError::non_unique_union(self.keys()));
        }

        for (key, validator) in present {
            if let Some(member) = object.get(key) {
                tree.insert_child(key.clone(), validator.validate(member));
            }
        }

        if self.strict {
            for key in object.keys().filter(|key| !self.keys().any(|k| k == key.as_str())) {
                tree.insert_child(
                    key.clone(),
                    ValidationTree::from_error(ValidationError::unexpected_field(key.clone())),
                );
            }
        }

        tree
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::leaf::{integer, string};
    use serde_json::json;

    fn ab() -> UnionValidator {
        UnionValidator::new("AB")
            .variant("a", string())
            .variant("b", integer())
    }

    #[test]
    fn test_neither_key_present() {
        let tree = ab().validate(&json!({}));
        assert_eq!(tree.errors, vec![ValidationError::non_unique_union(["a", "b"])]);
        assert!(tree.children.is_empty());
    }

    #[test]
    fn test_both_keys_present_reports_identical_error() {
        let neither = ab().validate(&json!({}));
        let both = ab().validate(&json!({"a": "x", "b": 1}));
        assert_eq!(both.errors, neither.errors);
        assert_eq!(both.child("a"), Some(&ValidationTree::new()));
        assert_eq!(both.child("b"), Some(&ValidationTree::new()));
    }

    #[test]
    fn test_single_key_only_validates_chosen_variant() {
        let tree = ab().validate(&json!({"a": "x"}));
        assert!(tree.errors.is_empty());
        assert!(tree.child("a").is_some());
        assert!(tree.child("b").is_none());
        assert!(tree.is_valid());
    }

    #[test]
    fn test_chosen_variant_errors_are_nested() {
        let tree = ab().validate(&json!({"b": "not a number"}));
        assert!(tree.errors.is_empty());
        assert_eq!(
            tree.child("b").map(|c| c.errors.clone()),
            Some(vec![ValidationError::type_error("integer", "string")])
        );
    }

    #[test]
    fn test_lenient_union_ignores_other_keys() {
        let tree = ab().validate(&json!({"a": "x", "note": 1}));
        assert!(tree.is_valid());
    }

    #[test]
    fn test_strict_union_reports_other_keys() {
        let tree = ab().strict().validate(&json!({"a": "x", "note": 1}));
        assert_eq!(
            tree.child("note"),
            Some(&ValidationTree::from_error(ValidationError::unexpected_field(
                "note"
            )))
        );
    }

    #[test]
    fn test_non_object_is_type_error() {
        let tree = ab().validate(&json!("a"));
        assert_eq!(tree.errors, vec![ValidationError::type_error("AB", "string")]);
        assert!(tree.children.is_empty());
    }
}
