//! Object and map validators

use super::errors::ValidationError;
use super::traits::{runtime_type, SharedValidator, Validator};
use super::tree::ValidationTree;
use serde_json::Value;
use std::sync::Arc;

/// Validates a record with required and optional fields.
///
/// Every present field gets a subtree under its name, every absent required
/// field gets a `missing-field` error in its own subtree. When strict, keys
/// unknown to both field maps are reported as `unexpected-field`.
#[derive(Debug, Clone)]
pub struct ObjectValidator {
    name: String,
    required: Vec<(String, SharedValidator)>,
    optional: Vec<(String, SharedValidator)>,
    strict: bool,
}

impl ObjectValidator {
    /// Create a strict object validator with no fields
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            required: Vec::new(),
            optional: Vec::new(),
            strict: true,
        }
    }

    pub fn required(mut self, field: impl Into<String>, validator: SharedValidator) -> Self {
        self.required.push((field.into(), validator));
        self
    }

    pub fn optional(mut self, field: impl Into<String>, validator: SharedValidator) -> Self {
        self.optional.push((field.into(), validator));
        self
    }

    /// Ignore keys that are not part of the schema
    pub fn lenient(mut self) -> Self {
        self.strict = false;
        self
    }

    pub fn is_strict(&self) -> bool {
        self.strict
    }

    fn knows(&self, key: &str) -> bool {
        self.required
            .iter()
            .chain(self.optional.iter())
            .any(|(field, _)| field == key)
    }

    pub fn shared(self) -> SharedValidator {
        Arc::new(self)
    }
}

impl Validator for ObjectValidator {
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

        let mut tree = ValidationTree::new();

        for (field, validator) in &self.required {
            tree.insert_child(field.clone(), validator.validate_field(field, object.get(field)));
        }

        for (field, validator) in &self.optional {
            if let Some(present) = object.get(field) {
                tree.insert_child(field.clone(), validator.validate(present));
            }
        }

        if self.strict {
            for key in object.keys().filter(|key| !self.knows(key)) {
                tree.insert_child(
                    key.clone(),
                    ValidationTree::from_error(ValidationError::unexpected_field(key.clone())),
                );
            }
        }

        tree
    }
}

/// A string-keyed object whose values all share one validator
#[derive(Debug, Clone)]
pub struct MapValidator {
    value: SharedValidator,
}

impl MapValidator {
    pub fn new(value: SharedValidator) -> Self {
        Self { value }
    }
}

impl Validator for MapValidator {
    fn type_name(&self) -> String {
        format!("Map<string, {}>", self.value.type_name())
    }

    fn validate(&self, value: &Value) -> ValidationTree {
        let Some(object) = value.as_object() else {
            return ValidationTree::from_error(ValidationError::type_error(
                self.type_name(),
                runtime_type(value),
            ));
        };

        let mut tree = ValidationTree::new();
        for (key, entry) in object {
            tree.insert_child(key.clone(), self.value.validate(entry));
        }
        tree
    }
}

pub fn map(value: SharedValidator) -> SharedValidator {
    Arc::new(MapValidator::new(value))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::leaf::{integer, string};
    use serde_json::json;

    fn note_validator() -> ObjectValidator {
        ObjectValidator::new("Note")
            .required("id", string())
            .optional("note", string())
    }

    #[test]
    fn test_missing_and_mistyped_fields() {
        let tree = note_validator().validate(&json!({"note": 42}));

        assert!(tree.errors.is_empty());
        assert_eq!(
            tree.child("id"),
            Some(&ValidationTree::from_error(ValidationError::missing_field("id")))
        );
        assert_eq!(
            tree.child("note"),
            Some(&ValidationTree::from_error(ValidationError::type_error(
                "string", "number"
            )))
        );
    }

    #[test]
    fn test_valid_object_has_empty_child_per_present_field() {
        let tree = note_validator().validate(&json!({"id": "a", "note": "b"}));
        assert!(tree.is_valid());
        assert_eq!(tree.children.len(), 2);
    }

    #[test]
    fn test_absent_optional_field_produces_no_child() {
        let tree = note_validator().validate(&json!({"id": "a"}));
        assert!(tree.is_valid());
        assert!(tree.child("note").is_none());
    }

    #[test]
    fn test_non_object_is_self_level_type_error() {
        let tree = note_validator().validate(&json!([1, 2]));
        assert_eq!(tree.errors, vec![ValidationError::type_error("Note", "array")]);
        assert!(tree.children.is_empty());
    }

    #[test]
    fn test_strict_reports_unknown_keys() {
        let tree = note_validator().validate(&json!({"id": "a", "extra": true}));
        assert_eq!(
            tree.child("extra"),
            Some(&ValidationTree::from_error(ValidationError::unexpected_field(
                "extra"
            )))
        );
        assert!(tree.errors.is_empty());
    }

    #[test]
    fn test_lenient_ignores_unknown_keys() {
        let validator = note_validator().lenient();
        assert!(!validator.is_strict());
        let tree = validator.validate(&json!({"id": "a", "extra": true}));
        assert!(tree.is_valid());
        assert!(tree.child("extra").is_none());
    }

    #[test]
    fn test_map_validates_every_entry() {
        let tree = map(integer()).validate(&json!({"a": 1, "b": "two"}));
        assert_eq!(tree.child("a"), Some(&ValidationTree::new()));
        assert_eq!(
            tree.child("b").map(|c| c.errors.clone()),
            Some(vec![ValidationError::type_error("integer", "string")])
        );
    }

    #[test]
    fn test_empty_map_is_valid_without_children() {
        let tree = map(integer()).validate(&json!({}));
        assert_eq!(tree, ValidationTree::new());
    }
}
