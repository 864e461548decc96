//! Validators that compose other validators over the same value

use super::traits::{SharedValidator, Validator};
use super::tree::ValidationTree;
use serde_json::Value;
use std::fmt;
use std::sync::Arc;

/// Runs several validators over one value and merges their trees.
///
/// Used to pair an object validator (always-present fields) with a union
/// validator (an exclusive group) on the same record.
#[derive(Debug, Clone)]
pub struct AllOfValidator {
    name: String,
    parts: Vec<SharedValidator>,
}

impl AllOfValidator {
    pub fn new(name: impl Into<String>, parts: Vec<SharedValidator>) -> Self {
        Self {
            name: name.into(),
            parts,
        }
    }
}

impl Validator for AllOfValidator {
    fn type_name(&self) -> String {
        self.name.clone()
    }

    fn validate(&self, value: &Value) -> ValidationTree {
        let mut tree = ValidationTree::new();
        for part in &self.parts {
            let mut part_tree = part.validate(value);
            // A shape mismatch is reported once, not once per part
            if !value.is_object() && !tree.errors.is_empty() {
                part_tree.errors.clear();
            }
            tree.merge(part_tree);
        }
        tree
    }
}

/// Defers to a validator resolved on first use, for recursive schemas
pub struct LazyValidator {
    resolve: fn() -> &'static dyn Validator,
}

impl LazyValidator {
    pub fn new(resolve: fn() -> &'static dyn Validator) -> Self {
        Self { resolve }
    }
}

impl fmt::Debug for LazyValidator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LazyValidator").finish_non_exhaustive()
    }
}

impl Validator for LazyValidator {
    fn type_name(&self) -> String {
        (self.resolve)().type_name()
    }

    fn validate(&self, value: &Value) -> ValidationTree {
        (self.resolve)().validate(value)
    }

    fn validate_field(&self, field: &str, value: Option<&Value>) -> ValidationTree {
        (self.resolve)().validate_field(field, value)
    }
}

pub fn all_of(name: impl Into<String>, parts: Vec<SharedValidator>) -> SharedValidator {
    Arc::new(AllOfValidator::new(name, parts))
}

pub fn lazy(resolve: fn() -> &'static dyn Validator) -> SharedValidator {
    Arc::new(LazyValidator::new(resolve))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::errors::ValidationError;
    use crate::validation::leaf::{array, string};
    use crate::validation::object::ObjectValidator;
    use crate::validation::union::UnionValidator;
    use serde_json::json;
    use std::sync::OnceLock;

    fn request_with_exclusive_group() -> SharedValidator {
        all_of(
            "Lookup",
            vec![
                ObjectValidator::new("Lookup")
                    .required("requester", string())
                    .optional("byId", string())
                    .optional("byName", string())
                    .shared(),
                UnionValidator::new("Lookup")
                    .variant("byId", string())
                    .variant("byName", string())
                    .shared(),
            ],
        )
    }

    #[test]
    fn test_object_and_union_combined() {
        let validator = request_with_exclusive_group();

        assert!(validator
            .validate(&json!({"requester": "alice", "byId": "42"}))
            .is_valid());

        let tree = validator.validate(&json!({"requester": "alice"}));
        assert_eq!(
            tree.errors,
            vec![ValidationError::non_unique_union(["byId", "byName"])]
        );

        let tree = validator.validate(&json!({"byName": "x"}));
        assert!(tree.errors.is_empty());
        assert_eq!(
            tree.child("requester").map(|c| c.errors.clone()),
            Some(vec![ValidationError::missing_field("requester")])
        );
    }

    #[test]
    fn test_shape_error_reported_once() {
        let tree = request_with_exclusive_group().validate(&json!(7));
        assert_eq!(tree.errors, vec![ValidationError::type_error("Lookup", "number")]);
    }

    fn nested_list() -> &'static dyn Validator {
        static NESTED: OnceLock<SharedValidator> = OnceLock::new();
        NESTED
            .get_or_init(|| {
                UnionValidator::new("Nested")
                    .variant("leaf", string())
                    .variant("list", array(lazy(nested_list)))
                    .strict()
                    .shared()
            })
            .as_ref()
    }

    #[test]
    fn test_lazy_supports_recursion() {
        let value = json!({"list": [{"leaf": "a"}, {"list": [{"leaf": 1}]}]});
        let tree = lazy(nested_list).validate(&value);

        assert!(!tree.is_valid());
        let deep = tree
            .child("list")
            .and_then(|t| t.child("1"))
            .and_then(|t| t.child("list"))
            .and_then(|t| t.child("0"))
            .and_then(|t| t.child("leaf"))
            .map(|t| t.errors.clone());
        assert_eq!(deep, Some(vec![ValidationError::type_error("string", "number")]));
        assert_eq!(lazy(nested_list).type_name(), "Nested");
    }
}
