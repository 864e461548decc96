//! Leaf validators: primitives, enums, ranges, optional and list wrappers

use super::errors::ValidationError;
use super::traits::{runtime_type, SharedValidator, Validator};
use super::tree::ValidationTree;
use serde_json::Value;
use std::sync::Arc;

/// The primitive shapes a JSON value can be checked against
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Primitive {
    String,
    Number,
    /// A number representable as an `i64`
    Integer,
    Boolean,
}

impl Primitive {
    pub fn as_str(&self) -> &'static str {
        match self {
            Primitive::String => "string",
            Primitive::Number => "number",
            Primitive::Integer => "integer",
            Primitive::Boolean => "boolean",
        }
    }

    fn matches(&self, value: &Value) -> bool {
        match self {
            Primitive::String => value.is_string(),
            Primitive::Number => value.is_number(),
            Primitive::Integer => value.as_i64().is_some(),
            Primitive::Boolean => value.is_boolean(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct PrimitiveValidator {
    primitive: Primitive,
}

impl PrimitiveValidator {
    pub fn new(primitive: Primitive) -> Self {
        Self { primitive }
    }
}

impl Validator for PrimitiveValidator {
    fn type_name(&self) -> String {
        self.primitive.as_str().to_string()
    }

    fn validate(&self, value: &Value) -> ValidationTree {
        if self.primitive.matches(value) {
            ValidationTree::new()
        } else {
            ValidationTree::from_error(ValidationError::type_error(
                self.primitive.as_str(),
                runtime_type(value),
            ))
        }
    }
}

/// A closed set of string literals
#[derive(Debug, Clone)]
pub struct EnumValidator {
    name: String,
    literals: Vec<String>,
}

impl EnumValidator {
    pub fn new<I, S>(name: impl Into<String>, literals: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            name: name.into(),
            literals: literals.into_iter().map(Into::into).collect(),
        }
    }
}

impl Validator for EnumValidator {
    fn type_name(&self) -> String {
        self.name.clone()
    }

    fn validate(&self, value: &Value) -> ValidationTree {
        match value.as_str() {
            Some(literal) if self.literals.iter().any(|l| l == literal) => ValidationTree::new(),
            Some(_) => ValidationTree::from_error(ValidationError::enum_membership(
                self.literals.iter().cloned(),
            )),
            None => ValidationTree::from_error(ValidationError::type_error(
                self.name.clone(),
                runtime_type(value),
            )),
        }
    }
}

/// An integer within inclusive bounds
#[derive(Debug, Clone)]
pub struct RangeValidator {
    min: i64,
    max: i64,
}

impl RangeValidator {
    pub fn new(min: i64, max: i64) -> Self {
        Self { min, max }
    }
}

impl Validator for RangeValidator {
    fn type_name(&self) -> String {
        Primitive::Integer.as_str().to_string()
    }

    fn validate(&self, value: &Value) -> ValidationTree {
        match value.as_i64() {
            Some(n) if (self.min..=self.max).contains(&n) => ValidationTree::new(),
            Some(_) => ValidationTree::from_error(ValidationError::numeric_range(self.min, self.max)),
            None => ValidationTree::from_error(ValidationError::type_error(
                Primitive::Integer.as_str(),
                runtime_type(value),
            )),
        }
    }
}

/// Accepts absence; delegates a present value to the wrapped validator
#[derive(Debug, Clone)]
pub struct OptionalValidator {
    inner: SharedValidator,
}

impl OptionalValidator {
    pub fn new(inner: SharedValidator) -> Self {
        Self { inner }
    }
}

impl Validator for OptionalValidator {
    fn type_name(&self) -> String {
        format!("optional<{}>", self.inner.type_name())
    }

    fn validate(&self, value: &Value) -> ValidationTree {
        self.inner.validate(value)
    }

    fn validate_field(&self, _field: &str, value: Option<&Value>) -> ValidationTree {
        match value {
            Some(value) => self.inner.validate(value),
            None => ValidationTree::new(),
        }
    }
}

/// Applies an element validator to every entry, keyed by index
#[derive(Debug, Clone)]
pub struct ArrayValidator {
    element: SharedValidator,
}

impl ArrayValidator {
    pub fn new(element: SharedValidator) -> Self {
        Self { element }
    }
}

impl Validator for ArrayValidator {
    fn type_name(&self) -> String {
        format!("Array<{}>", self.element.type_name())
    }

    fn validate(&self, value: &Value) -> ValidationTree {
        let Some(elements) = value.as_array() else {
            return ValidationTree::from_error(ValidationError::type_error(
                self.type_name(),
                runtime_type(value),
            ));
        };

        let mut tree = ValidationTree::new();
        for (index, element) in elements.iter().enumerate() {
            tree.insert_child(index.to_string(), self.element.validate(element));
        }
        tree
    }
}

pub fn string() -> SharedValidator {
    Arc::new(PrimitiveValidator::new(Primitive::String))
}

pub fn number() -> SharedValidator {
    Arc::new(PrimitiveValidator::new(Primitive::Number))
}

pub fn integer() -> SharedValidator {
    Arc::new(PrimitiveValidator::new(Primitive::Integer))
}

pub fn boolean() -> SharedValidator {
    Arc::new(PrimitiveValidator::new(Primitive::Boolean))
}

pub fn literals<I, S>(name: impl Into<String>, literals: I) -> SharedValidator
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    Arc::new(EnumValidator::new(name, literals))
}

pub fn range(min: i64, max: i64) -> SharedValidator {
    Arc::new(RangeValidator::new(min, max))
}

pub fn optional(inner: SharedValidator) -> SharedValidator {
    Arc::new(OptionalValidator::new(inner))
}

pub fn array(element: SharedValidator) -> SharedValidator {
    Arc::new(ArrayValidator::new(element))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_primitive_match_is_empty_tree() {
        assert!(string().validate(&json!("hello")).is_valid());
        assert!(number().validate(&json!(1.5)).is_valid());
        assert!(boolean().validate(&json!(false)).is_valid());
        assert!(integer().validate(&json!(-7)).is_valid());
    }

    #[test]
    fn test_primitive_mismatch_reports_single_type_error() {
        let tree = string().validate(&json!(42));
        assert_eq!(
            tree.errors,
            vec![ValidationError::type_error("string", "number")]
        );
        assert!(tree.children.is_empty());
    }

    #[test]
    fn test_falsy_values_are_present() {
        assert!(string().validate(&json!("")).is_valid());
        assert!(boolean().validate(&json!(false)).is_valid());
        assert!(number().validate(&json!(0)).is_valid());
    }

    #[test]
    fn test_null_is_a_type_error() {
        let tree = string().validate(&json!(null));
        assert_eq!(tree.errors, vec![ValidationError::type_error("string", "null")]);
    }

    #[test]
    fn test_integer_rejects_fractions() {
        let tree = integer().validate(&json!(1.5));
        assert_eq!(tree.errors, vec![ValidationError::type_error("integer", "number")]);
    }

    #[test]
    fn test_enum_membership() {
        let validator = literals("LedgerBoundary", ["BEGIN", "END"]);
        assert!(validator.validate(&json!("BEGIN")).is_valid());

        let tree = validator.validate(&json!("MIDDLE"));
        assert_eq!(
            tree.errors,
            vec![ValidationError::enum_membership(["BEGIN", "END"])]
        );

        let tree = validator.validate(&json!(0));
        assert_eq!(
            tree.errors,
            vec![ValidationError::type_error("LedgerBoundary", "number")]
        );
    }

    #[test]
    fn test_range_bounds_are_inclusive() {
        let validator = range(0, 999_999_999);
        assert!(validator.validate(&json!(0)).is_valid());
        assert!(validator.validate(&json!(999_999_999)).is_valid());
        assert_eq!(
            validator.validate(&json!(1_000_000_000)).errors,
            vec![ValidationError::numeric_range(0, 999_999_999)]
        );
        assert_eq!(
            validator.validate(&json!("5")).errors,
            vec![ValidationError::type_error("integer", "string")]
        );
    }

    #[test]
    fn test_optional_accepts_absence_without_delegating() {
        let validator = optional(string());
        assert!(validator.validate_field("note", None).is_valid());
        assert!(!validator.validate_field("note", Some(&json!(1))).is_valid());
    }

    #[test]
    fn test_required_absence_is_missing_field() {
        let tree = string().validate_field("id", None);
        assert_eq!(tree.errors, vec![ValidationError::missing_field("id")]);
    }

    #[test]
    fn test_list_places_elements_under_indices() {
        let tree = array(string()).validate(&json!(["a", 1]));

        assert!(tree.errors.is_empty());
        assert_eq!(tree.child("0"), Some(&ValidationTree::new()));
        assert_eq!(
            tree.child("1").map(|c| c.errors.clone()),
            Some(vec![ValidationError::type_error("string", "number")])
        );
    }

    #[test]
    fn test_list_type_error_has_no_children() {
        let tree = array(string()).validate(&json!(42));
        assert_eq!(
            tree.errors,
            vec![ValidationError::type_error("Array<string>", "number")]
        );
        assert!(tree.children.is_empty());
    }
}
