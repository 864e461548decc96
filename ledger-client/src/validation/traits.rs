//! Core validation traits and interfaces

use super::errors::ValidationError;
use super::tree::ValidationTree;
use serde_json::Value;
use std::fmt::Debug;
use std::sync::Arc;

/// Core validation trait that all validators implement.
///
/// Validators are stateless: built once, shared freely between calls and
/// threads, never mutated.
pub trait Validator: Debug + Send + Sync {
    /// Name reported as `expectedType` when a value has the wrong shape
    fn type_name(&self) -> String;

    /// Validate a present value
    fn validate(&self, value: &Value) -> ValidationTree;

    /// Validate the value found under `field` of an enclosing object.
    ///
    /// Absence is a `missing-field` error unless the validator accepts it.
    fn validate_field(&self, field: &str, value: Option<&Value>) -> ValidationTree {
        match value {
            Some(value) => self.validate(value),
            None => ValidationTree::from_error(ValidationError::missing_field(field)),
        }
    }
}

/// Shared handle to a validator
pub type SharedValidator = Arc<dyn Validator>;

impl<V: Validator + ?Sized> Validator for Arc<V> {
    fn type_name(&self) -> String {
        (**self).type_name()
    }

    fn validate(&self, value: &Value) -> ValidationTree {
        (**self).validate(value)
    }

    fn validate_field(&self, field: &str, value: Option<&Value>) -> ValidationTree {
        (**self).validate_field(field, value)
    }
}

impl<V: Validator + ?Sized> Validator for Box<V> {
    fn type_name(&self) -> String {
        (**self).type_name()
    }

    fn validate(&self, value: &Value) -> ValidationTree {
        (**self).validate(value)
    }

    fn validate_field(&self, field: &str, value: Option<&Value>) -> ValidationTree {
        (**self).validate_field(field, value)
    }
}

/// Runtime type name of a JSON value, in the vocabulary used by type errors
pub fn runtime_type(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_runtime_type_names() {
        assert_eq!(runtime_type(&json!(null)), "null");
        assert_eq!(runtime_type(&json!(true)), "boolean");
        assert_eq!(runtime_type(&json!(4.2)), "number");
        assert_eq!(runtime_type(&json!("x")), "string");
        assert_eq!(runtime_type(&json!([])), "array");
        assert_eq!(runtime_type(&json!({})), "object");
    }
}
