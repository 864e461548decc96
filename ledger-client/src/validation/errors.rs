//! Validation error kinds

use serde::{Deserialize, Serialize};

/// A single problem found at one node of a [`ValidationTree`](super::ValidationTree).
///
/// Each kind carries only what is needed to render a precise message. The
/// offending value itself is never captured.
#[derive(Debug, thiserror::Error, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum ValidationError {
    /// The value does not have the expected runtime shape
    #[error("Type error: expected {expected_type}, found {actual_type}")]
    #[serde(rename_all = "camelCase")]
    TypeError {
        expected_type: String,
        actual_type: String,
    },

    /// A required field is absent
    #[error("Missing required field '{field}'")]
    MissingField { field: String },

    /// A field that the schema does not know about
    #[error("Unexpected field '{field}'")]
    UnexpectedField { field: String },

    /// Zero, or more than one, of an exclusive group of keys is present
    #[error("Exactly one of [{}] must be set", .keys.join(", "))]
    NonUniqueUnion { keys: Vec<String> },

    /// A string that is not one of the allowed literals
    #[error("Value is not one of [{}]", .allowed.join(", "))]
    EnumMembership { allowed: Vec<String> },

    /// An integer outside of its inclusive bounds
    #[error("Value must be between {min} and {max}")]
    NumericRange { min: i64, max: i64 },
}

impl ValidationError {
    /// Create a type error
    pub fn type_error(expected: impl Into<String>, actual: impl Into<String>) -> Self {
        Self::TypeError {
            expected_type: expected.into(),
            actual_type: actual.into(),
        }
    }

    /// Create a missing field error
    pub fn missing_field(field: impl Into<String>) -> Self {
        Self::MissingField {
            field: field.into(),
        }
    }

    /// Create an unexpected field error
    pub fn unexpected_field(field: impl Into<String>) -> Self {
        Self::UnexpectedField {
            field: field.into(),
        }
    }

    /// Create a non-unique union error over the full configured key set
    pub fn non_unique_union<I, S>(keys: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::NonUniqueUnion {
            keys: keys.into_iter().map(Into::into).collect(),
        }
    }

    /// Create an enum membership error
    pub fn enum_membership<I, S>(allowed: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::EnumMembership {
            allowed: allowed.into_iter().map(Into::into).collect(),
        }
    }

    /// Create a numeric range error
    pub fn numeric_range(min: i64, max: i64) -> Self {
        Self::NumericRange { min, max }
    }

    /// The `kind` tag used in the structured representation
    pub fn kind(&self) -> &'static str {
        match self {
            Self::TypeError { .. } => "type-error",
            Self::MissingField { .. } => "missing-field",
            Self::UnexpectedField { .. } => "unexpected-field",
            Self::NonUniqueUnion { .. } => "non-unique-union",
            Self::EnumMembership { .. } => "enum-membership",
            Self::NumericRange { .. } => "numeric-range",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_type_error_serializes_with_camel_case_fields() {
        let error = ValidationError::type_error("string", "number");
        let value = serde_json::to_value(&error).unwrap();
        assert_eq!(
            value,
            json!({"kind": "type-error", "expectedType": "string", "actualType": "number"})
        );
    }

    #[test]
    fn test_non_unique_union_serialization() {
        let error = ValidationError::non_unique_union(["absolute", "boundary"]);
        let value = serde_json::to_value(&error).unwrap();
        assert_eq!(
            value,
            json!({"kind": "non-unique-union", "keys": ["absolute", "boundary"]})
        );
    }

    #[test]
    fn test_kind_matches_serialized_tag() {
        let errors = vec![
            ValidationError::type_error("a", "b"),
            ValidationError::missing_field("f"),
            ValidationError::unexpected_field("f"),
            ValidationError::non_unique_union(["a"]),
            ValidationError::enum_membership(["X"]),
            ValidationError::numeric_range(0, 1),
        ];

        for error in errors {
            let value = serde_json::to_value(&error).unwrap();
            assert_eq!(value["kind"], error.kind());
            let parsed: ValidationError = serde_json::from_value(value).unwrap();
            assert_eq!(parsed, error);
        }
    }

    #[test]
    fn test_display_messages() {
        assert_eq!(
            ValidationError::missing_field("id").to_string(),
            "Missing required field 'id'"
        );
        assert_eq!(
            ValidationError::non_unique_union(["a", "b"]).to_string(),
            "Exactly one of [a, b] must be set"
        );
        assert!(ValidationError::type_error("string", "number")
            .to_string()
            .contains("expected string, found number"));
    }
}
