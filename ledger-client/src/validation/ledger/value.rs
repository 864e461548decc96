//! Ledger values are recursive, so the value schema is built once into a
//! static and referenced lazily from its own children.

use super::common::identifier;
use crate::validation::combinators::lazy;
use crate::validation::leaf::{array, boolean, string};
use crate::validation::object::{map, ObjectValidator};
use crate::validation::traits::{SharedValidator, Validator};
use crate::validation::union::UnionValidator;
use std::sync::OnceLock;

static VALUE: OnceLock<SharedValidator> = OnceLock::new();

fn value_ref() -> &'static dyn Validator {
    VALUE.get_or_init(build_value).as_ref()
}

fn build_value() -> SharedValidator {
    UnionValidator::new("Value")
        .variant("bool", boolean())
        .variant("contractId", string())
        .variant("date", string())
        .variant("decimal", string())
        .variant("int64", string())
        .variant("party", string())
        .variant("text", string())
        .variant("timestamp", string())
        .variant("unit", ObjectValidator::new("Unit").shared())
        .variant("list", array(lazy(value_ref)))
        .variant(
            "optional",
            ObjectValidator::new("Optional")
                .optional("value", lazy(value_ref))
                .shared(),
        )
        .variant("record", record())
        .variant(
            "variant",
            ObjectValidator::new("Variant")
                .optional("variantId", identifier())
                .required("constructor", string())
                .required("value", lazy(value_ref))
                .shared(),
        )
        .variant(
            "enum",
            ObjectValidator::new("Enum")
                .optional("enumId", identifier())
                .required("constructor", string())
                .shared(),
        )
        .variant("map", map(lazy(value_ref)))
        .strict()
        .shared()
}

/// A ledger value: exactly one of the value kinds
pub fn value() -> SharedValidator {
    lazy(value_ref)
}

/// A record: optional identifier plus labelled fields
pub fn record() -> SharedValidator {
    ObjectValidator::new("Record")
        .optional("recordId", identifier())
        .required("fields", map(lazy(value_ref)))
        .shared()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::ValidationError;
    use serde_json::json;

    #[test]
    fn test_scalar_values() {
        for sample in [
            json!({"bool": true}),
            json!({"int64": "42"}),
            json!({"party": "alice"}),
            json!({"unit": {}}),
            json!({"enum": {"constructor": "Red"}}),
        ] {
            assert!(value().validate(&sample).is_valid(), "{sample}");
        }
    }

    #[test]
    fn test_nested_record() {
        let sample = json!({
            "record": {
                "fields": {
                    "owner": {"party": "alice"},
                    "amounts": {"list": [{"decimal": "1.0"}, {"decimal": "2.5"}]},
                    "note": {"optional": {}},
                    "meta": {"map": {"k": {"text": "v"}}}
                }
            }
        });
        assert!(value().validate(&sample).is_valid());
    }

    #[test]
    fn test_error_deep_inside_list() {
        let sample = json!({"list": [{"text": "ok"}, {"text": 3}]});
        let tree = value().validate(&sample);
        let deep = tree
            .child("list")
            .and_then(|t| t.child("1"))
            .and_then(|t| t.child("text"))
            .map(|t| t.errors.clone());
        assert_eq!(deep, Some(vec![ValidationError::type_error("string", "number")]));
    }

    #[test]
    fn test_value_must_pick_one_kind() {
        let tree = value().validate(&json!({"text": "a", "party": "b"}));
        assert_eq!(tree.errors.len(), 1);
        assert_eq!(tree.errors[0].kind(), "non-unique-union");
    }

    #[test]
    fn test_unit_rejects_content() {
        let tree = value().validate(&json!({"unit": {"x": 1}}));
        assert_eq!(
            tree.child("unit").and_then(|t| t.child("x")).map(|t| t.errors.clone()),
            Some(vec![ValidationError::unexpected_field("x")])
        );
    }

    #[test]
    fn test_variant_requires_value() {
        let tree = value().validate(&json!({"variant": {"constructor": "Some"}}));
        assert_eq!(
            tree.child("variant")
                .and_then(|t| t.child("value"))
                .map(|t| t.errors.clone()),
            Some(vec![ValidationError::missing_field("value")])
        );
    }
}
