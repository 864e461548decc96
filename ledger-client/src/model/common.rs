use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Fully qualified name of a template, record, variant or enum
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Identifier {
    pub package_id: String,
    pub module_name: String,
    pub entity_name: String,
}

impl Identifier {
    pub fn new(
        package_id: impl Into<String>,
        module_name: impl Into<String>,
        entity_name: impl Into<String>,
    ) -> Self {
        Self {
            package_id: package_id.into(),
            module_name: module_name.into(),
            entity_name: entity_name.into(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum LedgerBoundary {
    Begin,
    End,
}

/// A position in the ledger: either an opaque absolute offset or one of the
/// two boundaries
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum LedgerOffset {
    Absolute(String),
    Boundary(LedgerBoundary),
}

impl LedgerOffset {
    pub fn begin() -> Self {
        Self::Boundary(LedgerBoundary::Begin)
    }

    pub fn end() -> Self {
        Self::Boundary(LedgerBoundary::End)
    }

    pub fn absolute(offset: impl Into<String>) -> Self {
        Self::Absolute(offset.into())
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Timestamp {
    pub seconds: i64,
    pub nanoseconds: i32,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Duration {
    pub seconds: i64,
    pub nanoseconds: i32,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InclusiveFilters {
    pub template_ids: Vec<Identifier>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Filters {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub inclusive: Option<InclusiveFilters>,
}

/// Per-party filters; a party with empty [`Filters`] sees every template
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionFilter {
    pub filters_by_party: BTreeMap<String, Filters>,
}

impl TransactionFilter {
    /// A filter that shows `party` every template
    pub fn for_party(party: impl Into<String>) -> Self {
        let mut filters_by_party = BTreeMap::new();
        filters_by_party.insert(party.into(), Filters::default());
        Self { filters_by_party }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_offset_shapes() {
        assert_eq!(
            serde_json::to_value(LedgerOffset::begin()).unwrap(),
            json!({"boundary": "BEGIN"})
        );
        assert_eq!(
            serde_json::from_value::<LedgerOffset>(json!({"absolute": "42"})).unwrap(),
            LedgerOffset::absolute("42")
        );
    }

    #[test]
    fn test_filters_omit_absent_inclusive() {
        let filter = TransactionFilter::for_party("alice");
        assert_eq!(
            serde_json::to_value(filter).unwrap(),
            json!({"filtersByParty": {"alice": {}}})
        );
    }
}
