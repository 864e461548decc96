use super::common::Identifier;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A ledger value. Numeric and temporal kinds travel as strings so that no
/// precision is lost on the way through JSON.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Value {
    Bool(bool),
    ContractId(String),
    Date(String),
    Decimal(String),
    Int64(String),
    Party(String),
    Text(String),
    Timestamp(String),
    Unit {},
    List(Vec<Value>),
    Optional(OptionalValue),
    Record(Record),
    Variant(Variant),
    Enum(EnumValue),
    Map(BTreeMap<String, Value>),
}

impl Value {
    pub fn text(text: impl Into<String>) -> Self {
        Self::Text(text.into())
    }

    pub fn party(party: impl Into<String>) -> Self {
        Self::Party(party.into())
    }

    pub fn unit() -> Self {
        Self::Unit {}
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OptionalValue {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<Box<Value>>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Record {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub record_id: Option<Identifier>,
    pub fields: BTreeMap<String, Value>,
}

impl Record {
    pub fn with_field(mut self, label: impl Into<String>, value: Value) -> Self {
        self.fields.insert(label.into(), value);
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Variant {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub variant_id: Option<Identifier>,
    pub constructor: String,
    pub value: Box<Value>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EnumValue {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enum_id: Option<Identifier>,
    pub constructor: String,
}
