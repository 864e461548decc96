use std::collections::BTreeMap;

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct Identifier {
    #[prost(string, tag = "1")]
    pub package_id: String,
    #[prost(string, tag = "2")]
    pub module_name: String,
    #[prost(string, tag = "3")]
    pub entity_name: String,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct LedgerOffset {
    #[prost(oneof = "ledger_offset::Value", tags = "1, 2")]
    pub value: Option<ledger_offset::Value>,
}

pub mod ledger_offset {
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, ::prost::Enumeration)]
    #[repr(i32)]
    pub enum LedgerBoundary {
        LedgerBegin = 0,
        LedgerEnd = 1,
    }

    #[derive(Clone, PartialEq, ::prost::Oneof)]
    pub enum Value {
        #[prost(string, tag = "1")]
        Absolute(String),
        #[prost(enumeration = "LedgerBoundary", tag = "2")]
        Boundary(i32),
    }
}

#[derive(Clone, Copy, PartialEq, ::prost::Message)]
pub struct Timestamp {
    #[prost(int64, tag = "1")]
    pub seconds: i64,
    #[prost(int32, tag = "2")]
    pub nanos: i32,
}

#[derive(Clone, Copy, PartialEq, ::prost::Message)]
pub struct Duration {
    #[prost(int64, tag = "1")]
    pub seconds: i64,
    #[prost(int32, tag = "2")]
    pub nanos: i32,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct InclusiveFilters {
    #[prost(message, repeated, tag = "1")]
    pub template_ids: Vec<Identifier>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct Filters {
    #[prost(message, optional, tag = "1")]
    pub inclusive: Option<InclusiveFilters>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct TransactionFilter {
    #[prost(btree_map = "string, message", tag = "1")]
    pub filters_by_party: BTreeMap<String, Filters>,
}
