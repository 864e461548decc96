use super::common::Identifier;

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct Value {
    #[prost(
        oneof = "value::Sum",
        tags = "1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13, 14, 15"
    )]
    pub sum: Option<value::Sum>,
}

/// Numeric and temporal scalars keep their textual form on the wire
pub mod value {
    #[derive(Clone, PartialEq, ::prost::Oneof)]
    pub enum Sum {
        #[prost(message, tag = "1")]
        Record(super::Record),
        #[prost(message, tag = "2")]
        Variant(super::Variant),
        #[prost(string, tag = "3")]
        ContractId(String),
        #[prost(message, tag = "4")]
        List(super::List),
        #[prost(string, tag = "5")]
        Int64(String),
        #[prost(string, tag = "6")]
        Decimal(String),
        #[prost(string, tag = "7")]
        Text(String),
        #[prost(string, tag = "8")]
        Timestamp(String),
        #[prost(string, tag = "9")]
        Party(String),
        #[prost(bool, tag = "10")]
        Bool(bool),
        #[prost(message, tag = "11")]
        Unit(()),
        #[prost(string, tag = "12")]
        Date(String),
        #[prost(message, tag = "13")]
        Optional(super::Optional),
        #[prost(message, tag = "14")]
        Map(super::Map),
        #[prost(message, tag = "15")]
        Enum(super::Enum),
    }
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct RecordField {
    #[prost(string, tag = "1")]
    pub label: String,
    #[prost(message, optional, tag = "2")]
    pub value: Option<Value>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct Record {
    #[prost(message, optional, tag = "1")]
    pub record_id: Option<Identifier>,
    #[prost(message, repeated, tag = "2")]
    pub fields: Vec<RecordField>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct Variant {
    #[prost(message, optional, tag = "1")]
    pub variant_id: Option<Identifier>,
    #[prost(string, tag = "2")]
    pub constructor: String,
    #[prost(message, optional, boxed, tag = "3")]
    pub value: Option<Box<Value>>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct Enum {
    #[prost(message, optional, tag = "1")]
    pub enum_id: Option<Identifier>,
    #[prost(string, tag = "2")]
    pub constructor: String,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct List {
    #[prost(message, repeated, tag = "1")]
    pub elements: Vec<Value>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct Optional {
    #[prost(message, optional, boxed, tag = "1")]
    pub value: Option<Box<Value>>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct Map {
    #[prost(message, repeated, tag = "1")]
    pub entries: Vec<map::Entry>,
}

pub mod map {
    #[derive(Clone, PartialEq, ::prost::Message)]
    pub struct Entry {
        #[prost(string, tag = "1")]
        pub key: String,
        #[prost(message, optional, tag = "2")]
        pub value: Option<super::Value>,
    }
}
