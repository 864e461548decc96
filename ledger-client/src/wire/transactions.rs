use super::common::{Identifier, LedgerOffset, Timestamp, TransactionFilter};
use super::values::{Record, Value};
use std::collections::BTreeMap;

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct GetTransactionsRequest {
    #[prost(string, tag = "1")]
    pub ledger_id: String,
    #[prost(message, optional, tag = "2")]
    pub begin: Option<LedgerOffset>,
    #[prost(message, optional, tag = "3")]
    pub end: Option<LedgerOffset>,
    #[prost(message, optional, tag = "4")]
    pub filter: Option<TransactionFilter>,
    #[prost(bool, tag = "5")]
    pub verbose: bool,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct GetTransactionByIdRequest {
    #[prost(string, tag = "1")]
    pub ledger_id: String,
    #[prost(string, tag = "2")]
    pub transaction_id: String,
    #[prost(string, repeated, tag = "3")]
    pub requesting_parties: Vec<String>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct GetTransactionByEventIdRequest {
    #[prost(string, tag = "1")]
    pub ledger_id: String,
    #[prost(string, tag = "2")]
    pub event_id: String,
    #[prost(string, repeated, tag = "3")]
    pub requesting_parties: Vec<String>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct GetLedgerEndRequest {
    #[prost(string, tag = "1")]
    pub ledger_id: String,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct GetLedgerEndResponse {
    #[prost(message, optional, tag = "1")]
    pub offset: Option<LedgerOffset>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct CreatedEvent {
    #[prost(string, tag = "1")]
    pub event_id: String,
    #[prost(string, tag = "2")]
    pub contract_id: String,
    #[prost(message, optional, tag = "3")]
    pub template_id: Option<Identifier>,
    #[prost(message, optional, tag = "7")]
    pub contract_key: Option<Value>,
    #[prost(message, optional, tag = "4")]
    pub create_arguments: Option<Record>,
    #[prost(string, repeated, tag = "5")]
    pub witness_parties: Vec<String>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ArchivedEvent {
    #[prost(string, tag = "1")]
    pub event_id: String,
    #[prost(string, tag = "2")]
    pub contract_id: String,
    #[prost(message, optional, tag = "3")]
    pub template_id: Option<Identifier>,
    #[prost(string, repeated, tag = "4")]
    pub witness_parties: Vec<String>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ExercisedEvent {
    #[prost(string, tag = "1")]
    pub event_id: String,
    #[prost(string, tag = "2")]
    pub contract_id: String,
    #[prost(message, optional, tag = "3")]
    pub template_id: Option<Identifier>,
    #[prost(string, tag = "4")]
    pub contract_creating_event_id: String,
    #[prost(string, tag = "5")]
    pub choice: String,
    #[prost(message, optional, tag = "6")]
    pub choice_argument: Option<Value>,
    #[prost(string, repeated, tag = "7")]
    pub acting_parties: Vec<String>,
    #[prost(bool, tag = "8")]
    pub consuming: bool,
    #[prost(string, repeated, tag = "10")]
    pub witness_parties: Vec<String>,
    #[prost(string, repeated, tag = "11")]
    pub child_event_ids: Vec<String>,
    #[prost(message, optional, tag = "12")]
    pub exercise_result: Option<Value>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct Event {
    #[prost(oneof = "event::Event", tags = "1, 2")]
    pub event: Option<event::Event>,
}

pub mod event {
    #[derive(Clone, PartialEq, ::prost::Oneof)]
    pub enum Event {
        #[prost(message, tag = "1")]
        Created(super::CreatedEvent),
        #[prost(message, tag = "2")]
        Archived(super::ArchivedEvent),
    }
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct TreeEvent {
    #[prost(oneof = "tree_event::Kind", tags = "1, 2")]
    pub kind: Option<tree_event::Kind>,
}

pub mod tree_event {
    #[derive(Clone, PartialEq, ::prost::Oneof)]
    pub enum Kind {
        #[prost(message, tag = "1")]
        Created(super::CreatedEvent),
        #[prost(message, tag = "2")]
        Exercised(super::ExercisedEvent),
    }
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct Transaction {
    #[prost(string, tag = "1")]
    pub transaction_id: String,
    #[prost(string, tag = "2")]
    pub command_id: String,
    #[prost(string, tag = "3")]
    pub workflow_id: String,
    #[prost(message, optional, tag = "4")]
    pub effective_at: Option<Timestamp>,
    #[prost(message, repeated, tag = "5")]
    pub events: Vec<Event>,
    #[prost(string, tag = "6")]
    pub offset: String,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct TransactionTree {
    #[prost(string, tag = "1")]
    pub transaction_id: String,
    #[prost(string, tag = "2")]
    pub command_id: String,
    #[prost(string, tag = "3")]
    pub workflow_id: String,
    #[prost(message, optional, tag = "4")]
    pub effective_at: Option<Timestamp>,
    #[prost(string, tag = "6")]
    pub offset: String,
    #[prost(btree_map = "string, message", tag = "7")]
    pub events_by_id: BTreeMap<String, TreeEvent>,
    #[prost(string, repeated, tag = "8")]
    pub root_event_ids: Vec<String>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct GetTransactionsResponse {
    #[prost(message, repeated, tag = "1")]
    pub transactions: Vec<Transaction>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct GetTransactionTreesResponse {
    #[prost(message, repeated, tag = "1")]
    pub transactions: Vec<TransactionTree>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct GetTransactionResponse {
    #[prost(message, optional, tag = "1")]
    pub transaction: Option<TransactionTree>,
}
