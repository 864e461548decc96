use super::common::{Identifier, LedgerOffset, Timestamp, TransactionFilter};
use super::value::{Record, Value};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Used for both flat transactions and transaction trees
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GetTransactionsRequest {
    pub begin: LedgerOffset,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end: Option<LedgerOffset>,
    pub filter: TransactionFilter,
    /// Defaults to `true` when omitted
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub verbose: Option<bool>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GetTransactionByIdRequest {
    pub transaction_id: String,
    pub requesting_parties: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GetTransactionByEventIdRequest {
    pub event_id: String,
    pub requesting_parties: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatedEvent {
    pub event_id: String,
    pub contract_id: String,
    pub template_id: Identifier,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contract_key: Option<Value>,
    pub arguments: Record,
    pub witness_parties: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ArchivedEvent {
    pub event_id: String,
    pub contract_id: String,
    pub template_id: Identifier,
    pub witness_parties: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExercisedEvent {
    pub event_id: String,
    pub contract_id: String,
    pub template_id: Identifier,
    pub contract_creating_event_id: String,
    pub choice: String,
    pub argument: Value,
    pub acting_parties: Vec<String>,
    pub consuming: bool,
    pub witness_parties: Vec<String>,
    pub child_event_ids: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exercise_result: Option<Value>,
}

/// Event of a flat transaction
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Event {
    Created(CreatedEvent),
    Archived(ArchivedEvent),
}

/// Event of a transaction tree
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum TreeEvent {
    Created(CreatedEvent),
    Exercised(ExercisedEvent),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    pub transaction_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub command_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub workflow_id: Option<String>,
    pub effective_at: Timestamp,
    pub events: Vec<Event>,
    pub offset: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionTree {
    pub transaction_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub command_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub workflow_id: Option<String>,
    pub effective_at: Timestamp,
    pub offset: String,
    pub events_by_id: BTreeMap<String, TreeEvent>,
    pub root_event_ids: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GetTransactionsResponse {
    pub transactions: Vec<Transaction>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GetTransactionTreesResponse {
    pub transactions: Vec<TransactionTree>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GetTransactionResponse {
    pub transaction: TransactionTree,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GetLedgerEndResponse {
    pub offset: LedgerOffset,
}
