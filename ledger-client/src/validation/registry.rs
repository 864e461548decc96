//! Read-only mapping from message type to its composed validator

use super::ledger;
use super::traits::SharedValidator;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::sync::{Arc, OnceLock};

/// Identifies every message shape that has a registered schema
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MessageType {
    GetTransactionsRequest,
    GetTransactionByIdRequest,
    GetTransactionByEventIdRequest,
    GetActiveContractsRequest,
    SubmitRequest,
    SubmitAndWaitRequest,
    CompletionStreamRequest,
    SetTimeRequest,
    AllocatePartyRequest,
    CompletionEndResponse,
    GetLedgerEndResponse,
    SubmitAndWaitForTransactionIdResponse,
    ListKnownPackagesResponse,
}

impl MessageType {
    pub const ALL: [MessageType; 13] = [
        MessageType::GetTransactionsRequest,
        MessageType::GetTransactionByIdRequest,
        MessageType::GetTransactionByEventIdRequest,
        MessageType::GetActiveContractsRequest,
        MessageType::SubmitRequest,
        MessageType::SubmitAndWaitRequest,
        MessageType::CompletionStreamRequest,
        MessageType::SetTimeRequest,
        MessageType::AllocatePartyRequest,
        MessageType::CompletionEndResponse,
        MessageType::GetLedgerEndResponse,
        MessageType::SubmitAndWaitForTransactionIdResponse,
        MessageType::ListKnownPackagesResponse,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            MessageType::GetTransactionsRequest => "GetTransactionsRequest",
            MessageType::GetTransactionByIdRequest => "GetTransactionByIdRequest",
            MessageType::GetTransactionByEventIdRequest => "GetTransactionByEventIdRequest",
            MessageType::GetActiveContractsRequest => "GetActiveContractsRequest",
            MessageType::SubmitRequest => "SubmitRequest",
            MessageType::SubmitAndWaitRequest => "SubmitAndWaitRequest",
            MessageType::CompletionStreamRequest => "CompletionStreamRequest",
            MessageType::SetTimeRequest => "SetTimeRequest",
            MessageType::AllocatePartyRequest => "AllocatePartyRequest",
            MessageType::CompletionEndResponse => "CompletionEndResponse",
            MessageType::GetLedgerEndResponse => "GetLedgerEndResponse",
            MessageType::SubmitAndWaitForTransactionIdResponse => {
                "SubmitAndWaitForTransactionIdResponse"
            }
            MessageType::ListKnownPackagesResponse => "ListKnownPackagesResponse",
        }
    }

    fn schema(&self) -> SharedValidator {
        match self {
            MessageType::GetTransactionsRequest => ledger::get_transactions_request(),
            MessageType::GetTransactionByIdRequest => ledger::get_transaction_by_id_request(),
            MessageType::GetTransactionByEventIdRequest => {
                ledger::get_transaction_by_event_id_request()
            }
            MessageType::GetActiveContractsRequest => ledger::get_active_contracts_request(),
            MessageType::SubmitRequest => ledger::submit_request(),
            MessageType::SubmitAndWaitRequest => ledger::submit_and_wait_request(),
            MessageType::CompletionStreamRequest => ledger::completion_stream_request(),
            MessageType::SetTimeRequest => ledger::set_time_request(),
            MessageType::AllocatePartyRequest => ledger::allocate_party_request(),
            MessageType::CompletionEndResponse => ledger::completion_end_response(),
            MessageType::GetLedgerEndResponse => ledger::get_ledger_end_response(),
            MessageType::SubmitAndWaitForTransactionIdResponse => {
                ledger::submit_and_wait_for_transaction_id_response()
            }
            MessageType::ListKnownPackagesResponse => ledger::list_known_packages_response(),
        }
    }
}

impl fmt::Display for MessageType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Validators keyed by message type, assembled once and never mutated
#[derive(Debug, Clone, Default)]
pub struct ValidatorRegistry {
    validators: HashMap<MessageType, SharedValidator>,
}

impl ValidatorRegistry {
    /// A registry with every built-in ledger schema
    pub fn standard() -> Self {
        Self {
            validators: MessageType::ALL
                .iter()
                .map(|message_type| (*message_type, message_type.schema()))
                .collect(),
        }
    }

    /// A registry built from explicit entries
    pub fn from_entries(entries: impl IntoIterator<Item = (MessageType, SharedValidator)>) -> Self {
        Self {
            validators: entries.into_iter().collect(),
        }
    }

    /// The process-wide standard registry
    pub fn global() -> Arc<ValidatorRegistry> {
        static GLOBAL: OnceLock<Arc<ValidatorRegistry>> = OnceLock::new();
        GLOBAL
            .get_or_init(|| Arc::new(ValidatorRegistry::standard()))
            .clone()
    }

    pub fn get(&self, message_type: MessageType) -> Option<&SharedValidator> {
        self.validators.get(&message_type)
    }

    pub fn len(&self) -> usize {
        self.validators.len()
    }

    pub fn is_empty(&self) -> bool {
        self.validators.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::Validator;
    use serde_json::json;

    #[test]
    fn test_standard_registry_covers_every_message_type() {
        let registry = ValidatorRegistry::standard();
        assert_eq!(registry.len(), MessageType::ALL.len());
        for message_type in MessageType::ALL {
            let validator = registry.get(message_type);
            assert!(validator.is_some(), "no schema for {message_type}");
        }
    }

    #[test]
    fn test_schema_names_match_message_types() {
        let registry = ValidatorRegistry::standard();
        for message_type in MessageType::ALL {
            let name = registry.get(message_type).map(|v| v.type_name());
            assert_eq!(name.as_deref(), Some(message_type.as_str()));
        }
    }

    #[test]
    fn test_global_registry_is_shared() {
        let first = ValidatorRegistry::global();
        let second = ValidatorRegistry::global();
        assert!(Arc::ptr_eq(&first, &second));
    }

    #[test]
    fn test_validation_is_deterministic() {
        let registry = ValidatorRegistry::standard();
        let request = json!({
            "begin": {"boundary": "NOW"},
            "filter": {"filtersByParty": {"alice": {"inclusive": {"templateIds": [{}]}}}},
            "unknown": 1
        });
        let validator = registry.get(MessageType::GetTransactionsRequest);
        let first = validator.map(|v| v.validate(&request));
        let second = validator.map(|v| v.validate(&request));
        assert!(first.is_some());
        assert_eq!(first, second);
    }

    #[test]
    fn test_from_entries() {
        let registry = ValidatorRegistry::from_entries([(
            MessageType::SetTimeRequest,
            crate::validation::ledger::set_time_request(),
        )]);
        assert_eq!(registry.len(), 1);
        assert!(registry.get(MessageType::SubmitRequest).is_none());
        assert!(!registry.is_empty());
    }
}
