//! Typed domain shapes for ledger API messages
//!
//! These mirror the JSON shapes callers pass in. They carry no wire types;
//! mapping to and from the protocol lives in [`crate::convert`].

pub mod commands;
pub mod common;
pub mod services;
pub mod transactions;
pub mod value;

pub use commands::*;
pub use common::*;
pub use services::*;
pub use transactions::*;
pub use value::*;

use crate::validation::MessageType;
use serde::de::DeserializeOwned;

/// A domain shape that has a registered schema
pub trait Schema: DeserializeOwned {
    const MESSAGE_TYPE: MessageType;
}

macro_rules! impl_schema {
    ($($ty:ty => $message_type:ident),* $(,)?) => {
        $(
            impl Schema for $ty {
                const MESSAGE_TYPE: MessageType = MessageType::$message_type;
            }
        )*
    };
}

impl_schema! {
    GetTransactionsRequest => GetTransactionsRequest,
    GetTransactionByIdRequest => GetTransactionByIdRequest,
    GetTransactionByEventIdRequest => GetTransactionByEventIdRequest,
    GetActiveContractsRequest => GetActiveContractsRequest,
    SubmitRequest => SubmitRequest,
    SubmitAndWaitRequest => SubmitAndWaitRequest,
    CompletionStreamRequest => CompletionStreamRequest,
    SetTimeRequest => SetTimeRequest,
    AllocatePartyRequest => AllocatePartyRequest,
    CompletionEndResponse => CompletionEndResponse,
    GetLedgerEndResponse => GetLedgerEndResponse,
    SubmitAndWaitForTransactionIdResponse => SubmitAndWaitForTransactionIdResponse,
    ListKnownPackagesResponse => ListKnownPackagesResponse,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::{Validator, ValidatorRegistry};
    use serde::Serialize;
    use serde_json::json;

    /// A domain value serialized back to JSON must satisfy its own schema
    fn assert_self_valid<T: Schema + Serialize>(value: &T) {
        let json = serde_json::to_value(value).unwrap();
        let registry = ValidatorRegistry::standard();
        let tree = registry.get(T::MESSAGE_TYPE).unwrap().validate(&json);
        assert!(tree.is_valid(), "{} produced {tree:?}", T::MESSAGE_TYPE);
    }

    #[test]
    fn test_domain_shapes_match_schemas() {
        assert_self_valid(&GetTransactionsRequest {
            begin: LedgerOffset::begin(),
            end: Some(LedgerOffset::absolute("10")),
            filter: TransactionFilter::for_party("alice"),
            verbose: None,
        });
        assert_self_valid(&GetActiveContractsRequest {
            filter: TransactionFilter::for_party("bob"),
            verbose: Some(false),
        });
        assert_self_valid(&AllocatePartyRequest::default());
        assert_self_valid(&ListKnownPackagesResponse {
            package_details_list: vec![PackageDetails {
                package_id: "pkg".to_string(),
                package_size: 2048,
                known_since: Some(Timestamp {
                    seconds: 1,
                    nanoseconds: 2,
                }),
                source_description: "upload".to_string(),
            }],
        });
    }

    #[test]
    fn test_submit_request_decodes_from_json() {
        let request: SubmitRequest = serde_json::from_value(json!({
            "commands": {
                "applicationId": "app",
                "commandId": "c1",
                "party": "alice",
                "ledgerEffectiveTime": {"seconds": 0, "nanoseconds": 0},
                "maximumRecordTime": {"seconds": 5, "nanoseconds": 0},
                "list": [{"exercise": {
                    "templateId": {"packageId": "p", "moduleName": "M", "entityName": "T"},
                    "contractId": "#1:0",
                    "choice": "Archive",
                    "argument": {"record": {"fields": {}}}
                }}]
            }
        }))
        .unwrap();
        assert_eq!(request.commands.workflow_id, None);
        assert!(matches!(request.commands.list[0], Command::Exercise(_)));
        assert_self_valid(&request);
    }
}
