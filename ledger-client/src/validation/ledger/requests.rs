//! Request schemas for the transaction, active contract, completion, time and
//! party management services

use super::common::{identifier, ledger_offset, timestamp};
use crate::validation::leaf::{array, boolean, string};
use crate::validation::object::{map, ObjectValidator};
use crate::validation::traits::SharedValidator;

pub fn inclusive_filters() -> SharedValidator {
    ObjectValidator::new("InclusiveFilters")
        .required("templateIds", array(identifier()))
        .shared()
}

pub fn filters() -> SharedValidator {
    ObjectValidator::new("Filters")
        .optional("inclusive", inclusive_filters())
        .shared()
}

pub fn transaction_filter() -> SharedValidator {
    ObjectValidator::new("TransactionFilter")
        .required("filtersByParty", map(filters()))
        .shared()
}

pub fn get_transactions_request() -> SharedValidator {
    ObjectValidator::new("GetTransactionsRequest")
        .required("begin", ledger_offset())
        .optional("end", ledger_offset())
        .required("filter", transaction_filter())
        .optional("verbose", boolean())
        .shared()
}

pub fn get_transaction_by_id_request() -> SharedValidator {
    ObjectValidator::new("GetTransactionByIdRequest")
        .required("transactionId", string())
        .required("requestingParties", array(string()))
        .shared()
}

pub fn get_transaction_by_event_id_request() -> SharedValidator {
    ObjectValidator::new("GetTransactionByEventIdRequest")
        .required("eventId", string())
        .required("requestingParties", array(string()))
        .shared()
}

pub fn get_active_contracts_request() -> SharedValidator {
    ObjectValidator::new("GetActiveContractsRequest")
        .required("filter", transaction_filter())
        .optional("verbose", boolean())
        .shared()
}

pub fn completion_stream_request() -> SharedValidator {
    ObjectValidator::new("CompletionStreamRequest")
        .required("applicationId", string())
        .required("offset", ledger_offset())
        .required("parties", array(string()))
        .shared()
}

pub fn set_time_request() -> SharedValidator {
    ObjectValidator::new("SetTimeRequest")
        .required("currentTime", timestamp())
        .required("newTime", timestamp())
        .shared()
}

pub fn allocate_party_request() -> SharedValidator {
    ObjectValidator::new("AllocatePartyRequest")
        .optional("partyIdHint", string())
        .optional("displayName", string())
        .shared()
}
