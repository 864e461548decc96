//! Schemas for the ledger API messages
//!
//! Every function here only wires leaf and composite validators together; the
//! result mirrors the nested shape of the corresponding type in
//! [`crate::model`].

mod commands;
mod common;
mod requests;
mod responses;
mod value;

pub use commands::{command, commands, create_command, exercise_command, submit_and_wait_request, submit_request};
pub use common::{duration, identifier, ledger_offset, timestamp};
pub use requests::{
    allocate_party_request, completion_stream_request, filters, get_active_contracts_request,
    get_transaction_by_event_id_request, get_transaction_by_id_request, get_transactions_request,
    inclusive_filters, set_time_request, transaction_filter,
};
pub use responses::{
    completion_end_response, get_ledger_end_response, list_known_packages_response,
    package_details, submit_and_wait_for_transaction_id_response,
};
pub use value::{record, value};
