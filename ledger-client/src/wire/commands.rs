use super::common::{Identifier, Timestamp};
use super::values::{Record, Value};

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct CreateCommand {
    #[prost(message, optional, tag = "1")]
    pub template_id: Option<Identifier>,
    #[prost(message, optional, tag = "2")]
    pub create_arguments: Option<Record>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ExerciseCommand {
    #[prost(message, optional, tag = "1")]
    pub template_id: Option<Identifier>,
    #[prost(string, tag = "2")]
    pub contract_id: String,
    #[prost(string, tag = "3")]
    pub choice: String,
    #[prost(message, optional, tag = "4")]
    pub choice_argument: Option<Value>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct Command {
    #[prost(oneof = "command::Command", tags = "1, 2")]
    pub command: Option<command::Command>,
}

pub mod command {
    #[derive(Clone, PartialEq, ::prost::Oneof)]
    pub enum Command {
        #[prost(message, tag = "1")]
        Create(super::CreateCommand),
        #[prost(message, tag = "2")]
        Exercise(super::ExerciseCommand),
    }
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct Commands {
    #[prost(string, tag = "1")]
    pub ledger_id: String,
    #[prost(string, tag = "2")]
    pub workflow_id: String,
    #[prost(string, tag = "3")]
    pub application_id: String,
    #[prost(string, tag = "4")]
    pub command_id: String,
    #[prost(string, tag = "5")]
    pub party: String,
    #[prost(message, optional, tag = "6")]
    pub ledger_effective_time: Option<Timestamp>,
    #[prost(message, optional, tag = "7")]
    pub maximum_record_time: Option<Timestamp>,
    #[prost(message, repeated, tag = "8")]
    pub commands: Vec<Command>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct SubmitRequest {
    #[prost(message, optional, tag = "1")]
    pub commands: Option<Commands>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct SubmitAndWaitRequest {
    #[prost(message, optional, tag = "1")]
    pub commands: Option<Commands>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct SubmitAndWaitForTransactionIdResponse {
    #[prost(string, tag = "1")]
    pub transaction_id: String,
}
