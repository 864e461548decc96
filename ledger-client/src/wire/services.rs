use super::common::{Duration, LedgerOffset, Timestamp, TransactionFilter};
use super::transactions::CreatedEvent;

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct GetActiveContractsRequest {
    #[prost(string, tag = "1")]
    pub ledger_id: String,
    #[prost(message, optional, tag = "2")]
    pub filter: Option<TransactionFilter>,
    #[prost(bool, tag = "3")]
    pub verbose: bool,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct GetActiveContractsResponse {
    #[prost(string, tag = "1")]
    pub offset: String,
    #[prost(string, tag = "2")]
    pub workflow_id: String,
    #[prost(message, repeated, tag = "3")]
    pub active_contracts: Vec<CreatedEvent>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct CompletionStreamRequest {
    #[prost(string, tag = "1")]
    pub ledger_id: String,
    #[prost(string, tag = "2")]
    pub application_id: String,
    #[prost(string, repeated, tag = "3")]
    pub parties: Vec<String>,
    #[prost(message, optional, tag = "4")]
    pub offset: Option<LedgerOffset>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct Checkpoint {
    #[prost(message, optional, tag = "1")]
    pub record_time: Option<Timestamp>,
    #[prost(message, optional, tag = "2")]
    pub offset: Option<LedgerOffset>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct Status {
    #[prost(int32, tag = "1")]
    pub code: i32,
    #[prost(string, tag = "2")]
    pub message: String,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct Completion {
    #[prost(string, tag = "1")]
    pub command_id: String,
    #[prost(message, optional, tag = "2")]
    pub status: Option<Status>,
    #[prost(string, tag = "3")]
    pub transaction_id: String,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct CompletionStreamResponse {
    #[prost(message, optional, tag = "1")]
    pub checkpoint: Option<Checkpoint>,
    #[prost(message, repeated, tag = "2")]
    pub completions: Vec<Completion>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct CompletionEndRequest {
    #[prost(string, tag = "1")]
    pub ledger_id: String,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct CompletionEndResponse {
    #[prost(message, optional, tag = "1")]
    pub offset: Option<LedgerOffset>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct GetLedgerIdentityRequest {}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct GetLedgerIdentityResponse {
    #[prost(string, tag = "1")]
    pub ledger_id: String,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ListPackagesRequest {
    #[prost(string, tag = "1")]
    pub ledger_id: String,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ListPackagesResponse {
    #[prost(string, repeated, tag = "1")]
    pub package_ids: Vec<String>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct GetPackageRequest {
    #[prost(string, tag = "1")]
    pub ledger_id: String,
    #[prost(string, tag = "2")]
    pub package_id: String,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, ::prost::Enumeration)]
#[repr(i32)]
pub enum HashFunction {
    Sha256 = 0,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct GetPackageResponse {
    #[prost(enumeration = "HashFunction", tag = "1")]
    pub hash_function: i32,
    #[prost(bytes = "vec", tag = "2")]
    pub archive_payload: Vec<u8>,
    #[prost(string, tag = "3")]
    pub hash: String,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct GetPackageStatusRequest {
    #[prost(string, tag = "1")]
    pub ledger_id: String,
    #[prost(string, tag = "2")]
    pub package_id: String,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, ::prost::Enumeration)]
#[repr(i32)]
pub enum PackageStatus {
    Unknown = 0,
    Registered = 1,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct GetPackageStatusResponse {
    #[prost(enumeration = "PackageStatus", tag = "1")]
    pub package_status: i32,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct GetLedgerConfigurationRequest {
    #[prost(string, tag = "1")]
    pub ledger_id: String,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct LedgerConfiguration {
    #[prost(message, optional, tag = "1")]
    pub min_ttl: Option<Duration>,
    #[prost(message, optional, tag = "2")]
    pub max_ttl: Option<Duration>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct GetLedgerConfigurationResponse {
    #[prost(message, optional, tag = "1")]
    pub ledger_configuration: Option<LedgerConfiguration>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct GetTimeRequest {
    #[prost(string, tag = "1")]
    pub ledger_id: String,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct GetTimeResponse {
    #[prost(message, optional, tag = "1")]
    pub current_time: Option<Timestamp>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct SetTimeRequest {
    #[prost(string, tag = "1")]
    pub ledger_id: String,
    #[prost(message, optional, tag = "2")]
    pub current_time: Option<Timestamp>,
    #[prost(message, optional, tag = "3")]
    pub new_time: Option<Timestamp>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ResetRequest {
    #[prost(string, tag = "1")]
    pub ledger_id: String,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct GetParticipantIdRequest {}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct GetParticipantIdResponse {
    #[prost(string, tag = "1")]
    pub participant_id: String,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct PartyDetails {
    #[prost(string, tag = "1")]
    pub party: String,
    #[prost(string, tag = "2")]
    pub display_name: String,
    #[prost(bool, tag = "3")]
    pub is_local: bool,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ListKnownPartiesRequest {}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ListKnownPartiesResponse {
    #[prost(message, repeated, tag = "1")]
    pub party_details: Vec<PartyDetails>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct AllocatePartyRequest {
    #[prost(string, tag = "1")]
    pub party_id_hint: String,
    #[prost(string, tag = "2")]
    pub display_name: String,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct AllocatePartyResponse {
    #[prost(message, optional, tag = "1")]
    pub party_details: Option<PartyDetails>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ListKnownPackagesRequest {}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct PackageDetails {
    #[prost(string, tag = "1")]
    pub package_id: String,
    #[prost(uint64, tag = "2")]
    pub package_size: u64,
    #[prost(message, optional, tag = "3")]
    pub known_since: Option<Timestamp>,
    #[prost(string, tag = "4")]
    pub source_description: String,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ListKnownPackagesResponse {
    #[prost(message, repeated, tag = "1")]
    pub package_details: Vec<PackageDetails>,
}
