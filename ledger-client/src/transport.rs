//! Transport collaborators, one per ledger API service
//!
//! Implementations own connections, credentials, timeouts and retries. They
//! exchange wire messages only and report failures as `tonic::Status`, which
//! the client passes through unmodified. A streaming call hands back a
//! [`TransportStream`]; dropping it must abort the call.

use crate::forward::TransportStream;
use crate::wire;
use async_trait::async_trait;
use tonic::Status;

#[cfg_attr(any(test, feature = "testing"), mockall::automock)]
#[async_trait]
pub trait ActiveContractsService: Send + Sync {
    async fn get_active_contracts(
        &self,
        request: wire::GetActiveContractsRequest,
    ) -> Result<TransportStream<wire::GetActiveContractsResponse>, Status>;
}

#[cfg_attr(any(test, feature = "testing"), mockall::automock)]
#[async_trait]
pub trait CommandService: Send + Sync {
    async fn submit_and_wait(&self, request: wire::SubmitAndWaitRequest) -> Result<(), Status>;

    async fn submit_and_wait_for_transaction_id(
        &self,
        request: wire::SubmitAndWaitRequest,
    ) -> Result<wire::SubmitAndWaitForTransactionIdResponse, Status>;
}

#[cfg_attr(any(test, feature = "testing"), mockall::automock)]
#[async_trait]
pub trait CommandCompletionService: Send + Sync {
    async fn completion_stream(
        &self,
        request: wire::CompletionStreamRequest,
    ) -> Result<TransportStream<wire::CompletionStreamResponse>, Status>;

    async fn completion_end(
        &self,
        request: wire::CompletionEndRequest,
    ) -> Result<wire::CompletionEndResponse, Status>;
}

#[cfg_attr(any(test, feature = "testing"), mockall::automock)]
#[async_trait]
pub trait CommandSubmissionService: Send + Sync {
    async fn submit(&self, request: wire::SubmitRequest) -> Result<(), Status>;
}

#[cfg_attr(any(test, feature = "testing"), mockall::automock)]
#[async_trait]
pub trait LedgerIdentityService: Send + Sync {
    async fn get_ledger_identity(
        &self,
        request: wire::GetLedgerIdentityRequest,
    ) -> Result<wire::GetLedgerIdentityResponse, Status>;
}

#[cfg_attr(any(test, feature = "testing"), mockall::automock)]
#[async_trait]
pub trait PackageService: Send + Sync {
    async fn list_packages(
        &self,
        request: wire::ListPackagesRequest,
    ) -> Result<wire::ListPackagesResponse, Status>;

    async fn get_package(
        &self,
        request: wire::GetPackageRequest,
    ) -> Result<wire::GetPackageResponse, Status>;

    async fn get_package_status(
        &self,
        request: wire::GetPackageStatusRequest,
    ) -> Result<wire::GetPackageStatusResponse, Status>;
}

#[cfg_attr(any(test, feature = "testing"), mockall::automock)]
#[async_trait]
pub trait LedgerConfigurationService: Send + Sync {
    async fn get_ledger_configuration(
        &self,
        request: wire::GetLedgerConfigurationRequest,
    ) -> Result<TransportStream<wire::GetLedgerConfigurationResponse>, Status>;
}

#[cfg_attr(any(test, feature = "testing"), mockall::automock)]
#[async_trait]
pub trait TimeService: Send + Sync {
    async fn get_time(
        &self,
        request: wire::GetTimeRequest,
    ) -> Result<TransportStream<wire::GetTimeResponse>, Status>;

    async fn set_time(&self, request: wire::SetTimeRequest) -> Result<(), Status>;
}

#[cfg_attr(any(test, feature = "testing"), mockall::automock)]
#[async_trait]
pub trait TransactionService: Send + Sync {
    async fn get_transactions(
        &self,
        request: wire::GetTransactionsRequest,
    ) -> Result<TransportStream<wire::GetTransactionsResponse>, Status>;

    async fn get_transaction_trees(
        &self,
        request: wire::GetTransactionsRequest,
    ) -> Result<TransportStream<wire::GetTransactionTreesResponse>, Status>;

    async fn get_transaction_by_id(
        &self,
        request: wire::GetTransactionByIdRequest,
    ) -> Result<wire::GetTransactionResponse, Status>;

    async fn get_transaction_by_event_id(
        &self,
        request: wire::GetTransactionByEventIdRequest,
    ) -> Result<wire::GetTransactionResponse, Status>;

    async fn get_ledger_end(
        &self,
        request: wire::GetLedgerEndRequest,
    ) -> Result<wire::GetLedgerEndResponse, Status>;
}

#[cfg_attr(any(test, feature = "testing"), mockall::automock)]
#[async_trait]
pub trait ResetService: Send + Sync {
    async fn reset(&self, request: wire::ResetRequest) -> Result<(), Status>;
}

#[cfg_attr(any(test, feature = "testing"), mockall::automock)]
#[async_trait]
pub trait PartyManagementService: Send + Sync {
    async fn get_participant_id(
        &self,
        request: wire::GetParticipantIdRequest,
    ) -> Result<wire::GetParticipantIdResponse, Status>;

    async fn list_known_parties(
        &self,
        request: wire::ListKnownPartiesRequest,
    ) -> Result<wire::ListKnownPartiesResponse, Status>;

    async fn allocate_party(
        &self,
        request: wire::AllocatePartyRequest,
    ) -> Result<wire::AllocatePartyResponse, Status>;
}

#[cfg_attr(any(test, feature = "testing"), mockall::automock)]
#[async_trait]
pub trait PackageManagementService: Send + Sync {
    async fn list_known_packages(
        &self,
        request: wire::ListKnownPackagesRequest,
    ) -> Result<wire::ListKnownPackagesResponse, Status>;
}
