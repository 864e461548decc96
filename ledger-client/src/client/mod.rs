//! Endpoint wrappers over the transport collaborators
//!
//! Every endpoint that takes caller input runs the same sequence: validate
//! against the registered schema, convert to the wire message and stamp the
//! ledger id, dispatch through the transport, then forward the result.
//! Invalid input never reaches the transport.

mod active_contracts;
mod command;
mod command_completion;
mod command_submission;
mod ledger_configuration;
mod ledger_identity;
mod package;
mod package_management;
mod party_management;
mod reset;
mod time;
mod transaction;

pub use active_contracts::ActiveContractsClient;
pub use command::CommandClient;
pub use command_completion::CommandCompletionClient;
pub use command_submission::CommandSubmissionClient;
pub use ledger_configuration::LedgerConfigurationClient;
pub use ledger_identity::LedgerIdentityClient;
pub use package::PackageClient;
pub use package_management::PackageManagementClient;
pub use party_management::PartyManagementClient;
pub use reset::ResetClient;
pub use time::TimeClient;
pub use transaction::TransactionClient;

use crate::convert::{ConversionError, ConversionPipeline, LedgerScoped};
use crate::forward::{ForwardStream, TransportStream};
use crate::model::Schema;
use crate::reporting::ValidationReporter;
use crate::transport::*;
use crate::types::{ClientConfig, ClientError};
use crate::validation::ValidatorRegistry;
use serde_json::Value;
use std::sync::Arc;
use tracing::info;

/// What every endpoint wrapper shares: the ledger it talks to, the
/// validation pipeline and the streaming buffer size
#[derive(Debug, Clone)]
pub struct ClientContext {
    ledger_id: String,
    pipeline: ConversionPipeline,
    stream_buffer_size: usize,
}

impl ClientContext {
    pub fn new(
        ledger_id: impl Into<String>,
        pipeline: ConversionPipeline,
        stream_buffer_size: usize,
    ) -> Self {
        Self {
            ledger_id: ledger_id.into(),
            pipeline,
            stream_buffer_size,
        }
    }

    pub fn ledger_id(&self) -> &str {
        &self.ledger_id
    }

    pub fn pipeline(&self) -> &ConversionPipeline {
        &self.pipeline
    }

    /// Validate and convert caller input into a wire request for this ledger
    pub(crate) fn request<D, W>(&self, value: &Value) -> Result<W, ClientError>
    where
        D: Schema,
        W: From<D> + LedgerScoped,
    {
        self.pipeline
            .convert::<D, W>(value)
            .map(|request| request.with_ledger_id(&self.ledger_id))
    }

    /// A wire request that carries nothing but the ledger id
    pub(crate) fn scoped<W: Default + LedgerScoped>(&self) -> W {
        W::default().with_ledger_id(&self.ledger_id)
    }

    pub(crate) fn stream<R, T, F>(&self, upstream: TransportStream<R>, transform: F) -> ForwardStream<T>
    where
        R: Send + 'static,
        T: Send + 'static,
        F: FnMut(R) -> Result<T, ConversionError> + Send + 'static,
    {
        ForwardStream::new(upstream, transform, self.stream_buffer_size)
    }
}

/// The transport collaborators of one ledger connection
#[derive(Clone)]
pub struct LedgerServices {
    pub active_contracts: Arc<dyn ActiveContractsService>,
    pub command: Arc<dyn CommandService>,
    pub command_completion: Arc<dyn CommandCompletionService>,
    pub command_submission: Arc<dyn CommandSubmissionService>,
    pub ledger_identity: Arc<dyn LedgerIdentityService>,
    pub package: Arc<dyn PackageService>,
    pub ledger_configuration: Arc<dyn LedgerConfigurationService>,
    pub time: Arc<dyn TimeService>,
    pub transaction: Arc<dyn TransactionService>,
    pub reset: Arc<dyn ResetService>,
    pub party_management: Arc<dyn PartyManagementService>,
    pub package_management: Arc<dyn PackageManagementService>,
}

/// Client for an existing ledger, with one wrapper per service
#[derive(Clone)]
pub struct DamlLedgerClient {
    ledger_id: String,
    active_contracts: ActiveContractsClient,
    command: CommandClient,
    command_completion: CommandCompletionClient,
    command_submission: CommandSubmissionClient,
    ledger_identity: LedgerIdentityClient,
    package: PackageClient,
    ledger_configuration: LedgerConfigurationClient,
    time: TimeClient,
    transaction: TransactionClient,
    reset: ResetClient,
    party_management: PartyManagementClient,
    package_management: PackageManagementClient,
}

impl DamlLedgerClient {
    /// Fetch the ledger id and build every service client, rendering
    /// validation failures with the configured reporter
    pub async fn connect(config: ClientConfig, services: LedgerServices) -> Result<Self, ClientError> {
        let reporter = config.reporter.build();
        Self::connect_with_reporter(config, services, reporter).await
    }

    /// Like [`connect`](Self::connect) with a caller-supplied reporter
    pub async fn connect_with_reporter(
        config: ClientConfig,
        services: LedgerServices,
        reporter: Arc<dyn ValidationReporter>,
    ) -> Result<Self, ClientError> {
        config.validate()?;

        let ledger_identity = LedgerIdentityClient::new(services.ledger_identity.clone());
        let ledger_id = ledger_identity.get_ledger_identity().await?.ledger_id;
        info!("Connected to ledger {}", ledger_id);

        let pipeline = ConversionPipeline::new(ValidatorRegistry::global(), reporter);
        let context = ClientContext::new(ledger_id.clone(), pipeline, config.stream_buffer_size);

        Ok(Self {
            ledger_id,
            active_contracts: ActiveContractsClient::new(context.clone(), services.active_contracts),
            command: CommandClient::new(context.clone(), services.command),
            command_completion: CommandCompletionClient::new(
                context.clone(),
                services.command_completion,
            ),
            command_submission: CommandSubmissionClient::new(
                context.clone(),
                services.command_submission,
            ),
            ledger_identity,
            package: PackageClient::new(context.clone(), services.package),
            ledger_configuration: LedgerConfigurationClient::new(
                context.clone(),
                services.ledger_configuration,
            ),
            time: TimeClient::new(context.clone(), services.time),
            transaction: TransactionClient::new(context.clone(), services.transaction),
            reset: ResetClient::new(context.clone(), services.reset),
            party_management: PartyManagementClient::new(context.clone(), services.party_management),
            package_management: PackageManagementClient::new(context, services.package_management),
        })
    }

    pub fn ledger_id(&self) -> &str {
        &self.ledger_id
    }

    pub fn active_contracts_client(&self) -> &ActiveContractsClient {
        &self.active_contracts
    }

    pub fn command_client(&self) -> &CommandClient {
        &self.command
    }

    pub fn command_completion_client(&self) -> &CommandCompletionClient {
        &self.command_completion
    }

    pub fn command_submission_client(&self) -> &CommandSubmissionClient {
        &self.command_submission
    }

    pub fn ledger_identity_client(&self) -> &LedgerIdentityClient {
        &self.ledger_identity
    }

    pub fn package_client(&self) -> &PackageClient {
        &self.package
    }

    pub fn ledger_configuration_client(&self) -> &LedgerConfigurationClient {
        &self.ledger_configuration
    }

    pub fn time_client(&self) -> &TimeClient {
        &self.time
    }

    pub fn transaction_client(&self) -> &TransactionClient {
        &self.transaction
    }

    pub fn reset_client(&self) -> &ResetClient {
        &self.reset
    }

    pub fn party_management_client(&self) -> &PartyManagementClient {
        &self.party_management
    }

    pub fn package_management_client(&self) -> &PackageManagementClient {
        &self.package_management
    }
}

impl std::fmt::Debug for DamlLedgerClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DamlLedgerClient")
            .field("ledger_id", &self.ledger_id)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use super::*;
    use crate::reporting::JsonReporter;
    use crate::validation::ValidationTree;

    pub const LEDGER_ID: &str = "test-ledger";

    pub fn context() -> ClientContext {
        ClientContext::new(
            LEDGER_ID,
            ConversionPipeline::new(ValidatorRegistry::global(), Arc::new(JsonReporter)),
            16,
        )
    }

    /// The tree carried by a validation error, recovered from the JSON
    /// reporter's message
    pub fn reported_tree<T: std::fmt::Debug>(result: Result<T, ClientError>) -> ValidationTree {
        match result {
            Err(ClientError::Validation(failure)) => failure.parse_tree().unwrap(),
            other => panic!("expected a validation failure, got {other:?}"),
        }
    }
}
