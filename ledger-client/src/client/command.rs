use super::ClientContext;
use crate::forward::forward;
use crate::model;
use crate::transport::CommandService;
use crate::types::ClientError;
use crate::wire;
use serde_json::Value;
use std::sync::Arc;
use tracing::debug;

/// Submits commands and waits for their outcome
#[derive(Clone)]
pub struct CommandClient {
    context: ClientContext,
    service: Arc<dyn CommandService>,
}

impl CommandClient {
    pub fn new(context: ClientContext, service: Arc<dyn CommandService>) -> Self {
        Self { context, service }
    }

    pub fn ledger_id(&self) -> &str {
        self.context.ledger_id()
    }

    pub async fn submit_and_wait(&self, request: &Value) -> Result<(), ClientError> {
        let request = self.submit_request(request)?;
        forward(self.service.submit_and_wait(request).await, |()| Ok(()))
    }

    pub async fn submit_and_wait_for_transaction_id(
        &self,
        request: &Value,
    ) -> Result<model::SubmitAndWaitForTransactionIdResponse, ClientError> {
        let request = self.submit_request(request)?;
        forward(
            self.service.submit_and_wait_for_transaction_id(request).await,
            |response| Ok(model::SubmitAndWaitForTransactionIdResponse::from(response)),
        )
    }

    fn submit_request(&self, request: &Value) -> Result<wire::SubmitAndWaitRequest, ClientError> {
        let request = self
            .context
            .request::<model::SubmitAndWaitRequest, wire::SubmitAndWaitRequest>(request)?;
        if let Some(commands) = &request.commands {
            debug!(
                "Submitting command {} for party {}",
                commands.command_id, commands.party
            );
        }
        Ok(request)
    }
}
