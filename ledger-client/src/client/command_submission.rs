use super::ClientContext;
use crate::forward::forward;
use crate::model;
use crate::transport::CommandSubmissionService;
use crate::types::ClientError;
use crate::wire;
use serde_json::Value;
use std::sync::Arc;
use tracing::debug;

/// Fire-and-forget command submission; outcomes arrive on the completion stream
#[derive(Clone)]
pub struct CommandSubmissionClient {
    context: ClientContext,
    service: Arc<dyn CommandSubmissionService>,
}

impl CommandSubmissionClient {
    pub fn new(context: ClientContext, service: Arc<dyn CommandSubmissionService>) -> Self {
        Self { context, service }
    }

    pub fn ledger_id(&self) -> &str {
        self.context.ledger_id()
    }

    pub async fn submit(&self, request: &Value) -> Result<(), ClientError> {
        let request = self
            .context
            .request::<model::SubmitRequest, wire::SubmitRequest>(request)?;
        if let Some(commands) = &request.commands {
            debug!("Submitting command {}", commands.command_id);
        }
        forward(self.service.submit(request).await, |()| Ok(()))
    }
}
