use super::ClientContext;
use crate::forward::{forward, ForwardStream};
use crate::model;
use crate::transport::TimeService;
use crate::types::ClientError;
use crate::wire;
use serde_json::Value;
use std::sync::Arc;
use tracing::debug;

/// Reads and, on static-time ledgers, moves the ledger clock
#[derive(Clone)]
pub struct TimeClient {
    context: ClientContext,
    service: Arc<dyn TimeService>,
}

impl TimeClient {
    pub fn new(context: ClientContext, service: Arc<dyn TimeService>) -> Self {
        Self { context, service }
    }

    pub fn ledger_id(&self) -> &str {
        self.context.ledger_id()
    }

    pub async fn get_time(&self) -> Result<ForwardStream<model::GetTimeResponse>, ClientError> {
        let request: wire::GetTimeRequest = self.context.scoped();
        let upstream = self.service.get_time(request).await?;
        Ok(self.context.stream(upstream, model::GetTimeResponse::try_from))
    }

    /// Compare-and-set: the ledger only moves if its clock still reads `currentTime`
    pub async fn set_time(&self, request: &Value) -> Result<(), ClientError> {
        let request = self
            .context
            .request::<model::SetTimeRequest, wire::SetTimeRequest>(request)?;
        debug!("Setting time on ledger {}", request.ledger_id);
        forward(self.service.set_time(request).await, |()| Ok(()))
    }
}
