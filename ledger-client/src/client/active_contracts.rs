use super::ClientContext;
use crate::forward::ForwardStream;
use crate::model;
use crate::transport::ActiveContractsService;
use crate::types::ClientError;
use crate::wire;
use serde_json::Value;
use std::sync::Arc;
use tracing::debug;

/// Streams the active contract set visible to a filter
#[derive(Clone)]
pub struct ActiveContractsClient {
    context: ClientContext,
    service: Arc<dyn ActiveContractsService>,
}

impl ActiveContractsClient {
    pub fn new(context: ClientContext, service: Arc<dyn ActiveContractsService>) -> Self {
        Self { context, service }
    }

    pub fn ledger_id(&self) -> &str {
        self.context.ledger_id()
    }

    /// `verbose` defaults to `true` when the request leaves it out
    pub async fn get_active_contracts(
        &self,
        request: &Value,
    ) -> Result<ForwardStream<model::GetActiveContractsResponse>, ClientError> {
        let request = self.context.request::<
            model::GetActiveContractsRequest,
            wire::GetActiveContractsRequest,
        >(request)?;
        debug!("Requesting active contracts from ledger {}", request.ledger_id);
        let upstream = self.service.get_active_contracts(request).await?;
        Ok(self
            .context
            .stream(upstream, model::GetActiveContractsResponse::try_from))
    }
}
