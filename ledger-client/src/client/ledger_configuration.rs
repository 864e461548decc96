use super::ClientContext;
use crate::forward::ForwardStream;
use crate::model;
use crate::transport::LedgerConfigurationService;
use crate::types::ClientError;
use crate::wire;
use std::sync::Arc;

/// Follows changes to the ledger's time model configuration
#[derive(Clone)]
pub struct LedgerConfigurationClient {
    context: ClientContext,
    service: Arc<dyn LedgerConfigurationService>,
}

impl LedgerConfigurationClient {
    pub fn new(context: ClientContext, service: Arc<dyn LedgerConfigurationService>) -> Self {
        Self { context, service }
    }

    pub fn ledger_id(&self) -> &str {
        self.context.ledger_id()
    }

    pub async fn get_ledger_configuration(
        &self,
    ) -> Result<ForwardStream<model::GetLedgerConfigurationResponse>, ClientError> {
        let request: wire::GetLedgerConfigurationRequest = self.context.scoped();
        let upstream = self.service.get_ledger_configuration(request).await?;
        Ok(self
            .context
            .stream(upstream, model::GetLedgerConfigurationResponse::try_from))
    }
}
