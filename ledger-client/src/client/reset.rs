use super::ClientContext;
use crate::forward::forward;
use crate::transport::ResetService;
use crate::types::ClientError;
use crate::wire;
use std::sync::Arc;
use tracing::warn;

/// Wipes all ledger state. The ledger comes back under a new id, so a
/// fresh [`DamlLedgerClient`](super::DamlLedgerClient) is needed afterwards.
#[derive(Clone)]
pub struct ResetClient {
    context: ClientContext,
    service: Arc<dyn ResetService>,
}

impl ResetClient {
    pub fn new(context: ClientContext, service: Arc<dyn ResetService>) -> Self {
        Self { context, service }
    }

    pub fn ledger_id(&self) -> &str {
        self.context.ledger_id()
    }

    pub async fn reset(&self) -> Result<(), ClientError> {
        warn!("Resetting ledger {}", self.context.ledger_id());
        let request: wire::ResetRequest = self.context.scoped();
        forward(self.service.reset(request).await, |()| Ok(()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::test_support::{context, LEDGER_ID};
    use crate::transport::MockResetService;

    #[tokio::test]
    async fn test_reset_passes_ledger_id() {
        let mut service = MockResetService::new();
        service
            .expect_reset()
            .withf(|request| request.ledger_id == LEDGER_ID)
            .times(1)
            .returning(|_| Ok(()));

        ResetClient::new(context(), Arc::new(service))
            .reset()
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn test_reset_failure_is_passed_through() {
        let mut service = MockResetService::new();
        service
            .expect_reset()
            .returning(|_| Err(tonic::Status::unimplemented("reset disabled")));

        let result = ResetClient::new(context(), Arc::new(service)).reset().await;
        assert!(matches!(
            result,
            Err(ClientError::Transport(s)) if s.code() == tonic::Code::Unimplemented
        ));
    }
}
