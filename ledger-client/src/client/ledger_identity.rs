use crate::forward::forward;
use crate::model;
use crate::transport::LedgerIdentityService;
use crate::types::ClientError;
use crate::wire;
use std::sync::Arc;

/// Asks the ledger for its id. The only client usable before the id is known.
#[derive(Clone)]
pub struct LedgerIdentityClient {
    service: Arc<dyn LedgerIdentityService>,
}

impl LedgerIdentityClient {
    pub fn new(service: Arc<dyn LedgerIdentityService>) -> Self {
        Self { service }
    }

    pub async fn get_ledger_identity(&self) -> Result<model::GetLedgerIdentityResponse, ClientError> {
        forward(
            self.service
                .get_ledger_identity(wire::GetLedgerIdentityRequest {})
                .await,
            |response| Ok(model::GetLedgerIdentityResponse::from(response)),
        )
    }
}
