use super::ClientContext;
use crate::forward::forward;
use crate::model;
use crate::transport::PackageManagementService;
use crate::types::ClientError;
use crate::wire;
use std::sync::Arc;

/// Package details as seen by the participant's package store
#[derive(Clone)]
pub struct PackageManagementClient {
    context: ClientContext,
    service: Arc<dyn PackageManagementService>,
}

impl PackageManagementClient {
    pub fn new(context: ClientContext, service: Arc<dyn PackageManagementService>) -> Self {
        Self { context, service }
    }

    pub fn ledger_id(&self) -> &str {
        self.context.ledger_id()
    }

    pub async fn list_known_packages(&self) -> Result<model::ListKnownPackagesResponse, ClientError> {
        forward(
            self.service
                .list_known_packages(wire::ListKnownPackagesRequest {})
                .await,
            |response| Ok(model::ListKnownPackagesResponse::from(response)),
        )
    }
}
