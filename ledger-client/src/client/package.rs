use super::ClientContext;
use crate::forward::forward;
use crate::model;
use crate::transport::PackageService;
use crate::types::ClientError;
use crate::wire;
use std::sync::Arc;

/// Lists and fetches the packages known to the ledger
#[derive(Clone)]
pub struct PackageClient {
    context: ClientContext,
    service: Arc<dyn PackageService>,
}

impl PackageClient {
    pub fn new(context: ClientContext, service: Arc<dyn PackageService>) -> Self {
        Self { context, service }
    }

    pub fn ledger_id(&self) -> &str {
        self.context.ledger_id()
    }

    pub async fn list_packages(&self) -> Result<model::ListPackagesResponse, ClientError> {
        let request: wire::ListPackagesRequest = self.context.scoped();
        forward(self.service.list_packages(request).await, |response| {
            Ok(model::ListPackagesResponse::from(response))
        })
    }

    pub async fn get_package(&self, package_id: &str) -> Result<model::GetPackageResponse, ClientError> {
        let request = wire::GetPackageRequest {
            ledger_id: self.context.ledger_id().to_string(),
            package_id: package_id.to_string(),
        };
        forward(
            self.service.get_package(request).await,
            model::GetPackageResponse::try_from,
        )
    }

    pub async fn get_package_status(
        &self,
        package_id: &str,
    ) -> Result<model::GetPackageStatusResponse, ClientError> {
        let request = wire::GetPackageStatusRequest {
            ledger_id: self.context.ledger_id().to_string(),
            package_id: package_id.to_string(),
        };
        forward(
            self.service.get_package_status(request).await,
            model::GetPackageStatusResponse::try_from,
        )
    }
}
