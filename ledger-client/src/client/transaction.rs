use super::ClientContext;
use crate::forward::{forward, ForwardStream};
use crate::model;
use crate::transport::TransactionService;
use crate::types::ClientError;
use crate::wire;
use serde_json::Value;
use std::sync::Arc;
use tracing::debug;

/// Reads transactions and transaction trees, looks them up by id and
/// queries the ledger end
#[derive(Clone)]
pub struct TransactionClient {
    context: ClientContext,
    service: Arc<dyn TransactionService>,
}

impl TransactionClient {
    pub fn new(context: ClientContext, service: Arc<dyn TransactionService>) -> Self {
        Self { context, service }
    }

    pub fn ledger_id(&self) -> &str {
        self.context.ledger_id()
    }

    /// Flat transactions between two offsets. `verbose` defaults to `true`.
    pub async fn get_transactions(
        &self,
        request: &Value,
    ) -> Result<ForwardStream<model::GetTransactionsResponse>, ClientError> {
        let request = self
            .context
            .request::<model::GetTransactionsRequest, wire::GetTransactionsRequest>(request)?;
        debug!("Requesting transactions from ledger {}", request.ledger_id);
        let upstream = self.service.get_transactions(request).await?;
        Ok(self
            .context
            .stream(upstream, model::GetTransactionsResponse::try_from))
    }

    /// Transaction trees between two offsets. `verbose` defaults to `true`.
    pub async fn get_transaction_trees(
        &self,
        request: &Value,
    ) -> Result<ForwardStream<model::GetTransactionTreesResponse>, ClientError> {
        let request = self
            .context
            .request::<model::GetTransactionsRequest, wire::GetTransactionsRequest>(request)?;
        debug!("Requesting transaction trees from ledger {}", request.ledger_id);
        let upstream = self.service.get_transaction_trees(request).await?;
        Ok(self
            .context
            .stream(upstream, model::GetTransactionTreesResponse::try_from))
    }

    pub async fn get_transaction_by_id(
        &self,
        request: &Value,
    ) -> Result<model::GetTransactionResponse, ClientError> {
        let request = self
            .context
            .request::<model::GetTransactionByIdRequest, wire::GetTransactionByIdRequest>(request)?;
        forward(
            self.service.get_transaction_by_id(request).await,
            model::GetTransactionResponse::try_from,
        )
    }

    pub async fn get_transaction_by_event_id(
        &self,
        request: &Value,
    ) -> Result<model::GetTransactionResponse, ClientError> {
        let request = self.context.request::<
            model::GetTransactionByEventIdRequest,
            wire::GetTransactionByEventIdRequest,
        >(request)?;
        forward(
            self.service.get_transaction_by_event_id(request).await,
            model::GetTransactionResponse::try_from,
        )
    }

    pub async fn get_ledger_end(&self) -> Result<model::GetLedgerEndResponse, ClientError> {
        let request: wire::GetLedgerEndRequest = self.context.scoped();
        forward(
            self.service.get_ledger_end(request).await,
            model::GetLedgerEndResponse::try_from,
        )
    }
}
