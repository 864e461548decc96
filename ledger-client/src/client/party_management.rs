use super::ClientContext;
use crate::forward::forward;
use crate::model;
use crate::transport::PartyManagementService;
use crate::types::ClientError;
use crate::wire;
use serde_json::Value;
use std::sync::Arc;
use tracing::debug;

/// Inspects and allocates parties on the participant
#[derive(Clone)]
pub struct PartyManagementClient {
    context: ClientContext,
    service: Arc<dyn PartyManagementService>,
}

impl PartyManagementClient {
    pub fn new(context: ClientContext, service: Arc<dyn PartyManagementService>) -> Self {
        Self { context, service }
    }

    pub fn ledger_id(&self) -> &str {
        self.context.ledger_id()
    }

    pub async fn get_participant_id(&self) -> Result<model::GetParticipantIdResponse, ClientError> {
        forward(
            self.service
                .get_participant_id(wire::GetParticipantIdRequest {})
                .await,
            |response| Ok(model::GetParticipantIdResponse::from(response)),
        )
    }

    pub async fn list_known_parties(&self) -> Result<model::ListKnownPartiesResponse, ClientError> {
        forward(
            self.service
                .list_known_parties(wire::ListKnownPartiesRequest {})
                .await,
            |response| Ok(model::ListKnownPartiesResponse::from(response)),
        )
    }

    /// Both fields are optional; an empty object lets the participant pick
    pub async fn allocate_party(
        &self,
        request: &Value,
    ) -> Result<model::AllocatePartyResponse, ClientError> {
        let request = self
            .context
            .pipeline()
            .convert::<model::AllocatePartyRequest, wire::AllocatePartyRequest>(request)?;
        debug!("Allocating party with hint '{}'", request.party_id_hint);
        forward(
            self.service.allocate_party(request).await,
            model::AllocatePartyResponse::try_from,
        )
    }
}
