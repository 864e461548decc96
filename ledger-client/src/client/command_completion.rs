use super::ClientContext;
use crate::forward::{forward, ForwardStream};
use crate::model;
use crate::transport::CommandCompletionService;
use crate::types::ClientError;
use crate::wire;
use serde_json::Value;
use std::sync::Arc;
use tracing::debug;

/// Observes the outcome of submitted commands
#[derive(Clone)]
pub struct CommandCompletionClient {
    context: ClientContext,
    service: Arc<dyn CommandCompletionService>,
}

impl CommandCompletionClient {
    pub fn new(context: ClientContext, service: Arc<dyn CommandCompletionService>) -> Self {
        Self { context, service }
    }

    pub fn ledger_id(&self) -> &str {
        self.context.ledger_id()
    }

    pub async fn completion_stream(
        &self,
        request: &Value,
    ) -> Result<ForwardStream<model::CompletionStreamResponse>, ClientError> {
        let request = self
            .context
            .request::<model::CompletionStreamRequest, wire::CompletionStreamRequest>(request)?;
        debug!(
            "Opening completion stream for application {} on ledger {}",
            request.application_id, request.ledger_id
        );
        let upstream = self.service.completion_stream(request).await?;
        Ok(self
            .context
            .stream(upstream, model::CompletionStreamResponse::try_from))
    }

    pub async fn completion_end(&self) -> Result<model::CompletionEndResponse, ClientError> {
        let request: wire::CompletionEndRequest = self.context.scoped();
        forward(
            self.service.completion_end(request).await,
            model::CompletionEndResponse::try_from,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::test_support::{context, reported_tree, LEDGER_ID};
    use crate::convert::ConversionError;
    use crate::transport::MockCommandCompletionService;
    use crate::validation::ValidationError;
    use futures::StreamExt;
    use serde_json::json;

    fn client(service: MockCommandCompletionService) -> CommandCompletionClient {
        CommandCompletionClient::new(context(), Arc::new(service))
    }

    fn completion(command_id: &str) -> wire::CompletionStreamResponse {
        wire::CompletionStreamResponse {
            checkpoint: None,
            completions: vec![wire::Completion {
                command_id: command_id.to_string(),
                status: Some(wire::Status {
                    code: 0,
                    message: String::new(),
                }),
                transaction_id: format!("tx-{command_id}"),
            }],
        }
    }

    #[tokio::test]
    async fn test_completion_stream_forwards_in_order() {
        let mut service = MockCommandCompletionService::new();
        service
            .expect_completion_stream()
            .withf(|request| {
                request.ledger_id == LEDGER_ID
                    && request.application_id == "app"
                    && request.parties == vec!["alice".to_string()]
                    && request.offset
                        == Some(wire::LedgerOffset {
                            value: Some(wire::ledger_offset::Value::Boundary(
                                wire::ledger_offset::LedgerBoundary::LedgerBegin as i32,
                            )),
                        })
            })
            .times(1)
            .returning(|_| {
                Ok(futures::stream::iter(vec![Ok(completion("a")), Ok(completion("b"))]).boxed())
            });

        let stream = client(service)
            .completion_stream(&json!({
                "applicationId": "app",
                "offset": {"boundary": "BEGIN"},
                "parties": ["alice"]
            }))
            .await
            .unwrap();

        let ids: Vec<String> = stream
            .map(|item| item.map(|r| r.completions[0].command_id.clone()).unwrap_or_default())
            .collect()
            .await;
        assert_eq!(ids, vec!["a".to_string(), "b".to_string()]);
    }

    #[tokio::test]
    async fn test_missing_offset_is_rejected() {
        let mut service = MockCommandCompletionService::new();
        service.expect_completion_stream().never();

        let tree = reported_tree(
            client(service)
                .completion_stream(&json!({"applicationId": "app", "parties": ["alice"]}))
                .await,
        );
        assert_eq!(
            tree.child("offset").map(|t| t.errors.clone()),
            Some(vec![ValidationError::missing_field("offset")])
        );
    }

    #[tokio::test]
    async fn test_completion_end() {
        let mut service = MockCommandCompletionService::new();
        service
            .expect_completion_end()
            .withf(|request| request.ledger_id == LEDGER_ID)
            .times(1)
            .returning(|_| {
                Ok(wire::CompletionEndResponse {
                    offset: Some(wire::LedgerOffset {
                        value: Some(wire::ledger_offset::Value::Absolute("3".to_string())),
                    }),
                })
            });

        let response = client(service).completion_end().await.unwrap();
        assert_eq!(response.offset, model::LedgerOffset::absolute("3"));
    }

    #[tokio::test]
    async fn test_completion_end_without_offset_is_a_conversion_error() {
        let mut service = MockCommandCompletionService::new();
        service
            .expect_completion_end()
            .returning(|_| Ok(wire::CompletionEndResponse { offset: None }));

        let result = client(service).completion_end().await;
        assert!(matches!(
            result,
            Err(ClientError::Conversion(ConversionError::MissingField { field: "offset", .. }))
        ));
    }
}
