use crate::convert::ConversionError;
use crate::reporting::ValidationFailure;
use crate::validation::MessageType;
use serde::{Deserialize, Serialize};

/// Which standard reporter renders validation failures
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ReporterKind {
    /// Indented, path-qualified text
    #[default]
    HumanReadable,
    /// The serialized validation tree
    Json,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    pub reporter: ReporterKind,
    /// Capacity of the channel between a streaming call's pump task and its
    /// consumer
    pub stream_buffer_size: usize,
}

impl ClientConfig {
    pub const MAX_STREAM_BUFFER_SIZE: usize = 65_536;

    pub fn with_reporter(mut self, reporter: ReporterKind) -> Self {
        self.reporter = reporter;
        self
    }

    pub fn with_stream_buffer_size(mut self, size: usize) -> Self {
        self.stream_buffer_size = size;
        self
    }

    pub fn validate(&self) -> Result<(), ClientError> {
        if self.stream_buffer_size == 0 {
            return Err(ClientError::Config(
                "Stream buffer size must be greater than 0".to_string(),
            ));
        }

        if self.stream_buffer_size > Self::MAX_STREAM_BUFFER_SIZE {
            return Err(ClientError::Config(format!(
                "Stream buffer size should not exceed {}",
                Self::MAX_STREAM_BUFFER_SIZE
            )));
        }

        Ok(())
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            reporter: ReporterKind::default(),
            stream_buffer_size: 100,
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    /// Rendered by the configured reporter; the message is shown verbatim
    #[error(transparent)]
    Validation(#[from] ValidationFailure),

    #[error("Ledger transport error: {0}\n💡 Check that the ledger is reachable and that the request targets the right ledger id")]
    Transport(#[from] tonic::Status),

    #[error("Conversion error: {0}\n💡 This indicates a schema and conversion mismatch inside the client. Please report it with the request that triggered it")]
    Conversion(#[from] ConversionError),

    #[error("No validator registered for {0}\n💡 Use ValidatorRegistry::standard() or register a schema for this message type")]
    MissingValidator(MessageType),

    #[error("Invalid client configuration: {0}\n💡 stream_buffer_size must be between 1 and 65536")]
    Config(String),
}

impl ClientError {
    /// The validation tree behind a validation failure
    pub fn validation_tree(&self) -> Option<&crate::validation::ValidationTree> {
        match self {
            ClientError::Validation(failure) => Some(failure.tree()),
            _ => None,
        }
    }

    /// The transport status, passed through unmodified
    pub fn status(&self) -> Option<&tonic::Status> {
        match self {
            ClientError::Transport(status) => Some(status),
            _ => None,
        }
    }
}
