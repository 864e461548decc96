//! Validate, decode and convert caller input into wire messages
//!
//! The pipeline never hands an invalid value to the conversion step: every
//! request is checked against its registered schema first, and a failing tree
//! is rendered by the configured reporter.

mod from_wire;
mod to_wire;

use crate::model::Schema;
use crate::reporting::{HumanReadableReporter, ValidationFailure, ValidationReporter};
use crate::types::ClientError;
use crate::validation::{MessageType, Validator, ValidatorRegistry};
use serde_json::Value;
use std::sync::Arc;
use tracing::{debug, error, warn};

/// A wire or domain value that could not be mapped.
///
/// Validated input never produces one, so each occurrence is a defect in a
/// schema or a mapping, or a malformed server response.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConversionError {
    #[error("{message} is missing required field '{field}'")]
    MissingField {
        message: &'static str,
        field: &'static str,
    },

    #[error("{enumeration} has no variant for wire value {value}")]
    UnknownEnumValue {
        enumeration: &'static str,
        value: i32,
    },

    #[error("Failed to decode validated {message_type}: {reason}")]
    Decode {
        message_type: MessageType,
        reason: String,
    },
}

impl ConversionError {
    pub fn missing(message: &'static str, field: &'static str) -> Self {
        Self::MissingField { message, field }
    }
}

/// Unwrap a sub-message the protocol marks as optional but the domain
/// requires
pub(crate) fn required<T>(
    value: Option<T>,
    message: &'static str,
    field: &'static str,
) -> Result<T, ConversionError> {
    value.ok_or(ConversionError::MissingField { message, field })
}

/// Wire requests scoped to a single ledger
pub trait LedgerScoped {
    fn set_ledger_id(&mut self, ledger_id: &str);

    fn with_ledger_id(mut self, ledger_id: &str) -> Self
    where
        Self: Sized,
    {
        self.set_ledger_id(ledger_id);
        self
    }
}

#[derive(Debug, Clone)]
pub struct ConversionPipeline {
    registry: Arc<ValidatorRegistry>,
    reporter: Arc<dyn ValidationReporter>,
}

impl ConversionPipeline {
    pub fn new(registry: Arc<ValidatorRegistry>, reporter: Arc<dyn ValidationReporter>) -> Self {
        Self { registry, reporter }
    }

    pub fn registry(&self) -> &Arc<ValidatorRegistry> {
        &self.registry
    }

    pub fn reporter(&self) -> &Arc<dyn ValidationReporter> {
        &self.reporter
    }

    /// Check `value` against the schema registered for `message_type`
    pub fn validate(&self, message_type: MessageType, value: &Value) -> Result<(), ClientError> {
        let validator = self
            .registry
            .get(message_type)
            .ok_or(ClientError::MissingValidator(message_type))?;

        let tree = validator.validate(value);
        if tree.is_valid() {
            debug!("{} passed validation", message_type);
            return Ok(());
        }

        warn!(
            "{} failed validation with {} error(s)",
            message_type,
            tree.error_count()
        );
        let failure = match self.reporter.report(&tree) {
            Some(failure) => failure,
            // A custom reporter must not let an invalid tree through
            None => ValidationFailure::new(HumanReadableReporter::render(&tree), tree),
        };
        Err(ClientError::Validation(failure))
    }

    /// Validate, then decode into the typed domain shape
    pub fn decode<D: Schema>(&self, value: &Value) -> Result<D, ClientError> {
        self.validate(D::MESSAGE_TYPE, value)?;
        D::deserialize(value).map_err(|e| {
            error!("Validated {} failed to decode: {}", D::MESSAGE_TYPE, e);
            ClientError::Conversion(ConversionError::Decode {
                message_type: D::MESSAGE_TYPE,
                reason: e.to_string(),
            })
        })
    }

    /// Validate, decode and map onto the wire message
    pub fn convert<D, W>(&self, value: &Value) -> Result<W, ClientError>
    where
        D: Schema,
        W: From<D>,
    {
        self.decode::<D>(value).map(W::from)
    }
}
