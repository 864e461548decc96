pub mod client;
pub mod convert;
pub mod forward;
pub mod model;
pub mod reporting;
pub mod transport;
pub mod types;
pub mod validation;
pub mod wire;

// Re-export commonly used types
pub use types::*;

// Re-export the client entry point and per-service wrappers
pub use client::{
    ActiveContractsClient, ClientContext, CommandClient, CommandCompletionClient,
    CommandSubmissionClient, DamlLedgerClient, LedgerConfigurationClient, LedgerIdentityClient,
    LedgerServices, PackageClient, PackageManagementClient, PartyManagementClient, ResetClient,
    TimeClient, TransactionClient,
};

// Re-export conversion and streaming functionality
pub use convert::{ConversionError, ConversionPipeline};
pub use forward::{forward, CancelHandle, ForwardStream, StreamState, TransportStream};

// Re-export reporting functionality
pub use reporting::{HumanReadableReporter, JsonReporter, ValidationFailure, ValidationReporter};

// Re-export validation functionality
pub use validation::{MessageType, ValidationError, ValidationTree, Validator, ValidatorRegistry};
