//! Validation system for ledger API requests and responses
//!
//! Validators are small, stateless values composed into one schema per
//! message type. Every validator produces a [`ValidationTree`] whose shape
//! mirrors the value it checked, so failures can be located by field path.

pub mod combinators;
pub mod errors;
pub mod leaf;
pub mod ledger;
pub mod object;
pub mod registry;
pub mod traits;
pub mod tree;
pub mod union;

// Re-export main validation types
pub use errors::ValidationError;
pub use registry::{MessageType, ValidatorRegistry};
pub use traits::{runtime_type, SharedValidator, Validator};
pub use tree::ValidationTree;
