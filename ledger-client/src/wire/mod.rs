//! Protocol messages of the ledger API
//!
//! Hand-maintained `prost` messages with the field numbers of the ledger's
//! protobuf definitions. Transport implementations exchange these with the
//! server; nothing above [`crate::convert`] touches them.

pub mod commands;
pub mod common;
pub mod services;
pub mod transactions;
pub mod values;

pub use commands::*;
pub use common::*;
pub use services::*;
pub use transactions::*;
pub use values::*;

#[cfg(test)]
mod tests {
    use super::*;
    use prost::Message;

    #[test]
    fn test_recursive_value_encodes() {
        let value = Value {
            sum: Some(value::Sum::Variant(Variant {
                variant_id: None,
                constructor: "Some".to_string(),
                value: Some(Box::new(Value {
                    sum: Some(value::Sum::List(List {
                        elements: vec![Value {
                            sum: Some(value::Sum::Unit(())),
                        }],
                    })),
                })),
            })),
        };
        let bytes = value.encode_to_vec();
        assert_eq!(Value::decode(bytes.as_slice()).ok(), Some(value));
    }

    #[test]
    fn test_unset_offset_is_empty_on_the_wire() {
        let request = GetLedgerEndRequest {
            ledger_id: String::new(),
        };
        assert!(request.encode_to_vec().is_empty());
    }
}
