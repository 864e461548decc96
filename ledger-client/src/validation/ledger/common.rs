//! Building blocks shared by several messages

use crate::validation::leaf::{integer, literals, range, string};
use crate::validation::object::ObjectValidator;
use crate::validation::traits::SharedValidator;
use crate::validation::union::UnionValidator;

/// Largest value of the protobuf `nanos` field
pub const MAX_NANOSECONDS: i64 = 999_999_999;

pub fn identifier() -> SharedValidator {
    ObjectValidator::new("Identifier")
        .required("packageId", string())
        .required("moduleName", string())
        .required("entityName", string())
        .shared()
}

pub fn ledger_offset() -> SharedValidator {
    UnionValidator::new("LedgerOffset")
        .variant("absolute", string())
        .variant("boundary", literals("LedgerOffset.Boundary", ["BEGIN", "END"]))
        .strict()
        .shared()
}

pub fn timestamp() -> SharedValidator {
    ObjectValidator::new("Timestamp")
        .required("seconds", integer())
        .required("nanoseconds", range(0, MAX_NANOSECONDS))
        .shared()
}

pub fn duration() -> SharedValidator {
    ObjectValidator::new("Duration")
        .required("seconds", integer())
        .required("nanoseconds", range(0, MAX_NANOSECONDS))
        .shared()
}
