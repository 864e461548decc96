//! Response schemas, for callers that handle response-shaped data from
//! untrusted sources

use super::common::{ledger_offset, timestamp};
use crate::validation::leaf::{array, range, string};
use crate::validation::object::ObjectValidator;
use crate::validation::traits::SharedValidator;

pub fn completion_end_response() -> SharedValidator {
    ObjectValidator::new("CompletionEndResponse")
        .required("offset", ledger_offset())
        .shared()
}

pub fn get_ledger_end_response() -> SharedValidator {
    ObjectValidator::new("GetLedgerEndResponse")
        .required("offset", ledger_offset())
        .shared()
}

pub fn submit_and_wait_for_transaction_id_response() -> SharedValidator {
    ObjectValidator::new("SubmitAndWaitForTransactionIdResponse")
        .required("transactionId", string())
        .shared()
}

pub fn package_details() -> SharedValidator {
    ObjectValidator::new("PackageDetails")
        .required("packageId", string())
        .required("packageSize", range(0, i64::MAX))
        .optional("knownSince", timestamp())
        .required("sourceDescription", string())
        .shared()
}

pub fn list_known_packages_response() -> SharedValidator {
    ObjectValidator::new("ListKnownPackagesResponse")
        .required("packageDetailsList", array(package_details()))
        .shared()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::{ValidationError, Validator};
    use serde_json::json;

    #[test]
    fn test_completion_end_response() {
        assert!(completion_end_response()
            .validate(&json!({"offset": {"absolute": "17"}}))
            .is_valid());
        let tree = completion_end_response().validate(&json!({"offset": {}}));
        assert_eq!(
            tree.child("offset").map(|t| t.errors.clone()),
            Some(vec![ValidationError::non_unique_union(["absolute", "boundary"])])
        );
    }

    #[test]
    fn test_package_details_list() {
        let response = json!({
            "packageDetailsList": [
                {"packageId": "p1", "packageSize": 1024, "sourceDescription": "upload"},
                {"packageId": "p2", "packageSize": "big", "sourceDescription": "upload"}
            ]
        });
        let tree = list_known_packages_response().validate(&response);
        let size = tree
            .child("packageDetailsList")
            .and_then(|t| t.child("1"))
            .and_then(|t| t.child("packageSize"))
            .map(|t| t.errors.clone());
        assert_eq!(size, Some(vec![ValidationError::type_error("integer", "string")]));
        assert!(tree
            .child("packageDetailsList")
            .and_then(|t| t.child("0"))
            .is_some_and(|t| t.is_valid()));
    }
}
