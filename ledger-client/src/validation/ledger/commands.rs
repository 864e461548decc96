use super::common::{identifier, timestamp};
use super::value::{record, value};
use crate::validation::leaf::{array, string};
use crate::validation::object::ObjectValidator;
use crate::validation::traits::SharedValidator;
use crate::validation::union::UnionValidator;

pub fn create_command() -> SharedValidator {
    ObjectValidator::new("CreateCommand")
        .required("templateId", identifier())
        .required("arguments", record())
        .shared()
}

pub fn exercise_command() -> SharedValidator {
    ObjectValidator::new("ExerciseCommand")
        .required("templateId", identifier())
        .required("contractId", string())
        .required("choice", string())
        .required("argument", value())
        .shared()
}

pub fn command() -> SharedValidator {
    UnionValidator::new("Command")
        .variant("create", create_command())
        .variant("exercise", exercise_command())
        .strict()
        .shared()
}

pub fn commands() -> SharedValidator {
    ObjectValidator::new("Commands")
        .required("applicationId", string())
        .required("commandId", string())
        .required("party", string())
        .optional("workflowId", string())
        .required("ledgerEffectiveTime", timestamp())
        .required("maximumRecordTime", timestamp())
        .required("list", array(command()))
        .shared()
}

pub fn submit_request() -> SharedValidator {
    ObjectValidator::new("SubmitRequest")
        .required("commands", commands())
        .shared()
}

pub fn submit_and_wait_request() -> SharedValidator {
    ObjectValidator::new("SubmitAndWaitRequest")
        .required("commands", commands())
        .shared()
}
