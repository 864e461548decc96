//! Domain to wire. Absent optional fields stay at their protocol default.

use super::LedgerScoped;
use crate::model;
use crate::wire;

impl From<model::Identifier> for wire::Identifier {
    fn from(id: model::Identifier) -> Self {
        Self {
            package_id: id.package_id,
            module_name: id.module_name,
            entity_name: id.entity_name,
        }
    }
}

impl From<model::LedgerBoundary> for wire::ledger_offset::LedgerBoundary {
    fn from(boundary: model::LedgerBoundary) -> Self {
        match boundary {
            model::LedgerBoundary::Begin => Self::LedgerBegin,
            model::LedgerBoundary::End => Self::LedgerEnd,
        }
    }
}

impl From<model::LedgerOffset> for wire::LedgerOffset {
    fn from(offset: model::LedgerOffset) -> Self {
        let value = match offset {
            model::LedgerOffset::Absolute(absolute) => wire::ledger_offset::Value::Absolute(absolute),
            model::LedgerOffset::Boundary(boundary) => wire::ledger_offset::Value::Boundary(
                wire::ledger_offset::LedgerBoundary::from(boundary) as i32,
            ),
        };
        Self { value: Some(value) }
    }
}

impl From<model::Timestamp> for wire::Timestamp {
    fn from(ts: model::Timestamp) -> Self {
        Self {
            seconds: ts.seconds,
            nanos: ts.nanoseconds,
        }
    }
}

impl From<model::InclusiveFilters> for wire::InclusiveFilters {
    fn from(filters: model::InclusiveFilters) -> Self {
        Self {
            template_ids: filters.template_ids.into_iter().map(Into::into).collect(),
        }
    }
}

impl From<model::Filters> for wire::Filters {
    fn from(filters: model::Filters) -> Self {
        Self {
            inclusive: filters.inclusive.map(Into::into),
        }
    }
}

impl From<model::TransactionFilter> for wire::TransactionFilter {
    fn from(filter: model::TransactionFilter) -> Self {
        Self {
            filters_by_party: filter
                .filters_by_party
                .into_iter()
                .map(|(party, filters)| (party, filters.into()))
                .collect(),
        }
    }
}

impl From<model::Record> for wire::Record {
    fn from(record: model::Record) -> Self {
        Self {
            record_id: record.record_id.map(Into::into),
            fields: record
                .fields
                .into_iter()
                .map(|(label, value)| wire::RecordField {
                    label,
                    value: Some(value.into()),
                })
                .collect(),
        }
    }
}

impl From<model::Value> for wire::Value {
    fn from(value: model::Value) -> Self {
        use wire::value::Sum;

        let sum = match value {
            model::Value::Bool(b) => Sum::Bool(b),
            model::Value::ContractId(id) => Sum::ContractId(id),
            model::Value::Date(date) => Sum::Date(date),
            model::Value::Decimal(decimal) => Sum::Decimal(decimal),
            model::Value::Int64(int) => Sum::Int64(int),
            model::Value::Party(party) => Sum::Party(party),
            model::Value::Text(text) => Sum::Text(text),
            model::Value::Timestamp(ts) => Sum::Timestamp(ts),
            model::Value::Unit {} => Sum::Unit(()),
            model::Value::List(values) => Sum::List(wire::List {
                elements: values.into_iter().map(Into::into).collect(),
            }),
            model::Value::Optional(optional) => Sum::Optional(wire::Optional {
                value: optional.value.map(|v| Box::new((*v).into())),
            }),
            model::Value::Record(record) => Sum::Record(record.into()),
            model::Value::Variant(variant) => Sum::Variant(wire::Variant {
                variant_id: variant.variant_id.map(Into::into),
                constructor: variant.constructor,
                value: Some(Box::new((*variant.value).into())),
            }),
            model::Value::Enum(e) => Sum::Enum(wire::Enum {
                enum_id: e.enum_id.map(Into::into),
                constructor: e.constructor,
            }),
            model::Value::Map(entries) => Sum::Map(wire::Map {
                entries: entries
                    .into_iter()
                    .map(|(key, value)| wire::map::Entry {
                        key,
                        value: Some(value.into()),
                    })
                    .collect(),
            }),
        };

        Self { sum: Some(sum) }
    }
}

impl From<model::Command> for wire::Command {
    fn from(command: model::Command) -> Self {
        let command = match command {
            model::Command::Create(create) => wire::command::Command::Create(wire::CreateCommand {
                template_id: Some(create.template_id.into()),
                create_arguments: Some(create.arguments.into()),
            }),
            model::Command::Exercise(exercise) => {
                wire::command::Command::Exercise(wire::ExerciseCommand {
                    template_id: Some(exercise.template_id.into()),
                    contract_id: exercise.contract_id,
                    choice: exercise.choice,
                    choice_argument: Some(exercise.argument.into()),
                })
            }
        };
        Self {
            command: Some(command),
        }
    }
}

impl From<model::Commands> for wire::Commands {
    fn from(commands: model::Commands) -> Self {
        Self {
            ledger_id: String::new(),
            workflow_id: commands.workflow_id.unwrap_or_default(),
            application_id: commands.application_id,
            command_id: commands.command_id,
            party: commands.party,
            ledger_effective_time: Some(commands.ledger_effective_time.into()),
            maximum_record_time: Some(commands.maximum_record_time.into()),
            commands: commands.list.into_iter().map(Into::into).collect(),
        }
    }
}

impl From<model::SubmitRequest> for wire::SubmitRequest {
    fn from(request: model::SubmitRequest) -> Self {
        Self {
            commands: Some(request.commands.into()),
        }
    }
}

impl From<model::SubmitAndWaitRequest> for wire::SubmitAndWaitRequest {
    fn from(request: model::SubmitAndWaitRequest) -> Self {
        Self {
            commands: Some(request.commands.into()),
        }
    }
}

impl From<model::GetTransactionsRequest> for wire::GetTransactionsRequest {
    fn from(request: model::GetTransactionsRequest) -> Self {
        Self {
            ledger_id: String::new(),
            begin: Some(request.begin.into()),
            end: request.end.map(Into::into),
            filter: Some(request.filter.into()),
            verbose: request.verbose.unwrap_or(true),
        }
    }
}

impl From<model::GetTransactionByIdRequest> for wire::GetTransactionByIdRequest {
    fn from(request: model::GetTransactionByIdRequest) -> Self {
        Self {
            ledger_id: String::new(),
            transaction_id: request.transaction_id,
            requesting_parties: request.requesting_parties,
        }
    }
}

impl From<model::GetTransactionByEventIdRequest> for wire::GetTransactionByEventIdRequest {
    fn from(request: model::GetTransactionByEventIdRequest) -> Self {
        Self {
            ledger_id: String::new(),
            event_id: request.event_id,
            requesting_parties: request.requesting_parties,
        }
    }
}

impl From<model::GetActiveContractsRequest> for wire::GetActiveContractsRequest {
    fn from(request: model::GetActiveContractsRequest) -> Self {
        Self {
            ledger_id: String::new(),
            filter: Some(request.filter.into()),
            verbose: request.verbose.unwrap_or(true),
        }
    }
}

impl From<model::CompletionStreamRequest> for wire::CompletionStreamRequest {
    fn from(request: model::CompletionStreamRequest) -> Self {
        Self {
            ledger_id: String::new(),
            application_id: request.application_id,
            parties: request.parties,
            offset: Some(request.offset.into()),
        }
    }
}

impl From<model::SetTimeRequest> for wire::SetTimeRequest {
    fn from(request: model::SetTimeRequest) -> Self {
        Self {
            ledger_id: String::new(),
            current_time: Some(request.current_time.into()),
            new_time: Some(request.new_time.into()),
        }
    }
}

impl From<model::AllocatePartyRequest> for wire::AllocatePartyRequest {
    fn from(request: model::AllocatePartyRequest) -> Self {
        Self {
            party_id_hint: request.party_id_hint.unwrap_or_default(),
            display_name: request.display_name.unwrap_or_default(),
        }
    }
}

macro_rules! impl_ledger_scoped {
    ($($ty:ty),* $(,)?) => {
        $(
            impl LedgerScoped for $ty {
                fn set_ledger_id(&mut self, ledger_id: &str) {
                    self.ledger_id = ledger_id.to_string();
                }
            }
        )*
    };
}

impl_ledger_scoped!(
    wire::GetTransactionsRequest,
    wire::GetTransactionByIdRequest,
    wire::GetTransactionByEventIdRequest,
    wire::GetLedgerEndRequest,
    wire::GetActiveContractsRequest,
    wire::CompletionStreamRequest,
    wire::CompletionEndRequest,
    wire::ListPackagesRequest,
    wire::GetPackageRequest,
    wire::GetPackageStatusRequest,
    wire::GetLedgerConfigurationRequest,
    wire::GetTimeRequest,
    wire::SetTimeRequest,
    wire::ResetRequest,
    wire::Commands,
);

impl LedgerScoped for wire::SubmitRequest {
    fn set_ledger_id(&mut self, ledger_id: &str) {
        if let Some(commands) = self.commands.as_mut() {
            commands.set_ledger_id(ledger_id);
        }
    }
}

impl LedgerScoped for wire::SubmitAndWaitRequest {
    fn set_ledger_id(&mut self, ledger_id: &str) {
        if let Some(commands) = self.commands.as_mut() {
            commands.set_ledger_id(ledger_id);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;

    fn template() -> model::Identifier {
        model::Identifier::new("pkg", "Iou", "Iou")
    }

    #[test]
    fn test_commands_map_field_for_field() {
        let commands = model::Commands {
            application_id: "app".to_string(),
            command_id: "cmd".to_string(),
            party: "alice".to_string(),
            workflow_id: None,
            ledger_effective_time: model::Timestamp {
                seconds: 1,
                nanoseconds: 2,
            },
            maximum_record_time: model::Timestamp {
                seconds: 3,
                nanoseconds: 4,
            },
            list: vec![model::Command::Create(model::CreateCommand {
                template_id: template(),
                arguments: model::Record::default().with_field("owner", model::Value::party("alice")),
            })],
        };

        let request = wire::SubmitRequest::from(model::SubmitRequest { commands }).with_ledger_id("l1");
        let commands = request.commands.unwrap();

        assert_eq!(commands.ledger_id, "l1");
        assert_eq!(commands.workflow_id, "");
        assert_eq!(commands.application_id, "app");
        assert_eq!(
            commands.maximum_record_time,
            Some(wire::Timestamp { seconds: 3, nanos: 4 })
        );
        let create = match &commands.commands[0].command {
            Some(wire::command::Command::Create(create)) => create.clone(),
            other => panic!("unexpected command {other:?}"),
        };
        assert_eq!(create.template_id.map(|t| t.module_name), Some("Iou".to_string()));
        let fields = create.create_arguments.map(|r| r.fields).unwrap_or_default();
        assert_eq!(fields.len(), 1);
        assert_eq!(fields[0].label, "owner");
        assert_eq!(
            fields[0].value.as_ref().and_then(|v| v.sum.clone()),
            Some(wire::value::Sum::Party("alice".to_string()))
        );
    }

    #[test]
    fn test_map_value_keeps_key_order() {
        let mut entries = BTreeMap::new();
        entries.insert("b".to_string(), model::Value::unit());
        entries.insert("a".to_string(), model::Value::text("x"));

        let wire = wire::Value::from(model::Value::Map(entries));
        let keys: Vec<String> = match wire.sum {
            Some(wire::value::Sum::Map(map)) => map.entries.into_iter().map(|e| e.key).collect(),
            _ => Vec::new(),
        };
        assert_eq!(keys, vec!["a".to_string(), "b".to_string()]);
    }

    #[test]
    fn test_optional_party_fields_use_protocol_default() {
        let wire = wire::AllocatePartyRequest::from(model::AllocatePartyRequest {
            party_id_hint: Some("alice".to_string()),
            display_name: None,
        });
        assert_eq!(wire.party_id_hint, "alice");
        assert_eq!(wire.display_name, "");
    }
}
