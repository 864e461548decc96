//! Wire to domain. Empty protocol strings on optional fields map to `None`.

use super::{required, ConversionError};
use crate::model;
use crate::wire;
use std::collections::BTreeMap;

fn non_empty(value: String) -> Option<String> {
    if value.is_empty() {
        None
    } else {
        Some(value)
    }
}

fn collect<W, D>(items: Vec<W>) -> Result<Vec<D>, ConversionError>
where
    D: TryFrom<W, Error = ConversionError>,
{
    items.into_iter().map(D::try_from).collect()
}

impl From<wire::Identifier> for model::Identifier {
    fn from(id: wire::Identifier) -> Self {
        Self {
            package_id: id.package_id,
            module_name: id.module_name,
            entity_name: id.entity_name,
        }
    }
}

impl From<wire::Timestamp> for model::Timestamp {
    fn from(ts: wire::Timestamp) -> Self {
        Self {
            seconds: ts.seconds,
            nanoseconds: ts.nanos,
        }
    }
}

impl From<wire::Duration> for model::Duration {
    fn from(duration: wire::Duration) -> Self {
        Self {
            seconds: duration.seconds,
            nanoseconds: duration.nanos,
        }
    }
}

impl TryFrom<wire::LedgerOffset> for model::LedgerOffset {
    type Error = ConversionError;

    fn try_from(offset: wire::LedgerOffset) -> Result<Self, Self::Error> {
        use wire::ledger_offset::{LedgerBoundary, Value};

        match required(offset.value, "LedgerOffset", "value")? {
            Value::Absolute(absolute) => Ok(Self::Absolute(absolute)),
            Value::Boundary(raw) => match LedgerBoundary::try_from(raw) {
                Ok(LedgerBoundary::LedgerBegin) => Ok(Self::begin()),
                Ok(LedgerBoundary::LedgerEnd) => Ok(Self::end()),
                Err(_) => Err(ConversionError::UnknownEnumValue {
                    enumeration: "LedgerOffset.LedgerBoundary",
                    value: raw,
                }),
            },
        }
    }
}

impl TryFrom<wire::Record> for model::Record {
    type Error = ConversionError;

    fn try_from(record: wire::Record) -> Result<Self, Self::Error> {
        let fields = record
            .fields
            .into_iter()
            .map(|field| {
                let value = required(field.value, "RecordField", "value")?;
                Ok((field.label, model::Value::try_from(value)?))
            })
            .collect::<Result<BTreeMap<_, _>, ConversionError>>()?;

        Ok(Self {
            record_id: record.record_id.map(Into::into),
            fields,
        })
    }
}

impl TryFrom<wire::Value> for model::Value {
    type Error = ConversionError;

    fn try_from(value: wire::Value) -> Result<Self, Self::Error> {
        use wire::value::Sum;

        Ok(match required(value.sum, "Value", "sum")? {
            Sum::Bool(b) => Self::Bool(b),
            Sum::ContractId(id) => Self::ContractId(id),
            Sum::Date(date) => Self::Date(date),
            Sum::Decimal(decimal) => Self::Decimal(decimal),
            Sum::Int64(int) => Self::Int64(int),
            Sum::Party(party) => Self::Party(party),
            Sum::Text(text) => Self::Text(text),
            Sum::Timestamp(ts) => Self::Timestamp(ts),
            Sum::Unit(()) => Self::Unit {},
            Sum::List(list) => Self::List(collect(list.elements)?),
            Sum::Optional(optional) => Self::Optional(model::OptionalValue {
                value: optional
                    .value
                    .map(|v| Self::try_from(*v).map(Box::new))
                    .transpose()?,
            }),
            Sum::Record(record) => Self::Record(record.try_into()?),
            Sum::Variant(variant) => {
                let inner = required(variant.value, "Variant", "value")?;
                Self::Variant(model::Variant {
                    variant_id: variant.variant_id.map(Into::into),
                    constructor: variant.constructor,
                    value: Box::new(Self::try_from(*inner)?),
                })
            }
            Sum::Enum(e) => Self::Enum(model::EnumValue {
                enum_id: e.enum_id.map(Into::into),
                constructor: e.constructor,
            }),
            Sum::Map(map) => Self::Map(
                map.entries
                    .into_iter()
                    .map(|entry| {
                        let value = required(entry.value, "Map.Entry", "value")?;
                        Ok((entry.key, Self::try_from(value)?))
                    })
                    .collect::<Result<_, ConversionError>>()?,
            ),
        })
    }
}

impl TryFrom<wire::CreatedEvent> for model::CreatedEvent {
    type Error = ConversionError;

    fn try_from(event: wire::CreatedEvent) -> Result<Self, Self::Error> {
        Ok(Self {
            event_id: event.event_id,
            contract_id: event.contract_id,
            template_id: required(event.template_id, "CreatedEvent", "template_id")?.into(),
            contract_key: event.contract_key.map(model::Value::try_from).transpose()?,
            arguments: required(event.create_arguments, "CreatedEvent", "create_arguments")?
                .try_into()?,
            witness_parties: event.witness_parties,
        })
    }
}

impl TryFrom<wire::ArchivedEvent> for model::ArchivedEvent {
    type Error = ConversionError;

    fn try_from(event: wire::ArchivedEvent) -> Result<Self, Self::Error> {
        Ok(Self {
            event_id: event.event_id,
            contract_id: event.contract_id,
            template_id: required(event.template_id, "ArchivedEvent", "template_id")?.into(),
            witness_parties: event.witness_parties,
        })
    }
}

impl TryFrom<wire::ExercisedEvent> for model::ExercisedEvent {
    type Error = ConversionError;

    fn try_from(event: wire::ExercisedEvent) -> Result<Self, Self::Error> {
        Ok(Self {
            event_id: event.event_id,
            contract_id: event.contract_id,
            template_id: required(event.template_id, "ExercisedEvent", "template_id")?.into(),
            contract_creating_event_id: event.contract_creating_event_id,
            choice: event.choice,
            argument: required(event.choice_argument, "ExercisedEvent", "choice_argument")?
                .try_into()?,
            acting_parties: event.acting_parties,
            consuming: event.consuming,
            witness_parties: event.witness_parties,
            child_event_ids: event.child_event_ids,
            exercise_result: event.exercise_result.map(model::Value::try_from).transpose()?,
        })
    }
}

impl TryFrom<wire::Event> for model::Event {
    type Error = ConversionError;

    fn try_from(event: wire::Event) -> Result<Self, Self::Error> {
        Ok(match required(event.event, "Event", "event")? {
            wire::event::Event::Created(created) => Self::Created(created.try_into()?),
            wire::event::Event::Archived(archived) => Self::Archived(archived.try_into()?),
        })
    }
}

impl TryFrom<wire::TreeEvent> for model::TreeEvent {
    type Error = ConversionError;

    fn try_from(event: wire::TreeEvent) -> Result<Self, Self::Error> {
        Ok(match required(event.kind, "TreeEvent", "kind")? {
            wire::tree_event::Kind::Created(created) => Self::Created(created.try_into()?),
            wire::tree_event::Kind::Exercised(exercised) => Self::Exercised(exercised.try_into()?),
        })
    }
}

impl TryFrom<wire::Transaction> for model::Transaction {
    type Error = ConversionError;

    fn try_from(tx: wire::Transaction) -> Result<Self, Self::Error> {
        Ok(Self {
            transaction_id: tx.transaction_id,
            command_id: non_empty(tx.command_id),
            workflow_id: non_empty(tx.workflow_id),
            effective_at: required(tx.effective_at, "Transaction", "effective_at")?.into(),
            events: collect(tx.events)?,
            offset: tx.offset,
        })
    }
}

impl TryFrom<wire::TransactionTree> for model::TransactionTree {
    type Error = ConversionError;

    fn try_from(tx: wire::TransactionTree) -> Result<Self, Self::Error> {
        Ok(Self {
            transaction_id: tx.transaction_id,
            command_id: non_empty(tx.command_id),
            workflow_id: non_empty(tx.workflow_id),
            effective_at: required(tx.effective_at, "TransactionTree", "effective_at")?.into(),
            offset: tx.offset,
            events_by_id: tx
                .events_by_id
                .into_iter()
                .map(|(id, event)| Ok((id, model::TreeEvent::try_from(event)?)))
                .collect::<Result<_, ConversionError>>()?,
            root_event_ids: tx.root_event_ids,
        })
    }
}

impl TryFrom<wire::GetTransactionsResponse> for model::GetTransactionsResponse {
    type Error = ConversionError;

    fn try_from(response: wire::GetTransactionsResponse) -> Result<Self, Self::Error> {
        Ok(Self {
            transactions: collect(response.transactions)?,
        })
    }
}

impl TryFrom<wire::GetTransactionTreesResponse> for model::GetTransactionTreesResponse {
    type Error = ConversionError;

    fn try_from(response: wire::GetTransactionTreesResponse) -> Result<Self, Self::Error> {
        Ok(Self {
            transactions: collect(response.transactions)?,
        })
    }
}

impl TryFrom<wire::GetTransactionResponse> for model::GetTransactionResponse {
    type Error = ConversionError;

    fn try_from(response: wire::GetTransactionResponse) -> Result<Self, Self::Error> {
        Ok(Self {
            transaction: required(response.transaction, "GetTransactionResponse", "transaction")?
                .try_into()?,
        })
    }
}

impl TryFrom<wire::GetLedgerEndResponse> for model::GetLedgerEndResponse {
    type Error = ConversionError;

    fn try_from(response: wire::GetLedgerEndResponse) -> Result<Self, Self::Error> {
        Ok(Self {
            offset: required(response.offset, "GetLedgerEndResponse", "offset")?.try_into()?,
        })
    }
}

impl TryFrom<wire::GetActiveContractsResponse> for model::GetActiveContractsResponse {
    type Error = ConversionError;

    fn try_from(response: wire::GetActiveContractsResponse) -> Result<Self, Self::Error> {
        Ok(Self {
            offset: response.offset,
            workflow_id: non_empty(response.workflow_id),
            active_contracts: collect(response.active_contracts)?,
        })
    }
}

impl From<wire::Status> for model::Status {
    fn from(status: wire::Status) -> Self {
        Self {
            code: status.code,
            message: status.message,
        }
    }
}

impl From<wire::Completion> for model::Completion {
    fn from(completion: wire::Completion) -> Self {
        Self {
            command_id: completion.command_id,
            status: completion.status.map(Into::into),
            transaction_id: non_empty(completion.transaction_id),
        }
    }
}

impl TryFrom<wire::Checkpoint> for model::Checkpoint {
    type Error = ConversionError;

    fn try_from(checkpoint: wire::Checkpoint) -> Result<Self, Self::Error> {
        Ok(Self {
            record_time: required(checkpoint.record_time, "Checkpoint", "record_time")?.into(),
            offset: required(checkpoint.offset, "Checkpoint", "offset")?.try_into()?,
        })
    }
}

impl TryFrom<wire::CompletionStreamResponse> for model::CompletionStreamResponse {
    type Error = ConversionError;

    fn try_from(response: wire::CompletionStreamResponse) -> Result<Self, Self::Error> {
        Ok(Self {
            checkpoint: response
                .checkpoint
                .map(model::Checkpoint::try_from)
                .transpose()?,
            completions: response.completions.into_iter().map(Into::into).collect(),
        })
    }
}

impl TryFrom<wire::CompletionEndResponse> for model::CompletionEndResponse {
    type Error = ConversionError;

    fn try_from(response: wire::CompletionEndResponse) -> Result<Self, Self::Error> {
        Ok(Self {
            offset: required(response.offset, "CompletionEndResponse", "offset")?.try_into()?,
        })
    }
}

impl From<wire::SubmitAndWaitForTransactionIdResponse>
    for model::SubmitAndWaitForTransactionIdResponse
{
    fn from(response: wire::SubmitAndWaitForTransactionIdResponse) -> Self {
        Self {
            transaction_id: response.transaction_id,
        }
    }
}

impl From<wire::GetLedgerIdentityResponse> for model::GetLedgerIdentityResponse {
    fn from(response: wire::GetLedgerIdentityResponse) -> Self {
        Self {
            ledger_id: response.ledger_id,
        }
    }
}

impl From<wire::ListPackagesResponse> for model::ListPackagesResponse {
    fn from(response: wire::ListPackagesResponse) -> Self {
        Self {
            package_ids: response.package_ids,
        }
    }
}

impl TryFrom<wire::GetPackageResponse> for model::GetPackageResponse {
    type Error = ConversionError;

    fn try_from(response: wire::GetPackageResponse) -> Result<Self, Self::Error> {
        let hash_function = match wire::HashFunction::try_from(response.hash_function) {
            Ok(wire::HashFunction::Sha256) => model::HashFunction::Sha256,
            Err(_) => {
                return Err(ConversionError::UnknownEnumValue {
                    enumeration: "HashFunction",
                    value: response.hash_function,
                })
            }
        };
        Ok(Self {
            hash_function,
            archive_payload: response.archive_payload,
            hash: response.hash,
        })
    }
}

impl TryFrom<wire::GetPackageStatusResponse> for model::GetPackageStatusResponse {
    type Error = ConversionError;

    fn try_from(response: wire::GetPackageStatusResponse) -> Result<Self, Self::Error> {
        let package_status = match wire::PackageStatus::try_from(response.package_status) {
            Ok(wire::PackageStatus::Unknown) => model::PackageStatus::Unknown,
            Ok(wire::PackageStatus::Registered) => model::PackageStatus::Registered,
            Err(_) => {
                return Err(ConversionError::UnknownEnumValue {
                    enumeration: "PackageStatus",
                    value: response.package_status,
                })
            }
        };
        Ok(Self { package_status })
    }
}

impl TryFrom<wire::GetLedgerConfigurationResponse> for model::GetLedgerConfigurationResponse {
    type Error = ConversionError;

    fn try_from(response: wire::GetLedgerConfigurationResponse) -> Result<Self, Self::Error> {
        let config = required(
            response.ledger_configuration,
            "GetLedgerConfigurationResponse",
            "ledger_configuration",
        )?;
        Ok(Self {
            config: model::LedgerConfiguration {
                min_ttl: required(config.min_ttl, "LedgerConfiguration", "min_ttl")?.into(),
                max_ttl: required(config.max_ttl, "LedgerConfiguration", "max_ttl")?.into(),
            },
        })
    }
}

impl TryFrom<wire::GetTimeResponse> for model::GetTimeResponse {
    type Error = ConversionError;

    fn try_from(response: wire::GetTimeResponse) -> Result<Self, Self::Error> {
        Ok(Self {
            current_time: required(response.current_time, "GetTimeResponse", "current_time")?
                .into(),
        })
    }
}

impl From<wire::GetParticipantIdResponse> for model::GetParticipantIdResponse {
    fn from(response: wire::GetParticipantIdResponse) -> Self {
        Self {
            participant_id: response.participant_id,
        }
    }
}

impl From<wire::PartyDetails> for model::PartyDetails {
    fn from(details: wire::PartyDetails) -> Self {
        Self {
            party: details.party,
            display_name: non_empty(details.display_name),
            is_local: details.is_local,
        }
    }
}

impl From<wire::ListKnownPartiesResponse> for model::ListKnownPartiesResponse {
    fn from(response: wire::ListKnownPartiesResponse) -> Self {
        Self {
            party_details: response.party_details.into_iter().map(Into::into).collect(),
        }
    }
}

impl TryFrom<wire::AllocatePartyResponse> for model::AllocatePartyResponse {
    type Error = ConversionError;

    fn try_from(response: wire::AllocatePartyResponse) -> Result<Self, Self::Error> {
        Ok(Self {
            party_details: required(response.party_details, "AllocatePartyResponse", "party_details")?
                .into(),
        })
    }
}

impl From<wire::PackageDetails> for model::PackageDetails {
    fn from(details: wire::PackageDetails) -> Self {
        Self {
            package_id: details.package_id,
            package_size: details.package_size,
            known_since: details.known_since.map(Into::into),
            source_description: details.source_description,
        }
    }
}

impl From<wire::ListKnownPackagesResponse> for model::ListKnownPackagesResponse {
    fn from(response: wire::ListKnownPackagesResponse) -> Self {
        Self {
            package_details_list: response.package_details.into_iter().map(Into::into).collect(),
        }
    }
}
