#![allow(dead_code)]

use ledger_client::transport::*;
use ledger_client::{ClientConfig, DamlLedgerClient, LedgerServices};
use serde_json::{json, Value};
use std::sync::Arc;

/// Test utilities and common setup functions

pub const LEDGER_ID: &str = "sandbox-ledger";

pub struct TestHelper;

impl TestHelper {
    pub fn init_tracing() {
        let _ = tracing_subscriber::fmt()
            .with_test_writer()
            .try_init();
    }

    /// Connect through an identity service that answers with [`LEDGER_ID`]
    pub async fn connect(mocks: MockServices) -> DamlLedgerClient {
        Self::connect_with(ClientConfig::default(), mocks).await
    }

    pub async fn connect_with(config: ClientConfig, mocks: MockServices) -> DamlLedgerClient {
        Self::init_tracing();
        DamlLedgerClient::connect(config, mocks.into_services())
            .await
            .expect("connect with mocked identity service")
    }

    pub fn identifier() -> Value {
        json!({"packageId": "pkg", "moduleName": "Iou", "entityName": "Iou"})
    }

    pub fn create_commands(command_id: &str) -> Value {
        json!({
            "commands": {
                "applicationId": "integration",
                "commandId": command_id,
                "party": "alice",
                "ledgerEffectiveTime": {"seconds": 0, "nanoseconds": 0},
                "maximumRecordTime": {"seconds": 30, "nanoseconds": 0},
                "list": [{
                    "create": {
                        "templateId": Self::identifier(),
                        "arguments": {
                            "fields": {
                                "issuer": {"party": "bank"},
                                "owner": {"party": "alice"},
                                "amount": {"decimal": "100.0"},
                                "observers": {"list": [{"party": "bob"}]},
                                "note": {"optional": {}}
                            }
                        }
                    }
                }]
            }
        })
    }
}

/// One mock per transport collaborator; the identity mock is preset
pub struct MockServices {
    pub active_contracts: MockActiveContractsService,
    pub command: MockCommandService,
    pub command_completion: MockCommandCompletionService,
    pub command_submission: MockCommandSubmissionService,
    pub ledger_identity: MockLedgerIdentityService,
    pub package: MockPackageService,
    pub ledger_configuration: MockLedgerConfigurationService,
    pub time: MockTimeService,
    pub transaction: MockTransactionService,
    pub reset: MockResetService,
    pub party_management: MockPartyManagementService,
    pub package_management: MockPackageManagementService,
}

impl MockServices {
    pub fn new() -> Self {
        let mut ledger_identity = MockLedgerIdentityService::new();
        ledger_identity
            .expect_get_ledger_identity()
            .times(1)
            .returning(|_| {
                Ok(ledger_client::wire::GetLedgerIdentityResponse {
                    ledger_id: LEDGER_ID.to_string(),
                })
            });

        Self {
            active_contracts: MockActiveContractsService::new(),
            command: MockCommandService::new(),
            command_completion: MockCommandCompletionService::new(),
            command_submission: MockCommandSubmissionService::new(),
            ledger_identity,
            package: MockPackageService::new(),
            ledger_configuration: MockLedgerConfigurationService::new(),
            time: MockTimeService::new(),
            transaction: MockTransactionService::new(),
            reset: MockResetService::new(),
            party_management: MockPartyManagementService::new(),
            package_management: MockPackageManagementService::new(),
        }
    }

    pub fn into_services(self) -> LedgerServices {
        LedgerServices {
            active_contracts: Arc::new(self.active_contracts),
            command: Arc::new(self.command),
            command_completion: Arc::new(self.command_completion),
            command_submission: Arc::new(self.command_submission),
            ledger_identity: Arc::new(self.ledger_identity),
            package: Arc::new(self.package),
            ledger_configuration: Arc::new(self.ledger_configuration),
            time: Arc::new(self.time),
            transaction: Arc::new(self.transaction),
            reset: Arc::new(self.reset),
            party_management: Arc::new(self.party_management),
            package_management: Arc::new(self.package_management),
        }
    }
}

impl Default for MockServices {
    fn default() -> Self {
        Self::new()
    }
}
