//! Check Use Case Tests

use super::*;
use crate::domain::entities::{AppConfig, ContractsConfig, DeploymentResult};
use crate::domain::policies::{ProbeFailurePolicy, SkipReason};
use crate::domain::ports::{ChainProbe, ConfigProvider, ConfigWriter, Deployer, ProbeError};
use crate::domain::value_objects::{
    ArtifactTable, ContractRole, Environment, NetworkClass, NetworkIdentity,
};
use crate::error::{CheckError, CheckResult};
use alloy::primitives::{address, Address};
use serde_json::json;
use std::cell::{Cell, RefCell};
use std::collections::HashSet;
use std::path::{Path, PathBuf};
use std::rc::Rc;

const DEPLOYED: Address = address!("0x787B8840100d9BaAdD7463f4a73b5BA73B00C6cA");
const STALE: Address = address!("0x00000000000000000000000000000000000000aa");

// Shared fake world: persisted config, on-chain code, and call counters

struct World {
    config: RefCell<AppConfig>,
    code: RefCell<HashSet<Address>>,
    probe_calls: Cell<usize>,
    deploy_calls: Cell<usize>,
    writes: RefCell<Vec<(PathBuf, AppConfig)>>,
    fail_probe: Cell<bool>,
    fail_deploy: Cell<bool>,
    fail_write: Cell<bool>,
    deploy_result: RefCell<DeploymentResult>,
    unmapped: RefCell<HashSet<String>>,
}

impl World {
    fn new(network: &str, factory: Option<Address>) -> Rc<Self> {
        let factory = factory.map_or(serde_json::Value::Null, |a| a.to_string().into());
        let config: AppConfig = serde_json::from_value(json!({
            "basePath": "http://localhost:3000",
            "network": {
                "id": network,
                "name": network,
                "urls": ["http://localhost:8669"]
            },
            "simpleAccountFactoryContractAddress": factory,
            "ipfsPinningService": "https://pinning.example.org"
        }))
        .unwrap();

        Rc::new(Self {
            config: RefCell::new(config),
            code: RefCell::new(HashSet::new()),
            probe_calls: Cell::new(0),
            deploy_calls: Cell::new(0),
            writes: RefCell::new(Vec::new()),
            fail_probe: Cell::new(false),
            fail_deploy: Cell::new(false),
            fail_write: Cell::new(false),
            deploy_result: RefCell::new(DeploymentResult::from_addresses([(
                "simpleAccountFactory",
                DEPLOYED,
            )])),
            unmapped: RefCell::new(HashSet::new()),
        })
    }

    fn with_code_at(self: Rc<Self>, address: Address) -> Rc<Self> {
        self.code.borrow_mut().insert(address);
        self
    }

    fn use_case(
        self: &Rc<Self>,
    ) -> CheckUseCase<MockProvider, MockProbe, MockDeployer, MockWriter> {
        CheckUseCase::new(
            MockProvider(self.clone()),
            MockProbe(self.clone()),
            MockDeployer(self.clone()),
            MockWriter(self.clone()),
        )
    }
}

struct MockProvider(Rc<World>);

impl ConfigProvider for MockProvider {
    fn app_config(&self, _environment: &Environment) -> CheckResult<AppConfig> {
        Ok(self.0.config.borrow().clone())
    }

    fn contracts_config(&self, _environment: &Environment) -> CheckResult<ContractsConfig> {
        Ok(ContractsConfig::default())
    }
}

struct MockProbe(Rc<World>);

impl ChainProbe for MockProbe {
    fn has_contract_code(
        &self,
        _network: &NetworkIdentity,
        address: Option<&Address>,
    ) -> Result<bool, ProbeError> {
        self.0.probe_calls.set(self.0.probe_calls.get() + 1);
        if self.0.fail_probe.get() {
            return Err(ProbeError::Rpc {
                url: "http://localhost:8669".to_string(),
                message: "connection refused".to_string(),
            });
        }
        Ok(address.is_some_and(|a| self.0.code.borrow().contains(a)))
    }
}

struct MockDeployer(Rc<World>);

impl Deployer for MockDeployer {
    fn deploy_all(
        &self,
        _environment: &Environment,
        _contracts: &ContractsConfig,
    ) -> CheckResult<DeploymentResult> {
        self.0.deploy_calls.set(self.0.deploy_calls.get() + 1);
        if self.0.fail_deploy.get() {
            return Err(CheckError::Deployment {
                message: "transaction reverted".to_string(),
            });
        }
        self.0.code.borrow_mut().insert(DEPLOYED);
        Ok(self.0.deploy_result.borrow().clone())
    }
}

struct MockWriter(Rc<World>);

impl ConfigWriter for MockWriter {
    fn target_path(&self, class: &NetworkClass) -> CheckResult<PathBuf> {
        if self.0.unmapped.borrow().contains(class.as_str()) {
            return Err(CheckError::UnknownNetworkClass {
                class: class.to_string(),
            });
        }
        Ok(Path::new("config").join(ArtifactTable::default().resolve(class)?))
    }

    fn write(&self, class: &NetworkClass, config: &AppConfig) -> CheckResult<PathBuf> {
        let path = self.target_path(class)?;
        if self.0.fail_write.get() {
            return Err(CheckError::ConfigWrite {
                path,
                message: "read-only file system".to_string(),
            });
        }
        self.0.writes.borrow_mut().push((path.clone(), config.clone()));
        *self.0.config.borrow_mut() = config.clone();
        Ok(path)
    }
}

fn options(env: &str) -> CheckOptions {
    CheckOptions::new(Environment::new(env))
}

// === Skips ===

#[test]
fn present_code_never_deploys_or_writes() {
    for network in ["solo", "testnet", "main"] {
        let world = World::new(network, Some(DEPLOYED)).with_code_at(DEPLOYED);

        let outcome = world.use_case().execute(&options("local")).unwrap();

        assert!(matches!(
            outcome,
            CheckOutcome::Skipped {
                reason: SkipReason::AlreadyDeployed,
                ..
            }
        ));
        assert_eq!(world.deploy_calls.get(), 0);
        assert!(world.writes.borrow().is_empty());
    }
}

#[test]
fn unmapped_restricted_class_still_skips() {
    let present = World::new("devnet", Some(DEPLOYED)).with_code_at(DEPLOYED);
    let outcome = present.use_case().execute(&options("dev")).unwrap();
    assert!(matches!(
        outcome,
        CheckOutcome::Skipped {
            reason: SkipReason::AlreadyDeployed,
            ..
        }
    ));

    let absent = World::new("devnet", None);
    let outcome = absent.use_case().execute(&options("dev")).unwrap();
    assert!(matches!(
        outcome,
        CheckOutcome::Skipped {
            reason: SkipReason::RestrictedNetwork,
            ..
        }
    ));
    assert_eq!(absent.deploy_calls.get(), 0);
    assert!(absent.writes.borrow().is_empty());
}

#[test]
fn production_with_absent_code_skips_as_restricted() {
    let world = World::new("main", None);

    let outcome = world.use_case().execute(&options("mainnet")).unwrap();

    assert_eq!(
        outcome,
        CheckOutcome::Skipped {
            network: "main".to_string(),
            reason: SkipReason::RestrictedNetwork,
            address: None,
        }
    );
    assert_eq!(world.deploy_calls.get(), 0);
    assert!(world.writes.borrow().is_empty());
}

// === Deployments ===

#[test]
fn sandbox_with_absent_code_deploys_once_and_writes() {
    let world = World::new("solo", None);
    let before = world.config.borrow().clone();

    let outcome = world.use_case().execute(&options("local")).unwrap();

    assert_eq!(
        outcome,
        CheckOutcome::Deployed {
            network: "solo".to_string(),
            address: DEPLOYED.into(),
            artifact: PathBuf::from("config/local.ts"),
        }
    );
    assert_eq!(world.deploy_calls.get(), 1);

    let writes = world.writes.borrow();
    assert_eq!(writes.len(), 1);
    let (path, written) = &writes[0];
    assert_eq!(path, Path::new("config/local.ts"));
    assert_eq!(written.contract_address(&ContractRole::default()), Some(DEPLOYED));
    for (key, value) in before.fields() {
        if key != "simpleAccountFactoryContractAddress" {
            assert_eq!(written.fields().get(key), Some(value), "field {key} changed");
        }
    }
}

#[test]
fn testnet_example_writes_testnet_artifact() {
    let world = World::new("testnet", None);

    world.use_case().execute(&options("testnet")).unwrap();

    let writes = world.writes.borrow();
    let (path, written) = &writes[0];
    assert_eq!(path, Path::new("config/testnet.ts"));
    assert_eq!(
        written.fields()["simpleAccountFactoryContractAddress"],
        json!(DEPLOYED.to_string())
    );
    assert_eq!(written.fields()["basePath"], json!("http://localhost:3000"));
    assert_eq!(
        written.fields()["ipfsPinningService"],
        json!("https://pinning.example.org")
    );
}

#[test]
fn reported_address_text_is_written_verbatim() {
    let reported = "0x787b8840100d9baadd7463f4a73b5ba73b00c6ca";
    let world = World::new("solo", None);
    *world.deploy_result.borrow_mut() =
        serde_json::from_value(json!({ "simpleAccountFactory": reported })).unwrap();

    let outcome = world.use_case().execute(&options("local")).unwrap();

    let writes = world.writes.borrow();
    let (_, written) = &writes[0];
    assert_eq!(
        written.fields()["simpleAccountFactoryContractAddress"],
        json!(reported)
    );
    assert_eq!(written.contract_address(&ContractRole::default()), Some(DEPLOYED));
    assert_eq!(outcome.to_json()["address"], reported);
}

#[test]
fn stale_address_without_code_is_redeployed_on_sandbox() {
    let world = World::new("solo", Some(STALE));

    let outcome = world.use_case().execute(&options("local")).unwrap();

    assert_eq!(outcome.status(), "deployed");
    assert_eq!(world.deploy_calls.get(), 1);
    assert_eq!(
        world.config.borrow().contract_address(&ContractRole::default()),
        Some(DEPLOYED)
    );
}

#[test]
fn second_run_after_deployment_skips() {
    let world = World::new("solo", None);
    let use_case = world.use_case();

    let first = use_case.execute(&options("local")).unwrap();
    let second = use_case.execute(&options("local")).unwrap();

    assert_eq!(first.status(), "deployed");
    assert!(matches!(
        second,
        CheckOutcome::Skipped {
            reason: SkipReason::AlreadyDeployed,
            ..
        }
    ));
    assert_eq!(world.deploy_calls.get(), 1);
    assert_eq!(world.writes.borrow().len(), 1);
}

#[test]
fn dry_run_never_deploys() {
    let world = World::new("solo", None);

    let outcome = world
        .use_case()
        .execute(&options("local").with_dry_run(true))
        .unwrap();

    assert_eq!(
        outcome,
        CheckOutcome::WouldDeploy {
            network: "solo".to_string(),
            artifact: PathBuf::from("config/local.ts"),
        }
    );
    assert_eq!(world.deploy_calls.get(), 0);
    assert!(world.writes.borrow().is_empty());
}

// === Failures ===

#[test]
fn missing_environment_halts_before_probe() {
    let world = World::new("solo", None);

    let err = world
        .use_case()
        .execute(&CheckOptions::new(None).with_env_var("APP_ENV"))
        .unwrap_err();

    assert!(matches!(err, CheckError::MissingEnvironment { ref var } if var == "APP_ENV"));
    assert_eq!(world.probe_calls.get(), 0);
    assert_eq!(world.deploy_calls.get(), 0);
}

#[test]
fn unmapped_deploying_class_fails_before_chain_lookup() {
    let world = World::new("testnet", None);
    world.unmapped.borrow_mut().insert("testnet".to_string());

    let err = world.use_case().execute(&options("testnet")).unwrap_err();

    assert!(matches!(err, CheckError::UnknownNetworkClass { ref class } if class == "testnet"));
    assert_eq!(world.probe_calls.get(), 0);
}

#[test]
fn probe_failure_escalates_by_default() {
    let world = World::new("solo", Some(DEPLOYED));
    world.fail_probe.set(true);

    let err = world.use_case().execute(&options("local")).unwrap_err();

    assert!(matches!(err, CheckError::Probe(_)));
    assert_eq!(world.deploy_calls.get(), 0);
    assert!(world.writes.borrow().is_empty());
}

#[test]
fn probe_failure_can_be_reported_as_distinct_skip() {
    let world = World::new("solo", Some(DEPLOYED));
    world.fail_probe.set(true);

    let outcome = world
        .use_case()
        .execute(&options("local").with_probe_failure(ProbeFailurePolicy::Skip))
        .unwrap();

    match outcome {
        CheckOutcome::Skipped {
            reason: SkipReason::ProbeFailed(message),
            address,
            ..
        } => {
            assert!(message.contains("connection refused"));
            assert_eq!(address, Some(DEPLOYED));
        }
        other => panic!("expected probe-failed skip, got {other:?}"),
    }
    assert_eq!(world.deploy_calls.get(), 0);
}

#[test]
fn deployment_failure_propagates_without_write() {
    let world = World::new("testnet", None);
    world.fail_deploy.set(true);

    let err = world.use_case().execute(&options("testnet")).unwrap_err();

    assert!(matches!(err, CheckError::Deployment { .. }));
    assert_eq!(world.deploy_calls.get(), 1);
    assert!(world.writes.borrow().is_empty());
}

#[test]
fn deployment_result_without_tracked_role_fails() {
    let world = World::new("solo", None);
    *world.deploy_result.borrow_mut() = DeploymentResult::default();

    let err = world.use_case().execute(&options("local")).unwrap_err();

    assert!(matches!(err, CheckError::Deployment { .. }));
    assert!(world.writes.borrow().is_empty());
}

#[test]
fn write_failure_propagates() {
    let world = World::new("solo", None);
    world.fail_write.set(true);

    let err = world.use_case().execute(&options("local")).unwrap_err();

    assert!(matches!(err, CheckError::ConfigWrite { .. }));
    assert_eq!(world.deploy_calls.get(), 1);
}
