//! Deployer port - submits and confirms the contract deployment

use crate::domain::entities::{ContractsConfig, DeploymentResult};
use crate::domain::value_objects::Environment;
use crate::error::CheckResult;

/// Deploys all contracts for an environment.
///
/// Called at most once per run. Failures surface as
/// `CheckError::Deployment` and are never retried.
pub trait Deployer {
    fn deploy_all(
        &self,
        environment: &Environment,
        contracts: &ContractsConfig,
    ) -> CheckResult<DeploymentResult>;
}
