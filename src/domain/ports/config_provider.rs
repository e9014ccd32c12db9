//! ConfigProvider port - supplies the active environment's configuration

use crate::domain::entities::{AppConfig, ContractsConfig};
use crate::domain::value_objects::Environment;
use crate::error::CheckResult;

/// Source of the environment-scoped configuration.
pub trait ConfigProvider {
    /// Application config for the environment, including network identity
    /// and any previously recorded contract addresses.
    fn app_config(&self, environment: &Environment) -> CheckResult<AppConfig>;

    /// Deployment parameters handed to the deployer for the environment.
    fn contracts_config(&self, environment: &Environment) -> CheckResult<ContractsConfig>;
}
