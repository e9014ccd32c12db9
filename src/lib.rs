//! factory-check - contract deployment check for sandbox networks
//!
//! Before dependent services start, checks that the account-factory contract
//! recorded in the environment's config artifact actually has code on chain.
//! On solo and testnet networks a missing contract is deployed and the
//! artifact rewritten with the new address; elsewhere the run is a no-op.

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod presentation;

// Re-exports for convenience
pub use application::{CheckOptions, CheckOutcome, CheckUseCase};
pub use config::Config;
pub use domain::entities::{AppConfig, ContractsConfig, DeployedAddress, DeploymentResult};
pub use domain::policies::{decide, Decision, ProbeFailurePolicy, SkipReason};
pub use domain::value_objects::{ContractRole, Environment, NetworkClass, NetworkIdentity};
pub use error::{CheckError, CheckResult};
