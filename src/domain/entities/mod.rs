//! Domain Entities

mod app_config;
mod deployment;

pub use app_config::AppConfig;
pub use deployment::{ContractsConfig, DeployedAddress, DeploymentResult};
