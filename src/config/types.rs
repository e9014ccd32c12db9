//! Configuration type definitions

use std::collections::BTreeMap;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::domain::policies::ProbeFailurePolicy;
use crate::domain::value_objects::{ArtifactTable, ContractRole, Environment};
use crate::error::{CheckError, CheckResult};
use crate::infrastructure::deploy::{DEFAULT_ARGS, DEFAULT_PROGRAM};

/// Check behavior
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CheckConfig {
    /// Name of the environment selector variable
    #[serde(default = "default_env_var")]
    pub env_var: String,

    /// Contract role whose address the check tracks
    #[serde(default = "default_tracked_contract")]
    pub tracked_contract: String,

    #[serde(default)]
    pub probe_failure: ProbeFailurePolicy,
}

impl Default for CheckConfig {
    fn default() -> Self {
        Self {
            env_var: default_env_var(),
            tracked_contract: default_tracked_contract(),
            probe_failure: ProbeFailurePolicy::default(),
        }
    }
}

fn default_env_var() -> String {
    Environment::DEFAULT_VAR.to_string()
}

fn default_tracked_contract() -> String {
    ContractRole::SIMPLE_ACCOUNT_FACTORY.to_string()
}

/// Where config artifacts live and how they are named.
///
/// ```toml
/// [artifacts]
/// config_dir = "../config"
///
/// [artifacts.networks]
/// solo = "local.ts"
/// testnet = "testnet.ts"
///
/// [artifacts.environments]
/// local = "local.ts"
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ArtifactsConfig {
    #[serde(default = "default_config_dir")]
    pub config_dir: PathBuf,

    /// Network class -> artifact file written after a deployment
    #[serde(default = "default_networks")]
    pub networks: BTreeMap<String, PathBuf>,

    /// Environment name -> artifact file read at startup
    #[serde(default = "default_environments")]
    pub environments: BTreeMap<String, PathBuf>,
}

impl Default for ArtifactsConfig {
    fn default() -> Self {
        Self {
            config_dir: default_config_dir(),
            networks: default_networks(),
            environments: default_environments(),
        }
    }
}

fn default_config_dir() -> PathBuf {
    PathBuf::from("../config")
}

fn default_networks() -> BTreeMap<String, PathBuf> {
    ArtifactTable::default().entries().clone()
}

fn default_environments() -> BTreeMap<String, PathBuf> {
    [
        ("local", "local.ts"),
        ("testnet", "testnet.ts"),
        ("mainnet", "mainnet.ts"),
    ]
    .into_iter()
    .map(|(env, file)| (env.to_string(), PathBuf::from(file)))
    .collect()
}

/// RPC endpoint override
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct RpcConfig {
    /// Replaces the network's first URL when set
    #[serde(default)]
    pub url: Option<String>,
}

/// External deployment command
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeployerConfig {
    #[serde(default = "default_program")]
    pub program: String,

    #[serde(default = "default_args")]
    pub args: Vec<String>,

    /// Directory holding `<env>.json` contract parameters
    #[serde(default = "default_contracts_dir")]
    pub contracts_dir: PathBuf,

    #[serde(default)]
    pub working_dir: Option<PathBuf>,
}

impl Default for DeployerConfig {
    fn default() -> Self {
        Self {
            program: default_program(),
            args: default_args(),
            contracts_dir: default_contracts_dir(),
            working_dir: None,
        }
    }
}

fn default_program() -> String {
    DEFAULT_PROGRAM.to_string()
}

fn default_args() -> Vec<String> {
    DEFAULT_ARGS.iter().map(|a| a.to_string()).collect()
}

fn default_contracts_dir() -> PathBuf {
    PathBuf::from("../config/contracts")
}

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub check: CheckConfig,

    #[serde(default)]
    pub artifacts: ArtifactsConfig,

    #[serde(default)]
    pub rpc: RpcConfig,

    #[serde(default)]
    pub deployer: DeployerConfig,
}

impl Config {
    /// Reject configurations that cannot drive a run.
    pub fn validate(&self) -> CheckResult<()> {
        if self.check.env_var.trim().is_empty() {
            return Err(invalid("check.env_var must not be empty"));
        }
        if self.check.tracked_contract.trim().is_empty() {
            return Err(invalid("check.tracked_contract must not be empty"));
        }
        if self.deployer.program.trim().is_empty() {
            return Err(invalid("deployer.program must not be empty"));
        }
        if self.artifacts.environments.is_empty() {
            return Err(invalid("artifacts.environments must map at least one environment"));
        }
        if let Some((env, _)) = self
            .artifacts
            .environments
            .iter()
            .find(|(_, file)| file.as_os_str().is_empty())
        {
            return Err(invalid(&format!("artifacts.environments.{} has an empty path", env)));
        }
        if let Some(url) = &self.rpc.url {
            if url.trim().is_empty() {
                return Err(invalid("rpc.url must not be empty when set"));
            }
        }
        self.artifact_table().map(|_| ())
    }

    /// Validated network class -> artifact table.
    pub fn artifact_table(&self) -> CheckResult<ArtifactTable> {
        ArtifactTable::new(self.artifacts.networks.clone())
    }

    pub fn tracked_role(&self) -> ContractRole {
        ContractRole::new(self.check.tracked_contract.trim())
    }
}

fn invalid(message: &str) -> CheckError {
    CheckError::InvalidConfig {
        message: message.to_string(),
    }
}
