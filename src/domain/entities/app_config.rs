//! AppConfig entity - the environment-scoped application configuration

use std::collections::BTreeMap;

use alloy::primitives::Address;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::DeployedAddress;
use crate::domain::value_objects::{is_address_field, parse_address, ContractRole, NetworkIdentity};
use crate::error::{CheckError, CheckResult};

/// Application configuration for one environment.
///
/// The full document is kept as an ordered JSON object so that a rewrite
/// reproduces every field the check does not understand. The network and
/// the contract addresses are parsed once, on construction; every
/// `*ContractAddress` field is validated at that point.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Map<String, Value>", into = "Map<String, Value>")]
pub struct AppConfig {
    network: NetworkIdentity,
    addresses: BTreeMap<String, Address>,
    fields: Map<String, Value>,
}

impl AppConfig {
    pub fn network(&self) -> &NetworkIdentity {
        &self.network
    }

    /// Known address for a contract role, if any
    pub fn contract_address(&self, role: &ContractRole) -> Option<Address> {
        self.addresses.get(&role.config_key()).copied()
    }

    /// Derive a new config with the role's address set.
    ///
    /// The address is recorded in the text form the deployer reported.
    /// Everything else, including field order, is carried over unchanged.
    pub fn with_contract_address(
        &self,
        role: &ContractRole,
        deployed: &DeployedAddress,
    ) -> AppConfig {
        let key = role.config_key();
        let mut derived = self.clone();
        derived
            .fields
            .insert(key.clone(), Value::String(deployed.as_str().to_string()));
        derived.addresses.insert(key, deployed.address());
        derived
    }

    /// The raw document, in its original field order
    pub fn fields(&self) -> &Map<String, Value> {
        &self.fields
    }
}

impl TryFrom<Map<String, Value>> for AppConfig {
    type Error = CheckError;

    fn try_from(fields: Map<String, Value>) -> CheckResult<Self> {
        let network_value = fields.get("network").cloned().ok_or_else(|| {
            CheckError::InvalidConfig {
                message: "app config has no 'network' field".to_string(),
            }
        })?;
        let network: NetworkIdentity =
            serde_json::from_value(network_value).map_err(|e| CheckError::InvalidConfig {
                message: format!("app config 'network' is malformed: {}", e),
            })?;

        let mut addresses = BTreeMap::new();
        for (key, value) in fields.iter().filter(|(key, _)| is_address_field(key)) {
            let parsed = match value {
                Value::Null => None,
                Value::String(raw) => parse_address(key, raw)?,
                other => {
                    return Err(CheckError::InvalidAddress {
                        field: key.clone(),
                        value: other.to_string(),
                    })
                }
            };
            if let Some(address) = parsed {
                addresses.insert(key.clone(), address);
            }
        }

        Ok(Self {
            network,
            addresses,
            fields,
        })
    }
}

impl From<AppConfig> for Map<String, Value> {
    fn from(config: AppConfig) -> Self {
        config.fields
    }
}
