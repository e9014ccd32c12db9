//! Deployment entities - what goes into and comes out of the deployer

use std::collections::BTreeMap;
use std::fmt;

use alloy::primitives::Address;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::domain::value_objects::{parse_address, ContractRole};
use crate::error::{CheckError, CheckResult};

/// Per-environment contract deployment parameters.
///
/// Opaque to the check; handed to the deployer as-is.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ContractsConfig(Map<String, Value>);

impl ContractsConfig {
    pub fn new(values: Map<String, Value>) -> Self {
        Self(values)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// An address reported by the deployer, with the exact text it reported.
///
/// The text is what gets recorded; the parsed form is used for comparison.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeployedAddress {
    address: Address,
    text: String,
}

impl DeployedAddress {
    pub fn address(&self) -> Address {
        self.address
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }
}

impl From<Address> for DeployedAddress {
    fn from(address: Address) -> Self {
        Self {
            address,
            text: address.to_string(),
        }
    }
}

impl fmt::Display for DeployedAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

/// Addresses reported by the deployer, keyed by contract role.
///
/// Only the tracked role's entry is ever read.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DeploymentResult(BTreeMap<String, Value>);

impl DeploymentResult {
    pub fn from_addresses<I, K>(entries: I) -> Self
    where
        I: IntoIterator<Item = (K, Address)>,
        K: Into<String>,
    {
        Self(
            entries
                .into_iter()
                .map(|(role, address)| (role.into(), Value::String(address.to_string())))
                .collect(),
        )
    }

    /// Address deployed for `role`.
    ///
    /// A missing, empty or malformed entry is a deployment failure: the
    /// deployer claimed success without producing a usable address.
    pub fn address_for(&self, role: &ContractRole) -> CheckResult<DeployedAddress> {
        let raw = match self.0.get(role.as_str()) {
            Some(Value::String(raw)) => raw,
            Some(other) => {
                return Err(CheckError::Deployment {
                    message: format!("address for '{}' is not a string: {}", role, other),
                })
            }
            None => {
                return Err(CheckError::Deployment {
                    message: format!("deployment result has no address for '{}'", role),
                })
            }
        };

        match parse_address(role.as_str(), raw) {
            Ok(Some(address)) => Ok(DeployedAddress {
                address,
                text: raw.trim().to_string(),
            }),
            Ok(None) => Err(CheckError::Deployment {
                message: format!("deployment result has an empty address for '{}'", role),
            }),
            Err(_) => Err(CheckError::Deployment {
                message: format!("deployment result has an invalid address for '{}': {}", role, raw),
            }),
        }
    }
}
