//! Artifact table - maps network classes to the config file rewritten for them

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use crate::domain::value_objects::NetworkClass;
use crate::error::{CheckError, CheckResult};

/// Network class → artifact file name, relative to the config directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArtifactTable {
    entries: BTreeMap<String, PathBuf>,
}

impl ArtifactTable {
    /// Build a table, rejecting empty tables and blank paths up front.
    ///
    /// Every class that can deploy must be mapped; other classes are optional.
    pub fn new(entries: BTreeMap<String, PathBuf>) -> CheckResult<Self> {
        if entries.is_empty() {
            return Err(CheckError::InvalidConfig {
                message: "artifact table has no network classes".to_string(),
            });
        }
        for class in [NetworkClass::Solo, NetworkClass::Testnet] {
            if !entries.contains_key(class.as_str()) {
                return Err(CheckError::InvalidConfig {
                    message: format!("artifact table has no entry for network class '{}'", class),
                });
            }
        }
        if let Some((class, _)) = entries
            .iter()
            .find(|(_, path)| path.as_os_str().is_empty())
        {
            return Err(CheckError::InvalidConfig {
                message: format!("artifact path for network class '{}' is empty", class),
            });
        }
        Ok(Self { entries })
    }

    /// Artifact file for a network class
    pub fn resolve(&self, class: &NetworkClass) -> CheckResult<&Path> {
        self.entries
            .get(class.as_str())
            .map(PathBuf::as_path)
            .ok_or_else(|| CheckError::UnknownNetworkClass {
                class: class.to_string(),
            })
    }

    pub fn entries(&self) -> &BTreeMap<String, PathBuf> {
        &self.entries
    }
}

impl Default for ArtifactTable {
    fn default() -> Self {
        let entries = [
            ("solo", "local.ts"),
            ("testnet", "testnet.ts"),
            ("main", "mainnet.ts"),
        ]
        .into_iter()
        .map(|(class, file)| (class.to_string(), PathBuf::from(file)))
        .collect();
        Self { entries }
    }
}
