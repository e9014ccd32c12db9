//! Network value objects - identity and deployment-sensitivity class

use serde::{Deserialize, Serialize};

/// Deployment-sensitivity class of a network, derived from its name.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum NetworkClass {
    /// Local sandbox node
    Solo,
    /// Public test network
    Testnet,
    /// Production network
    Main,
    /// Any network name this tool has no special knowledge of
    Other(String),
}

impl NetworkClass {
    /// Classify a network by its configured name
    pub fn from_name(name: &str) -> Self {
        match name {
            "solo" => NetworkClass::Solo,
            "testnet" => NetworkClass::Testnet,
            "main" => NetworkClass::Main,
            other => NetworkClass::Other(other.to_string()),
        }
    }

    /// Key used in the artifact table
    pub fn as_str(&self) -> &str {
        match self {
            NetworkClass::Solo => "solo",
            NetworkClass::Testnet => "testnet",
            NetworkClass::Main => "main",
            NetworkClass::Other(name) => name,
        }
    }

    /// Whether automatic deployment is allowed on this class
    pub fn is_permissive(&self) -> bool {
        matches!(self, NetworkClass::Solo | NetworkClass::Testnet)
    }
}

impl std::fmt::Display for NetworkClass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The network a config targets. Never mutated after load.
///
/// Only the fields the check needs are modelled; the rest of the network
/// object stays untouched inside the owning `AppConfig`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NetworkIdentity {
    pub name: String,
    #[serde(default)]
    pub urls: Vec<String>,
}

impl NetworkIdentity {
    pub fn class(&self) -> NetworkClass {
        NetworkClass::from_name(&self.name)
    }

    /// First configured RPC endpoint
    pub fn primary_url(&self) -> Option<&str> {
        self.urls.first().map(String::as_str)
    }
}
