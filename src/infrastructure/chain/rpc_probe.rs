//! JSON-RPC chain probe
//!
//! Implements the ChainProbe port with an alloy HTTP provider. The provider
//! is async; calls are driven to completion on a runtime owned by the probe,
//! so the orchestrator sees plain blocking calls.

use alloy::{
    primitives::Address,
    providers::{Provider, ProviderBuilder},
    transports::http::reqwest::Url,
};
use tokio::runtime::{Builder, Runtime};
use tracing::debug;

use crate::domain::ports::{ChainProbe, ProbeError};
use crate::domain::value_objects::NetworkIdentity;

pub struct RpcChainProbe {
    runtime: Runtime,
    url_override: Option<String>,
}

impl RpcChainProbe {
    /// Build a probe. `url_override` replaces the network's own endpoints.
    pub fn new(url_override: Option<String>) -> std::io::Result<Self> {
        let runtime = Builder::new_current_thread().enable_all().build()?;
        Ok(Self {
            runtime,
            url_override,
        })
    }

    fn endpoint(&self, network: &NetworkIdentity) -> Result<Url, ProbeError> {
        let raw = self
            .url_override
            .as_deref()
            .or_else(|| network.primary_url())
            .ok_or_else(|| ProbeError::NoEndpoint {
                network: network.name.clone(),
            })?;
        raw.parse::<Url>().map_err(|e| ProbeError::InvalidEndpoint {
            url: raw.to_string(),
            message: e.to_string(),
        })
    }
}

impl ChainProbe for RpcChainProbe {
    fn has_contract_code(
        &self,
        network: &NetworkIdentity,
        address: Option<&Address>,
    ) -> Result<bool, ProbeError> {
        let Some(address) = address.copied() else {
            return Ok(false);
        };

        let url = self.endpoint(network)?;
        let provider = ProviderBuilder::new().on_http(url.clone());

        let code = self
            .runtime
            .block_on(async { provider.get_code_at(address).await })
            .map_err(|e| ProbeError::Rpc {
                url: url.to_string(),
                message: e.to_string(),
            })?;

        debug!("{} bytes of code at {} on {}", code.len(), address, network.name);
        Ok(!code.is_empty())
    }
}
